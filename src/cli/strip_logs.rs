use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PathsConfig;
use crate::paths;
use crate::strip::{self, StripReport};
use crate::ui;

/// Runs the `strip-logs` command over the configured source directory.
pub fn run(root: &Path, config: &PathsConfig) -> Result<StripReport> {
    let source = paths::resolve(root, &config.source_dir);
    ui::display_status(&format!("Scanning {}", source.display()));

    let report = strip::strip_tree(&source)
        .with_context(|| format!("Cannot strip console.log calls under {}", source.display()))?;

    for warning in &report.skipped {
        ui::display_boundary_warning(warning);
    }
    ui::display_success(&ui::format_strip_report(&report));
    Ok(report)
}
