use std::path::Path;

use anyhow::{Context, Result};

use crate::config::EnvConfig;
use crate::envmerge::{self, MergeReport};
use crate::ui;

/// Runs the `merge-env` command against the project root.
pub fn run(root: &Path, config: &EnvConfig) -> Result<MergeReport> {
    let report = envmerge::merge_env_files(root, &config.fragment_prefix, &config.destination)
        .with_context(|| format!("Cannot merge env fragments in {}", root.display()))?;

    for warning in &report.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_success(&format!(
        "{} has been generated with content from {} files",
        report.destination.display(),
        report.fragments.len()
    ));

    Ok(report)
}
