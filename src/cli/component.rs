use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::paths;
use crate::scaffold::{self, Placement, ScaffoldReport, ScaffoldRequest};
use crate::ui::{self, Choice, Prompter};

pub const PLACEMENT_CHOICES: [Choice<'static>; 2] = [
    Choice::new("default_component", "Default @components folder"),
    Choice::new("custom_position", "Custom component position"),
];

/// Runs the `component` command. Returns `None` when no name was given.
pub fn run<P: Prompter + ?Sized>(
    prompter: &mut P,
    root: &Path,
    config: &Config,
) -> Result<Option<ScaffoldReport>> {
    let name = prompter.input("Insert component name")?;
    if name.is_empty() {
        ui::display_error("Component Name is required");
        return Ok(None);
    }

    let placement = match prompter.select(
        "Where do you want to insert the component?",
        &PLACEMENT_CHOICES,
    )? {
        0 => Placement::Default,
        _ => Placement::Custom(prompter.input(&format!(
            "Insert the custom path (without '{}')",
            config.paths.source_dir.display()
        ))?),
    };

    let template = config.component.resolve_template(root)?;
    let target_dir = scaffold::target_dir(
        root,
        &config.paths.source_dir,
        &config.paths.components_dir,
        &placement,
        &name,
    );
    let main_stylesheet = paths::resolve(root, &config.paths.main_stylesheet);

    let report = scaffold::scaffold(&ScaffoldRequest {
        name: &name,
        target_dir: &target_dir,
        main_stylesheet: &main_stylesheet,
        template: &template,
        placeholder: &config.component.placeholder,
    })?;

    for artifact in [&report.component, &report.stylesheet] {
        match artifact {
            Ok(path) => ui::display_success(&format!("{} created successfully", path.display())),
            Err(e) => ui::display_error(&e.to_string()),
        }
    }

    Ok(Some(report))
}
