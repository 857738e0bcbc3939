//! Component scaffolding: a `<Name>.jsx` / `<Name>.module.scss` pair.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FrontkitError, Result};
use crate::paths;

/// Everything the scaffolder needs, resolved to absolute paths.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'a> {
    pub name: &'a str,
    pub target_dir: &'a Path,
    pub main_stylesheet: &'a Path,
    pub template: &'a str,
    pub placeholder: &'a str,
}

/// Per-artifact outcome. A failed artifact never rolls back the other one.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub component: Result<PathBuf>,
    pub stylesheet: Result<PathBuf>,
}

impl ScaffoldReport {
    pub fn is_complete(&self) -> bool {
        self.component.is_ok() && self.stylesheet.is_ok()
    }
}

/// Where the user wants the component placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// `<components_dir>/<name>`
    Default,
    /// `<source_dir><custom>/<name>`, with `custom` typed without the source directory
    Custom(String),
}

/// Computes the target directory for `name` under `root`.
///
/// The custom position is appended to the source directory as typed, so
/// `/pages/home` lands in `src/pages/home/<name>`.
pub fn target_dir(
    root: &Path,
    source_dir: &Path,
    components_dir: &Path,
    placement: &Placement,
    name: &str,
) -> PathBuf {
    let relative = match placement {
        Placement::Default => components_dir.join(name),
        Placement::Custom(custom) => {
            let mut dir = source_dir.as_os_str().to_os_string();
            dir.push(custom);
            PathBuf::from(dir).join(name)
        }
    };
    paths::resolve(root, &relative)
}

/// Fills every placeholder in the template with the component name.
pub fn render_component(template: &str, placeholder: &str, name: &str) -> String {
    template.replace(placeholder, name)
}

/// The `@use` line pointing from `target_dir` to the global stylesheet.
pub fn stylesheet_import(target_dir: &Path, main_stylesheet: &Path) -> String {
    let relative = paths::relative(target_dir, main_stylesheet);
    format!("@use \"{}\";\n", paths::to_forward_slashes(&relative))
}

/// Writes the component file and the style module for `request`.
pub fn scaffold(request: &ScaffoldRequest<'_>) -> Result<ScaffoldReport> {
    if request.name.trim().is_empty() {
        return Err(FrontkitError::scaffold("Component Name is required"));
    }

    Ok(ScaffoldReport {
        component: write_component(request),
        stylesheet: write_stylesheet(request),
    })
}

fn write_component(request: &ScaffoldRequest<'_>) -> Result<PathBuf> {
    fs::create_dir_all(request.target_dir).map_err(|e| {
        FrontkitError::scaffold(format!(
            "Error creating directory {}: {}",
            request.target_dir.display(),
            e
        ))
    })?;

    let path = request.target_dir.join(format!("{}.jsx", request.name));
    let content = render_component(request.template, request.placeholder, request.name);
    fs::write(&path, content).map_err(|e| {
        FrontkitError::scaffold(format!("Error creating file {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "component file written");
    Ok(path)
}

fn write_stylesheet(request: &ScaffoldRequest<'_>) -> Result<PathBuf> {
    fs::create_dir_all(request.target_dir).map_err(|e| {
        FrontkitError::scaffold(format!(
            "Error creating directory {}: {}",
            request.target_dir.display(),
            e
        ))
    })?;

    let path = request
        .target_dir
        .join(format!("{}.module.scss", request.name));
    fs::write(&path, "").map_err(|e| {
        FrontkitError::scaffold(format!("Error creating file {}: {}", path.display(), e))
    })?;

    let import = stylesheet_import(request.target_dir, request.main_stylesheet);
    append_import(&path, &import)?;

    tracing::debug!(path = %path.display(), import = import.trim_end(), "style module written");
    Ok(path)
}

/// Appends the `@use` line to an existing style module.
fn append_import(path: &Path, import: &str) -> Result<()> {
    OpenOptions::new()
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(import.as_bytes()))
        .map_err(|e| {
            FrontkitError::scaffold(format!(
                "Error writing import to {}: {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_COMPONENT_TEMPLATE, DEFAULT_PLACEHOLDER};

    #[test]
    fn test_render_replaces_every_placeholder() {
        let out = render_component(DEFAULT_COMPONENT_TEMPLATE, DEFAULT_PLACEHOLDER, "Card");
        assert!(!out.contains(DEFAULT_PLACEHOLDER));
        assert!(out.contains("import styles from './Card.module.scss';"));
        assert!(out.contains("const Card = () => {"));
        assert!(out.contains("export default Card;"));
    }

    #[test]
    fn test_default_target_dir() {
        let dir = target_dir(
            Path::new("/proj"),
            Path::new("src"),
            Path::new("src/components"),
            &Placement::Default,
            "Card",
        );
        assert_eq!(dir, PathBuf::from("/proj/src/components/Card"));
    }

    #[test]
    fn test_custom_target_dir_appends_to_source_dir() {
        let dir = target_dir(
            Path::new("/proj"),
            Path::new("src"),
            Path::new("src/components"),
            &Placement::Custom("/pages/home".to_string()),
            "Hero",
        );
        assert_eq!(dir, PathBuf::from("/proj/src/pages/home/Hero"));
    }

    #[test]
    fn test_stylesheet_import_line() {
        let line = stylesheet_import(
            Path::new("/proj/src/components/Card"),
            Path::new("/proj/src/styles/main.scss"),
        );
        assert_eq!(line, "@use \"../../styles/main.scss\";\n");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = ScaffoldRequest {
            name: "",
            target_dir: Path::new("/nonexistent"),
            main_stylesheet: Path::new("/nonexistent/main.scss"),
            template: DEFAULT_COMPONENT_TEMPLATE,
            placeholder: DEFAULT_PLACEHOLDER,
        };
        let err = scaffold(&request).unwrap_err();
        assert_eq!(err.to_string(), "Scaffold error: Component Name is required");
    }

    #[test]
    fn test_append_import_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Gone.module.scss");

        let err = append_import(&missing, "@use \"x\";\n").unwrap_err();

        assert!(matches!(err, FrontkitError::Scaffold(_)));
        assert!(err.to_string().contains("Error writing import to"));
        assert!(err.to_string().contains("Gone.module.scss"));
    }
}
