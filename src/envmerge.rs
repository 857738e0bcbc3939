//! Merges `.ENV_*` fragment files into a single `.env`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// A fragment picked up from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub path: PathBuf,
    /// File name with the fragment prefix removed (`.ENV_api` -> `api`)
    pub short_name: String,
}

/// Outcome of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub destination: PathBuf,
    pub fragments: Vec<Fragment>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Lists the fragments in `dir`, ordered by file name.
///
/// Entries carrying the prefix that are not regular files are returned as warnings.
pub fn find_fragments(dir: &Path, prefix: &str) -> Result<(Vec<Fragment>, Vec<BoundaryWarning>)> {
    let mut fragments = Vec::new();
    let mut warnings = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(short_name) = file_name.strip_prefix(prefix) else {
            continue;
        };

        let path = entry.path();
        if !fs::metadata(&path)?.is_file() {
            warnings.push(BoundaryWarning::FragmentNotAFile { path });
            continue;
        }

        fragments.push(Fragment {
            short_name: short_name.to_string(),
            path,
        });
    }

    fragments.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok((fragments, warnings))
}

/// Trims every line and tags comment lines with the fragment's short name.
pub fn process_fragment(content: &str, short_name: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            let line = line.trim();
            if line.starts_with('#') {
                format!("{} {}", line, short_name)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins processed fragments, trimming the whole and ending with exactly one newline.
pub fn render(processed: &[String]) -> String {
    let mut merged = String::new();
    for fragment in processed {
        merged.push_str(fragment);
        merged.push('\n');
    }
    format!("{}\n", merged.trim())
}

/// Merges every fragment in `dir` into `dir/destination`.
///
/// An existing destination is truncated first. A fragment that cannot be read
/// as UTF-8 is left out of the merge and reported in `warnings`, so the
/// destination still receives every readable fragment.
pub fn merge_env_files(dir: &Path, prefix: &str, destination: &Path) -> Result<MergeReport> {
    let destination = dir.join(destination);
    if destination.exists() {
        fs::write(&destination, "")?;
    }

    let (found, mut warnings) = find_fragments(dir, prefix)?;

    let mut fragments = Vec::with_capacity(found.len());
    let mut processed = Vec::with_capacity(found.len());
    for fragment in found {
        match fs::read_to_string(&fragment.path) {
            Ok(content) => {
                processed.push(process_fragment(&content, &fragment.short_name));
                tracing::debug!(fragment = %fragment.path.display(), "fragment merged");
                fragments.push(fragment);
            }
            Err(e) => {
                tracing::warn!(fragment = %fragment.path.display(), error = %e, "skipping fragment");
                warnings.push(BoundaryWarning::UnreadableFile {
                    path: fragment.path,
                    reason: e.to_string(),
                });
            }
        }
    }

    fs::write(&destination, render(&processed))?;

    Ok(MergeReport {
        destination,
        fragments,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines_get_short_name() {
        assert_eq!(
            process_fragment("#comment\nKEY=1", "api"),
            "#comment api\nKEY=1"
        );
    }

    #[test]
    fn test_indented_comment_is_trimmed_then_tagged() {
        assert_eq!(
            process_fragment("   # db settings  \r\n  HOST=localhost  ", "db"),
            "# db settings db\nHOST=localhost"
        );
    }

    #[test]
    fn test_blank_lines_inside_fragment_are_kept() {
        assert_eq!(process_fragment("A=1\n\nB=2\n", "x"), "A=1\n\nB=2\n");
    }

    #[test]
    fn test_render_single_trailing_newline() {
        let processed = vec!["#comment api\nKEY=1".to_string(), "KEY2=2\n".to_string()];
        assert_eq!(render(&processed), "#comment api\nKEY=1\nKEY2=2\n");
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(&[]), "\n");
    }
}
