//! Comments out `console.log(...)` call sites in JavaScript sources.
//!
//! This is a pattern substitution, not a parser: a call spanning lines with an
//! inner `;`, or a call with no terminating `;`, is matched only up to the first
//! `;` it finds. A byte order mark counts as leading whitespace, so a call at
//! the very start of a BOM-prefixed file is commented too.
//!
//! A file that cannot be read as UTF-8 is skipped with a warning and the walk
//! carries on.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// File name endings the stripper rewrites.
pub const SOURCE_EXTENSIONS: [&str; 2] = [".js", ".jsx"];

fn console_log_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(^|[\s\x{FEFF}])(console\.log\([^;]*;?)")
            .expect("console.log pattern is valid")
    })
}

/// Counts from one stripping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripReport {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub calls_commented: usize,
    /// Files left untouched because they could not be read
    pub skipped: Vec<BoundaryWarning>,
}

/// Rewrites `source`, prefixing each matched call with `//` and keeping the whitespace before it.
///
/// Returns the new text and the number of call sites commented.
///
/// # Example
/// ```ignore
/// let (out, n) = comment_console_logs("    console.log(\"x\");");
/// assert_eq!(out, "    //console.log(\"x\");");
/// ```
pub fn comment_console_logs(source: &str) -> (String, usize) {
    let pattern = console_log_pattern();
    let count = pattern.find_iter(source).count();
    if count == 0 {
        return (source.to_string(), 0);
    }
    let rewritten = pattern.replace_all(source, "${1}//${2}").into_owned();
    (rewritten, count)
}

/// Rewrites one file in place. The file is written back even when nothing matched.
pub fn strip_file(path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let (rewritten, count) = comment_console_logs(&content);
    fs::write(path, rewritten)?;
    tracing::debug!(path = %path.display(), count, "stripped console.log calls");
    Ok(count)
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Walks `root` recursively and strips every `.js`/`.jsx` file.
pub fn strip_tree(root: &Path) -> Result<StripReport> {
    let mut report = StripReport::default();
    walk(root, &mut report)?;
    Ok(report)
}

fn walk(dir: &Path, report: &mut StripReport) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // Follows symlinks, so a linked directory is descended into.
        if fs::metadata(&path)?.is_dir() {
            walk(&path, report)?;
        } else if is_source_file(&path) {
            report.files_scanned += 1;
            match strip_file(&path) {
                Ok(0) => {}
                Ok(count) => {
                    report.files_changed += 1;
                    report.calls_commented += count;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping source file");
                    report.skipped.push(BoundaryWarning::UnreadableFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
