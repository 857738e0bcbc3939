use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions reported to the user while a command keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// A bumped field went past 9; the tag cannot be bumped again
    MultiDigitField { tag: String },
    /// Neither a git tag nor a manifest version is available
    NoBaseline { manifest: PathBuf },
    /// The latest tag is missing and the manifest version is used instead
    ManifestBaseline { version: String },
    /// An entry carries the fragment prefix but is not a regular file
    FragmentNotAFile { path: PathBuf },
    /// A file could not be read as UTF-8 text and was left as it is
    UnreadableFile { path: PathBuf, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MultiDigitField { tag } => write!(
                f,
                "Tag '{}' has a field above 9; bumping it again will fail",
                tag
            ),
            BoundaryWarning::NoBaseline { manifest } => write!(
                f,
                "No git tag found and no version in '{}'; nothing to bump",
                manifest.display()
            ),
            BoundaryWarning::ManifestBaseline { version } => {
                write!(f, "No git tag found, using manifest version '{}'", version)
            }
            BoundaryWarning::FragmentNotAFile { path } => {
                write!(f, "Skipping '{}': not a regular file", path.display())
            }
            BoundaryWarning::UnreadableFile { path, reason } => {
                write!(f, "Skipping '{}': {}", path.display(), reason)
            }
        }
    }
}
