use crate::platform::IconKind;
use std::fmt;
use std::path::PathBuf;

/// Error type for a single platform branch or destination file.
///
/// None of these abort a run; they are recorded in the platform's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// No source path was supplied for the kind this platform consumes
    SourceMissing(IconKind),
    /// Source file does not exist
    FileMissing(PathBuf),
    /// Source file has the wrong extension
    ExtensionMismatch { path: PathBuf, expected: IconKind },
    /// Destination icon directory is absent or not a directory
    DirectoryMissing(PathBuf),
    /// Destination icon directory has no file matching the icon pattern
    NoMatchingIcons { dir: PathBuf, pattern: String },
    /// Image dimensions could not be read
    ReadMetadataFailed { path: PathBuf, reason: String },
    /// Decoding, resizing, encoding or writing an image failed
    ResizeFailed { path: PathBuf, reason: String },
    /// Copying a file failed
    CopyFailed { path: PathBuf, reason: String },
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceError::SourceMissing(kind) => {
                write!(f, "no {} file selected", kind)
            }
            ReplaceError::FileMissing(path) => {
                write!(f, "file not found: '{}'", path.display())
            }
            ReplaceError::ExtensionMismatch { path, expected } => {
                write!(
                    f,
                    "extension mismatch for '{}': expected a {} file",
                    path.display(),
                    expected
                )
            }
            ReplaceError::DirectoryMissing(path) => {
                write!(f, "icon directory not found: '{}'", path.display())
            }
            ReplaceError::NoMatchingIcons { dir, pattern } => {
                write!(
                    f,
                    "no icons matching '{}' in '{}'",
                    pattern,
                    dir.display()
                )
            }
            ReplaceError::ReadMetadataFailed { path, reason } => {
                write!(
                    f,
                    "failed to read image size of '{}': {}",
                    path.display(),
                    reason
                )
            }
            ReplaceError::ResizeFailed { path, reason } => {
                write!(f, "resize failed for '{}': {}", path.display(), reason)
            }
            ReplaceError::CopyFailed { path, reason } => {
                write!(f, "copy failed for '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ReplaceError {}
