use crate::platform::Platform;
use crate::replace::error::ReplaceError;
use std::fmt;
use std::path::PathBuf;

/// What happened to a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileWrite {
    /// Source copied verbatim
    Copied { bytes: u64 },
    /// Source resized to a `size`x`size` PNG
    Resized { size: u32 },
}

impl fmt::Display for FileWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileWrite::Copied { bytes } => write!(f, "copied {} bytes", bytes),
            FileWrite::Resized { size } => write!(f, "resized to {}x{}", size, size),
        }
    }
}

/// Outcome for a single destination file within a platform branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileWrite, ReplaceError>,
}

/// Platform-level verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every destination was written
    Replaced,
    /// Nothing was written on purpose
    NoOp,
    /// The branch failed; for multi-file branches, the first failure
    Failed(ReplaceError),
}

/// Result of replacing one platform's icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementResult {
    pub platform: Platform,
    pub outcome: Outcome,
    /// Human-readable summary
    pub message: String,
    /// Non-fatal problems, such as upscaled icons
    pub warnings: Vec<String>,
    pub files: Vec<FileOutcome>,
}

impl ReplacementResult {
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn error(&self) -> Option<&ReplaceError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Destination files that could not be written.
    pub fn failed_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.result.is_err())
    }
}

impl fmt::Display for ReplacementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.platform, self.message)
    }
}

/// Progress event emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceEvent {
    /// A platform branch has started
    PlatformStarted { platform: Platform },
    /// A destination file was written
    FileReplaced {
        platform: Platform,
        path: PathBuf,
        write: FileWrite,
    },
    /// A destination file could not be written; the branch continues
    FileFailed {
        platform: Platform,
        path: PathBuf,
        error: ReplaceError,
    },
    /// Something worth telling the user that did not stop the branch
    Warning { platform: Platform, message: String },
    /// A platform branch has finished
    PlatformFinished {
        platform: Platform,
        succeeded: bool,
        message: String,
    },
}
