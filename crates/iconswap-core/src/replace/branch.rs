//! Per-platform replacement branches.
//!
//! Each branch resolves its destinations from the platform's fixed target
//! description, never from user input, and records per-file outcomes without
//! stopping at the first failure.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::platform::{IconKind, Platform, PlatformTarget};
use crate::replace::copy::copy_icon;
use crate::replace::error::ReplaceError;
use crate::replace::plan;
use crate::replace::resize::{load_source, plan_resize, write_resized};
use crate::replace::result::{FileOutcome, FileWrite, Outcome, ReplaceEvent, ReplacementResult};
use crate::replace::validate::{validate_icon_dir, validate_source};
use crate::request::IconRequest;
use crate::utils::pattern;

/// Collects outcomes for one branch and forwards them to the log and the caller.
struct Reporter<'a> {
    platform: Platform,
    on_event: &'a mut dyn FnMut(ReplaceEvent),
    warnings: Vec<String>,
    files: Vec<FileOutcome>,
}

impl<'a> Reporter<'a> {
    fn new(platform: Platform, on_event: &'a mut dyn FnMut(ReplaceEvent)) -> Self {
        Reporter {
            platform,
            on_event,
            warnings: Vec::new(),
            files: Vec::new(),
        }
    }

    fn warn(&mut self, message: String) {
        warn!("{}: {}", self.platform, message);
        (self.on_event)(ReplaceEvent::Warning {
            platform: self.platform,
            message: message.clone(),
        });
        self.warnings.push(message);
    }

    fn replaced(&mut self, path: PathBuf, write: FileWrite) {
        info!("{}: {} ({})", self.platform, path.display(), write);
        (self.on_event)(ReplaceEvent::FileReplaced {
            platform: self.platform,
            path: path.clone(),
            write,
        });
        self.files.push(FileOutcome {
            path,
            result: Ok(write),
        });
    }

    fn failed(&mut self, path: PathBuf, error: ReplaceError) {
        warn!("{}: {}", self.platform, error);
        (self.on_event)(ReplaceEvent::FileFailed {
            platform: self.platform,
            path: path.clone(),
            error: error.clone(),
        });
        self.files.push(FileOutcome {
            path,
            result: Err(error),
        });
    }

    fn finish(self, outcome: Outcome, message: String) -> ReplacementResult {
        let succeeded = !matches!(outcome, Outcome::Failed(_));
        if succeeded {
            info!("{}: {}", self.platform, message);
        } else {
            warn!("{}: {}", self.platform, message);
        }
        (self.on_event)(ReplaceEvent::PlatformFinished {
            platform: self.platform,
            succeeded,
            message: message.clone(),
        });
        ReplacementResult {
            platform: self.platform,
            outcome,
            message,
            warnings: self.warnings,
            files: self.files,
        }
    }
}

/// Replace the icons of one platform.
///
/// Never panics or returns early: every failure is captured in the result.
/// A platform that is not enabled in `request` is left untouched.
pub fn replace_platform(platform: Platform, request: &IconRequest) -> ReplacementResult {
    replace_platform_with_progress(platform, request, &mut |_| {})
}

pub(crate) fn replace_platform_with_progress(
    platform: Platform,
    request: &IconRequest,
    on_event: &mut dyn FnMut(ReplaceEvent),
) -> ReplacementResult {
    let mut reporter = Reporter::new(platform, on_event);

    if !request.is_enabled(platform) {
        return reporter.finish(
            Outcome::NoOp,
            format!("{} is not enabled, nothing replaced", platform),
        );
    }

    (reporter.on_event)(ReplaceEvent::PlatformStarted { platform });

    let branch = match platform.target() {
        PlatformTarget::File { path } => {
            copy_branch(request, platform.icon_kind(), path, &mut reporter)
        }
        PlatformTarget::ResizeEach { dir, pattern } => {
            resize_branch(request, platform.icon_kind(), dir, pattern, &mut reporter)
        }
        PlatformTarget::Densities { .. } => Ok(density_placeholder(request, &mut reporter)),
    };

    match branch {
        Ok((outcome, message)) => reporter.finish(outcome, message),
        Err(e) => {
            let message = e.to_string();
            reporter.finish(Outcome::Failed(e), message)
        }
    }
}

/// Source path for `kind`, validated for existence and extension.
fn checked_source(request: &IconRequest, kind: IconKind) -> Result<&Path, ReplaceError> {
    let src = request
        .source(kind)
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ReplaceError::SourceMissing(kind))?;
    validate_source(src, kind)?;
    Ok(src)
}

/// Single fixed destination, overwritten with a verbatim copy.
fn copy_branch(
    request: &IconRequest,
    kind: IconKind,
    relative: &str,
    reporter: &mut Reporter<'_>,
) -> Result<(Outcome, String), ReplaceError> {
    let src = checked_source(request, kind)?;
    let dest = request.project_root.join(relative);

    match copy_icon(src, &dest) {
        Ok(bytes) => {
            reporter.replaced(dest.clone(), FileWrite::Copied { bytes });
            Ok((
                Outcome::Replaced,
                format!("replaced {} with {}", dest.display(), src.display()),
            ))
        }
        Err(e) => {
            reporter.failed(dest, e.clone());
            Err(e)
        }
    }
}

/// Every icon matching `pattern` in `dir` is resized from one source.
fn resize_branch(
    request: &IconRequest,
    kind: IconKind,
    dir: &str,
    pattern: &str,
    reporter: &mut Reporter<'_>,
) -> Result<(Outcome, String), ReplaceError> {
    let src = checked_source(request, kind)?;
    let icon_dir = request.project_root.join(dir);
    validate_icon_dir(&icon_dir)?;

    let targets = pattern::matching_files(&icon_dir, pattern).map_err(|e| {
        ReplaceError::ReadMetadataFailed {
            path: icon_dir.clone(),
            reason: format!("failed to list icons: {}", e),
        }
    })?;
    if targets.is_empty() {
        return Err(ReplaceError::NoMatchingIcons {
            dir: icon_dir,
            pattern: pattern.to_string(),
        });
    }

    let source = load_source(src)?;

    let total = targets.len();
    let mut first_error = None;
    let mut failures = 0;
    for target in targets {
        // Warnings are reported before writing so a failed write keeps them
        let written = plan_resize(&source, src, &target).and_then(|plan| {
            for warning in plan.warnings {
                reporter.warn(warning);
            }
            write_resized(&source, &target, plan.size).map(|()| plan.size)
        });
        match written {
            Ok(size) => reporter.replaced(target, FileWrite::Resized { size }),
            Err(e) => {
                failures += 1;
                if first_error.is_none() {
                    first_error = Some(e.clone());
                }
                reporter.failed(target, e);
            }
        }
    }

    match first_error {
        None => Ok((
            Outcome::Replaced,
            format!("resized {} icons in {}", total, icon_dir.display()),
        )),
        Some(e) => Ok((
            Outcome::Failed(e),
            format!(
                "{} of {} icons in {} failed",
                failures,
                total,
                icon_dir.display()
            ),
        )),
    }
}

/// Density-bucket replacement is not implemented; report what would be touched.
fn density_placeholder(request: &IconRequest, reporter: &mut Reporter<'_>) -> (Outcome, String) {
    let existing = plan::destinations(reporter.platform, &request.project_root).len();
    reporter.warn(format!(
        "icon replacement is not implemented, {} existing launcher icon(s) left unchanged",
        existing
    ));
    (
        Outcome::NoOp,
        "not implemented, no icons replaced".to_string(),
    )
}
