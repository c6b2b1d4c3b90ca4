use std::path::{Path, PathBuf};

use iconswap_core::replace::{self, ReplaceEvent, ReplacementResult};
use iconswap_core::{IconKind, IconRequest, Platform, RequestError};
use log::debug;

/// Selections gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub project_root: Option<PathBuf>,
    pub platforms: Vec<Platform>,
    pub png: Option<PathBuf>,
    pub icns: Option<PathBuf>,
    pub ico: Option<PathBuf>,
}

/// Build a request from an optional request file plus command-line selections.
///
/// Values given on the command line override the file: a project root
/// replaces the file's, platforms and sources are added to it.
pub fn build_request(
    request_file: Option<&Path>,
    selection: Selection,
) -> Result<IconRequest, RequestError> {
    let mut request = match request_file {
        Some(path) => IconRequest::load(path)?,
        None => IconRequest::default(),
    };

    if let Some(root) = selection.project_root {
        request.project_root = root;
    }
    request.platforms.extend(selection.platforms);

    let sources = [
        (IconKind::Png, selection.png),
        (IconKind::Icns, selection.icns),
        (IconKind::Ico, selection.ico),
    ];
    for (kind, path) in sources {
        if let Some(path) = path {
            request.sources.insert(kind, path);
        }
    }

    Ok(request)
}

/// Summary of a finished run.
pub struct ReplaceSummary {
    pub results: Vec<ReplacementResult>,
}

impl ReplaceSummary {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded())
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded()).count()
    }
}

pub fn run(request: &IconRequest) -> Result<ReplaceSummary, RequestError> {
    let results = replace::replace_all_with_progress(request, |event| {
        if let ReplaceEvent::PlatformStarted { platform } = event {
            debug!("replacing {} icons", platform);
        }
    })?;
    Ok(ReplaceSummary { results })
}
