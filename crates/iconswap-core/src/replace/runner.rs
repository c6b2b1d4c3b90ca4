use log::info;

use crate::platform::Platform;
use crate::replace::branch::replace_platform_with_progress;
use crate::replace::result::{ReplaceEvent, ReplacementResult};
use crate::request::{IconRequest, RequestError};

/// Runs a validated request across all of its enabled platforms.
pub struct IconReplacer<'a> {
    request: &'a IconRequest,
}

impl<'a> IconReplacer<'a> {
    /// Check the request preconditions. No file is touched if this fails.
    pub fn new(request: &'a IconRequest) -> Result<Self, RequestError> {
        request.validate()?;
        Ok(IconReplacer { request })
    }

    pub fn request(&self) -> &IconRequest {
        self.request
    }

    /// Enabled platforms in processing order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        Platform::ALL
            .into_iter()
            .filter(|p| self.request.is_enabled(*p))
    }

    /// Replace one platform's icons.
    pub fn replace_platform(&self, platform: Platform) -> ReplacementResult {
        replace_platform_with_progress(platform, self.request, &mut |_| {})
    }

    /// Replace every enabled platform, one result per platform.
    pub fn replace_all(&self) -> Vec<ReplacementResult> {
        self.replace_all_with_progress(|_| {})
    }

    /// Replace every enabled platform, reporting progress to `on_event`.
    ///
    /// A failing platform never prevents the next one from running.
    pub fn replace_all_with_progress<F>(&self, mut on_event: F) -> Vec<ReplacementResult>
    where
        F: FnMut(ReplaceEvent),
    {
        let results: Vec<ReplacementResult> = self
            .platforms()
            .map(|platform| replace_platform_with_progress(platform, self.request, &mut on_event))
            .collect();

        let failed = results.iter().filter(|r| !r.succeeded()).count();
        info!(
            "replaced icons in {}: {} platform(s), {} failed",
            self.request.project_root.display(),
            results.len(),
            failed
        );
        results
    }
}

/// Validate `request` and replace icons for all of its enabled platforms.
pub fn replace_all(request: &IconRequest) -> Result<Vec<ReplacementResult>, RequestError> {
    Ok(IconReplacer::new(request)?.replace_all())
}

/// Like [`replace_all`], reporting progress to `on_event`.
pub fn replace_all_with_progress<F>(
    request: &IconRequest,
    on_event: F,
) -> Result<Vec<ReplacementResult>, RequestError>
where
    F: FnMut(ReplaceEvent),
{
    Ok(IconReplacer::new(request)?.replace_all_with_progress(on_event))
}
