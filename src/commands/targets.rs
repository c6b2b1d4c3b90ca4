use std::path::{Path, PathBuf};

use iconswap_core::Platform;
use iconswap_core::replace::plan;

/// Destinations each platform would write under `project_root`.
///
/// With no platforms given, every platform is listed.
pub fn run(project_root: &Path, platforms: &[Platform]) -> Vec<(Platform, Vec<PathBuf>)> {
    Platform::ALL
        .into_iter()
        .filter(|p| platforms.is_empty() || platforms.contains(p))
        .map(|p| (p, plan::destinations(p, project_root)))
        .collect()
}
