use std::path::{Path, PathBuf};

use crate::platform::{Platform, PlatformTarget};
use crate::utils::pattern;

/// Destination files a platform branch would touch under `project_root`.
///
/// Fixed-path targets are listed whether or not they exist yet; pattern
/// targets only list files that are present. Directories that are missing or
/// unreadable contribute nothing.
pub fn destinations(platform: Platform, project_root: &Path) -> Vec<PathBuf> {
    match platform.target() {
        PlatformTarget::File { path } => vec![project_root.join(path)],
        PlatformTarget::ResizeEach { dir, pattern } => {
            pattern::matching_files(&project_root.join(dir), pattern).unwrap_or_default()
        }
        PlatformTarget::Densities { roots } => roots
            .iter()
            .flat_map(|root| {
                pattern::matching_dirs(&project_root.join(root.res_dir), root.dir_pattern)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|bucket| bucket.join(root.file_name))
                    .filter(|icon| icon.is_file())
            })
            .collect(),
    }
}
