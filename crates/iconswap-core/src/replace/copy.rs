use std::fs;
use std::path::Path;

use log::debug;

use crate::replace::error::ReplaceError;
use crate::utils::file_ops::write_atomic_like;
use crate::utils::hash::{digest, digest_file};

/// Copy an icon byte-for-byte over `dest`, returning the number of bytes written.
///
/// Any existing destination is replaced and keeps its permissions; a new
/// destination takes the source's. The written file is hashed and
/// compared against the source before reporting success. All I/O errors are
/// returned as `CopyFailed` naming the path involved.
pub fn copy_icon(src: &Path, dest: &Path) -> Result<u64, ReplaceError> {
    let data = fs::read(src).map_err(|e| ReplaceError::CopyFailed {
        path: src.to_path_buf(),
        reason: format!("failed to read source: {}", e),
    })?;

    write_atomic_like(dest, &data, Some(src)).map_err(|e| ReplaceError::CopyFailed {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    })?;

    let expected = digest(&data);
    let actual = digest_file(dest).map_err(|e| ReplaceError::CopyFailed {
        path: dest.to_path_buf(),
        reason: format!("failed to verify copy: {}", e),
    })?;
    if actual != expected {
        return Err(ReplaceError::CopyFailed {
            path: dest.to_path_buf(),
            reason: format!("verification failed: expected hash {}, got {}", expected, actual),
        });
    }

    debug!("copied {} bytes to {}", data.len(), dest.display());
    Ok(data.len() as u64)
}
