//! Square icon resizing.
//!
//! The size of an existing destination icon decides the output size; the
//! source is scaled to exactly that square and written back as PNG over the
//! destination.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::{debug, warn};

use crate::replace::error::ReplaceError;
use crate::utils::file_ops::write_atomic;

/// Result of one successful resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    /// Side length of the written square icon
    pub size: u32,
    /// Non-fatal problems noticed along the way
    pub warnings: Vec<String>,
}

/// Resize `src` to the size of the icon currently at `dest` and overwrite it.
pub fn resize_square_image(src: &Path, dest: &Path) -> Result<ResizeReport, ReplaceError> {
    let source = load_source(src)?;
    resize_loaded(&source, src, dest)
}

/// Like [`resize_square_image`], for a source image that is already decoded.
///
/// `src` is only used to name the source in warnings. If the write fails,
/// warnings noticed beforehand are logged since the report is not returned.
pub fn resize_loaded(
    source: &DynamicImage,
    src: &Path,
    dest: &Path,
) -> Result<ResizeReport, ReplaceError> {
    let report = plan_resize(source, src, dest)?;
    if let Err(e) = write_resized(source, dest, report.size) {
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        return Err(e);
    }
    Ok(report)
}

/// Decode a source image.
pub fn load_source(src: &Path) -> Result<DynamicImage, ReplaceError> {
    image::image_dimensions(src).map_err(|e| ReplaceError::ReadMetadataFailed {
        path: src.to_path_buf(),
        reason: e.to_string(),
    })?;

    image::open(src).map_err(|e| ReplaceError::ResizeFailed {
        path: src.to_path_buf(),
        reason: format!("failed to decode source: {}", e),
    })
}

/// Output size and warnings for resizing `source` over `dest`. Writes nothing.
pub fn plan_resize(
    source: &DynamicImage,
    src: &Path,
    dest: &Path,
) -> Result<ResizeReport, ReplaceError> {
    let mut warnings = Vec::new();
    let size = target_size(dest, &mut warnings)?;

    let (width, height) = source.dimensions();
    if width != height {
        warnings.push(format!(
            "source '{}' is not square ({}x{})",
            src.display(),
            width,
            height
        ));
    }
    let source_size = width.max(height);
    if source_size < size {
        warnings.push(format!(
            "source '{}' ({}px) is smaller than '{}' ({}px), upscaling reduces quality",
            src.display(),
            source_size,
            dest.display(),
            size
        ));
    }

    Ok(ResizeReport { size, warnings })
}

/// Required output size for `dest`. Non-square icons use their longer side.
fn target_size(dest: &Path, warnings: &mut Vec<String>) -> Result<u32, ReplaceError> {
    let (width, height) =
        image::image_dimensions(dest).map_err(|e| ReplaceError::ReadMetadataFailed {
            path: dest.to_path_buf(),
            reason: e.to_string(),
        })?;

    let size = width.max(height);
    if width != height {
        warnings.push(format!(
            "'{}' is not square ({}x{}), writing {}x{}",
            dest.display(),
            width,
            height,
            size,
            size
        ));
    }
    if size == 0 {
        return Err(ReplaceError::ReadMetadataFailed {
            path: dest.to_path_buf(),
            reason: "image has no pixels".to_string(),
        });
    }
    Ok(size)
}

/// Scale `source` to a `size` square and write it over `dest` as PNG.
pub fn write_resized(source: &DynamicImage, dest: &Path, size: u32) -> Result<(), ReplaceError> {
    let resized = source.resize_exact(size, size, FilterType::Lanczos3);
    let mut encoded = Cursor::new(Vec::new());
    resized
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| ReplaceError::ResizeFailed {
            path: dest.to_path_buf(),
            reason: format!("failed to encode PNG: {}", e),
        })?;

    write_atomic(dest, encoded.get_ref()).map_err(|e| ReplaceError::ResizeFailed {
        path: dest.to_path_buf(),
        reason: format!("failed to write: {}", e),
    })?;

    debug!("resized {} to {}x{}", dest.display(), size, size);
    Ok(())
}
