use std::path::Path;

use iconswap_core::IconKind;
use iconswap_core::replace::{ReplaceError, ResizeReport, resize_square_image, validate_source};

/// Resize a PNG over an existing icon, keeping the icon's current size.
pub fn run(src: &Path, dest: &Path) -> Result<ResizeReport, ReplaceError> {
    validate_source(src, IconKind::Png)?;
    resize_square_image(src, dest)
}
