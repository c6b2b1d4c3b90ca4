use crate::platform::IconKind;
use crate::replace::error::ReplaceError;
use std::path::Path;

/// Check that a source icon exists and carries the exact expected extension.
///
/// The extension comparison is case-sensitive: `icon.PNG` is not a `.png`.
pub fn validate_source(path: &Path, expected: IconKind) -> Result<(), ReplaceError> {
    if !path.is_file() {
        return Err(ReplaceError::FileMissing(path.to_path_buf()));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == expected.extension() => Ok(()),
        _ => Err(ReplaceError::ExtensionMismatch {
            path: path.to_path_buf(),
            expected,
        }),
    }
}

/// Check that a destination icon directory exists.
pub fn validate_icon_dir(dir: &Path) -> Result<(), ReplaceError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ReplaceError::DirectoryMissing(dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_matching_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Icon.icns");
        fs::write(&path, b"icns").unwrap();

        assert!(validate_source(&path, IconKind::Icns).is_ok());
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Icon.icns");

        let result = validate_source(&path, IconKind::Icns);
        assert_eq!(result, Err(ReplaceError::FileMissing(path)));
    }

    #[test]
    fn rejects_directory_as_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.png");
        fs::create_dir(&path).unwrap();

        assert!(matches!(
            validate_source(&path, IconKind::Png),
            Err(ReplaceError::FileMissing(_))
        ));
    }

    #[test]
    fn rejects_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, b"png").unwrap();

        assert_eq!(
            validate_source(&path, IconKind::Ico),
            Err(ReplaceError::ExtensionMismatch {
                path,
                expected: IconKind::Ico
            })
        );
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ICON.PNG");
        fs::write(&path, b"png").unwrap();

        assert!(matches!(
            validate_source(&path, IconKind::Png),
            Err(ReplaceError::ExtensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_missing_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon");
        fs::write(&path, b"png").unwrap();

        assert!(matches!(
            validate_source(&path, IconKind::Png),
            Err(ReplaceError::ExtensionMismatch { .. })
        ));
    }

    #[test]
    fn icon_dir_must_be_directory() {
        let dir = tempdir().unwrap();
        assert!(validate_icon_dir(dir.path()).is_ok());

        let file = dir.path().join("ios");
        fs::write(&file, b"").unwrap();
        assert_eq!(
            validate_icon_dir(&file),
            Err(ReplaceError::DirectoryMissing(file))
        );
    }
}
