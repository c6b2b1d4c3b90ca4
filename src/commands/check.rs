use std::path::Path;

use iconswap_core::IconKind;
use iconswap_core::replace::{ReplaceError, validate_source};

pub enum CheckResult {
    Valid,
    Invalid { error: ReplaceError },
}

/// Check whether `file` is usable as a source icon of `kind`.
pub fn run(file: &Path, kind: IconKind) -> CheckResult {
    match validate_source(file, kind) {
        Ok(()) => CheckResult::Valid,
        Err(error) => CheckResult::Invalid { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn matching_kind_is_valid() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("game.ico");
        fs::write(&file, b"\x00\x00\x01\x00").unwrap();

        assert!(matches!(run(&file, IconKind::Ico), CheckResult::Valid));
    }

    #[test]
    fn other_kind_is_invalid() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("game.ico");
        fs::write(&file, b"\x00\x00\x01\x00").unwrap();

        match run(&file, IconKind::Icns) {
            CheckResult::Invalid { error } => {
                assert!(matches!(error, ReplaceError::ExtensionMismatch { .. }))
            }
            CheckResult::Valid => panic!("Expected Invalid"),
        }
    }

    #[test]
    fn nonexistent_file_is_invalid() {
        let result = run(Path::new("/nonexistent/Icon.icns"), IconKind::Icns);

        assert!(matches!(
            result,
            CheckResult::Invalid {
                error: ReplaceError::FileMissing(_)
            }
        ));
    }
}
