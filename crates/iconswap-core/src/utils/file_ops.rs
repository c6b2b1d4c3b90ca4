use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `dest` with `data`.
///
/// The bytes are written to a temporary file next to `dest` and renamed over
/// it, so readers see either the old file or the complete new one. The parent
/// directory must already exist. An existing `dest` keeps its permissions.
pub fn write_atomic(dest: &Path, data: &[u8]) -> io::Result<()> {
    write_atomic_like(dest, data, None)
}

/// Like [`write_atomic`], but a `dest` that does not exist yet takes the
/// permissions of `template`.
pub fn write_atomic_like(dest: &Path, data: &[u8], template: Option<&Path>) -> io::Result<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let permissions = permissions_for(dest, template)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Permissions the replacement file should carry, if any are known.
fn permissions_for(dest: &Path, template: Option<&Path>) -> io::Result<Option<Permissions>> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.permissions())),
        // Not a file: the rename below reports the real error
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match template {
            Some(template) => Ok(Some(fs::metadata(template)?.permissions())),
            None => Ok(None),
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_new_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("game.ico");

        write_atomic(&dest, b"ico data").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"ico data");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("Icon.icns");
        fs::write(&dest, b"old icon with longer content").unwrap();

        write_atomic(&dest, b"new icon").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new icon");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("Icon-20.png");

        write_atomic(&dest, b"png").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("Icon-20.png")]);
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("proj.win32/res/game.ico");

        assert!(write_atomic(&dest, b"ico").is_err());
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_destination_mode() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("Icon.icns");
        fs::write(&dest, b"old").unwrap();
        set_mode(&dest, 0o644);

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new");
        assert_eq!(mode(&dest), 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_takes_template_mode() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("master.ico");
        let dest = dir.path().join("game.ico");
        fs::write(&template, b"ico").unwrap();
        set_mode(&template, 0o640);

        write_atomic_like(&dest, b"ico", Some(&template)).unwrap();

        assert_eq!(mode(&dest), 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn existing_destination_wins_over_template() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("master.ico");
        let dest = dir.path().join("game.ico");
        fs::write(&template, b"ico").unwrap();
        fs::write(&dest, b"old").unwrap();
        set_mode(&template, 0o600);
        set_mode(&dest, 0o664);

        write_atomic_like(&dest, b"ico", Some(&template)).unwrap();

        assert_eq!(mode(&dest), 0o664);
    }
}
