//! Filename wildcard matching for icon destinations.
//!
//! Supports `*` (any run of characters, including none) and `?` (exactly one
//! character). Matching is case-sensitive and never crosses directories:
//! only single path components are matched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whether `name` matches the wildcard `pattern`.
pub fn matches(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` seen and the name index it was tried against
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, n));
            p += 1;
        } else if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if let Some((star, tried)) = backtrack {
            p = star + 1;
            n = tried + 1;
            backtrack = Some((star, n));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Regular files in `dir` whose names match `pattern`, sorted by path.
pub fn matching_files(dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>> {
    matching_entries(dir, pattern, false)
}

/// Subdirectories of `dir` whose names match `pattern`, sorted by path.
pub fn matching_dirs(dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>> {
    matching_entries(dir, pattern, true)
}

fn matching_entries(dir: &Path, pattern: &str, want_dirs: bool) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Follow symlinks so linked icon files still count
        let is_match_kind = if want_dirs { path.is_dir() } else { path.is_file() };
        if !is_match_kind {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if matches(pattern, name) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn star_matches_icon_names() {
        assert!(matches("Icon-*.png", "Icon-20.png"));
        assert!(matches("Icon-*.png", "Icon-60@3x.png"));
        assert!(matches("Icon-*.png", "Icon-.png"));
        assert!(!matches("Icon-*.png", "Icon-20.jpg"));
        assert!(!matches("Icon-*.png", "AppIcon-20.png"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("Icon-*.png", "icon-20.png"));
        assert!(!matches("Icon-*.png", "Icon-20.PNG"));
    }

    #[test]
    fn prefix_patterns() {
        assert!(matches("mipmap*", "mipmap-xxhdpi"));
        assert!(matches("drawable*", "drawable"));
        assert!(!matches("drawable*", "values"));
    }

    #[test]
    fn question_mark_and_multiple_stars() {
        assert!(matches("Icon-??.png", "Icon-40.png"));
        assert!(!matches("Icon-??.png", "Icon-120.png"));
        assert!(matches("*-*.png", "Icon-Small-40.png"));
        assert!(matches("*", ""));
        assert!(!matches("?", ""));
    }

    #[test]
    fn star_is_a_wildcard_against_literal_star() {
        assert!(matches("*a", "*ba"));
        assert!(matches("Icon-*.png", "Icon-*x.png"));
        assert!(!matches("*a", "*b"));
    }

    #[test]
    fn lists_only_matching_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Icon-40.png"), b"").unwrap();
        fs::write(dir.path().join("Icon-20.png"), b"").unwrap();
        fs::write(dir.path().join("Default.png"), b"").unwrap();
        fs::create_dir(dir.path().join("Icon-dir.png")).unwrap();

        let files = matching_files(dir.path(), "Icon-*.png").unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("Icon-20.png"), dir.path().join("Icon-40.png")]
        );
    }

    #[test]
    fn lists_only_matching_dirs() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("mipmap-hdpi")).unwrap();
        fs::create_dir(dir.path().join("values")).unwrap();
        fs::write(dir.path().join("mipmap-file"), b"").unwrap();

        let dirs = matching_dirs(dir.path(), "mipmap*").unwrap();
        assert_eq!(dirs, vec![dir.path().join("mipmap-hdpi")]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matching_files(&dir.path().join("ios"), "Icon-*.png").is_err());
    }
}
