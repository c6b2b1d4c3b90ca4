//! Platform definitions and the fixed icon destinations inside a native project.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform whose application icon can be replaced.
///
/// The derived ordering is the order platforms are processed in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Mac,
    Windows,
}

impl Platform {
    /// All platforms, in processing order.
    pub const ALL: [Platform; 4] = [
        Platform::Ios,
        Platform::Android,
        Platform::Mac,
        Platform::Windows,
    ];

    /// Parse a platform name.
    pub fn parse(name: &str) -> Option<Platform> {
        match name.to_lowercase().as_str() {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            "mac" | "macos" | "osx" => Some(Platform::Mac),
            "windows" | "win" | "win32" => Some(Platform::Windows),
            _ => None,
        }
    }

    /// The kind of source image this platform consumes.
    pub fn icon_kind(&self) -> IconKind {
        match self {
            Platform::Ios | Platform::Android => IconKind::Png,
            Platform::Mac => IconKind::Icns,
            Platform::Windows => IconKind::Ico,
        }
    }

    /// Where this platform's icons live, relative to the project root.
    pub fn target(&self) -> &'static PlatformTarget {
        match self {
            Platform::Ios => &IOS_TARGET,
            Platform::Android => &ANDROID_TARGET,
            Platform::Mac => &MAC_TARGET,
            Platform::Windows => &WINDOWS_TARGET,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "Android"),
            Platform::Mac => write!(f, "Mac"),
            Platform::Windows => write!(f, "Windows"),
        }
    }
}

/// Source image kind. Selects the request field and the required extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Png,
    Icns,
    Ico,
}

impl IconKind {
    pub const ALL: [IconKind; 3] = [IconKind::Png, IconKind::Icns, IconKind::Ico];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            IconKind::Png => "png",
            IconKind::Icns => "icns",
            IconKind::Ico => "ico",
        }
    }

    pub fn parse(name: &str) -> Option<IconKind> {
        match name.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Some(IconKind::Png),
            "icns" => Some(IconKind::Icns),
            "ico" => Some(IconKind::Ico),
            _ => None,
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// A resource root searched for Android launcher icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidResRoot {
    /// Resource directory relative to the project root
    pub res_dir: &'static str,
    /// Pattern matched against density-qualified subdirectory names
    pub dir_pattern: &'static str,
    /// Icon file name inside each matching subdirectory
    pub file_name: &'static str,
}

/// Static destination description for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTarget {
    /// A single file overwritten with a plain copy of the source.
    File { path: &'static str },
    /// Every file in `dir` matching `pattern` is resized from the source.
    ResizeEach {
        dir: &'static str,
        pattern: &'static str,
    },
    /// Density buckets under one or more resource roots.
    Densities { roots: &'static [AndroidResRoot] },
}

pub const MAC_ICON_PATH: &str = "frameworks/runtime-src/proj.ios_mac/mac/Icon.icns";
pub const WINDOWS_ICON_PATH: &str = "frameworks/runtime-src/proj.win32/res/game.ico";
pub const IOS_ICON_DIR: &str = "frameworks/runtime-src/proj.ios_mac/ios";
pub const IOS_ICON_PATTERN: &str = "Icon-*.png";

pub const ANDROID_RES_ROOTS: &[AndroidResRoot] = &[
    AndroidResRoot {
        res_dir: "frameworks/runtime-src/proj.android/res",
        dir_pattern: "drawable*",
        file_name: "icon.png",
    },
    AndroidResRoot {
        res_dir: "frameworks/runtime-src/proj.android-studio/app/res",
        dir_pattern: "mipmap*",
        file_name: "ic_launcher.png",
    },
];

pub const MAC_TARGET: PlatformTarget = PlatformTarget::File {
    path: MAC_ICON_PATH,
};

pub const WINDOWS_TARGET: PlatformTarget = PlatformTarget::File {
    path: WINDOWS_ICON_PATH,
};

pub const IOS_TARGET: PlatformTarget = PlatformTarget::ResizeEach {
    dir: IOS_ICON_DIR,
    pattern: IOS_ICON_PATTERN,
};

pub const ANDROID_TARGET: PlatformTarget = PlatformTarget::Densities {
    roots: ANDROID_RES_ROOTS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_platform_works() {
        assert_eq!(Platform::parse("ios"), Some(Platform::Ios));
        assert_eq!(Platform::parse("iOS"), Some(Platform::Ios));
        assert_eq!(Platform::parse("macos"), Some(Platform::Mac));
        assert_eq!(Platform::parse("win"), Some(Platform::Windows));
        assert_eq!(Platform::parse("linux"), None);
    }

    #[test]
    fn all_is_in_processing_order() {
        let mut sorted = Platform::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Platform::ALL.to_vec());
        assert_eq!(Platform::ALL[0], Platform::Ios);
        assert_eq!(Platform::ALL[3], Platform::Windows);
    }

    #[test]
    fn platforms_consume_expected_kinds() {
        assert_eq!(Platform::Ios.icon_kind(), IconKind::Png);
        assert_eq!(Platform::Android.icon_kind(), IconKind::Png);
        assert_eq!(Platform::Mac.icon_kind(), IconKind::Icns);
        assert_eq!(Platform::Windows.icon_kind(), IconKind::Ico);
    }

    #[test]
    fn parse_kind_accepts_leading_dot() {
        assert_eq!(IconKind::parse(".icns"), Some(IconKind::Icns));
        assert_eq!(IconKind::parse("PNG"), Some(IconKind::Png));
        assert_eq!(IconKind::parse("bmp"), None);
        assert_eq!(IconKind::Ico.to_string(), ".ico");
    }

    #[test]
    fn targets_match_platforms() {
        assert_eq!(
            Platform::Mac.target(),
            &PlatformTarget::File { path: MAC_ICON_PATH }
        );
        assert!(matches!(
            Platform::Ios.target(),
            PlatformTarget::ResizeEach { pattern: "Icon-*.png", .. }
        ));
        match Platform::Android.target() {
            PlatformTarget::Densities { roots } => assert_eq!(roots.len(), 2),
            other => panic!("unexpected target {:?}", other),
        }
    }
}
