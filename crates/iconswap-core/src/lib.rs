//! Replace application icons in a generated native project.
//!
//! Given an [`IconRequest`] naming a project root, the platforms to update
//! and the source images, [`IconReplacer`] copies `.icns`/`.ico` files to
//! their fixed Mac/Windows locations and resizes a master PNG into every
//! existing iOS icon size.

pub mod platform;
pub mod replace;
pub mod request;
pub mod utils;

pub use platform::{IconKind, Platform, PlatformTarget};
pub use replace::{IconReplacer, Outcome, ReplaceError, ReplaceEvent, ReplacementResult};
pub use request::{IconRequest, RequestError};
