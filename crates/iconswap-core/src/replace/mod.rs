mod branch;
pub mod copy;
mod error;
pub mod plan;
pub mod resize;
mod result;
pub mod runner;
pub mod validate;

// Re-export public items
pub use branch::replace_platform;
pub use copy::copy_icon;
pub use error::ReplaceError;
pub use resize::{ResizeReport, resize_square_image};
pub use result::{FileOutcome, FileWrite, Outcome, ReplaceEvent, ReplacementResult};
pub use runner::{IconReplacer, replace_all, replace_all_with_progress};
pub use validate::validate_source;
