pub mod file_ops;
pub mod hash;
pub mod pattern;
