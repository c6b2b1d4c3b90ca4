pub mod check;
pub mod replace;
pub mod resize;
pub mod targets;
