//! Saving exported pictures to disk as PNG.
//!
//! The surface produces an in-memory [`cairo::ImageSurface`]; this module
//! picks a destination and encodes it.

pub mod file;
pub mod types;

pub use file::{save_image, write_png};
pub use types::{ExportError, SaveOptions};
