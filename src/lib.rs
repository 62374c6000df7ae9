//! Library exports for the photomark annotation surface.
//!
//! Exposes the drawing surface together with the configuration, export and
//! scripting layers so that hosts other than the bundled CLI (and tools such
//! as the schema dumper) can share them.

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod input;
pub mod script;
pub mod surface;
pub mod util;

pub use config::Config;
pub use error::SurfaceError;
pub use surface::DrawingSurface;
