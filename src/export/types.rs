//! Data types for saving exported images.

use super::file::expand_tilde;
use crate::config::ExportConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Where and under what name exported images are saved.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for SaveOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: "png".to_string(),
        }
    }
}

/// Errors that can occur while saving an exported image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] cairo::IoError),
}
