//! Writing exported images to disk.

use super::types::{ExportError, SaveOptions};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when possible.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encode `image` as PNG at `path`, readable by the owner only.
pub fn write_png(image: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    image.write_to_png(&mut writer)?;
    writer.into_inner().map_err(|err| err.into_error())?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Save an exported image under a timestamped name in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_image(
    image: &cairo::ImageSurface,
    options: &SaveOptions,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&options.save_directory)?;
    let filename = generate_filename(&options.filename_template, &options.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving {}x{} image to: {}",
        image.width(),
        image.height(),
        file_path.display()
    );
    write_png(image, &file_path)?;
    log::info!("Image saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> cairo::ImageSurface {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 8, 4).unwrap();
        {
            let ctx = cairo::Context::new(&image).unwrap();
            ctx.set_source_rgb(1.0, 1.0, 1.0);
            ctx.paint().unwrap();
        }
        image
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("draw_%Y%m%d", "png");
        assert!(filename.starts_with("draw_20"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "draw_YYYYMMDD.png".len());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_options() {
        let options = SaveOptions::default();
        assert_eq!(options.format, "png");
        assert!(
            options
                .save_directory
                .to_string_lossy()
                .contains("Photomark")
        );
    }

    #[test]
    fn save_image_creates_directory_and_png() {
        let temp = tempfile::tempdir().unwrap();
        let options = SaveOptions {
            save_directory: temp.path().join("nested").join("out"),
            filename_template: "shot".to_string(),
            format: "png".to_string(),
        };

        let path = save_image(&test_image(), &options).unwrap();
        assert_eq!(path.file_name().unwrap(), "shot.png");

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = cairo::ImageSurface::create_from_png(&mut bytes.as_slice()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));
    }

    #[cfg(unix)]
    #[test]
    fn write_png_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("private.png");
        write_png(&test_image(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn write_png_into_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing").join("out.png");
        assert!(matches!(
            write_png(&test_image(), &path),
            Err(ExportError::SaveError(_))
        ));
    }
}
