//! Background raster and aspect-fit placement.

use crate::error::SurfaceError;
use crate::util::Bounds;
use std::fmt;
use std::io::Read;

/// A decoded photo shown underneath the annotations.
///
/// Cloning is cheap: Cairo surfaces are reference counted.
#[derive(Clone)]
pub struct Background {
    image: cairo::ImageSurface,
}

impl fmt::Debug for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Background")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Background {
    /// Wraps an already decoded raster.
    pub fn new(image: cairo::ImageSurface) -> Self {
        Self { image }
    }

    /// Decodes a PNG stream.
    ///
    /// Decoding belongs to the host; this exists for hosts (such as the CLI)
    /// that have nothing better than Cairo's own decoder.
    pub fn from_png<R: Read>(reader: &mut R) -> Result<Self, SurfaceError> {
        let image = cairo::ImageSurface::create_from_png(reader)?;
        Ok(Self::new(image))
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }
}

/// Computes where an `img_w` x `img_h` image lands inside a view.
///
/// The image is only ever shrunk, never enlarged:
/// `scale = min(1, view_w / img_w, view_h / img_h)`.
///
/// When no shrink is needed the image keeps its native size and is centered
/// in the view. When it is shrunk, it sits at the top-left corner of the
/// view instead.
///
/// Returns `None` for images without pixels.
pub fn aspect_fit(img_w: f64, img_h: f64, view_w: f64, view_h: f64) -> Option<Bounds> {
    if img_w <= 0.0 || img_h <= 0.0 {
        return None;
    }

    let scale = (view_w / img_w).min(view_h / img_h).min(1.0);
    if scale < 1.0 {
        // Not centered: shrunk images stay anchored at the view origin.
        Some(Bounds::new(0.0, 0.0, img_w * scale, img_h * scale))
    } else {
        let left = (view_w - img_w) / 2.0;
        let top = (view_h - img_h) / 2.0;
        Some(Bounds::new(left, top, left + img_w, top + img_h))
    }
}
