use crate::draw::{WHITE, render_background, render_base_fill, render_path, render_shapes};
use crate::error::SurfaceError;
use crate::input::Session;

use super::DrawingSurface;

impl DrawingSurface {
    /// Paints the live view into `ctx`.
    ///
    /// Applies the view transform, then draws the background, every
    /// committed shape, and finally the in-progress stroke using the
    /// session's current color and width. The target is not cleared first;
    /// that is up to the host.
    pub fn render(&self, ctx: &cairo::Context, session: &Session) -> Result<(), SurfaceError> {
        ctx.save()?;
        self.transform.apply(ctx);
        self.render_content(ctx)?;
        render_path(
            ctx,
            self.stroke.path(),
            session.color(),
            session.stroke_width(),
        )?;
        ctx.restore()?;
        Ok(())
    }

    /// Flattens background and committed shapes into a new image.
    ///
    /// The image matches the surface's pixel size, starts opaque white and
    /// ignores the view transform and any unfinished stroke.
    ///
    /// # Errors
    /// Returns [`SurfaceError::EmptySurface`] before the surface has a size.
    pub fn export_image(&self) -> Result<cairo::ImageSurface, SurfaceError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SurfaceError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)?;
        {
            let ctx = cairo::Context::new(&image)?;
            render_base_fill(&ctx, WHITE)?;
            self.render_content(&ctx)?;
        }
        image.flush();

        log::debug!(
            "Exported {}x{} image with {} shape(s)",
            self.width,
            self.height,
            self.scene.len()
        );
        Ok(image)
    }

    fn render_content(&self, ctx: &cairo::Context) -> Result<(), SurfaceError> {
        if let Some(background) = &self.background {
            render_background(ctx, background, self.width as f64, self.height as f64)?;
        }
        render_shapes(ctx, &self.scene)?;
        Ok(())
    }
}
