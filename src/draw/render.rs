//! Cairo-based rendering functions for the background and shapes.

use super::background::{Background, aspect_fit};
use super::color::Color;
use super::path::{PathCommand, Point, VectorPath};
use super::shape::Shape;

/// Fills the whole target with an opaque base color.
///
/// Used for exports, which start from white instead of transparency.
pub fn render_base_fill(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    color.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    ctx.paint()?;
    ctx.restore()
}

/// Draws the background photo aspect-fit into a `view_w` x `view_h` area.
///
/// See [`aspect_fit`] for the placement rules.
pub fn render_background(
    ctx: &cairo::Context,
    background: &Background,
    view_w: f64,
    view_h: f64,
) -> Result<(), cairo::Error> {
    let img_w = background.width() as f64;
    let img_h = background.height() as f64;
    let Some(rect) = aspect_fit(img_w, img_h, view_w, view_h) else {
        return Ok(());
    };
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.translate(rect.left, rect.top);
    ctx.scale(rect.width() / img_w, rect.height() / img_h);
    ctx.set_source_surface(background.image(), 0.0, 0.0)?;
    ctx.source().set_filter(cairo::Filter::Good);
    ctx.paint()?;
    ctx.restore()
}

/// Renders all shapes in order (first shape = bottom layer).
pub fn render_shapes<'a, I>(ctx: &cairo::Context, shapes: I) -> Result<(), cairo::Error>
where
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        render_shape(ctx, shape)?;
    }
    Ok(())
}

/// Renders one committed shape with its own color and width.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) -> Result<(), cairo::Error> {
    render_path(ctx, shape.path(), shape.color(), shape.stroke_width())
}

/// Strokes a path: outline only, round caps and joins, anti-aliased.
///
/// Also used for the in-progress path, which has no shape yet and is drawn
/// with the session's current color and width.
pub fn render_path(
    ctx: &cairo::Context,
    path: &VectorPath,
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    if path.is_empty() {
        return Ok(());
    }

    ctx.save()?;
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.set_antialias(cairo::Antialias::Best);

    ctx.new_path();
    trace_path(ctx, path)?;
    let stroked = ctx.stroke();
    ctx.restore()?;
    stroked
}

/// Appends the path's commands to the context's current path.
fn trace_path(ctx: &cairo::Context, path: &VectorPath) -> Result<(), cairo::Error> {
    let mut current: Option<Point> = None;

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(point) => {
                ctx.move_to(point.x, point.y);
                current = Some(point);
            }
            PathCommand::QuadTo { ctrl, to } => {
                let from = current.unwrap_or_else(|| {
                    ctx.move_to(ctrl.x, ctrl.y);
                    ctrl
                });
                // Cairo only has cubics; raise the degree.
                let c1 = Point::new(
                    from.x + 2.0 / 3.0 * (ctrl.x - from.x),
                    from.y + 2.0 / 3.0 * (ctrl.y - from.y),
                );
                let c2 = Point::new(
                    to.x + 2.0 / 3.0 * (ctrl.x - to.x),
                    to.y + 2.0 / 3.0 * (ctrl.y - to.y),
                );
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                current = Some(to);
            }
            PathCommand::Rect(bounds) => {
                ctx.rectangle(bounds.left, bounds.top, bounds.width(), bounds.height());
                current = Some(Point::new(bounds.left, bounds.top));
            }
            PathCommand::Ellipse(bounds) => {
                let (cx, cy, rx, ry) = bounds.ellipse_params();
                if rx <= 0.0 && ry <= 0.0 {
                    continue;
                }
                // A flat ellipse collapses to its diameter; the scale matrix
                // below would be singular.
                if rx <= 0.0 || ry <= 0.0 {
                    ctx.move_to(bounds.left, bounds.top);
                    ctx.line_to(bounds.right, bounds.bottom);
                    ctx.close_path();
                    current = Some(Point::new(bounds.left, bounds.top));
                    continue;
                }
                ctx.new_sub_path();
                ctx.save()?;
                ctx.translate(cx, cy);
                ctx.scale(rx, ry);
                ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
                ctx.close_path();
                ctx.restore()?;
                current = Some(Point::new(cx + rx, cy));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};
    use crate::util::Bounds;

    fn canvas(width: i32, height: i32) -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn has_ink(surface: &mut cairo::ImageSurface) -> bool {
        surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    #[test]
    fn move_only_path_draws_nothing() {
        let (mut surface, ctx) = canvas(20, 20);
        let mut path = VectorPath::new();
        path.move_to(Point::new(10.0, 10.0));
        render_path(&ctx, &path, RED, 4.0).unwrap();
        drop(ctx);
        assert!(!has_ink(&mut surface));
    }

    #[test]
    fn rect_path_draws_pixels() {
        let (mut surface, ctx) = canvas(40, 40);
        let mut path = VectorPath::new();
        path.add_rect(Bounds::new(5.0, 5.0, 30.0, 30.0));
        render_path(&ctx, &path, RED, 3.0).unwrap();
        drop(ctx);
        assert!(has_ink(&mut surface));
    }

    #[test]
    fn flat_ellipse_strokes_a_line() {
        let (mut surface, ctx) = canvas(20, 20);
        let mut path = VectorPath::new();
        path.add_ellipse(Bounds::new(5.0, 10.0, 15.0, 10.0));
        render_path(&ctx, &path, RED, 2.0).unwrap();
        drop(ctx);

        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // Red channel of (10, 10), stored B, G, R, A.
        assert_eq!(data[10 * stride + 10 * 4 + 2], 0xFF);
        assert!(data[2 * stride..3 * stride].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn point_ellipse_draws_nothing() {
        let (mut surface, ctx) = canvas(20, 20);
        let mut path = VectorPath::new();
        path.add_ellipse(Bounds::new(5.0, 5.0, 5.0, 5.0));
        render_path(&ctx, &path, RED, 2.0).unwrap();
        drop(ctx);
        assert!(!has_ink(&mut surface));
    }

    #[test]
    fn quad_segments_are_stroked() {
        let (mut surface, ctx) = canvas(40, 40);
        let mut path = VectorPath::new();
        path.move_to(Point::new(5.0, 5.0));
        path.quad_to(Point::new(5.0, 5.0), Point::new(20.0, 20.0));
        render_path(&ctx, &path, RED, 4.0).unwrap();
        drop(ctx);
        assert!(has_ink(&mut surface));
    }

    #[test]
    fn base_fill_covers_surface() {
        let (mut surface, ctx) = canvas(4, 4);
        render_base_fill(&ctx, WHITE).unwrap();
        drop(ctx);
        let data = surface.data().unwrap();
        assert!(data.iter().all(|byte| *byte == 0xFF));
    }
}
