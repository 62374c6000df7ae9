use cairo::{Context, ImageSurface};
use photomark::DrawingSurface;
use photomark::draw::{BLUE, Background, Color, GREEN, RED};
use photomark::input::{Session, Tool};

fn solid_image(width: i32, height: i32, color: Color) -> ImageSurface {
    let image = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    {
        let ctx = Context::new(&image).unwrap();
        color.apply(&ctx);
        ctx.paint().unwrap();
    }
    image
}

/// Returns (r, g, b, a) of one pixel; ARGB32 data is B, G, R, A on little-endian.
fn rgba_at(image: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = image.stride() as usize;
    let data = image.data().unwrap();
    let i = y as usize * stride + x as usize * 4;
    (data[i + 2], data[i + 1], data[i], data[i + 3])
}

fn surface_has_ink(image: &mut ImageSurface) -> bool {
    image
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0xFF))
        .unwrap_or(false)
}

fn drag(surface: &mut DrawingSurface, session: &Session, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    surface.pointer_down(session, first.0, first.1);
    for (x, y) in rest {
        surface.pointer_move(session, *x, *y);
    }
    surface.pointer_up(session);
}

const OPAQUE_WHITE: (u8, u8, u8, u8) = (0xFF, 0xFF, 0xFF, 0xFF);

#[test]
fn small_background_is_centered_at_native_size() {
    let mut surface = DrawingSurface::new(60, 30);
    surface.set_background(Background::new(solid_image(20, 10, RED)));

    let mut image = surface.export_image().unwrap();
    assert_eq!(rgba_at(&mut image, 30, 15), (0xFF, 0x00, 0x00, 0xFF));
    assert_eq!(rgba_at(&mut image, 5, 5), OPAQUE_WHITE);
    assert_eq!(rgba_at(&mut image, 55, 25), OPAQUE_WHITE);
}

#[test]
fn large_background_is_shrunk_into_top_left() {
    let mut surface = DrawingSurface::new(50, 50);
    surface.set_background(Background::new(solid_image(100, 50, BLUE)));

    // Shrunk to 50x25 and anchored at the origin.
    let mut image = surface.export_image().unwrap();
    assert_eq!(rgba_at(&mut image, 10, 10), (0x00, 0x00, 0xFF, 0xFF));
    assert_eq!(rgba_at(&mut image, 25, 40), OPAQUE_WHITE);
}

#[test]
fn shapes_are_drawn_over_background() {
    let mut surface = DrawingSurface::new(40, 40);
    surface.set_background(Background::new(solid_image(40, 40, BLUE)));
    let session = Session::new(Tool::Rectangle, RED, 4.0).unwrap();
    drag(&mut surface, &session, &[(10.0, 10.0), (30.0, 30.0)]);

    let mut image = surface.export_image().unwrap();
    assert_eq!(rgba_at(&mut image, 10, 20), (0xFF, 0x00, 0x00, 0xFF));
    assert_eq!(rgba_at(&mut image, 20, 20), (0x00, 0x00, 0xFF, 0xFF));
}

#[test]
fn freehand_stroke_follows_the_pointer() {
    let mut surface = DrawingSurface::new(50, 50);
    let session = Session::new(Tool::Freehand, GREEN, 6.0).unwrap();
    drag(
        &mut surface,
        &session,
        &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0)],
    );

    let mut image = surface.export_image().unwrap();
    assert_eq!(rgba_at(&mut image, 25, 25), (0x00, 0xFF, 0x00, 0xFF));
    assert_eq!(rgba_at(&mut image, 40, 10), OPAQUE_WHITE);
}

#[test]
fn ellipse_is_an_outline() {
    let mut surface = DrawingSurface::new(60, 50);
    let session = Session::new(Tool::Ellipse, RED, 4.0).unwrap();
    drag(&mut surface, &session, &[(10.0, 10.0), (50.0, 40.0)]);

    let mut image = surface.export_image().unwrap();
    assert_eq!(rgba_at(&mut image, 10, 25), (0xFF, 0x00, 0x00, 0xFF));
    assert_eq!(rgba_at(&mut image, 30, 25), OPAQUE_WHITE);
    assert_eq!(rgba_at(&mut image, 11, 11), OPAQUE_WHITE);
}

#[test]
fn undo_restores_blank_export() {
    let mut surface = DrawingSurface::new(30, 30);
    let session = Session::new(Tool::Rectangle, RED, 3.0).unwrap();
    drag(&mut surface, &session, &[(5.0, 5.0), (25.0, 25.0)]);

    let mut drawn = surface.export_image().unwrap();
    assert!(surface_has_ink(&mut drawn));

    surface.undo();
    let mut blank = surface.export_image().unwrap();
    assert!(!surface_has_ink(&mut blank));
}

#[test]
fn tap_without_drag_leaves_no_ink() {
    let mut surface = DrawingSurface::new(30, 30);
    let session = Session::default();
    drag(&mut surface, &session, &[(15.0, 15.0)]);

    assert_eq!(surface.scene().len(), 1);
    let mut image = surface.export_image().unwrap();
    assert!(!surface_has_ink(&mut image));
}
