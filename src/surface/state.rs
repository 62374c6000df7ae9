//! Drawing surface state: scene, live stroke, transform and background.

use crate::draw::{Background, Scene, Shape, VectorPath, ViewTransform};
use crate::error::SurfaceError;
use crate::input::{StrokeBuilder, StrokeState, Tolerances};
use log::{debug, info};

/// The interactive drawing surface.
///
/// Owns everything that makes up the picture: the committed [`Scene`], the
/// in-progress stroke, the optional background photo and the view
/// transform. The host feeds it pointer events and asks it to render; the
/// user's tool, color and width arrive with each call as a
/// [`Session`](crate::input::Session).
///
/// All methods run on the host's UI thread and return without blocking.
pub struct DrawingSurface {
    /// Committed shapes in paint order
    pub(super) scene: Scene,
    /// Gesture state machine and in-progress path
    pub(super) stroke: StrokeBuilder,
    /// View-to-model mapping
    pub(super) transform: ViewTransform,
    /// Photo underneath the annotations
    pub(super) background: Option<Background>,
    /// Surface width in pixels (set by the host after layout)
    pub(super) width: i32,
    /// Surface height in pixels (set by the host after layout)
    pub(super) height: i32,
    /// Maximum number of shapes in the scene (0 = unlimited)
    pub(super) max_shapes: usize,
    /// Whether the display needs to be redrawn
    pub(super) needs_redraw: bool,
    /// Called whenever `needs_redraw` is raised
    redraw_hook: Option<Box<dyn FnMut()>>,
}

impl DrawingSurface {
    /// Creates a surface with default smoothing and no shape limit.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_defaults(width, height, Tolerances::default(), 0)
    }

    /// Creates a surface with explicit smoothing tolerances and shape limit.
    ///
    /// # Arguments
    /// * `width` - Surface width in pixels
    /// * `height` - Surface height in pixels
    /// * `tolerances` - Freehand sample filter thresholds
    /// * `max_shapes` - Maximum committed shapes, 0 for unlimited
    pub fn with_defaults(width: i32, height: i32, tolerances: Tolerances, max_shapes: usize) -> Self {
        Self {
            scene: Scene::new(),
            stroke: StrokeBuilder::new(tolerances),
            transform: ViewTransform::new(),
            background: None,
            width: width.max(0),
            height: height.max(0),
            max_shapes,
            needs_redraw: true,
            redraw_hook: None,
        }
    }

    /// Installs a callback run every time the surface needs repainting.
    pub fn set_redraw_hook<F>(&mut self, hook: F)
    where
        F: FnMut() + 'static,
    {
        self.redraw_hook = Some(Box::new(hook));
    }

    /// Whether a repaint has been requested since the last
    /// [`take_redraw_request`](Self::take_redraw_request).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn request_redraw(&mut self) {
        self.needs_redraw = true;
        if let Some(hook) = self.redraw_hook.as_mut() {
            hook();
        }
    }

    /// Updates the surface size after host layout. Resets the pan origin.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.transform.set_origin(0.0, 0.0);
        debug!("Surface resized to {}x{}", self.width, self.height);
        self.request_redraw();
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Replaces the background photo and discards every annotation.
    ///
    /// A new photo starts a fresh edit.
    pub fn set_background(&mut self, background: Background) {
        info!(
            "Background set ({}x{}); clearing {} shape(s)",
            background.width(),
            background.height(),
            self.scene.len()
        );
        self.scene.clear();
        self.background = Some(background);
        self.request_redraw();
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Removes the most recent shape and drops any in-progress stroke.
    ///
    /// Harmless on an empty scene.
    pub fn undo(&mut self) -> Option<Shape> {
        let removed = self.scene.remove_last();
        self.stroke.cancel();
        match &removed {
            Some(_) => debug!("Undo: {} shape(s) left", self.scene.len()),
            None => debug!("Undo: nothing to remove"),
        }
        self.request_redraw();
        removed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Geometry of the gesture currently being drawn (empty when idle).
    pub fn in_progress_path(&self) -> &VectorPath {
        self.stroke.path()
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke.state()
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Pans the view. Affects subsequent input mapping and rendering.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.transform.set_origin(x, y);
        self.request_redraw();
    }

    /// Zooms the view. The scale must be positive.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        self.transform.set_scale(scale)?;
        self.request_redraw();
        Ok(())
    }
}
