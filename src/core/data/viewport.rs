use crate::core::data::render_grid::RenderGrid;
use std::fmt;

pub const DEFAULT_CENTER_X: f64 = -0.8;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 0.5;

/// The region of the complex plane currently mapped onto a render grid.
///
/// A viewport is bound to the grid it was created for and `zoom_y` always
/// equals `zoom_x / aspect_ratio` of that grid. Fields are only written by
/// [`ViewportController`](crate::ViewportController), which keeps that
/// relation intact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub(crate) grid: RenderGrid,
    pub(crate) center_x: f64,
    pub(crate) center_y: f64,
    pub(crate) zoom_x: f64,
    pub(crate) zoom_y: f64,
}

impl Viewport {
    /// The starting view: the whole set, slightly left of centre.
    #[must_use]
    pub fn new(grid: RenderGrid) -> Self {
        Self {
            grid,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            zoom_x: DEFAULT_ZOOM,
            zoom_y: DEFAULT_ZOOM / grid.aspect_ratio(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> RenderGrid {
        self.grid
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn zoom_x(&self) -> f64 {
        self.zoom_x
    }

    #[must_use]
    pub fn zoom_y(&self) -> f64 {
        self.zoom_y
    }

    /// Magnification relative to a unit-wide view.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        1.0 / self.zoom_x
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {:.6}, Y: {:.6}, Zoom: {:.6}",
            self.center_x,
            self.center_y,
            self.magnification()
        )
    }
}
