use crate::core::data::render_grid::RenderGrid;
use crate::core::data::viewport::{DEFAULT_ZOOM, Viewport};
use crate::core::navigation::commands::{Command, PanDirection, ZoomDirection};

/// Fraction of the default visible width moved by one pan step.
pub const BASE_PAN_STEP: f64 = 0.03;
pub const ZOOM_FACTOR: f64 = 1.5;

/// Applies pan and zoom commands to a [`Viewport`].
///
/// The aspect ratio always comes from the grid the viewport is bound to.
/// Pan steps scale with the current zoom, so a step always covers the same
/// share of the visible region however deep the view is.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ViewportController;

impl ViewportController {
    #[must_use]
    pub fn initial_viewport(&self, grid: RenderGrid) -> Viewport {
        Viewport::new(grid)
    }

    pub fn pan(&self, viewport: &mut Viewport, direction: PanDirection) {
        let aspect_ratio = viewport.grid.aspect_ratio();
        let horizontal_step = BASE_PAN_STEP * viewport.zoom_x / DEFAULT_ZOOM;
        let vertical_step = BASE_PAN_STEP * viewport.zoom_y / (DEFAULT_ZOOM / aspect_ratio);

        match direction {
            PanDirection::Left => viewport.center_x -= horizontal_step,
            PanDirection::Right => viewport.center_x += horizontal_step,
            PanDirection::Up => viewport.center_y -= vertical_step,
            PanDirection::Down => viewport.center_y += vertical_step,
        }
    }

    pub fn zoom(&self, viewport: &mut Viewport, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => viewport.zoom_x /= ZOOM_FACTOR,
            ZoomDirection::Out => viewport.zoom_x *= ZOOM_FACTOR,
        }
        self.sync_zoom_y(viewport);
    }

    pub fn apply(&self, viewport: &mut Viewport, command: Command) {
        match command {
            Command::Pan(direction) => self.pan(viewport, direction),
            Command::Zoom(direction) => self.zoom(viewport, direction),
        }
    }

    /// Pans for `left`, `right`, `up` or `down`; any other token is ignored.
    pub fn move_named(&self, viewport: &mut Viewport, token: &str) {
        if let Ok(direction) = token.parse::<PanDirection>() {
            self.pan(viewport, direction);
        }
    }

    /// Zooms for `plus` or `minus`. Any other token leaves `zoom_x` alone but
    /// still re-derives `zoom_y` from it.
    pub fn scale_named(&self, viewport: &mut Viewport, token: &str) {
        match token.parse::<ZoomDirection>() {
            Ok(direction) => self.zoom(viewport, direction),
            Err(_) => self.sync_zoom_y(viewport),
        }
    }

    /// Runs [`move_named`](Self::move_named) then
    /// [`scale_named`](Self::scale_named) with the same token, the way a
    /// toolbar button press is handled.
    pub fn apply_named(&self, viewport: &mut Viewport, token: &str) {
        self.move_named(viewport, token);
        self.scale_named(viewport, token);
    }

    fn sync_zoom_y(&self, viewport: &mut Viewport) {
        viewport.zoom_y = viewport.zoom_x / viewport.grid.aspect_ratio();
    }
}
