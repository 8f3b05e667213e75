use std::path::Path;

use log::{debug, info};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render::render;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_grid::RenderGrid;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::commands::Command;
use crate::core::navigation::viewport_controller::ViewportController;

/// One exploration session: a viewport navigated by commands, the most
/// recently rendered frame, and where to save it.
pub struct Session<P: FilePresenterPort> {
    controller: ViewportController,
    viewport: Viewport,
    presenter: P,
    frame: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> Session<P> {
    pub fn new(grid: RenderGrid, presenter: P) -> Self {
        let controller = ViewportController;

        Self {
            controller,
            viewport: controller.initial_viewport(grid),
            presenter,
            frame: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    /// Applies `command` and drops the now stale frame.
    pub fn apply(&mut self, command: Command) {
        self.controller.apply(&mut self.viewport, command);
        self.frame = None;
        debug!("{} -> {}", command, self.viewport);
    }

    pub fn generate(&mut self) -> &FrameBuffer {
        let grid = self.viewport.grid();
        info!("Rendering {}x{} at {}", grid.width(), grid.height(), self.viewport);

        self.frame.insert(render(&self.viewport))
    }

    /// Writes the last generated frame; does nothing if none exists yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, &filepath)?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
