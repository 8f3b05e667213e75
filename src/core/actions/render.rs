use std::time::Instant;

use log::debug;

use crate::core::actions::generate_frame::generate_frame_parallel_rayon::{
    generate_frame_parallel_rayon,
};
use crate::core::actions::generate_frame::generate_frame_serial::generate_frame_serial;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::EscapeSpeedPalette;

/// Renders the Mandelbrot set for `viewport` onto a frame the size of its grid.
///
/// Rows are computed in parallel against a copy of the viewport taken at
/// call time. Returns once every pixel has been written.
#[must_use]
pub fn render(viewport: &Viewport) -> FrameBuffer {
    let start = Instant::now();
    let grid = viewport.grid();
    let algorithm = MandelbrotAlgorithm::new(*viewport);
    let frame = generate_frame_parallel_rayon(grid, &algorithm, &EscapeSpeedPalette);

    debug!(
        "rendered {}x{} frame for [{}] in {:?}",
        grid.width(),
        grid.height(),
        viewport,
        start.elapsed()
    );

    frame
}

/// Single-threaded equivalent of [`render`].
#[must_use]
pub fn render_serial(viewport: &Viewport) -> FrameBuffer {
    let algorithm = MandelbrotAlgorithm::new(*viewport);
    generate_frame_serial(viewport.grid(), &algorithm, &EscapeSpeedPalette)
}
