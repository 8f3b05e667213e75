mod controllers;
mod core;
mod presenters;

pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::controllers::session::Session;
pub use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render::{render, render_serial};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_time::EscapeTime;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_grid::{
    REFERENCE_HEIGHT, REFERENCE_WIDTH, RenderGrid, RenderGridError,
};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::{MAX_ITERATIONS, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::EscapeSpeedPalette;
pub use crate::core::navigation::commands::{Command, CommandError, PanDirection, ZoomDirection};
pub use crate::core::navigation::viewport_controller::ViewportController;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use crate::presenters::file::jpeg::{DEFAULT_JPEG_QUALITY, JpegFilePresenter};
pub use crate::presenters::file::ppm::PpmFilePresenter;
