pub mod colour;
pub mod complex;
pub mod escape_time;
pub mod frame_buffer;
pub mod point;
pub mod render_grid;
pub mod viewport;
