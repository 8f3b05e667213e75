pub mod generate_frame;
pub mod render;
