mod fill_row;
pub mod generate_frame_parallel_rayon;
pub mod generate_frame_serial;
pub mod ports;
