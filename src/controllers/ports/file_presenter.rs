use std::path::Path;

use thiserror::Error;

use crate::core::data::frame_buffer::FrameBuffer;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
}

/// Persists a finished frame to a file in some image format.
pub trait FilePresenterPort {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError>;
}
