use std::path::Path;

use crate::error::MosaicError;
use crate::shared::frame::Frame;

/// Loads an image from storage into an RGB [`Frame`].
pub trait ImageReader: Send {
    /// Fails with [`MosaicError::NotFound`] when `path` does not exist and
    /// with [`MosaicError::Decode`] when it cannot be decoded.
    fn read(&self, path: &Path) -> Result<Frame, MosaicError>;
}
