use std::path::Path;

use crate::error::MosaicError;
use crate::shared::frame::Frame;

/// Writes a single frame to an image file.
pub trait ImageWriter: Send {
    /// Encodes `frame` into `path`, overwriting any existing file.
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), MosaicError>;
}
