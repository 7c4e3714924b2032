use crate::error::MosaicError;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// Boxes come back in image coordinates, unordered and possibly
/// overlapping. `&mut self` leaves room for detectors that keep scratch
/// state between calls.
pub trait FaceDetector: Send {
    fn detect_faces(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, MosaicError>;
}
