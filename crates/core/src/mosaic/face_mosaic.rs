use crate::error::MosaicError;
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;
use crate::shared::strength::Strength;

use super::pixelate::{face_block_size, pixelate};

/// Pixelates each face region of `frame` and returns the result as a new frame.
///
/// Boxes are clipped to the frame and processed top-to-bottom, left-to-right,
/// so overlapping boxes compound on shared pixels in a reproducible order.
/// Pixels outside every box are left untouched. With no faces the result is
/// a plain copy of `frame`.
pub fn apply_mosaic_to_faces(
    frame: &Frame,
    faces: &[FaceBox],
    strength: u8,
) -> Result<Frame, MosaicError> {
    let strength = Strength::new(strength)?;
    let mut result = frame.clone();

    for face in FaceBox::sorted(faces) {
        let Some(b) = face.clamp_to(frame.width(), frame.height()) else {
            log::warn!("Skipping face box outside the image: {face:?}");
            continue;
        };

        let block_size = face_block_size(b.width, b.height, strength);
        log::debug!(
            "Pixelating face at ({}, {}) {}x{} with block size {block_size}",
            b.x,
            b.y,
            b.width,
            b.height
        );

        let region = result.crop(b.x, b.y, b.width, b.height);
        result.paste(b.x, b.y, &pixelate(&region, block_size));
    }

    Ok(result)
}
