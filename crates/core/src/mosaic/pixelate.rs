use image::imageops::FilterType;

use crate::shared::constants::{FACE_DIVISOR, FULL_FRAME_DIVISOR};
use crate::shared::frame::Frame;
use crate::shared::strength::Strength;

/// Block size for whole-image pixelation.
///
/// Strength 10 gives blocks of roughly a tenth of the shorter side,
/// strength 1 roughly a hundredth.
pub fn full_frame_block_size(width: u32, height: u32, strength: Strength) -> u32 {
    block_size(width, height, FULL_FRAME_DIVISOR / u32::from(strength.get()))
}

/// Block size for pixelating a single face region.
///
/// Coarser than [`full_frame_block_size`] at the same strength: the divisor
/// starts from 30 instead of 100.
pub fn face_block_size(width: u32, height: u32, strength: Strength) -> u32 {
    block_size(width, height, FACE_DIVISOR / u32::from(strength.get()))
}

fn block_size(width: u32, height: u32, divisor: u32) -> u32 {
    (width.min(height) / divisor.max(1)).max(1)
}

/// Pixelates a frame by shrinking it by `block_size` and scaling it back up,
/// both with nearest-neighbour sampling.
///
/// Returns a new frame with the same dimensions and channel layout as `frame`.
pub fn pixelate(frame: &Frame, block_size: u32) -> Frame {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 || block_size <= 1 {
        return frame.clone();
    }

    let small_width = (width / block_size).max(1);
    let small_height = (height / block_size).max(1);

    let restored = frame
        .to_dynamic_image()
        .resize_exact(small_width, small_height, FilterType::Nearest)
        .resize_exact(width, height, FilterType::Nearest);
    Frame::from_dynamic_image(restored)
}
