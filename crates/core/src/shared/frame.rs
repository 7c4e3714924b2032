use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use ndarray::{s, ArrayView3, ArrayViewMut3};

use crate::error::MosaicError;

/// An in-memory image: contiguous 8-bit samples in row-major order.
///
/// The channel layout follows the decoded source: 1 (gray), 2 (gray +
/// alpha), 3 (RGB) or 4 (RGBA). Sources with wider samples are narrowed to
/// 8 bits at the read boundary; everything else passes through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    /// Builds a frame from raw samples, checking the layout.
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self, MosaicError> {
        if !(1..=4).contains(&channels) {
            return Err(MosaicError::InvalidArgument(format!(
                "frame must have 1 to 4 channels, got {channels}"
            )));
        }
        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(MosaicError::InvalidArgument(format!(
                "frame data has {} bytes, expected {expected} for {width}x{height}x{channels}",
                data.len()
            )));
        }
        Ok(Self::from_parts(data, width, height, channels))
    }

    fn from_parts(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize)
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// An RGB frame filled with a single colour.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 3)
            .collect();
        Self::from_parts(data, width, height, 3)
    }

    /// Converts a decoded image, keeping its gray/colour and alpha layout.
    pub fn from_dynamic_image(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let color = image.color();
        let (data, channels) = match (color.channel_count(), color.has_alpha()) {
            (1, _) => (image.into_luma8().into_raw(), 1),
            (2, _) => (image.into_luma_alpha8().into_raw(), 2),
            (_, false) => (image.into_rgb8().into_raw(), 3),
            (_, true) => (image.into_rgba8().into_raw(), 4),
        };
        Self::from_parts(data, width, height, channels)
    }

    pub fn to_dynamic_image(&self) -> DynamicImage {
        let (w, h, data) = (self.width, self.height, self.data.clone());
        let image = match self.channels {
            1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            _ => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        };
        image.expect("Frame data length must match dimensions")
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Samples of the pixel at `(x, y)`, one per channel.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let idx = ((y as usize) * (self.width as usize) + x as usize) * c;
        &self.data[idx..idx + c]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies out the `width` x `height` rectangle whose top-left corner is `(x, y)`.
    ///
    /// The rectangle must lie inside the frame.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Frame {
        let (x0, y0) = (x as usize, y as usize);
        let (x1, y1) = (x0 + width as usize, y0 + height as usize);
        let data = self
            .as_ndarray()
            .slice(s![y0..y1, x0..x1, ..])
            .iter()
            .copied()
            .collect();
        Frame::from_parts(data, width, height, self.channels)
    }

    /// Overwrites the rectangle at `(x, y)` with `patch`.
    ///
    /// The patch must fit inside the frame and share its channel layout.
    pub fn paste(&mut self, x: u32, y: u32, patch: &Frame) {
        debug_assert_eq!(self.channels, patch.channels);
        let (x0, y0) = (x as usize, y as usize);
        let (x1, y1) = (x0 + patch.width as usize, y0 + patch.height as usize);
        self.as_ndarray_mut()
            .slice_mut(s![y0..y1, x0..x1, ..])
            .assign(&patch.as_ndarray());
    }

    /// Number of distinct pixel values in the frame.
    pub fn distinct_colors(&self) -> usize {
        let mut colors: Vec<&[u8]> = self.data.chunks_exact(self.channels as usize).collect();
        colors.sort_unstable();
        colors.dedup();
        colors.len()
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
