/// Axis-aligned face rectangle in image pixel coordinates.
///
/// Detectors may report boxes that poke past the frame edge, so the origin
/// is signed; use [`FaceBox::clamp_to`] before touching pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceBox {
    // Field order gives the derived `Ord` a top-to-bottom, left-to-right ordering.
    pub y: i32,
    pub x: i32,
    pub height: i32,
    pub width: i32,
}

/// A face box intersected with the frame bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            y,
            x,
            height,
            width,
        }
    }

    /// Intersects the box with a `frame_width` x `frame_height` frame.
    ///
    /// Returns `None` when nothing of the box lies inside the frame.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Option<ClampedBox> {
        let x1 = i64::from(self.x).max(0);
        let y1 = i64::from(self.y).max(0);
        let x2 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(frame_width));
        let y2 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(frame_height));

        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        Some(ClampedBox {
            x: x1 as u32,
            y: y1 as u32,
            width: (x2 - x1) as u32,
            height: (y2 - y1) as u32,
        })
    }

    /// Returns the boxes in a stable top-to-bottom, left-to-right order.
    pub fn sorted(faces: &[FaceBox]) -> Vec<FaceBox> {
        let mut sorted = faces.to_vec();
        sorted.sort();
        sorted
    }
}
