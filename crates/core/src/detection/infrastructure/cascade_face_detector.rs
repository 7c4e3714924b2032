use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::error::MosaicError;
use crate::shared::constants::{
    DETECTION_MIN_FACE_SIZE, DETECTION_SCALE_FACTOR, DETECTION_SCORE_THRESHOLD,
    DETECTION_WINDOW_STEP,
};
use crate::shared::face_box::FaceBox;
use crate::shared::frame::Frame;

/// SeetaFace frontal-face model shipped with the workspace under `models/`.
static BUNDLED_MODEL: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../models/seeta_fd_frontal_v1.0.bin"
));

/// Fixed tuning for the sliding-window cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionParams {
    /// Size ratio between consecutive pyramid levels (> 1).
    pub scale_factor: f32,
    /// Cascade score a candidate window must reach to be kept.
    pub score_threshold: f64,
    /// Smallest face reported, in pixels per side.
    pub min_face_size: u32,
    /// Horizontal and vertical window stride in pixels.
    pub window_step: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: DETECTION_SCALE_FACTOR,
            score_threshold: DETECTION_SCORE_THRESHOLD,
            min_face_size: DETECTION_MIN_FACE_SIZE,
            window_step: DETECTION_WINDOW_STEP,
        }
    }
}

impl DetectionParams {
    /// The shrink factor applied per pyramid level (`1 / scale_factor`).
    pub fn pyramid_scale_factor(&self) -> f32 {
        1.0 / self.scale_factor
    }
}

/// Frontal-face detector backed by the `rustface` funnel-structured cascade
/// (SeetaFace engine).
///
/// The model is loaded once at construction; a fresh detector is built from
/// it for each call since the `rustface` detector itself is not `Send`.
pub struct CascadeFaceDetector {
    model: rustface::Model,
    params: DetectionParams,
}

impl CascadeFaceDetector {
    /// Uses the model embedded in the binary, so no files are needed at runtime.
    pub fn bundled(params: DetectionParams) -> Result<Self, MosaicError> {
        let detector = Self::from_reader(Cursor::new(BUNDLED_MODEL), "bundled model", params)?;
        log::info!("Loaded bundled face detection model");
        Ok(detector)
    }

    /// Loads the cascade model from `model_path`.
    pub fn new(model_path: &Path, params: DetectionParams) -> Result<Self, MosaicError> {
        let file = File::open(model_path).map_err(|e| {
            MosaicError::Unexpected(format!(
                "failed to open face detection model {}: {e}",
                model_path.display()
            ))
        })?;
        let source = model_path.display().to_string();
        let detector = Self::from_reader(BufReader::new(file), &source, params)?;
        log::info!("Loaded face detection model from {source}");
        Ok(detector)
    }

    fn from_reader<R: Read>(
        reader: R,
        source: &str,
        params: DetectionParams,
    ) -> Result<Self, MosaicError> {
        let model = rustface::read_model(reader).map_err(|e| {
            MosaicError::Unexpected(format!("failed to load face detection model {source}: {e}"))
        })?;
        Ok(Self { model, params })
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect_faces(&mut self, frame: &Frame) -> Result<Vec<FaceBox>, MosaicError> {
        let (width, height) = (frame.width(), frame.height());
        if width < self.params.min_face_size || height < self.params.min_face_size {
            log::debug!("Image {width}x{height} is smaller than the minimum face size");
            return Ok(Vec::new());
        }

        let gray = frame.to_dynamic_image().into_luma8();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.params.min_face_size);
        detector.set_score_thresh(self.params.score_threshold);
        detector.set_pyramid_scale_factor(self.params.pyramid_scale_factor());
        detector.set_slide_window_step(self.params.window_step, self.params.window_step);
        log::debug!("Running cascade detection with {:?}", self.params);

        let faces = detector
            .detect(&rustface::ImageData::new(gray.as_raw(), width, height))
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox::new(bbox.x(), bbox.y(), bbox.width() as i32, bbox.height() as i32)
            })
            .collect::<Vec<_>>();

        log::info!("Detected {} face(s)", faces.len());
        Ok(faces)
    }
}
