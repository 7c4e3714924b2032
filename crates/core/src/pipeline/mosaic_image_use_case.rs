use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::error::MosaicError;
use crate::imaging::image_processor::ImageProcessor;
use crate::mosaic::face_mosaic::apply_mosaic_to_faces;
use crate::pipeline::pipeline_observer::{PipelineEvent, PipelineObserver};
use crate::shared::mode::Mode;
use crate::shared::strength::Strength;

/// Builds the face detector on first use.
pub type DetectorFactory =
    Box<dyn FnMut() -> Result<Box<dyn FaceDetector>, MosaicError> + Send>;

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicSummary {
    pub width: u32,
    pub height: u32,
    /// Number of detected faces; `None` in full mode.
    pub faces: Option<usize>,
}

/// Single-image mosaic pipeline: load → pixelate (whole image or faces) → save.
///
/// The detector is built from the factory the first time a face-mode run
/// reaches detection, after the input has loaded. Full-image runs never call
/// the factory, and callers that only need them can pass `None`.
pub struct MosaicImageUseCase {
    processor: ImageProcessor,
    detector_factory: Option<DetectorFactory>,
    detector: Option<Box<dyn FaceDetector>>,
    observer: Box<dyn PipelineObserver>,
}

impl MosaicImageUseCase {
    pub fn new(
        processor: ImageProcessor,
        detector_factory: Option<DetectorFactory>,
        observer: Box<dyn PipelineObserver>,
    ) -> Self {
        Self {
            processor,
            detector_factory,
            detector: None,
            observer,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
        strength: Strength,
        mode: Mode,
    ) -> Result<MosaicSummary, MosaicError> {
        log::debug!("Running {mode} mosaic on {}", input_path.display());
        self.observer.on_event(&PipelineEvent::Loading(input_path));
        let frame = self.processor.load_image(input_path)?;

        let (result, faces) = match mode {
            Mode::Full => {
                self.observer.on_event(&PipelineEvent::ApplyingFull(strength));
                (self.processor.apply_mosaic(&frame, strength.get())?, None)
            }
            Mode::Face => {
                self.observer.on_event(&PipelineEvent::Detecting);
                let faces = self.detector()?.detect_faces(&frame)?;

                if faces.is_empty() {
                    self.observer.on_event(&PipelineEvent::NoFacesFound);
                    (frame, Some(0))
                } else {
                    self.observer.on_event(&PipelineEvent::FacesFound(faces.len()));
                    self.observer.on_event(&PipelineEvent::ApplyingFaces(strength));
                    let result = apply_mosaic_to_faces(&frame, &faces, strength.get())?;
                    (result, Some(faces.len()))
                }
            }
        };

        self.observer.on_event(&PipelineEvent::Saving(output_path));
        self.processor.save_image(&result, output_path)?;
        self.observer.on_event(&PipelineEvent::Done);

        Ok(MosaicSummary {
            width: result.width(),
            height: result.height(),
            faces,
        })
    }

    fn detector(&mut self) -> Result<&mut Box<dyn FaceDetector>, MosaicError> {
        let detector = match self.detector.take() {
            Some(detector) => detector,
            None => {
                let factory = self.detector_factory.as_mut().ok_or_else(|| {
                    MosaicError::Unexpected("face mode requires a face detector".into())
                })?;
                factory()?
            }
        };
        Ok(self.detector.insert(detector))
    }
}
