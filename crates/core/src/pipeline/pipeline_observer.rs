use std::fmt;
use std::path::Path;

use crate::shared::strength::Strength;

/// A stage transition reported by [`super::mosaic_image_use_case::MosaicImageUseCase`].
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineEvent<'a> {
    Loading(&'a Path),
    ApplyingFull(Strength),
    Detecting,
    FacesFound(usize),
    NoFacesFound,
    ApplyingFaces(Strength),
    Saving(&'a Path),
    Done,
}

impl fmt::Display for PipelineEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::Loading(path) => write!(f, "Loading image: {}", path.display()),
            PipelineEvent::ApplyingFull(s) => {
                write!(f, "Applying mosaic to the whole image (strength: {s})")
            }
            PipelineEvent::Detecting => write!(f, "Detecting faces..."),
            PipelineEvent::FacesFound(n) => write!(f, "Detected {n} face(s)"),
            PipelineEvent::NoFacesFound => {
                write!(f, "No faces detected. Saving the original image.")
            }
            PipelineEvent::ApplyingFaces(s) => {
                write!(f, "Applying mosaic to face regions (strength: {s})")
            }
            PipelineEvent::Saving(path) => write!(f, "Saving result: {}", path.display()),
            PipelineEvent::Done => write!(f, "Done"),
        }
    }
}

/// Receives pipeline stage transitions.
///
/// Decouples the use case from where progress is shown (stdout for the
/// CLI, nothing in tests).
pub trait PipelineObserver: Send {
    fn on_event(&mut self, event: &PipelineEvent<'_>);
}

/// Observer that discards all events.
pub struct NullPipelineObserver;

impl PipelineObserver for NullPipelineObserver {
    fn on_event(&mut self, _event: &PipelineEvent<'_>) {}
}

/// Prints one line per event to standard output.
pub struct StdoutPipelineObserver;

impl PipelineObserver for StdoutPipelineObserver {
    fn on_event(&mut self, event: &PipelineEvent<'_>) {
        println!("{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_details() {
        let s = Strength::new(7).unwrap();
        assert_eq!(
            PipelineEvent::Loading(Path::new("in.png")).to_string(),
            "Loading image: in.png"
        );
        assert!(PipelineEvent::ApplyingFull(s).to_string().contains("strength: 7"));
        assert!(PipelineEvent::ApplyingFaces(s).to_string().contains("strength: 7"));
        assert_eq!(PipelineEvent::FacesFound(3).to_string(), "Detected 3 face(s)");
        assert!(PipelineEvent::Saving(Path::new("out.jpg"))
            .to_string()
            .ends_with("out.jpg"));
    }
}
