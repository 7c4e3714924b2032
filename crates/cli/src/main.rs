use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use mosaic_core::detection::domain::face_detector::FaceDetector;
use mosaic_core::detection::infrastructure::cascade_face_detector::{
    CascadeFaceDetector, DetectionParams,
};
use mosaic_core::detection::infrastructure::model_resolver;
use mosaic_core::imaging::image_processor::ImageProcessor;
use mosaic_core::pipeline::mosaic_image_use_case::{DetectorFactory, MosaicImageUseCase};
use mosaic_core::pipeline::pipeline_observer::StdoutPipelineObserver;
use mosaic_core::shared::constants::{CASCADE_MODEL_NAME, DEFAULT_STRENGTH};
use mosaic_core::shared::mode::Mode;
use mosaic_core::shared::strength::Strength;
use mosaic_core::MosaicError;

/// Pixelate a whole image or only the faces in it.
#[derive(Parser)]
#[command(name = "mosaic-tool", version)]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file (format is taken from the extension).
    output: PathBuf,

    /// Mosaic strength (1-10, higher is coarser).
    #[arg(long, default_value_t = DEFAULT_STRENGTH, value_parser = clap::value_parser!(u8).range(1..=10))]
    strength: u8,

    /// Processing mode: full (whole image) or face (detected faces only).
    #[arg(long, value_enum, default_value_t = ModeArg::Full)]
    mode: ModeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Full,
    Face,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Full => Mode::Full,
            ModeArg::Face => Mode::Face,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let strength = Strength::new(cli.strength)?;
    let mode = Mode::from(cli.mode);
    let detector_factory = match mode {
        Mode::Face => Some(Box::new(build_detector) as DetectorFactory),
        Mode::Full => None,
    };

    let mut use_case = MosaicImageUseCase::new(
        ImageProcessor::default(),
        detector_factory,
        Box::new(StdoutPipelineObserver),
    );
    let summary = use_case.execute(&cli.input, &cli.output, strength, mode)?;
    log::info!(
        "Output written to {} ({}x{})",
        cli.output.display(),
        summary.width,
        summary.height
    );
    Ok(())
}

/// Prefers a model installed in one of the override directories and falls
/// back to the one embedded in the binary.
fn build_detector() -> Result<Box<dyn FaceDetector>, MosaicError> {
    log::info!("Resolving model: {CASCADE_MODEL_NAME}");
    let detector =
        match model_resolver::resolve(CASCADE_MODEL_NAME, &model_resolver::default_model_dirs()) {
            Ok(model_path) => CascadeFaceDetector::new(&model_path, DetectionParams::default())?,
            Err(MosaicError::ModelUnavailable { .. }) => {
                CascadeFaceDetector::bundled(DetectionParams::default())?
            }
            Err(e) => return Err(e),
        };
    Ok(Box::new(detector))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.input.is_dir() {
        return Err(format!("Input is a directory: {}", cli.input.display()).into());
    }
    if cli.output.is_dir() {
        return Err(format!("Output is a directory: {}", cli.output.display()).into());
    }
    Ok(())
}
