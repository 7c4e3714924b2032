/// SeetaFace frontal-face cascade shipped alongside the binary.
pub const CASCADE_MODEL_NAME: &str = "seeta_fd_frontal_v1.0.bin";

/// Directory name used under the platform data directory and next to the executable.
pub const APP_DIR_NAME: &str = "mosaic-tool";
pub const MODELS_DIR_NAME: &str = "models";

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 10;
pub const DEFAULT_STRENGTH: u8 = 5;

/// Whole-image block size divides `min(width, height)` by `FULL_FRAME_DIVISOR / strength`.
pub const FULL_FRAME_DIVISOR: u32 = 100;

/// Face-region block size divides `min(width, height)` by `FACE_DIVISOR / strength`.
pub const FACE_DIVISOR: u32 = 30;

/// Image pyramid step between detection scales.
pub const DETECTION_SCALE_FACTOR: f32 = 1.1;

/// Smallest face the detector reports, in pixels per side.
pub const DETECTION_MIN_FACE_SIZE: u32 = 30;

/// Cascade score a window must reach to count as a confirmed face.
pub const DETECTION_SCORE_THRESHOLD: f64 = 2.0;

/// Sliding-window stride in pixels.
pub const DETECTION_WINDOW_STEP: u32 = 4;
