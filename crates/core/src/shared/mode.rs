use std::fmt;

/// Which part of the image gets pixelated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The whole frame.
    #[default]
    Full,
    /// Only regions reported by the face detector.
    Face,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Full => write!(f, "full"),
            Mode::Face => write!(f, "face"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_name() {
        assert_eq!(Mode::Full.to_string(), "full");
        assert_eq!(Mode::Face.to_string(), "face");
    }

    #[test]
    fn test_default_is_full() {
        assert_eq!(Mode::default(), Mode::Full);
    }
}
