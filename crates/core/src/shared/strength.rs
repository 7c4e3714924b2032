use std::fmt;

use crate::error::MosaicError;
use crate::shared::constants::{DEFAULT_STRENGTH, MAX_STRENGTH, MIN_STRENGTH};

/// Pixelation strength, guaranteed to lie in `1..=10`.
///
/// Higher values produce larger blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength(u8);

impl Strength {
    pub const DEFAULT: Strength = Strength(DEFAULT_STRENGTH);

    pub fn new(value: u8) -> Result<Self, MosaicError> {
        if (MIN_STRENGTH..=MAX_STRENGTH).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MosaicError::InvalidArgument(format!(
                "mosaic strength must be between {MIN_STRENGTH} and {MAX_STRENGTH}, got {value}"
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Strength {
    type Error = MosaicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(10)]
    fn test_accepts_values_in_range(#[case] value: u8) {
        assert_eq!(Strength::new(value).unwrap().get(), value);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(255)]
    fn test_rejects_values_out_of_range(#[case] value: u8) {
        let err = Strength::new(value).unwrap_err();
        assert!(matches!(err, MosaicError::InvalidArgument(_)));
        assert!(err.to_string().contains(&value.to_string()));
    }

    #[test]
    fn test_default_is_five() {
        assert_eq!(Strength::default().get(), 5);
    }

    #[test]
    fn test_try_from_matches_new() {
        assert_eq!(Strength::try_from(7).unwrap(), Strength::new(7).unwrap());
        assert!(Strength::try_from(0).is_err());
    }
}
