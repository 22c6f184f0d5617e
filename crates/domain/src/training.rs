use std::{
    fmt,
    ops::{Add, Mul},
};

use derive_more::{Display, Into};

/// Smallest weight step that can be loaded, in kg.
pub const WEIGHT_RESOLUTION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    Fixed(u32),
    Range { min: u32, max: u32 },
}

impl Reps {
    /// Number of reps counted for volume. Ranges always count their lower bound.
    #[must_use]
    pub fn effective(self) -> u32 {
        match self {
            Reps::Fixed(reps) => reps,
            Reps::Range { min, .. } => min,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Reps::Fixed(reps) => reps > 0,
            Reps::Range { min, max } => min > 0 && min <= max,
        }
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parse = |v: &str| v.trim().parse::<u32>().map_err(|_| RepsError::ParseError);

        let reps = match value.split_once('-') {
            Some((min, max)) => Reps::Range {
                min: parse(min)?,
                max: parse(max)?,
            },
            None => Reps::Fixed(parse(value)?),
        };

        if !reps.is_valid() {
            return Err(RepsError::InvalidRange);
        }

        Ok(reps)
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Fixed(reps) => write!(f, "{reps}"),
            Reps::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be positive and the minimum must not exceed the maximum")]
    InvalidRange,
    #[error("Reps must be an integer or a range of integers")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    #[must_use]
    pub const fn kg(value: f32) -> Self {
        Self(value)
    }

    /// Round half-up to the nearest multiple of `WEIGHT_RESOLUTION`.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self((self.0 / WEIGHT_RESOLUTION + 0.5).floor() * WEIGHT_RESOLUTION)
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0 + rhs.0)
    }
}

impl Mul<f32> for Weight {
    type Output = Weight;

    fn mul(self, rhs: f32) -> Self::Output {
        Weight(self.0 * rhs)
    }
}

impl Mul<u32> for Weight {
    type Output = Weight;

    fn mul(self, rhs: u32) -> Self::Output {
        #[allow(clippy::cast_precision_loss)]
        Weight(self.0 * rhs as f32)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) if parsed_value.is_finite() && parsed_value >= 0.0 => {
                Ok(Weight(parsed_value))
            }
            Ok(_) => Err(WeightError::OutOfRange),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a non-negative number of kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Starting load of an exercise.
///
/// Bodyweight exercises never progress and are excluded from weight-based
/// volume.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Load {
    Bodyweight,
    Weight(Weight),
}

impl Load {
    #[must_use]
    pub fn weight(self) -> Option<Weight> {
        match self {
            Load::Bodyweight => None,
            Load::Weight(weight) => Some(weight),
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Bodyweight => write!(f, "BW"),
            Load::Weight(weight) => write!(f, "{weight} kg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub increment: Weight,
    pub frequency_weeks: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RPE(u8);

impl RPE {
    pub const FIVE: RPE = RPE(50);
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
    #[error("RPE range must not start above its end")]
    InvalidRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RPERange {
    pub min: RPE,
    pub max: RPE,
}

impl RPERange {
    #[must_use]
    pub const fn new(min: RPE, max: RPE) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn exact(rpe: RPE) -> Self {
        Self { min: rpe, max: rpe }
    }
}

impl TryFrom<&str> for RPERange {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let range = match value.split_once('-') {
            Some((min, max)) => RPERange::new(RPE::try_from(min)?, RPE::try_from(max)?),
            None => RPERange::exact(RPE::try_from(value)?),
        };

        if range.min > range.max {
            return Err(RPEError::InvalidRange);
        }

        Ok(range)
    }
}

impl fmt::Display for RPERange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("10", Ok(Reps::Fixed(10)))]
    #[case("6-8", Ok(Reps::Range { min: 6, max: 8 }))]
    #[case(" 6 - 8 ", Ok(Reps::Range { min: 6, max: 8 }))]
    #[case("8-6", Err(RepsError::InvalidRange))]
    #[case("0", Err(RepsError::InvalidRange))]
    #[case("6-", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[rstest]
    #[case(Reps::Fixed(12), 12)]
    #[case(Reps::Range { min: 6, max: 8 }, 6)]
    fn test_reps_effective(#[case] reps: Reps, #[case] expected: u32) {
        assert_eq!(reps.effective(), expected);
    }

    #[rstest]
    #[case(Reps::Fixed(12), "12")]
    #[case(Reps::Range { min: 6, max: 8 }, "6-8")]
    fn test_reps_display(#[case] reps: Reps, #[case] expected: &str) {
        assert_eq!(reps.to_string(), expected);
    }

    #[rstest]
    #[case(63.0, 63.0)]
    #[case(63.2, 63.0)]
    #[case(63.25, 63.5)]
    #[case(63.7, 63.5)]
    #[case(63.75, 64.0)]
    #[case(4.8, 5.0)]
    fn test_weight_rounded(#[case] input: f32, #[case] expected: f32) {
        assert_eq!(Weight::kg(input).rounded(), Weight::kg(expected));
    }

    #[test]
    fn test_weight_arithmetic() {
        assert_eq!(Weight::kg(100.0) + Weight::kg(2.5) * 2_u32, Weight::kg(105.0));
        assert_eq!(Weight::kg(50.0) * 0.5_f32, Weight::kg(25.0));
    }

    #[rstest]
    #[case("2.5", Ok(Weight(2.5)))]
    #[case("80", Ok(Weight(80.0)))]
    #[case("-1", Err(WeightError::OutOfRange))]
    #[case("", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case(Load::Bodyweight, "BW")]
    #[case(Load::Weight(Weight(22.5)), "22.5 kg")]
    fn test_load_display(#[case] load: Load, #[case] expected: &str) {
        assert_eq!(load.to_string(), expected);
    }

    #[rstest]
    #[case(8.0, Ok(RPE::EIGHT))]
    #[case(9.5, Ok(RPE(95)))]
    #[case(11.0, Err(RPEError::OutOfRange))]
    #[case(9.2, Err(RPEError::InvalidResolution))]
    fn test_rpe_new(#[case] input: f32, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(input), expected);
    }

    #[rstest]
    #[case("6-7", Ok(RPERange::new(RPE::SIX, RPE::SEVEN)))]
    #[case("8", Ok(RPERange::exact(RPE::EIGHT)))]
    #[case("9-8", Err(RPEError::InvalidRange))]
    #[case("x", Err(RPEError::ParseError))]
    fn test_rpe_range_from_str(
        #[case] input: &str,
        #[case] expected: Result<RPERange, RPEError>,
    ) {
        assert_eq!(RPERange::try_from(input), expected);
    }

    #[rstest]
    #[case(RPERange::new(RPE::FIVE, RPE::SIX), "5-6")]
    #[case(RPERange::exact(RPE::EIGHT), "8")]
    #[case(RPERange::new(RPE(75), RPE::EIGHT), "7.5-8")]
    fn test_rpe_range_display(#[case] range: RPERange, #[case] expected: &str) {
        assert_eq!(range.to_string(), expected);
    }
}
