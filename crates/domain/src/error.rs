use crate::{BlockID, DayID, ExerciseID, Muscle, Property};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Week must be in the range 1 to {weeks} ({week})")]
    OutOfRange { week: u32, weeks: u32 },
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error(transparent)]
    UnknownReference(#[from] ReferenceError),
}

impl Error {
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Program must have at least one week")]
    NoWeeks,
    #[error("Week {0} is not covered by any block")]
    UncoveredWeek(u32),
    #[error("Week {week} is covered by {first} and {second}")]
    OverlappingBlocks {
        week: u32,
        first: BlockID,
        second: BlockID,
    },
    #[error("{0} is defined more than once")]
    DuplicateBlock(BlockID),
    #[error("{block} covers week {week} outside of the program")]
    BlockWeekOutOfRange { block: BlockID, week: u32 },
    #[error("{0} covers no weeks")]
    EmptyBlock(BlockID),
    #[error("Deload week {0} is outside of the program")]
    DeloadWeekOutOfRange(u32),
    #[error("Deload week {0} is listed more than once")]
    DuplicateDeloadWeek(u32),
    #[error("Deload factor must be in the range 0 to 1 ({0})")]
    InvalidDeloadFactor(f32),
    #[error("Volume weighting must be in the range 0 to 1 ({0})")]
    InvalidVolumeWeighting(f32),
    #[error("Volume target of {} has an empty optimal range", .0.name())]
    InvalidVolumeTarget(Muscle),
    #[error("Milestone week {0} is outside of the program")]
    MilestoneWeekOutOfRange(u32),
    #[error("Milestone week {0} is defined more than once")]
    DuplicateMilestone(u32),
    #[error("{0} is defined more than once")]
    DuplicateDay(DayID),
    #[error("Exercise \"{0}\" has no id")]
    MissingExerciseID(String),
    #[error("Exercise {0} is defined more than once")]
    DuplicateExercise(ExerciseID),
    #[error("Exercise {0} must have at least one set")]
    NoSets(ExerciseID),
    #[error("Exercise {0} has an invalid reps range")]
    InvalidReps(ExerciseID),
    #[error("Exercise {0} must target at least one muscle")]
    NoMuscles(ExerciseID),
    #[error("Exercise {0} must have exactly one primary muscle")]
    PrimaryMuscle(ExerciseID),
    #[error("Exercise {0} has a negative start weight")]
    NegativeStartWeight(ExerciseID),
    #[error("Exercise {0} has a negative progression increment")]
    NegativeIncrement(ExerciseID),
    #[error("Exercise {0} has a start weight that is not a number")]
    NonFiniteStartWeight(ExerciseID),
    #[error("Exercise {0} has a progression increment that is not a number")]
    NonFiniteIncrement(ExerciseID),
    #[error("Exercise {0} must progress at least every week (frequency 0)")]
    ZeroProgressionFrequency(ExerciseID),
    #[error("Exercise {exercise} has no rotation entry for {block}")]
    MissingRotation { exercise: ExerciseID, block: BlockID },
    #[error("Exercise {0} is paired with itself")]
    SelfSuperset(ExerciseID),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    #[error("Unknown exercise {0}")]
    Exercise(ExerciseID),
    #[error("Exercise {exercise} is paired with unknown exercise {partner}")]
    Superset {
        exercise: ExerciseID,
        partner: ExerciseID,
    },
    #[error("Exercise {exercise} has a technique for undefined {block}")]
    TechniqueBlock { exercise: ExerciseID, block: BlockID },
    #[error("Exercise {exercise} has a rotation entry for undefined {block}")]
    RotationBlock { exercise: ExerciseID, block: BlockID },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_from_configuration_error() {
        assert!(matches!(
            Error::from(ConfigurationError::UncoveredWeek(4)),
            Error::InvalidConfiguration(ConfigurationError::UncoveredWeek(4))
        ));
    }

    #[test]
    fn test_error_from_reference_error() {
        assert!(matches!(
            Error::from(ReferenceError::Exercise(ExerciseID::from("a"))),
            Error::UnknownReference(ReferenceError::Exercise(id)) if id == ExerciseID::from("a")
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::OutOfRange { week: 27, weeks: 26 }.to_string(),
            "Week must be in the range 1 to 26 (27)"
        );
        assert_eq!(
            Error::from(ConfigurationError::MissingRotation {
                exercise: ExerciseID::from("curl"),
                block: BlockID::Two,
            })
            .to_string(),
            "Exercise curl has no rotation entry for Block 2"
        );
    }

    #[test]
    fn test_error_is_out_of_range() {
        assert!(Error::OutOfRange { week: 0, weeks: 26 }.is_out_of_range());
        assert!(!Error::from(ConfigurationError::NoWeeks).is_out_of_range());
    }
}
