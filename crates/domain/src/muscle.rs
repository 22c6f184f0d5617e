use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Back,
    Legs,
    Glutes,
    Quads,
    Hamstrings,
    Pecs,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 10] = [
            Muscle::Back,
            Muscle::Legs,
            Muscle::Glutes,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Pecs,
            Muscle::Shoulders,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Back => "Back",
            Muscle::Legs => "Legs",
            Muscle::Glutes => "Glutes",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Pecs => "Pecs",
            Muscle::Shoulders => "Shoulders",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
        }
    }
}

impl TryFrom<&str> for Muscle {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Muscle::iter()
            .find(|m| m.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| MuscleError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleError {
    #[error("Unknown muscle \"{0}\"")]
    Unknown(String),
}

/// Contribution of a muscle to an exercise.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
}

impl Role {
    /// Role of the muscle at `position` in an ordered muscle list (primary first).
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        match position {
            0 => Role::Primary,
            1 => Role::Secondary,
            _ => Role::Tertiary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseMuscle {
    pub muscle: Muscle,
    pub role: Role,
}

/// Assign roles to an ordered list of muscles, primary first.
#[must_use]
pub fn ordered_muscles(muscles: &[Muscle]) -> Vec<ExerciseMuscle> {
    muscles
        .iter()
        .enumerate()
        .map(|(position, muscle)| ExerciseMuscle {
            muscle: *muscle,
            role: Role::from_position(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_name() {
        let mut names = HashSet::new();

        for muscle in Muscle::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_try_from_name() {
        for muscle in Muscle::iter() {
            assert_eq!(Muscle::try_from(muscle.name()), Ok(*muscle));
        }
    }

    #[rstest]
    #[case("pecs", Ok(Muscle::Pecs))]
    #[case(" Back ", Ok(Muscle::Back))]
    #[case("Calves", Err(MuscleError::Unknown("Calves".to_string())))]
    fn test_muscle_try_from(#[case] input: &str, #[case] expected: Result<Muscle, MuscleError>) {
        assert_eq!(Muscle::try_from(input), expected);
    }

    #[test]
    fn test_ordered_muscles() {
        assert_eq!(
            ordered_muscles(&[Muscle::Back, Muscle::Legs, Muscle::Glutes, Muscle::Forearms]),
            vec![
                ExerciseMuscle {
                    muscle: Muscle::Back,
                    role: Role::Primary
                },
                ExerciseMuscle {
                    muscle: Muscle::Legs,
                    role: Role::Secondary
                },
                ExerciseMuscle {
                    muscle: Muscle::Glutes,
                    role: Role::Tertiary
                },
                ExerciseMuscle {
                    muscle: Muscle::Forearms,
                    role: Role::Tertiary
                },
            ]
        );
    }
}
