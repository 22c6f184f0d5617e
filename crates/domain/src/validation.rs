use std::collections::{BTreeSet, HashSet};

use crate::{
    BlockID, ConfigurationError, Error, Exercise, ExerciseID, ProgramCatalog, ReferenceError,
    Role, Rotation,
};

/// All defects found in a catalog.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Validation {
    pub errors: Vec<Error>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, error: impl Into<Error>) {
        self.errors.push(error.into());
    }
}

/// Check the structural consistency of `catalog`.
///
/// Validation does not stop at the first defect. A catalog without defects can
/// be resolved for every week of the program without configuration or
/// reference errors.
#[must_use]
pub fn validate_catalog(catalog: &ProgramCatalog) -> Validation {
    let mut validation = Validation::default();

    validate_weeks(catalog, &mut validation);
    validate_deload(catalog, &mut validation);
    validate_goals(catalog, &mut validation);
    validate_days(catalog, &mut validation);

    validation
}

fn validate_weeks(catalog: &ProgramCatalog, validation: &mut Validation) {
    if catalog.weeks == 0 {
        validation.push(ConfigurationError::NoWeeks);
    }

    let mut ids = HashSet::new();

    for block in &catalog.blocks {
        if !ids.insert(block.id) {
            validation.push(ConfigurationError::DuplicateBlock(block.id));
        }

        if block.weeks.is_empty() {
            validation.push(ConfigurationError::EmptyBlock(block.id));
            continue;
        }

        for week in [*block.weeks.start(), *block.weeks.end()] {
            if week < 1 || week > catalog.weeks {
                validation.push(ConfigurationError::BlockWeekOutOfRange {
                    block: block.id,
                    week,
                });
            }
        }
    }

    let mut overlaps = BTreeSet::new();

    for week in 1..=catalog.weeks {
        let blocks = catalog
            .blocks
            .iter()
            .filter(|b| b.contains(week))
            .map(|b| b.id)
            .collect::<Vec<_>>();

        match blocks.as_slice() {
            [] => validation.push(ConfigurationError::UncoveredWeek(week)),
            [_] => {}
            [first, second, ..] => {
                if overlaps.insert((*first, *second)) {
                    validation.push(ConfigurationError::OverlappingBlocks {
                        week,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
    }
}

fn validate_deload(catalog: &ProgramCatalog, validation: &mut Validation) {
    for week in &catalog.deload.weeks {
        if *week < 1 || *week > catalog.weeks {
            validation.push(ConfigurationError::DeloadWeekOutOfRange(*week));
        }
    }

    let factor = catalog.deload.factor;
    if !(factor > 0.0 && factor <= 1.0) {
        validation.push(ConfigurationError::InvalidDeloadFactor(factor));
    }

    for fraction in [
        catalog.volume_weighting.secondary,
        catalog.volume_weighting.tertiary,
    ] {
        if !(0.0..=1.0).contains(&fraction) {
            validation.push(ConfigurationError::InvalidVolumeWeighting(fraction));
        }
    }
}

fn validate_goals(catalog: &ProgramCatalog, validation: &mut Validation) {
    for (muscle, target) in &catalog.volume_targets {
        if target.optimal.is_empty() {
            validation.push(ConfigurationError::InvalidVolumeTarget(*muscle));
        }
    }

    let mut weeks = HashSet::new();

    for milestone in &catalog.milestones {
        if milestone.week < 1 || milestone.week > catalog.weeks {
            validation.push(ConfigurationError::MilestoneWeekOutOfRange(milestone.week));
        }
        if !weeks.insert(milestone.week) {
            validation.push(ConfigurationError::DuplicateMilestone(milestone.week));
        }
    }
}

fn validate_days(catalog: &ProgramCatalog, validation: &mut Validation) {
    let mut day_ids = HashSet::new();
    let mut exercise_ids = HashSet::new();
    let defined_ids = catalog
        .exercises()
        .map(|e| &e.id)
        .collect::<HashSet<&ExerciseID>>();
    let blocks = catalog
        .blocks
        .iter()
        .map(|b| b.id)
        .collect::<BTreeSet<BlockID>>();

    for day in &catalog.days {
        if !day_ids.insert(&day.id) {
            validation.push(ConfigurationError::DuplicateDay(day.id.clone()));
        }

        for exercise in &day.exercises {
            if exercise.id.is_empty() {
                validation.push(ConfigurationError::MissingExerciseID(exercise.name.clone()));
            } else if !exercise_ids.insert(&exercise.id) {
                validation.push(ConfigurationError::DuplicateExercise(exercise.id.clone()));
            }

            validate_exercise(exercise, validation);
            validate_references(exercise, &defined_ids, &blocks, validation);
        }
    }
}

fn validate_exercise(exercise: &Exercise, validation: &mut Validation) {
    let id = || exercise.id.clone();

    if exercise.sets == 0 {
        validation.push(ConfigurationError::NoSets(id()));
    }

    if !exercise.reps.is_valid() {
        validation.push(ConfigurationError::InvalidReps(id()));
    }

    if exercise.muscles.is_empty() {
        validation.push(ConfigurationError::NoMuscles(id()));
    } else if exercise
        .muscle_roles()
        .values()
        .filter(|r| **r == Role::Primary)
        .count()
        != 1
    {
        validation.push(ConfigurationError::PrimaryMuscle(id()));
    }

    if let Some(weight) = exercise.start.weight() {
        if !weight.is_finite() {
            validation.push(ConfigurationError::NonFiniteStartWeight(id()));
        } else if weight.is_negative() {
            validation.push(ConfigurationError::NegativeStartWeight(id()));
        }
    }

    let increment = exercise.progression.increment;
    if !increment.is_finite() {
        validation.push(ConfigurationError::NonFiniteIncrement(id()));
    } else if increment.is_negative() {
        validation.push(ConfigurationError::NegativeIncrement(id()));
    }

    if exercise.progression.frequency_weeks == 0 {
        validation.push(ConfigurationError::ZeroProgressionFrequency(id()));
    }
}

fn validate_references(
    exercise: &Exercise,
    defined_ids: &HashSet<&ExerciseID>,
    blocks: &BTreeSet<BlockID>,
    validation: &mut Validation,
) {
    if let Some(partner) = &exercise.superset_with {
        if *partner == exercise.id {
            validation.push(ConfigurationError::SelfSuperset(exercise.id.clone()));
        } else if !defined_ids.contains(partner) {
            validation.push(ReferenceError::Superset {
                exercise: exercise.id.clone(),
                partner: partner.clone(),
            });
        }
    }

    for block in exercise.techniques.keys() {
        if !blocks.contains(block) {
            validation.push(ReferenceError::TechniqueBlock {
                exercise: exercise.id.clone(),
                block: *block,
            });
        }
    }

    if let Some(Rotation::ByBlock(names)) = &exercise.rotation {
        for block in names.keys() {
            if !blocks.contains(block) {
                validation.push(ReferenceError::RotationBlock {
                    exercise: exercise.id.clone(),
                    block: *block,
                });
            }
        }
        for block in blocks {
            if !names.contains_key(block) {
                validation.push(ConfigurationError::MissingRotation {
                    exercise: exercise.id.clone(),
                    block: *block,
                });
            }
        }
    }
}
