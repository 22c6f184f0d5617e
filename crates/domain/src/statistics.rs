use std::collections::{BTreeMap, BTreeSet};

use crate::{
    BlockID, DayID, Error, ExerciseID, Load, Muscle, MuscleVolume, ProgramCatalog,
    ReferenceError, VolumeReport, VolumeTarget, Weight, compute_weight, resolve_week,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseProgression {
    pub exercise: ExerciseID,
    pub name: String,
    pub weeks: Vec<ProgressionPoint>,
    pub start: Load,
    /// Load of the last regular week.
    pub end: Load,
    pub gain: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionPoint {
    pub week: u32,
    pub load: Load,
    pub deload: bool,
}

/// Load of an exercise in every week of the program.
///
/// Loads are rounded to the nearest loadable step. The end load ignores
/// trailing deload weeks, so the gain reflects the progression actually reached.
pub fn exercise_progression(
    catalog: &ProgramCatalog,
    id: &ExerciseID,
) -> Result<ExerciseProgression, Error> {
    let exercise = catalog
        .exercise(id)
        .ok_or_else(|| ReferenceError::Exercise(id.clone()))?;

    let weeks = (1..=catalog.weeks)
        .map(|week| {
            let load = match compute_weight(catalog, exercise, week)? {
                Load::Bodyweight => Load::Bodyweight,
                Load::Weight(weight) => Load::Weight(weight.rounded()),
            };
            Ok(ProgressionPoint {
                week,
                load,
                deload: catalog.is_deload(week),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let end = weeks
        .iter()
        .rev()
        .find(|p| !p.deload)
        .map_or(exercise.start, |p| p.load);
    let gain = match (exercise.start, end) {
        (Load::Weight(start), Load::Weight(end)) => Weight::kg(f32::from(end) - f32::from(start)),
        _ => Weight::ZERO,
    };

    Ok(ExerciseProgression {
        exercise: exercise.id.clone(),
        name: exercise.name.clone(),
        weeks,
        start: exercise.start,
        end,
        gain,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekVolume {
    pub week: u32,
    pub block: BlockID,
    pub deload: bool,
    pub volume: VolumeReport,
}

/// Volume of every week of the program.
pub fn program_volume(catalog: &ProgramCatalog) -> Result<Vec<WeekVolume>, Error> {
    (1..=catalog.weeks)
        .map(|week| {
            let view = resolve_week(catalog, week)?;
            Ok(WeekVolume {
                week,
                block: view.block.id,
                deload: view.deload,
                volume: view.volume(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockVolume {
    pub block: BlockID,
    pub name: String,
    pub technique: String,
    /// Total volume of each week of the block.
    pub weeks: Vec<(u32, f32)>,
    pub total: f32,
    pub average: f32,
    pub min: f32,
    pub max: f32,
}

/// Distribution of the weekly volume within each block.
pub fn block_distribution(catalog: &ProgramCatalog) -> Result<Vec<BlockVolume>, Error> {
    let volume = program_volume(catalog)?;

    Ok(catalog
        .blocks
        .iter()
        .map(|block| {
            let weeks = volume
                .iter()
                .filter(|v| v.block == block.id)
                .map(|v| (v.week, v.volume.total))
                .collect::<Vec<_>>();
            let total = weeks.iter().map(|(_, v)| v).sum::<f32>();
            let average = mean(&weeks);
            let min = weeks
                .iter()
                .map(|(_, v)| *v)
                .reduce(f32::min)
                .unwrap_or_default();
            let max = weeks
                .iter()
                .map(|(_, v)| *v)
                .reduce(f32::max)
                .unwrap_or_default();

            BlockVolume {
                block: block.id,
                name: block.name.clone(),
                technique: block.technique.name.clone(),
                weeks,
                total,
                average,
                min,
                max,
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleStatistics {
    pub muscle: Muscle,
    pub target: Option<VolumeTarget>,
    /// Direct and weighted indirect volume of each week.
    pub weeks: Vec<(u32, f32)>,
    pub average: f32,
}

/// Weekly volume of every trained or targeted muscle.
pub fn muscle_statistics(catalog: &ProgramCatalog) -> Result<Vec<MuscleStatistics>, Error> {
    let volume = program_volume(catalog)?;
    let muscles = catalog
        .volume_targets
        .keys()
        .copied()
        .chain(volume.iter().flat_map(|v| v.volume.by_muscle.keys().copied()))
        .collect::<BTreeSet<_>>();

    Ok(muscles
        .into_iter()
        .map(|muscle| {
            let weeks = volume
                .iter()
                .map(|v| {
                    (
                        v.week,
                        v.volume
                            .by_muscle
                            .get(&muscle)
                            .map_or(0.0, MuscleVolume::total),
                    )
                })
                .collect::<Vec<_>>();
            MuscleStatistics {
                muscle,
                target: catalog.volume_targets.get(&muscle).cloned(),
                average: mean(&weeks),
                weeks,
            }
        })
        .collect())
}

/// Mean working weight of the exercises training each muscle over the whole
/// program, to one decimal place. Bodyweight exercises are not counted.
pub fn average_loads(catalog: &ProgramCatalog) -> Result<BTreeMap<Muscle, Weight>, Error> {
    let mut loads: BTreeMap<Muscle, (f32, u32)> = BTreeMap::new();

    for week in 1..=catalog.weeks {
        let view = resolve_week(catalog, week)?;
        for exercise in view.exercises() {
            let Load::Weight(weight) = exercise.load else {
                continue;
            };
            for muscle in exercise.exercise.muscle_roles().into_keys() {
                let (sum, count) = loads.entry(muscle).or_default();
                *sum += f32::from(weight);
                *count += 1;
            }
        }
    }

    Ok(loads
        .into_iter()
        .map(|(muscle, (sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let average = sum / count as f32;
            (muscle, Weight::kg((average * 10.0).round() / 10.0))
        })
        .collect())
}

fn mean(weeks: &[(u32, f32)]) -> f32 {
    if weeks.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = weeks.len() as f32;
    weeks.iter().map(|(_, v)| v).sum::<f32>() / count
}

/// Days on which each muscle is targeted, either as primary or as supporting muscle.
#[must_use]
pub fn training_frequency(catalog: &ProgramCatalog) -> BTreeMap<Muscle, BTreeSet<DayID>> {
    let mut frequency: BTreeMap<Muscle, BTreeSet<DayID>> = BTreeMap::new();

    for day in &catalog.days {
        for exercise in &day.exercises {
            for muscle in exercise.muscle_roles().into_keys() {
                frequency.entry(muscle).or_default().insert(day.id.clone());
            }
        }
    }

    frequency
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Property, reference};

    use super::*;

    #[test]
    fn test_exercise_progression() {
        let progression =
            exercise_progression(&reference::program(), &ExerciseID::from("ex_sun_1")).unwrap();

        assert_eq!(progression.name, "Trap Bar Deadlift");
        assert_eq!(progression.weeks.len(), 26);
        assert_eq!(
            progression.weeks[5],
            ProgressionPoint {
                week: 6,
                load: Load::Weight(Weight::kg(48.0)),
                deload: true,
            }
        );
        assert_eq!(progression.start, Load::Weight(Weight::kg(75.0)));
        assert_eq!(progression.end, Load::Weight(Weight::kg(105.0)));
        assert_eq!(progression.gain, Weight::kg(30.0));
    }

    #[test]
    fn test_exercise_progression_rounds_deload_weeks() {
        let progression =
            exercise_progression(&reference::program(), &ExerciseID::from("ex_tue_5")).unwrap();

        for point in progression.weeks {
            let Load::Weight(weight) = point.load else {
                panic!("unexpected bodyweight load");
            };
            assert_eq!(weight, weight.rounded(), "week {}", point.week);
        }
    }

    #[test]
    fn test_exercise_progression_unknown_exercise() {
        assert_eq!(
            exercise_progression(&reference::program(), &ExerciseID::from("ex_unknown")),
            Err(ReferenceError::Exercise(ExerciseID::from("ex_unknown")).into())
        );
    }

    #[test]
    fn test_program_volume() {
        let catalog = reference::program();
        let volume = program_volume(&catalog).unwrap();

        assert_eq!(volume.len(), 26);
        assert_eq!(
            volume
                .iter()
                .filter(|v| v.deload)
                .map(|v| v.week)
                .collect::<Vec<_>>(),
            vec![6, 12, 18, 24, 26]
        );
        assert_eq!(volume[7].block, BlockID::Two);
        assert!(volume[25].volume.total < volume[24].volume.total);
    }

    #[test]
    fn test_block_distribution() {
        let catalog = reference::program();
        let distribution = block_distribution(&catalog).unwrap();

        assert_eq!(
            distribution
                .iter()
                .map(|b| (b.block, b.weeks.len()))
                .collect::<Vec<_>>(),
            vec![
                (BlockID::One, 6),
                (BlockID::Two, 6),
                (BlockID::Three, 6),
                (BlockID::Four, 8)
            ]
        );
        assert_eq!(distribution[1].technique, "Rest-Pause");

        for block in &distribution {
            assert!(block.min <= block.average && block.average <= block.max);
            assert_approx_eq!(
                block.total,
                block.weeks.iter().map(|(_, v)| v).sum::<f32>(),
                block.total * 1e-6
            );
        }

        let first = &distribution[0];
        assert_eq!(
            first.weeks.iter().find(|(_, v)| *v == first.min).map(|(w, _)| *w),
            Some(6)
        );
    }

    #[test]
    fn test_muscle_statistics() {
        let catalog = reference::program();
        let volume = program_volume(&catalog).unwrap();
        let statistics = muscle_statistics(&catalog).unwrap();

        assert_eq!(
            statistics.iter().map(|s| s.muscle).collect::<Vec<_>>(),
            Muscle::iter().copied().collect::<Vec<_>>()
        );

        for muscle in &statistics {
            assert_eq!(muscle.weeks.len(), 26);
            assert_approx_eq!(
                muscle.average * 26.0,
                muscle.weeks.iter().map(|(_, v)| v).sum::<f32>(),
                1.0
            );
            assert_eq!(
                muscle.target.as_ref(),
                catalog.volume_targets.get(&muscle.muscle)
            );
        }

        let back = &statistics[0];
        assert_eq!(back.muscle, Muscle::Back);
        assert_eq!(
            back.weeks[0].1,
            volume[0].volume.by_muscle[&Muscle::Back].total()
        );
        assert!(back.weeks[5].1 < back.weeks[4].1);

        let legs = statistics.iter().find(|s| s.muscle == Muscle::Legs).unwrap();
        assert_eq!(legs.target, None);
    }

    #[test]
    fn test_average_loads() {
        let loads = average_loads(&reference::program()).unwrap();

        assert_approx_eq!(f32::from(loads[&Muscle::Legs]), 83.9, 1e-4);
        for load in loads.values() {
            assert_eq!(f32::from(*load), (f32::from(*load) * 10.0).round() / 10.0);
        }
    }

    #[test]
    fn test_average_loads_ignores_bodyweight() {
        let mut catalog = reference::program();
        for exercise in catalog.days.iter_mut().flat_map(|d| d.exercises.iter_mut()) {
            if exercise.muscle_roles().contains_key(&Muscle::Legs) {
                exercise.start = Load::Bodyweight;
            }
        }

        assert_eq!(average_loads(&catalog).unwrap().get(&Muscle::Legs), None);
    }

    #[rstest]
    #[case(Muscle::Biceps, &["sunday", "friday", "home"])]
    #[case(Muscle::Quads, &["sunday", "tuesday", "friday"])]
    #[case(Muscle::Hamstrings, &["friday"])]
    #[case(Muscle::Legs, &["sunday"])]
    fn test_training_frequency(#[case] muscle: Muscle, #[case] expected: &[&str]) {
        assert_eq!(
            training_frequency(&reference::program())[&muscle],
            expected
                .iter()
                .map(|d| DayID::from(*d))
                .collect::<BTreeSet<_>>()
        );
    }
}
