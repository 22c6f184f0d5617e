use std::collections::BTreeMap;

use crate::{DayID, Load, Muscle, ResolvedExercise, Role, WeekView};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MuscleVolume {
    /// Volume of exercises with this muscle as primary target.
    pub direct: f32,
    /// Weighted share of exercises with this muscle as secondary or tertiary target.
    pub indirect: f32,
}

impl MuscleVolume {
    #[must_use]
    pub fn total(&self) -> f32 {
        self.direct + self.indirect
    }
}

/// Training volume of a week in kg (weight × sets × reps).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VolumeReport {
    pub total: f32,
    pub by_muscle: BTreeMap<Muscle, MuscleVolume>,
    pub by_day: BTreeMap<DayID, f32>,
}

impl VolumeReport {
    #[must_use]
    pub fn direct(&self) -> f32 {
        self.by_muscle.values().map(|v| v.direct).sum()
    }

    #[must_use]
    pub fn indirect(&self) -> f32 {
        self.by_muscle.values().map(|v| v.indirect).sum()
    }
}

/// Load volume of a single resolved exercise.
///
/// Bodyweight exercises have no external load and contribute nothing.
/// Rep ranges count with their lower bound.
#[must_use]
pub fn exercise_volume(exercise: &ResolvedExercise) -> f32 {
    match exercise.load {
        Load::Bodyweight => 0.0,
        Load::Weight(weight) => {
            #[allow(clippy::cast_precision_loss)]
            let reps = exercise.exercise.reps.effective() as f32;
            f32::from(weight * exercise.exercise.sets) * reps
        }
    }
}

/// Sum up the volume of all exercises in `view`.
///
/// Each exercise is counted once as direct volume of its primary muscle. Other
/// targeted muscles get the fraction of it defined by the view's weighting.
#[must_use]
pub fn aggregate_week(view: &WeekView) -> VolumeReport {
    let mut report = VolumeReport::default();

    for day in &view.days {
        let mut day_volume = 0.0;

        for exercise in &day.exercises {
            let volume = exercise_volume(exercise);
            day_volume += volume;

            for (muscle, role) in exercise.exercise.muscle_roles() {
                let entry = report.by_muscle.entry(muscle).or_default();
                match role {
                    Role::Primary => entry.direct += volume,
                    Role::Secondary | Role::Tertiary => {
                        entry.indirect += volume * view.volume_weighting.fraction(role);
                    }
                }
            }
        }

        *report.by_day.entry(day.day.id.clone()).or_default() += day_volume;
        report.total += day_volume;
    }

    report
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use crate::{ExerciseID, reference, resolve_week};

    use super::*;

    #[test]
    fn test_aggregate_week_day_totals() {
        let catalog = reference::program();
        let report = aggregate_week(&resolve_week(&catalog, 1).unwrap());

        assert_eq!(report.by_day.len(), 4);
        assert_approx_eq!(report.by_day[&DayID::from("sunday")], 14746.0);
        assert_approx_eq!(report.by_day[&DayID::from("home")], 432.0);
        assert_approx_eq!(
            report.by_day.values().sum::<f32>(),
            report.total,
            report.total * 1e-6
        );
    }

    #[test]
    fn test_aggregate_week_direct_volume_equals_total() {
        let catalog = reference::program();

        for week in 1..=catalog.weeks {
            let report = resolve_week(&catalog, week).unwrap().volume();
            assert_approx_eq!(report.direct(), report.total, report.total * 1e-5);
        }
    }

    #[test]
    fn test_aggregate_week_indirect_volume() {
        let catalog = reference::program();
        let view = resolve_week(&catalog, 8).unwrap();
        let expected = view
            .exercises()
            .map(|e| {
                e.exercise
                    .muscle_roles()
                    .values()
                    .filter(|r| **r != Role::Primary)
                    .map(|r| exercise_volume(e) * view.volume_weighting.fraction(*r))
                    .sum::<f32>()
            })
            .sum::<f32>();

        let report = aggregate_week(&view);

        assert!(report.indirect() > 0.0);
        assert_approx_eq!(report.indirect(), expected, expected * 1e-5);
    }

    #[test]
    fn test_aggregate_week_bodyweight() {
        let mut catalog = reference::program();
        let home = ExerciseID::from("ex_home_1");
        for day in &mut catalog.days {
            for exercise in &mut day.exercises {
                if exercise.id == home {
                    exercise.start = Load::Bodyweight;
                }
            }
        }

        let report = aggregate_week(&resolve_week(&catalog, 1).unwrap());

        assert_eq!(report.by_day[&DayID::from("home")], 0.0);
    }

    #[test]
    fn test_aggregate_week_is_order_independent() {
        let catalog = reference::program();
        let mut reversed = catalog.clone();
        reversed.days.reverse();
        for day in &mut reversed.days {
            day.exercises.reverse();
        }

        let report = aggregate_week(&resolve_week(&catalog, 15).unwrap());
        let reversed_report = aggregate_week(&resolve_week(&reversed, 15).unwrap());

        assert_approx_eq!(report.total, reversed_report.total, report.total * 1e-5);
        assert_eq!(
            report.by_muscle.keys().collect::<Vec<_>>(),
            reversed_report.by_muscle.keys().collect::<Vec<_>>()
        );
        for (muscle, volume) in &report.by_muscle {
            let other = reversed_report.by_muscle[muscle];
            assert_approx_eq!(volume.direct, other.direct, volume.direct.max(1.0) * 1e-5);
            assert_approx_eq!(
                volume.indirect,
                other.indirect,
                volume.indirect.max(1.0) * 1e-5
            );
        }
    }

    #[test]
    fn test_aggregate_week_deload_volume_is_lower() {
        let catalog = reference::program();

        assert!(
            resolve_week(&catalog, 6).unwrap().volume().total
                < resolve_week(&catalog, 5).unwrap().volume().total
        );
    }

    #[test]
    fn test_muscle_volume_total() {
        assert_approx_eq!(
            MuscleVolume {
                direct: 100.0,
                indirect: 30.0
            }
            .total(),
            130.0
        );
    }
}
