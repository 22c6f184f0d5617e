use crate::{ConfigurationError, Error, Exercise, Load, ProgramCatalog, Weight};

/// Number of progression increments applied to `exercise` by `week`.
///
/// Deload weeks do not count as elapsed weeks, so the week after a deload
/// continues where the week before it left off.
pub fn progression_steps(
    catalog: &ProgramCatalog,
    exercise: &Exercise,
    week: u32,
) -> Result<u32, Error> {
    catalog.check_week(week)?;

    let frequency = exercise.progression.frequency_weeks;

    if frequency == 0 {
        return Err(ConfigurationError::ZeroProgressionFrequency(exercise.id.clone()).into());
    }

    Ok(catalog.non_deload_weeks_before(week) / frequency)
}

/// Working load of `exercise` in `week`.
///
/// Bodyweight exercises are returned unchanged. In deload weeks the progressed
/// weight is reduced by the catalog's deload factor and rounded to the nearest
/// loadable step. Outside of deload weeks the weight is not rounded.
pub fn compute_weight(
    catalog: &ProgramCatalog,
    exercise: &Exercise,
    week: u32,
) -> Result<Load, Error> {
    catalog.check_week(week)?;

    let Load::Weight(start) = exercise.start else {
        return Ok(Load::Bodyweight);
    };

    let steps = progression_steps(catalog, exercise, week)?;
    let weight = start + exercise.progression.increment * steps;

    if catalog.is_deload(week) {
        Ok(Load::Weight((weight * catalog.deload.factor).rounded()))
    } else {
        Ok(Load::Weight(weight))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmupSet {
    pub weight: Weight,
    pub reps: u32,
}

const WARMUP_PROTOCOL: [(f32, u32); 4] = [(0.4, 8), (0.6, 5), (0.8, 3), (0.9, 1)];

/// Ramp-up sets to perform before the working sets at `load`.
#[must_use]
pub fn warmup_sets(load: Load) -> Vec<WarmupSet> {
    match load {
        Load::Bodyweight => vec![],
        Load::Weight(weight) => WARMUP_PROTOCOL
            .iter()
            .map(|(fraction, reps)| WarmupSet {
                weight: (weight * *fraction).rounded(),
                reps: *reps,
            })
            .collect(),
    }
}
