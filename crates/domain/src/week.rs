use crate::{
    Error, Exercise, Load, ProgramCatalog, RPERange, Technique, TrainingBlock, TrainingDay,
    VolumeReport, VolumeWeighting, aggregate_week, compute_weight, resolve_technique,
};

/// Fully resolved program week.
///
/// A view borrows everything it does not compute from the catalog it was
/// resolved from. It holds no state and is never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView<'a> {
    pub week: u32,
    pub block: &'a TrainingBlock,
    pub deload: bool,
    pub days: Vec<DayView<'a>>,
    pub volume_weighting: VolumeWeighting,
}

impl WeekView<'_> {
    #[must_use]
    pub fn volume(&self) -> VolumeReport {
        aggregate_week(self)
    }

    pub fn exercises(&self) -> impl Iterator<Item = &ResolvedExercise<'_>> {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayView<'a> {
    pub day: &'a TrainingDay,
    pub exercises: Vec<ResolvedExercise<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedExercise<'a> {
    pub exercise: &'a Exercise,
    /// Name after rotation.
    pub name: &'a str,
    pub load: Load,
    pub technique: Option<&'a Technique>,
    pub tempo: &'a str,
    pub rpe: RPERange,
    pub deload: bool,
}

pub fn resolve_week(catalog: &ProgramCatalog, week: u32) -> Result<WeekView<'_>, Error> {
    let block = catalog.block_for_week(week)?;
    let deload = catalog.is_deload(week);

    let days = catalog
        .days
        .iter()
        .map(|day| {
            Ok(DayView {
                day,
                exercises: day
                    .exercises
                    .iter()
                    .map(|exercise| resolve_exercise(catalog, block, exercise, week))
                    .collect::<Result<Vec<_>, Error>>()?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(WeekView {
        week,
        block,
        deload,
        days,
        volume_weighting: catalog.volume_weighting,
    })
}

fn resolve_exercise<'a>(
    catalog: &'a ProgramCatalog,
    block: &'a TrainingBlock,
    exercise: &'a Exercise,
    week: u32,
) -> Result<ResolvedExercise<'a>, Error> {
    let deload = catalog.is_deload(week);
    let (tempo, rpe) = if deload {
        (catalog.deload.tempo.as_str(), catalog.deload.rpe)
    } else {
        (
            exercise
                .tempo
                .as_deref()
                .unwrap_or(block.technique.tempo.as_str()),
            block.technique.rpe,
        )
    };

    Ok(ResolvedExercise {
        exercise,
        name: exercise.display_name(block.id, week)?,
        load: compute_weight(catalog, exercise, week)?,
        technique: resolve_technique(catalog, exercise, week)?,
        tempo,
        rpe,
        deload,
    })
}
