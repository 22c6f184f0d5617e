use std::collections::BTreeMap;

use log::{debug, error, warn};

use crate::{
    BlockVolume, Error, ExerciseID, ExerciseProgression, Muscle, MuscleStatistics,
    ProgramCatalog, Validation, VolumeReport, WeekView, WeekVolume, Weight, average_loads,
    block_distribution, exercise_progression, muscle_statistics, program_volume, resolve_week,
    validate_catalog,
};

pub trait ProgramService {
    fn get_program(&self) -> &ProgramCatalog;
    fn get_week(&self, week: u32) -> Result<WeekView<'_>, Error>;
    fn get_volume(&self, week: u32) -> Result<VolumeReport, Error>;
    fn get_exercise_progression(&self, id: &ExerciseID) -> Result<ExerciseProgression, Error>;
    fn get_program_volume(&self) -> Result<Vec<WeekVolume>, Error>;
    fn get_block_distribution(&self) -> Result<Vec<BlockVolume>, Error>;
    fn get_muscle_statistics(&self) -> Result<Vec<MuscleStatistics>, Error>;
    fn get_average_loads(&self) -> Result<BTreeMap<Muscle, Weight>, Error>;
    fn validate_program(&self) -> Validation;

    fn validate_week(&self, week: &str) -> Result<u32, WeekInputError> {
        let week = week
            .trim()
            .parse::<u32>()
            .map_err(|_| WeekInputError::ParseError)?;
        self.get_program().check_week(week)?;
        Ok(week)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeekInputError {
    #[error("Week must be a whole number")]
    ParseError,
    #[error(transparent)]
    Invalid(#[from] Error),
}

pub struct Service {
    catalog: ProgramCatalog,
}

impl Service {
    /// Create a service for `catalog` and report its defects.
    #[must_use]
    pub fn new(catalog: ProgramCatalog) -> Self {
        let service = Self { catalog };
        service.validate_program();
        service
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => {
                if err.is_out_of_range() {
                    debug!("failed to {} {}: {err}", $action, $entity);
                } else {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            }
        }
        result
    }};
}

impl ProgramService for Service {
    fn get_program(&self) -> &ProgramCatalog {
        &self.catalog
    }

    fn get_week(&self, week: u32) -> Result<WeekView<'_>, Error> {
        log_on_error!(resolve_week(&self.catalog, week), "get", "week")
    }

    fn get_volume(&self, week: u32) -> Result<VolumeReport, Error> {
        log_on_error!(
            resolve_week(&self.catalog, week).map(|view| view.volume()),
            "get",
            "volume"
        )
    }

    fn get_exercise_progression(&self, id: &ExerciseID) -> Result<ExerciseProgression, Error> {
        log_on_error!(
            exercise_progression(&self.catalog, id),
            "get",
            "exercise progression"
        )
    }

    fn get_program_volume(&self) -> Result<Vec<WeekVolume>, Error> {
        log_on_error!(program_volume(&self.catalog), "get", "program volume")
    }

    fn get_block_distribution(&self) -> Result<Vec<BlockVolume>, Error> {
        log_on_error!(
            block_distribution(&self.catalog),
            "get",
            "block distribution"
        )
    }

    fn get_muscle_statistics(&self) -> Result<Vec<MuscleStatistics>, Error> {
        log_on_error!(muscle_statistics(&self.catalog), "get", "muscle statistics")
    }

    fn get_average_loads(&self) -> Result<BTreeMap<Muscle, Weight>, Error> {
        log_on_error!(average_loads(&self.catalog), "get", "average loads")
    }

    fn validate_program(&self) -> Validation {
        let validation = validate_catalog(&self.catalog);
        for message in validation.messages() {
            warn!("invalid program \"{}\": {message}", self.catalog.name);
        }
        validation
    }
}
