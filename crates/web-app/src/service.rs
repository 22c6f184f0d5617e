use std::collections::VecDeque;

use ::log::error;
use hybrid_domain::{self as domain, ProgramCatalog};

use crate::{Settings, SettingsRepository, SettingsService, WeekPage, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> Service<R> {
    /// Week to show when the application starts.
    pub fn selected_week(&self, catalog: &ProgramCatalog) -> u32 {
        match self.get_settings() {
            Ok(settings) => settings.selected_week(catalog),
            Err(err) => {
                error!("failed to read settings: {err}");
                1
            }
        }
    }

    pub fn select_week(&self, catalog: &ProgramCatalog, week: u32) -> Result<(), String> {
        catalog.check_week(week).map_err(|err| err.to_string())?;
        let settings = self.get_settings()?;
        self.set_settings(Settings { week, ..settings })
    }

    /// Page of the selected week, shown with default settings if they cannot be read.
    pub fn week_page(&self, catalog: &ProgramCatalog) -> Result<WeekPage, domain::Error> {
        let settings = self.get_settings().unwrap_or_else(|err| {
            error!("failed to read settings: {err}");
            Settings::default()
        });
        let view = domain::resolve_week(catalog, settings.selected_week(catalog))?;
        Ok(WeekPage::new(catalog, &view, &settings))
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings()
    }

    fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings)
    }
}
