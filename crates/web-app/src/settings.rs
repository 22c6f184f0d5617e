use hybrid_domain::ProgramCatalog;
use log::warn;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// Last week selected by the user.
    pub week: u32,
    pub show_rpe: bool,
    pub show_techniques: bool,
    pub show_warmup: bool,
    pub show_volume: bool,
}

impl Settings {
    /// Week to show for `catalog`.
    ///
    /// A stored week outside of the program, e.g. after switching to a shorter
    /// program, falls back to the first week.
    #[must_use]
    pub fn selected_week(&self, catalog: &ProgramCatalog) -> u32 {
        match catalog.check_week(self.week) {
            Ok(()) => self.week,
            Err(err) => {
                warn!("stored week is invalid, showing week 1: {err}");
                1
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week: 1,
            show_rpe: true,
            show_techniques: true,
            show_warmup: false,
            show_volume: true,
        }
    }
}
