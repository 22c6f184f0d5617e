use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Record all log messages up to `level` into `repository`.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Ok(log) = LOG.lock() else {
            return;
        };

        if let Some(ref repository) = *log {
            let _ = repository.write_entry(Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<Entry>>);

    impl Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            self.0
                .lock()
                .map(|e| e.clone())
                .map_err(|err| Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            self.0
                .lock()
                .map(|mut e| e.push_front(entry))
                .map_err(|err| Error::Unknown(err.to_string()))
        }
    }

    #[test]
    fn test_logger_writes_entries() {
        let entries = Arc::new(Entries::default());
        *LOG.lock().unwrap() = Some(entries.clone());
        log::set_max_level(LevelFilter::Info);

        LOGGER.log(
            &Record::builder()
                .args(format_args!("week 27 is invalid"))
                .level(Level::Warn)
                .build(),
        );
        LOGGER.log(
            &Record::builder()
                .args(format_args!("ignored"))
                .level(Level::Debug)
                .build(),
        );

        let entries = entries.read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[0].message, "week 27 is invalid");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            time: String::from("Oct 19 10:00:00"),
            level: Level::Error,
            message: String::from("failed"),
        };
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"time":"Oct 19 10:00:00","level":"Error","message":"failed"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&json).unwrap(), entry);
    }
}
