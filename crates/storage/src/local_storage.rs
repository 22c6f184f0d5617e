use std::{
    collections::{HashMap, VecDeque},
    fs, io,
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, anyhow};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

use hybrid_web_app::{Settings, SettingsRepository, log};

use crate::Error;

/// Number of log entries kept in storage.
const LOG_CAPACITY: usize = 100;

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

/// String storage addressed by key.
pub trait Backend: Send + Sync + 'static {
    fn get(&self, key: Key) -> Result<Option<String>, Error>;
    fn set(&self, key: Key, value: String) -> Result<(), Error>;
}

#[derive(Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<Key, String>>,
}

impl Backend for MemoryBackend {
    fn get(&self, key: Key) -> Result<Option<String>, Error> {
        Ok(self
            .values
            .lock()
            .map_err(|err| anyhow!("failed to lock storage: {err}"))?
            .get(&key)
            .cloned())
    }

    fn set(&self, key: Key, value: String) -> Result<(), Error> {
        self.values
            .lock()
            .map_err(|err| anyhow!("failed to lock storage: {err}"))?
            .insert(key, value);
        Ok(())
    }
}

/// One JSON file per key in a directory.
pub struct FileBackend {
    directory: PathBuf,
}

impl FileBackend {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path(&self, key: Key) -> PathBuf {
        self.directory.join(format!("{}.json", key.as_ref()))
    }
}

impl Backend for FileBackend {
    fn get(&self, key: Key) -> Result<Option<String>, Error> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::from(
                anyhow::Error::from(err).context(format!("failed to read {}", path.display())),
            )),
        }
    }

    fn set(&self, key: Key, value: String) -> Result<(), Error> {
        let path = self.path(key);
        fs::create_dir_all(&self.directory)
            .and_then(|()| fs::write(&path, value))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

pub struct LocalStorage<B> {
    backend: B,
}

impl<B: Backend> LocalStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match self.backend.get(key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        self.backend.set(key, serde_json::to_string(value)?)
    }
}

impl<B: Backend> SettingsRepository for LocalStorage<B> {
    fn read_settings(&self) -> Result<Settings, String> {
        self.get(Key::Settings)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.set(Key::Settings, &settings)
            .map_err(|err| err.to_string())
    }
}

impl<B: Backend> log::Repository for LocalStorage<B> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        self.set(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
