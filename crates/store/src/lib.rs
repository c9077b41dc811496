use mealplan::WeeklyPlan;
use recipe::Catalog;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed key for the recipe catalog.
pub const RECIPES_KEY: &str = "recipes";
/// Fixed key for the persisted weekly plan.
pub const WEEKLY_PLAN_KEY: &str = "weekly_plan";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt value for key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key-value store, one JSON document per key.
///
/// The application-local stand-in for browser local storage: values are
/// saved and restored verbatim under fixed keys, and a key that was never
/// written reads back as absent rather than failing.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Store { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the value stored under `key`, or `None` if never written.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        fs::write(&path, raw).map_err(|source| StoreError::Io { path, source })?;
        tracing::debug!(key, "value persisted");
        Ok(())
    }

    /// Load the catalog; a store with no catalog yet yields an empty one.
    pub fn load_catalog(&self) -> Result<Catalog, StoreError> {
        Ok(self.get(RECIPES_KEY)?.unwrap_or_default())
    }

    pub fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError> {
        self.set(RECIPES_KEY, catalog)
    }

    /// Load the persisted plan, if one was ever saved.
    pub fn load_plan(&self) -> Result<Option<WeeklyPlan>, StoreError> {
        self.get(WEEKLY_PLAN_KEY)
    }

    pub fn save_plan(&self, plan: &WeeklyPlan) -> Result<(), StoreError> {
        self.set(WEEKLY_PLAN_KEY, plan)
    }
}
