//! The settings collaborator: the only writer of the settings channel.
//!
//! Every snapshot is validated before it is published, so derived visuals
//! never see a non-positive zoom or an out-of-range start hour.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::SettingsResult;
use crate::io::settings_file::{load_settings, save_settings};
use crate::model::Settings;
use crate::reactive::{Readable, Store, StoreReader};

#[derive(Debug, Clone)]
pub struct SettingsStore {
    store: Store<Settings>,
    reader: StoreReader<Settings>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// A store that is never persisted.
    pub fn in_memory(settings: Settings) -> SettingsResult<Self> {
        settings.validate()?;
        let store = Store::new(settings);
        Ok(Self {
            reader: store.reader(),
            store,
            path: None,
        })
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or invalid. Later changes are written back to `path`.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match load_settings(&path) {
            Ok(settings) => {
                info!("event=settings_loaded module=settings path={}", path.display());
                settings
            }
            Err(err) => {
                warn!(
                    "event=settings_loaded module=settings status=fallback path={} error={}",
                    path.display(),
                    err
                );
                Settings::default()
            }
        };
        let store = Store::new(settings);
        Self {
            reader: store.reader(),
            store,
            path: Some(path),
        }
    }

    /// The settings channel consumed by derived visuals. Read-only: every
    /// write goes through [`SettingsStore::set`] and its validation.
    ///
    /// ```compile_fail
    /// use day_planner::settings_store::SettingsStore;
    /// use day_planner::Settings;
    ///
    /// let store = SettingsStore::in_memory(Settings::default()).unwrap();
    /// store.channel().set(Settings { zoom_level: -1.0, ..Settings::default() });
    /// ```
    pub fn channel(&self) -> &StoreReader<Settings> {
        &self.reader
    }

    pub fn get(&self) -> Settings {
        self.store.get()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Validate and publish a new snapshot, then persist it.
    ///
    /// An invalid snapshot is rejected and nothing is published. An equal
    /// snapshot is a no-op. If persisting fails the snapshot stays published
    /// and the error is returned.
    pub fn set(&self, settings: Settings) -> SettingsResult<()> {
        if let Err(err) = settings.validate() {
            warn!("event=settings_rejected module=settings error={err}");
            return Err(err);
        }
        if self.store.with(|current| *current == settings) {
            return Ok(());
        }
        self.store.set(settings);
        self.save()
    }

    /// Edit a copy of the current settings and [`set`](Self::set) it.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> SettingsResult<()> {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Write the current snapshot to disk, if this store has a path.
    pub fn save(&self) -> SettingsResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.store.with(|settings| save_settings(settings, path))?;
        info!("event=settings_saved module=settings path={}", path.display());
        Ok(())
    }
}
