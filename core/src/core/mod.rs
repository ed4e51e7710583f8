//! Panel store: typed load/save/mutate operations over two durable
//! records, last-write-wins, one logical writer.

use crate::types::settings::DEFAULT_SPACES;
use crate::types::{Breaker, BreakerType, Config, InterruptionType, PanelSettings, SettingsError};
use error::PanelError;

pub(crate) mod db;
pub(crate) mod record;

pub use db::Database;
pub use db::error::DatabaseError;
pub use record::error::StoreError;
pub use record::{MemoryStore, RecordStore};

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum PanelError {
        #[error("store error: {0}")]
        Store(#[from] StoreError),

        #[error("invalid settings: {0}")]
        Settings(#[from] SettingsError),
    }
}

/// Record key for the panel settings object.
const SETTINGS_RECORD: &str = "panel_settings";

/// Record key for the breaker array.
const BREAKERS_RECORD: &str = "panel_breakers";

/// Typed access to the two panel records.
///
/// Mutating operations return the updated breaker collection so the
/// caller can re-render (and recompute the layout) without a second
/// read. The store never validates business rules; callers gate
/// `save_settings` on [`PanelStore::check_settings`].
pub struct PanelStore<S = Database> {
    store: S,
}

impl PanelStore<Database> {
    /// Opens the panel store over the on-disk database.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let db = Database::new(config)?;
        Ok(Self::new(db))
    }
}

impl<S: RecordStore> PanelStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Read operations.
impl<S: RecordStore> PanelStore<S> {
    /// Returns the stored panel settings, or `None` before first-time
    /// setup. An unreadable record is discarded as if absent so the
    /// caller falls back to the setup flow.
    pub fn settings(&self) -> Result<Option<PanelSettings>, StoreError> {
        let Some(json) = self.store.read(SETTINGS_RECORD)? else {
            return Ok(None);
        };

        let mut settings: PanelSettings = match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("discarding unreadable settings record: {err}");
                return Ok(None);
            }
        };

        // Records written before the spaces field existed read as zero.
        if settings.spaces == 0 {
            settings.spaces = DEFAULT_SPACES;
        }

        Ok(Some(settings))
    }

    /// Returns the breakers in stored order, empty before setup. An
    /// unreadable record reads as empty.
    pub fn breakers(&self) -> Result<Vec<Breaker>, StoreError> {
        let Some(json) = self.store.read(BREAKERS_RECORD)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&json) {
            Ok(breakers) => Ok(breakers),
            Err(err) => {
                tracing::warn!("discarding unreadable breakers record: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// True once settings exist and at least one breaker is stored.
    pub fn is_setup_complete(&self) -> Result<bool, StoreError> {
        Ok(self.settings()?.is_some() && !self.breakers()?.is_empty())
    }
}

/// Settings operations.
impl<S: RecordStore> PanelStore<S> {
    /// Replaces the settings record. When the breaker count changes
    /// against a previously stored record, the breaker collection is
    /// resized to match.
    pub fn save_settings(&mut self, settings: &PanelSettings) -> Result<(), StoreError> {
        let previous = self.settings()?;

        let json = serde_json::to_string(settings).expect("serialization failed");
        self.store.write(SETTINGS_RECORD, &json)?;
        tracing::debug!(
            service_rating = settings.service_rating,
            breaker_count = settings.breaker_count,
            spaces = settings.spaces,
            "settings saved"
        );

        if let Some(previous) = previous
            && previous.breaker_count != settings.breaker_count
        {
            self.reconcile_breaker_count(settings.breaker_count)?;
        }

        Ok(())
    }

    /// Runs the record-level rules plus the stored-state check that the
    /// existing breakers still fit the proposed space count.
    pub fn check_settings(&self, settings: &PanelSettings) -> Result<(), PanelError> {
        settings.validate()?;

        let current = self.breakers()?.len() as i32;
        if current > settings.spaces {
            return Err(SettingsError::InsufficientSpaces {
                current,
                spaces: settings.spaces,
            }
            .into());
        }

        Ok(())
    }
}

/// Breaker operations.
impl<S: RecordStore> PanelStore<S> {
    /// Replaces the whole breaker collection in one record write.
    pub fn save_breakers(&mut self, breakers: &[Breaker]) -> Result<(), StoreError> {
        let json = serde_json::to_string(breakers).expect("serialization failed");
        self.store.write(BREAKERS_RECORD, &json)
    }

    /// Replaces the breaker with a matching id. An unknown id leaves
    /// the collection untouched.
    pub fn update_breaker(&mut self, updated: &Breaker) -> Result<Vec<Breaker>, StoreError> {
        let mut breakers = self.breakers()?;

        if let Some(slot) = breakers.iter_mut().find(|b| b.id == updated.id) {
            *slot = updated.clone();
            tracing::debug!(id = updated.id, "breaker updated");
            self.save_breakers(&breakers)?;
        }

        Ok(breakers)
    }

    /// Flips the on/off state of the breaker with a matching id. An
    /// unknown id leaves the collection untouched.
    pub fn toggle_breaker(&mut self, id: i32) -> Result<Vec<Breaker>, StoreError> {
        let mut breakers = self.breakers()?;

        if let Some(breaker) = breakers.iter_mut().find(|b| b.id == id) {
            breaker.is_on = !breaker.is_on;
            tracing::debug!(id, is_on = breaker.is_on, "breaker toggled");
            self.save_breakers(&breakers)?;
        }

        Ok(breakers)
    }

    /// Exchanges the positions of two breakers and persists the whole
    /// collection in one write; this is the drag-and-drop reorder
    /// primitive. A missing id leaves the collection untouched.
    pub fn swap_positions(&mut self, first: i32, second: i32) -> Result<Vec<Breaker>, StoreError> {
        let mut breakers = self.breakers()?;

        let first_idx = breakers.iter().position(|b| b.id == first);
        let second_idx = breakers.iter().position(|b| b.id == second);

        if let (Some(a), Some(b)) = (first_idx, second_idx) {
            let position = breakers[a].position;
            breakers[a].position = breakers[b].position;
            breakers[b].position = position;
            tracing::debug!(first, second, "breaker positions swapped");
            self.save_breakers(&breakers)?;
        }

        Ok(breakers)
    }

    /// Creates the initial breaker collection: one Main followed by
    /// Single Pole breakers, ids and positions starting at 1.
    /// Idempotent: does nothing if any breakers already exist.
    pub fn initialize_breakers(&mut self, count: i32) -> Result<Vec<Breaker>, StoreError> {
        let existing = self.breakers()?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        let breakers: Vec<Breaker> = (1..=count)
            .map(|n| Breaker {
                id: n,
                name: format!("Breaker {n}"),
                amperage: 0,
                is_on: true,
                position: n,
                interruption_type: InterruptionType::StandardTrip,
                breaker_type: if n == 1 {
                    BreakerType::Main
                } else {
                    BreakerType::SinglePole
                },
            })
            .collect();

        self.save_breakers(&breakers)?;
        tracing::debug!(count = breakers.len(), "breakers initialized");
        Ok(breakers)
    }

    /// Resizes the breaker collection to `new_count`. Shrinking
    /// truncates the tail of the stored order; growing appends Single
    /// Pole breakers with ids and positions continuing past the
    /// current maxima.
    pub fn reconcile_breaker_count(&mut self, new_count: i32) -> Result<Vec<Breaker>, StoreError> {
        let mut breakers = self.breakers()?;
        let current = breakers.len() as i32;

        if current == new_count {
            return Ok(breakers);
        }

        if current > new_count {
            breakers.truncate(new_count.max(0) as usize);
        } else {
            let next_id = breakers.iter().map(|b| b.id).max().unwrap_or(0) + 1;
            let next_position = breakers.iter().map(|b| b.position).max().unwrap_or(0) + 1;

            for offset in 0..(new_count - current) {
                let position = next_position + offset;
                breakers.push(Breaker {
                    id: next_id + offset,
                    name: format!("Breaker {position}"),
                    amperage: 0,
                    is_on: true,
                    position,
                    interruption_type: InterruptionType::StandardTrip,
                    breaker_type: BreakerType::SinglePole,
                });
            }
        }

        self.save_breakers(&breakers)?;
        tracing::debug!(from = current, to = new_count, "breaker count reconciled");
        Ok(breakers)
    }
}

/// Reset operations.
impl<S: RecordStore> PanelStore<S> {
    /// Removes both records, returning the panel to the setup flow.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.store.delete(SETTINGS_RECORD)?;
        self.store.delete(BREAKERS_RECORD)?;
        tracing::debug!("panel records cleared");
        Ok(())
    }
}
