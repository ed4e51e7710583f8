use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Space count assumed for settings records written before the
/// `spaces` field existed.
pub const DEFAULT_SPACES: i32 = 24;

fn default_spaces() -> i32 {
    DEFAULT_SPACES
}

/// Panel-wide configuration.
///
/// Always replaced as a whole record, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSettings {
    /// Service rating in amps.
    pub service_rating: i32,
    pub breaker_count: i32,
    /// Total physical slots; must be even.
    #[serde(default = "default_spaces")]
    pub spaces: i32,
}

impl PanelSettings {
    /// Checks the record-level rules, in the order the edit forms
    /// report them. The stored-state rule (existing breakers fitting a
    /// smaller panel) lives on the store, which can see the breakers.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.breaker_count <= 0 {
            return Err(SettingsError::NonPositiveBreakerCount);
        }
        if self.service_rating <= 0 {
            return Err(SettingsError::NonPositiveServiceRating);
        }
        if self.spaces <= 0 || self.spaces % 2 != 0 {
            return Err(SettingsError::InvalidSpaces(self.spaces));
        }
        if self.breaker_count > self.spaces {
            return Err(SettingsError::TooManyBreakers {
                count: self.breaker_count,
                spaces: self.spaces,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("breaker count must be positive")]
    NonPositiveBreakerCount,

    #[error("service rating must be a positive number of amps")]
    NonPositiveServiceRating,

    #[error("panel spaces must be a positive even number, got {0}")]
    InvalidSpaces(i32),

    #[error("breaker count {count} exceeds the {spaces} available spaces")]
    TooManyBreakers { count: i32, spaces: i32 },

    #[error("{current} existing breakers exceed the {spaces} selected spaces")]
    InsufficientSpaces { current: i32, spaces: i32 },
}

#[cfg(test)]
mod tests;
