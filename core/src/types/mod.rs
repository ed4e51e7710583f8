pub(crate) mod breaker;
pub use breaker::{Breaker, BreakerType, InterruptionType};

pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, SetupConfig};

pub(crate) mod settings;
pub use settings::{DEFAULT_SPACES, PanelSettings, SettingsError};
