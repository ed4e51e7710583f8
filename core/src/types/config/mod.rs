mod app;
mod core;

pub use app::{AppConfig, AppConfigError, SetupConfig};
pub use self::core::Config;
