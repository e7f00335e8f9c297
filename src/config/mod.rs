mod env_provider;
mod errors;
mod logging;
mod settings;

pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::SettingsError;
pub use logging::init_logging;
pub use settings::AppSettings;

#[cfg(test)]
pub use env_provider::MockEnvironment;
