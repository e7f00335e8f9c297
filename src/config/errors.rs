#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Required environment variable {0} is missing")]
    MissingVariable(&'static str),

    #[error("Environment variable {name} has invalid value '{value}'")]
    InvalidVariable { name: &'static str, value: String },
}
