use std::fmt;

use crate::config::errors::SettingsError;
use crate::config::EnvironmentProvider;

/// Browser origins allowed when CORS_ORIGINS is unset.
const DEFAULT_CORS_ORIGINS: [&str; 2] = [
    "http://localhost:5173",
    "https://whereisit-a11.netlify.app",
];

const DEFAULT_DATABASE_URL: &str = "sqlite://whereisit.db?mode=rwc";

/// Process configuration, loaded once at startup from the environment.
///
/// `ACCESS_TOKEN_SECRET` is required and has no default; everything else
/// falls back to a development-friendly default.
pub struct AppSettings {
    server_host: String,
    server_port: u16,
    database_url: String,
    access_token_secret: String,
    production: bool,
    cors_origins: Vec<String>,
}

impl AppSettings {
    /// Load settings from the given environment provider
    ///
    /// # Errors
    /// * `SettingsError::MissingVariable` when `ACCESS_TOKEN_SECRET` is unset
    /// * `SettingsError::InvalidVariable` when `PORT` is not a valid port
    pub fn load(provider: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let server_host = provider
            .get_var("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port_value = provider
            .get_var("PORT")
            .unwrap_or_else(|| "3000".to_string());
        let server_port = port_value
            .parse::<u16>()
            .map_err(|_| SettingsError::InvalidVariable {
                name: "PORT",
                value: port_value,
            })?;

        let database_url = provider
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let access_token_secret = provider
            .get_var("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(SettingsError::MissingVariable("ACCESS_TOKEN_SECRET"))?;

        let production = provider
            .get_var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let cors_origins = match provider.get_var("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_CORS_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            server_host,
            server_port,
            database_url,
            access_token_secret,
            production,
            cors_origins,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::SystemEnvironment;
        Self::load(&SystemEnvironment)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    /// Build settings directly from values, bypassing the environment.
    /// Intended for tests.
    pub fn for_testing(access_token_secret: &str, production: bool) -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            database_url: "sqlite::memory:".to_string(),
            access_token_secret: access_token_secret.to_string(),
            production,
            cors_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url)
            .field("access_token_secret", &"<redacted>")
            .field("production", &self.production)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_settings_with_all_vars() {
        let env = MockEnvironment::empty()
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080")
            .with_var("DATABASE_URL", "sqlite://test.db")
            .with_var("ACCESS_TOKEN_SECRET", "test-secret")
            .with_var("APP_ENV", "production")
            .with_var("CORS_ORIGINS", "https://a.example, https://b.example");

        let settings = AppSettings::load(&env).unwrap();

        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.access_token_secret(), "test-secret");
        assert!(settings.production());
        assert_eq!(
            settings.cors_origins(),
            &["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_settings_defaults() {
        let env = MockEnvironment::empty().with_var("ACCESS_TOKEN_SECRET", "test-secret");

        let settings = AppSettings::load(&env).unwrap();

        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert!(!settings.production());
        assert_eq!(settings.cors_origins().len(), 2);
    }

    #[test]
    fn test_missing_secret_fails() {
        let env = MockEnvironment::empty();

        let result = AppSettings::load(&env);

        match result {
            Err(SettingsError::MissingVariable("ACCESS_TOKEN_SECRET")) => {}
            other => panic!("Expected MissingVariable error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_secret_fails() {
        let env = MockEnvironment::empty().with_var("ACCESS_TOKEN_SECRET", "");

        assert!(AppSettings::load(&env).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let env = MockEnvironment::empty()
            .with_var("ACCESS_TOKEN_SECRET", "test-secret")
            .with_var("PORT", "not-a-port");

        match AppSettings::load(&env) {
            Err(SettingsError::InvalidVariable { name: "PORT", .. }) => {}
            other => panic!("Expected InvalidVariable error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_non_production_app_env() {
        let env = MockEnvironment::empty()
            .with_var("ACCESS_TOKEN_SECRET", "test-secret")
            .with_var("APP_ENV", "staging");

        let settings = AppSettings::load(&env).unwrap();

        assert!(!settings.production());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let env = MockEnvironment::empty().with_var("ACCESS_TOKEN_SECRET", "super-secret-value");

        let settings = AppSettings::load(&env).unwrap();
        let debug_output = format!("{:?}", settings);

        assert!(!debug_output.contains("super-secret-value"));
        assert!(debug_output.contains("<redacted>"));
    }
}
