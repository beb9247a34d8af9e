//! Database connection configuration.
//!
//! The five connection parameters come from the environment, loaded once at
//! process start and passed explicitly to the provisioner. There are no
//! defaults: an absent variable loads as the empty string and the connection
//! attempt fails downstream. The port is kept as a string at this layer;
//! parsing happens where the connection options are built.

use std::env;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Environment variable names. Keeping them public lets tests (and any
/// future deployment tooling) refer to them directly.
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

/// Connection parameters for the application database.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    database: String,
    user: String,
    password: String,
    host: String,
    port: String,
}

impl Config {
    /// Create a config explicitly.
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Load from environment variables. Missing variables become empty
    /// strings rather than errors; the connection attempt reports them.
    ///
    /// This never fails today because we only do simple string extraction.
    /// Validation (e.g. non-empty host, numeric port) can later make it
    /// return a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: env::var(ENV_DB_NAME).unwrap_or_default(),
            user: env::var(ENV_DB_USER).unwrap_or_default(),
            password: env::var(ENV_DB_PASSWORD).unwrap_or_default(),
            host: env::var(ENV_DB_HOST).unwrap_or_default(),
            port: env::var(ENV_DB_PORT).unwrap_or_default(),
        })
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }
    /// Database user.
    pub fn user(&self) -> &str {
        &self.user
    }
    /// Database password.
    pub fn password(&self) -> &str {
        &self.password
    }
    /// Database host.
    pub fn host(&self) -> &str {
        &self.host
    }
    /// Database port, unparsed.
    pub fn port(&self) -> &str {
        &self.port
    }
}

// Manual impl so the password never reaches a log stream.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_DB_NAME,
            ENV_DB_USER,
            ENV_DB_PASSWORD,
            ENV_DB_HOST,
            ENV_DB_PORT,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn empty_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg, Config::new("", "", "", "", ""));
    }

    #[test]
    fn loads_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_DB_NAME, "test");
            env::set_var(ENV_DB_USER, "test");
            env::set_var(ENV_DB_PASSWORD, "hunter2");
            env::set_var(ENV_DB_HOST, "localhost");
            env::set_var(ENV_DB_PORT, "5432");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.database(), "test");
        assert_eq!(cfg.user(), "test");
        assert_eq!(cfg.password(), "hunter2");
        assert_eq!(cfg.host(), "localhost");
        assert_eq!(cfg.port(), "5432");
    }

    #[test]
    fn debug_output_redacts_password() {
        let cfg = Config::new("votes", "app", "s3cret", "db.internal", "5432");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("db.internal"));
    }
}
