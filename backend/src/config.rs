//! Application configuration resolved once at startup.
//!
//! All settings come from the process environment, read through
//! [`mockable::Env`] so tests can inject values. A missing or empty
//! connection string is fatal: the process must never reach the *Serving*
//! state without one.

use actix_web::cookie::Key;
use mockable::Env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

/// Required connection string for the games database.
pub const CONNECTION_STRING_ENV: &str = "DEFAULT_CONNECTION";
/// Runtime environment selector (`development` or `production`).
pub const ENVIRONMENT_ENV: &str = "APP_ENVIRONMENT";
/// Socket address the listener binds to.
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";
/// Path to the session cookie signing key file.
pub const SESSION_KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
/// Whether session cookies carry the `Secure` attribute.
pub const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const SESSION_KEY_MIN_LEN: usize = 64;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";

/// Runtime environment, resolved once at startup.
///
/// Development runs expose the interactive API documentation; production
/// runs do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Diagnostic features enabled.
    Development,
    /// Hardened defaults.
    #[default]
    Production,
}

impl Environment {
    fn from_raw(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("development") => Self::Development,
            Some(value) if value.eq_ignore_ascii_case("dev") => Self::Development,
            _ => Self::Production,
        }
    }

    /// Whether this is a development run.
    #[must_use]
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Errors raised while resolving startup configuration. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The required connection string variable is absent.
    #[error("connection string not found: set {CONNECTION_STRING_ENV}")]
    MissingConnectionString,
    /// The connection string variable is present but blank.
    #[error("connection string {CONNECTION_STRING_ENV} must not be empty")]
    EmptyConnectionString,
    /// A variable holds a value that cannot be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short to sign cookies safely.
    #[error("session key at {path} too short: need >= {SESSION_KEY_MIN_LEN} bytes, got {length}")]
    KeyTooShort { path: PathBuf, length: usize },
    /// Production runs require a session key file.
    #[error("{SESSION_KEY_FILE_ENV} is required outside development")]
    MissingSessionKey,
}

/// Session cookie settings derived from the environment.
pub struct SessionSettings {
    /// Signing key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
}

impl std::fmt::Debug for SessionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSettings")
            .field("key", &"<redacted>")
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// Startup configuration for the whole process.
#[derive(Debug)]
pub struct AppConfig {
    /// Relational connection string ("DefaultConnection").
    pub connection_string: String,
    /// Runtime environment flag.
    pub environment: Environment,
    /// Listener bind address.
    pub bind_addr: SocketAddr,
    /// Session cookie settings.
    pub session: SessionSettings,
}

impl AppConfig {
    /// Resolve configuration from the environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for a missing or empty connection string,
    /// an unparseable bind address or boolean toggle, or an unusable session
    /// key. Callers must treat every variant as fatal.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        let connection_string = connection_string_from_env(env)?;
        let environment = Environment::from_raw(env.string(ENVIRONMENT_ENV));
        let bind_addr = bind_addr_from_env(env)?;
        let session = session_settings_from_env(env, environment)?;
        Ok(Self {
            connection_string,
            environment,
            bind_addr,
            session,
        })
    }
}

fn connection_string_from_env<E: Env>(env: &E) -> Result<String, ConfigError> {
    let raw = env
        .string(CONNECTION_STRING_ENV)
        .ok_or(ConfigError::MissingConnectionString)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyConnectionString);
    }
    Ok(trimmed.to_owned())
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ConfigError> {
    let raw = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        name: BIND_ADDR_ENV,
        value: raw,
        expected: "a socket address such as 0.0.0.0:8080",
    })
}

fn bool_from_env<E: Env>(env: &E, name: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = env.string(name) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn session_settings_from_env<E: Env>(
    env: &E,
    environment: Environment,
) -> Result<SessionSettings, ConfigError> {
    let cookie_secure = bool_from_env(env, COOKIE_SECURE_ENV, !environment.is_development())?;
    let key = match env.string(SESSION_KEY_FILE_ENV) {
        Some(raw_path) => {
            let path = PathBuf::from(raw_path);
            let bytes = std::fs::read(&path).map_err(|source| ConfigError::KeyRead {
                path: path.clone(),
                source,
            })?;
            if bytes.len() < SESSION_KEY_MIN_LEN {
                return Err(ConfigError::KeyTooShort {
                    path,
                    length: bytes.len(),
                });
            }
            Key::derive_from(&bytes)
        }
        None if environment.is_development() => {
            warn!("no session key file configured; using an ephemeral key (development only)");
            Key::generate()
        }
        None => return Err(ConfigError::MissingSessionKey),
    };
    Ok(SessionSettings { key, cookie_secure })
}
