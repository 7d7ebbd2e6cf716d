use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Environment variable consulted when no key is passed on the command line.
pub const API_KEY_ENV: &str = "MACADDR_API_KEY";

/// Default endpoint of the vendor lookup service.
pub const DEFAULT_API_URL: &str = "https://api.macaddress.io/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key not supplied and {var} is not set in the environment")]
    MissingCredential { var: &'static str },
}

/// Log level requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `--debug` wins over `--verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => Verbosity::Debug,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Quiet,
        }
    }

    pub fn as_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Credential for the lookup service.
///
/// Formatting never shows the key; call [`ApiKey::expose`] where the raw value is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The key as it may appear in log output: raw only when `reveal` is set.
    pub fn shown(&self, reveal: bool) -> String {
        if reveal {
            self.0.clone()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// Settings for one run, built from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub api_url: String,
    pub timeout: Duration,
    pub verbosity: Verbosity,
    /// Allows debug output to print the raw API key.
    pub reveal_secrets: bool,
}

impl Config {
    /// Raw keys only show up with both `--debug` and `--reveal-secrets`.
    pub fn reveals_key(&self) -> bool {
        self.reveal_secrets && self.verbosity == Verbosity::Debug
    }
}

/// Resolves the API key from the explicit flag or [`API_KEY_ENV`].
pub fn resolve_api_key(explicit: Option<String>) -> Result<ApiKey, ConfigError> {
    resolve_api_key_from(explicit, |var| std::env::var(var).ok())
}

/// Same as [`resolve_api_key`] with a caller-supplied environment lookup.
///
/// A flag, once given, is used as is and the environment is never read.
/// An empty environment value counts as unset.
pub fn resolve_api_key_from<F>(explicit: Option<String>, env: F) -> Result<ApiKey, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match explicit {
        Some(key) => Ok(ApiKey::new(key)),
        None => env(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingCredential { var: API_KEY_ENV }),
    }
}
