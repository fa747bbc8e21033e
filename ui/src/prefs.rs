use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_SITE_TITLE: &str = "Photogram";

/// Verbosity of the app log. Maps onto `tracing::Level`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for dioxus_logger::tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("could not read prefs file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse prefs: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing settings for the app shell.
///
/// Missing fields take their default, so a prefs file only needs the keys it
/// wants to override.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPrefs {
    /// Shown in the header.
    pub site_title: String,

    /// Whether the session starts signed in.
    pub signed_in: bool,

    pub log_level: LogLevel,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            signed_in: false,
            log_level: LogLevel::default(),
        }
    }
}

impl UiPrefs {
    /// Loads prefs from the JSON file named by `PHOTOGRAM_PREFS`, or from
    /// [`UiPrefs::from_env`] when that variable is unset.
    pub fn load() -> Result<Self, PrefsError> {
        match env::var("PHOTOGRAM_PREFS") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::from_env()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, PrefsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `PHOTOGRAM_TITLE`: header title.
    /// - `PHOTOGRAM_SIGNED_IN`: "true" or "1" to start signed in.
    /// - `PHOTOGRAM_LOG`: one of trace, debug, info, warn, error.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let site_title = env::var("PHOTOGRAM_TITLE")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(defaults.site_title);

        let signed_in = env::var("PHOTOGRAM_SIGNED_IN")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(defaults.signed_in);

        let log_level = env::var("PHOTOGRAM_LOG")
            .ok()
            .and_then(|s| LogLevel::from_str(&s).ok())
            .unwrap_or(defaults.log_level);

        Self {
            site_title,
            signed_in,
            log_level,
        }
    }
}
