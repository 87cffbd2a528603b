//! Configuration for the page controller.
//!
//! The host page can hand the controller a JSON document to change the markup
//! markers, the notification text or the log verbosity. Every field has a
//! default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};
use crate::markup::Markup;
use crate::state::TEXTURE_SELECTED_NOTICE;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Page controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Class markers the controller binds to
    #[serde(default)]
    pub markup: Markup,

    /// Text shown when a texture card is clicked
    #[serde(default = "default_notification")]
    pub notification: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_notification() -> String {
    TEXTURE_SELECTED_NOTICE.to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            markup: Markup::default(),
            notification: default_notification(),
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON, rejecting versions newer than this build.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        if config.version > CONFIG_VERSION {
            return Err(PageError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
