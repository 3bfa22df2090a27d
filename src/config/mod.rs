use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::errors::BudgetError;
use crate::format::Language;
use crate::storage::StorageBackend;

pub const CONFIG_KEY: &str = "config";
pub const THEME_KEY: &str = "theme";

const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

/// Display preferences shared by every front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(BudgetError::ConfigError(format!("unknown theme `{other}`"))),
        }
    }
}

/// Reads and writes preference records next to the budget snapshot.
///
/// Preferences never block startup: anything missing or unreadable is
/// replaced by its default and logged.
pub struct ConfigManager {
    storage: Box<dyn StorageBackend>,
}

impl ConfigManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Config {
        self.read_record(CONFIG_KEY).unwrap_or_default()
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        self.storage.write(CONFIG_KEY, &json)
    }

    pub fn load_theme(&self) -> Theme {
        self.read_record(THEME_KEY).unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), BudgetError> {
        let json = serde_json::to_string(&theme)?;
        self.storage.write(THEME_KEY, &json)
    }

    /// Flips the stored theme and returns the new value.
    pub fn toggle_theme(&self) -> Result<Theme, BudgetError> {
        let theme = self.load_theme().toggle();
        self.save_theme(theme)?;
        Ok(theme)
    }

    fn read_record<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.read(key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key, error = %err, "preference record unreadable; using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "preference record malformed; using default");
                None
            }
        }
    }
}
