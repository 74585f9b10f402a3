//! User settings kept in the key-value store.
//!
//! Each setting has its own key so individual toggles can be saved without
//! rewriting the others.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::StoreError;
use crate::store::KeyValueStore;

pub const THEME_KEY: &str = "calculatorTheme";
pub const SOUND_KEY: &str = "calculatorSound";
pub const VIBRATION_KEY: &str = "calculatorVibration";
pub const UI_SOUNDS_KEY: &str = "calculatorUISounds";
pub const GESTURES_KEY: &str = "calculatorGestures";

/// Visual theme. Choosing [`Theme::Pookie`] turns on novelty mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Pookie,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Pookie => "pookie",
        }
    }

    pub fn is_novelty(self) -> bool {
        self == Self::Pookie
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "pookie" => Ok(Self::Pookie),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Which interface sounds play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiSounds {
    #[default]
    All,
    None,
}

impl UiSounds {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}

/// Persisted user preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub sound: bool,
    pub vibration: bool,
    pub ui_sounds: UiSounds,
    pub gestures: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            sound: true,
            vibration: true,
            ui_sounds: UiSounds::default(),
            gestures: true,
        }
    }
}

impl Settings {
    /// Read settings, using the default for anything missing or unrecognized.
    ///
    /// Boolean toggles are on unless stored as exactly `"false"`.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let enabled = |key: &str| store.get(key).is_none_or(|v| v != "false");

        let theme = store
            .get(THEME_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    debug!("{e}, using default theme");
                    None
                }
            })
            .unwrap_or_default();

        let ui_sounds = match store.get(UI_SOUNDS_KEY).as_deref() {
            Some("none") => UiSounds::None,
            _ => UiSounds::All,
        };

        Self {
            theme,
            sound: enabled(SOUND_KEY),
            vibration: enabled(VIBRATION_KEY),
            ui_sounds,
            gestures: enabled(GESTURES_KEY),
        }
    }

    /// Write every setting.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.theme.as_str().to_string())?;
        store.set(SOUND_KEY, self.sound.to_string())?;
        store.set(VIBRATION_KEY, self.vibration.to_string())?;
        store.set(UI_SOUNDS_KEY, self.ui_sounds.as_str().to_string())?;
        store.set(GESTURES_KEY, self.gestures.to_string())
    }

    /// Write only the theme.
    pub fn save_theme(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.theme.as_str().to_string())
    }

    /// Whether key sounds should play.
    pub fn sounds_audible(&self) -> bool {
        self.sound && self.ui_sounds == UiSounds::All
    }
}
