//! Theme modes, resolution, and the persisted mode engine.
//!
//! DESIGN
//! ======
//! The user picks a [`ThemeMode`]; the page renders a [`ResolvedTheme`].
//! Only the mode is ever persisted. Auto mode defers to the OS color-scheme
//! signal when the host exposes one and otherwise to a local time-of-day
//! window.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never leave this module. A failed read behaves like an
//! empty store; a failed write is dropped and the in-memory mode still
//! advances.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::storage::ModeStore;

/// User-selected theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Follow the OS signal, or the clock when no signal exists.
    #[default]
    Auto,
    Light,
    Dark,
}

/// Concrete theme applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct ParseModeError(pub String);

impl ThemeMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-facing name used in control titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Next mode in the cycle: auto, light, dark, then back to auto.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    /// Interpret a stored value; anything unrecognized (or nothing) is auto.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<Self>) {
            Some(Ok(mode)) => mode,
            _ => Self::Auto,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local-hour window `[start, end)` treated as daytime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DayWindow {
    #[must_use]
    pub fn contains(self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self { start_hour: crate::consts::DAY_START_HOUR, end_hour: crate::consts::DAY_END_HOUR }
    }
}

impl ResolvedTheme {
    /// Resolve a mode into a concrete theme.
    ///
    /// Explicit modes win. Auto uses `prefers_dark` when the host can read
    /// it and falls back to `window` against `local_hour` otherwise.
    #[must_use]
    pub fn resolve(mode: ThemeMode, prefers_dark: Option<bool>, local_hour: u32, window: DayWindow) -> Self {
        match mode {
            ThemeMode::Light => Self::Light,
            ThemeMode::Dark => Self::Dark,
            ThemeMode::Auto => match prefers_dark {
                Some(true) => Self::Dark,
                Some(false) => Self::Light,
                None if window.contains(local_hour) => Self::Light,
                None => Self::Dark,
            },
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the current mode and its persistence key.
#[derive(Clone, Debug)]
pub struct ThemeEngine {
    mode: ThemeMode,
    storage_key: String,
}

impl ThemeEngine {
    /// Read the persisted mode once at startup.
    pub fn load<S: ModeStore>(store: &S, storage_key: &str) -> Self {
        let mode = match store.load(storage_key) {
            Ok(raw) => ThemeMode::from_stored(raw.as_deref()),
            Err(err) => {
                log::debug!("theme: read failed, using auto: {err}");
                ThemeMode::Auto
            }
        };
        Self { mode, storage_key: storage_key.to_owned() }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Advance to the next mode and persist it.
    pub fn cycle<S: ModeStore>(&mut self, store: &mut S) -> ThemeMode {
        self.mode = self.mode.next();
        if let Err(err) = store.save(&self.storage_key, self.mode.as_str()) {
            log::debug!("theme: write failed, mode not persisted: {err}");
        }
        log::debug!("theme: mode -> {}", self.mode);
        self.mode
    }
}
