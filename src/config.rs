//! Page configuration with JSON overrides.
//!
//! Every field has a default taken from [`crate::consts`]. A page may embed
//! a partial JSON document to override any subset; missing keys keep their
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full controller configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub storage_key: String,
    pub selectors: Selectors,
    pub theme: ThemeConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
}

/// Ids and selectors used to discover optional page elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub menu_button_id: String,
    pub menu_id: String,
    pub year_id: String,
    pub theme_toggle_id: String,
    pub theme_meta: String,
    pub header: String,
    pub travel_section_id: String,
    pub sections: String,
    pub reveal_items: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub light_color: String,
    pub dark_color: String,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub poll_interval_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub scroll_threshold_px: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub step_ms: u32,
    pub max_delay_ms: u32,
    pub threshold: f64,
    pub root_margin: String,
    pub travel_threshold: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            selectors: Selectors::default(),
            theme: ThemeConfig::default(),
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_button_id: consts::MENU_BUTTON_ID.to_owned(),
            menu_id: consts::MENU_ID.to_owned(),
            year_id: consts::YEAR_ID.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            theme_meta: consts::THEME_META_SELECTOR.to_owned(),
            header: consts::HEADER_SELECTOR.to_owned(),
            travel_section_id: consts::TRAVEL_SECTION_ID.to_owned(),
            sections: consts::SECTION_SELECTOR.to_owned(),
            reveal_items: consts::REVEAL_ITEM_SELECTOR.to_owned(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_color: consts::LIGHT_THEME_COLOR.to_owned(),
            dark_color: consts::DARK_THEME_COLOR.to_owned(),
            day_start_hour: consts::DAY_START_HOUR,
            day_end_hour: consts::DAY_END_HOUR,
            poll_interval_ms: consts::AUTO_POLL_INTERVAL_MS,
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { scroll_threshold_px: consts::SCROLL_THRESHOLD_PX }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step_ms: consts::REVEAL_STEP_MS,
            max_delay_ms: consts::REVEAL_MAX_DELAY_MS,
            threshold: consts::REVEAL_THRESHOLD,
            root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            travel_threshold: consts::TRAVEL_THRESHOLD,
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a feature misbehave rather than degrade.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storageKey must not be empty".into()));
        }
        let theme = &self.theme;
        if theme.day_start_hour >= theme.day_end_hour || theme.day_end_hour > 24 {
            return Err(ConfigError::Invalid(format!(
                "day window [{}, {}) must satisfy start < end <= 24",
                theme.day_start_hour, theme.day_end_hour
            )));
        }
        if theme.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("pollIntervalMs must be positive".into()));
        }
        if !self.header.scroll_threshold_px.is_finite() || self.header.scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid("scrollThresholdPx must be a non-negative number".into()));
        }
        check_ratio("reveal.threshold", self.reveal.threshold)?;
        check_ratio("reveal.travelThreshold", self.reveal.travel_threshold)?;
        Ok(())
    }
}

fn check_ratio(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be in (0, 1], got {value}")))
    }
}
