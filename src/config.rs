//! Page behavior configuration.
//!
//! The constants are the defaults; `BehaviorConfig` lets the host page
//! override them, either from a JSON block embedded in the markup or from an
//! options object passed to `attachPageBehaviors`.

use crate::error::BehaviorError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wasm_bindgen::JsValue;

// Scroll
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const SCROLL_THROTTLE_MS: u32 = 16;
pub const SCROLL_SETTLE_MS: u32 = 100;

// Mobile menu
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0;

// iOS
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
pub const IOS_VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1.0, viewport-fit=cover, user-scalable=no";
pub const IOS_INPUT_FONT_SIZE: &str = "16px";

// Animations
pub const OBSERVER_THRESHOLD: f64 = 0.5;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_BAR_REVEAL_DELAY_MS: u32 = 100;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const TYPING_START_DELAY_MS: u32 = 500;
pub const TYPING_CHAR_INTERVAL_MS: u32 = 100;
pub const PRELOADER_FADE_MS: u32 = 500;

// Form validation
pub const FORM_ALERT_MESSAGE: &str = "Per favore compila tutti i campi obbligatori.";
pub const INVALID_BORDER_COLOR: &str = "#dc3545";
pub const VALID_BORDER_COLOR: &str = "var(--border-color)";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration for every page behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub log_level: String,
    pub navbar_scroll_threshold_px: f64,
    pub parallax_rate: f64,
    pub scroll_throttle_ms: u32,
    pub scroll_settle_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub double_tap_window_ms: f64,
    pub observer_threshold: f64,
    pub observer_root_margin: String,
    pub skill_bar_reveal_delay_ms: u32,
    pub counter_duration_ms: f64,
    pub typing_start_delay_ms: u32,
    pub typing_char_interval_ms: u32,
    pub preloader_fade_ms: u32,
    pub form_alert_message: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            navbar_scroll_threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            parallax_rate: PARALLAX_RATE,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            scroll_settle_ms: SCROLL_SETTLE_MS,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            observer_threshold: OBSERVER_THRESHOLD,
            observer_root_margin: OBSERVER_ROOT_MARGIN.to_string(),
            skill_bar_reveal_delay_ms: SKILL_BAR_REVEAL_DELAY_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_char_interval_ms: TYPING_CHAR_INTERVAL_MS,
            preloader_fade_ms: PRELOADER_FADE_MS,
            form_alert_message: FORM_ALERT_MESSAGE.to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, BehaviorError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BehaviorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Convert a JS options object. `undefined` and `null` give the defaults.
    pub fn from_js(options: JsValue) -> Result<Self, BehaviorError> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(options)
            .map_err(|e| BehaviorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the embedded config block, falling back to defaults when it is
    /// absent or unusable.
    pub fn from_page() -> Self {
        let json = gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match json {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), BehaviorError> {
        if !(0.0..=1.0).contains(&self.observer_threshold) {
            return Err(BehaviorError::InvalidConfig(format!(
                "observerThreshold must be within 0..=1, got {}",
                self.observer_threshold
            )));
        }
        if self.counter_duration_ms <= 0.0 {
            return Err(BehaviorError::InvalidConfig(
                "counterDurationMs must be positive".to_string(),
            ));
        }
        if self.form_alert_message.trim().is_empty() {
            return Err(BehaviorError::InvalidConfig(
                "formAlertMessage cannot be empty".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, BehaviorError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| BehaviorError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(BehaviorConfig::from_json("{}").unwrap(), BehaviorConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            BehaviorConfig::from_json(r#"{"mobileBreakpointPx": 1023, "logLevel": "debug"}"#)
                .unwrap();
        assert_eq!(config.mobile_breakpoint_px, 1023.0);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.navbar_scroll_threshold_px, NAVBAR_SCROLL_THRESHOLD_PX);
        assert_eq!(config.form_alert_message, FORM_ALERT_MESSAGE);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = BehaviorConfig::from_json(r#"{"observerThreshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, BehaviorError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_blank_alert_and_bad_level() {
        assert!(BehaviorConfig::from_json(r#"{"formAlertMessage": "  "}"#).is_err());
        assert!(BehaviorConfig::from_json(r#"{"logLevel": "loud"}"#).is_err());
        assert!(BehaviorConfig::from_json(r#"{"counterDurationMs": 0}"#).is_err());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = BehaviorConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
