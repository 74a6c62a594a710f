//! Tracker configuration.
//!
//! Numeric settings for the press gesture tracker: per-axis drift thresholds
//! and the activation delay. All fields have sensible defaults and
//! deserialize field-by-field, so embedding applications can nest them inside
//! their own configuration without spelling everything out. Out-of-range
//! values are clamped with a warning rather than rejected.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest accepted drift threshold in pixels.
const MAX_THRESHOLD: f64 = 500.0;

/// Largest accepted activation delay in milliseconds.
const MAX_ACTIVATION_DELAY_MS: u64 = 1000;

/// Press gesture tracker settings.
///
/// Thresholds bound how far a pressed pointer may drift on each axis before
/// the press is treated as a drag instead of a tap. The activation delay
/// holds back the activated callback after a qualifying release; some touch
/// stacks deliver a synthetic press immediately after a tap, and firing
/// activation late keeps that press from being folded into the finished
/// gesture.
///
/// # Example TOML
/// ```toml
/// threshold_x = 25.0
/// threshold_y = 25.0
/// activation_delay_ms = 50
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum horizontal drift in pixels tolerated while pressing (valid range: 0.0 - 500.0)
    #[serde(default = "default_threshold")]
    pub threshold_x: f64,

    /// Maximum vertical drift in pixels tolerated while pressing (valid range: 0.0 - 500.0)
    #[serde(default = "default_threshold")]
    pub threshold_y: f64,

    /// Delay in milliseconds between a qualifying release and the activated
    /// callback (valid range: 0 - 1000)
    #[serde(default = "default_activation_delay_ms")]
    pub activation_delay_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold_x: default_threshold(),
            threshold_y: default_threshold(),
            activation_delay_ms: default_activation_delay_ms(),
        }
    }
}

impl TrackerConfig {
    /// Validates and clamps all settings to acceptable ranges.
    ///
    /// Ensures caller-provided values cannot put the state machine into a
    /// shape where presses can never end or activations pile up unbounded.
    /// Invalid values are replaced or clamped and a warning is logged; no
    /// error is ever returned.
    ///
    /// Validated ranges:
    /// - `threshold_x`, `threshold_y`: 0.0 - 500.0, finite
    /// - `activation_delay_ms`: 0 - 1000
    pub fn validate_and_clamp(&mut self) {
        self.threshold_x = clamp_threshold(self.threshold_x, "threshold_x");
        self.threshold_y = clamp_threshold(self.threshold_y, "threshold_y");

        if self.activation_delay_ms > MAX_ACTIVATION_DELAY_MS {
            log::warn!(
                "Invalid activation_delay_ms {}, clamping to 0-{} range",
                self.activation_delay_ms,
                MAX_ACTIVATION_DELAY_MS
            );
            self.activation_delay_ms = MAX_ACTIVATION_DELAY_MS;
        }
    }

    /// Returns a clamped copy suitable for tracker construction.
    pub fn sanitized(mut self) -> Self {
        self.validate_and_clamp();
        self
    }

    /// The activation delay as a [`Duration`].
    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }
}

fn clamp_threshold(value: f64, name: &str) -> f64 {
    if !value.is_finite() || value < 0.0 {
        log::warn!(
            "Invalid {name} {value}, falling back to default {:.1}",
            default_threshold()
        );
        default_threshold()
    } else if value > MAX_THRESHOLD {
        log::warn!("Invalid {name} {value:.1}, clamping to 0.0-{MAX_THRESHOLD:.1} range");
        MAX_THRESHOLD
    } else {
        value
    }
}

fn default_threshold() -> f64 {
    25.0
}

fn default_activation_delay_ms() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = TrackerConfig::default();
        assert_eq!(config.threshold_x, 25.0);
        assert_eq!(config.threshold_y, 25.0);
        assert_eq!(config.activation_delay_ms, 50);
        assert_eq!(config.activation_delay(), Duration::from_millis(50));
    }

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.threshold_x, 25.0);
        assert_eq!(config.threshold_y, 25.0);
        assert_eq!(config.activation_delay_ms, 50);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"threshold_x": 40.0, "activation_delay_ms": 0}"#).unwrap();
        assert_eq!(config.threshold_x, 40.0);
        assert_eq!(config.threshold_y, 25.0);
        assert_eq!(config.activation_delay_ms, 0);
    }

    #[test]
    fn negative_threshold_falls_back_to_default() {
        let mut config = TrackerConfig {
            threshold_x: -5.0,
            ..TrackerConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.threshold_x, 25.0);
    }

    #[test]
    fn non_finite_threshold_falls_back_to_default() {
        let mut config = TrackerConfig {
            threshold_y: f64::NAN,
            ..TrackerConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.threshold_y, 25.0);
    }

    #[test]
    fn oversized_values_clamp_to_range() {
        let mut config = TrackerConfig {
            threshold_x: 10_000.0,
            threshold_y: 600.0,
            activation_delay_ms: 30_000,
        };
        config.validate_and_clamp();
        assert_eq!(config.threshold_x, 500.0);
        assert_eq!(config.threshold_y, 500.0);
        assert_eq!(config.activation_delay_ms, 1000);
    }

    #[test]
    fn sanitized_leaves_valid_values_untouched() {
        let config = TrackerConfig {
            threshold_x: 10.0,
            threshold_y: 0.0,
            activation_delay_ms: 200,
        }
        .sanitized();
        assert_eq!(config.threshold_x, 10.0);
        assert_eq!(config.threshold_y, 0.0);
        assert_eq!(config.activation_delay_ms, 200);
    }
}
