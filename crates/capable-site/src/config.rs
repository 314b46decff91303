//! Site configuration embedded from `site.toml`.
//!
//! Every table and field falls back to the values the site ships with, so a
//! partial file is still a complete configuration.

use serde::Deserialize;

use crate::error::ConfigError;

static EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub navigation: NavigationConfig,
    pub contact: ContactConfig,
    pub motion: MotionConfig,
    pub beams: BeamConfig,
}

/// Metadata the hosting layer puts into the document head.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub brand: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            brand: "Capable Groups".to_string(),
            title: "Capable Groups - Digital Solutions Agency".to_string(),
            description: "Leading digital agency offering web development, app development, \
                          digital marketing, and domestic staffing solutions in the US."
                .to_string(),
            keywords: "web development, app development, digital marketing, domestic staffing, agency, US"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset past which the navbar gets its translucent background.
    pub scrolled_threshold_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            reset_delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub counter_duration_ms: u32,
    pub smooth_scroll_duration_ms: u32,
    /// Fraction of an element that must be visible before it reveals.
    pub reveal_threshold: f64,
    /// Scale applied to mouse wheel deltas before smoothing.
    pub wheel_multiplier: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            smooth_scroll_duration_ms: 1200,
            reveal_threshold: 0.1,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    pub initial_count: u32,
    pub initial_stagger_ms: u32,
    pub spawn_interval_ms: u32,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            initial_count: 15,
            initial_stagger_ms: 100,
            spawn_interval_ms: 500,
        }
    }
}

impl SiteConfig {
    /// The configuration compiled into both binaries.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_SITE_TOML)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        log::debug!("Loaded site config for '{}'", config.site.brand);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("contact.submit_delay_ms", self.contact.submit_delay_ms),
            ("contact.reset_delay_ms", self.contact.reset_delay_ms),
            ("motion.counter_duration_ms", self.motion.counter_duration_ms),
            ("motion.smooth_scroll_duration_ms", self.motion.smooth_scroll_duration_ms),
            ("beams.spawn_interval_ms", self.beams.spawn_interval_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
        }
        let threshold = self.motion.reveal_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "motion.reveal_threshold must be in (0, 1], got {threshold}"
            )));
        }
        let multiplier = self.motion.wheel_multiplier;
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "motion.wheel_multiplier must be a positive number, got {multiplier}"
            )));
        }
        if !self.navigation.scrolled_threshold_px.is_finite()
            || self.navigation.scrolled_threshold_px < 0.0
        {
            return Err(ConfigError::Invalid(
                "navigation.scrolled_threshold_px must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config = SiteConfig::from_toml_str("[contact]\nreset_delay_ms = 500\n").unwrap();
        assert_eq!(config.contact.reset_delay_ms, 500);
        assert_eq!(config.contact.submit_delay_ms, 2000);
        assert_eq!(config.site.brand, "Capable Groups");
    }

    #[test]
    fn zero_duration_is_rejected() {
        let error = SiteConfig::from_toml_str("[contact]\nsubmit_delay_ms = 0\n").unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(message) if message.contains("submit_delay_ms")));
    }

    #[test]
    fn reveal_threshold_out_of_range_is_rejected() {
        let error = SiteConfig::from_toml_str("[motion]\nreveal_threshold = 1.5\n").unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn wheel_multiplier_must_be_positive() {
        let config = SiteConfig::from_toml_str("[motion]\nwheel_multiplier = 2.0\n").unwrap();
        assert_eq!(config.motion.wheel_multiplier, 2.0);
        let error = SiteConfig::from_toml_str("[motion]\nwheel_multiplier = 0.0\n").unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(message) if message.contains("wheel_multiplier")));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = SiteConfig::from_toml_str("[contact\n").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
