use super::constants::{
    FADE_DURATION_MS, MOUSE_IDLE_TIMEOUT_MS, POINT_SPACING, RETURN_FORCE, SNAPPY_RETURN_BOOST,
    TOUCH_IDLE_TIMEOUT_MS,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` expects a number, got {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` out of range: {value}")]
    OutOfRange { key: String, value: f64 },
    #[error("`{key}` expects on/off, got {value:?}")]
    InvalidFlag { key: String, value: String },
}

/// Tunables for one particle field. Defaults reproduce the site's look.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub point_spacing: f32,
    pub fade_duration: Duration,
    pub mouse_idle_timeout: Duration,
    pub touch_idle_timeout: Duration,
    /// Multiplier on the return-to-origin spring.
    pub return_boost: f32,
    /// When false the pointer is ignored but points still integrate.
    pub interaction_enabled: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_spacing: POINT_SPACING,
            fade_duration: Duration::from_millis(FADE_DURATION_MS),
            mouse_idle_timeout: Duration::from_millis(MOUSE_IDLE_TIMEOUT_MS),
            touch_idle_timeout: Duration::from_millis(TOUCH_IDLE_TIMEOUT_MS),
            return_boost: 1.0,
            interaction_enabled: true,
        }
    }
}

impl FieldConfig {
    pub const OVERRIDE_KEYS: [&'static str; 4] =
        ["point-spacing", "fade-ms", "return-boost", "interaction"];

    #[inline]
    pub fn return_force(&self) -> f32 {
        RETURN_FORCE * self.return_boost
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.point_spacing.is_finite() && self.point_spacing > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "point-spacing".into(),
                value: self.point_spacing as f64,
            });
        }
        if !(self.return_boost.is_finite() && self.return_boost >= 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "return-boost".into(),
                value: self.return_boost as f64,
            });
        }
        Ok(())
    }

    /// Apply one `key=value` override. Unknown keys are ignored so pages can
    /// carry unrelated data attributes. On error `self` is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "point-spacing" => {
                let v = parse_number(key, value)?;
                if v <= 0.0 {
                    return Err(ConfigError::OutOfRange {
                        key: key.into(),
                        value: v,
                    });
                }
                self.point_spacing = v as f32;
            }
            "fade-ms" => {
                let v = parse_number(key, value)?;
                self.fade_duration = Duration::try_from_secs_f64(v / 1000.0).map_err(|_| {
                    ConfigError::OutOfRange {
                        key: key.into(),
                        value: v,
                    }
                })?;
            }
            "return-boost" if value.eq_ignore_ascii_case("snappy") => {
                self.return_boost = SNAPPY_RETURN_BOOST;
            }
            "return-boost" => {
                let v = parse_number(key, value)?;
                if v < 0.0 {
                    return Err(ConfigError::OutOfRange {
                        key: key.into(),
                        value: v,
                    });
                }
                self.return_boost = v as f32;
            }
            "interaction" => {
                self.interaction_enabled = parse_flag(key, value)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply a batch of overrides, logging and skipping the invalid ones.
    pub fn with_overrides<'a>(
        mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        for (key, value) in pairs {
            if let Err(e) = self.apply_override(key, value) {
                log::warn!("[config] ignoring override: {}", e);
            }
        }
        self
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.into(),
            value: value.into(),
        }),
    }
}
