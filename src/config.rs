//! Plot tunables. Defaults reproduce the classic look; an optional JSON
//! override can be stored under the `fp_config` localStorage key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::cwarn;

pub const STORAGE_KEY: &str = "fp_config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Pixels per mathematical unit at zoom 1.
    pub scale: f64,
    pub min_zoom: f64,
    /// Wheel formula denominator: `zoom *= 1 - delta / zoom_divisor`.
    pub zoom_divisor: f64,
    /// Curve sample spacing in screen pixels at zoom 1.
    pub sample_step_px: f64,
    /// Extra grid units drawn past the far edge so lines don't pop in while panning.
    pub grid_overscan: f64,
    pub tick_half_length: f64,
    pub x_label_drop: f64,
    pub y_label_inset: f64,
    pub y_label_drop: f64,
    pub axis_color: String,
    pub grid_color: String,
    pub curve_color: String,
    pub font: String,
    pub line_width: f64,
    pub default_expression: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            min_zoom: 0.5,
            zoom_divisor: 1000.0,
            sample_step_px: 10.0,
            grid_overscan: 20.0,
            tick_half_length: 5.0,
            x_label_drop: 24.0,
            y_label_inset: 20.0,
            y_label_drop: 4.0,
            axis_color: "#000".into(),
            grid_color: "#aaa".into(),
            curve_color: "#f00".into(),
            font: "16px Source Sans Pro".into(),
            line_width: 1.0,
            default_expression: "sin(x)".into(),
        }
    }
}

impl PlotConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PlotConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scale", self.scale),
            ("min_zoom", self.min_zoom),
            ("zoom_divisor", self.zoom_divisor),
            ("sample_step_px", self.sample_step_px),
        ];
        for (field, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        if !(self.grid_overscan.is_finite() && self.grid_overscan >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "grid_overscan",
                reason: "must be zero or positive",
            });
        }
        Ok(())
    }

    /// Reads the localStorage override, falling back to defaults on any failure.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                cwarn(&format!("ignoring {}: {}", STORAGE_KEY, e));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
