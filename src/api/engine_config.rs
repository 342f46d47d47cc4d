use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{OscilloError, OscilloResult};
use crate::lod::{GridStyle, LabelStyle};
use crate::render::{Color, Palette};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load viewer
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportEngineConfig {
    pub viewport: Viewport,
    /// Duration mapped onto the x-axis when ingestion detects no time row.
    #[serde(default = "default_time_span")]
    pub time_span: f64,
    #[serde(default = "default_channel_stroke_width")]
    pub channel_stroke_width: f64,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default)]
    pub grid_style: GridStyle,
    #[serde(default)]
    pub label_style: LabelStyle,
    /// Replaces the built-in channel palette when set.
    #[serde(default)]
    pub palette_override: Option<Vec<Color>>,
}

impl ViewportEngineConfig {
    /// Creates a minimal config with default styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            time_span: default_time_span(),
            channel_stroke_width: default_channel_stroke_width(),
            axis_stroke_width: default_axis_stroke_width(),
            axis_color: default_axis_color(),
            grid_style: GridStyle::default(),
            label_style: LabelStyle::default(),
            palette_override: None,
        }
    }

    /// Sets the fallback x-axis time span.
    #[must_use]
    pub fn with_time_span(mut self, time_span: f64) -> Self {
        self.time_span = time_span;
        self
    }

    /// Sets the channel trace stroke width.
    #[must_use]
    pub fn with_channel_stroke_width(mut self, stroke_width: f64) -> Self {
        self.channel_stroke_width = stroke_width;
        self
    }

    /// Sets grid line styling.
    #[must_use]
    pub fn with_grid_style(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Sets axis label styling.
    #[must_use]
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Replaces the built-in channel palette.
    #[must_use]
    pub fn with_palette(mut self, colors: Vec<Color>) -> Self {
        self.palette_override = Some(colors);
        self
    }

    pub fn validate(&self) -> OscilloResult<()> {
        if !self.viewport.is_valid() {
            return Err(OscilloError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.time_span.is_finite() || self.time_span <= 0.0 {
            return Err(OscilloError::InvalidData(
                "time span must be finite and > 0".to_owned(),
            ));
        }
        for (field, width) in [
            ("channel stroke width", self.channel_stroke_width),
            ("axis stroke width", self.axis_stroke_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(OscilloError::InvalidData(format!(
                    "{field} must be finite and > 0"
                )));
            }
        }
        self.axis_color.validate()?;
        self.grid_style.validate()?;
        self.label_style.validate()?;
        self.palette()?;
        Ok(())
    }

    /// Resolves the effective channel palette.
    pub fn palette(&self) -> OscilloResult<Palette> {
        match &self.palette_override {
            Some(colors) => Palette::new(colors.clone()),
            None => Ok(Palette::default()),
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> OscilloResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OscilloError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> OscilloResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| OscilloError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_time_span() -> f64 {
    1.0
}

fn default_channel_stroke_width() -> f64 {
    3.0
}

fn default_axis_stroke_width() -> f64 {
    1.0
}

fn default_axis_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}
