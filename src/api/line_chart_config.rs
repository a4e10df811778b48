use serde::{Deserialize, Serialize};

use crate::animation::{AnimatedStyle, Ease, StylePatch, TransitionConfig};
use crate::core::{LinearScale, Margins};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public line chart bootstrap configuration.
///
/// Axis domains are fixed configuration, not fitted from data: samples
/// outside them extrapolate past the plot edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_x_domain")]
    pub x_domain: (f64, f64),
    #[serde(default = "default_y_domain")]
    pub y_domain: (f64, f64),
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default = "default_from_opacity")]
    pub from_opacity: f64,
    #[serde(default = "default_enter_opacity")]
    pub enter_opacity: f64,
    #[serde(default = "default_leave_opacity")]
    pub leave_opacity: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            margins: default_margins(),
            x_domain: default_x_domain(),
            y_domain: default_y_domain(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            axis_color: default_axis_color(),
            axis_font_size_px: default_axis_font_size_px(),
            transition_duration_ms: default_transition_duration_ms(),
            ease: Ease::default(),
            from_opacity: default_from_opacity(),
            enter_opacity: default_enter_opacity(),
            leave_opacity: default_leave_opacity(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_x_domain(mut self, start: f64, end: f64) -> Self {
        self.x_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, start: f64, end: f64) -> Self {
        self.y_domain = (start, end);
        self
    }

    #[must_use]
    pub fn with_transition(mut self, duration_ms: f64, ease: Ease) -> Self {
        self.transition_duration_ms = duration_ms;
        self.ease = ease;
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid chart config json: {err}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize chart config: {err}"))
        })
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;
        LinearScale::new(self.x_domain, (0.0, 1.0))?;
        LinearScale::new(self.y_domain, (1.0, 0.0))?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.axis_font_size_px.is_finite() || self.axis_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis font size must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_color.validate()?;
        self.axis_color.validate()?;
        self.transition_config(0.0)?;
        Ok(self)
    }

    /// Segment transitions for a container `width` pixels wide.
    ///
    /// Entering segments start fully dash-offset by the container width and
    /// draw in as the offset eases to zero.
    pub fn transition_config(&self, width: f64) -> ChartResult<TransitionConfig> {
        TransitionConfig {
            from: AnimatedStyle::new(width, self.from_opacity),
            enter: StylePatch::new(Some(0.0), Some(self.enter_opacity)),
            update: None,
            leave: StylePatch::opacity(self.leave_opacity),
            duration_ms: self.transition_duration_ms,
            ease: self.ease,
        }
        .validate()
    }
}

fn default_margins() -> Margins {
    Margins::new(20.0, 20.0, 50.0, 50.0)
}

fn default_x_domain() -> (f64, f64) {
    (1.0, 7.0)
}

fn default_y_domain() -> (f64, f64) {
    (0.0, 900.0)
}

fn default_x_tick_count() -> usize {
    7
}

fn default_y_tick_count() -> usize {
    10
}

fn default_stroke_color() -> Color {
    Color::STEEL_BLUE
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_axis_color() -> Color {
    Color::rgb(0.6, 0.6, 0.6)
}

fn default_axis_font_size_px() -> f64 {
    10.0
}

fn default_transition_duration_ms() -> f64 {
    800.0
}

fn default_from_opacity() -> f64 {
    0.8
}

fn default_enter_opacity() -> f64 {
    1.0
}

fn default_leave_opacity() -> f64 {
    0.0
}
