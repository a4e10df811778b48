use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Per-frame stroke values consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedStyle {
    pub dash_offset: f64,
    pub opacity: f64,
}

impl AnimatedStyle {
    #[must_use]
    pub const fn new(dash_offset: f64, opacity: f64) -> Self {
        Self {
            dash_offset,
            opacity,
        }
    }

    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            dash_offset: self.dash_offset + (target.dash_offset - self.dash_offset) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.dash_offset.is_finite() || !self.opacity.is_finite() {
            return Err(ChartError::InvalidData(
                "animated style values must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Partial target style. Unset fields keep whatever value is current when
/// the animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(default)]
    pub dash_offset: Option<f64>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl StylePatch {
    #[must_use]
    pub const fn new(dash_offset: Option<f64>, opacity: Option<f64>) -> Self {
        Self {
            dash_offset,
            opacity,
        }
    }

    #[must_use]
    pub const fn opacity(opacity: f64) -> Self {
        Self::new(None, Some(opacity))
    }

    #[must_use]
    pub fn resolve_against(self, current: AnimatedStyle) -> AnimatedStyle {
        AnimatedStyle {
            dash_offset: self.dash_offset.unwrap_or(current.dash_offset),
            opacity: self.opacity.unwrap_or(current.opacity),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for value in [self.dash_offset, self.opacity].into_iter().flatten() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "style patch values must be finite".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}
