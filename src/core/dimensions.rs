use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Observed container size plus the drawing area left after margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl ChartDimensions {
    /// Derives bounded dimensions; they never go below zero.
    #[must_use]
    pub fn compute(width: f64, height: f64, margins: Margins) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        Self {
            width,
            height,
            margins,
            bounded_width: (width - margins.left - margins.right).max(0.0),
            bounded_height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    /// Translation applied to the plot group.
    #[must_use]
    pub fn plot_origin(self) -> (f64, f64) {
        (self.margins.left, self.margins.top)
    }

    #[must_use]
    pub fn has_drawable_area(self) -> bool {
        self.bounded_width > 0.0 && self.bounded_height > 0.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Tracks a container's observed size and re-derives the drawing area.
///
/// The resolver owns no chart state. Observing the same size twice yields
/// identical dimensions and reports no change, so resize notifications can be
/// replayed freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionResolver {
    margins: Margins,
    current: ChartDimensions,
}

impl DimensionResolver {
    pub fn new(margins: Margins) -> ChartResult<Self> {
        let margins = margins.validate()?;
        Ok(Self {
            margins,
            current: ChartDimensions::compute(0.0, 0.0, margins),
        })
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn dimensions(&self) -> ChartDimensions {
        self.current
    }

    #[must_use]
    pub fn plot_origin(&self) -> (f64, f64) {
        self.current.plot_origin()
    }

    /// Records a new observed size. Returns `true` when the dimensions changed.
    pub fn observe(&mut self, width: f64, height: f64) -> bool {
        let next = ChartDimensions::compute(width, height, self.margins);
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }
}
