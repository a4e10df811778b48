use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upper bound on generated ticks, as a multiple of the requested count.
const MAX_TICKS_PER_REQUESTED: usize = 10;
/// Largest tick index that converts to `i64` without saturating.
const MAX_TICK_INDEX: f64 = 9.0e15;

/// Linear map from a data domain onto a pixel range.
///
/// The range may be inverted to flip an axis (the vertical axis maps larger
/// values to smaller pixel coordinates) and may collapse to a single pixel
/// during transient layouts, in which case every value maps to `range.0`.
/// Values outside the domain extrapolate; callers that need clamping clamp
/// before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateDomain {
                start: domain_start,
                end: domain_end,
            });
        }

        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy mapping onto a new pixel range, keeping the domain.
    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(self.domain(), range)
    }

    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a scale with a zero-length range".to_owned(),
            ));
        }
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round-number tick values inside the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. Ticks follow the domain's
    /// direction.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }

        let reversed = self.domain_end < self.domain_start;
        let (lo, hi) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let step = tick_step(lo, hi, count);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let limit = count.saturating_mul(MAX_TICKS_PER_REQUESTED);
        let mut ticks: Vec<f64> = if step >= 1.0 {
            let Some(indices) = tick_indices((lo / step).ceil(), (hi / step).floor(), limit) else {
                return Vec::new();
            };
            indices.map(|i| i as f64 * step).collect()
        } else {
            // Divide by the inverse step so decimal ticks stay exact.
            let inverse = (1.0 / step).round();
            if !inverse.is_finite() || inverse <= 0.0 {
                return Vec::new();
            }
            let Some(indices) = tick_indices((lo * inverse).ceil(), (hi * inverse).floor(), limit)
            else {
                return Vec::new();
            };
            indices.map(|i| i as f64 / inverse).collect()
        };

        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

/// Index range `first..=last`, or `None` when the bounds do not fit an
/// `i64` or span more than `limit` ticks.
fn tick_indices(first: f64, last: f64, limit: usize) -> Option<RangeInclusive<i64>> {
    let fits = |bound: f64| bound.is_finite() && bound.abs() < MAX_TICK_INDEX;
    if !fits(first) || !fits(last) || last - first >= limit as f64 {
        return None;
    }
    Some((first as i64)..=(last as i64))
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
