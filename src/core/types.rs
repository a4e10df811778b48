use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One sample of a series.
///
/// `key` is the position of the sample within its series and doubles as the
/// identity used by keyed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub key: usize,
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(key: usize, x: f64, y: f64) -> Self {
        Self { key, x, y }
    }
}

/// Builds a contiguous series from raw `(x, y)` pairs, assigning keys from 0.
#[must_use]
pub fn series_from_pairs(pairs: &[(f64, f64)]) -> Vec<Coordinate> {
    pairs
        .iter()
        .enumerate()
        .map(|(key, &(x, y))| Coordinate::new(key, x, y))
        .collect()
}

/// Rejects duplicate keys and non-finite samples.
///
/// Keys that are not contiguous from 0 are accepted but logged, since the
/// segment builder pairs samples by position.
pub fn validate_series(series: &[Coordinate]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(series.len());
    let mut contiguous = true;
    for (index, point) in series.iter().enumerate() {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "coordinate with key {} must be finite",
                point.key
            )));
        }
        if !seen.insert(point.key) {
            return Err(ChartError::InvalidData(format!(
                "duplicate coordinate key {}",
                point.key
            )));
        }
        contiguous &= point.key == index;
    }

    if !contiguous {
        warn!(
            len = series.len(),
            "series keys are not contiguous from 0; segments pair samples by position"
        );
    }
    Ok(())
}
