use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{Coordinate, LinearScale};

/// One drawing command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

impl PathCommand {
    #[must_use]
    pub fn point(self) -> (f64, f64) {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => (x, y),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        let (x, y) = self.point();
        x.is_finite() && y.is_finite()
    }
}

/// Command sequence for one series segment.
///
/// Displays as SVG path data, e.g. `M 0,350 L 58.3,311`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPath {
    pub commands: SmallVec<[PathCommand; 2]>,
}

impl SegmentPath {
    #[must_use]
    pub fn start(&self) -> Option<(f64, f64)> {
        self.commands.first().map(|command| command.point())
    }

    #[must_use]
    pub fn end(&self) -> Option<(f64, f64)> {
        self.commands.last().map(|command| command.point())
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match (self.start(), self.end()) {
            (Some((x1, y1)), Some((x2, y2))) => (x2 - x1).hypot(y2 - y1),
            _ => 0.0,
        }
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo { x, y } => write!(f, "M {x},{y}")?,
                PathCommand::LineTo { x, y } => write!(f, "L {x},{y}")?,
            }
        }
        Ok(())
    }
}

/// Builds the segment ending at `current`.
///
/// The segment starts at the scaled `previous` sample. The first sample of a
/// series has no predecessor and yields a zero-length segment from the
/// sample to itself.
///
/// That zero-length first segment matches how the published chart draws and
/// is kept on purpose; hosts that want no first segment can skip key `0`.
#[must_use]
pub fn build_segment(
    current: Coordinate,
    previous: Option<Coordinate>,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> SegmentPath {
    let origin = previous.unwrap_or(current);
    SegmentPath {
        commands: smallvec![
            PathCommand::MoveTo {
                x: x_scale.scale(origin.x),
                y: y_scale.scale(origin.y),
            },
            PathCommand::LineTo {
                x: x_scale.scale(current.x),
                y: y_scale.scale(current.y),
            },
        ],
    }
}

/// Builds one segment per sample, pairing each with its positional predecessor.
#[must_use]
pub fn series_segments(
    series: &[Coordinate],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<SegmentPath> {
    series
        .iter()
        .enumerate()
        .map(|(index, &point)| {
            let previous = index.checked_sub(1).map(|prev| series[prev]);
            build_segment(point, previous, x_scale, y_scale)
        })
        .collect()
}
