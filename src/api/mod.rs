//! Headless chart composition on top of the core geometry, animation and
//! spell aggregation modules.

mod axes;
mod line_chart;
mod line_chart_config;
mod small_multiples;

pub use line_chart::{LineChart, SegmentItem};
pub use line_chart_config::LineChartConfig;
pub use small_multiples::{BookPanel, SmallMultiplesFrame, SmallMultiplesView, SpellListEntry};
