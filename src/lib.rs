//! spell-charts: headless engine behind a scrolling spell-mention article.
//!
//! Two subsystems do the real work: a responsive geometry, scale and keyed
//! transition engine that turns data coordinates into animated vector paths,
//! and a spell aggregation engine that merges per-book mention records into
//! a deduplicated, sortable list. Drawing stays behind the [`render::Renderer`]
//! trait.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod spells;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig, SmallMultiplesView};
pub use error::{ChartError, ChartResult};
