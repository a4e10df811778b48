pub mod dimensions;
pub mod path;
pub mod scale;
pub mod types;

pub use dimensions::{ChartDimensions, DimensionResolver, Margins};
pub use path::{PathCommand, SegmentPath, build_segment, series_segments};
pub use scale::LinearScale;
pub use types::{Coordinate, series_from_pairs, validate_series};
