use tracing::{debug, trace};

use crate::animation::{Keyed, TransitionDiff, TransitionEngine};
use crate::core::{
    ChartDimensions, Coordinate, DimensionResolver, LinearScale, SegmentPath, build_segment,
    validate_series,
};
use crate::error::ChartResult;
use crate::render::{PathPrimitive, RenderFrame, Renderer};

use super::LineChartConfig;
use super::axes::axis_primitives;

/// One animated segment: a sample and the sample drawn before it.
///
/// The predecessor is captured when the series is set so a leaving segment
/// keeps its geometry while it fades out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentItem {
    pub current: Coordinate,
    pub previous: Option<Coordinate>,
}

impl Keyed for SegmentItem {
    type Key = usize;

    fn key(&self) -> usize {
        self.current.key
    }
}

fn segment_items(series: &[Coordinate]) -> Vec<SegmentItem> {
    series
        .iter()
        .enumerate()
        .map(|(index, &current)| SegmentItem {
            current,
            previous: index.checked_sub(1).map(|prev| series[prev]),
        })
        .collect()
}

/// Animated line chart drawing one path per series sample.
///
/// Each sample owns the segment from its predecessor, so appending samples
/// draws the line in piece by piece and removing them fades pieces out.
pub struct LineChart<R: Renderer> {
    renderer: R,
    config: LineChartConfig,
    dimensions: DimensionResolver,
    x_scale: LinearScale,
    y_scale: LinearScale,
    transitions: TransitionEngine<SegmentItem>,
    series: Vec<Coordinate>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let dimensions = DimensionResolver::new(config.margins)?;
        let (x_scale, y_scale) = build_scales(&config, dimensions.dimensions())?;
        let transitions = TransitionEngine::new(config.transition_config(0.0)?)?;

        Ok(Self {
            renderer,
            config,
            dimensions,
            x_scale,
            y_scale,
            transitions,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dimensions(&self) -> ChartDimensions {
        self.dimensions.dimensions()
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn series(&self) -> &[Coordinate] {
        &self.series
    }

    #[must_use]
    pub fn transitions(&self) -> &TransitionEngine<SegmentItem> {
        &self.transitions
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Applies an observed container size.
    ///
    /// Rebuilds both scales and the entering dash offset when the size
    /// changed; returns whether it did.
    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<bool> {
        if !self.dimensions.observe(width, height) {
            return Ok(false);
        }

        let dimensions = self.dimensions.dimensions();
        let (x_scale, y_scale) = build_scales(&self.config, dimensions)?;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.transitions
            .set_config(self.config.transition_config(dimensions.width)?)?;
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            bounded_width = dimensions.bounded_width,
            bounded_height = dimensions.bounded_height,
            "line chart resized"
        );
        Ok(true)
    }

    /// Diffs a new series against the drawn one and starts transitions.
    pub fn set_series(&mut self, series: Vec<Coordinate>) -> ChartResult<TransitionDiff<usize>> {
        validate_series(&series)?;
        let diff = self.transitions.sync(segment_items(&series))?;
        self.series = series;
        Ok(diff)
    }

    /// Swaps in an unrelated series, cancelling exits of samples it lacks.
    pub fn replace_series(
        &mut self,
        series: Vec<Coordinate>,
    ) -> ChartResult<TransitionDiff<usize>> {
        validate_series(&series)?;
        let diff = self.transitions.replace_dataset(segment_items(&series))?;
        self.series = series;
        Ok(diff)
    }

    /// Drops every segment immediately.
    pub fn clear(&mut self) {
        self.transitions.teardown();
        self.series.clear();
    }

    /// Advances animations by one frame. Returns `true` while animating.
    pub fn tick(&mut self, delta_ms: f64) -> ChartResult<bool> {
        self.transitions.tick(delta_ms)
    }

    /// Keys of segments that respond to pointer interaction.
    #[must_use]
    pub fn interactive_keys(&self) -> Vec<usize> {
        self.transitions.interactive_keys()
    }

    /// Current geometry of the segment owned by `key`, if it is drawn.
    #[must_use]
    pub fn segment_path(&self, key: usize) -> Option<SegmentPath> {
        self.transitions
            .record(&key)
            .map(|record| self.path_for(record.item))
    }

    fn path_for(&self, item: SegmentItem) -> SegmentPath {
        build_segment(item.current, item.previous, self.x_scale, self.y_scale)
    }

    /// Materializes the current frame: axes plus every drawn segment.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let dimensions = self.dimensions.dimensions();
        let mut frame = RenderFrame::new(dimensions);

        let (lines, texts) = axis_primitives(dimensions, self.x_scale, self.y_scale, &self.config);
        frame.lines = lines;
        frame.texts = texts;

        frame.paths = self
            .transitions
            .rendered()
            .map(|(&key, record)| PathPrimitive {
                key,
                path: self.path_for(record.item),
                stroke: self.config.stroke_color,
                stroke_width: self.config.stroke_width,
                stroke_opacity: record.current_style.opacity,
                dash_array: Some(dimensions.width),
                dash_offset: record.current_style.dash_offset,
            })
            .collect();

        trace!(
            paths = frame.paths.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "line chart frame built"
        );
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }
}

fn build_scales(
    config: &LineChartConfig,
    dimensions: ChartDimensions,
) -> ChartResult<(LinearScale, LinearScale)> {
    let x_scale = LinearScale::new(config.x_domain, (0.0, dimensions.bounded_width))?;
    // Inverted range: larger values sit higher on screen.
    let y_scale = LinearScale::new(config.y_domain, (dimensions.bounded_height, 0.0))?;
    Ok((x_scale, y_scale))
}
