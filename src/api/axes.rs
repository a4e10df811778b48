use crate::core::{ChartDimensions, LinearScale};
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

use super::LineChartConfig;

const TICK_SIZE_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Bottom and left axes with tick marks and labels, in plot coordinates.
pub(super) fn axis_primitives(
    dimensions: ChartDimensions,
    x_scale: LinearScale,
    y_scale: LinearScale,
    config: &LineChartConfig,
) -> (Vec<LinePrimitive>, Vec<TextPrimitive>) {
    let mut lines = Vec::new();
    let mut texts = Vec::new();
    if !dimensions.has_drawable_area() {
        return (lines, texts);
    }

    let width = dimensions.bounded_width;
    let height = dimensions.bounded_height;
    let color = config.axis_color;
    let font = config.axis_font_size_px;

    lines.push(LinePrimitive::new(
        0.0,
        height,
        width,
        height,
        AXIS_STROKE_WIDTH,
        color,
    ));
    for tick in x_scale.ticks(config.x_tick_count) {
        let x = x_scale.scale(tick);
        lines.push(LinePrimitive::new(
            x,
            height,
            x,
            height + TICK_SIZE_PX,
            AXIS_STROKE_WIDTH,
            color,
        ));
        texts.push(TextPrimitive::new(
            format_tick(tick),
            x,
            height + TICK_SIZE_PX + TICK_LABEL_GAP_PX + font,
            font,
            color,
            TextHAlign::Center,
        ));
    }

    lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        height,
        AXIS_STROKE_WIDTH,
        color,
    ));
    for tick in y_scale.ticks(config.y_tick_count) {
        let y = y_scale.scale(tick);
        lines.push(LinePrimitive::new(
            -TICK_SIZE_PX,
            y,
            0.0,
            y,
            AXIS_STROKE_WIDTH,
            color,
        ));
        texts.push(TextPrimitive::new(
            format_tick(tick),
            -(TICK_SIZE_PX + TICK_LABEL_GAP_PX),
            y + font * 0.35,
            font,
            color,
            TextHAlign::Right,
        ));
    }

    (lines, texts)
}

fn format_tick(value: f64) -> String {
    // Avoid "-0" for ticks that land on zero from below.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}
