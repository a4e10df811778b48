use crate::error::ChartResult;
use crate::render::{LinePrimitive, PathPrimitive, RenderFrame, Renderer, TextPrimitive};

/// Serializes frames to standalone SVG markup.
///
/// The last rendered document is kept in [`SvgRenderer::output`]; hosts that
/// own a live vector surface can diff or inject it as they see fit.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.output = frame_to_svg(frame);
        Ok(())
    }
}

/// Renders a frame as an `<svg>` document.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        frame.width, frame.height
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">",
        frame.origin.0, frame.origin.1
    ));

    svg.push_str("<g class=\"axes\">");
    for line in &frame.lines {
        svg.push_str(&line_svg(line));
    }
    for text in &frame.texts {
        svg.push_str(&text_svg(text));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"plot\">");
    for path in &frame.paths {
        svg.push_str(&path_svg(path));
    }
    svg.push_str("</g>");

    svg.push_str("</g></svg>");
    svg
}

fn path_svg(path: &PathPrimitive) -> String {
    let dash_array = path
        .dash_array
        .map(|dash| format!(" stroke-dasharray=\"{dash}\""))
        .unwrap_or_default();
    format!(
        "<path data-key=\"{}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"{} stroke-dashoffset=\"{}\"/>",
        path.key,
        path.path,
        path.stroke.to_css(),
        path.stroke_width,
        path.stroke_opacity,
        dash_array,
        path.dash_offset
    )
}

fn line_svg(line: &LinePrimitive) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.color.to_css(),
        line.stroke_width
    )
}

fn text_svg(text: &TextPrimitive) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_css(),
        text.h_align.svg_anchor(),
        escape_text(&text.text)
    )
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
