use crate::core::ChartDimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive coordinates are relative to the plot origin; backends apply
/// the `origin` translation (the chart margins) themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub origin: (f64, f64),
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
            origin: dimensions.plot_origin(),
            paths: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}
