use crate::error::{NavError, NavResult};
use crate::extensions::{Annotation, AnnotationShape, AnnotationStyle};
use crate::surface::{Axis, ChartSurface};

use super::ChartNavigator;

impl<S: ChartSurface> ChartNavigator<S> {
    /// Attaches an infinite horizontal line at data value `y`.
    pub fn draw_horizontal_line(&mut self, y: f64, style: AnnotationStyle) -> NavResult<()> {
        self.add_shape(AnnotationShape::HorizontalLine { y }, style)
    }

    /// Attaches an infinite vertical line at data value `x`.
    pub fn draw_vertical_line(&mut self, x: f64, style: AnnotationStyle) -> NavResult<()> {
        self.add_shape(AnnotationShape::VerticalLine { x }, style)
    }

    /// Attaches a rectangle in data coordinates, clamped to the X/Y axis
    /// data ranges.
    pub fn draw_rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: AnnotationStyle,
    ) -> NavResult<()> {
        let (x, width) = clamp_span(x, width, self.surface.axis_range(Axis::X));
        let (y, height) = clamp_span(y, height, self.surface.axis_range(Axis::Y));
        self.add_shape(
            AnnotationShape::Rectangle {
                x,
                y,
                width,
                height,
            },
            style,
        )
    }

    /// Attaches a line segment between two data points.
    pub fn draw_line(
        &mut self,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        style: AnnotationStyle,
    ) -> NavResult<()> {
        self.add_shape(AnnotationShape::Line { x0, y0, x1, y1 }, style)
    }

    /// Attaches a text label anchored at its upper-left corner.
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        style: AnnotationStyle,
    ) -> NavResult<()> {
        self.add_shape(
            AnnotationShape::Text {
                text: text.into(),
                x,
                y,
            },
            style,
        )
    }

    fn add_shape(&mut self, shape: AnnotationShape, style: AnnotationStyle) -> NavResult<()> {
        let area = self
            .surface
            .chart_area_name()
            .ok_or(NavError::MissingChartArea)?
            .to_owned();
        let annotation = Annotation::new(shape, style, area);
        annotation.validate()?;
        self.surface.add_annotation(annotation);
        Ok(())
    }
}

/// Shrinks `(start, span)` so it stays within `[min, max]`.
fn clamp_span(start: f64, span: f64, (min, max): (f64, f64)) -> (f64, f64) {
    let mut start = start;
    let mut span = span;
    if start < min {
        span -= min - start;
        start = min;
    } else if start > max {
        span -= start - max;
        start = max;
    }
    if start + span > max {
        span = max - start;
    }
    (start, span)
}
