use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> NavResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(NavError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashStyle {
    Solid,
    Dash,
    Dot,
    DashDot,
}

/// Shape geometry in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationShape {
    /// Infinite horizontal line at data Y.
    HorizontalLine { y: f64 },
    /// Infinite vertical line at data X.
    VerticalLine { x: f64 },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    Text { text: String, x: f64, y: f64 },
}

impl AnnotationShape {
    fn coordinates(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::HorizontalLine { y } => vec![("y", y)],
            Self::VerticalLine { x } => vec![("x", x)],
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => vec![("x", x), ("y", y), ("width", width), ("height", height)],
            Self::Line { x0, y0, x1, y1 } => {
                vec![("x0", x0), ("y0", y0), ("x1", x1), ("y1", y1)]
            }
            Self::Text { x, y, .. } => vec![("x", x), ("y", y)],
        }
    }
}

/// Stroke/label options shared by every drawing helper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    pub color: Color,
    pub name: Option<String>,
    pub line_width: u32,
    pub dash_style: DashStyle,
}

impl AnnotationStyle {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            name: None,
            line_width: 1,
            dash_style: DashStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_dash_style(mut self, dash_style: DashStyle) -> Self {
        self.dash_style = dash_style;
        self
    }
}

/// One shape attached to the chart, clipped to a named chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub shape: AnnotationShape,
    pub color: Color,
    pub name: Option<String>,
    pub line_width: u32,
    pub dash_style: DashStyle,
    pub clip_to_area: String,
}

impl Annotation {
    #[must_use]
    pub fn new(shape: AnnotationShape, style: AnnotationStyle, clip_to_area: impl Into<String>) -> Self {
        Self {
            shape,
            color: style.color,
            name: style.name,
            line_width: style.line_width,
            dash_style: style.dash_style,
            clip_to_area: clip_to_area.into(),
        }
    }

    pub fn validate(&self) -> NavResult<()> {
        self.color.validate()?;
        if self.line_width == 0 {
            return Err(NavError::InvalidData(
                "annotation line width must be >= 1".to_owned(),
            ));
        }
        for (name, value) in self.shape.coordinates() {
            if !value.is_finite() {
                return Err(NavError::InvalidData(format!(
                    "annotation coordinate `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }
}
