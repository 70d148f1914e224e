use indexmap::IndexMap;

use crate::extensions::Annotation;

use super::{Axis, ChartSurface, CursorAxis, CursorSettings, PointerIcon};

#[derive(Debug, Clone, Copy, PartialEq)]
struct SimAxis {
    minimum: f64,
    maximum: f64,
    view: Option<(f64, f64)>,
}

impl SimAxis {
    fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum,
            maximum,
            view: None,
        }
    }

    fn view_range(self) -> (f64, f64) {
        self.view.unwrap_or((self.minimum, self.maximum))
    }

    fn scroll_to(&mut self, position: f64) {
        let Some((lo, hi)) = self.view else {
            return;
        };
        let span = hi - lo;
        let lo = position.min(self.maximum - span).max(self.minimum);
        self.view = Some((lo, lo + span));
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SimCursor {
    position: f64,
    selection_start: f64,
    selection_end: f64,
    settings: CursorSettings,
}

impl Default for SimCursor {
    fn default() -> Self {
        Self {
            position: 0.0,
            selection_start: 0.0,
            selection_end: 0.0,
            settings: CursorSettings::default(),
        }
    }
}

/// Deterministic in-memory chart surface.
///
/// Maps pixels linearly onto the current view range of each axis (Y pixels
/// grow downward, so pixel 0 is the view maximum). Used by the integration
/// suite and usable by headless hosts that only need the navigation math.
#[derive(Debug, Clone)]
pub struct SimSurface {
    width_px: f64,
    height_px: f64,
    chart_area: Option<String>,
    axis_x: SimAxis,
    axis_x2: SimAxis,
    axis_y: SimAxis,
    axis_y2: SimAxis,
    cursor_x: SimCursor,
    cursor_y: SimCursor,
    scrollbars: IndexMap<Axis, bool>,
    pointer_icon: PointerIcon,
    series: IndexMap<String, bool>,
    annotations: Vec<Annotation>,
}

impl SimSurface {
    #[must_use]
    pub fn new(width_px: f64, height_px: f64) -> Self {
        let mut scrollbars = IndexMap::new();
        for axis in Axis::ALL {
            scrollbars.insert(axis, true);
        }
        Self {
            width_px,
            height_px,
            chart_area: Some("main".to_owned()),
            axis_x: SimAxis::new(0.0, 100.0),
            axis_x2: SimAxis::new(0.0, 100.0),
            axis_y: SimAxis::new(0.0, 10.0),
            axis_y2: SimAxis::new(0.0, 10.0),
            cursor_x: SimCursor::default(),
            cursor_y: SimCursor::default(),
            scrollbars,
            pointer_icon: PointerIcon::Default,
            series: IndexMap::new(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_axis_range(mut self, axis: Axis, minimum: f64, maximum: f64) -> Self {
        *self.axis_mut(axis) = SimAxis::new(minimum, maximum);
        self
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.series.insert(name.into(), enabled);
        self
    }

    #[must_use]
    pub fn without_chart_area(mut self) -> Self {
        self.chart_area = None;
        self
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Pixel position of a data value on the primary axes, for driving
    /// pointer events in tests.
    #[must_use]
    pub fn pixel_for(&self, x: f64, y: f64) -> (f64, f64) {
        let (x_lo, x_hi) = self.axis_x.view_range();
        let (y_lo, y_hi) = self.axis_y.view_range();
        let px = (x - x_lo) / (x_hi - x_lo) * self.width_px;
        let py = (y_hi - y) / (y_hi - y_lo) * self.height_px;
        (px, py)
    }

    fn axis(&self, axis: Axis) -> &SimAxis {
        match axis {
            Axis::X => &self.axis_x,
            Axis::X2 => &self.axis_x2,
            Axis::Y => &self.axis_y,
            Axis::Y2 => &self.axis_y2,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut SimAxis {
        match axis {
            Axis::X => &mut self.axis_x,
            Axis::X2 => &mut self.axis_x2,
            Axis::Y => &mut self.axis_y,
            Axis::Y2 => &mut self.axis_y2,
        }
    }

    fn cursor(&self, cursor: CursorAxis) -> &SimCursor {
        match cursor {
            CursorAxis::X => &self.cursor_x,
            CursorAxis::Y => &self.cursor_y,
        }
    }

    fn cursor_mut(&mut self, cursor: CursorAxis) -> &mut SimCursor {
        match cursor {
            CursorAxis::X => &mut self.cursor_x,
            CursorAxis::Y => &mut self.cursor_y,
        }
    }

    fn pixel_span(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X | Axis::X2 => self.width_px,
            Axis::Y | Axis::Y2 => self.height_px,
        }
    }
}

impl ChartSurface for SimSurface {
    fn chart_area_name(&self) -> Option<&str> {
        self.chart_area.as_deref()
    }

    fn axis_range(&self, axis: Axis) -> (f64, f64) {
        let axis = self.axis(axis);
        (axis.minimum, axis.maximum)
    }

    fn view_range(&self, axis: Axis) -> (f64, f64) {
        self.axis(axis).view_range()
    }

    fn is_view_zoomed(&self, axis: Axis) -> bool {
        self.axis(axis).view.is_some()
    }

    fn zoom_view(&mut self, axis: Axis, lo: f64, hi: f64) {
        self.axis_mut(axis).view = Some((lo, hi));
    }

    fn reset_view(&mut self, axis: Axis) {
        self.axis_mut(axis).view = None;
    }

    fn view_position(&self, axis: Axis) -> f64 {
        self.axis(axis).view_range().0
    }

    fn scroll_view(&mut self, axis: Axis, position: f64) {
        self.axis_mut(axis).scroll_to(position);
    }

    fn pixel_to_value(&self, axis: Axis, pixel: f64) -> Option<f64> {
        let span_px = self.pixel_span(axis);
        if !pixel.is_finite() || pixel < 0.0 || pixel > span_px {
            return None;
        }
        let (lo, hi) = self.axis(axis).view_range();
        let normalized = pixel / span_px;
        match axis {
            Axis::X | Axis::X2 => Some(lo + normalized * (hi - lo)),
            Axis::Y | Axis::Y2 => Some(hi - normalized * (hi - lo)),
        }
    }

    fn value_to_pixel(&self, axis: Axis, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let (lo, hi) = self.axis(axis).view_range();
        let span = hi - lo;
        if span == 0.0 {
            return None;
        }
        let span_px = self.pixel_span(axis);
        match axis {
            Axis::X | Axis::X2 => Some((value - lo) / span * span_px),
            Axis::Y | Axis::Y2 => Some((hi - value) / span * span_px),
        }
    }

    fn selection(&self, cursor: CursorAxis) -> (f64, f64) {
        let cursor = self.cursor(cursor);
        (cursor.selection_start, cursor.selection_end)
    }

    fn set_selection(&mut self, cursor: CursorAxis, start: f64, end: f64) {
        let cursor = self.cursor_mut(cursor);
        cursor.selection_start = start;
        cursor.selection_end = end;
    }

    fn cursor_position(&self, cursor: CursorAxis) -> f64 {
        self.cursor(cursor).position
    }

    fn set_cursor_position(&mut self, cursor: CursorAxis, value: f64) {
        self.cursor_mut(cursor).position = value;
    }

    fn cursor_settings(&self, cursor: CursorAxis) -> CursorSettings {
        self.cursor(cursor).settings
    }

    fn set_cursor_settings(&mut self, cursor: CursorAxis, settings: CursorSettings) {
        self.cursor_mut(cursor).settings = settings;
    }

    fn scrollbar_enabled(&self, axis: Axis) -> bool {
        self.scrollbars.get(&axis).copied().unwrap_or(false)
    }

    fn set_scrollbar_enabled(&mut self, axis: Axis, enabled: bool) {
        self.scrollbars.insert(axis, enabled);
    }

    fn pointer_icon(&self) -> PointerIcon {
        self.pointer_icon
    }

    fn set_pointer_icon(&mut self, icon: PointerIcon) {
        self.pointer_icon = icon;
    }

    fn series_names(&self) -> Vec<String> {
        self.series.keys().cloned().collect()
    }

    fn series_enabled(&self, name: &str) -> Option<bool> {
        self.series.get(name).copied()
    }

    fn set_series_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(flag) = self.series.get_mut(name) {
            *flag = enabled;
        }
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}
