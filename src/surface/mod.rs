pub mod sim;

use serde::{Deserialize, Serialize};

use crate::extensions::Annotation;

pub use sim::SimSurface;

/// Axis identity on the chart surface.
///
/// `X2`/`Y2` are the secondary axes; cursors only exist on the primary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    X2,
    Y,
    Y2,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::X, Axis::X2, Axis::Y, Axis::Y2];
}

/// Cursor identity; one interactive cursor per primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorAxis {
    X,
    Y,
}

impl CursorAxis {
    pub const BOTH: [CursorAxis; 2] = [CursorAxis::X, CursorAxis::Y];
}

/// Pointer icon requested from the host windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerIcon {
    Default,
    Crosshair,
    Hand,
}

/// Per-cursor configuration mirrored from the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorSettings {
    pub user_enabled: bool,
    pub auto_scroll: bool,
    pub interval: f64,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            user_enabled: false,
            auto_scroll: true,
            interval: 1.0,
        }
    }
}

/// Contract the host chart widget implements so the navigator can drive it.
///
/// The surface owns axes with a full data range and a scrollable/zoomable
/// view, per-axis pixel<->value mapping, one interactive cursor per primary
/// axis, named series, and an annotation sink. `pixel_to_value` and
/// `value_to_pixel` return `None` when the inverse mapping is undefined for
/// the current scroll/zoom state; callers treat that as a dropped event.
pub trait ChartSurface {
    fn chart_area_name(&self) -> Option<&str>;

    fn axis_range(&self, axis: Axis) -> (f64, f64);
    fn view_range(&self, axis: Axis) -> (f64, f64);
    fn is_view_zoomed(&self, axis: Axis) -> bool;
    fn zoom_view(&mut self, axis: Axis, lo: f64, hi: f64);
    fn reset_view(&mut self, axis: Axis);
    /// Current view start position in data units.
    fn view_position(&self, axis: Axis) -> f64;
    /// Scrolls the view start to `position`, keeping the view span.
    fn scroll_view(&mut self, axis: Axis, position: f64);

    fn pixel_to_value(&self, axis: Axis, pixel: f64) -> Option<f64>;
    fn value_to_pixel(&self, axis: Axis, value: f64) -> Option<f64>;

    fn selection(&self, cursor: CursorAxis) -> (f64, f64);
    fn set_selection(&mut self, cursor: CursorAxis, start: f64, end: f64);
    fn cursor_position(&self, cursor: CursorAxis) -> f64;
    fn set_cursor_position(&mut self, cursor: CursorAxis, value: f64);
    fn cursor_settings(&self, cursor: CursorAxis) -> CursorSettings;
    fn set_cursor_settings(&mut self, cursor: CursorAxis, settings: CursorSettings);

    fn scrollbar_enabled(&self, axis: Axis) -> bool;
    fn set_scrollbar_enabled(&mut self, axis: Axis, enabled: bool);
    fn pointer_icon(&self) -> PointerIcon;
    fn set_pointer_icon(&mut self, icon: PointerIcon);

    fn series_names(&self) -> Vec<String>;
    fn series_enabled(&self, name: &str) -> Option<bool>;
    fn set_series_enabled(&mut self, name: &str, enabled: bool);

    fn add_annotation(&mut self, annotation: Annotation);
}
