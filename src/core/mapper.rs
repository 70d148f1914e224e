use crate::core::Extents;
use crate::surface::{Axis, ChartSurface, CursorAxis};

/// A cursor selection narrower than this is treated as never having been
/// set, so an untouched axis (ZoomX leaves Y alone) falls back to its view
/// range instead of being misread as a zero-width selection.
pub const SELECTION_EPSILON: f64 = 1e-8;

/// Converts a pixel position to data values on both primary axes.
///
/// Returns `None` when either axis inverse mapping is undefined for the
/// current scroll/zoom state; callers drop the event without touching any
/// session state.
pub fn pixel_to_data<S: ChartSurface>(surface: &S, x_px: f64, y_px: f64) -> Option<(f64, f64)> {
    let x = surface.pixel_to_value(Axis::X, x_px)?;
    let y = surface.pixel_to_value(Axis::Y, y_px)?;
    Some((x, y))
}

/// Live view rectangle of the primary axes.
///
/// `top` is the Y view maximum and `bottom` the Y view minimum: pixel Y
/// grows downward while the reported rectangle uses a top-left-origin
/// convention.
pub fn current_view_extents<S: ChartSurface>(surface: &S) -> Extents {
    let (left, right) = surface.view_range(Axis::X);
    let (bottom, top) = surface.view_range(Axis::Y);
    Extents::from_corners(left, top, right, bottom)
}

/// Ordered selection bounds, or `None` when the selection is absent.
pub fn selection_bounds(start: f64, end: f64) -> Option<(f64, f64)> {
    let min = start.min(end);
    let max = start.max(end);
    ((max - min).abs() > SELECTION_EPSILON).then_some((min, max))
}

/// Pending zoom rectangle from the live cursor selections.
///
/// Each axis without a present selection contributes its current view range
/// instead.
pub fn selection_or_view_extents<S: ChartSurface>(surface: &S) -> Extents {
    let view = current_view_extents(surface);

    let (x_start, x_end) = surface.selection(CursorAxis::X);
    let (left, right) = selection_bounds(x_start, x_end).unwrap_or((view.left, view.right));

    let (y_start, y_end) = surface.selection(CursorAxis::Y);
    let (bottom, top) = selection_bounds(y_start, y_end).unwrap_or((view.bottom, view.top));

    Extents::from_corners(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::{current_view_extents, pixel_to_data, selection_bounds, selection_or_view_extents};
    use crate::core::Extents;
    use crate::surface::{Axis, ChartSurface, CursorAxis, SimSurface};

    #[test]
    fn selection_below_epsilon_is_absent() {
        assert!(selection_bounds(5.0, 5.0 + 1e-9).is_none());
    }

    #[test]
    fn selection_above_epsilon_is_present() {
        let (min, max) = selection_bounds(5.0 + 1e-7, 5.0).expect("present");
        assert!((min - 5.0).abs() <= 1e-12);
        assert!((max - 5.0 - 1e-7).abs() <= 1e-12);
    }

    #[test]
    fn view_extents_invert_y() {
        let mut surface = SimSurface::new(1000.0, 500.0);
        surface.zoom_view(Axis::Y, 2.0, 8.0);
        let extents = current_view_extents(&surface);
        assert_eq!(extents, Extents::from_corners(0.0, 8.0, 100.0, 2.0));
    }

    #[test]
    fn untouched_axis_falls_back_to_view_range() {
        let mut surface = SimSurface::new(1000.0, 500.0);
        surface.set_selection(CursorAxis::X, 60.0, 20.0);
        let extents = selection_or_view_extents(&surface);
        assert_eq!(extents, Extents::from_corners(20.0, 10.0, 60.0, 0.0));
    }

    #[test]
    fn both_selections_present_win_over_view() {
        let mut surface = SimSurface::new(1000.0, 500.0);
        surface.set_selection(CursorAxis::X, 20.0, 60.0);
        surface.set_selection(CursorAxis::Y, 8.0, 2.0);
        let extents = selection_or_view_extents(&surface);
        assert_eq!(extents, Extents::from_corners(20.0, 8.0, 60.0, 2.0));
    }

    #[test]
    fn out_of_viewport_pixel_maps_to_none() {
        let surface = SimSurface::new(1000.0, 500.0);
        assert!(pixel_to_data(&surface, -5.0, 100.0).is_none());
        assert!(pixel_to_data(&surface, 100.0, 501.0).is_none());
    }
}
