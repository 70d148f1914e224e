use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chart_nav::core::Extents;
use chart_nav::surface::{Axis, ChartSurface, CursorAxis, SimSurface};
use chart_nav::{ChartNavigator, NavCallbacks, ToolMode};

type ExtentsLog = Rc<RefCell<Vec<Extents>>>;

fn navigator_with_zoom_log() -> (ChartNavigator<SimSurface>, ExtentsLog) {
    let log: ExtentsLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut nav = ChartNavigator::new(SimSurface::new(1000.0, 500.0));
    nav.attach(NavCallbacks::new().with_zoom_changed(move |extents| {
        sink.borrow_mut().push(extents);
    }))
    .expect("attach");
    (nav, log)
}

fn drag(nav: &mut ChartNavigator<SimSurface>, from: (f64, f64), to: (f64, f64)) {
    let (px, py) = nav.surface().pixel_for(from.0, from.1);
    nav.pointer_down(px, py);
    let (px, py) = nav.surface().pixel_for(to.0, to.1);
    nav.pointer_move(px, py);
    nav.pointer_up(px, py);
}

#[test]
fn zoom_drag_zooms_both_axes_and_reports_new_extents() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Zoom);

    drag(&mut nav, (20.0, 2.0), (60.0, 8.0));

    let (x_lo, x_hi) = nav.surface().view_range(Axis::X);
    assert_abs_diff_eq!(x_lo, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x_hi, 60.0, epsilon = 1e-9);
    let (y_lo, y_hi) = nav.surface().view_range(Axis::Y);
    assert_abs_diff_eq!(y_lo, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y_hi, 8.0, epsilon = 1e-9);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_abs_diff_eq!(log[0].left, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(log[0].top, 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(log[0].right, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(log[0].bottom, 2.0, epsilon = 1e-9);

    assert_eq!(nav.surface().selection(CursorAxis::X), (0.0, 0.0));
    assert_eq!(nav.surface().selection(CursorAxis::Y), (0.0, 0.0));
}

#[test]
fn zoom_drag_reversed_corners_normalizes() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Zoom);

    drag(&mut nav, (60.0, 8.0), (20.0, 2.0));

    let (x_lo, x_hi) = nav.surface().view_range(Axis::X);
    assert_abs_diff_eq!(x_lo, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x_hi, 60.0, epsilon = 1e-9);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn click_without_drag_changes_nothing() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Zoom);

    let (px, py) = nav.surface().pixel_for(50.0, 5.0);
    nav.pointer_down(px, py);
    nav.pointer_up(px, py);

    assert!(!nav.surface().is_view_zoomed(Axis::X));
    assert!(!nav.surface().is_view_zoomed(Axis::Y));
    assert_eq!(nav.surface().view_range(Axis::X), (0.0, 100.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn zoom_x_leaves_y_view_bit_identical() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::ZoomX);
    let y_before = nav.surface().view_range(Axis::Y);
    let y2_before = nav.surface().view_range(Axis::Y2);

    drag(&mut nav, (20.0, 2.0), (60.0, 8.0));

    let (x_lo, x_hi) = nav.surface().view_range(Axis::X);
    assert_abs_diff_eq!(x_lo, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x_hi, 60.0, epsilon = 1e-9);
    assert_eq!(nav.surface().view_range(Axis::Y), y_before);
    assert_eq!(nav.surface().view_range(Axis::Y2), y2_before);
    assert!(!nav.surface().is_view_zoomed(Axis::Y));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn zoom_aligns_secondary_y_axis_by_pixel_position() {
    let log: ExtentsLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let surface =
        SimSurface::new(1000.0, 500.0).with_axis_range(Axis::Y2, 0.0, 20.0);
    let mut nav = ChartNavigator::new(surface);
    nav.attach(NavCallbacks::new().with_zoom_changed(move |extents| {
        sink.borrow_mut().push(extents);
    }))
    .expect("attach");
    nav.set_tool_mode(ToolMode::Zoom);

    drag(&mut nav, (20.0, 2.0), (60.0, 8.0));

    // Y2 spans twice the primary Y range, so the same pixels map to 4..16.
    let (y2_lo, y2_hi) = nav.surface().view_range(Axis::Y2);
    assert_abs_diff_eq!(y2_lo, 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(y2_hi, 16.0, epsilon = 1e-6);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn pan_scrolls_against_the_down_anchor() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.surface_mut().zoom_view(Axis::X, 20.0, 60.0);
    nav.set_tool_mode(ToolMode::Pan);

    let (px, py) = nav.surface().pixel_for(40.0, 5.0);
    nav.pointer_down(px, py);
    let (px, py) = nav.surface().pixel_for(30.0, 5.0);
    nav.pointer_move(px, py);

    let (x_lo, x_hi) = nav.surface().view_range(Axis::X);
    assert_abs_diff_eq!(x_lo, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x_hi, 70.0, epsilon = 1e-9);
    // Span unchanged: this is a scroll, not a zoom.
    assert_abs_diff_eq!(x_hi - x_lo, 40.0, epsilon = 1e-9);
    assert!(log.borrow().is_empty());

    nav.pointer_up(px, py);
    assert!(log.borrow().is_empty());
}

#[test]
fn pan_is_stable_once_the_anchor_catches_up() {
    let (mut nav, _log) = navigator_with_zoom_log();
    nav.surface_mut().zoom_view(Axis::X, 20.0, 60.0);
    nav.set_tool_mode(ToolMode::Pan);

    let (down_px, down_py) = nav.surface().pixel_for(40.0, 5.0);
    nav.pointer_down(down_px, down_py);
    let (move_px, move_py) = nav.surface().pixel_for(30.0, 5.0);
    nav.pointer_move(move_px, move_py);
    let after_first = nav.surface().view_range(Axis::X);

    // The held pixel now maps back onto the anchor value, so repeating the
    // same move event scrolls no further.
    nav.pointer_move(move_px, move_py);
    assert_eq!(nav.surface().view_range(Axis::X), after_first);
}

#[test]
fn pan_on_unzoomed_view_is_a_no_op() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Pan);

    drag(&mut nav, (40.0, 5.0), (30.0, 2.0));

    assert_eq!(nav.surface().view_range(Axis::X), (0.0, 100.0));
    assert_eq!(nav.surface().view_range(Axis::Y), (0.0, 10.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn zoom_out_resets_all_axes_and_fires_once() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.surface_mut().zoom_view(Axis::X, 20.0, 60.0);

    nav.zoom_out();

    for axis in Axis::ALL {
        assert!(!nav.surface().is_view_zoomed(axis));
    }
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0], Extents::from_corners(0.0, 10.0, 100.0, 0.0));
}

#[test]
fn callbacks_fire_in_every_mode() {
    let selections: Rc<RefCell<Vec<(f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let moves: Rc<RefCell<Vec<(f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let selections_sink = Rc::clone(&selections);
    let moves_sink = Rc::clone(&moves);

    let mut nav = ChartNavigator::new(SimSurface::new(1000.0, 500.0));
    nav.attach(
        NavCallbacks::new()
            .with_selection_changed(move |x, y| selections_sink.borrow_mut().push((x, y)))
            .with_cursor_moved(move |x, y| moves_sink.borrow_mut().push((x, y))),
    )
    .expect("attach");

    for mode in ToolMode::SELECTABLE {
        nav.set_tool_mode(mode);
        let (px, py) = nav.surface().pixel_for(50.0, 5.0);
        nav.pointer_down(px, py);
        nav.pointer_up(px, py);
    }
    assert_eq!(selections.borrow().len(), ToolMode::SELECTABLE.len());
    assert_abs_diff_eq!(selections.borrow()[0].0, 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(selections.borrow()[0].1, 5.0, epsilon = 1e-6);

    // Cursor-moved fires with the button up too.
    let (px, py) = nav.surface().pixel_for(10.0, 1.0);
    nav.pointer_move(px, py);
    assert_eq!(moves.borrow().len(), 1);
    assert_abs_diff_eq!(moves.borrow()[0].0, 10.0, epsilon = 1e-9);
}

#[test]
fn out_of_range_events_are_dropped_silently() {
    let (mut nav, log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Zoom);

    nav.pointer_down(-50.0, 100.0);
    nav.pointer_move(2000.0, 100.0);
    nav.pointer_up(2000.0, 100.0);

    assert!(!nav.surface().is_view_zoomed(Axis::X));
    assert_eq!(nav.surface().selection(CursorAxis::X), (0.0, 0.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn move_without_down_does_not_grow_a_selection() {
    let (mut nav, _log) = navigator_with_zoom_log();
    nav.set_tool_mode(ToolMode::Zoom);

    let (px, py) = nav.surface().pixel_for(60.0, 8.0);
    nav.pointer_move(px, py);
    assert_eq!(nav.surface().selection(CursorAxis::X), (0.0, 0.0));
}
