use tracing::{debug, trace};

use crate::core::{mapper::pixel_to_data, selection_or_view_extents};
use crate::interaction::ToolMode;
use crate::surface::{Axis, ChartSurface, CursorAxis};

use super::ChartNavigator;

impl<S: ChartSurface> ChartNavigator<S> {
    /// Primary-button press at a pixel position.
    ///
    /// Anchors both cursor selections to the pressed position (rounded to
    /// the cursor snap interval) and reports the anchor through the
    /// selection-changed callback in every tool mode. Dropped entirely when
    /// the position is not mappable to data.
    pub fn pointer_down(&mut self, x_px: f64, y_px: f64) {
        if self.session.is_none() {
            return;
        }
        let Some((x, y)) = pixel_to_data(&self.surface, x_px, y_px) else {
            trace!(x_px, y_px, "pointer down outside mappable range");
            return;
        };

        let x = round_to_interval(x, self.surface.cursor_settings(CursorAxis::X).interval);
        let y = round_to_interval(y, self.surface.cursor_settings(CursorAxis::Y).interval);
        self.surface.set_selection(CursorAxis::X, x, x);
        self.surface.set_cursor_position(CursorAxis::X, x);
        self.surface.set_selection(CursorAxis::Y, y, y);
        self.surface.set_cursor_position(CursorAxis::Y, y);

        if let Some(session) = self.session.as_mut() {
            session.pointer_down = true;
            if let Some(callback) = &mut session.callbacks.selection_changed {
                callback(x, y);
            }
        }
    }

    /// Pointer motion at a pixel position.
    ///
    /// Reports the data-space position through the cursor-moved callback,
    /// then applies the mode-specific drag effect while the button is held:
    /// selection growth for Zoom/ZoomX, live scrolling for Pan. Dropped
    /// silently when the position is not mappable.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) {
        if self.session.is_none() {
            return;
        }
        let Some((x, y)) = pixel_to_data(&self.surface, x_px, y_px) else {
            trace!(x_px, y_px, "pointer move outside mappable range");
            return;
        };

        let (mode, dragging) = {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            if let Some(callback) = &mut session.callbacks.cursor_moved {
                callback(x, y);
            }
            (session.mode, session.pointer_down)
        };
        if !dragging {
            return;
        }

        match mode {
            ToolMode::Zoom => {
                let (x_start, _) = self.surface.selection(CursorAxis::X);
                let (y_start, _) = self.surface.selection(CursorAxis::Y);
                self.surface.set_selection(CursorAxis::X, x_start, x);
                self.surface.set_selection(CursorAxis::Y, y_start, y);
            }
            ToolMode::ZoomX => {
                let (x_start, _) = self.surface.selection(CursorAxis::X);
                self.surface.set_selection(CursorAxis::X, x_start, x);
            }
            ToolMode::Pan => {
                // Panning an unzoomed view has nowhere to scroll.
                if self.surface.is_view_zoomed(Axis::X) || self.surface.is_view_zoomed(Axis::Y) {
                    let (anchor_x, _) = self.surface.selection(CursorAxis::X);
                    let (anchor_y, _) = self.surface.selection(CursorAxis::Y);
                    // Delta against the fixed down-anchor, recomputed every
                    // move; the anchor tracks the view as it scrolls.
                    let dx = anchor_x - x;
                    let dy = anchor_y - y;
                    let new_x = self.surface.view_position(Axis::X) + dx;
                    let new_y = self.surface.view_position(Axis::Y) + dy;
                    let new_y2 = self.surface.view_position(Axis::Y2) + dy;
                    self.surface.scroll_view(Axis::X, new_x);
                    self.surface.scroll_view(Axis::Y, new_y);
                    self.surface.scroll_view(Axis::Y2, new_y2);
                }
            }
            ToolMode::Select | ToolMode::Unknown => {}
        }
    }

    /// Primary-button release.
    ///
    /// In Zoom/ZoomX commits the rubber-band rectangle: zooms X always, and
    /// in full Zoom both Y axes (secondary Y derived through a pixel
    /// round-trip over primary Y so the two scales stay visually aligned),
    /// clears both selections, and reports the post-zoom view extents. A
    /// click without movement aborts without zooming. Pan needs no commit:
    /// scrolling was applied live during moves.
    pub fn pointer_up(&mut self, _x_px: f64, _y_px: f64) {
        let Some(session) = &mut self.session else {
            return;
        };
        session.pointer_down = false;
        let mode = session.mode;

        if !matches!(mode, ToolMode::Zoom | ToolMode::ZoomX) {
            return;
        }

        let (x_start, x_end) = self.surface.selection(CursorAxis::X);
        let (y_start, y_end) = self.surface.selection(CursorAxis::Y);
        if x_start == x_end && y_start == y_end {
            trace!("click without drag, zoom aborted");
            return;
        }

        let extents = selection_or_view_extents(&self.surface);
        if extents.width() == 0.0 || extents.height() == 0.0 {
            trace!("degenerate selection, zoom aborted");
            return;
        }

        let y2_bounds = if mode == ToolMode::Zoom {
            derive_secondary_y_bounds(&self.surface, extents.bottom, extents.top)
        } else {
            None
        };

        self.surface.zoom_view(Axis::X, extents.left, extents.right);
        if mode == ToolMode::Zoom {
            self.surface.zoom_view(Axis::Y, extents.bottom, extents.top);
            if let Some((lo, hi)) = y2_bounds {
                self.surface.zoom_view(Axis::Y2, lo, hi);
            }
        }

        self.surface.set_selection(CursorAxis::X, 0.0, 0.0);
        self.surface.set_selection(CursorAxis::Y, 0.0, 0.0);

        debug!(
            left = extents.left,
            top = extents.top,
            right = extents.right,
            bottom = extents.bottom,
            ?mode,
            "zoom committed"
        );
        self.fire_zoom_changed();
    }
}

/// Secondary-Y zoom bounds aligned with the primary-Y bounds by pixel
/// position. `None` when either mapping is unavailable; the secondary axis
/// is then left unzoomed rather than guessed.
fn derive_secondary_y_bounds<S: ChartSurface>(
    surface: &S,
    bottom: f64,
    top: f64,
) -> Option<(f64, f64)> {
    let bottom_px = surface.value_to_pixel(Axis::Y, bottom)?;
    let top_px = surface.value_to_pixel(Axis::Y, top)?;
    let a = surface.pixel_to_value(Axis::Y2, bottom_px)?;
    let b = surface.pixel_to_value(Axis::Y2, top_px)?;
    Some((a.min(b), a.max(b)))
}

fn round_to_interval(value: f64, interval: f64) -> f64 {
    if interval.is_finite() && interval > 0.0 {
        (value / interval).round() * interval
    } else {
        value
    }
}
