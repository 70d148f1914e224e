use serde::{Deserialize, Serialize};

use crate::surface::{Axis, ChartSurface, CursorAxis, CursorSettings, PointerIcon};

/// Snapshot of the surface configuration the navigator overrides on attach.
///
/// Restored verbatim on detach so the host chart is never permanently
/// mutated by enabling navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingsBackup {
    cursor_x: CursorSettings,
    cursor_y: CursorSettings,
    scrollbar_x: bool,
    scrollbar_x2: bool,
    scrollbar_y: bool,
    scrollbar_y2: bool,
    pointer_icon: PointerIcon,
}

impl SettingsBackup {
    pub fn capture<S: ChartSurface>(surface: &S) -> Self {
        Self {
            cursor_x: surface.cursor_settings(CursorAxis::X),
            cursor_y: surface.cursor_settings(CursorAxis::Y),
            scrollbar_x: surface.scrollbar_enabled(Axis::X),
            scrollbar_x2: surface.scrollbar_enabled(Axis::X2),
            scrollbar_y: surface.scrollbar_enabled(Axis::Y),
            scrollbar_y2: surface.scrollbar_enabled(Axis::Y2),
            pointer_icon: surface.pointer_icon(),
        }
    }

    pub fn restore<S: ChartSurface>(&self, surface: &mut S) {
        surface.set_cursor_settings(CursorAxis::X, self.cursor_x);
        surface.set_cursor_settings(CursorAxis::Y, self.cursor_y);
        surface.set_scrollbar_enabled(Axis::X, self.scrollbar_x);
        surface.set_scrollbar_enabled(Axis::X2, self.scrollbar_x2);
        surface.set_scrollbar_enabled(Axis::Y, self.scrollbar_y);
        surface.set_scrollbar_enabled(Axis::Y2, self.scrollbar_y2);
        surface.set_pointer_icon(self.pointer_icon);
    }
}
