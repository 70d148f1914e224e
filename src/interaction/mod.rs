use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::surface::{ChartSurface, CursorAxis, PointerIcon};

/// Active interaction behavior for an attached chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolMode {
    /// Before first attach / after detach.
    Unknown,
    /// Point-select with interactive cursor tracking.
    Select,
    /// Rubber-band zoom on both axes.
    Zoom,
    /// Rubber-band zoom on the X axis only.
    ZoomX,
    /// Drag-scroll of a zoomed view.
    Pan,
}

impl ToolMode {
    pub const SELECTABLE: [ToolMode; 4] =
        [ToolMode::Select, ToolMode::Zoom, ToolMode::ZoomX, ToolMode::Pan];

    /// Menu label for the mode; `None` for `Unknown`, which is never shown.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            ToolMode::Unknown => None,
            ToolMode::Select => Some("Select"),
            ToolMode::Zoom => Some("Zoom"),
            ToolMode::ZoomX => Some("Zoom X"),
            ToolMode::Pan => Some("Pan"),
        }
    }
}

/// Applies the entry side effects of `mode` to the surface.
///
/// Interactive cursor tracking is always disabled first so that leaving
/// Select never strands a native rubber-band; Select then re-enables it on
/// both cursor axes. Zoom and ZoomX manage their zoom box through the
/// controller, not the surface's native selection drawing.
pub(crate) fn apply_tool_mode<S: ChartSurface>(surface: &mut S, mode: ToolMode) {
    for cursor in CursorAxis::BOTH {
        let mut settings = surface.cursor_settings(cursor);
        settings.user_enabled = false;
        surface.set_cursor_settings(cursor, settings);
    }

    match mode {
        ToolMode::Select => {
            surface.set_pointer_icon(PointerIcon::Crosshair);
            for cursor in CursorAxis::BOTH {
                let mut settings = surface.cursor_settings(cursor);
                settings.user_enabled = true;
                surface.set_cursor_settings(cursor, settings);
            }
        }
        ToolMode::Zoom | ToolMode::ZoomX => {
            surface.set_pointer_icon(PointerIcon::Crosshair);
        }
        ToolMode::Pan => {
            surface.set_pointer_icon(PointerIcon::Hand);
        }
        ToolMode::Unknown => {
            surface.set_pointer_icon(PointerIcon::Default);
        }
    }

    debug!(?mode, "tool mode applied");
}
