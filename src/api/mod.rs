pub mod annotation_controller;
pub mod pointer_controller;
pub mod settings_backup;

use tracing::{debug, warn};

use crate::core::{Extents, current_view_extents};
use crate::error::{NavError, NavResult};
use crate::interaction::{ToolMode, apply_tool_mode};
use crate::menu::{ContextMenu, MenuCommand, MenuEntry, resolve_click, sync_menu};
use crate::surface::{Axis, ChartSurface, CursorAxis};

pub use settings_backup::SettingsBackup;

/// Cursor snap interval forced while attached; small enough that selection
/// anchors land on the pixel the pointer is over for any reasonable data
/// range.
pub const CURSOR_SNAP_INTERVAL: f64 = 1e-6;

type PointCallback = Box<dyn FnMut(f64, f64)>;
type ExtentsCallback = Box<dyn FnMut(Extents)>;
type MenuItemCallback = Box<dyn FnMut(usize, &MenuEntry)>;

/// Host-provided callbacks, all optional, invoked synchronously on the UI
/// thread that dispatches pointer and menu events. Never invoked
/// concurrently with each other for the same chart.
#[derive(Default)]
pub struct NavCallbacks {
    pub(crate) selection_changed: Option<PointCallback>,
    pub(crate) cursor_moved: Option<PointCallback>,
    pub(crate) zoom_changed: Option<ExtentsCallback>,
}

impl NavCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires on pointer-down with the anchor position in data units, in
    /// every tool mode (selection here means "pointer position").
    #[must_use]
    pub fn with_selection_changed(mut self, callback: impl FnMut(f64, f64) + 'static) -> Self {
        self.selection_changed = Some(Box::new(callback));
        self
    }

    /// Fires on every mappable pointer move with the data-space position.
    #[must_use]
    pub fn with_cursor_moved(mut self, callback: impl FnMut(f64, f64) + 'static) -> Self {
        self.cursor_moved = Some(Box::new(callback));
        self
    }

    /// Fires after every committed view change with the new view extents.
    #[must_use]
    pub fn with_zoom_changed(mut self, callback: impl FnMut(Extents) + 'static) -> Self {
        self.zoom_changed = Some(Box::new(callback));
        self
    }
}

/// A pre-existing host context menu handed over at attach.
///
/// Its entries are appended to the navigation menu and its click handler is
/// re-attached to the merged menu; `detach` hands the menu back unchanged.
pub struct HostMenu {
    pub menu: ContextMenu,
    pub on_item_clicked: Option<MenuItemCallback>,
}

pub(crate) struct Session {
    mode: ToolMode,
    callbacks: NavCallbacks,
    backup: SettingsBackup,
    menu: ContextMenu,
    host_menu: Option<ContextMenu>,
    host_handler: Option<MenuItemCallback>,
    /// One physical pointer serviced by one UI thread; the flag is scoped
    /// per session on the strength of that assumption.
    pointer_down: bool,
    pending_first_paint: bool,
}

/// Per-chart navigation session object.
///
/// The host holds one navigator per chart; it owns the surface handle and
/// the attached-session state, so there is no process-wide chart registry.
/// A session exists exactly while zoom/pan controls are enabled.
pub struct ChartNavigator<S: ChartSurface> {
    pub(crate) surface: S,
    pub(crate) session: Option<Session>,
}

impl<S: ChartSurface> ChartNavigator<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    /// Enables navigation controls. No-op when already attached.
    pub fn attach(&mut self, callbacks: NavCallbacks) -> NavResult<()> {
        self.attach_with_menu(callbacks, None)
    }

    /// Enables navigation controls, merging a pre-existing host menu.
    ///
    /// Snapshots the surface settings, installs the context menu, disables
    /// native scrollbars on all four axes, forces a fine cursor snap
    /// interval, enters Select mode, and arms a one-shot [`Self::paint`]
    /// notification.
    pub fn attach_with_menu(
        &mut self,
        callbacks: NavCallbacks,
        host_menu: Option<HostMenu>,
    ) -> NavResult<()> {
        if self.session.is_some() {
            debug!("attach ignored: navigation already enabled");
            return Ok(());
        }
        if self.surface.chart_area_name().is_none() {
            return Err(NavError::MissingChartArea);
        }

        let backup = SettingsBackup::capture(&self.surface);
        let menu = match &host_menu {
            Some(host) => ContextMenu::merged_with_host(&host.menu),
            None => ContextMenu::navigation(),
        };
        let (host_menu, host_handler) = match host_menu {
            Some(host) => (Some(host.menu), host.on_item_clicked),
            None => (None, None),
        };

        for axis in Axis::ALL {
            self.surface.set_scrollbar_enabled(axis, false);
        }
        for cursor in CursorAxis::BOTH {
            let mut settings = self.surface.cursor_settings(cursor);
            settings.auto_scroll = false;
            settings.interval = CURSOR_SNAP_INTERVAL;
            self.surface.set_cursor_settings(cursor, settings);
        }

        self.session = Some(Session {
            mode: ToolMode::Unknown,
            callbacks,
            backup,
            menu,
            host_menu,
            host_handler,
            pointer_down: false,
            pending_first_paint: true,
        });
        self.set_tool_mode(ToolMode::Select);
        debug!("navigation attached");
        Ok(())
    }

    /// Disables navigation controls and restores every setting captured at
    /// attach. Safe mid-drag (implicit cancel). No-op when not attached.
    ///
    /// Returns the host menu handed over at attach, if any.
    pub fn detach(&mut self) -> Option<HostMenu> {
        let session = self.session.take()?;
        session.backup.restore(&mut self.surface);
        debug!("navigation detached");
        session.host_menu.map(|menu| HostMenu {
            menu,
            on_item_clicked: session.host_handler,
        })
    }

    /// Current tool mode; `Unknown` while detached.
    #[must_use]
    pub fn tool_mode(&self) -> ToolMode {
        self.session
            .as_ref()
            .map_or(ToolMode::Unknown, |session| session.mode)
    }

    /// Switches tool mode and applies its surface side effects. Ignored
    /// while detached.
    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        let Some(session) = &mut self.session else {
            warn!(?mode, "set_tool_mode ignored: not attached");
            return;
        };
        session.mode = mode;
        apply_tool_mode(&mut self.surface, mode);
    }

    /// Currently visible data rectangle.
    pub fn visible_extents(&self) -> NavResult<Extents> {
        if self.surface.chart_area_name().is_none() {
            return Err(NavError::MissingChartArea);
        }
        Ok(current_view_extents(&self.surface))
    }

    /// Resets all four axis views to the full data range and reports the
    /// resulting extents. Ignored while detached.
    pub fn zoom_out(&mut self) {
        if self.session.is_none() {
            return;
        }
        for axis in Axis::ALL {
            self.surface.reset_view(axis);
        }
        debug!("view reset on all axes");
        self.fire_zoom_changed();
    }

    /// Host paint notification; the first call after attach reports the
    /// initial view extents through the zoom-changed callback.
    pub fn paint(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        if !session.pending_first_paint {
            return;
        }
        session.pending_first_paint = false;
        self.fire_zoom_changed();
    }

    /// The installed context menu; `None` while detached.
    #[must_use]
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.session.as_ref().map(|session| &session.menu)
    }

    /// Synchronizes the menu with controller state; call when the host is
    /// about to show it.
    pub fn menu_opening(&mut self) {
        let any_zoomed = [Axis::X, Axis::Y, Axis::Y2]
            .iter()
            .any(|&axis| self.surface.is_view_zoomed(axis));
        let series: Vec<(String, bool)> = self
            .surface
            .series_names()
            .into_iter()
            .map(|name| {
                let enabled = self.surface.series_enabled(&name).unwrap_or(false);
                (name, enabled)
            })
            .collect();

        let Some(session) = &mut self.session else {
            return;
        };
        sync_menu(&mut session.menu, session.mode, any_zoomed, &series);
    }

    /// Dispatches a click on the menu entry at `index`.
    pub fn menu_item_clicked(&mut self, index: usize) {
        let command = self
            .session
            .as_ref()
            .and_then(|session| resolve_click(&session.menu, index));
        match command {
            Some(MenuCommand::SetTool(mode)) => self.set_tool_mode(mode),
            Some(MenuCommand::ZoomOut) => self.zoom_out(),
            Some(MenuCommand::ToggleSeries { name, enabled }) => {
                self.surface.set_series_enabled(&name, enabled);
            }
            Some(MenuCommand::Host) => {
                let Some(session) = &mut self.session else {
                    return;
                };
                let entry = session.menu.entry(index).cloned();
                if let Some(handler) = &mut session.host_handler {
                    if let Some(entry) = entry {
                        handler(index, &entry);
                    }
                }
            }
            None => {}
        }
    }

    pub(crate) fn fire_zoom_changed(&mut self) {
        let extents = current_view_extents(&self.surface).normalized();
        if let Some(session) = &mut self.session {
            if let Some(callback) = &mut session.callbacks.zoom_changed {
                callback(extents);
            }
        }
    }
}
