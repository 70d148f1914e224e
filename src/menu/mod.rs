use serde::{Deserialize, Serialize};

use crate::interaction::ToolMode;

/// Identity tag carried by every menu entry.
///
/// Entries injected by the navigator are tagged with their purpose so menu
/// synchronization can rewrite them without ever touching host-supplied
/// items (`Host`/`HostSeparator`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuRole {
    ZoomOut,
    ZoomOutSeparator,
    Tool(ToolMode),
    TrailingSeparator,
    Series(String),
    Host,
    HostSeparator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuEntryKind {
    Separator,
    Action { label: String, checked: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub role: MenuRole,
    pub kind: MenuEntryKind,
    pub visible: bool,
}

impl MenuEntry {
    #[must_use]
    pub fn separator(role: MenuRole) -> Self {
        Self {
            role,
            kind: MenuEntryKind::Separator,
            visible: true,
        }
    }

    #[must_use]
    pub fn action(role: MenuRole, label: impl Into<String>) -> Self {
        Self {
            role,
            kind: MenuEntryKind::Action {
                label: label.into(),
                checked: false,
            },
            visible: true,
        }
    }

    fn set_checked(&mut self, value: bool) {
        if let MenuEntryKind::Action { checked, .. } = &mut self.kind {
            *checked = value;
        }
    }
}

/// Ordered context-menu contents attached to one chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContextMenu {
    pub entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// The navigation block: "Zoom Out", its separator, the four tool
    /// entries, and a trailing separator.
    #[must_use]
    pub fn navigation() -> Self {
        let mut entries = vec![
            MenuEntry::action(MenuRole::ZoomOut, "Zoom Out"),
            MenuEntry::separator(MenuRole::ZoomOutSeparator),
        ];
        for mode in ToolMode::SELECTABLE {
            let label = mode.label().unwrap_or_default();
            entries.push(MenuEntry::action(MenuRole::Tool(mode), label));
        }
        entries.push(MenuEntry::separator(MenuRole::TrailingSeparator));
        Self { entries }
    }

    /// Navigation block followed by copies of the host's entries.
    ///
    /// Host items keep their label/checked state but are re-tagged so menu
    /// synchronization never rewrites them; click handling for them is
    /// forwarded to the preserved host handler.
    #[must_use]
    pub fn merged_with_host(host: &ContextMenu) -> Self {
        let mut menu = Self::navigation();
        for entry in &host.entries {
            match &entry.kind {
                MenuEntryKind::Separator => {
                    menu.entries.push(MenuEntry::separator(MenuRole::HostSeparator));
                }
                MenuEntryKind::Action { label, checked } => {
                    let mut copy = MenuEntry::action(MenuRole::Host, label.clone());
                    copy.set_checked(*checked);
                    menu.entries.push(copy);
                }
            }
        }
        menu.entries
            .push(MenuEntry::separator(MenuRole::HostSeparator));
        menu
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }
}

/// Operation resolved from a menu click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    SetTool(ToolMode),
    ZoomOut,
    ToggleSeries { name: String, enabled: bool },
    Host,
}

/// Rewrites the menu to match controller state before it is shown.
///
/// Shows/hides the zoom-out block, checks exactly the entry for `mode`,
/// and replaces all series entries with one checkbox per current series.
pub fn sync_menu(menu: &mut ContextMenu, mode: ToolMode, any_zoomed: bool, series: &[(String, bool)]) {
    menu.entries
        .retain(|entry| !matches!(entry.role, MenuRole::Series(_)));

    for entry in &mut menu.entries {
        match &entry.role {
            MenuRole::ZoomOut | MenuRole::ZoomOutSeparator => entry.visible = any_zoomed,
            MenuRole::Tool(tool) => {
                let checked = *tool == mode;
                entry.set_checked(checked);
            }
            _ => {}
        }
    }

    for (name, enabled) in series {
        let mut entry = MenuEntry::action(MenuRole::Series(name.clone()), name.clone());
        entry.set_checked(*enabled);
        menu.entries.push(entry);
    }
}

/// Maps a clicked entry index to its command.
///
/// Separators, hidden entries, and out-of-range indices resolve to `None`.
/// A series toggle reports the logical negation of its pre-click checked
/// state.
#[must_use]
pub fn resolve_click(menu: &ContextMenu, index: usize) -> Option<MenuCommand> {
    let entry = menu.entry(index)?;
    if !entry.visible {
        return None;
    }
    let MenuEntryKind::Action { checked, .. } = &entry.kind else {
        return None;
    };
    match &entry.role {
        MenuRole::ZoomOut => Some(MenuCommand::ZoomOut),
        MenuRole::Tool(mode) => Some(MenuCommand::SetTool(*mode)),
        MenuRole::Series(name) => Some(MenuCommand::ToggleSeries {
            name: name.clone(),
            enabled: !checked,
        }),
        MenuRole::Host => Some(MenuCommand::Host),
        _ => None,
    }
}
