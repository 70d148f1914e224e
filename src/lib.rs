//! chart-nav: interactive navigation controls for 2-D chart surfaces.
//!
//! The host provides the chart widget behind the [`surface::ChartSurface`]
//! trait; this crate supplies the select/zoom/zoom-X/pan tool modes, the
//! rubber-band zoom and pan math, a synchronized context menu, restorable
//! settings backup, and annotation drawing helpers.
//!
//! Everything is single-threaded and event-driven: the host forwards
//! pointer and menu events on its UI thread and the navigator mutates the
//! surface in place.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod menu;
pub mod surface;
pub mod telemetry;

pub use api::{CURSOR_SNAP_INTERVAL, ChartNavigator, HostMenu, NavCallbacks};
pub use crate::core::Extents;
pub use error::{NavError, NavResult};
pub use interaction::ToolMode;
