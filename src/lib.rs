//! Declarative configuration for a tiling window-manager host.
//!
//! The host runtime owns windows, layouts, and events; this crate only
//! assembles the data it consumes: keybindings, workspace groups, layout
//! parameters, a status bar, floating rules, and the swallow/unswallow
//! window hooks.

mod bar;
mod command;
mod config;
mod errors;
mod layout;
mod startup;
mod swallow;
mod theme;

pub use bar::{Bar, BarPosition, HighlightMethod, Screen, SpacerLength, Widget, WidgetDefaults};
pub use command::BaseCommand;
pub use config::{
    check_group_names, is_program_in_path, load, load_config_file, Config, FocusOnActivation,
    Group, Keybind, Modifier, MouseAction, MouseBind, MouseButton, WindowMatch,
};
pub use errors::{ConfigError, Result};
pub use layout::{Align, LayoutDefinition, LayoutKind};
pub use startup::{autostart_path, run_autostart, AUTOSTART_SCRIPT};
pub use swallow::{
    ProcDir, ProcessTable, SwallowTracker, WindowHandle, WindowRegistry, MAX_SWALLOW_HOPS,
};
pub use theme::{nord, CustomMargins, Margins, ThemeSetting};
