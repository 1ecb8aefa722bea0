//! Status bar chrome rendered by the host.
//!
//! Everything here is description only: which widgets appear, in what order,
//! and with which colors. The host owns drawing, polling, and input.

use serde::{Deserialize, Serialize};

use crate::theme::nord;

/// Font settings a widget falls back to when it does not set its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "Overpass Mono".to_owned(),
            fontsize: 12,
            padding: 8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMethod {
    #[default]
    Block,
    Border,
    Text,
}

/// Length of a [`Widget::Spacer`]. `Stretch` absorbs all remaining width.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacerLength {
    Stretch,
    Fixed(u32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Widget {
    /// Name of the layout active on this screen.
    CurrentLayout { foreground: String },
    /// One cell per declared group; the host derives the group list from the
    /// configuration.
    GroupBox {
        active: String,
        inactive: String,
        block_highlight_text_color: String,
        this_screen_border: String,
        rounded: bool,
        highlight_method: HighlightMethod,
    },
    Spacer { length: SpacerLength },
    Systray { margin: u32 },
    /// Pending package updates for the system package manager.
    PackageUpdates {
        foreground: String,
        background: String,
        unavailable: String,
    },
    Clock {
        /// strftime format string.
        format: String,
        foreground: String,
        background: String,
    },
    QuickExit {
        foreground: String,
        background: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub position: BarPosition,
    pub height: u32,
    pub background: String,
    /// Overrides [`WidgetDefaults::font`] for this bar only.
    pub font: Option<String>,
    pub widgets: Vec<Widget>,
}

/// One physical screen and the chrome attached to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Screen {
    pub bar: Option<Bar>,
}

impl Bar {
    /// The bar of the original configuration: layout and groups on the left,
    /// tray, package updates, clock, and exit button on the right.
    #[must_use]
    pub fn nord_bottom_bar() -> Self {
        Self {
            position: BarPosition::Bottom,
            height: 28,
            background: nord::NORD1.to_owned(),
            font: Some("Ubuntu Condensed".to_owned()),
            widgets: vec![
                Widget::CurrentLayout {
                    foreground: nord::NORD4.to_owned(),
                },
                Widget::GroupBox {
                    active: nord::NORD14.to_owned(),
                    inactive: nord::NORD3.to_owned(),
                    block_highlight_text_color: nord::NORD1.to_owned(),
                    this_screen_border: nord::NORD7.to_owned(),
                    rounded: false,
                    highlight_method: HighlightMethod::Block,
                },
                Widget::Spacer {
                    length: SpacerLength::Stretch,
                },
                Widget::Systray { margin: 8 },
                Widget::Spacer {
                    length: SpacerLength::Fixed(12),
                },
                Widget::PackageUpdates {
                    foreground: nord::NORD1.to_owned(),
                    background: nord::NORD13.to_owned(),
                    unavailable: nord::FOREGROUND.to_owned(),
                },
                Widget::Clock {
                    format: "%Y-%m-%d %a %I:%M %p".to_owned(),
                    foreground: nord::FOREGROUND.to_owned(),
                    background: nord::NORD1.to_owned(),
                },
                Widget::QuickExit {
                    foreground: nord::NORD1.to_owned(),
                    background: nord::NORD11.to_owned(),
                },
            ],
        }
    }
}
