//! Names and style parameters for the host's arrangement algorithms.
//!
//! The algorithms themselves live in the host runtime. The order of the
//! configured layout list is the order the host cycles through them.

use crate::theme::CustomMargins;
use serde::{Deserialize, Serialize};

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    MonadTall,
    MonadWide,
    Bsp,
    Max,
    Stack,
    Matrix,
    Tile,
}

/// Which side the main pane of a monad layout hugs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// One entry of the layout list: an algorithm name plus optional style
/// overrides. Fields left `None` fall back to the theme.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutDefinition {
    pub kind: LayoutKind,
    #[serde(default)]
    pub margin: Option<CustomMargins>,
    #[serde(default)]
    pub border_width: Option<i32>,
    #[serde(default)]
    pub border_focus: Option<String>,
    #[serde(default)]
    pub border_normal: Option<String>,
    /// Only read for `MonadTall`/`MonadWide`.
    #[serde(default)]
    pub align: Option<Align>,
    /// Only read for `Stack`.
    #[serde(default)]
    pub num_stacks: Option<u8>,
}

impl LayoutDefinition {
    #[must_use]
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            margin: None,
            border_width: None,
            border_focus: None,
            border_normal: None,
            align: None,
            num_stacks: None,
        }
    }
}

impl From<LayoutKind> for LayoutDefinition {
    fn from(kind: LayoutKind) -> Self {
        Self::new(kind)
    }
}
