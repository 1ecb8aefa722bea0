use serde::{Deserialize, Serialize};

/// An action the host runtime performs when a bound key or button fires.
///
/// The host owns the behavior behind each variant; this crate only declares
/// which action a binding requests and, for the value-carrying variants,
/// validates the value against the rest of the configuration.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    /// Spawn an external process. The keybind value is the command line.
    Execute,
    CloseWindow,
    /// Restart the host and reload this configuration.
    SoftReload,
    Shutdown,
    FocusWindowUp,
    FocusWindowDown,
    MoveWindowUp,
    MoveWindowDown,
    MoveWindowLeft,
    /// Swap the panes of a split stack.
    RotateStack,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,
    NextLayout,
    /// Show the group named by the keybind value on the current screen.
    GotoGroup,
    /// Move the focused window to the group named by the keybind value.
    MoveToGroup,
}
