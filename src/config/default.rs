use super::{default_terminal, Config, Group, Keybind, MouseAction, MouseBind, MouseButton, WindowMatch};
use crate::bar::{Bar, Screen, WidgetDefaults};
use crate::command::BaseCommand;
use crate::config::FocusOnActivation;
use crate::layout::{LayoutDefinition, LayoutKind};
use crate::theme::ThemeSetting;

impl Default for Config {
    // We allow this because this function would be difficult to reduce; it is
    // the whole personal configuration written out.
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let terminal = default_terminal().to_owned();

        let groups = vec![
            Group::new("WEB", LayoutKind::MonadTall),
            Group {
                matches: vec![WindowMatch::by_class("Steam")],
                ..Group::new("STEAM", LayoutKind::Max)
            },
            Group::new("DEV", LayoutKind::Bsp),
            Group {
                matches: vec![WindowMatch::by_class("Discord")],
                ..Group::new("CHAT", LayoutKind::Matrix)
            },
            Group::new("SCRATCH", LayoutKind::Tile),
        ];

        let mut commands = vec![
            // Mod + Enter => Open a terminal
            Keybind {
                command: BaseCommand::Execute,
                value: terminal.clone(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "Return".to_owned(),
            },
            // Mod + q => kill focused window
            Keybind {
                command: BaseCommand::CloseWindow,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "q".to_owned(),
            },
            // Mod + Ctrl + r => restart the host and reload this config
            Keybind {
                command: BaseCommand::SoftReload,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "r".to_owned(),
            },
            // Mod + Ctrl + q => exit the host
            Keybind {
                command: BaseCommand::Shutdown,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "q".to_owned(),
            },
            // Mod + Space => application launcher
            Keybind {
                command: BaseCommand::Execute,
                value: "rofi -show run".to_owned(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "space".to_owned(),
            },
            // Alt + Tab => window switcher
            Keybind {
                command: BaseCommand::Execute,
                value: "rofi -show window".to_owned(),
                modifier: Some(vec!["Mod1".to_owned()].into()),
                key: "Tab".to_owned(),
            },
            // Mod + r => file manager in a terminal
            Keybind {
                command: BaseCommand::Execute,
                value: format!("{terminal} -e ranger"),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "r".to_owned(),
            },
            // Switch between windows in the current stack pane
            Keybind {
                command: BaseCommand::FocusWindowUp,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "k".to_owned(),
            },
            Keybind {
                command: BaseCommand::FocusWindowDown,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "j".to_owned(),
            },
            // Move windows within the current stack
            Keybind {
                command: BaseCommand::MoveWindowUp,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "k".to_owned(),
            },
            Keybind {
                command: BaseCommand::MoveWindowDown,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "j".to_owned(),
            },
            Keybind {
                command: BaseCommand::MoveWindowLeft,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "h".to_owned(),
            },
            // Swap panes of a split stack
            Keybind {
                command: BaseCommand::RotateStack,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "space".to_owned(),
            },
            // Split = all windows displayed; unsplit = one window displayed
            // like Max, but still with multiple stack panes
            Keybind {
                command: BaseCommand::ToggleSplit,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "Return".to_owned(),
            },
            // Cycle the layout list
            Keybind {
                command: BaseCommand::NextLayout,
                value: String::default(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "Tab".to_owned(),
            },
        ];

        // add "goto group"
        for (i, group) in groups.iter().enumerate() {
            commands.push(Keybind {
                command: BaseCommand::GotoGroup,
                value: group.name.clone(),
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: (i + 1).to_string(),
            });
        }

        // and "move window to group"
        for (i, group) in groups.iter().enumerate() {
            commands.push(Keybind {
                command: BaseCommand::MoveToGroup,
                value: group.name.clone(),
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: (i + 1).to_string(),
            });
        }

        let layouts = vec![
            LayoutDefinition::new(LayoutKind::MonadTall),
            LayoutDefinition::new(LayoutKind::Bsp),
            LayoutDefinition::new(LayoutKind::Max),
            LayoutDefinition {
                num_stacks: Some(2),
                ..LayoutDefinition::new(LayoutKind::Stack)
            },
            LayoutDefinition::new(LayoutKind::Matrix),
            LayoutDefinition::new(LayoutKind::MonadWide),
            LayoutDefinition::new(LayoutKind::Tile),
        ];

        // Run `xprop` to see the wm class and name of an X client.
        let floating_rules = vec![
            WindowMatch::by_class("confirm"),
            WindowMatch::by_class("dialog"),
            WindowMatch::by_class("download"),
            WindowMatch::by_class("error"),
            WindowMatch::by_class("file_progress"),
            WindowMatch::by_class("notification"),
            WindowMatch::by_class("splash"),
            WindowMatch::by_class("toolbar"),
            WindowMatch::by_class("confirmreset"), // gitk
            WindowMatch::by_class("makebranch"),   // gitk
            WindowMatch::by_class("maketag"),      // gitk
            WindowMatch::by_title("branchdialog"), // gitk
            WindowMatch::by_title("pinentry"),     // GPG key password entry
            WindowMatch::by_class("ssh-askpass"),
        ];

        // Drag floating windows with the mod key held.
        let mouse = vec![
            MouseBind {
                modifier: "modkey".into(),
                button: MouseButton::Button1,
                action: MouseAction::MoveFloating,
            },
            MouseBind {
                modifier: "modkey".into(),
                button: MouseButton::Button3,
                action: MouseAction::ResizeFloating,
            },
            MouseBind {
                modifier: "modkey".into(),
                button: MouseButton::Button2,
                action: MouseAction::BringToFront,
            },
        ];

        let screens = vec![Screen {
            bar: Some(Bar::nord_bottom_bar()),
        }];

        Self {
            modkey: "Mod4".to_owned(), // win key
            terminal,
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            wm_class_name: "LG3D".to_owned(),
            autostart: None,
            log_level: "info".to_owned(),
            widget_defaults: WidgetDefaults::default(),
            groups,
            layouts,
            floating_rules,
            keybind: commands,
            mouse,
            screens,
            theme: ThemeSetting::default(),
        }
    }
}
