//! General configuration handed to the host runtime at startup.

mod checks;
mod default;
mod keybind;

pub use keybind::{Keybind, Modifier};

use std::env;
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

use crate::bar::{Screen, WidgetDefaults};
use crate::errors::Result;
use crate::layout::{LayoutDefinition, LayoutKind};
use crate::theme::ThemeSetting;

/// Selecting by `WM_CLASS` and/or window title. Used both for assigning new
/// windows to a group and for exempting windows from tiling.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct WindowMatch {
    /// `WM_CLASS` in X11.
    pub window_class: Option<String>,
    /// `_NET_WM_NAME` in X11.
    pub window_title: Option<String>,
}

impl WindowMatch {
    #[must_use]
    pub fn by_class(class: &str) -> Self {
        Self {
            window_class: Some(class.to_owned()),
            window_title: None,
        }
    }

    #[must_use]
    pub fn by_title(title: &str) -> Self {
        Self {
            window_class: None,
            window_title: Some(title.to_owned()),
        }
    }

    /// A rule with neither field set matches nothing.
    #[must_use]
    pub fn matches(&self, class: Option<&str>, title: Option<&str>) -> bool {
        let class_hit = self.window_class.is_some() && self.window_class.as_deref() == class;
        let title_hit = self.window_title.is_some() && self.window_title.as_deref() == title;
        class_hit || title_hit
    }
}

/// A named workspace group. New windows matching one of `matches` are
/// auto-assigned to the group by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    /// Layout the group starts in; the host's first layout when `None`.
    pub layout: Option<LayoutKind>,
    #[serde(default)]
    pub matches: Vec<WindowMatch>,
}

impl Group {
    #[must_use]
    pub fn new(name: &str, layout: LayoutKind) -> Self {
        Self {
            name: name.to_owned(),
            layout: Some(layout),
            matches: vec![],
        }
    }
}

/// What the host does when a window requests activation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusOnActivation {
    /// Focus when the window is on the visible group, mark urgent otherwise.
    #[default]
    Smart,
    Focus,
    Never,
    Urgent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Drag: float the window and move it with the pointer.
    MoveFloating,
    /// Drag: float the window and resize it with the pointer.
    ResizeFloating,
    /// Click: raise the window above its siblings.
    BringToFront,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MouseBind {
    pub modifier: Modifier,
    pub button: MouseButton,
    pub action: MouseAction,
}

/// General configuration.
///
/// Constructed once at startup, either from the defaults compiled into this
/// crate or from `config.toml` in the XDG config directory, then handed to
/// the host. Nothing here is mutated at runtime.
#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub terminal: String,
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    /// `WM_CLASS` name the host reports to clients. Java toolkits check this
    /// against a whitelist of known window managers; `LG3D` is on it.
    pub wm_class_name: String,
    /// Overrides the autostart script location.
    pub autostart: Option<String>,
    /// Filter directive for the tracing subscriber, e.g. `info` or
    /// `nordwm=debug`.
    pub log_level: String,
    pub widget_defaults: WidgetDefaults,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutDefinition>,
    /// Windows matching one of these rules never tile. First match wins.
    pub floating_rules: Vec<WindowMatch>,
    pub keybind: Vec<Keybind>,
    pub mouse: Vec<MouseBind>,
    pub screens: Vec<Screen>,

    #[serde(skip)]
    pub theme: ThemeSetting,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| tracing::error!("ERROR LOADING CONFIG: {:?}", err))
        .unwrap_or_default()
}

/// Loads configuration from either the specified file (preferred) or the
/// default XDG location. A missing default file is written out so the user
/// has something to edit.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed, or if `BaseDirectories`
/// cannot place the config file.
pub fn load_config_file(fspath: Option<PathBuf>) -> Result<Config> {
    match fspath {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        }
        None => load_from_file(),
    }
}

fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("nordwm")?;
    let config_filename = path.place_config_file("config.toml")?;
    if Path::new(&config_filename).exists() {
        let contents = fs::read_to_string(config_filename)?;
        let config: Config = toml::from_str(&contents)?;
        if check_group_names(&config) {
            Ok(config)
        } else {
            tracing::warn!(
                "Invalid group configuration in config.toml. Falling back to default config."
            );
            Ok(Config::default())
        }
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        let mut file = File::create(&config_filename)?;
        file.write_all(toml.as_bytes())?;
        Ok(config)
    }
}

/// Group names are unique identifiers referenced by keybindings; reject a
/// configuration where they collide or are blank.
#[must_use]
pub fn check_group_names(config: &Config) -> bool {
    let names = get_group_names(&config.groups);
    all_names_nonempty(&names) && all_names_unique(&names)
}

#[must_use]
pub fn get_group_names(groups: &[Group]) -> Vec<String> {
    groups.iter().map(|group| group.name.clone()).collect()
}

pub fn all_names_nonempty(names: &[String]) -> bool {
    names.iter().all(|name| !name.is_empty())
}

#[must_use]
pub fn all_names_unique(names: &[String]) -> bool {
    let mut sorted = names.to_vec();
    sorted.sort();
    sorted.dedup();
    names.len() == sorted.len()
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Returns a terminal for the mod+Return keybind.
fn default_terminal<'s>() -> &'s str {
    // order from least common to most common.
    // the thinking is if a machine has an uncommon terminal installed, it is intentional
    let terms = &[
        "alacritty",
        "termite",
        "kitty",
        "urxvt",
        "rxvt",
        "st",
        "roxterm",
        "eterm",
        "xterm",
        "terminator",
        "terminology",
        "gnome-terminal",
        "xfce4-terminal",
        "konsole",
        "uxterm",
    ];

    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .unwrap_or(&"alacritty")
}

impl Config {
    /// Keybinds as the host consumes them: the `"modkey"` placeholder is
    /// substituted with the configured mod key, and bindings that fail
    /// validation are dropped with an error log.
    #[must_use]
    pub fn mapped_bindings(&self) -> Vec<Keybind> {
        self.keybind
            .clone()
            .into_iter()
            .map(|mut keybind| {
                if let Some(ref mut modifier) = keybind.modifier {
                    substitute_modkey(modifier, &self.modkey);
                }
                keybind
            })
            .filter(|keybind| match keybind.validate(self) {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!("Invalid key binding: {}\n{:?}", err, keybind);
                    false
                }
            })
            .collect()
    }

    /// Mouse bindings with the `"modkey"` placeholder substituted.
    #[must_use]
    pub fn mapped_mouse_bindings(&self) -> Vec<MouseBind> {
        self.mouse
            .clone()
            .into_iter()
            .map(|mut bind| {
                substitute_modkey(&mut bind.modifier, &self.modkey);
                bind
            })
            .collect()
    }

    /// The first floating rule matching the given window, if any.
    #[must_use]
    pub fn floating_rule_for(&self, class: Option<&str>, title: Option<&str>) -> Option<&WindowMatch> {
        self.floating_rules
            .iter()
            .find(|rule| rule.matches(class, title))
    }

    /// The group a new window should be auto-assigned to, by match rule.
    #[must_use]
    pub fn group_for(&self, class: Option<&str>, title: Option<&str>) -> Option<&Group> {
        self.groups
            .iter()
            .find(|group| group.matches.iter().any(|rule| rule.matches(class, title)))
    }
}

fn substitute_modkey(modifier: &mut Modifier, modkey: &str) {
    match modifier {
        Modifier::Single(m) if m == "modkey" => *m = modkey.to_owned(),
        Modifier::List(ms) => {
            for m in ms {
                if m == "modkey" {
                    *m = modkey.to_owned();
                }
            }
        }
        Modifier::Single(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::BaseCommand;

    #[test]
    fn default_group_names_are_unique() {
        let config = Config::default();
        assert!(check_group_names(&config));
    }

    #[test]
    fn duplicate_group_names_are_rejected() {
        let mut config = Config::default();
        config.groups.push(Group::new("WEB", LayoutKind::Max));
        assert!(!check_group_names(&config));
    }

    #[test]
    fn serialize_default_config() {
        let config = Config::default();
        assert!(toml::to_string(&config).is_ok());
    }

    #[test]
    fn load_config_file_round_trips_the_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string(&Config::default()).unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = load_config_file(Some(file.path().to_path_buf())).unwrap();
        let default = Config::default();
        assert_eq!(config.modkey, default.modkey);
        assert_eq!(config.keybind, default.keybind);
        assert_eq!(config.groups, default.groups);
        assert_eq!(config.floating_rules, default.floating_rules);
        assert_eq!(config.screens, default.screens);
    }

    #[test]
    fn mapped_bindings_substitute_the_mod_key() {
        let config = Config::default();
        let mapped = config.mapped_bindings();
        assert!(!mapped.is_empty());
        for keybind in &mapped {
            let modifiers: Vec<String> = keybind
                .modifier
                .clone()
                .map(Into::into)
                .unwrap_or_default();
            assert!(!modifiers.iter().any(|m| m == "modkey"));
        }
    }

    #[test]
    fn binding_to_an_unknown_group_is_dropped() {
        let mut config = Config::default();
        let declared = config.keybind.len();
        config.keybind.push(Keybind {
            command: BaseCommand::GotoGroup,
            value: "NO_SUCH_GROUP".to_owned(),
            modifier: Some(vec!["modkey".to_owned()].into()),
            key: "9".to_owned(),
        });
        assert_eq!(config.mapped_bindings().len(), declared);
    }

    #[test]
    fn first_floating_rule_wins() {
        let mut config = Config::default();
        config.floating_rules = vec![
            WindowMatch::by_class("dialog"),
            WindowMatch::by_title("dialog"),
        ];
        let rule = config
            .floating_rule_for(Some("dialog"), Some("dialog"))
            .unwrap();
        assert_eq!(rule, &WindowMatch::by_class("dialog"));
    }

    #[test]
    fn match_rules_assign_groups() {
        let config = Config::default();
        let group = config.group_for(Some("Steam"), None).unwrap();
        assert_eq!(group.name, "STEAM");
        assert!(config.group_for(Some("mpv"), None).is_none());
    }

    #[test]
    fn empty_window_match_matches_nothing() {
        let rule = WindowMatch::default();
        assert!(!rule.matches(None, None));
        assert!(!rule.matches(Some("any"), Some("any")));
    }
}
