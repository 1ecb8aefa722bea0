use std::collections::HashSet;

use tracing_subscriber::EnvFilter;

use super::{check_group_names, Config};

impl Config {
    pub fn check_groups(&self, verbose: bool) {
        if verbose {
            println!("Checking group names.");
        }
        if check_group_names(self) {
            if verbose {
                println!("Group names are ok.");
            }
        } else {
            println!("Group names must be unique and non-empty.");
        }
    }

    pub fn check_log_level(&self, verbose: bool) {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => println!("Log level is invalid: {err}"),
        }
    }

    /// Every problem the keybind list has: missing or invalid values,
    /// references to undeclared groups, and two bindings sharing a
    /// (modifier set, key) pair, which would silently shadow each other.
    #[must_use]
    pub fn keybind_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut bindings = HashSet::new();
        for keybind in &self.keybind {
            if let Err(err) = keybind.validate(self) {
                problems.push(format!("{err} for keybind {keybind:?}"));
            }

            let modifiers = keybind.normalized_modifier(&self.modkey);
            if let Some((conflict_mods, conflict_key)) =
                bindings.replace((modifiers.clone(), keybind.key.clone()))
            {
                problems.push(format!(
                    "Multiple commands bound to key combination {} + {}:\
                     \n    -> {:?}\
                     \nHelp: change one of the keybindings to something else.",
                    conflict_mods.join("+"),
                    conflict_key,
                    keybind.command,
                ));
            }
        }
        problems
    }

    /// Check all keybinds to ensure that required values are provided and
    /// that no two bindings collide.
    pub fn check_keybinds(&self, verbose: bool) {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        if verbose {
            for keybind in &self.keybind {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
        }
        let problems = self.keybind_problems();
        if problems.is_empty() {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
        } else {
            for problem in problems {
                println!("\x1b[1;91mERROR: {problem}\x1b[0m");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::BaseCommand;
    use crate::config::{Config, Keybind};

    #[test]
    fn default_log_level_is_a_valid_filter() {
        use tracing_subscriber::EnvFilter;
        let config = Config::default();
        assert!(EnvFilter::builder().parse(&config.log_level).is_ok());
    }

    #[test]
    fn default_keybinds_have_no_problems() {
        let config = Config::default();
        assert!(config.keybind_problems().is_empty());
    }

    #[test]
    fn shadowed_binding_is_reported() {
        let mut config = Config::default();
        // Same combination as the default mod+Return terminal bind, with the
        // modifier spelled out instead of using the placeholder.
        config.keybind.push(Keybind {
            command: BaseCommand::CloseWindow,
            value: String::default(),
            modifier: Some(vec![config.modkey.clone()].into()),
            key: "Return".to_owned(),
        });
        let problems = config.keybind_problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Multiple commands"));
    }

    #[test]
    fn modifier_order_does_not_hide_a_conflict() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            command: BaseCommand::Shutdown,
            value: String::default(),
            modifier: Some(vec!["Control".to_owned(), "modkey".to_owned()].into()),
            key: "r".to_owned(),
        });
        // The default soft-reload bind is modkey+Control+r.
        assert!(!config.keybind_problems().is_empty());
    }

    #[test]
    fn execute_without_value_is_reported() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            command: BaseCommand::Execute,
            value: String::default(),
            modifier: Some("modkey".into()),
            key: "F1".to_owned(),
        });
        let problems = config.keybind_problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("value must not be empty"));
    }
}
