use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::Config;
use crate::command::BaseCommand;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// Checks the keybind's value against the rest of the configuration:
    /// commands that spawn need a command line, commands that address a
    /// group need the name of a declared group.
    ///
    /// # Errors
    ///
    /// Errors when a required value is missing or names an unknown group.
    pub fn validate(&self, config: &Config) -> Result<()> {
        match &self.command {
            BaseCommand::Execute => {
                ensure!(!self.value.is_empty(), "value must not be empty");
            }
            BaseCommand::GotoGroup | BaseCommand::MoveToGroup => {
                ensure!(!self.value.is_empty(), "value must name a group");
                ensure!(
                    config.groups.iter().any(|group| group.name == self.value),
                    "no group named `{}` is declared",
                    self.value
                );
            }
            _ => {}
        }
        Ok(())
    }

    /// The binding's modifier set with any `"modkey"` placeholder replaced
    /// by the configured mod key, sorted for comparison.
    #[must_use]
    pub fn normalized_modifier(&self, modkey: &str) -> Vec<String> {
        let mut modifiers: Vec<String> = self
            .modifier
            .as_ref()
            .map(|modifier| modifier.clone().into())
            .unwrap_or_default();
        for m in &mut modifiers {
            if m == "modkey" {
                *m = modkey.to_owned();
            }
        }
        modifiers.sort_unstable();
        modifiers
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
