use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The Nord palette, shared by the theme, the layouts, and the bar widgets.
pub mod nord {
    pub const NORD0: &str = "#2E3440";
    pub const NORD1: &str = "#3B4252";
    pub const NORD2: &str = "#434C5E";
    pub const NORD3: &str = "#4C566A";
    pub const NORD4: &str = "#D8DEE9";
    pub const NORD5: &str = "#E5E9F0";
    pub const NORD6: &str = "#ECEFF4";
    pub const NORD7: &str = "#8FBCBB";
    pub const NORD8: &str = "#88C0D0";
    pub const NORD9: &str = "#81A1C1";
    pub const NORD10: &str = "#5E81AC";
    pub const NORD11: &str = "#BF616A";
    pub const NORD12: &str = "#D08770";
    pub const NORD13: &str = "#EBCB8B";
    pub const NORD14: &str = "#A3BE8C";
    pub const NORD15: &str = "#B48EAD";

    pub const BACKGROUND: &str = NORD0;
    pub const FOREGROUND: &str = NORD4;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    #[must_use]
    pub fn new_from_pair(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    #[must_use]
    pub fn new_from_triple(top: u32, horizontal: u32, bottom: u32) -> Self {
        Self {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CustomMargins {
    Int(u32),
    // format: [top, right, bottom, left] as per HTML
    Vec(Vec<u32>),
}

impl std::convert::TryFrom<CustomMargins> for Margins {
    type Error = &'static str;

    fn try_from(c: CustomMargins) -> Result<Self, Self::Error> {
        match c {
            CustomMargins::Int(size) => Ok(Self::new(size)),
            CustomMargins::Vec(vec) => match vec.len() {
                1 => Ok(Self::new(vec[0])),
                2 => Ok(Self::new_from_pair(vec[0], vec[1])),
                3 => Ok(Self::new_from_triple(vec[0], vec[1], vec[2])),
                4 => Ok(Self {
                    top: vec[0],
                    right: vec[1],
                    bottom: vec[2],
                    left: vec[3],
                }),
                0 => Err("Empty margin or border array"),
                _ => Err("Too many entries in margin or border array"),
            },
        }
    }
}

/// Window chrome shared by every tiling layout unless a layout overrides it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThemeSetting {
    pub border_width: i32,
    pub margin: CustomMargins,
    pub default_border_color: String,
    pub floating_border_color: String,
    pub focused_border_color: String,
}

impl ThemeSetting {
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match load_theme_file(path) {
            Ok(theme) => *self = theme,
            Err(err) => {
                tracing::error!("Could not load theme at path {}: {}", path.display(), err);
            }
        }
    }
}

impl Default for ThemeSetting {
    fn default() -> Self {
        ThemeSetting {
            border_width: 5,
            margin: CustomMargins::Int(8),
            default_border_color: nord::NORD5.to_owned(),
            floating_border_color: nord::NORD9.to_owned(),
            focused_border_color: nord::NORD8.to_owned(),
        }
    }
}

fn load_theme_file(path: impl AsRef<Path>) -> Result<ThemeSetting> {
    let contents = fs::read_to_string(path)?;
    let from_file: ThemeSetting = toml::from_str(&contents)?;
    Ok(from_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn deserialize_custom_theme_config() {
        let config = r##"
border_width = 0
margin = 5
default_border_color = '#222222'
floating_border_color = '#005500'
focused_border_color = '#FFB53A'
"##;
        let config: ThemeSetting = toml::from_str(config).unwrap();

        assert_eq!(
            config,
            ThemeSetting {
                border_width: 0,
                margin: CustomMargins::Int(5),
                default_border_color: "#222222".to_string(),
                floating_border_color: "#005500".to_string(),
                focused_border_color: "#FFB53A".to_string(),
            }
        );
    }

    #[test]
    fn margin_array_follows_html_order() {
        let theme: ThemeSetting = toml::from_str(
            r##"
border_width = 2
margin = [1, 2, 3, 4]
default_border_color = '#000000'
floating_border_color = '#000000'
focused_border_color = '#FF0000'
"##,
        )
        .unwrap();
        let margins: Margins = theme.margin.try_into().unwrap();
        assert_eq!(
            margins,
            Margins {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4
            }
        );
    }

    #[test]
    fn load_replaces_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "border_width = 1\nmargin = 0\ndefault_border_color = '#111111'\n\
             floating_border_color = '#222222'\nfocused_border_color = '#333333'\n"
        )
        .unwrap();

        let mut theme = ThemeSetting::default();
        theme.load(file.path());
        assert_eq!(theme.border_width, 1);
        assert_eq!(theme.focused_border_color, "#333333");
    }
}
