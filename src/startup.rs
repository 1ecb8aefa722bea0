//! Runs the user's autostart script when the host signals startup.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use xdg::BaseDirectories;

use crate::errors::Result;

pub const AUTOSTART_SCRIPT: &str = "autostart.sh";

/// Retrieve the path to the config directory. Tries to create it if it does
/// not exist.
///
/// # Errors
///
/// Will error if unable to open or create the config directory.
/// Could be caused by inadequate permissions.
pub fn config_dir() -> Result<PathBuf> {
    BaseDirectories::with_prefix("nordwm")?
        .create_config_directory("")
        .map_err(Into::into)
}

/// Where the autostart script is expected, honoring a configured override.
/// An override path is shell-expanded, so `~` and `$HOME` work.
///
/// # Errors
///
/// Will error if the config directory cannot be opened or created.
pub fn autostart_path(override_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if let Ok(expanded) = shellexpand::full(path) {
            return Ok(PathBuf::from(expanded.as_ref()));
        }
        tracing::warn!("could not expand autostart path {path}, using the default location");
    }
    Ok(config_dir()?.join(AUTOSTART_SCRIPT))
}

fn run_script(path: &Path) -> Result<Child> {
    Command::new(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(Into::into)
}

/// Host hook for startup: runs the autostart script once, detached. A
/// missing script is not an error.
pub fn run_autostart(override_path: Option<&str>) {
    match autostart_path(override_path) {
        Ok(path) if path.exists() => {
            if let Err(err) = run_script(&path) {
                tracing::error!("Unable to run autostart script {path:?}, error: {err}");
            }
        }
        Ok(path) => tracing::debug!("no autostart script at {path:?}"),
        Err(err) => tracing::error!("Could not resolve autostart script: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_path_is_expanded() {
        std::env::set_var("NORDWM_TEST_AUTOSTART_DIR", "/somewhere");
        let path = autostart_path(Some("$NORDWM_TEST_AUTOSTART_DIR/start.sh")).unwrap();
        assert_eq!(path, PathBuf::from("/somewhere/start.sh"));
    }

    #[test]
    fn missing_script_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join(AUTOSTART_SCRIPT);
        // No script was written; this must simply do nothing.
        run_autostart(script.to_str());
    }
}
