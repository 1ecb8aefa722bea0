use anyhow::Result;
use clap::{arg, command};
use nordwm::{autostart_path, load_config_file, Config};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = command!("nordwm-check")
        .about("Checks the configuration for problems")
        .args(&[
            arg!(-v --verbose "Outputs the received configuration."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m nordwm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(config) => {
            // RUST_LOG wins; the configured log_level is the fallback.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
                )
                .init();
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_groups(verbose);
            config.check_log_level(verbose);
            config.check_keybinds(verbose);
            println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
            check_autostart(&config, verbose);
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }

    Ok(())
}

/// Loads configuration from either the specified file (preferred) or the
/// default location.
///
/// # Errors
///
/// Errors if the file cannot be read. Indicates a filesystem error
/// (inadequate permissions, disk full, etc.) or a malformed file.
fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_path = fspath.map(PathBuf::from);
    if verbose {
        dbg!(&config_path);
    }
    load_config_file(config_path).map_err(Into::into)
}

/// The autostart script is optional, but if it exists it has to be
/// executable or the startup hook silently does nothing useful.
fn check_autostart(config: &Config, verbose: bool) {
    let path = match autostart_path(config.autostart.as_deref()) {
        Ok(path) => path,
        Err(err) => {
            println!("\x1b[1;91mERROR: could not resolve the autostart script: {err}\x1b[0m");
            return;
        }
    };
    if verbose {
        dbg!(&path);
    }
    match fs::metadata(&path) {
        Ok(metadata) if metadata.permissions().mode() & 0o111 != 0 => {
            println!("\x1b[0;92m    -> Autostart script OK\x1b[0m");
        }
        Ok(_) => {
            println!(
                "\x1b[1;91mERROR: autostart script {} is not executable\x1b[0m",
                path.display()
            );
        }
        Err(_) => {
            println!(
                "\x1b[1;93mWARN: no autostart script at {}\x1b[0m",
                path.display()
            );
        }
    }
}
