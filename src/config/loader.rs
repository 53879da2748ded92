// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sumo-duel");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

fn load_config_from(config_path: &Path) -> Result<Config, io::Error> {
    if !config_path.exists() {
        create_default_config(config_path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_path)?;
    Ok(parse_config(&contents))
}

/// Parse config text, falling back to defaults if it is malformed
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            warn!("config parse failed, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).map_err(io::Error::other)?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Sumo Duel Configuration File\n\
         # Edit this file to customize the terminal host\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key names: \"Space\", \"Enter\", \"Esc\", \"Tab\", \"Up\", \"Down\", \"Left\", \"Right\"\n\
         #            or single characters like \"J\", \"Q\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # input.hold_window_ms and input.repeat_window_ms only matter on\n\
         # terminals that do not report key releases. Raise hold_window_ms if\n\
         # the sumo stutters when a hold starts; raise repeat_window_ms if it\n\
         # stutters later in the hold\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!("created default config file at {}", path.display());
    Ok(())
}
