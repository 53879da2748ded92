// Configuration module for Sumo Duel
// Handles loading and managing host configuration from TOML file

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{Config, DisplayConfig, InputConfig, KeyBindings};
