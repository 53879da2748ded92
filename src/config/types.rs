// Sumo Duel configuration types
// Physics is fixed; only the host-facing surface is configurable

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // The single game button
    pub button: String,

    // Leave the game and restore the terminal
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            button: "Space".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Frames per second during a round
    pub target_fps: u64,

    // Lit pixel color (RGB values 0-255)
    pub pixel_color: [u8; 3],

    // Unlit pixel color
    pub background_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 20,
            pixel_color: [120, 200, 255], // OLED blue-white
            background_color: [0, 0, 0],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    // Ring the terminal bell for tones
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    // How long a first key press counts as "held" on terminals that never
    // report key releases. Must outlast the keyboard's auto-repeat delay.
    pub hold_window_ms: u64,

    // Once auto-repeat is flowing, how long after the last repeat the key
    // still counts as held. A few repeat intervals.
    pub repeat_window_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hold_window_ms: 700,
            repeat_window_ms: 100,
        }
    }
}
