// Keyboard key as the game's single button

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::warn;

use super::Input;
use crate::config::{InputConfig, KeyBindings};
use crate::error::{Result, SumoError};

/// Parse a key name from the config file.
///
/// Accepts "Space", "Enter", "Esc", "Tab", "Backspace", the arrow names
/// "Up"/"Down"/"Left"/"Right", or any single character (case-insensitive).
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    let code = match name.to_ascii_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(code)
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Tracks whether the button is down from a stream of key events.
///
/// Terminals that report key releases give an exact answer. Others only
/// send presses plus auto-repeat, so the button counts as held while
/// presses keep arriving:
/// - after the first press, for `first_repeat_window`, long enough to
///   bridge the keyboard's delay before auto-repeat starts;
/// - once repeats are flowing, for `repeat_window`, a few repeat intervals,
///   so letting go registers within a couple of frames.
///
/// A lone tap still reads as held for the whole first window; without
/// release events it cannot be told apart from the start of a hold.
#[derive(Debug, Clone)]
pub struct HoldTracker {
    release_events: bool,
    first_repeat_window: Duration,
    repeat_window: Duration,
    down: bool,
    last_press: Option<Instant>,
    repeating: bool,
}

impl HoldTracker {
    pub fn new(release_events: bool, first_repeat_window: Duration, repeat_window: Duration) -> Self {
        Self {
            release_events,
            first_repeat_window,
            repeat_window,
            down: false,
            last_press: None,
            repeating: false,
        }
    }

    pub fn record(&mut self, kind: KeyEventKind, at: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                // Without release events, auto-repeat arrives as more
                // presses; one landing inside the current hold is a repeat
                self.repeating = kind == KeyEventKind::Repeat || self.is_held(at);
                self.down = true;
                self.last_press = Some(at);
            }
            KeyEventKind::Release => {
                self.down = false;
                self.last_press = None;
                self.repeating = false;
            }
        }
    }

    pub fn is_held(&self, now: Instant) -> bool {
        if self.release_events {
            return self.down;
        }

        let window = if self.repeating {
            self.repeat_window
        } else {
            self.first_repeat_window
        };
        self.last_press
            .is_some_and(|pressed| now.saturating_duration_since(pressed) < window)
    }
}

/// The game button, read from crossterm key events
pub struct KeyboardButton {
    button: KeyCode,
    quit: KeyCode,
    tracker: HoldTracker,
}

impl KeyboardButton {
    pub fn new(bindings: &KeyBindings, input: &InputConfig, release_events: bool) -> Self {
        let button = parse_key(&bindings.button).unwrap_or_else(|| {
            warn!("unknown button key {:?}, using Space", bindings.button);
            KeyCode::Char(' ')
        });
        let quit = parse_key(&bindings.quit).unwrap_or_else(|| {
            warn!("unknown quit key {:?}, using Q", bindings.quit);
            KeyCode::Char('q')
        });

        Self {
            button,
            quit,
            tracker: HoldTracker::new(
                release_events,
                Duration::from_millis(input.hold_window_ms),
                Duration::from_millis(input.repeat_window_ms),
            ),
        }
    }

    fn is_quit(&self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        normalize(key.code) == self.quit
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl Input for KeyboardButton {
    fn is_held(&mut self) -> Result<bool> {
        // Drain everything queued since the last sample
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if self.is_quit(&key) {
                    return Err(SumoError::QuitRequested);
                }
                if normalize(key.code) == self.button {
                    self.tracker.record(key.kind, Instant::now());
                }
            }
        }

        Ok(self.tracker.is_held(Instant::now()))
    }
}
