//! Hardware capabilities the game drives
//!
//! The simulation only ever talks to these traits. The terminal host wires
//! in concrete implementations at startup; tests wire in in-memory doubles.

mod buzzer;
mod keyboard;

#[cfg(test)]
pub mod testing;

use std::time::{Duration, Instant};

use crate::error::Result;

pub use buzzer::{BellChannel, Buzzer};
pub use keyboard::KeyboardButton;

/// Display resolution in pixels
pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;

/// A 1-bit display. `value` true is foreground (lit), false is background.
/// Coordinates start at the top-left; writes outside the screen are clipped.
pub trait Display {
    fn clear(&mut self);
    fn fill_region(&mut self, x: i32, y: i32, width: i32, height: i32, value: bool);
    fn set_pixel(&mut self, x: i32, y: i32, value: bool);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, value: bool);
    /// Push the drawn frame to the screen
    fn present(&mut self) -> Result<()>;
}

/// A single-channel tone generator
pub trait Audio {
    /// Play a tone, blocking for its full duration
    fn tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()>;
}

/// The one momentary button
pub trait Input {
    /// Non-blocking sample of the button. Idle is not held.
    fn is_held(&mut self) -> Result<bool>;
}

/// Time source for pacing
pub trait Clock {
    /// Monotonic time since the clock was created
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Every capability the game loop needs, injected once at startup
pub struct Devices<D, A, I, C> {
    pub display: D,
    pub audio: A,
    pub input: I,
    pub clock: C,
}
