// The emulated 128×64 panel shown in the terminal

use ratatui::{backend::Backend, Terminal};
use tracing::trace;

use super::framebuffer::Framebuffer;
use super::render::{render, Palette};
use crate::device::{Display, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Result;

/// Draws into a framebuffer; `present` pushes it through ratatui
pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
    framebuffer: Framebuffer,
    palette: Palette,
}

impl<B: Backend> TerminalScreen<B> {
    pub fn new(terminal: Terminal<B>, palette: Palette) -> Self {
        Self {
            terminal,
            framebuffer: Framebuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            palette,
        }
    }
}

impl<B: Backend> Display for TerminalScreen<B> {
    fn clear(&mut self) {
        self.framebuffer.clear();
    }

    fn fill_region(&mut self, x: i32, y: i32, width: i32, height: i32, value: bool) {
        self.framebuffer.fill_region(x, y, width, height, value);
    }

    fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        self.framebuffer.set_pixel(x, y, value);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, value: bool) {
        self.framebuffer.draw_text(text, x, y, value);
    }

    fn present(&mut self) -> Result<()> {
        self.framebuffer.present()?;

        let Self {
            terminal,
            framebuffer,
            palette,
        } = self;
        terminal.draw(|f| render(f, framebuffer, palette))?;
        trace!(frame = framebuffer.presented(), "frame presented");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_present_draws_braille_and_text() {
        let terminal = Terminal::new(TestBackend::new(64, 16)).unwrap();
        let mut screen = TerminalScreen::new(terminal, Palette::from_config(&DisplayConfig::default()));

        screen.fill_region(0, 0, 2, 4, true);
        screen.draw_text("You Win!", 20, 40, true);
        screen.present().unwrap();

        let buffer = screen.terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "⣿");
        assert_eq!(buffer[(1, 0)].symbol(), "\u{2800}");
        // Pixel (20, 40) is cell (10, 10)
        let text: String = (10..18).map(|x| buffer[(x, 10)].symbol().to_string()).collect();
        assert_eq!(text, "You Win!");
    }
}
