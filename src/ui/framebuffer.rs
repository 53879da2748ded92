// In-memory 1-bit framebuffer with text labels

use crate::device::Display;
use crate::error::Result;

/// A line of text drawn at a pixel anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    /// True draws in foreground on background, false the inverse
    pub value: bool,
}

/// Pixels plus the text drawn over them.
///
/// Text is kept as labels rather than rasterized so the terminal can show
/// it as real characters.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    labels: Vec<Label>,
    presented: u64,
}

impl Framebuffer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
            labels: Vec::new(),
            presented: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Pixel value; anything off-screen reads as background
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    #[cfg(test)]
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&lit| lit).count()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    #[cfg(test)]
    pub fn has_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|label| label.text.contains(needle))
    }
}

impl Display for Framebuffer {
    fn clear(&mut self) {
        self.pixels.fill(false);
        self.labels.clear();
    }

    fn fill_region(&mut self, x: i32, y: i32, width: i32, height: i32, value: bool) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width);
        let y1 = (y + height).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[(py * self.width + px) as usize] = value;
            }
        }

        // Painting over a label's anchor erases it
        self.labels
            .retain(|label| !((x0..x1).contains(&label.x) && (y0..y1).contains(&label.y)));
    }

    fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = value;
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, value: bool) {
        self.labels.push(Label {
            text: text.to_string(),
            x,
            y,
            value,
        });
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_clips() {
        let mut fb = Framebuffer::new(8, 4);
        fb.set_pixel(3, 2, true);
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(8, 0, true);
        fb.set_pixel(0, 4, true);

        assert!(fb.pixel(3, 2));
        assert_eq!(fb.lit_count(), 1);
        assert!(!fb.pixel(-1, 0));
    }

    #[test]
    fn test_fill_region_clips_to_screen() {
        let mut fb = Framebuffer::new(8, 4);
        fb.fill_region(6, 2, 10, 10, true);
        assert_eq!(fb.lit_count(), 4);

        fb.fill_region(-5, -5, 100, 100, true);
        assert_eq!(fb.lit_count(), 32);

        fb.fill_region(0, 0, 8, 1, false);
        assert_eq!(fb.lit_count(), 24);
    }

    #[test]
    fn test_clear_drops_pixels_and_text() {
        let mut fb = Framebuffer::new(8, 4);
        fb.fill_region(0, 0, 8, 4, true);
        fb.draw_text("hi", 1, 1, false);
        fb.clear();

        assert_eq!(fb.lit_count(), 0);
        assert!(fb.labels().is_empty());
    }

    #[test]
    fn test_fill_over_label_anchor_erases_it() {
        let mut fb = Framebuffer::new(128, 64);
        fb.draw_text("Player:0", 5, 11, false);
        fb.draw_text("Hold to start", 10, 54, false);

        fb.fill_region(0, 0, 128, 20, true);
        assert!(!fb.has_text("Player"));
        assert!(fb.has_text("Hold to start"));
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = Framebuffer::new(8, 4);
        fb.present().unwrap();
        fb.present().unwrap();
        assert_eq!(fb.presented(), 2);
    }
}
