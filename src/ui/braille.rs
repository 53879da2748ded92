//! Braille packing for rendering a 1-bit framebuffer in a terminal
//! Each terminal cell holds a 2×4 grid of Braille dots, so a 128×64
//! display fits in 64×16 cells

use super::framebuffer::Framebuffer;

pub const DOTS_PER_CELL_X: i32 = 2;
pub const DOTS_PER_CELL_Y: i32 = 4;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // Dot pattern per cell (bit n = Braille dot n+1)
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    /// Pack every lit framebuffer pixel into dots
    pub fn from_framebuffer(fb: &Framebuffer) -> Self {
        let cells_x = (fb.width() + DOTS_PER_CELL_X - 1) / DOTS_PER_CELL_X;
        let cells_y = (fb.height() + DOTS_PER_CELL_Y - 1) / DOTS_PER_CELL_Y;
        let mut canvas = Self::new(cells_x as usize, cells_y as usize);

        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y) {
                    canvas.set_pixel(x as usize, y as usize);
                }
            }
        }
        canvas
    }

    /// Set a dot at pixel coordinates
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0,
            (0, 1) => 1,
            (0, 2) => 2,
            (0, 3) => 6,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 5,
            (1, 3) => 7,
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
    }

    /// Braille character for a cell (U+2800 + dot pattern)
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// One row of cells as text
    pub fn row(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
