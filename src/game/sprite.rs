// Sumo sprite bitmap and rotation

use crate::error::{Result, SumoError};

/// Side length of the sprite bitmap (and of every combatant's bounding box)
pub const SPRITE_SIZE: usize = 20;

const CENTER: f32 = (SPRITE_SIZE / 2) as f32;

/// The sumo wrestler, seen from above
pub const SUMO_PIXELS: [&str; SPRITE_SIZE] = [
    "00000000000000000000",
    "00000000011000000000",
    "00000000111100000000",
    "00000001111110000000",
    "00000001100110000000",
    "00000111100111100000",
    "00001101100110110000",
    "00011101111100111000",
    "00111000111100011100",
    "00110000000000001100",
    "00110011000011001100",
    "00111011000011011100",
    "00011111111111111000",
    "00001111111111110000",
    "00000100111100100000",
    "00000100100100100000",
    "00000111100111100000",
    "00000011000011000000",
    "00000000000000000000",
    "00000000000000000000",
];

/// A validated 20×20 monochrome bitmap, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePattern {
    cells: [[bool; SPRITE_SIZE]; SPRITE_SIZE],
}

impl SpritePattern {
    /// Parse a pattern from row-major strings of '0' and '1'
    pub fn parse(rows: &[&str]) -> Result<Self> {
        if rows.len() != SPRITE_SIZE {
            return Err(SumoError::InvalidSpriteDimension {
                expected: SPRITE_SIZE,
                rows: rows.len(),
                cols: rows.first().map_or(0, |r| r.chars().count()),
            });
        }

        let mut cells = [[false; SPRITE_SIZE]; SPRITE_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let cols = line.chars().count();
            if cols != SPRITE_SIZE {
                return Err(SumoError::InvalidSpriteDimension {
                    expected: SPRITE_SIZE,
                    rows: rows.len(),
                    cols,
                });
            }

            for (col, c) in line.chars().enumerate() {
                cells[row][col] = match c {
                    '1' => true,
                    '0' => false,
                    found => return Err(SumoError::InvalidSpriteCell { row, col, found }),
                };
            }
        }

        Ok(Self { cells })
    }

    /// The built-in sumo sprite
    pub fn sumo() -> Result<Self> {
        Self::parse(&SUMO_PIXELS)
    }

    #[cfg(test)]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Iterate over every lit cell as `(row, col)`
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, &lit)| lit)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Rotate about the bitmap center by `angle_degrees`.
    ///
    /// Inverse sampling: each destination cell looks up the source cell it
    /// came from and copies it, nearest neighbour. Source coordinates that
    /// fall outside the bitmap become background.
    pub fn rotate(&self, angle_degrees: f32) -> Self {
        let theta = angle_degrees.rem_euclid(360.0).to_radians();
        let (sin, cos) = theta.sin_cos();

        let mut cells = [[false; SPRITE_SIZE]; SPRITE_SIZE];
        for (j, row) in cells.iter_mut().enumerate() {
            for (i, cell) in row.iter_mut().enumerate() {
                let di = i as f32 - CENTER;
                let dj = j as f32 - CENTER;
                // `as` truncates toward zero
                let x = (CENTER + di * cos - dj * sin) as i32;
                let y = (CENTER + di * sin + dj * cos) as i32;

                if (0..SPRITE_SIZE as i32).contains(&x) && (0..SPRITE_SIZE as i32).contains(&y) {
                    *cell = self.cells[y as usize][x as usize];
                }
            }
        }

        Self { cells }
    }
}
