use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::{BrailleCanvas, DOTS_PER_CELL_X, DOTS_PER_CELL_Y};
use super::framebuffer::{Framebuffer, Label};
use crate::config::DisplayConfig;

/// Foreground/background colors of the emulated panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub pixel: Color,
    pub background: Color,
}

impl Palette {
    pub fn from_config(display: &DisplayConfig) -> Self {
        let [r, g, b] = display.pixel_color;
        let [br, bg, bb] = display.background_color;
        Self {
            pixel: Color::Rgb(r, g, b),
            background: Color::Rgb(br, bg, bb),
        }
    }

    fn style(&self, value: bool) -> Style {
        if value {
            Style::default().fg(self.pixel).bg(self.background)
        } else {
            Style::default().fg(self.background).bg(self.pixel)
        }
    }
}

/// Where the panel sits inside the terminal: centered, clipped if the
/// terminal is too small
pub fn panel_area(area: Rect, cells_x: u16, cells_y: u16) -> Rect {
    let width = cells_x.min(area.width);
    let height = cells_y.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cell rectangle a label occupies inside the panel, clipped to it
pub fn label_area(panel: Rect, label: &Label) -> Rect {
    let cell_x = (label.x.max(0) / DOTS_PER_CELL_X) as u16;
    let cell_y = (label.y.max(0) / DOTS_PER_CELL_Y) as u16;
    let width = label.text.chars().count() as u16;

    Rect {
        x: panel.x.saturating_add(cell_x),
        y: panel.y.saturating_add(cell_y),
        width,
        height: 1,
    }
    .intersection(panel)
}

pub fn render(frame: &mut Frame, fb: &Framebuffer, palette: &Palette) {
    let area = frame.area();

    // Terminal background outside the panel
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let canvas = BrailleCanvas::from_framebuffer(fb);
    let panel = panel_area(area, canvas.width() as u16, canvas.height() as u16);

    // Pixels, one braille row per terminal row
    for row in 0..panel.height {
        let line = Paragraph::new(canvas.row(row as usize)).style(palette.style(true));
        let row_area = Rect {
            x: panel.x,
            y: panel.y + row,
            width: panel.width,
            height: 1,
        };
        frame.render_widget(line, row_area);
    }

    // Text drawn over the pixels
    for label in fb.labels() {
        let target = label_area(panel, label);
        if target.width == 0 || target.height == 0 {
            continue;
        }
        let text = Paragraph::new(label.text.as_str()).style(palette.style(label.value));
        frame.render_widget(text, target);
    }
}
