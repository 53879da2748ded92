pub mod braille;
pub mod framebuffer;
pub mod render;
pub mod screen;

#[cfg(test)]
pub use framebuffer::Framebuffer;
pub use render::Palette;
pub use screen::TerminalScreen;
