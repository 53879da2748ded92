pub mod arena;
pub mod physics;
pub mod sprite;
pub mod state;

pub use arena::{Arena, Side};
pub use sprite::SpritePattern;
pub use state::{Combatant, Position};
