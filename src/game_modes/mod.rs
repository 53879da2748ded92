pub mod common;
mod controller;

pub use common::frame_duration;
pub use controller::MatchController;
