// AI module for the computer opponent

mod attack;

pub use attack::{looking_at, AttackPlan};
