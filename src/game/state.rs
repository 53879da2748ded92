use tracing::trace;

use super::physics::{self, Push, IDLE_SPIN_DEG, SUMO_RADIUS, SUMO_SPEED};
use super::sprite::{SpritePattern, SPRITE_SIZE};
use crate::ai::{self, AttackPlan};
use crate::device::Display;

const HALF_SPRITE: f32 = (SPRITE_SIZE / 2) as f32;

/// Top-left anchor of a combatant's 20×20 bounding box, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the bounding box
    pub fn center(&self) -> (f32, f32) {
        (self.x + HALF_SPRITE, self.y + HALF_SPRITE)
    }

    /// Move by `distance` along `angle_degrees`, snapping to whole pixels
    fn step(&mut self, angle_degrees: f32, distance: f32) {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        self.x = (self.x + distance * cos).trunc();
        self.y = (self.y + distance * sin).trunc();
    }
}

/// Who decides when a combatant moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pilot {
    /// Moves while the button is held
    Human,
    /// Charges when primed and facing its opponent
    Computer(AttackPlan),
}

#[derive(Debug, Clone)]
pub struct Combatant<'a> {
    pub position: Position,
    /// Heading in degrees, always within [0, 360)
    pub angle: f32,
    pub moving: bool,
    /// Set for the frame in which this combatant displaced its opponent
    pub pushing: bool,
    pub pilot: Pilot,
    pattern: &'a SpritePattern,
    rotated: SpritePattern,
}

impl<'a> Combatant<'a> {
    fn new(position: Position, angle: f32, pilot: Pilot, pattern: &'a SpritePattern) -> Self {
        let angle = physics::wrap_degrees(angle);
        Self {
            position,
            angle,
            moving: false,
            pushing: false,
            pilot,
            pattern,
            rotated: pattern.rotate(angle),
        }
    }

    pub fn human(position: Position, angle: f32, pattern: &'a SpritePattern) -> Self {
        Self::new(position, angle, Pilot::Human, pattern)
    }

    pub fn computer(position: Position, angle: f32, pattern: &'a SpritePattern) -> Self {
        Self::new(position, angle, Pilot::Computer(AttackPlan::default()), pattern)
    }

    /// Whether the computer pilot is primed to charge. Always false for humans.
    #[cfg(test)]
    pub fn attack_primed(&self) -> bool {
        matches!(self.pilot, Pilot::Computer(plan) if plan.attack_next)
    }

    /// Roll the computer pilot's attack decision for this frame.
    /// Returns true when the pilot became primed just now.
    pub fn decide_attack<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match &mut self.pilot {
            Pilot::Computer(plan) => plan.decide(rng),
            Pilot::Human => false,
        }
    }

    /// Run one frame of self-propelled movement.
    ///
    /// `held` is the button sample for this frame; only the human pilot
    /// reads it. Turning and translating happen in the same step, so a held
    /// button traces a wide spiral rather than a straight line.
    pub fn advance(&mut self, opponent: &mut Combatant<'_>, held: bool) -> Option<Push> {
        let stride = match self.pilot {
            Pilot::Human if held => SUMO_RADIUS / 2.0,
            Pilot::Computer(plan) if plan.attack_next && ai::looking_at(self, opponent) => {
                // Charging covers twice the human stride
                SUMO_RADIUS
            }
            _ => {
                self.moving = false;
                return None;
            }
        };

        self.moving = true;
        self.angle = physics::wrap_degrees(self.angle + SUMO_SPEED);
        self.position.step(self.angle, stride);
        self.resolve_push(opponent)
    }

    /// Shove `opponent` away if the two are in contact and this combatant
    /// is moving. The push is an instant position change with no recoil.
    pub fn resolve_push(&mut self, opponent: &mut Combatant<'_>) -> Option<Push> {
        if !self.moving {
            return None;
        }

        let push = physics::push_between(self.position, self.angle, opponent.position)?;
        opponent.position.x += push.dx;
        opponent.position.y += push.dy;
        self.pushing = true;

        trace!(
            dx = push.dx,
            dy = push.dy,
            approach_angle = push.approach_angle,
            "push resolved"
        );
        Some(push)
    }

    /// Stamp the rotated sprite onto the display. An idle combatant spins
    /// in place afterwards; the spin is cosmetic and independent of movement.
    pub fn draw<D: Display + ?Sized>(&mut self, display: &mut D, foreground: bool) {
        self.rotated = self.pattern.rotate(self.angle);

        let x = self.position.x as i32;
        let y = self.position.y as i32;
        for (row, col) in self.rotated.lit_cells() {
            display.set_pixel(x + col as i32, y + row as i32, foreground);
        }

        if !self.moving {
            self.angle = physics::wrap_degrees(self.angle + IDLE_SPIN_DEG);
        }
    }

    /// The sprite as last drawn
    #[cfg(test)]
    pub fn sprite(&self) -> &SpritePattern {
        &self.rotated
    }
}
