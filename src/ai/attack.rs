// Attack decision for the computer sumo

use rand::Rng;
use tracing::debug;

use crate::game::physics::{angle_difference, wrap_degrees};
use crate::game::{Combatant, Position};

/// Chance per frame that an idle computer decides to charge
pub const ATTACK_CHANCE: f64 = 0.2;

/// Maximum heading error, in degrees, that still counts as facing the target
pub const LOOK_TOLERANCE_DEG: f32 = 15.0;

/// Whether the computer has committed to charging.
///
/// Once primed the plan stays primed for the rest of the round; the charge
/// itself only fires while the computer faces its opponent, so the idle
/// spin decides the timing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackPlan {
    pub attack_next: bool,
}

impl AttackPlan {
    /// Roll for priming. Returns true if this call primed the plan.
    pub fn decide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.attack_next || !rng.gen_bool(ATTACK_CHANCE) {
            return false;
        }

        self.attack_next = true;
        debug!("computer primed to attack");
        true
    }
}

/// Bearing from the center of `from` to the center of `to`, in [0, 360)
pub fn bearing(from: Position, to: Position) -> f32 {
    let (fx, fy) = from.center();
    let (tx, ty) = to.center();
    wrap_degrees((ty - fy).atan2(tx - fx).to_degrees())
}

/// True if `seeker`'s heading points at `target` within the look tolerance
pub fn looking_at(seeker: &Combatant<'_>, target: &Combatant<'_>) -> bool {
    let to_target = bearing(seeker.position, target.position);
    angle_difference(seeker.angle, to_target) < LOOK_TOLERANCE_DEG
}
