use super::sprite::SPRITE_SIZE;
use super::state::Position;
use crate::device::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

// The ring is the whole display, in pixels
pub const ARENA_WIDTH: f32 = DISPLAY_WIDTH as f32;
pub const ARENA_HEIGHT: f32 = DISPLAY_HEIGHT as f32;
pub const BORDER_THICKNESS: i32 = 2;

pub const SUMO_RADIUS: f32 = 14.0;
// Degrees turned per movement step; doubles as the push force base
pub const SUMO_SPEED: f32 = 2.0;
pub const IDLE_SPIN_DEG: f32 = 20.0;
const PUSH_FORCE_FACTOR: f32 = 1.1;

/// Centers closer than this are in contact. Tighter than the full diameter
/// so the sprites visibly overlap before a push lands.
pub const CONTACT_DISTANCE: f32 = 2.0 * SUMO_RADIUS - 10.0;

// Last pixel row/column of the bounding box, relative to its anchor
const BOX_EXTENT: f32 = (SPRITE_SIZE - 1) as f32;

/// Displacement applied to a combatant that was pushed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Push {
    pub dx: f32,
    pub dy: f32,
    /// Angle between the mover's heading and the push direction, in
    /// degrees (0..=180). Reported only; it does not scale the force.
    pub approach_angle: f32,
}

/// Wrap an angle into [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Absolute difference between two headings, folded into 0..=180
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Compute the push a mover at `mover` heading `heading` would apply to a
/// combatant at `target`, or `None` when the two are not in contact.
pub fn push_between(mover: Position, heading: f32, target: Position) -> Option<Push> {
    let (mx, my) = mover.center();
    let (tx, ty) = target.center();
    let dir_x = tx - mx;
    let dir_y = ty - my;

    let distance = (dir_x * dir_x + dir_y * dir_y).sqrt();
    if distance > CONTACT_DISTANCE {
        return None;
    }

    let direction = dir_y.atan2(dir_x);
    let magnitude = (SUMO_RADIUS / 4.0) * SUMO_SPEED * PUSH_FORCE_FACTOR;

    // Components come from the direction angle, then take the sign of the
    // center-to-center vector on each axis
    let dx = (magnitude * direction.cos()).abs();
    let dy = (magnitude * direction.sin()).abs();

    Some(Push {
        dx: if dir_x < 0.0 { -dx } else { dx },
        dy: if dir_y < 0.0 { -dy } else { dy },
        approach_angle: angle_difference(heading, direction.to_degrees()),
    })
}

/// True when the bounding box anchored at `position` touches or crosses the
/// arena edge. Left/top are inclusive at 0, right/bottom at the arena size.
pub fn is_out_of_bounds(position: Position) -> bool {
    let left = position.x;
    let right = position.x + BOX_EXTENT;
    let top = position.y;
    let bottom = position.y + BOX_EXTENT;

    left <= 0.0 || right >= ARENA_WIDTH || top <= 0.0 || bottom >= ARENA_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(372.0), 12.0);
        assert_eq!(wrap_degrees(-2.0), 358.0);
    }

    #[test]
    fn test_angle_difference_folds_across_zero() {
        assert_eq!(angle_difference(359.0, 2.0), 3.0);
        assert_eq!(angle_difference(2.0, 359.0), 3.0);
        assert_eq!(angle_difference(0.0, 180.0), 180.0);
        assert_eq!(angle_difference(90.0, -90.0), 180.0);
        assert_eq!(angle_difference(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_no_push_when_apart() {
        let mover = Position::new(20.0, 20.0);
        let target = Position::new(20.0 + CONTACT_DISTANCE + 0.5, 20.0);
        assert!(push_between(mover, 0.0, target).is_none());

        let far = Position::new(100.0, 40.0);
        assert!(push_between(mover, 0.0, far).is_none());
    }

    #[test]
    fn test_push_at_contact_distance() {
        let mover = Position::new(20.0, 20.0);
        let target = Position::new(20.0 + CONTACT_DISTANCE, 20.0);
        let push = push_between(mover, 0.0, target).unwrap();

        // Straight along +x: full magnitude on x, none on y
        let magnitude = 3.5 * 2.0 * 1.1;
        assert!((push.dx - magnitude).abs() < 1e-4);
        assert!(push.dy.abs() < 1e-4);
        assert!(push.approach_angle.abs() < 1e-4);
    }

    #[test]
    fn test_push_points_away_from_mover_on_each_axis() {
        let mover = Position::new(50.0, 30.0);
        for (ox, oy) in [(8.0, 6.0), (-8.0, 6.0), (8.0, -6.0), (-8.0, -6.0), (-3.0, 11.0)] {
            let target = Position::new(50.0 + ox, 30.0 + oy);
            let push = push_between(mover, 0.0, target).unwrap();
            assert_eq!(push.dx > 0.0, ox > 0.0, "offset ({ox}, {oy})");
            assert_eq!(push.dy > 0.0, oy > 0.0, "offset ({ox}, {oy})");
            assert!(push.dx != 0.0 && push.dy != 0.0);
        }
    }

    #[test]
    fn test_push_reports_approach_angle() {
        let mover = Position::new(50.0, 30.0);
        let below = Position::new(50.0, 40.0);
        // Heading right while the target sits straight below
        let push = push_between(mover, 0.0, below).unwrap();
        assert!((push.approach_angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_bounds_corners() {
        assert!(is_out_of_bounds(Position::new(0.0, 0.0)));
        assert!(!is_out_of_bounds(Position::new(1.0, 1.0)));
        assert!(!is_out_of_bounds(Position::new(
            ARENA_WIDTH - 20.0,
            ARENA_HEIGHT - 20.0
        )));
    }

    #[test]
    fn test_out_of_bounds_each_edge() {
        // left <= 0
        assert!(is_out_of_bounds(Position::new(0.0, 20.0)));
        assert!(is_out_of_bounds(Position::new(-3.0, 20.0)));
        // right >= width
        assert!(is_out_of_bounds(Position::new(ARENA_WIDTH - 19.0, 20.0)));
        assert!(!is_out_of_bounds(Position::new(ARENA_WIDTH - 19.5, 20.0)));
        // top <= 0
        assert!(is_out_of_bounds(Position::new(40.0, 0.0)));
        assert!(!is_out_of_bounds(Position::new(40.0, 0.5)));
        // bottom >= height
        assert!(is_out_of_bounds(Position::new(40.0, ARENA_HEIGHT - 19.0)));
        assert!(!is_out_of_bounds(Position::new(40.0, ARENA_HEIGHT - 20.0)));
    }

    #[test]
    fn test_arena_center_is_inside() {
        let center = Position::new(ARENA_WIDTH / 2.0 - 10.0, ARENA_HEIGHT / 2.0 - 10.0);
        assert!(!is_out_of_bounds(center));
    }
}
