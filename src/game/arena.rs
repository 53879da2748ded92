// The ring: one round of sumo, frame by frame

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::physics::{is_out_of_bounds, ARENA_HEIGHT, ARENA_WIDTH, BORDER_THICKNESS};
use super::sprite::SpritePattern;
use super::state::{Combatant, Position};
use crate::device::{Audio, Clock, Devices, Display, Input};
use crate::error::Result;
use crate::game_modes::common::limit_frame_rate;

pub const ELIMINATION_TONE_HZ: u32 = 2000;
pub const ELIMINATION_TONE: Duration = Duration::from_millis(500);
/// Pause between leaving the start screen and the first frame
pub const ROUND_START_DELAY: Duration = Duration::from_millis(500);

/// Spawn anchors: a quarter of the way in from each side, vertically centered
pub const PLAYER_SPAWN: Position =
    Position::new(ARENA_WIDTH / 4.0 - 10.0, ARENA_HEIGHT / 2.0 - 10.0);
pub const COMPUTER_SPAWN: Position =
    Position::new(3.0 * ARENA_WIDTH / 4.0 - 10.0, ARENA_HEIGHT / 2.0 - 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Who left the ring
    pub loser: Side,
    /// Frames played before the elimination
    pub frames: u64,
}

impl RoundOutcome {
    pub fn winner(&self) -> Side {
        self.loser.opponent()
    }
}

pub struct Arena<'a> {
    pub player: Combatant<'a>,
    pub computer: Combatant<'a>,
    frames: u64,
}

impl<'a> Arena<'a> {
    /// Fresh round: player on the left facing right, computer on the
    /// right facing left
    pub fn new(pattern: &'a SpritePattern) -> Self {
        Self::with_combatants(
            Combatant::human(PLAYER_SPAWN, 0.0, pattern),
            Combatant::computer(COMPUTER_SPAWN, 180.0, pattern),
        )
    }

    pub fn with_combatants(player: Combatant<'a>, computer: Combatant<'a>) -> Self {
        Self {
            player,
            computer,
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Solid band around all four edges
    pub fn draw_border<D: Display + ?Sized>(display: &mut D) {
        let w = ARENA_WIDTH as i32;
        let h = ARENA_HEIGHT as i32;
        let t = BORDER_THICKNESS;

        display.fill_region(0, 0, w, t, true);
        display.fill_region(0, h - t, w, t, true);
        display.fill_region(0, t, t, h - 2 * t, true);
        display.fill_region(w - t, t, t, h - 2 * t, true);
    }

    /// Which combatant is out, checking the player first
    pub fn loser(&self) -> Option<Side> {
        if is_out_of_bounds(self.player.position) {
            Some(Side::Player)
        } else if is_out_of_bounds(self.computer.position) {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Play one frame with the given button sample. Returns the loser if
    /// the frame ended the round.
    pub fn step<D, R>(&mut self, display: &mut D, held: bool, rng: &mut R) -> Result<Option<Side>>
    where
        D: Display + ?Sized,
        R: Rng + ?Sized,
    {
        display.clear();
        Self::draw_border(display);

        self.player.moving = false;
        self.player.pushing = false;
        self.computer.moving = false;
        self.computer.pushing = false;

        self.computer.decide_attack(rng);

        self.player.advance(&mut self.computer, held);
        self.computer.advance(&mut self.player, held);

        self.player.draw(display, true);
        self.computer.draw(display, true);
        display.present()?;

        self.frames += 1;
        Ok(self.loser())
    }

    /// Play frames until someone leaves the ring, then sound the
    /// elimination tone and clear the screen.
    pub fn run<D, A, I, C, R>(
        &mut self,
        devices: &mut Devices<D, A, I, C>,
        rng: &mut R,
        frame_duration: Duration,
    ) -> Result<RoundOutcome>
    where
        D: Display,
        A: Audio,
        I: Input,
        C: Clock,
        R: Rng + ?Sized,
    {
        let Devices {
            display,
            audio,
            input,
            clock,
        } = devices;

        clock.sleep(ROUND_START_DELAY);
        debug!("round started");

        loop {
            let frame_start = clock.now();
            let held = input.is_held()?;

            if let Some(loser) = self.step(display, held, rng)? {
                info!(?loser, frames = self.frames, "combatant left the ring");
                audio.tone(ELIMINATION_TONE_HZ, ELIMINATION_TONE)?;
                display.clear();
                return Ok(RoundOutcome {
                    loser,
                    frames: self.frames,
                });
            }

            limit_frame_rate(clock, frame_start, frame_duration);
        }
    }
}
