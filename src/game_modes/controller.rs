use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::device::{Audio, Clock, Devices, Display, Input, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Result;
use crate::game::arena::COMPUTER_SPAWN;
use crate::game::{Arena, Combatant, Side, SpritePattern};

pub const ROUNDS_PER_MATCH: u32 = 3;

/// Jingle played on the start screen: (duration ms, frequency Hz)
pub const START_MELODY: [(u64, u32); 6] = [
    (500, 659),
    (500, 659),
    (500, 659),
    (500, 523),
    (500, 587),
    (500, 587),
];

/// How long round and match results stay on screen
pub const RESULT_PAUSE: Duration = Duration::from_secs(2);

/// Yield between button polls while waiting on the start screen
pub const HOLD_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Heading of the idle sumo on the start screen
const IDLE_SUMO_ANGLE: f32 = 90.0;
const RESULT_TEXT_X: i32 = 20;
const RESULT_TEXT_Y: i32 = 42;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
    pub rounds_played: u32,
}

impl Scoreboard {
    pub fn award(&mut self, winner: Side) {
        match winner {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
        self.rounds_played += 1;
    }

    /// The round about to be played, counting from 1
    pub fn next_round(&self) -> u32 {
        self.rounds_played + 1
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_played >= ROUNDS_PER_MATCH
    }

    pub fn result(&self) -> MatchResult {
        use std::cmp::Ordering;
        match self.player.cmp(&self.computer) {
            Ordering::Greater => MatchResult::Won,
            Ordering::Less => MatchResult::Lost,
            Ordering::Equal => MatchResult::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
    Draw,
}

impl MatchResult {
    pub fn banner(self) -> &'static str {
        match self {
            MatchResult::Won => "Winner!!!",
            MatchResult::Lost => "You Lost :(",
            MatchResult::Draw => "Draw",
        }
    }
}

fn round_banner(winner: Side) -> &'static str {
    match winner {
        Side::Player => "You Win!",
        Side::Computer => "CPU Wins!",
    }
}

/// Drives matches back to back: start screen, rounds, results
pub struct MatchController<'p, D, A, I, C, R> {
    devices: Devices<D, A, I, C>,
    rng: R,
    pattern: &'p SpritePattern,
    frame_duration: Duration,
}

impl<'p, D, A, I, C, R> MatchController<'p, D, A, I, C, R>
where
    D: Display,
    A: Audio,
    I: Input,
    C: Clock,
    R: Rng,
{
    pub fn new(
        devices: Devices<D, A, I, C>,
        rng: R,
        pattern: &'p SpritePattern,
        frame_duration: Duration,
    ) -> Self {
        Self {
            devices,
            rng,
            pattern,
            frame_duration,
        }
    }

    /// Play matches forever. Only returns on a device error or a quit request.
    pub fn run(&mut self) -> Result<()> {
        let mut matches: u64 = 0;
        loop {
            let score = self.play_match()?;
            matches += 1;
            info!(
                matches,
                player = score.player,
                computer = score.computer,
                "match finished"
            );
        }
    }

    /// Play one full match and show its result
    pub fn play_match(&mut self) -> Result<Scoreboard> {
        let mut score = Scoreboard::default();
        info!("match started");

        while !score.is_complete() {
            self.show_start_screen(&score)?;
            self.play_start_melody()?;
            self.wait_for_hold()?;

            let mut arena = Arena::new(self.pattern);
            let outcome = arena.run(&mut self.devices, &mut self.rng, self.frame_duration)?;
            score.award(outcome.winner());
            info!(
                round = score.rounds_played,
                winner = ?outcome.winner(),
                frames = outcome.frames,
                "round finished"
            );

            self.show_round_result(outcome.winner())?;
        }

        let result = score.result();
        info!(?result, "match result");
        self.show_match_result(result)?;
        Ok(score)
    }

    fn show_start_screen(&mut self, score: &Scoreboard) -> Result<()> {
        let display = &mut self.devices.display;
        display.fill_region(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, true);
        display.draw_text(&format!("Player:{}", score.player), 5, 11, false);
        display.draw_text(&format!("CPU:{}", score.computer), 5, 21, false);
        display.draw_text(&format!("Round:{}", score.next_round()), 5, 31, false);
        display.draw_text("Hold to start", 10, 54, false);

        let mut idle = Combatant::human(COMPUTER_SPAWN, IDLE_SUMO_ANGLE, self.pattern);
        idle.draw(display, false);
        display.present()
    }

    /// Play the start jingle, checking the button before every note.
    /// Returns true if the button cut it short.
    fn play_start_melody(&mut self) -> Result<bool> {
        for (ms, hz) in START_MELODY {
            if self.devices.input.is_held()? {
                debug!("start melody skipped");
                return Ok(true);
            }
            self.devices.audio.tone(hz, Duration::from_millis(ms))?;
        }
        Ok(false)
    }

    fn wait_for_hold(&mut self) -> Result<()> {
        while !self.devices.input.is_held()? {
            self.devices.clock.sleep(HOLD_POLL_INTERVAL);
        }
        Ok(())
    }

    fn show_round_result(&mut self, winner: Side) -> Result<()> {
        let display = &mut self.devices.display;
        display.draw_text(round_banner(winner), RESULT_TEXT_X, RESULT_TEXT_Y, true);
        display.present()?;
        self.devices.clock.sleep(RESULT_PAUSE);
        Ok(())
    }

    fn show_match_result(&mut self, result: MatchResult) -> Result<()> {
        let display = &mut self.devices.display;
        display.fill_region(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, true);
        display.draw_text(result.banner(), RESULT_TEXT_X, RESULT_TEXT_Y, false);
        display.present()?;
        self.devices.clock.sleep(RESULT_PAUSE);
        Ok(())
    }
}
