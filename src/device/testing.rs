// In-memory device doubles for tests

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use super::{Audio, Clock, Input};
use crate::error::{Result, SumoError};

/// Clock that only moves when slept on. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

/// Button that replays a script, then repeats a fallback value.
/// Can raise a quit request after a fixed number of polls.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<bool>,
    fallback: bool,
    quit_after: Option<usize>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn always(held: bool) -> Self {
        Self {
            fallback: held,
            ..Default::default()
        }
    }

    pub fn scripted(script: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            ..Default::default()
        }
    }

    pub fn quit_after(mut self, polls: usize) -> Self {
        self.quit_after = Some(polls);
        self
    }
}

impl Input for ScriptedInput {
    fn is_held(&mut self) -> Result<bool> {
        if self.quit_after == Some(self.polls) {
            return Err(SumoError::QuitRequested);
        }
        self.polls += 1;
        Ok(self.script.pop_front().unwrap_or(self.fallback))
    }
}

/// Audio that records every tone instead of playing it
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub tones: Vec<(u32, Duration)>,
}

impl Audio for RecordingAudio {
    fn tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        self.tones.push((frequency_hz, duration));
        Ok(())
    }
}
