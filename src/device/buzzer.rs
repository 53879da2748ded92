// PWM-style buzzer with scoped tone emission

use std::io::Write;
use std::time::Duration;

use tracing::{trace, warn};

use super::{Audio, Clock};
use crate::error::Result;

/// 50% duty on a 10-bit PWM
pub const TONE_DUTY: u16 = 512;

/// Low-level tone output: a frequency and a duty cycle.
/// Duty 0 silences the channel.
pub trait ToneChannel {
    fn set_frequency(&mut self, frequency_hz: u32) -> Result<()>;
    fn set_duty(&mut self, duty: u16) -> Result<()>;
}

/// Holds the channel open for one tone. Dropping the guard closes the duty
/// cycle, whichever way the tone ends.
struct ToneGuard<'a, C: ToneChannel> {
    channel: &'a mut C,
}

impl<'a, C: ToneChannel> ToneGuard<'a, C> {
    fn open(channel: &'a mut C, frequency_hz: u32) -> Result<Self> {
        channel.set_frequency(frequency_hz)?;
        // Guard exists before the duty opens, so a failed open still closes
        let guard = Self { channel };
        guard.channel.set_duty(TONE_DUTY)?;
        Ok(guard)
    }
}

impl<C: ToneChannel> Drop for ToneGuard<'_, C> {
    fn drop(&mut self) {
        if let Err(e) = self.channel.set_duty(0) {
            warn!("failed to silence buzzer: {}", e);
        }
    }
}

/// Blocking tone player over a `ToneChannel`.
///
/// `&mut self` on `tone` makes emission exclusive: a second tone cannot
/// start until the first guard has been released.
pub struct Buzzer<C, K> {
    channel: C,
    clock: K,
}

impl<C: ToneChannel, K: Clock> Buzzer<C, K> {
    pub fn new(channel: C, clock: K) -> Self {
        Self { channel, clock }
    }

    #[cfg(test)]
    pub fn channel(&self) -> &C {
        &self.channel
    }
}

impl<C: ToneChannel, K: Clock> Audio for Buzzer<C, K> {
    fn tone(&mut self, frequency_hz: u32, duration: Duration) -> Result<()> {
        let _guard = ToneGuard::open(&mut self.channel, frequency_hz)?;
        trace!(frequency_hz, ?duration, "tone");
        self.clock.sleep(duration);
        Ok(())
    }
}

/// Terminal stand-in for a piezo: rings the bell when a tone starts.
/// Frequency is tracked but a bell has only one pitch.
pub struct BellChannel<W: Write> {
    out: W,
    enabled: bool,
    frequency_hz: u32,
    duty: u16,
}

impl<W: Write> BellChannel<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            frequency_hz: 0,
            duty: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ToneChannel for BellChannel<W> {
    fn set_frequency(&mut self, frequency_hz: u32) -> Result<()> {
        self.frequency_hz = frequency_hz;
        Ok(())
    }

    fn set_duty(&mut self, duty: u16) -> Result<()> {
        if self.enabled && duty > 0 && self.duty == 0 {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        self.duty = duty;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::testing::ManualClock;
    use crate::error::SumoError;
    use std::io;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Frequency(u32),
        Duty(u16),
    }

    #[derive(Default)]
    struct RecordingChannel {
        ops: Vec<Op>,
        fail_open: bool,
    }

    impl ToneChannel for RecordingChannel {
        fn set_frequency(&mut self, frequency_hz: u32) -> Result<()> {
            self.ops.push(Op::Frequency(frequency_hz));
            Ok(())
        }

        fn set_duty(&mut self, duty: u16) -> Result<()> {
            self.ops.push(Op::Duty(duty));
            if self.fail_open && duty > 0 {
                return Err(SumoError::Io(io::Error::other("pwm fault")));
            }
            Ok(())
        }
    }

    #[test]
    fn test_tone_opens_waits_and_closes() {
        let clock = ManualClock::new();
        let mut buzzer = Buzzer::new(RecordingChannel::default(), clock.clone());

        buzzer.tone(2000, Duration::from_millis(500)).unwrap();

        assert_eq!(
            buzzer.channel().ops,
            vec![Op::Frequency(2000), Op::Duty(TONE_DUTY), Op::Duty(0)]
        );
        assert_eq!(clock.now(), Duration::from_millis(500));
    }

    #[test]
    fn test_consecutive_tones_never_overlap() {
        let mut buzzer = Buzzer::new(RecordingChannel::default(), ManualClock::new());

        buzzer.tone(659, Duration::from_millis(500)).unwrap();
        buzzer.tone(523, Duration::from_millis(500)).unwrap();

        // Every open is followed by a close before the next frequency change
        let ops = &buzzer.channel().ops;
        assert_eq!(ops.len(), 6);
        assert_eq!(ops[2], Op::Duty(0));
        assert_eq!(ops[3], Op::Frequency(523));
        assert_eq!(ops[5], Op::Duty(0));
    }

    #[test]
    fn test_failed_open_still_closes() {
        let channel = RecordingChannel {
            fail_open: true,
            ..Default::default()
        };
        let clock = ManualClock::new();
        let mut buzzer = Buzzer::new(channel, clock.clone());

        assert!(buzzer.tone(440, Duration::from_millis(100)).is_err());
        assert_eq!(buzzer.channel().ops.last(), Some(&Op::Duty(0)));
        // No wait happened
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_bell_rings_once_per_tone() {
        let mut bell = BellChannel::new(Vec::new(), true);
        bell.set_frequency(2000).unwrap();
        bell.set_duty(TONE_DUTY).unwrap();
        bell.set_duty(TONE_DUTY).unwrap();
        bell.set_duty(0).unwrap();
        bell.set_duty(TONE_DUTY).unwrap();

        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn test_muted_bell_is_silent() {
        let mut buzzer = Buzzer::new(BellChannel::new(Vec::new(), false), ManualClock::new());
        buzzer.tone(2000, Duration::from_millis(10)).unwrap();
        assert!(buzzer.channel().out.is_empty());
    }
}
