//! Common utilities shared by the round loop and the match screens

use std::time::Duration;

use crate::device::Clock;

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Call at the end of each loop iteration. Sleeps for whatever is left of
/// `frame_duration` since `frame_start`; an overrunning frame is not
/// slowed further.
pub fn limit_frame_rate<C: Clock + ?Sized>(clock: &mut C, frame_start: Duration, frame_duration: Duration) {
    let elapsed = clock.now().saturating_sub(frame_start);
    if elapsed < frame_duration {
        clock.sleep(frame_duration - elapsed);
    }
}

/// Frame length for a target rate, never shorter than one millisecond
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis((1000 / target_fps.max(1)).max(1))
}
