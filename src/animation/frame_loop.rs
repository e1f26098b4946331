use std::time::Duration;

use crate::foundation::{core::Fps, error::DiaryResult};

/// Whether an animation wants another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// Schedule another frame.
    Running,
    /// Stop; nothing changes until the inputs do.
    Complete,
}

impl FrameState {
    /// Return `true` when no further frame is needed.
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

/// Output of one animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    /// What to draw.
    pub value: T,
    /// Whether to schedule another frame.
    pub state: FrameState,
}

/// Something advanced once per visual frame by a monotonic timestamp.
pub trait Animate {
    /// Per-frame drawable output.
    type Output;

    /// Advance to `now` (time since the animator's epoch).
    fn frame(&mut self, now: Duration) -> Frame<Self::Output>;
}

/// Deterministic frame timestamps at a fixed rate, starting at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    /// Frame rate.
    pub fps: Fps,
    /// Timestamp of frame 0.
    pub origin: Duration,
}

impl FrameClock {
    /// Clock starting at time zero.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            origin: Duration::ZERO,
        }
    }

    /// Timestamp of `frame`.
    pub fn time_of(self, frame: u64) -> Duration {
        self.origin + self.fps.frame_time(frame)
    }
}

/// Step `anim` one frame at a time until it completes or `max_frames` have run,
/// handing each output to `sink`. Returns the number of frames produced.
///
/// The last frame produced is always the one that reported completion unless
/// the cap was hit first.
pub fn drive<A, F>(
    anim: &mut A,
    clock: FrameClock,
    max_frames: u64,
    mut sink: F,
) -> DiaryResult<u64>
where
    A: Animate,
    F: FnMut(u64, A::Output) -> DiaryResult<()>,
{
    let mut produced = 0;
    while produced < max_frames {
        let frame = anim.frame(clock.time_of(produced));
        sink(produced, frame.value)?;
        produced += 1;
        if frame.state.is_complete() {
            break;
        }
    }
    Ok(produced)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame_loop.rs"]
mod tests;
