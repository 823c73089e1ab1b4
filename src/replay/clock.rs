// Frame clock: a self-rescheduling stepper that advances the replay frame
// index once per display refresh, wrapping modulo the timeline length

use log::debug;

use crate::errors::ReplayError;

/// Handle to one scheduled tick callback. Identity is assigned by the
/// scheduler that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(pub u64);

/// Seam to the host's display-refresh primitive.
///
/// `schedule` asks the host for exactly one callback at the next refresh and
/// returns its handle. `cancel` removes a still-pending callback from the
/// host queue; cancelling an already-fired or unknown handle is a no-op.
/// Cancellation must drop the callback itself, not set a flag for the
/// callback to check later: a flag leaves one extra tick alive.
pub trait TickScheduler {
    fn schedule(&mut self) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Host-agnostic scheduler with an explicit fire step, used by tests (which
/// count outstanding callbacks) and by headless playback.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<TickHandle>,
    scheduled_total: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the oldest pending callback, if any
    pub fn fire(&mut self) -> Option<TickHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Number of callbacks currently awaiting delivery
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of callbacks scheduled over this scheduler's lifetime
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) -> TickHandle {
        self.next_id += 1;
        self.scheduled_total += 1;
        let handle = TickHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}

/// Explicit Idle/Running state machine for the replay animation loop.
///
/// The clock holds at most one pending tick handle: `start` overwrites it
/// (cancelling first when restarted mid-run), each `tick` replaces the fired
/// handle with the next one, and `stop` cancels it. The frame index survives
/// a stop so a paused replay stays on its current frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    frame_index: usize,
    max_frames: usize,
    pending: Option<TickHandle>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition Idle -> Running from frame 0 and schedule the first tick.
    ///
    /// Fails with `InvalidClock` when there are no frames to play. Starting
    /// an already-running clock stops it first so a second pending tick is
    /// never created.
    pub fn start(
        &mut self,
        max_frames: usize,
        scheduler: &mut dyn TickScheduler,
    ) -> Result<(), ReplayError> {
        if max_frames == 0 {
            return Err(ReplayError::InvalidClock { max_frames });
        }

        self.stop(scheduler);
        self.frame_index = 0;
        self.max_frames = max_frames;
        self.pending = Some(scheduler.schedule());
        debug!("frame clock started, {} frames", max_frames);
        Ok(())
    }

    /// Re-enter Running without resetting the frame index. No-op when
    /// already running; fails with `InvalidClock` when the clock was never
    /// started with a frame count.
    pub fn resume(&mut self, scheduler: &mut dyn TickScheduler) -> Result<(), ReplayError> {
        if self.max_frames == 0 {
            return Err(ReplayError::InvalidClock { max_frames: 0 });
        }
        if self.pending.is_none() {
            self.pending = Some(scheduler.schedule());
        }
        Ok(())
    }

    /// Advance one frame in response to the fired callback `fired`, schedule
    /// the next tick, and return the new frame index.
    ///
    /// Returns `None` without advancing when the clock is idle or when
    /// `fired` is not the pending handle: a callback that raced a `stop`
    /// must not keep the loop alive.
    pub fn tick(
        &mut self,
        fired: TickHandle,
        scheduler: &mut dyn TickScheduler,
    ) -> Option<usize> {
        if self.pending != Some(fired) {
            debug!("ignoring stale tick {:?}", fired);
            return None;
        }

        self.frame_index = (self.frame_index + 1) % self.max_frames;
        self.pending = Some(scheduler.schedule());
        Some(self.frame_index)
    }

    /// Cancel the pending tick and transition to Idle. Idempotent: stopping
    /// an idle clock is a no-op.
    pub fn stop(&mut self, scheduler: &mut dyn TickScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
            debug!("frame clock stopped at frame {}", self.frame_index);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Current playback position, in `[0, max_frames)` whenever the clock
    /// has been started with a non-zero frame count
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames
    }
}
