// Playback controller: owns the mutable playback state and ties the frame
// clock to the host view lifecycle

use log::{debug, info};

use crate::errors::ReplayError;
use crate::replay::clock::{FrameClock, TickHandle, TickScheduler};
use crate::session::RaceSession;

/// Owns the only mutable playback state for one mounted session.
///
/// Mounting new data always stops any running clock, resets the frame index
/// and recomputes the frame count before playback resumes; unmounting stops
/// the clock unconditionally, which is the one cleanup path that must never
/// be skipped.
#[derive(Default)]
pub struct PlaybackController {
    session: Option<RaceSession>,
    clock: FrameClock,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a freshly loaded session and start looping playback when it
    /// has driver data. A session without timelines mounts fine but leaves
    /// the clock idle until data arrives.
    pub fn mount(
        &mut self,
        session: RaceSession,
        scheduler: &mut dyn TickScheduler,
    ) -> Result<(), ReplayError> {
        self.clock.stop(scheduler);

        // a non-zero frame count means at least one timeline has samples
        let max_frames = session.max_frames();
        self.session = Some(session);

        if max_frames > 0 {
            self.clock.start(max_frames, scheduler)?;
            info!("playback mounted, looping {} frames", max_frames);
        } else {
            debug!("session mounted without driver timelines, clock stays idle");
        }
        Ok(())
    }

    /// Forward one fired host callback to the clock; returns the new frame
    /// index, or `None` for stale callbacks and an idle clock
    pub fn on_tick(
        &mut self,
        fired: TickHandle,
        scheduler: &mut dyn TickScheduler,
    ) -> Option<usize> {
        self.clock.tick(fired, scheduler)
    }

    /// Freeze playback on the current frame
    pub fn pause(&mut self, scheduler: &mut dyn TickScheduler) {
        self.clock.stop(scheduler);
    }

    /// Resume a paused replay from its current frame
    pub fn resume(&mut self, scheduler: &mut dyn TickScheduler) -> Result<(), ReplayError> {
        if self
            .session
            .as_ref()
            .is_none_or(|session| !session.has_timelines())
        {
            return Err(ReplayError::EmptyTimelines);
        }
        self.clock.resume(scheduler)
    }

    /// Tear down the view: stops the clock unconditionally and drops the
    /// mounted session
    pub fn unmount(&mut self, scheduler: &mut dyn TickScheduler) {
        self.clock.stop(scheduler);
        self.session = None;
        debug!("playback unmounted");
    }

    pub fn session(&self) -> Option<&RaceSession> {
        self.session.as_ref()
    }

    pub fn frame_index(&self) -> usize {
        self.clock.frame_index()
    }

    pub fn max_frames(&self) -> usize {
        self.clock.max_frames()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }
}
