use std::time::{Duration, Instant};

use crate::client::session::Session;
use crate::runner::timer::{TimerId, TimerManager};

/// What a behavior sees when the controller calls into it: the live session,
/// the connection-scoped timers, and the instant of the current tick/event.
pub struct BehaviorContext<'a> {
    session: &'a mut dyn Session,
    timers: &'a mut TimerManager,
    now: Instant,
}

impl<'a> BehaviorContext<'a> {
    pub fn new(
        session: &'a mut dyn Session,
        timers: &'a mut TimerManager,
        now: Instant,
    ) -> Self {
        Self {
            session,
            timers,
            now,
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn session(&mut self) -> &mut dyn Session {
        &mut *self.session
    }

    pub fn schedule_once(&mut self, delay: Duration, name: &'static str) -> TimerId {
        self.timers.schedule_once(self.now, delay, name)
    }

    pub fn schedule_every(&mut self, interval: Duration, name: &'static str) -> TimerId {
        self.timers.schedule_every(self.now, interval, name)
    }

    /// Consume a pending firing of one of this behavior's timers.
    pub fn fired(&mut self, id: TimerId) -> bool {
        self.timers.consume_fired(id)
    }
}
