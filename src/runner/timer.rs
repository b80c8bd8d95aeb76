use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Unique identifier for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
enum Schedule {
    /// Fires once and is removed
    Once { fire_at: Instant },
    /// Fires repeatedly at an interval
    Every {
        interval: Duration,
        next_fire: Instant,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    name: &'static str,
    schedule: Schedule,
}

/// Deadline bookkeeping for one connection's behaviors.
///
/// The manager is owned by the controller and dropped with it, so timers can
/// never outlive the session they were scheduled against. All methods take
/// `now` explicitly; the controller passes its tick instant, tests pass
/// fabricated instants.
pub struct TimerManager {
    timers: HashMap<TimerId, Entry>,
    next_id: u64,
    fired: Vec<TimerId>,
}

impl TimerManager {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
            next_id: 0,
            fired: Vec::new(),
        }
    }

    fn insert(&mut self, name: &'static str, schedule: Schedule) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, Entry { name, schedule });
        id
    }

    /// Schedule a one-shot timer that fires `delay` after `now`.
    pub fn schedule_once(&mut self, now: Instant, delay: Duration, name: &'static str) -> TimerId {
        self.insert(
            name,
            Schedule::Once {
                fire_at: now + delay,
            },
        )
    }

    /// Schedule a recurring timer; first firing is one full interval out.
    pub fn schedule_every(
        &mut self,
        now: Instant,
        interval: Duration,
        name: &'static str,
    ) -> TimerId {
        self.insert(
            name,
            Schedule::Every {
                interval,
                next_fire: now + interval,
            },
        )
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Consume a pending firing of `id`. Returns true at most once per
    /// firing.
    pub fn consume_fired(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.fired.iter().position(|&fired_id| fired_id == id) {
            self.fired.remove(pos);
            true
        } else {
            false
        }
    }

    /// Advance to `now`, collecting due timers. One-shot timers are removed
    /// once fired; recurring timers are pushed out by their interval.
    pub fn tick(&mut self, now: Instant) {
        let mut expired = Vec::new();

        for (id, entry) in self.timers.iter_mut() {
            match &mut entry.schedule {
                Schedule::Once { fire_at } => {
                    if now >= *fire_at {
                        self.fired.push(*id);
                        expired.push(*id);
                    }
                }
                Schedule::Every {
                    interval,
                    next_fire,
                } => {
                    if now >= *next_fire {
                        self.fired.push(*id);
                        *next_fire = now + *interval;
                    }
                }
            }
        }

        for id in expired {
            self.timers.remove(&id);
        }
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Names of currently scheduled timers, for diagnostics.
    pub fn active_names(&self) -> Vec<&'static str> {
        self.timers.values().map(|entry| entry.name).collect()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}
