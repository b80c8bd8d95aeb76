use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::behaviors::{build_behaviors, Behavior, BehaviorContext};
use crate::client::chat::kick_reason_text;
use crate::client::events::GameEvent;
use crate::client::session::Session;
use crate::config::BotConfig;
use crate::runner::timer::TimerManager;

/// Tick granularity of the control loop. Timer deadlines resolve at this
/// resolution.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Where the controller currently sits in its two-state lifecycle: connected
/// but waiting for the spawn event, or spawned with behaviors running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Active,
}

/// How a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Disconnected,
    Kicked,
}

/// Drives one connection from connect to its end event.
///
/// Owns the session handle, the connection-scoped timers, and the behavior
/// instances; dropping the controller drops all three, so nothing scheduled
/// here can ever act on a later connection.
pub struct Controller {
    config: BotConfig,
    session: Box<dyn Session>,
    behaviors: Vec<Box<dyn Behavior>>,
    timers: TimerManager,
    phase: Phase,
}

impl Controller {
    pub fn new(config: BotConfig, mut session: Box<dyn Session>) -> Self {
        // Color codes in chat payloads would leak into every log line.
        session.set_colors_enabled(false);

        Self {
            config,
            session,
            behaviors: Vec::new(),
            timers: TimerManager::new(),
            phase: Phase::Pending,
        }
    }

    /// Process one event. Returns the outcome when the event ends the
    /// connection.
    pub fn handle_event(&mut self, event: &GameEvent, now: Instant) -> Option<SessionOutcome> {
        match event {
            GameEvent::Spawn => {
                if self.phase == Phase::Pending {
                    self.phase = Phase::Active;
                    info!(target: "events", "Bot joined the server");
                    self.activate_behaviors(now);
                }
                None
            }
            GameEvent::Chat { username, message } => {
                if self.config.utils.chat_log {
                    info!(target: "events", "<{}> {}", username, message);
                }
                self.dispatch_to_behaviors(event, now);
                None
            }
            GameEvent::Death { position } => {
                warn!(target: "events", "Bot died and respawned at {}", position);
                self.dispatch_to_behaviors(event, now);
                None
            }
            GameEvent::GoalReached => {
                self.dispatch_to_behaviors(event, now);
                None
            }
            GameEvent::Kicked { reason } => {
                warn!(
                    target: "events",
                    "Bot was kicked from the server. Reason: {}",
                    kick_reason_text(reason)
                );
                Some(SessionOutcome::Kicked)
            }
            GameEvent::Disconnected => {
                info!(target: "events", "Connection ended");
                Some(SessionOutcome::Disconnected)
            }
            GameEvent::Error { message } => {
                error!(target: "events", "{}", message);
                None
            }
        }
    }

    /// Advance timers and give every behavior its tick.
    pub fn tick(&mut self, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }

        self.timers.tick(now);

        let Self {
            session,
            timers,
            behaviors,
            ..
        } = self;
        let mut ctx = BehaviorContext::new(session.as_mut(), timers, now);
        for behavior in behaviors.iter_mut() {
            behavior.on_tick(&mut ctx);
        }
    }

    fn activate_behaviors(&mut self, now: Instant) {
        self.behaviors = build_behaviors(&self.config);

        let Self {
            session,
            timers,
            behaviors,
            ..
        } = self;
        let mut ctx = BehaviorContext::new(session.as_mut(), timers, now);
        for behavior in behaviors.iter_mut() {
            behavior.on_start(&mut ctx);
        }
        debug!(target: "events", "Active timers: {:?}", timers.active_names());
    }

    fn dispatch_to_behaviors(&mut self, event: &GameEvent, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }

        let Self {
            session,
            timers,
            behaviors,
            ..
        } = self;
        let mut ctx = BehaviorContext::new(session.as_mut(), timers, now);
        for behavior in behaviors.iter_mut() {
            behavior.on_event(event, &mut ctx);
        }
    }

    /// Run to completion: select over the event stream and the tick clock
    /// until an end event arrives or the stream closes.
    pub async fn run(mut self, mut events: UnboundedReceiver<GameEvent>) -> SessionOutcome {
        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => {
                        if let Some(outcome) = self.handle_event(&event, Instant::now()) {
                            return outcome;
                        }
                    }
                    None => {
                        warn!(target: "events", "Event channel closed");
                        return SessionOutcome::Disconnected;
                    }
                },
                _ = ticker.tick() => {
                    self.tick(Instant::now());
                }
            }
        }
    }
}
