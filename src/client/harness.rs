//! In-process session harness.
//!
//! Implements the `Session` seam without any network: every call is recorded
//! so tests can assert on the exact action sequence, and the factory can
//! replay a scripted event timeline. The `lurk run` command uses the same
//! harness as an offline rehearsal of a configuration.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::info;

use crate::client::events::GameEvent;
use crate::client::session::{
    ConnectOptions, Session, SessionError, SessionFactory, SessionHandle,
};
use crate::client::types::{Control, Goal, Vec3};

/// One recorded `Session` call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedAction {
    SetColorsEnabled(bool),
    Chat(String),
    SetControlState(Control, bool),
    Look { yaw: f32, pitch: f32 },
    SwingArm,
    AttackNearestHostile { found: bool },
    SetGoal(Goal),
}

/// Shared, clonable view of the actions a harness session performed.
#[derive(Clone, Default)]
pub struct ActionLog {
    actions: Arc<Mutex<Vec<RecordedAction>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, action: RecordedAction) {
        self.actions.lock().unwrap().push(action);
    }

    /// Snapshot of everything recorded so far.
    pub fn snapshot(&self) -> Vec<RecordedAction> {
        self.actions.lock().unwrap().clone()
    }

    /// Chat messages only, in send order.
    pub fn chats(&self) -> Vec<String> {
        self.actions
            .lock()
            .unwrap()
            .iter()
            .filter_map(|a| match a {
                RecordedAction::Chat(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    /// Goals only, in issue order.
    pub fn goals(&self) -> Vec<Goal> {
        self.actions
            .lock()
            .unwrap()
            .iter()
            .filter_map(|a| match a {
                RecordedAction::SetGoal(goal) => Some(*goal),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `Session` that records calls instead of talking to a server.
pub struct HarnessSession {
    log: ActionLog,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    hostile_nearby: bool,
}

impl HarnessSession {
    pub fn new(log: ActionLog) -> Self {
        Self {
            log,
            position: Vec3::default(),
            yaw: 0.0,
            pitch: 0.0,
            hostile_nearby: false,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Whether `attack_nearest_hostile` should find a target.
    pub fn with_hostile_nearby(mut self, hostile_nearby: bool) -> Self {
        self.hostile_nearby = hostile_nearby;
        self
    }
}

impl Session for HarnessSession {
    fn set_colors_enabled(&mut self, enabled: bool) {
        self.log.record(RecordedAction::SetColorsEnabled(enabled));
    }

    fn chat(&mut self, message: &str) {
        self.log.record(RecordedAction::Chat(message.to_string()));
    }

    fn set_control_state(&mut self, control: Control, active: bool) {
        self.log
            .record(RecordedAction::SetControlState(control, active));
    }

    fn look(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.log.record(RecordedAction::Look { yaw, pitch });
    }

    fn swing_arm(&mut self) {
        self.log.record(RecordedAction::SwingArm);
    }

    fn attack_nearest_hostile(&mut self) -> bool {
        let found = self.hostile_nearby;
        self.log.record(RecordedAction::AttackNearestHostile { found });
        found
    }

    fn set_goal(&mut self, goal: Goal) {
        self.log.record(RecordedAction::SetGoal(goal));
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn orientation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }
}

/// Factory that hands out harness sessions and replays a scripted timeline.
///
/// The script is sent immediately on connect; when `session_lifetime` is set,
/// a `Disconnected` event follows after that long. All sessions share one
/// `ActionLog` so callers can inspect behavior output across reconnects.
pub struct HarnessFactory {
    script: Vec<GameEvent>,
    session_lifetime: Option<Duration>,
    log: ActionLog,
    connects: Arc<AtomicU32>,
}

impl HarnessFactory {
    pub fn new(script: Vec<GameEvent>) -> Self {
        Self {
            script,
            session_lifetime: None,
            log: ActionLog::new(),
            connects: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Rehearsal factory: spawn immediately, disconnect after `lifetime`.
    pub fn rehearsal(lifetime: Duration) -> Self {
        let mut factory = Self::new(vec![GameEvent::Spawn]);
        factory.session_lifetime = Some(lifetime);
        factory
    }

    pub fn log(&self) -> ActionLog {
        self.log.clone()
    }

    /// Number of times `connect` has been called.
    pub fn connect_count(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }

    /// Clonable counter handle, for asserting from another task.
    pub fn connect_counter(&self) -> Arc<AtomicU32> {
        self.connects.clone()
    }
}

impl SessionFactory for HarnessFactory {
    fn connect(&mut self, opts: &ConnectOptions) -> Result<SessionHandle, SessionError> {
        let attempt = self.connects.fetch_add(1, Ordering::SeqCst) + 1;
        info!(target: "harness", "Harness connect #{} as {}", attempt, opts);

        let (event_tx, events) = mpsc::unbounded_channel();
        for event in &self.script {
            let _ = event_tx.send(event.clone());
        }

        if let Some(lifetime) = self.session_lifetime {
            tokio::spawn(async move {
                tokio::time::sleep(lifetime).await;
                let _ = event_tx.send(GameEvent::Disconnected);
            });
        }

        Ok(SessionHandle {
            session: Box::new(HarnessSession::new(self.log.clone())),
            events,
        })
    }
}
