//! Integration tests for the controller and behaviors, driven through the
//! harness session so every assertion is on the exact action sequence.

use std::time::{Duration, Instant};

use lurk::client::events::GameEvent;
use lurk::client::harness::{ActionLog, HarnessFactory, HarnessSession, RecordedAction};
use lurk::client::types::{Control, Goal, Vec3};
use lurk::config::BotConfig;
use lurk::runner::{run_bot, Controller, SessionOutcome};

fn base_config() -> BotConfig {
    let mut config = BotConfig::default();
    config.account.username = "steve".to_string();
    config.server.host = "mc.example.org".to_string();
    config
}

fn spawned_controller(config: BotConfig, session: HarnessSession, t0: Instant) -> Controller {
    let mut controller = Controller::new(config, Box::new(session));
    assert!(controller.handle_event(&GameEvent::Spawn, t0).is_none());
    controller
}

#[test]
fn colors_are_disabled_at_connection_init() {
    let log = ActionLog::new();
    let _controller =
        Controller::new(base_config(), Box::new(HarnessSession::new(log.clone())));
    assert_eq!(log.snapshot(), vec![RecordedAction::SetColorsEnabled(false)]);
}

#[test]
fn non_repeat_chat_sends_each_message_once_in_order() {
    let mut config = base_config();
    config.utils.chat_messages.enabled = true;
    config.utils.chat_messages.repeat = false;
    config.utils.chat_messages.messages = vec!["hi".to_string(), "bye".to_string()];

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    assert_eq!(log.chats(), vec!["hi", "bye"]);

    // No interval exists: ticking far into the future produces nothing more.
    controller.tick(t0 + Duration::from_secs(60));
    controller.tick(t0 + Duration::from_secs(120));
    assert_eq!(log.chats(), vec!["hi", "bye"]);
}

#[test]
fn repeat_chat_cycles_messages_modulo_length() {
    let mut config = base_config();
    config.utils.chat_messages.enabled = true;
    config.utils.chat_messages.repeat = true;
    config.utils.chat_messages.repeat_delay_secs = 1;
    config.utils.chat_messages.messages =
        vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    // Nothing is sent at activation in repeat mode.
    assert!(log.chats().is_empty());

    for n in 1..=5 {
        controller.tick(t0 + Duration::from_secs(n));
    }
    assert_eq!(log.chats(), vec!["a", "b", "c", "a", "b"]);
}

#[test]
fn auto_auth_registers_then_logs_in_after_the_delay() {
    let mut config = base_config();
    config.utils.auto_auth.enabled = true;
    config.utils.auto_auth.password = "hunter2".to_string();

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    controller.tick(t0 + Duration::from_millis(100));
    assert!(log.chats().is_empty());

    controller.tick(t0 + Duration::from_millis(500));
    assert_eq!(log.chats(), vec!["/register hunter2 hunter2", "/login hunter2"]);

    // Fire-and-forget: never repeated.
    controller.tick(t0 + Duration::from_secs(10));
    assert_eq!(log.chats().len(), 2);
}

#[test]
fn move_to_target_issues_exactly_one_goal() {
    let mut config = base_config();
    config.position.enabled = true;
    config.position.x = 100;
    config.position.y = 64;
    config.position.z = -200;

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    assert_eq!(
        log.goals(),
        vec![Goal::Block {
            x: 100,
            y: 64,
            z: -200
        }]
    );

    controller.handle_event(&GameEvent::GoalReached, t0 + Duration::from_secs(5));
    controller.tick(t0 + Duration::from_secs(10));
    assert_eq!(log.goals().len(), 1);
}

#[test]
fn anti_afk_holds_controls_and_swings_on_schedule() {
    let mut config = base_config();
    config.utils.anti_afk.enabled = true;
    config.utils.anti_afk.sneak = true;
    config.utils.anti_afk.jump = true;
    config.utils.anti_afk.rotate = false;
    config.utils.anti_afk.hit.enabled = true;
    config.utils.anti_afk.hit.delay_ms = 1000;
    config.utils.anti_afk.hit.attack_mobs = false;

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    let actions = log.snapshot();
    assert!(actions.contains(&RecordedAction::SetControlState(Control::Sneak, true)));
    assert!(actions.contains(&RecordedAction::SetControlState(Control::Jump, true)));

    controller.tick(t0 + Duration::from_millis(999));
    assert!(!log.snapshot().contains(&RecordedAction::SwingArm));

    controller.tick(t0 + Duration::from_millis(1000));
    let swings = log
        .snapshot()
        .iter()
        .filter(|a| **a == RecordedAction::SwingArm)
        .count();
    assert_eq!(swings, 1);
}

#[test]
fn anti_afk_attacks_hostiles_when_configured_and_available() {
    let mut config = base_config();
    config.utils.anti_afk.enabled = true;
    config.utils.anti_afk.rotate = false;
    config.utils.anti_afk.hit.enabled = true;
    config.utils.anti_afk.hit.delay_ms = 500;
    config.utils.anti_afk.hit.attack_mobs = true;

    let log = ActionLog::new();
    let t0 = Instant::now();
    let session = HarnessSession::new(log.clone()).with_hostile_nearby(true);
    let mut controller = spawned_controller(config, session, t0);

    controller.tick(t0 + Duration::from_millis(500));
    let actions = log.snapshot();
    assert!(actions.contains(&RecordedAction::AttackNearestHostile { found: true }));
    assert!(!actions.contains(&RecordedAction::SwingArm));
}

#[test]
fn anti_afk_rotate_accumulates_yaw_without_wraparound() {
    let mut config = base_config();
    config.utils.anti_afk.enabled = true;
    config.utils.anti_afk.rotate = true;

    let log = ActionLog::new();
    let t0 = Instant::now();
    let mut controller = spawned_controller(config, HarnessSession::new(log.clone()), t0);

    for n in 1..=3 {
        controller.tick(t0 + Duration::from_millis(100 * n));
    }

    let yaws: Vec<f32> = log
        .snapshot()
        .iter()
        .filter_map(|a| match a {
            RecordedAction::Look { yaw, .. } => Some(*yaw),
            _ => None,
        })
        .collect();
    assert_eq!(yaws, vec![1.0, 2.0, 3.0]);
}

#[test]
fn circle_walk_cycles_four_cardinal_waypoints() {
    let mut config = base_config();
    config.utils.anti_afk.enabled = true;
    config.utils.anti_afk.rotate = false;
    config.utils.anti_afk.circle_walk.enabled = true;
    config.utils.anti_afk.circle_walk.radius = 3.0;

    let log = ActionLog::new();
    let t0 = Instant::now();
    let session =
        HarnessSession::new(log.clone()).with_position(Vec3::new(10.0, 64.0, -5.0));
    let mut controller = spawned_controller(config, session, t0);

    for n in 1..=6 {
        controller.tick(t0 + Duration::from_secs(n));
    }

    let expected = vec![
        Goal::Column { x: 13.0, z: -5.0 },
        Goal::Column { x: 10.0, z: -2.0 },
        Goal::Column { x: 7.0, z: -5.0 },
        Goal::Column { x: 10.0, z: -8.0 },
        Goal::Column { x: 13.0, z: -5.0 },
        Goal::Column { x: 10.0, z: -2.0 },
    ];
    assert_eq!(log.goals(), expected);

    let center = Vec3::new(10.0, 64.0, -5.0);
    for goal in log.goals().iter().take(4) {
        let Goal::Column { x, z } = goal else {
            panic!("expected column goal");
        };
        let waypoint = Vec3::new(*x, 64.0, *z);
        assert!((waypoint.distance_to(&center) - 3.0).abs() < 1e-9);
    }
}

#[test]
fn kick_and_disconnect_end_the_session() {
    let t0 = Instant::now();
    let log = ActionLog::new();
    let mut controller =
        spawned_controller(base_config(), HarnessSession::new(log.clone()), t0);
    assert_eq!(
        controller.handle_event(
            &GameEvent::Kicked {
                reason: r#"{"text":"§cBanned"}"#.to_string()
            },
            t0
        ),
        Some(SessionOutcome::Kicked)
    );

    let mut controller = spawned_controller(base_config(), HarnessSession::new(log), t0);
    assert_eq!(
        controller.handle_event(&GameEvent::Disconnected, t0),
        Some(SessionOutcome::Disconnected)
    );
}

#[test]
fn protocol_errors_do_not_end_the_session() {
    let t0 = Instant::now();
    let log = ActionLog::new();
    let mut controller = spawned_controller(base_config(), HarnessSession::new(log), t0);
    assert!(controller
        .handle_event(
            &GameEvent::Error {
                message: "read timed out".to_string()
            },
            t0
        )
        .is_none());
}

#[tokio::test]
async fn invalid_config_never_reaches_the_factory() {
    let mut config = base_config();
    config.account.username = String::new();

    let mut factory = HarnessFactory::new(vec![GameEvent::Disconnected]);
    let result = run_bot(&config, &mut factory).await;

    assert!(result.is_err());
    assert_eq!(factory.connect_count(), 0);
}

#[tokio::test]
async fn no_reconnect_when_disabled() {
    let mut config = base_config();
    config.utils.auto_reconnect = false;

    let mut factory = HarnessFactory::new(vec![GameEvent::Disconnected]);
    run_bot(&config, &mut factory).await.unwrap();

    assert_eq!(factory.connect_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn reconnect_waits_the_full_delay() {
    let mut config = base_config();
    config.utils.auto_reconnect = true;
    config.utils.auto_reconnect_delay_ms = 1500;

    let factory = HarnessFactory::new(vec![GameEvent::Disconnected]);
    let connects = factory.connect_counter();

    let bot = tokio::spawn(async move {
        let mut factory = factory;
        let _ = run_bot(&config, &mut factory).await;
    });

    // First connect happens immediately; the session ends right away and
    // the supervisor goes to sleep for the fixed delay.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(connects.load(std::sync::atomic::Ordering::SeqCst), 1);

    // Just short of the delay: still exactly one attempt.
    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(connects.load(std::sync::atomic::Ordering::SeqCst), 1);

    // Past the delay: exactly one more.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(connects.load(std::sync::atomic::Ordering::SeqCst), 2);

    bot.abort();
}
