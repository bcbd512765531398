//! Arbiter tests - per-frame coalescing and precedence rules

use std::collections::VecDeque;
use std::sync::mpsc;

use tui_reflex::input::{poll_frame, KeyPoll};
use tui_reflex::types::{Direction, FrameDecision, InputEvent, KeyCommand};

/// Keyboard fake yielding one scripted command per poll.
struct ScriptedKeys(VecDeque<KeyCommand>);

impl ScriptedKeys {
    fn none() -> Self {
        Self(VecDeque::new())
    }

    fn with(cmds: &[KeyCommand]) -> Self {
        Self(cmds.iter().copied().collect())
    }
}

impl KeyPoll for ScriptedKeys {
    fn poll(&mut self) -> Option<KeyCommand> {
        self.0.pop_front()
    }
}

#[test]
fn test_empty_sources_decide_nothing() {
    let (_tx, rx) = mpsc::channel::<InputEvent>();
    let mut keys = ScriptedKeys::none();
    let decision = poll_frame(Some(&rx), &mut keys);
    assert_eq!(decision, FrameDecision::default());
}

#[test]
fn test_last_button_wins() {
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Button(Direction::Up)).unwrap();
    tx.send(InputEvent::Button(Direction::Left)).unwrap();

    let decision = poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert_eq!(decision.action, Some(Direction::Left));
}

#[test]
fn test_latest_error_wins() {
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Error("first".into())).unwrap();
    tx.send(InputEvent::Error("second".into())).unwrap();

    let decision = poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert_eq!(decision.error.as_deref(), Some("second"));
    assert_eq!(decision.action, None);
}

#[test]
fn test_buttons_and_errors_coalesce_independently() {
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Button(Direction::Up)).unwrap();
    tx.send(InputEvent::Error("pad unplugged".into())).unwrap();
    tx.send(InputEvent::Button(Direction::Down)).unwrap();

    let decision = poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert_eq!(decision.action, Some(Direction::Down));
    assert_eq!(decision.error.as_deref(), Some("pad unplugged"));
}

#[test]
fn test_keyboard_overrides_queued_device_input() {
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Button(Direction::Up)).unwrap();

    let mut keys = ScriptedKeys::with(&[KeyCommand::Press(Direction::Down)]);
    let decision = poll_frame(Some(&rx), &mut keys);
    assert_eq!(decision.action, Some(Direction::Down));
}

#[test]
fn test_device_action_survives_quiet_keyboard() {
    let (tx, rx) = mpsc::channel();
    tx.send(InputEvent::Button(Direction::Right)).unwrap();

    let decision = poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert_eq!(decision.action, Some(Direction::Right));
    assert!(!decision.quit);
}

#[test]
fn test_quit_key_sets_quit() {
    let (_tx, rx) = mpsc::channel::<InputEvent>();
    let mut keys = ScriptedKeys::with(&[KeyCommand::Quit]);
    let decision = poll_frame(Some(&rx), &mut keys);
    assert!(decision.quit);
    assert_eq!(decision.action, None);
}

#[test]
fn test_channel_is_drained_to_empty() {
    let (tx, rx) = mpsc::channel();
    for _ in 0..10 {
        tx.send(InputEvent::Button(Direction::Up)).unwrap();
    }

    poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_disconnected_channel_behaves_as_empty() {
    let (tx, rx) = mpsc::channel::<InputEvent>();
    drop(tx);

    let decision = poll_frame(Some(&rx), &mut ScriptedKeys::none());
    assert_eq!(decision, FrameDecision::default());
}

#[test]
fn test_keyboard_only_mode() {
    let mut keys = ScriptedKeys::with(&[KeyCommand::Press(Direction::Left)]);
    let decision = poll_frame(None, &mut keys);
    assert_eq!(decision.action, Some(Direction::Left));
}
