//=========================================================================
// Key Listener
//=========================================================================
//
// Receives platform key events on the input-dispatch context, translates
// them, and queues one engine command per forwarded event.
//
// Rules:
// - Down/Up with a mapped key   → one command, `Handled`
// - Unmapped key or other action → nothing queued, `Unhandled`
//
// Repeat key-downs are forwarded like any other key-down.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::event::{InputStatus, KeyAction, PlatformKeyEvent};
use super::key_map;
use crate::core::engine_bridge::{CommandSender, EngineCommand};

//=== KeyListener =========================================================

/// Platform key listener forwarding translated keys to the engine queue.
#[derive(Debug, Clone)]
pub struct KeyListener {
    sender: CommandSender,
}

impl KeyListener {
    pub fn new(sender: CommandSender) -> Self {
        Self { sender }
    }

    /// Handles one platform key event.
    ///
    /// A refused enqueue (full or disconnected queue) is logged and the
    /// event is still reported `Handled`, since the key belongs to the
    /// engine either way.
    pub fn on_key(&self, event: &PlatformKeyEvent) -> InputStatus {
        let Some(command) = Self::command_for(event) else {
            trace!(target: "bridge::input", "Ignoring {:?}", event);
            return InputStatus::Unhandled;
        };

        if let Err(e) = self.sender.enqueue(command) {
            warn!(target: "bridge::input", "Dropping {:?}: {}", command, e);
        }

        InputStatus::Handled
    }

    /// Builds the engine command for an event, if it should be forwarded.
    pub fn command_for(event: &PlatformKeyEvent) -> Option<EngineCommand> {
        let key = key_map::translate(event.key);
        if !key.is_mapped() {
            return None;
        }

        match event.action {
            KeyAction::Down => Some(EngineCommand::KeyDown(key)),
            KeyAction::Up => Some(EngineCommand::KeyUp(key)),
            KeyAction::Multiple | KeyAction::Other(_) => None,
        }
    }

    pub fn sender(&self) -> &CommandSender {
        &self.sender
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine_bridge::{command_queue, CommandQueue, EngineBoundary, QueueConfig};
    use crate::core::input::event::{AndroidKeyCode, EngineKey};

    #[derive(Default)]
    struct Recorder(Vec<EngineCommand>);

    impl EngineBoundary for Recorder {
        fn key_down(&mut self, key: EngineKey) {
            self.0.push(EngineCommand::KeyDown(key));
        }

        fn key_up(&mut self, key: EngineKey) {
            self.0.push(EngineCommand::KeyUp(key));
        }
    }

    fn setup() -> (KeyListener, CommandQueue) {
        let (sender, queue) = command_queue(QueueConfig::default());
        (KeyListener::new(sender), queue)
    }

    fn drain(queue: &CommandQueue) -> Vec<EngineCommand> {
        let mut recorder = Recorder::default();
        queue.run_pending(&mut recorder);
        recorder.0
    }

    #[test]
    fn key_down_forwards_one_command() {
        let (listener, queue) = setup();

        let status = listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode::DPAD_UP));

        assert_eq!(status, InputStatus::Handled);
        assert_eq!(drain(&queue), vec![EngineCommand::KeyDown(EngineKey::UP)]);
    }

    #[test]
    fn key_up_forwards_one_command() {
        let (listener, queue) = setup();

        let status = listener.on_key(&PlatformKeyEvent::up(AndroidKeyCode::Z));

        assert_eq!(status, InputStatus::Handled);
        assert_eq!(drain(&queue), vec![EngineCommand::KeyUp(EngineKey::Z)]);
    }

    #[test]
    fn unmapped_key_is_unhandled() {
        let (listener, queue) = setup();

        let down = listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode(29))); // KEYCODE_A
        let up = listener.on_key(&PlatformKeyEvent::up(AndroidKeyCode::UNKNOWN));

        assert_eq!(down, InputStatus::Unhandled);
        assert_eq!(up, InputStatus::Unhandled);
        assert!(queue.is_empty());
    }

    #[test]
    fn other_actions_are_unhandled() {
        let (listener, queue) = setup();

        let multiple = PlatformKeyEvent::new(AndroidKeyCode::D, KeyAction::Multiple);
        let unknown = PlatformKeyEvent::new(AndroidKeyCode::D, KeyAction::Other(9));

        assert_eq!(listener.on_key(&multiple), InputStatus::Unhandled);
        assert_eq!(listener.on_key(&unknown), InputStatus::Unhandled);
        assert!(queue.is_empty());
    }

    #[test]
    fn repeat_down_is_forwarded() {
        let (listener, queue) = setup();

        let repeat = PlatformKeyEvent::down(AndroidKeyCode::DPAD_LEFT).with_repeat_count(2);

        assert_eq!(listener.on_key(&repeat), InputStatus::Handled);
        assert_eq!(drain(&queue), vec![EngineCommand::KeyDown(EngineKey::LEFT)]);
    }

    #[test]
    fn events_keep_arrival_order() {
        let (listener, queue) = setup();

        listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode::DPAD_RIGHT));
        listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode::X));
        listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode(62))); // KEYCODE_SPACE
        listener.on_key(&PlatformKeyEvent::up(AndroidKeyCode::DPAD_RIGHT));
        listener.on_key(&PlatformKeyEvent::up(AndroidKeyCode::X));

        assert_eq!(
            drain(&queue),
            vec![
                EngineCommand::KeyDown(EngineKey::RIGHT),
                EngineCommand::KeyDown(EngineKey::X),
                EngineCommand::KeyUp(EngineKey::RIGHT),
                EngineCommand::KeyUp(EngineKey::X),
            ]
        );
    }

    #[test]
    fn mapped_key_stays_handled_when_queue_is_gone() {
        let (listener, queue) = setup();
        drop(queue);

        let status = listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode::DPAD_DOWN));
        assert_eq!(status, InputStatus::Handled);
    }

    #[test]
    fn full_queue_drops_without_blocking() {
        let config = QueueConfig { capacity: Some(1), ..QueueConfig::default() };
        let (sender, queue) = command_queue(config);
        let listener = KeyListener::new(sender);

        listener.on_key(&PlatformKeyEvent::down(AndroidKeyCode::D));
        let status = listener.on_key(&PlatformKeyEvent::up(AndroidKeyCode::D));

        assert_eq!(status, InputStatus::Handled);
        assert_eq!(drain(&queue), vec![EngineCommand::KeyDown(EngineKey::D)]);
    }

    #[test]
    fn command_for_covers_every_binding() {
        for &(platform, engine) in key_map::BINDINGS {
            assert_eq!(
                KeyListener::command_for(&PlatformKeyEvent::down(platform)),
                Some(EngineCommand::KeyDown(engine))
            );
            assert_eq!(
                KeyListener::command_for(&PlatformKeyEvent::up(platform)),
                Some(EngineCommand::KeyUp(engine))
            );
        }
    }
}
