//=========================================================================
// Key Processor
//=========================================================================
//
// Converts winit keyboard events into platform key events.
//
// Architecture:
//   winit KeyEvent → KeyProcessor → PlatformKeyEvent → KeyListener
//
// winit reports physical keys; on Android its D-pad keys arrive as arrow
// keys, so arrows map back onto the D-pad codes. Keys with no platform
// counterpart become `AndroidKeyCode::UNKNOWN` and are filtered here.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{AndroidKeyCode, KeyAction, PlatformKeyEvent};

//=== KeyProcessor ========================================================

/// Stateless converter from winit key events.
pub(crate) struct KeyProcessor;

impl KeyProcessor {
    /// Converts a winit key event (filters keys without a platform code).
    pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<PlatformKeyEvent> {
        let key = match key_event.physical_key {
            PhysicalKey::Code(code) => AndroidKeyCode::from(code),
            _ => return None,
        };

        Self::create_key_event(key, key_event.state, key_event.repeat)
    }

    fn create_key_event(
        key: AndroidKeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<PlatformKeyEvent> {
        if key == AndroidKeyCode::UNKNOWN {
            return None;
        }

        let event = PlatformKeyEvent::new(key, KeyAction::from(state));
        Some(if repeat { event.with_repeat_count(1) } else { event })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ElementState> for KeyAction {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => KeyAction::Down,
            ElementState::Released => KeyAction::Up,
        }
    }
}

/// Converts winit physical key codes to platform key codes.
///
/// Covers A-Z, 0-9, arrows and a few special keys. Everything else is
/// `AndroidKeyCode::UNKNOWN`.
impl From<WinitKeyCode> for AndroidKeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrows (D-pad) -----------------------------------------------

            ArrowUp => AndroidKeyCode::DPAD_UP,
            ArrowDown => AndroidKeyCode::DPAD_DOWN,
            ArrowLeft => AndroidKeyCode::DPAD_LEFT,
            ArrowRight => AndroidKeyCode::DPAD_RIGHT,

            //--- Digits (KEYCODE_0 = 7) ---------------------------------------

            Digit0 => AndroidKeyCode(7),
            Digit1 => AndroidKeyCode(8),
            Digit2 => AndroidKeyCode(9),
            Digit3 => AndroidKeyCode(10),
            Digit4 => AndroidKeyCode(11),
            Digit5 => AndroidKeyCode(12),
            Digit6 => AndroidKeyCode(13),
            Digit7 => AndroidKeyCode(14),
            Digit8 => AndroidKeyCode(15),
            Digit9 => AndroidKeyCode(16),

            //--- Letters (KEYCODE_A = 29) -------------------------------------

            KeyA => AndroidKeyCode(29),
            KeyB => AndroidKeyCode(30),
            KeyC => AndroidKeyCode(31),
            KeyD => AndroidKeyCode::D,
            KeyE => AndroidKeyCode(33),
            KeyF => AndroidKeyCode(34),
            KeyG => AndroidKeyCode(35),
            KeyH => AndroidKeyCode(36),
            KeyI => AndroidKeyCode(37),
            KeyJ => AndroidKeyCode(38),
            KeyK => AndroidKeyCode(39),
            KeyL => AndroidKeyCode(40),
            KeyM => AndroidKeyCode(41),
            KeyN => AndroidKeyCode(42),
            KeyO => AndroidKeyCode(43),
            KeyP => AndroidKeyCode(44),
            KeyQ => AndroidKeyCode(45),
            KeyR => AndroidKeyCode(46),
            KeyS => AndroidKeyCode(47),
            KeyT => AndroidKeyCode(48),
            KeyU => AndroidKeyCode(49),
            KeyV => AndroidKeyCode(50),
            KeyW => AndroidKeyCode(51),
            KeyX => AndroidKeyCode::X,
            KeyY => AndroidKeyCode(53),
            KeyZ => AndroidKeyCode::Z,

            //--- Special ------------------------------------------------------

            Tab => AndroidKeyCode(61),
            Space => AndroidKeyCode(62),
            Enter => AndroidKeyCode(66),
            Backspace => AndroidKeyCode(67),
            Escape => AndroidKeyCode(111),
            Delete => AndroidKeyCode(112),

            //--- Unmapped -----------------------------------------------------

            _ => AndroidKeyCode::UNKNOWN,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{translate, EngineKey};

    #[test]
    fn arrows_map_to_dpad() {
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::ArrowUp), AndroidKeyCode::DPAD_UP);
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::ArrowDown), AndroidKeyCode::DPAD_DOWN);
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::ArrowLeft), AndroidKeyCode::DPAD_LEFT);
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::ArrowRight), AndroidKeyCode::DPAD_RIGHT);
    }

    #[test]
    fn engine_letters_reach_engine_codes() {
        assert_eq!(translate(WinitKeyCode::KeyD.into()), EngineKey::D);
        assert_eq!(translate(WinitKeyCode::KeyX.into()), EngineKey::X);
        assert_eq!(translate(WinitKeyCode::KeyZ.into()), EngineKey::Z);
    }

    #[test]
    fn other_letters_keep_platform_codes_but_no_engine_code() {
        let a = AndroidKeyCode::from(WinitKeyCode::KeyA);
        assert_eq!(a, AndroidKeyCode(29));
        assert_eq!(translate(a), EngineKey::NONE);
    }

    #[test]
    fn unmapped_winit_keys_are_unknown() {
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::F13), AndroidKeyCode::UNKNOWN);
        assert_eq!(AndroidKeyCode::from(WinitKeyCode::NumpadAdd), AndroidKeyCode::UNKNOWN);
    }

    #[test]
    fn element_state_maps_to_action() {
        assert_eq!(KeyAction::from(ElementState::Pressed), KeyAction::Down);
        assert_eq!(KeyAction::from(ElementState::Released), KeyAction::Up);
    }

    #[test]
    fn create_key_event_filters_unknown() {
        let event = KeyProcessor::create_key_event(
            AndroidKeyCode::UNKNOWN,
            ElementState::Pressed,
            false,
        );
        assert!(event.is_none());
    }

    #[test]
    fn create_key_event_carries_repeat() {
        let event = KeyProcessor::create_key_event(
            AndroidKeyCode::DPAD_UP,
            ElementState::Pressed,
            true,
        )
        .unwrap();

        assert_eq!(event.key, AndroidKeyCode::DPAD_UP);
        assert_eq!(event.action, KeyAction::Down);
        assert!(event.is_repeat());
    }

    #[test]
    fn create_key_event_release() {
        let event = KeyProcessor::create_key_event(
            AndroidKeyCode::X,
            ElementState::Released,
            false,
        )
        .unwrap();

        assert_eq!(event, PlatformKeyEvent::up(AndroidKeyCode::X));
    }
}
