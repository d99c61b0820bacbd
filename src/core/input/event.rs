//=========================================================================
// Input Event Types
//
// Defines the key identifiers on both sides of the bridge: the platform
// key code delivered by the input-dispatch context, and the fixed integer
// code understood by the engine.
//
// Responsibilities:
// - Represent platform key events in a stable, copyable form
// - Represent engine key codes, including the "no key" sentinel
// - Report whether the platform should consider an event consumed
//
// Event Flow:
// ```text
// Platform Layer (winit / Android key codes)
//         ↓
//    PlatformKeyEvent (this module)
//         ↓
//    key_map::translate → EngineKey
//         ↓
//    EngineCommand (engine_bridge)
// ```
//
//=========================================================================

use std::fmt;

//=== AndroidKeyCode ======================================================

/// Platform key identifier.
///
/// Carries the same numeric values as Android's `KeyEvent.KEYCODE_*`
/// constants, so raw codes from the platform can be wrapped directly.
/// Other front-ends (winit) convert into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AndroidKeyCode(pub i32);

impl AndroidKeyCode {
    /// `KEYCODE_UNKNOWN`
    pub const UNKNOWN: Self = Self(0);

    //--- Directional pad --------------------------------------------------

    pub const DPAD_UP: Self = Self(19);
    pub const DPAD_DOWN: Self = Self(20);
    pub const DPAD_LEFT: Self = Self(21);
    pub const DPAD_RIGHT: Self = Self(22);

    //--- Letters ----------------------------------------------------------

    pub const D: Self = Self(32);
    pub const X: Self = Self(52);
    pub const Z: Self = Self(54);

    /// Returns the raw platform code.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for AndroidKeyCode {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

//=== KeyAction ===========================================================

/// Action carried by a platform key event.
///
/// Raw values follow Android's `KeyEvent.ACTION_*` constants. Only `Down`
/// and `Up` are ever forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key pressed (`ACTION_DOWN`, 0).
    Down,

    /// Key released (`ACTION_UP`, 1).
    Up,

    /// Batched repeat or character string (`ACTION_MULTIPLE`, 2).
    Multiple,

    /// Any action value the bridge does not know about.
    Other(i32),
}

impl KeyAction {
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Multiple,
            other => Self::Other(other),
        }
    }
}

//=== PlatformKeyEvent ====================================================

/// A key event as received on the input-dispatch context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformKeyEvent {
    pub key: AndroidKeyCode,
    pub action: KeyAction,

    /// Number of auto-repeats preceding this event (0 for the first press).
    pub repeat_count: u32,
}

impl PlatformKeyEvent {
    pub const fn new(key: AndroidKeyCode, action: KeyAction) -> Self {
        Self { key, action, repeat_count: 0 }
    }

    pub const fn down(key: AndroidKeyCode) -> Self {
        Self::new(key, KeyAction::Down)
    }

    pub const fn up(key: AndroidKeyCode) -> Self {
        Self::new(key, KeyAction::Up)
    }

    pub const fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub const fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

//=== EngineKey ===========================================================

/// Key code understood by the engine boundary.
///
/// Values match the engine's own key constants (GLFW numbering).
/// [`EngineKey::NONE`] is the sentinel for "no corresponding engine key"
/// and is never forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineKey(pub i32);

impl EngineKey {
    /// Sentinel: the platform key has no engine counterpart.
    pub const NONE: Self = Self(0);

    pub const RIGHT: Self = Self(262);
    pub const LEFT: Self = Self(263);
    pub const DOWN: Self = Self(264);
    pub const UP: Self = Self(265);

    pub const D: Self = Self(68);
    pub const X: Self = Self(88);
    pub const Z: Self = Self(90);

    pub const fn code(self) -> i32 {
        self.0
    }

    /// True for any real engine key (strictly positive code).
    pub const fn is_mapped(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for EngineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//=== InputStatus =========================================================

/// Whether the bridge consumed a platform event.
///
/// `Unhandled` events are left to the platform's default handling
/// (e.g. focus navigation for D-pad keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    Handled,
    Unhandled,
}

impl InputStatus {
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl From<InputStatus> for bool {
    fn from(status: InputStatus) -> Self {
        status.is_handled()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
