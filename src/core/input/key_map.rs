//=========================================================================
// Key Map
//
// Static translation from platform key codes to engine key codes.
//
// The table is immutable and process-wide. Keys missing from it map to
// `EngineKey::NONE`, which callers treat as "not for the engine".
//
//=========================================================================

use log::trace;

use super::event::{AndroidKeyCode, EngineKey};

//=== Bindings ============================================================

/// Every platform key the engine understands, with its engine code.
pub const BINDINGS: &[(AndroidKeyCode, EngineKey)] = &[
    (AndroidKeyCode::DPAD_UP, EngineKey::UP),
    (AndroidKeyCode::DPAD_DOWN, EngineKey::DOWN),
    (AndroidKeyCode::DPAD_RIGHT, EngineKey::RIGHT),
    (AndroidKeyCode::DPAD_LEFT, EngineKey::LEFT),
    (AndroidKeyCode::D, EngineKey::D),
    (AndroidKeyCode::Z, EngineKey::Z),
    (AndroidKeyCode::X, EngineKey::X),
];

//=== Translation =========================================================

/// Translates a platform key into the engine's key code.
///
/// Returns [`EngineKey::NONE`] for any key without an engine counterpart.
pub fn translate(key: AndroidKeyCode) -> EngineKey {
    let engine_key = BINDINGS
        .iter()
        .find(|(platform, _)| *platform == key)
        .map_or(EngineKey::NONE, |(_, engine)| *engine);

    trace!(target: "bridge::input", "Translated key {} -> {}", key.raw(), engine_key);
    engine_key
}

impl From<AndroidKeyCode> for EngineKey {
    fn from(key: AndroidKeyCode) -> Self {
        translate(key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
