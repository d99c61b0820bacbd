//=========================================================================
// Input
//
// Platform key events, the static key map, and the listener that turns
// the former into engine commands.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
pub mod key_map;
pub mod listener;

//=== Public API ==========================================================

pub use event::{AndroidKeyCode, EngineKey, InputStatus, KeyAction, PlatformKeyEvent};
pub use key_map::{translate, BINDINGS};
pub use listener::KeyListener;
