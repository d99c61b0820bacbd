//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use key_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point
pub use crate::engine::{KeyBridge, KeyBridgeBuilder};

// Input side
pub use crate::core::input::{
    AndroidKeyCode, EngineKey, InputStatus, KeyAction, KeyListener, PlatformKeyEvent,
};

// Engine side
pub use crate::core::engine_bridge::{
    BridgeError, CommandQueue, DrainControl, EngineBoundary, EngineCommand, EngineWorker,
};
