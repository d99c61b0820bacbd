//=========================================================================
// Core
//
// Platform-independent half of the bridge.
//
// Modules:
// - `input`: key types, key map, listener (input-dispatch context)
// - `engine_bridge`: command queue, boundary, worker (engine context)
//
// Nothing in here depends on a windowing backend; the `platform`
// module feeds it.
//
//=========================================================================

pub mod engine_bridge;
pub mod input;

pub use engine_bridge::{
    command_queue, BridgeError, CommandQueue, CommandSender, DrainControl, EngineBoundary,
    EngineCommand, EngineWorker, QueueConfig,
};
pub use input::{
    translate, AndroidKeyCode, EngineKey, InputStatus, KeyAction, KeyListener, PlatformKeyEvent,
};
