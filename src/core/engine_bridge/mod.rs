//=========================================================================
// Engine Bridge
//=========================================================================
//
// Moves translated key events from the input-dispatch context onto the
// engine-owning context, and defines the boundary they are delivered to.
//
// Components:
// - `interface`: boundary trait, command type, errors (the contract)
// - `command_queue`: non-blocking sender and ordered, bounded drain
// - `worker`: optional dedicated engine thread
//
//=========================================================================

//=== Module Declarations =================================================

pub mod command_queue;
pub mod interface;
pub mod worker;

//=== Public API ==========================================================

pub use command_queue::{command_queue, CommandQueue, CommandSender, DrainControl, QueueConfig};
pub use interface::{BridgeError, EngineBoundary, EngineCommand};
pub use worker::EngineWorker;
