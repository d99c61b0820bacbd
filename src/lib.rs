//=========================================================================
// Key Bridge — Library Root
//
// Translates platform key events into engine key codes and forwards them
// to an externally owned engine, on the engine's own thread.
//
// Responsibilities:
// - Expose the key types, key map and listener (`core::input`)
// - Expose the engine boundary and command queue (`core::engine_bridge`)
// - Keep the winit front-end (`platform`) internal
//
// Typical usage:
// ```no_run
// use key_bridge::prelude::*;
//
// struct Game;
// impl EngineBoundary for Game {
//     fn key_down(&mut self, _key: EngineKey) {}
//     fn key_up(&mut self, _key: EngineKey) {}
// }
//
// KeyBridgeBuilder::new().build().run(Game).unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not depend on a windowing backend.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop.
// `engine` wires the listener, queue and worker together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{KeyBridge, KeyBridgeBuilder};
