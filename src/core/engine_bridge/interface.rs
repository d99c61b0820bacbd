//=========================================================================
// Engine Bridge Interface
//=========================================================================
//
// Input-to-engine contract: the boundary trait, the deferred command
// type, and the error type.
//
//=========================================================================

use crate::core::input::event::EngineKey;

//=== EngineBoundary ======================================================

/// Native entry points of the externally owned engine.
///
/// Only ever called on the engine-owning context: either the thread that
/// drains a [`CommandQueue`](super::CommandQueue) or an
/// [`EngineWorker`](super::EngineWorker).
pub trait EngineBoundary {
    /// Notifies the engine that `key` was pressed.
    fn key_down(&mut self, key: EngineKey);

    /// Notifies the engine that `key` was released.
    fn key_up(&mut self, key: EngineKey);
}

impl<B: EngineBoundary + ?Sized> EngineBoundary for &mut B {
    fn key_down(&mut self, key: EngineKey) {
        (**self).key_down(key);
    }

    fn key_up(&mut self, key: EngineKey) {
        (**self).key_up(key);
    }
}

impl<B: EngineBoundary + ?Sized> EngineBoundary for Box<B> {
    fn key_down(&mut self, key: EngineKey) {
        (**self).key_down(key);
    }

    fn key_up(&mut self, key: EngineKey) {
        (**self).key_up(key);
    }
}

//=== EngineCommand =======================================================

/// One deferred unit of work for the engine context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineCommand {
    KeyDown(EngineKey),
    KeyUp(EngineKey),
}

impl EngineCommand {
    pub const fn key(&self) -> EngineKey {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => *key,
        }
    }

    /// Executes the command against the boundary.
    pub fn apply<B: EngineBoundary + ?Sized>(self, boundary: &mut B) {
        match self {
            Self::KeyDown(key) => boundary.key_down(key),
            Self::KeyUp(key) => boundary.key_up(key),
        }
    }
}

//=== BridgeError =========================================================

/// Errors raised while moving commands to the engine context.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The engine side of the queue has been dropped.
    #[error("engine command queue disconnected")]
    Disconnected,

    /// A bounded queue had no room; the command was dropped.
    #[error("engine command queue full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// The worker thread could not be started.
    #[error("failed to spawn engine worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// The worker thread panicked while running the boundary.
    #[error("engine worker panicked")]
    WorkerPanicked,

    /// The platform event loop failed to start or run.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls {
        downs: Vec<EngineKey>,
        ups: Vec<EngineKey>,
    }

    impl EngineBoundary for Calls {
        fn key_down(&mut self, key: EngineKey) {
            self.downs.push(key);
        }

        fn key_up(&mut self, key: EngineKey) {
            self.ups.push(key);
        }
    }

    #[test]
    fn apply_dispatches_by_direction() {
        let mut calls = Calls::default();

        EngineCommand::KeyDown(EngineKey::UP).apply(&mut calls);
        EngineCommand::KeyUp(EngineKey::X).apply(&mut calls);

        assert_eq!(calls.downs, vec![EngineKey::UP]);
        assert_eq!(calls.ups, vec![EngineKey::X]);
    }

    #[test]
    fn apply_through_boxed_boundary() {
        let mut boxed: Box<dyn EngineBoundary> = Box::new(Calls::default());
        EngineCommand::KeyDown(EngineKey::D).apply(&mut boxed);
    }

    #[test]
    fn command_exposes_key() {
        assert_eq!(EngineCommand::KeyDown(EngineKey::Z).key(), EngineKey::Z);
        assert_eq!(EngineCommand::KeyUp(EngineKey::LEFT).key(), EngineKey::LEFT);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            BridgeError::QueueFull { capacity: 4 }.to_string(),
            "engine command queue full (capacity 4)"
        );
        assert_eq!(BridgeError::Disconnected.to_string(), "engine command queue disconnected");
    }

    #[test]
    fn bridge_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<BridgeError>();
    }
}
