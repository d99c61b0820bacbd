//=========================================================================
// Engine Worker
//
// Dedicated thread that owns the engine boundary and executes queued
// commands as they arrive.
//
// Lifecycle:
//  1. `spawn()` moves the queue and boundary onto a named thread
//  2. The thread blocks on the queue, applying commands in order
//  3. Once every `CommandSender` is dropped, the loop ends
//  4. `join()` returns the boundary to the caller
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;

//=== External Crates =====================================================
use log::{debug, error, info};

//=== Internal Modules ====================================================
use super::command_queue::CommandQueue;
use super::interface::{BridgeError, EngineBoundary};

//=== EngineWorker ========================================================

/// Handle to the engine-owning thread.
#[derive(Debug)]
pub struct EngineWorker<B> {
    handle: thread::JoinHandle<B>,
}

impl<B> EngineWorker<B>
where
    B: EngineBoundary + Send + 'static,
{
    /// Default thread name.
    pub const DEFAULT_NAME: &'static str = "engine-input";

    /// Spawns a worker with the default thread name.
    pub fn spawn(queue: CommandQueue, boundary: B) -> Result<Self, BridgeError> {
        Self::spawn_named(Self::DEFAULT_NAME, queue, boundary)
    }

    /// Spawns a worker thread called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::WorkerSpawn`] if the OS refuses the thread.
    pub fn spawn_named(
        name: impl Into<String>,
        queue: CommandQueue,
        mut boundary: B,
    ) -> Result<Self, BridgeError> {
        let name = name.into();

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                info!(target: "bridge::worker", "Engine worker '{}' started", name);

                let mut executed: u64 = 0;
                while let Some(command) = queue.next_blocking() {
                    debug!(target: "bridge::worker", "Executing {:?}", command);
                    command.apply(&mut boundary);
                    executed += 1;
                }

                info!(
                    target: "bridge::worker",
                    "Engine worker '{}' exiting after {} commands",
                    name,
                    executed
                );
                boundary
            })
            .map_err(BridgeError::WorkerSpawn)?;

        Ok(Self { handle })
    }
}

impl<B> EngineWorker<B> {
    /// Waits for the worker to finish and returns its boundary.
    ///
    /// The worker only finishes after every sender has been dropped, so
    /// drop the listener (or all `CommandSender` clones) first.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::WorkerPanicked`] if the boundary panicked.
    pub fn join(self) -> Result<B, BridgeError> {
        self.handle.join().map_err(|_| {
            error!(target: "bridge::worker", "Engine worker panicked");
            BridgeError::WorkerPanicked
        })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine_bridge::{command_queue, EngineCommand, QueueConfig};
    use crate::core::input::event::EngineKey;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(EngineCommand, Option<String>)>,
    }

    impl EngineBoundary for Recorder {
        fn key_down(&mut self, key: EngineKey) {
            let thread = thread::current().name().map(str::to_owned);
            self.calls.push((EngineCommand::KeyDown(key), thread));
        }

        fn key_up(&mut self, key: EngineKey) {
            let thread = thread::current().name().map(str::to_owned);
            self.calls.push((EngineCommand::KeyUp(key), thread));
        }
    }

    struct Exploding;

    impl EngineBoundary for Exploding {
        fn key_down(&mut self, _key: EngineKey) {
            panic!("engine crashed");
        }

        fn key_up(&mut self, _key: EngineKey) {}
    }

    #[test]
    fn worker_runs_commands_on_its_own_thread() {
        let (tx, queue) = command_queue(QueueConfig::default());
        let worker = EngineWorker::spawn_named("test-engine", queue, Recorder::default()).unwrap();

        tx.enqueue(EngineCommand::KeyDown(EngineKey::UP)).unwrap();
        tx.enqueue(EngineCommand::KeyUp(EngineKey::UP)).unwrap();
        drop(tx);

        let recorder = worker.join().unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                (EngineCommand::KeyDown(EngineKey::UP), Some("test-engine".to_string())),
                (EngineCommand::KeyUp(EngineKey::UP), Some("test-engine".to_string())),
            ]
        );
    }

    #[test]
    fn worker_exits_when_no_senders_remain() {
        let (tx, queue) = command_queue(QueueConfig::default());
        let worker = EngineWorker::spawn(queue, Recorder::default()).unwrap();
        drop(tx);

        let recorder = worker.join().unwrap();
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn worker_stays_alive_while_a_clone_exists() {
        let (tx, queue) = command_queue(QueueConfig::default());
        let worker = EngineWorker::spawn(queue, Recorder::default()).unwrap();

        let clone = tx.clone();
        drop(tx);
        clone.enqueue(EngineCommand::KeyDown(EngineKey::Z)).unwrap();
        drop(clone);

        let recorder = worker.join().unwrap();
        assert_eq!(recorder.calls.len(), 1);
        assert_eq!(recorder.calls[0].0, EngineCommand::KeyDown(EngineKey::Z));
    }

    #[test]
    fn join_reports_boundary_panic() {
        let (tx, queue) = command_queue(QueueConfig::default());
        let worker = EngineWorker::spawn(queue, Exploding).unwrap();

        tx.enqueue(EngineCommand::KeyDown(EngineKey::D)).unwrap();
        drop(tx);

        assert!(matches!(worker.join(), Err(BridgeError::WorkerPanicked)));
    }
}
