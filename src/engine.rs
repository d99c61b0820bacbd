//=========================================================================
// Key Bridge
//
// Entry point that wires the listener, the command queue, and the
// engine context together.
//
// Architecture:
// ```text
//     KeyBridgeBuilder  ──build()──>  KeyBridge ──┬─ connect()      → listener + queue
//         │                                       ├─ spawn_worker() → listener + worker
//         ├─ with_queue_capacity()                └─ run() / run_android() → window + worker
//         ├─ with_max_commands_per_frame()
//         ├─ with_window_title()
//         └─ with_worker_name()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};
#[cfg(target_os = "android")]
use winit::platform::android::activity::AndroidApp;
use winit::{error::EventLoopError, event_loop::EventLoop};

//=== Internal Dependencies ===============================================

use crate::core::engine_bridge::{
    command_queue, BridgeError, CommandQueue, EngineBoundary, EngineWorker, QueueConfig,
};
use crate::core::input::KeyListener;
use crate::platform::{self, Platform};

//=== KeyBridgeBuilder ====================================================

/// Builder for configuring a [`KeyBridge`].
///
/// # Default Values
///
/// - **Queue capacity**: unbounded
/// - **Commands per frame**: 256
/// - **Window title**: "key_bridge"
/// - **Worker name**: "engine-input"
///
/// # Examples
///
/// ```no_run
/// use key_bridge::prelude::*;
///
/// struct Game;
///
/// impl EngineBoundary for Game {
///     fn key_down(&mut self, key: EngineKey) { println!("down {key}"); }
///     fn key_up(&mut self, key: EngineKey) { println!("up {key}"); }
/// }
///
/// KeyBridgeBuilder::new()
///     .with_window_title("Game")
///     .build()
///     .run(Game)
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct KeyBridgeBuilder {
    queue: QueueConfig,
    window_title: String,
    worker_name: String,
}

impl KeyBridgeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            queue: QueueConfig::default(),
            window_title: "key_bridge".to_string(),
            worker_name: "engine-input".to_string(),
        }
    }

    /// Bounds the command queue.
    ///
    /// When full, further commands are dropped (and logged) rather than
    /// blocking the input thread.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be positive");
        self.queue.capacity = Some(capacity);
        self
    }

    /// Limits how many commands one [`CommandQueue::run_pending`] executes.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_commands_per_frame(mut self, max: usize) -> Self {
        assert!(max > 0, "Commands per frame must be positive");
        self.queue.max_commands_per_frame = max;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_worker_name(mut self, name: impl Into<String>) -> Self {
        self.worker_name = name.into();
        self
    }

    pub fn build(self) -> KeyBridge {
        info!(
            target: "bridge",
            "Building key bridge (queue capacity: {:?}, per frame: {})",
            self.queue.capacity, self.queue.max_commands_per_frame
        );

        KeyBridge {
            queue: self.queue,
            window_title: self.window_title,
            worker_name: self.worker_name,
        }
    }
}

impl Default for KeyBridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== KeyBridge ===========================================================

/// Configured bridge, ready to be connected to an engine.
#[derive(Debug, Clone)]
pub struct KeyBridge {
    queue: QueueConfig,
    window_title: String,
    worker_name: String,
}

impl KeyBridge {
    pub fn queue_config(&self) -> QueueConfig {
        self.queue
    }

    /// Creates a listener and the queue it feeds.
    ///
    /// For hosts that already own an engine loop: hand the listener to the
    /// input side and call [`CommandQueue::run_pending`] once per frame on
    /// the engine side.
    pub fn connect(&self) -> (KeyListener, CommandQueue) {
        let (sender, queue) = command_queue(self.queue);
        (KeyListener::new(sender), queue)
    }

    /// Creates a listener whose commands run on a dedicated worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::WorkerSpawn`] if the thread cannot start.
    pub fn spawn_worker<B>(&self, boundary: B) -> Result<(KeyListener, EngineWorker<B>), BridgeError>
    where
        B: EngineBoundary + Send + 'static,
    {
        let (listener, queue) = self.connect();
        let worker = EngineWorker::spawn_named(self.worker_name.clone(), queue, boundary)?;
        info!(target: "bridge", "Engine worker '{}' spawned", self.worker_name);
        Ok((listener, worker))
    }

    /// Opens a window, forwards its key events to `boundary` on a worker
    /// thread, and blocks until the window closes.
    ///
    /// Returns the boundary once the worker has executed every queued
    /// command.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::WorkerSpawn`] if the worker cannot start
    /// - [`BridgeError::EventLoop`] if the platform loop fails
    /// - [`BridgeError::WorkerPanicked`] if the boundary panicked
    #[cfg(not(target_os = "android"))]
    pub fn run<B>(self, boundary: B) -> Result<B, BridgeError>
    where
        B: EngineBoundary + Send + 'static,
    {
        self.run_with(boundary, platform::create_event_loop)
    }

    /// Android counterpart of [`KeyBridge::run`], driven by the `AndroidApp`
    /// received in `android_main`.
    ///
    /// # Errors
    ///
    /// Same as [`KeyBridge::run`].
    #[cfg(target_os = "android")]
    pub fn run_android<B>(self, app: AndroidApp, boundary: B) -> Result<B, BridgeError>
    where
        B: EngineBoundary + Send + 'static,
    {
        self.run_with(boundary, move || platform::create_event_loop(app))
    }

    fn run_with<B, F>(self, boundary: B, create_event_loop: F) -> Result<B, BridgeError>
    where
        B: EngineBoundary + Send + 'static,
        F: FnOnce() -> Result<EventLoop<()>, EventLoopError>,
    {
        info!(target: "bridge", "Starting key bridge runtime");

        //--- 1. Spawn the engine worker ----------------------------------
        let (listener, worker) = self.spawn_worker(boundary)?;

        //--- 2. Run the platform (blocks) ---------------------------------
        let platform_result = match create_event_loop() {
            Ok(event_loop) => Platform::new(listener, self.window_title).run(event_loop),
            Err(e) => {
                // Worker only exits once the listener is gone
                drop(listener);
                Err(BridgeError::from(e))
            }
        };
        if let Err(e) = &platform_result {
            error!(target: "bridge", "Platform error: {}", e);
        }

        //--- 3. Wait for the worker to drain -----------------------------
        let boundary = worker.join()?;
        info!(target: "bridge", "Key bridge shutdown complete");

        platform_result.map(|()| boundary)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
