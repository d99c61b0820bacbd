//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level key events) with the engine's worker thread.
//
// Architecture:
// ```text
//  Main Thread:                     Engine Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  winit Event Loop        │    │  EngineWorker    │
//  │   ↓                      │    │   ↓              │
//  │  KeyProcessor            │    │  EngineBoundary  │
//  │   └─ winit → platform    │    │   key_down()     │
//  │   ↓                      │    │   key_up()       │
//  │  KeyListener             │    │                  │
//  │   ├─ translate           │    └──────────────────┘
//  │   └─ enqueue ────────────┼─────────────┘
//  └──────────────────────────┘    EngineCommand
// ```
//
// Notes:
// - Commands are queued per event, not batched per frame, so engine
//   order always matches input order.
// - On close the listener is dropped, which disconnects the queue and
//   lets the worker thread finish.
// - winit requires the main thread on macOS/iOS, so this runs on the
//   thread that called `KeyBridge::run()`.
// - On Android the loop must be built from the `AndroidApp` passed to
//   `android_main`; see `KeyBridge::run_android()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod key_processor;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};
#[cfg(target_os = "android")]
use winit::platform::android::{activity::AndroidApp, EventLoopBuilderExtAndroid};

//=== Internal Imports ====================================================

use crate::core::engine_bridge::BridgeError;
use crate::core::input::{InputStatus, KeyListener};
use key_processor::KeyProcessor;

//=== Platform ============================================================

/// Window owner and key event source.
///
/// Not Send/Sync; it stays on the main thread and talks to the engine
/// only through the listener's queue.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Dropped on close to disconnect the engine queue.
    listener: Option<KeyListener>,

    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform; the window is created lazily in `resumed()`.
    pub(crate) fn new(listener: KeyListener, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            listener: Some(listener),
            title: title.into(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs `event_loop` until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::EventLoop`] if the loop fails while running.
    pub(crate) fn run(mut self, event_loop: EventLoop<()>) -> Result<(), BridgeError> {
        debug!(target: "platform", "Starting winit event loop");

        event_loop.run_app(&mut self)?;

        // Loop may return without CloseRequested (e.g. OS shutdown)
        self.shutdown();
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    fn handle_key(&self, key_event: &winit::event::KeyEvent) -> InputStatus {
        let Some(listener) = &self.listener else {
            return InputStatus::Unhandled;
        };

        match KeyProcessor::process_key_event(key_event) {
            Some(event) => {
                let status = listener.on_key(&event);
                trace!(target: "platform", "{:?} -> {:?}", event, status);
                status
            }
            None => {
                trace!(target: "platform", "Unmapped key ignored");
                InputStatus::Unhandled
            }
        }
    }

    fn shutdown(&mut self) {
        if self.listener.take().is_some() {
            info!(target: "platform", "Key listener released, engine queue disconnected");
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Event Loop Construction =============================================

/// Creates the desktop event loop.
#[cfg(not(target_os = "android"))]
pub(crate) fn create_event_loop() -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::new()
}

/// Creates the event loop for the `AndroidApp` handed to `android_main`.
///
/// winit cannot build an Android loop without it.
#[cfg(target_os = "android")]
pub(crate) fn create_event_loop(app: AndroidApp) -> Result<EventLoop<()>, EventLoopError> {
    EventLoop::builder().with_android_app(app).build()
}

//=== winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called on startup and on every mobile resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_key(key_event);
            }

            _ => {
                // Ignore: Resized, Focused, pointer input, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
