//=========================================================================
// Command Queue
//=========================================================================
//
// Channel carrying deferred engine commands from the input-dispatch
// context to the engine-owning context.
//
// Architecture:
//   KeyListener → CommandSender ──channel──► CommandQueue → EngineBoundary
//
// The sending side never blocks. A bounded queue drops commands when full.
// The receiving side drains in arrival order, bounded per call so a
// flood of input cannot starve the engine's frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::interface::{BridgeError, EngineBoundary, EngineCommand};

//=== QueueConfig =========================================================

/// Sizing of the command channel and per-frame drain limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// `None` for an unbounded queue.
    pub capacity: Option<usize>,

    /// Upper bound on commands executed by one [`CommandQueue::run_pending`].
    pub max_commands_per_frame: usize,
}

impl QueueConfig {
    pub const DEFAULT_MAX_COMMANDS_PER_FRAME: usize = 256;
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            max_commands_per_frame: Self::DEFAULT_MAX_COMMANDS_PER_FRAME,
        }
    }
}

/// Creates a connected sender/queue pair.
///
/// A capacity of zero is raised to one; a rendezvous channel would refuse
/// every non-blocking send.
pub fn command_queue(config: QueueConfig) -> (CommandSender, CommandQueue) {
    let capacity = config.capacity.map(|capacity| capacity.max(1));
    let (sender, receiver) = match capacity {
        Some(capacity) => bounded(capacity),
        None => unbounded(),
    };

    (
        CommandSender { sender, capacity },
        CommandQueue {
            receiver,
            max_commands_per_frame: config.max_commands_per_frame.max(1),
        },
    )
}

//=== CommandSender =======================================================

/// Input-side handle of the command queue.
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: Sender<EngineCommand>,
    capacity: Option<usize>,
}

impl CommandSender {
    /// Queues one command without blocking.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::QueueFull`] if a bounded queue has no room
    /// - [`BridgeError::Disconnected`] if the engine side is gone
    pub fn enqueue(&self, command: EngineCommand) -> Result<(), BridgeError> {
        match self.sender.try_send(command) {
            Ok(()) => {
                trace!(target: "bridge::queue", "Queued {:?}", command);
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(BridgeError::QueueFull {
                capacity: self.capacity.unwrap_or_default(),
            }),
            Err(TrySendError::Disconnected(_)) => Err(BridgeError::Disconnected),
        }
    }

    /// Number of commands waiting on the engine side.
    pub fn pending(&self) -> usize {
        self.sender.len()
    }
}

//=== DrainControl ========================================================

/// Result of one drain pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainControl {
    /// Senders still exist; call again next frame.
    Continue { executed: usize },

    /// Every sender is gone and the queue is empty.
    Exit { executed: usize },
}

impl DrainControl {
    pub const fn executed(self) -> usize {
        match self {
            Self::Continue { executed } | Self::Exit { executed } => executed,
        }
    }
}

//=== CommandQueue ========================================================

/// Engine-side end of the command queue.
///
/// Owned by whichever context is allowed to touch the engine.
#[derive(Debug)]
pub struct CommandQueue {
    receiver: Receiver<EngineCommand>,
    max_commands_per_frame: usize,
}

impl CommandQueue {
    /// Runs queued commands against `boundary`, oldest first.
    ///
    /// Never blocks. Executes at most `max_commands_per_frame` commands;
    /// anything beyond that stays queued for the next call.
    pub fn run_pending<B: EngineBoundary + ?Sized>(&self, boundary: &mut B) -> DrainControl {
        let mut executed = 0;

        while executed < self.max_commands_per_frame {
            match self.receiver.try_recv() {
                Ok(command) => {
                    command.apply(boundary);
                    executed += 1;
                }
                Err(TryRecvError::Empty) => return DrainControl::Continue { executed },
                Err(TryRecvError::Disconnected) => return DrainControl::Exit { executed },
            }
        }

        if !self.receiver.is_empty() {
            warn!(
                target: "bridge::queue",
                "Command backlog: executed {} commands, {} still queued",
                executed,
                self.receiver.len()
            );
        }

        DrainControl::Continue { executed }
    }

    /// Blocks until the next command arrives.
    ///
    /// Returns `None` once every sender has been dropped and the queue
    /// is empty.
    pub fn next_blocking(&self) -> Option<EngineCommand> {
        self.receiver.recv().ok()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
