//! I/O Queue
//!
//! Queue construction and per-request delivery for the device-control
//! pipeline.
//!
//! # Dispatch model
//! - Requests are delivered one at a time, in submission order
//! - Each request runs the whole pipeline synchronously and is
//!   completed before `submit` returns, so completions are observed in
//!   admission order
//! - No step blocks, sleeps, or spawns work; there is no cancelable
//!   window

mod handler;
mod validate;

pub use handler::dispatch;

use crate::request::{Completion, ControlRequest};

/// How a queue delivers requests to the pipeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DispatchMode {
    /// One request at a time, in submission order.
    Sequential,
    /// Overlapping delivery. The pipeline's ordering guarantee depends
    /// on non-overlapping delivery, so this mode is not supported.
    Parallel,
}

/// Queue construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct QueueConfig {
    /// Requested delivery mode.
    pub dispatch_mode: DispatchMode,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            dispatch_mode: DispatchMode::Sequential,
        }
    }
}

/// Error constructing a queue.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QueueError {
    /// The requested dispatch mode is not supported by this device.
    UnsupportedDispatchMode,
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedDispatchMode => write!(f, "unsupported dispatch mode"),
        }
    }
}

/// The device's default I/O queue.
///
/// Submitting a request runs it through dispatch, admission, and
/// translation, and issues its single completion before returning.
#[derive(Debug)]
pub struct Queue {
    config: QueueConfig,
}

impl Queue {
    /// Build a queue from an explicit configuration.
    ///
    /// # Returns
    /// The queue, or [`QueueError::UnsupportedDispatchMode`] if the
    /// configuration asks for overlapping delivery.
    pub fn new(config: QueueConfig) -> Result<Self, QueueError> {
        match config.dispatch_mode {
            DispatchMode::Sequential => Ok(Self { config }),
            DispatchMode::Parallel => Err(QueueError::UnsupportedDispatchMode),
        }
    }

    /// Get the delivery mode this queue was built with.
    #[inline]
    pub const fn dispatch_mode(&self) -> DispatchMode {
        self.config.dispatch_mode
    }

    /// Deliver one request to the pipeline.
    ///
    /// Takes `&mut self`: delivery through one queue is exclusive, so
    /// two requests can never be in flight at once.
    pub fn submit<R: ControlRequest>(&mut self, request: &mut R) -> Completion {
        handler::dispatch(request)
    }
}
