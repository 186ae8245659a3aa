//! glyphdev - Digit-to-Glyph Character Device Core
//!
//! A minimal character-device control pipeline: the one supported
//! control operation translates an ASCII digit ('0'-'9') into the
//! matching ideographic numeral glyph, delivered as a single two-byte
//! code unit.
//!
//! # Pipeline
//! - Admission: input/output region sizes are validated before any
//!   data is read
//! - Translation: the first input byte is classified and mapped
//!   through a fixed ten-entry table
//! - Completion: every request resolves to exactly one terminal status
//!
//! # Security Model
//! - All request parameters are validated before use
//! - Invalid inputs complete with an error status, never a panic
//! - Collaborator faults are kept distinct from caller errors
//! - No shared mutable state between requests; the glyph table is a
//!   compile-time constant
//!
//! # Architecture
//! - `no_std` core; host std is only linked by the test harness
//! - The request handle is a trait seam ([`ControlRequest`]) so the
//!   pipeline can be driven by an in-memory fake under test
//! - Device and queue handles are built from explicit configuration,
//!   never process-wide state

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod device;
pub mod glyph;
pub mod ioctl;
pub mod queue;
pub mod request;

pub use device::{Device, DeviceConfig, DeviceError, InterfaceId, DIGIT_TO_GLYPH_INTERFACE};
pub use ioctl::{ControlCode, IOCTL_DIGIT_TO_GLYPH};
pub use queue::{DispatchMode, Queue, QueueConfig, QueueError};
pub use request::{Completion, CompletionStatus, ControlRequest, RequestError};
