//! Device Construction
//!
//! Builds the character device and its software resources: publish the
//! discovery interface, then create the default I/O queue that feeds
//! the control pipeline.
//!
//! # Design
//! - All state lives in the returned [`Device`] handle; there are no
//!   process-wide singletons, and configuration is passed in explicitly
//! - The queue sits behind a spinlock so a shared device handle still
//!   delivers requests one at a time, preserving the sequential
//!   dispatch contract

mod interface;

pub use interface::{InterfaceId, DIGIT_TO_GLYPH_INTERFACE};

use log::debug;
use spin::Mutex;

use crate::queue::{Queue, QueueConfig, QueueError};
use crate::request::{Completion, ControlRequest};

/// Device construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct DeviceConfig {
    /// Interface id published for client discovery.
    pub interface: InterfaceId,
    /// Configuration for the default I/O queue.
    pub queue: QueueConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            interface: DIGIT_TO_GLYPH_INTERFACE,
            queue: QueueConfig::default(),
        }
    }
}

/// Error building a device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeviceError {
    /// The default I/O queue could not be constructed.
    QueueCreate(QueueError),
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::QueueCreate(err) => write!(f, "queue creation failed: {}", err),
        }
    }
}

impl From<QueueError> for DeviceError {
    fn from(err: QueueError) -> Self {
        Self::QueueCreate(err)
    }
}

/// The digit-to-glyph character device.
///
/// Holds the published interface id and the default sequential queue.
#[derive(Debug)]
pub struct Device {
    interface: InterfaceId,
    queue: Mutex<Queue>,
}

impl Device {
    /// Create the device and its software resources.
    ///
    /// Publishes the configured interface id, then builds the default
    /// I/O queue. Fails if the queue configuration is unsupported.
    pub fn create(config: DeviceConfig) -> Result<Self, DeviceError> {
        let queue = Queue::new(config.queue)?;
        debug!("device interface {} published", config.interface);

        Ok(Self {
            interface: config.interface,
            queue: Mutex::new(queue),
        })
    }

    /// The interface id clients use to locate this device.
    #[inline]
    pub const fn interface(&self) -> InterfaceId {
        self.interface
    }

    /// Deliver one control request to the default queue.
    ///
    /// The request is fully resolved, and its completion issued, before
    /// this returns.
    pub fn submit<R: ControlRequest>(&self, request: &mut R) -> Completion {
        self.queue.lock().submit(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GLYPHS;
    use crate::ioctl::IOCTL_DIGIT_TO_GLYPH;
    use crate::queue::DispatchMode;
    use crate::request::mock::MockRequest;
    use crate::request::CompletionStatus;

    #[test]
    fn default_config_builds_a_working_device() {
        let device = Device::create(DeviceConfig::default()).unwrap();
        assert_eq!(device.interface(), DIGIT_TO_GLYPH_INTERFACE);

        let mut request = MockRequest::new(IOCTL_DIGIT_TO_GLYPH, b"5", 2);
        let completion = device.submit(&mut request);

        assert_eq!(completion.status(), CompletionStatus::Success);
        assert_eq!(completion.bytes_written(), 2);
        assert_eq!(request.output(), &GLYPHS[5].to_le_bytes());
    }

    #[test]
    fn unsupported_queue_config_fails_device_creation() {
        let config = DeviceConfig {
            queue: QueueConfig {
                dispatch_mode: DispatchMode::Parallel,
            },
            ..DeviceConfig::default()
        };
        assert_eq!(
            Device::create(config).unwrap_err(),
            DeviceError::QueueCreate(QueueError::UnsupportedDispatchMode)
        );
    }

    #[test]
    fn custom_interface_ids_are_respected() {
        let interface = InterfaceId::new(0x1234_5678, 0x9abc, 0xdef0, [1, 2, 3, 4, 5, 6, 7, 8]);
        let config = DeviceConfig {
            interface,
            ..DeviceConfig::default()
        };
        let device = Device::create(config).unwrap();
        assert_eq!(device.interface(), interface);
    }
}
