//! I/O Control-Code Codec
//!
//! A control code is a packed 32-bit integer identifying one device
//! operation, following the host convention:
//!
//! ```text
//! ┌────────────────┬────────┬─────────────┬────────┐
//! │ 31          16 │ 15  14 │ 13        2 │ 1    0 │
//! │  device type   │ access │  function   │ method │
//! └────────────────┴────────┴─────────────┴────────┘
//! ```
//!
//! Codes are encoded with `const fn` so the device's well-known
//! operations are compile-time constants and can be matched on.

use bitflags::bitflags;

bitflags! {
    /// Access the caller must hold on the device handle for a request
    /// to be delivered. The empty set means any access is acceptable.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Access: u32 {
        /// Caller must be able to read from the device.
        const READ_DATA = 1 << 0;
        /// Caller must be able to write to the device.
        const WRITE_DATA = 1 << 1;
    }
}

/// How request buffers travel between caller and device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum TransferMethod {
    /// Input and output pass through system-copied intermediate buffers.
    Buffered = 0,
    /// Direct transfer, input described by a memory descriptor.
    InDirect = 1,
    /// Direct transfer, output described by a memory descriptor.
    OutDirect = 2,
    /// Raw caller buffers, no system copy.
    Neither = 3,
}

/// Device type for devices with no more specific class.
pub const DEVICE_UNKNOWN: u16 = 0x0022;

/// First function number available to vendor-defined operations.
pub const FUNCTION_VENDOR_BASE: u16 = 0x800;

/// A packed 32-bit I/O control code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct ControlCode(u32);

impl ControlCode {
    /// Pack a control code from its four fields.
    ///
    /// The function number occupies 12 bits; higher bits are masked off.
    pub const fn new(
        device_type: u16,
        access: Access,
        function: u16,
        method: TransferMethod,
    ) -> Self {
        Self(
            (device_type as u32) << 16
                | access.bits() << 14
                | ((function as u32) & 0xFFF) << 2
                | method as u32,
        )
    }

    /// Reinterpret a raw 32-bit value as a control code.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the packed 32-bit value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Extract the device type field.
    #[inline]
    pub const fn device_type(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Extract the required-access field.
    #[inline]
    pub const fn access(self) -> Access {
        Access::from_bits_truncate((self.0 >> 14) & 0b11)
    }

    /// Extract the function number.
    #[inline]
    pub const fn function(self) -> u16 {
        ((self.0 >> 2) & 0xFFF) as u16
    }

    /// Extract the transfer method.
    #[inline]
    pub const fn method(self) -> TransferMethod {
        match self.0 & 0b11 {
            0 => TransferMethod::Buffered,
            1 => TransferMethod::InDirect,
            2 => TransferMethod::OutDirect,
            _ => TransferMethod::Neither,
        }
    }
}

/// The one operation this device implements: translate an ASCII digit
/// into its ideographic numeral glyph.
pub const IOCTL_DIGIT_TO_GLYPH: ControlCode = ControlCode::new(
    DEVICE_UNKNOWN,
    Access::empty(),
    FUNCTION_VENDOR_BASE,
    TransferMethod::Buffered,
);
