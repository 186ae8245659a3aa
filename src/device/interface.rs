//! Device Interface Identifier
//!
//! Client processes locate the device through a well-known 128-bit
//! interface identifier published at device creation. The identifier
//! is opaque to the core; it only needs to be stable and displayable.

/// A 128-bit device interface identifier.
///
/// Field layout follows the conventional GUID grouping so the
/// well-known constant below reads the same as in client registries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InterfaceId {
    data1: u32,
    data2: u16,
    data3: u16,
    data4: [u8; 8],
}

impl InterfaceId {
    /// Build an identifier from its four groups.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }
}

impl core::fmt::Display for InterfaceId {
    /// Canonical lowercase form: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

/// The interface id clients use to find the digit-to-glyph device.
pub const DIGIT_TO_GLYPH_INTERFACE: InterfaceId = InterfaceId::new(
    0x6d04_c778,
    0xe912,
    0x463b,
    [0xb6, 0x36, 0x4e, 0x22, 0x13, 0x4f, 0x25, 0xdd],
);
