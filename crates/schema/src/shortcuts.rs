//! Shortcut constructors for common format fields
//!
//! These mirror the fixed-width integer and float vocabulary every binary
//! layout ends up needing, so call sites read `Descriptor::uint16_be()`
//! instead of spelling out format strings.

use crate::Descriptor;

impl Descriptor {
    /// Unsigned 8-bit integer.
    pub fn uint8() -> Self {
        Self::format_field(">B", 1)
    }

    /// Signed 8-bit integer.
    pub fn int8() -> Self {
        Self::format_field(">b", 1)
    }

    /// Unsigned big-endian 16-bit integer.
    pub fn uint16_be() -> Self {
        Self::format_field(">H", 2)
    }

    /// Unsigned little-endian 16-bit integer.
    pub fn uint16_le() -> Self {
        Self::format_field("<H", 2)
    }

    /// Signed big-endian 16-bit integer.
    pub fn int16_be() -> Self {
        Self::format_field(">h", 2)
    }

    /// Signed little-endian 16-bit integer.
    pub fn int16_le() -> Self {
        Self::format_field("<h", 2)
    }

    /// Unsigned big-endian 32-bit integer.
    pub fn uint32_be() -> Self {
        Self::format_field(">L", 4)
    }

    /// Unsigned little-endian 32-bit integer.
    pub fn uint32_le() -> Self {
        Self::format_field("<L", 4)
    }

    /// Signed big-endian 32-bit integer.
    pub fn int32_be() -> Self {
        Self::format_field(">l", 4)
    }

    /// Signed little-endian 32-bit integer.
    pub fn int32_le() -> Self {
        Self::format_field("<l", 4)
    }

    /// Unsigned big-endian 64-bit integer.
    pub fn uint64_be() -> Self {
        Self::format_field(">Q", 8)
    }

    /// Unsigned little-endian 64-bit integer.
    pub fn uint64_le() -> Self {
        Self::format_field("<Q", 8)
    }

    /// Signed big-endian 64-bit integer.
    pub fn int64_be() -> Self {
        Self::format_field(">q", 8)
    }

    /// Signed little-endian 64-bit integer.
    pub fn int64_le() -> Self {
        Self::format_field("<q", 8)
    }

    /// Big-endian IEEE 754 single-precision float.
    pub fn float32_be() -> Self {
        Self::format_field(">f", 4)
    }

    /// Little-endian IEEE 754 single-precision float.
    pub fn float32_le() -> Self {
        Self::format_field("<f", 4)
    }

    /// Big-endian IEEE 754 double-precision float.
    pub fn float64_be() -> Self {
        Self::format_field(">d", 8)
    }

    /// Little-endian IEEE 754 double-precision float.
    pub fn float64_le() -> Self {
        Self::format_field("<d", 8)
    }
}
