//! Field-format vocabulary
//!
//! Format-field descriptors carry a packing string in the style of the
//! C `struct` mini-language: an endianness prefix followed by one or
//! more format characters. The tables in this module give the renderer
//! words for both halves. Only a handful of the format characters are
//! produced by the shortcut constructors, but the whole table is
//! carried so hand-built descriptors render just as well.

use std::fmt;

/// Extension name, used for log scoping and page metadata.
pub const DOMAIN: &str = "fieldguide";

// ═══════════════════════════════════════════════════════════════════════════
// Vocabulary
// ═══════════════════════════════════════════════════════════════════════════

/// Whether a format character carries a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// Signed two's-complement value.
    Signed,
    /// Unsigned value.
    Unsigned,
    /// Sign does not apply (padding, characters, byte strings).
    Undefined,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
            Signedness::Undefined => "unspecified",
        };
        write!(f, "{word}")
    }
}

/// Byte order selected by an endianness prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Host byte order.
    Native,
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Endianness::Native => "native",
            Endianness::Little => "little",
            Endianness::Big => "big",
        };
        write!(f, "{word}")
    }
}

/// Whether field sizes follow the host ABI or the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMode {
    /// Sizes as the host ABI defines them.
    Native,
    /// Fixed standard sizes.
    Standard,
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            SizeMode::Native => "native",
            SizeMode::Standard => "standard",
        };
        write!(f, "{word}")
    }
}

/// Alignment behavior selected by an endianness prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Fields aligned as the host ABI would align them.
    Native,
    /// No alignment, fields are packed.
    None,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Alignment::Native => "native",
            Alignment::None => "none",
        };
        write!(f, "{word}")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════════════════════════════════════

/// What an endianness prefix says about byte order, sizing and
/// alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndianSpec {
    /// Byte order of the fields that follow.
    pub endian: Endianness,
    /// Size mode of the fields that follow.
    pub size: SizeMode,
    /// Alignment of the fields that follow.
    pub align: Alignment,
}

/// What a single format character describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Corresponding C type, where one exists.
    pub c_type: Option<&'static str>,
    /// Type the decoded value is naturally represented as.
    pub rust_type: &'static str,
    /// Standard size in bytes, where the character has one.
    pub std_size: Option<u32>,
    /// Sign of the decoded value.
    pub signed: Signedness,
}

/// Look up the meaning of an endianness prefix.
///
/// Returns `None` for characters that are not endianness prefixes.
pub fn endian_spec(prefix: char) -> Option<&'static EndianSpec> {
    match prefix {
        '@' => Some(&EndianSpec {
            endian: Endianness::Native,
            size: SizeMode::Native,
            align: Alignment::Native,
        }),
        '=' => Some(&EndianSpec {
            endian: Endianness::Native,
            size: SizeMode::Standard,
            align: Alignment::None,
        }),
        '<' => Some(&EndianSpec {
            endian: Endianness::Little,
            size: SizeMode::Standard,
            align: Alignment::None,
        }),
        '>' => Some(&EndianSpec {
            endian: Endianness::Big,
            size: SizeMode::Standard,
            align: Alignment::None,
        }),
        // Network order is big-endian.
        '!' => Some(&EndianSpec {
            endian: Endianness::Big,
            size: SizeMode::Standard,
            align: Alignment::None,
        }),
        _ => None,
    }
}

/// Look up the meaning of a format character.
///
/// Returns `None` for characters outside the format alphabet.
pub fn format_spec(format: char) -> Option<&'static FormatSpec> {
    match format {
        'x' => Some(&FormatSpec {
            c_type: Some("pad byte"),
            rust_type: "none",
            std_size: None,
            signed: Signedness::Undefined,
        }),
        'c' => Some(&FormatSpec {
            c_type: Some("char"),
            rust_type: "u8",
            std_size: Some(1),
            signed: Signedness::Undefined,
        }),
        'b' => Some(&FormatSpec {
            c_type: Some("signed char"),
            rust_type: "i8",
            std_size: Some(1),
            signed: Signedness::Signed,
        }),
        'B' => Some(&FormatSpec {
            c_type: Some("unsigned char"),
            rust_type: "u8",
            std_size: Some(1),
            signed: Signedness::Unsigned,
        }),
        '?' => Some(&FormatSpec {
            c_type: Some("_Bool"),
            rust_type: "bool",
            std_size: Some(1),
            signed: Signedness::Undefined,
        }),
        'h' => Some(&FormatSpec {
            c_type: Some("short"),
            rust_type: "i16",
            std_size: Some(2),
            signed: Signedness::Signed,
        }),
        'H' => Some(&FormatSpec {
            c_type: Some("unsigned short"),
            rust_type: "u16",
            std_size: Some(2),
            signed: Signedness::Unsigned,
        }),
        'i' => Some(&FormatSpec {
            c_type: Some("int"),
            rust_type: "i32",
            std_size: Some(4),
            signed: Signedness::Signed,
        }),
        'I' => Some(&FormatSpec {
            c_type: Some("unsigned int"),
            rust_type: "u32",
            std_size: Some(4),
            signed: Signedness::Unsigned,
        }),
        'l' => Some(&FormatSpec {
            c_type: Some("long"),
            rust_type: "i32",
            std_size: Some(4),
            signed: Signedness::Signed,
        }),
        'L' => Some(&FormatSpec {
            c_type: Some("unsigned long"),
            rust_type: "u32",
            std_size: Some(4),
            signed: Signedness::Unsigned,
        }),
        'q' => Some(&FormatSpec {
            c_type: Some("long long"),
            rust_type: "i64",
            std_size: Some(8),
            signed: Signedness::Signed,
        }),
        'Q' => Some(&FormatSpec {
            c_type: Some("unsigned long long"),
            rust_type: "u64",
            std_size: Some(8),
            signed: Signedness::Unsigned,
        }),
        'n' => Some(&FormatSpec {
            c_type: Some("ssize_t"),
            rust_type: "isize",
            std_size: None,
            signed: Signedness::Signed,
        }),
        'N' => Some(&FormatSpec {
            c_type: Some("size_t"),
            rust_type: "usize",
            std_size: None,
            signed: Signedness::Unsigned,
        }),
        // Half precision has no standard C type. Floats carry a sign
        // bit but no signedness in the two's-complement sense, so the
        // sign column stays open for all three.
        'e' => Some(&FormatSpec {
            c_type: None,
            rust_type: "f32",
            std_size: Some(2),
            signed: Signedness::Undefined,
        }),
        'f' => Some(&FormatSpec {
            c_type: Some("float"),
            rust_type: "f32",
            std_size: Some(4),
            signed: Signedness::Undefined,
        }),
        'd' => Some(&FormatSpec {
            c_type: Some("double"),
            rust_type: "f64",
            std_size: Some(8),
            signed: Signedness::Undefined,
        }),
        's' => Some(&FormatSpec {
            c_type: Some("char[]"),
            rust_type: "bytes",
            std_size: None,
            signed: Signedness::Undefined,
        }),
        'p' => Some(&FormatSpec {
            c_type: Some("char[]"),
            rust_type: "bytes",
            std_size: None,
            signed: Signedness::Undefined,
        }),
        'P' => Some(&FormatSpec {
            c_type: Some("void*"),
            rust_type: "usize",
            std_size: None,
            signed: Signedness::Undefined,
        }),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
