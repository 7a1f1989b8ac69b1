//! Descriptor tree nodes and their builder API

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of a binary layout description.
///
/// Every node may carry free-form documentation; what the node actually
/// describes lives in its [`DescriptorKind`]. Nodes are immutable once
/// built and are shared between parents via `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Documentation attached to this node, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    docs: Option<String>,

    /// The field or aggregate this node describes.
    kind: DescriptorKind,
}

/// The supported descriptor kinds.
///
/// `Custom` stands in for extension nodes defined outside this model;
/// renderers are expected to degrade gracefully when they meet one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DescriptorKind {
    /// An ordered sequence of fields.
    Struct {
        /// The fields, in declaration order.
        fields: Vec<Arc<Descriptor>>,
    },

    /// A symbolic view over a numeric inner field.
    Enum {
        /// The numeric field the symbols map onto.
        inner: Arc<Descriptor>,
        /// Symbol name to value, in declaration order.
        symbols: IndexMap<String, u64>,
    },

    /// A discriminated union of alternative layouts.
    Switch {
        /// Description of the discriminant, when one is known.
        key: Option<String>,
        /// The alternatives, in declaration order.
        cases: Vec<SwitchCase>,
    },

    /// A wrapper attaching a field name to its inner node.
    Renamed {
        /// The attached name.
        name: String,
        /// The wrapped node.
        inner: Arc<Descriptor>,
    },

    /// A wrapper applying a byte-level transform; transparent for
    /// documentation purposes.
    Transformed {
        /// The wrapped node.
        inner: Arc<Descriptor>,
    },

    /// An integer with an explicit width in bits.
    BitsInteger {
        /// Width in bits.
        bits: u32,
        /// Whether the value is signed.
        signed: bool,
    },

    /// An integer with an explicit width in bytes.
    BytesInteger {
        /// Width in bytes.
        bytes: u32,
        /// Whether the value is signed.
        signed: bool,
    },

    /// A printf-struct style field: an endianness prefix character
    /// followed by a single format character, e.g. `"<H"`.
    FormatField {
        /// The format string.
        fmt: String,
        /// Packed size in bytes, fixed at construction.
        bytes: u32,
    },

    /// A one-bit boolean.
    Flag,

    /// A zero-size no-op field.
    Pass,

    /// Reserved space with no interpretation.
    Padding {
        /// Width in bytes.
        bytes: u32,
    },

    /// An extension node this model has no dedicated shape for.
    Custom {
        /// The reported type name of the extension node.
        type_name: String,
        /// Any child nodes it exposes.
        children: Vec<Arc<Descriptor>>,
    },
}

/// One alternative of a [`DescriptorKind::Switch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// The discriminant value selecting this alternative.
    pub value: CaseValue,
    /// The layout of this alternative.
    pub inner: Arc<Descriptor>,
}

impl SwitchCase {
    /// Create a case from anything convertible to a [`CaseValue`].
    pub fn new(value: impl Into<CaseValue>, inner: Arc<Descriptor>) -> Self {
        Self {
            value: value.into(),
            inner,
        }
    }
}

/// A switch discriminant value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseValue {
    /// A numeric discriminant.
    Int(i128),
    /// A string discriminant.
    Str(String),
}

impl fmt::Display for CaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseValue::Int(v) => write!(f, "{}", v),
            CaseValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i128> for CaseValue {
    fn from(v: i128) -> Self {
        CaseValue::Int(v)
    }
}

impl From<i64> for CaseValue {
    fn from(v: i64) -> Self {
        CaseValue::Int(v.into())
    }
}

impl From<u64> for CaseValue {
    fn from(v: u64) -> Self {
        CaseValue::Int(v.into())
    }
}

impl From<i32> for CaseValue {
    fn from(v: i32) -> Self {
        CaseValue::Int(v.into())
    }
}

impl From<&str> for CaseValue {
    fn from(s: &str) -> Self {
        CaseValue::Str(s.to_string())
    }
}

impl From<String> for CaseValue {
    fn from(s: String) -> Self {
        CaseValue::Str(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

impl Descriptor {
    fn from_kind(kind: DescriptorKind) -> Self {
        Self { docs: None, kind }
    }

    /// An ordered sequence of fields.
    pub fn struct_of(fields: impl IntoIterator<Item = Arc<Descriptor>>) -> Self {
        Self::from_kind(DescriptorKind::Struct {
            fields: fields.into_iter().collect(),
        })
    }

    /// A symbolic view over `inner`, which should be a numeric field.
    pub fn enum_of<S: Into<String>>(
        inner: Arc<Descriptor>,
        symbols: impl IntoIterator<Item = (S, u64)>,
    ) -> Self {
        Self::from_kind(DescriptorKind::Enum {
            inner,
            symbols: symbols.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// A discriminated union. `key` describes the discriminant when known.
    pub fn switch(
        key: Option<&str>,
        cases: impl IntoIterator<Item = SwitchCase>,
    ) -> Self {
        Self::from_kind(DescriptorKind::Switch {
            key: key.map(str::to_string),
            cases: cases.into_iter().collect(),
        })
    }

    /// An integer `bits` wide.
    pub fn bits_integer(bits: u32, signed: bool) -> Self {
        Self::from_kind(DescriptorKind::BitsInteger { bits, signed })
    }

    /// An integer `bytes` wide.
    pub fn bytes_integer(bytes: u32, signed: bool) -> Self {
        Self::from_kind(DescriptorKind::BytesInteger { bytes, signed })
    }

    /// A printf-struct format field. `bytes` is the packed size of `fmt`.
    pub fn format_field(fmt: impl Into<String>, bytes: u32) -> Self {
        Self::from_kind(DescriptorKind::FormatField {
            fmt: fmt.into(),
            bytes,
        })
    }

    /// A one-bit boolean.
    pub fn flag() -> Self {
        Self::from_kind(DescriptorKind::Flag)
    }

    /// A zero-size no-op field.
    pub fn pass() -> Self {
        Self::from_kind(DescriptorKind::Pass)
    }

    /// Reserved space `bytes` wide.
    pub fn padding(bytes: u32) -> Self {
        Self::from_kind(DescriptorKind::Padding { bytes })
    }

    /// An extension node with a reported type name and optional children.
    pub fn custom(
        type_name: impl Into<String>,
        children: impl IntoIterator<Item = Arc<Descriptor>>,
    ) -> Self {
        Self::from_kind(DescriptorKind::Custom {
            type_name: type_name.into(),
            children: children.into_iter().collect(),
        })
    }

    /// Wrap this node in a name-attaching [`DescriptorKind::Renamed`].
    pub fn named(self, name: impl Into<String>) -> Self {
        Self::from_kind(DescriptorKind::Renamed {
            name: name.into(),
            inner: Arc::new(self),
        })
    }

    /// Wrap this node in a [`DescriptorKind::Transformed`].
    pub fn transformed(self) -> Self {
        Self::from_kind(DescriptorKind::Transformed {
            inner: Arc::new(self),
        })
    }

    /// Attach documentation to this node.
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Finish building and move the node behind an `Arc` so it can be
    /// shared between parents.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Inspection
// ═══════════════════════════════════════════════════════════════════════

impl Descriptor {
    /// The kind of this node.
    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    /// Documentation attached to this node, if any.
    pub fn docs(&self) -> Option<&str> {
        self.docs.as_deref()
    }

    /// The attached field name. Only [`DescriptorKind::Renamed`] nodes
    /// carry one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            DescriptorKind::Renamed { name, .. } => Some(name),
            _ => None,
        }
    }

    /// A human-readable name for this node's kind.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            DescriptorKind::Struct { .. } => "Struct",
            DescriptorKind::Enum { .. } => "Enum",
            DescriptorKind::Switch { .. } => "Switch",
            DescriptorKind::Renamed { .. } => "Renamed",
            DescriptorKind::Transformed { .. } => "Transformed",
            DescriptorKind::BitsInteger { .. } => "BitsInteger",
            DescriptorKind::BytesInteger { .. } => "BytesInteger",
            DescriptorKind::FormatField { .. } => "FormatField",
            DescriptorKind::Flag => "Flag",
            DescriptorKind::Pass => "Pass",
            DescriptorKind::Padding { .. } => "Padding",
            DescriptorKind::Custom { type_name, .. } => type_name,
        }
    }

    /// Strip one wrapper level.
    ///
    /// Returns the inner node of a `Renamed` or `Transformed` wrapper,
    /// and `self` for everything else.
    pub fn unwrapped(&self) -> &Descriptor {
        match &self.kind {
            DescriptorKind::Renamed { inner, .. }
            | DescriptorKind::Transformed { inner } => inner,
            _ => self,
        }
    }

    /// The node's children, for generic recursion.
    ///
    /// Aggregates list their members; wrappers and enums expose their
    /// single inner node; leaf fields have none.
    pub fn children(&self) -> Vec<&Arc<Descriptor>> {
        match &self.kind {
            DescriptorKind::Struct { fields } => fields.iter().collect(),
            DescriptorKind::Switch { cases, .. } => {
                cases.iter().map(|c| &c.inner).collect()
            }
            DescriptorKind::Enum { inner, .. }
            | DescriptorKind::Renamed { inner, .. }
            | DescriptorKind::Transformed { inner } => vec![inner],
            DescriptorKind::Custom { children, .. } => children.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// The width of this node's value in bits, when it has one.
    ///
    /// Wrappers and enums report the width of their inner node;
    /// aggregates, padding and extension nodes report `None`, as do
    /// byte widths whose bit count does not fit a `u32`.
    pub fn bit_width(&self) -> Option<u32> {
        match &self.kind {
            DescriptorKind::BitsInteger { bits, .. } => Some(*bits),
            DescriptorKind::BytesInteger { bytes, .. }
            | DescriptorKind::FormatField { bytes, .. } => bytes.checked_mul(8),
            DescriptorKind::Flag => Some(1),
            DescriptorKind::Enum { inner, .. }
            | DescriptorKind::Renamed { inner, .. }
            | DescriptorKind::Transformed { inner } => inner.bit_width(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_wraps_in_renamed() {
        let d = Descriptor::flag().named("ready");
        assert_eq!(d.type_name(), "Renamed");
        assert_eq!(d.name(), Some("ready"));
        assert_eq!(d.unwrapped().type_name(), "Flag");
    }

    #[test]
    fn test_name_is_none_for_unnamed() {
        assert_eq!(Descriptor::flag().name(), None);
        assert_eq!(Descriptor::padding(4).name(), None);
    }

    #[test]
    fn test_with_docs() {
        let d = Descriptor::pass().with_docs("does nothing");
        assert_eq!(d.docs(), Some("does nothing"));
        assert_eq!(Descriptor::pass().docs(), None);
    }

    #[test]
    fn test_enum_symbol_order_preserved() {
        let d = Descriptor::enum_of(
            Descriptor::bits_integer(4, false).arc(),
            [("Z", 3u64), ("A", 1), ("M", 2)],
        );
        let DescriptorKind::Enum { symbols, .. } = d.kind() else {
            panic!("expected Enum");
        };
        let names: Vec<&str> = symbols.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_bit_width_numeric_kinds() {
        assert_eq!(Descriptor::bits_integer(12, true).bit_width(), Some(12));
        assert_eq!(Descriptor::bytes_integer(3, false).bit_width(), Some(24));
        assert_eq!(Descriptor::format_field("<H", 2).bit_width(), Some(16));
        assert_eq!(Descriptor::flag().bit_width(), Some(1));
    }

    #[test]
    fn test_bit_width_through_wrappers() {
        let d = Descriptor::bits_integer(6, false).named("op").transformed();
        assert_eq!(d.bit_width(), Some(6));

        let e = Descriptor::enum_of(Descriptor::format_field(">B", 1).arc(), [("ON", 1u64)]);
        assert_eq!(e.bit_width(), Some(8));
    }

    #[test]
    fn test_bit_width_none_for_aggregates() {
        assert_eq!(Descriptor::struct_of([]).bit_width(), None);
        assert_eq!(Descriptor::padding(2).bit_width(), None);
        assert_eq!(Descriptor::custom("Blob", []).bit_width(), None);
    }

    #[test]
    fn test_bit_width_none_for_oversized_byte_widths() {
        assert_eq!(
            Descriptor::bytes_integer(0x2000_0000, false).bit_width(),
            None
        );
        assert_eq!(Descriptor::format_field(">Q", u32::MAX).bit_width(), None);
    }

    #[test]
    fn test_children_struct_and_switch() {
        let a = Descriptor::flag().named("a").arc();
        let b = Descriptor::padding(1).arc();
        let s = Descriptor::struct_of([a.clone(), b.clone()]);
        assert_eq!(s.children().len(), 2);

        let sw = Descriptor::switch(
            Some("tag"),
            [SwitchCase::new(1, a.clone()), SwitchCase::new(2, b)],
        );
        assert_eq!(sw.children().len(), 2);
        assert_eq!(Descriptor::flag().children().len(), 0);
    }

    #[test]
    fn test_custom_reports_own_type_name() {
        let d = Descriptor::custom("Checksum", []);
        assert_eq!(d.type_name(), "Checksum");
    }

    #[test]
    fn test_case_value_display() {
        assert_eq!(CaseValue::from(7).to_string(), "7");
        assert_eq!(CaseValue::from(-1i64).to_string(), "-1");
        assert_eq!(CaseValue::from("boot").to_string(), "boot");
    }

    #[test]
    fn test_shared_node_appears_under_two_parents() {
        let shared = Descriptor::format_field(">H", 2).named("crc").arc();
        let one = Descriptor::struct_of([shared.clone()]);
        let two = Descriptor::struct_of([shared.clone()]);

        assert!(Arc::ptr_eq(&one.children()[0], &two.children()[0]));
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let d = Descriptor::struct_of([
            Descriptor::uint16_be().named("length").arc(),
            Descriptor::flag().named("ready").with_docs("set when armed").arc(),
        ]);
        let json = serde_json::to_string(&d).expect("serialize");
        let back: Descriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, d);
    }
}
