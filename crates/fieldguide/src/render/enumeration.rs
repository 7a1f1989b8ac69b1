//! Enum rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::{display_type_name, Renderer};

/// Render an enum as one attribute block per symbol.
///
/// Each block carries the symbol's dotted path, the underlying field
/// type with its width, and the value formatted to that width.
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Enum { inner, symbols } = descriptor.kind() else {
        return;
    };
    let width = descriptor.bit_width();
    let type_label = match width {
        Some(width) => format!("{}<{}>", display_type_name(inner), width),
        None => display_type_name(inner).to_string(),
    };
    let dotted = r.dotted_name();
    for (symbol, value) in symbols {
        r.append(format!(".. attribute:: {dotted}.{symbol}"));
        r.append(format!("   :type: {type_label}"));
        r.append(format!("   :value: {}", format_value(*value, width)));
        r.append_blank();
    }
    r.append_docs(descriptor);
}

/// Format a symbol value to the width of the underlying field:
/// zero-padded lowercase hex when the width is a whole number of
/// nibbles, zero-padded binary otherwise, bare decimal when the width
/// is unknown.
pub fn format_value(value: u64, bit_width: Option<u32>) -> String {
    match bit_width {
        Some(width) if width % 4 == 0 => {
            format!("0x{value:0>pad$x}", pad = (width / 4) as usize)
        }
        Some(width) => format!("0b{value:0>pad$b}", pad = width as usize),
        None => value.to_string(),
    }
}
