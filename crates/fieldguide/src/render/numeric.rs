//! Bit- and byte-sized integer rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::Renderer;

/// Render a sized integer as a one-line description, e.g.
/// `Unsigned 4 bit integer.`
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let (width, unit, signed) = match descriptor.kind() {
        DescriptorKind::BitsInteger { bits, signed } => (*bits, "bit", *signed),
        DescriptorKind::BytesInteger { bytes, signed } => (*bytes, "byte", *signed),
        _ => return,
    };
    let signedness = if signed { "Signed" } else { "Unsigned" };
    r.append(format!("{signedness} {width} {unit} integer."));
    r.append_blank();
    r.append_docs(descriptor);
}
