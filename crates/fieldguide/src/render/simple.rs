//! Flag, pass and padding rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::Renderer;

/// Render a kind with no structure of its own. Only attached
/// documentation is emitted.
pub fn render_empty(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    r.append_docs(descriptor);
}

/// Render padding as a one-line description, e.g. `4 byte padding.`
pub fn render_padding(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Padding { bytes } = descriptor.kind() else {
        return;
    };
    r.append(format!("{bytes} byte padding."));
    r.append_blank();
    r.append_docs(descriptor);
}
