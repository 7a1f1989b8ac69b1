//! Switch rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::{display_type_name, Renderer};

/// Render a discriminated union: the discriminant description when one
/// is known, then one attribute block per case with the case's layout
/// nested under it.
///
/// Recursing into a case body records it in the build memo, so named
/// bodies get a link anchor ahead of their block; later visits
/// reference that anchor.
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Switch { key, cases } = descriptor.kind() else {
        return;
    };
    if let Some(key) = key {
        r.append(format!("**Switched on:** {key}"));
        r.append_blank();
    }
    for case in cases {
        let name = case.inner.name();
        if r.options().emit_anchors
            && name.is_some()
            && !r.registry().is_documented(&case.inner)
        {
            r.append(format!(".. _{}:", r.target_name(&case.inner)));
            r.append_blank();
        }
        let label = name.unwrap_or_else(|| display_type_name(&case.inner));
        r.append(format!(".. attribute:: {label}"));
        r.append(format!("   :type: {}", display_type_name(&case.inner)));
        r.append(format!("   :value: {}", case.value));
        r.append("   :noindex:");
        r.append_blank();
        r.recurse(&case.inner);
    }
    r.append_docs(descriptor);
}
