//! The general descriptor documenter

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::{DocItem, Documenter};
use crate::registry::BuildRegistry;
use crate::render::{display_type_name, RenderOptions, Renderer};

/// Documents any descriptor: a directive header for the item, with the
/// whole tree rendered underneath it.
#[derive(Debug, Default)]
pub struct DescriptorDocumenter;

impl Documenter for DescriptorDocumenter {
    fn objtype(&self) -> &'static str {
        "descriptor"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn can_document(&self, _descriptor: &Descriptor) -> bool {
        true
    }

    fn document(
        &self,
        item: &DocItem,
        registry: &BuildRegistry,
        options: &RenderOptions,
    ) -> Vec<String> {
        let mut r = Renderer::with_options(
            &item.modname,
            &item.name,
            registry,
            options.clone(),
        );

        r.append(format!(".. attribute:: {}", item.name));
        if let DescriptorKind::Renamed { inner, .. } = item.descriptor.kind() {
            r.append(format!("   :type: {}", display_type_name(inner)));
        }
        r.append_blank();

        r.indented(|r| content(r, &item.descriptor));
        r.into_lines()
    }
}

/// Render the item body under the header.
///
/// A named root already has its name in the header, so only the wrapped
/// layout is rendered and the root is recorded in the memo, behind a
/// link anchor so later references to it resolve. A named root
/// documented earlier in the build renders as a reference instead.
/// Anything else goes straight through the dispatcher.
fn content(r: &mut Renderer<'_>, root: &Arc<Descriptor>) {
    match root.kind() {
        DescriptorKind::Renamed { inner, .. } => {
            if r.registry().is_documented(root) {
                crate::render::wrapped::render_renamed(r, root);
                return;
            }
            if r.options().emit_anchors {
                r.append(format!(".. _{}:", r.target_name(root)));
                r.append_blank();
            }
            r.append_docs(root);
            r.render(inner);
            r.mark_documented(root);
        }
        _ => r.render(root),
    }
}
