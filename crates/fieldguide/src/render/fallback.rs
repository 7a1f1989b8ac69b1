//! Fallback for descriptor kinds without a dedicated handler

use std::sync::Arc;

use fieldguide_schema::Descriptor;
use tracing::warn;

use super::Renderer;

/// Render a node of an unrecognized kind.
///
/// Emits whatever documentation the node carries and recurses into its
/// children, so unknown kinds degrade to partial output instead of
/// failing the build.
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    warn!(
        kind = descriptor.type_name(),
        "no dedicated handling for descriptor kind"
    );
    r.append_docs(descriptor);
    r.recurse(descriptor);
}
