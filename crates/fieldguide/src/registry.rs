//! Per-build memo of documented descriptors

use std::sync::Arc;

use dashmap::DashMap;
use fieldguide_schema::Descriptor;

/// Records which descriptor nodes a build has already documented.
///
/// Keys are node identities (the shared-pointer address), values are the
/// link target each node was registered under. A node reached again
/// through a second parent is then cross-referenced instead of expanded
/// a second time. The extension declares itself safe for parallel
/// source reads, so the map accepts concurrent documenters.
///
/// The memo is only meaningful within one build; [`clear`] is called
/// when a build finishes.
///
/// [`clear`]: BuildRegistry::clear
#[derive(Debug, Default)]
pub struct BuildRegistry {
    documented: DashMap<usize, String>,
}

impl BuildRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn identity(descriptor: &Arc<Descriptor>) -> usize {
        Arc::as_ptr(descriptor) as usize
    }

    /// Whether the node has already been documented in this build.
    pub fn is_documented(&self, descriptor: &Arc<Descriptor>) -> bool {
        self.documented.contains_key(&Self::identity(descriptor))
    }

    /// The link target the node was documented under, if any.
    pub fn target_for(&self, descriptor: &Arc<Descriptor>) -> Option<String> {
        self.documented
            .get(&Self::identity(descriptor))
            .map(|entry| entry.value().clone())
    }

    /// Record the node as documented under the given link target.
    pub fn mark_documented(&self, descriptor: &Arc<Descriptor>, target: impl Into<String>) {
        self.documented
            .insert(Self::identity(descriptor), target.into());
    }

    /// Number of nodes documented so far.
    pub fn len(&self) -> usize {
        self.documented.len()
    }

    /// Whether nothing has been documented yet.
    pub fn is_empty(&self) -> bool {
        self.documented.is_empty()
    }

    /// Forget everything; the next build starts fresh.
    pub fn clear(&self) {
        self.documented.clear();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguide_schema::Descriptor;

    #[test]
    fn test_mark_and_query() {
        let registry = BuildRegistry::new();
        let node = Descriptor::flag().arc();
        assert!(!registry.is_documented(&node));

        registry.mark_documented(&node, "mod_flag");
        assert!(registry.is_documented(&node));
        assert_eq!(registry.target_for(&node), Some("mod_flag".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_identity_is_the_pointer() {
        let registry = BuildRegistry::new();
        let first = Descriptor::flag().arc();
        let second = Descriptor::flag().arc();
        registry.mark_documented(&first, "mod_flag");

        // Structurally equal nodes are still distinct.
        assert!(!registry.is_documented(&second));

        // A clone of the same handle is the same node.
        let alias = Arc::clone(&first);
        assert!(registry.is_documented(&alias));
    }

    #[test]
    fn test_clear_resets_the_build() {
        let registry = BuildRegistry::new();
        let node = Descriptor::uint8().named("version").arc();
        registry.mark_documented(&node, "mod_version");
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_documented(&node));
        assert_eq!(registry.target_for(&node), None);
    }
}
