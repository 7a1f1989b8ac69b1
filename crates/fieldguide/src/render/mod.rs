//! Descriptor tree rendering
//!
//! Walks a descriptor tree depth first and emits reStructuredText
//! lines. Each descriptor kind has its own handler module; the
//! dispatcher on [`Renderer`] routes nodes to them, and kinds without a
//! handler fall through to [`fallback`].

pub mod enumeration;
pub mod fallback;
pub mod format;
pub mod numeric;
pub mod simple;
pub mod structure;
pub mod switch;
pub mod wrapped;

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use crate::registry::BuildRegistry;

/// Indentation added per nesting level.
pub const INDENT_STEP: &str = "   ";

/// Options controlling how a tree is rendered, derived from host
/// configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit `.. _target:` anchors ahead of named blocks so shared nodes
    /// can be linked back to.
    pub emit_anchors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { emit_anchors: true }
    }
}

/// Line accumulator for one documented item.
///
/// A renderer carries the item's module and name for link targets, the
/// current indentation, and a handle on the build-wide memo of nodes
/// already documented.
pub struct Renderer<'a> {
    lines: Vec<String>,
    indent: String,
    modname: String,
    name: String,
    registry: &'a BuildRegistry,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    /// Create a renderer for one item with default options.
    pub fn new(
        modname: impl Into<String>,
        name: impl Into<String>,
        registry: &'a BuildRegistry,
    ) -> Self {
        Self::with_options(modname, name, registry, RenderOptions::default())
    }

    /// Create a renderer for one item.
    pub fn with_options(
        modname: impl Into<String>,
        name: impl Into<String>,
        registry: &'a BuildRegistry,
        options: RenderOptions,
    ) -> Self {
        Self {
            lines: Vec::new(),
            indent: String::new(),
            modname: modname.into(),
            name: name.into(),
            registry,
            options,
        }
    }

    /// The options this renderer was created with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The memo shared by all renderers of the current build.
    pub fn registry(&self) -> &BuildRegistry {
        self.registry
    }

    /// The item name with `::` separators turned into dots.
    pub fn dotted_name(&self) -> String {
        self.name.replace("::", ".")
    }

    /// Append one line at the current indentation.
    pub fn append(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", self.indent, text));
        }
    }

    /// Append an empty separator line.
    pub fn append_blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append the node's documentation, when it has any.
    pub fn append_docs(&mut self, descriptor: &Descriptor) {
        match descriptor.docs() {
            Some(docs) if !docs.is_empty() => {
                for line in docs.lines() {
                    self.append(line);
                }
                self.append_blank();
            }
            _ => {}
        }
    }

    /// Run `body` one indentation level deeper.
    pub fn indented<F>(&mut self, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent.push_str(INDENT_STEP);
        body(self);
        let depth = self.indent.len() - INDENT_STEP.len();
        self.indent.truncate(depth);
    }

    /// The finished lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    // ═══════════════════════════════════════════════════════════════════
    // Main Dispatcher
    // ═══════════════════════════════════════════════════════════════════

    /// Render one node by routing it to its kind's handler.
    pub fn render(&mut self, descriptor: &Arc<Descriptor>) {
        match descriptor.kind() {
            DescriptorKind::Struct { .. } => structure::render(self, descriptor),
            DescriptorKind::Enum { .. } => enumeration::render(self, descriptor),
            DescriptorKind::Switch { .. } => switch::render(self, descriptor),
            DescriptorKind::Renamed { .. } => wrapped::render_renamed(self, descriptor),
            DescriptorKind::Transformed { .. } => {
                wrapped::render_transformed(self, descriptor)
            }
            DescriptorKind::BitsInteger { .. } | DescriptorKind::BytesInteger { .. } => {
                numeric::render(self, descriptor)
            }
            DescriptorKind::FormatField { .. } => format::render(self, descriptor),
            DescriptorKind::Flag | DescriptorKind::Pass => {
                simple::render_empty(self, descriptor)
            }
            DescriptorKind::Padding { .. } => simple::render_padding(self, descriptor),

            // Extension nodes the model has no dedicated shape for.
            DescriptorKind::Custom { .. } => fallback::render(self, descriptor),
        }
    }

    /// Render a node's children one level deeper, then record the node
    /// in the build memo.
    ///
    /// Nodes already in the memo are skipped outright; that is what
    /// keeps a shared subtree from being expanded under every parent.
    pub fn recurse(&mut self, descriptor: &Arc<Descriptor>) {
        if self.registry.is_documented(descriptor) {
            return;
        }
        let children: Vec<Arc<Descriptor>> =
            descriptor.children().into_iter().cloned().collect();
        self.indented(|r| {
            for child in &children {
                r.render(child);
            }
        });
        self.mark_documented(descriptor);
    }

    /// Record the node in the build memo under its link target.
    pub fn mark_documented(&mut self, descriptor: &Arc<Descriptor>) {
        let target = self.target_name(descriptor);
        self.registry.mark_documented(descriptor, target);
    }

    /// The link target a node is registered under: sanitized module
    /// name plus sanitized node name, with the kind name standing in
    /// for anonymous nodes.
    pub fn target_name(&self, descriptor: &Descriptor) -> String {
        let name = descriptor.name().unwrap_or_else(|| descriptor.type_name());
        format!(
            "{}_{}",
            sanitize_name(&self.modname),
            sanitize_name(name)
        )
    }
}

/// Lowercase `text` and replace characters link targets cannot carry.
pub fn sanitize_name(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' | '.' | '<' | '>' | ':' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// The kind name a node is best displayed as, looking through one
/// wrapper level.
pub fn display_type_name(descriptor: &Descriptor) -> &str {
    descriptor.unwrapped().type_name()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
