//! Documenters
//!
//! A documenter turns one named descriptor into the reStructuredText
//! lines describing it. The host keeps a set of them and selects by
//! [`Documenter::can_document`] and [`Documenter::priority`], or
//! directly by [`Documenter::objtype`] when the caller asks for a
//! specific one.

pub mod descriptor;
pub mod renamed;

use std::sync::Arc;

use fieldguide_schema::Descriptor;

use crate::app::App;
use crate::error::{Error, Result};
use crate::registry::BuildRegistry;
use crate::render::RenderOptions;

pub use descriptor::DescriptorDocumenter;
pub use renamed::RenamedDocumenter;

/// One item to document: a descriptor plus the names it is published
/// under.
#[derive(Debug, Clone)]
pub struct DocItem {
    /// Module the item belongs to, used for link targets.
    pub modname: String,
    /// Item name; `::` separators are rendered as dots.
    pub name: String,
    /// The descriptor tree itself.
    pub descriptor: Arc<Descriptor>,
}

impl DocItem {
    /// Bundle a descriptor with its module and item names.
    pub fn new(
        modname: impl Into<String>,
        name: impl Into<String>,
        descriptor: Arc<Descriptor>,
    ) -> Self {
        Self {
            modname: modname.into(),
            name: name.into(),
            descriptor,
        }
    }
}

/// Produces documentation for one class of objects.
///
/// Implementations must be shareable across parallel source reads.
pub trait Documenter: Send + Sync {
    /// Identifier callers select this documenter by.
    fn objtype(&self) -> &'static str;

    /// Selection priority when several documenters accept an item;
    /// higher wins.
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this documenter can describe the given node.
    fn can_document(&self, descriptor: &Descriptor) -> bool;

    /// Produce the lines documenting `item`.
    fn document(
        &self,
        item: &DocItem,
        registry: &BuildRegistry,
        options: &RenderOptions,
    ) -> Vec<String>;
}

/// Register the bundled documenters with the host application.
///
/// # Errors
///
/// Returns [`Error::MissingApplication`] when called without an
/// application.
pub fn register_documenters(app: Option<&mut App>) -> Result<()> {
    let app = app.ok_or(Error::MissingApplication)?;
    app.add_documenter(Box::new(DescriptorDocumenter));
    app.add_documenter(Box::new(RenamedDocumenter));
    Ok(())
}
