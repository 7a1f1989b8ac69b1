//! # Fieldguide
//!
//! A documentation extension for binary layout descriptions.
//!
//! Fieldguide takes descriptor trees, the in-memory form of a binary
//! layout (structs of fields, enums over numeric fields, switches
//! between alternatives, sized integers, format fields, padding), and
//! renders them as reStructuredText attribute blocks, ready for a
//! documentation build to pick up.
//!
//! ## Architecture
//!
//! - **Schema**: the descriptor object model, in the companion
//!   `fieldguide-schema` crate
//! - **Renderer**: depth-first walk over a tree with one handler per
//!   descriptor kind
//! - **Documenters**: the host-facing plugin interface producing whole
//!   pages
//! - **App**: the host application surface the extension is wired into
//!
//! Nodes shared between several parents are rendered once and
//! cross-referenced everywhere else, so large layouts with common
//! headers stay readable.
//!
//! ## Getting Started
//!
//! ```
//! use fieldguide::schema::Descriptor;
//! use fieldguide::App;
//!
//! # fn main() -> fieldguide::Result<()> {
//! let mut app = App::new(std::env::temp_dir().join("fieldguide-doc"));
//! fieldguide::setup(Some(&mut app))?;
//!
//! let header = Descriptor::struct_of([
//!     Descriptor::uint8().named("version").arc(),
//!     Descriptor::uint16_be().named("length").arc(),
//! ])
//! .named("Header")
//! .arc();
//!
//! let page = app.document_item("proto", "Header", &header).unwrap();
//! assert!(page[0].starts_with(".. attribute:: Header"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod assets;
pub mod consts;
pub mod documenters;
pub mod error;
pub mod registry;
pub mod render;

// Re-export main types
pub use app::{App, BuildFinishedEvent, ConfigValue, Event, Rebuild};
pub use documenters::{
    register_documenters, DescriptorDocumenter, DocItem, Documenter, RenamedDocumenter,
};
pub use error::{Error, Result};
pub use registry::BuildRegistry;
pub use render::{RenderOptions, Renderer};

// The object model, re-exported so embedders depend on one crate.
pub use fieldguide_schema as schema;

/// Fieldguide version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration value controlling whether link anchors are emitted
/// ahead of named blocks.
pub const CONFIG_EMIT_ANCHORS: &str = "fieldguide_emit_anchors";

/// Extension metadata reported back to the host by [`setup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Extension version the host records.
    pub version: &'static str,
    /// Whether sources can be read in parallel while the extension is
    /// active.
    pub parallel_read_safe: bool,
}

/// Wire the extension into a host application.
///
/// Registers the configuration values, the bundled assets and the
/// documenters, and reports the extension metadata back to the host.
///
/// # Errors
///
/// Returns [`Error::MissingApplication`] when called without an
/// application; a host that cannot hand over its handle cannot be
/// extended.
pub fn setup(app: Option<&mut App>) -> Result<ExtensionInfo> {
    let app = app.ok_or(Error::MissingApplication)?;
    tracing::debug!(extension = consts::DOMAIN, version = VERSION, "setting up");

    app.add_config_value(
        CONFIG_EMIT_ANCHORS,
        serde_json::Value::Bool(true),
        Rebuild::Env,
    );
    assets::init_assets(Some(&mut *app))?;
    documenters::register_documenters(Some(app))?;

    Ok(ExtensionInfo {
        version: VERSION,
        parallel_read_safe: true,
    })
}
