//! Host application model
//!
//! The extension runs inside a documentation build host that hands out
//! configuration, collects static assets, fires build events and asks
//! registered documenters for page content. [`App`] captures that
//! surface so the extension can be embedded by any build tool, and so
//! tests can drive whole builds in memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fieldguide_schema::Descriptor;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::documenters::{DocItem, Documenter};
use crate::error::{Error, Result};
use crate::registry::BuildRegistry;
use crate::render::{sanitize_name, RenderOptions};

/// When a changed configuration value should trigger a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebuild {
    /// Re-read all sources.
    Env,
    /// Re-render output only.
    Html,
    /// No rebuild needed.
    Never,
}

/// A registered configuration value with its default.
#[derive(Debug, Clone)]
pub struct ConfigValue {
    /// Default used until the host overrides the value.
    pub default: serde_json::Value,
    /// Current value.
    pub value: serde_json::Value,
    /// Rebuild behavior on change.
    pub rebuild: Rebuild,
}

/// Build lifecycle events handlers can be connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The build is over, successfully or not.
    BuildFinished,
}

/// Payload handed to build-finished handlers.
#[derive(Debug, Clone)]
pub struct BuildFinishedEvent {
    /// Output directory of the finished build.
    pub outdir: PathBuf,
    /// The build error, if the build failed.
    pub error: Option<String>,
}

type EventHandler = Box<dyn Fn(&BuildFinishedEvent) -> Result<()> + Send + Sync>;

/// The host application handle.
///
/// Owns everything with build scope: configuration, registered assets
/// and documenters, event handlers, the memo of documented nodes and
/// the pages produced so far.
pub struct App {
    outdir: PathBuf,
    config: IndexMap<String, ConfigValue>,
    css_files: Vec<String>,
    js_files: Vec<String>,
    handlers: Vec<(Event, EventHandler)>,
    documenters: Vec<Box<dyn Documenter>>,
    registry: BuildRegistry,
    pages: IndexMap<String, Vec<String>>,
}

impl App {
    /// Create an application writing its output under `outdir`.
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self {
            outdir: outdir.into(),
            config: IndexMap::new(),
            css_files: Vec::new(),
            js_files: Vec::new(),
            handlers: Vec::new(),
            documenters: Vec::new(),
            registry: BuildRegistry::new(),
            pages: IndexMap::new(),
        }
    }

    /// The build output directory.
    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    // ═══════════════════════════════════════════════════════════════════
    // Configuration
    // ═══════════════════════════════════════════════════════════════════

    /// Register a configuration value with its default.
    ///
    /// Registering a name again replaces the earlier registration.
    pub fn add_config_value(
        &mut self,
        name: impl Into<String>,
        default: serde_json::Value,
        rebuild: Rebuild,
    ) {
        let name = name.into();
        if self.config.contains_key(&name) {
            debug!(name = %name, "replacing configuration value");
        }
        self.config.insert(
            name,
            ConfigValue {
                value: default.clone(),
                default,
                rebuild,
            },
        );
    }

    /// Override a configuration value.
    ///
    /// Unregistered names are ignored with a warning, matching how a
    /// host treats stray configuration.
    pub fn set_config_value(&mut self, name: &str, value: serde_json::Value) {
        match self.config.get_mut(name) {
            Some(entry) => entry.value = value,
            None => warn!(name = %name, "ignoring unknown configuration value"),
        }
    }

    /// The registered configuration value, if any.
    pub fn config_value(&self, name: &str) -> Option<&ConfigValue> {
        self.config.get(name)
    }

    /// A configuration value read as a boolean, with a fallback for
    /// unregistered names or non-boolean values.
    pub fn config_bool(&self, name: &str, fallback: bool) -> bool {
        self.config
            .get(name)
            .and_then(|entry| entry.value.as_bool())
            .unwrap_or(fallback)
    }

    /// Render options derived from the current configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            emit_anchors: self.config_bool(crate::CONFIG_EMIT_ANCHORS, true),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Assets and Events
    // ═══════════════════════════════════════════════════════════════════

    /// Register a stylesheet to be linked into rendered pages.
    pub fn add_css_file(&mut self, name: impl Into<String>) {
        self.css_files.push(name.into());
    }

    /// Register a script to be linked into rendered pages.
    pub fn add_js_file(&mut self, name: impl Into<String>) {
        self.js_files.push(name.into());
    }

    /// Stylesheets registered so far.
    pub fn css_files(&self) -> &[String] {
        &self.css_files
    }

    /// Scripts registered so far.
    pub fn js_files(&self) -> &[String] {
        &self.js_files
    }

    /// Connect a handler to a build event.
    pub fn connect<F>(&mut self, event: Event, handler: F)
    where
        F: Fn(&BuildFinishedEvent) -> Result<()> + Send + Sync + 'static,
    {
        self.handlers.push((event, Box::new(handler)));
    }

    /// Finish the current build: fire build-finished handlers, then
    /// reset the memo so the next build starts fresh.
    ///
    /// `error` carries the build failure, if there was one; handlers
    /// receive it and typically skip their work for failed builds.
    pub fn finish_build(&mut self, error: Option<String>) -> Result<()> {
        let event = BuildFinishedEvent {
            outdir: self.outdir.clone(),
            error,
        };
        let result = self.fire_build_finished(&event);
        self.registry.clear();
        debug!(pages = self.pages.len(), "build finished");
        result
    }

    fn fire_build_finished(&self, event: &BuildFinishedEvent) -> Result<()> {
        for (registered, handler) in &self.handlers {
            if *registered == Event::BuildFinished {
                handler(event)?;
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Documenters and Pages
    // ═══════════════════════════════════════════════════════════════════

    /// Register a documenter.
    pub fn add_documenter(&mut self, documenter: Box<dyn Documenter>) {
        debug!(objtype = documenter.objtype(), "registering documenter");
        self.documenters.push(documenter);
    }

    /// Objtypes of the registered documenters, in registration order.
    pub fn documenter_objtypes(&self) -> Vec<&'static str> {
        self.documenters.iter().map(|d| d.objtype()).collect()
    }

    /// The memo of nodes documented in the current build.
    pub fn registry(&self) -> &BuildRegistry {
        &self.registry
    }

    /// Document one item with the best matching documenter and record
    /// the produced page.
    ///
    /// Returns `None` when no registered documenter accepts the item.
    pub fn document_item(
        &mut self,
        modname: &str,
        name: &str,
        descriptor: &Arc<Descriptor>,
    ) -> Option<Vec<String>> {
        let selected = self
            .documenters
            .iter()
            .filter(|d| d.can_document(descriptor))
            .max_by_key(|d| d.priority())?;
        let lines = self.run_documenter(selected.as_ref(), modname, name, descriptor);
        self.record_page(name, lines.clone());
        Some(lines)
    }

    /// Document one item with the documenter registered under
    /// `objtype` and record the produced page.
    ///
    /// Returns `None` when no such documenter exists or it rejects the
    /// item.
    pub fn document_item_as(
        &mut self,
        objtype: &str,
        modname: &str,
        name: &str,
        descriptor: &Arc<Descriptor>,
    ) -> Option<Vec<String>> {
        let selected = self
            .documenters
            .iter()
            .find(|d| d.objtype() == objtype)
            .filter(|d| d.can_document(descriptor))?;
        let lines = self.run_documenter(selected.as_ref(), modname, name, descriptor);
        self.record_page(name, lines.clone());
        Some(lines)
    }

    fn run_documenter(
        &self,
        documenter: &dyn Documenter,
        modname: &str,
        name: &str,
        descriptor: &Arc<Descriptor>,
    ) -> Vec<String> {
        let item = DocItem::new(modname, name, Arc::clone(descriptor));
        documenter.document(&item, &self.registry, &self.render_options())
    }

    fn record_page(&mut self, name: &str, lines: Vec<String>) {
        self.pages.insert(name.to_string(), lines);
    }

    /// Names of the pages produced so far, in production order.
    pub fn page_names(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }

    /// The lines of one produced page.
    pub fn page(&self, name: &str) -> Option<&[String]> {
        self.pages.get(name).map(Vec::as_slice)
    }

    /// Write every produced page as a `.rst` file under the output
    /// directory, returning the written paths.
    pub fn write_pages(&self) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.outdir)?;
        let mut written = Vec::with_capacity(self.pages.len());
        for (name, lines) in &self.pages {
            let path = self
                .outdir
                .join(format!("{}.rst", sanitize_name(name)));
            let mut contents = lines.join("\n");
            contents.push('\n');
            std::fs::write(&path, contents).map_err(|source| Error::PageWrite {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        Ok(written)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fieldguide-app-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_config_value_defaults() {
        let mut app = App::new(scratch_dir("config"));
        app.add_config_value("fieldguide_emit_anchors", Value::Bool(true), Rebuild::Env);

        assert!(app.config_bool("fieldguide_emit_anchors", false));
        let entry = app.config_value("fieldguide_emit_anchors").unwrap();
        assert_eq!(entry.rebuild, Rebuild::Env);
        assert_eq!(entry.default, Value::Bool(true));
    }

    #[test]
    fn test_config_value_override() {
        let mut app = App::new(scratch_dir("override"));
        app.add_config_value("fieldguide_emit_anchors", Value::Bool(true), Rebuild::Env);
        app.set_config_value("fieldguide_emit_anchors", Value::Bool(false));

        assert!(!app.config_bool("fieldguide_emit_anchors", true));
        assert!(!app.render_options().emit_anchors);
    }

    #[test]
    fn test_unknown_config_names_fall_back() {
        let app = App::new(scratch_dir("fallback"));
        assert!(app.config_bool("missing", true));
        assert!(!app.config_bool("missing", false));
    }

    #[test]
    fn test_asset_registration_order() {
        let mut app = App::new(scratch_dir("assets"));
        app.add_css_file("a.css");
        app.add_css_file("b.css");
        app.add_js_file("c.js");

        assert_eq!(app.css_files(), ["a.css", "b.css"]);
        assert_eq!(app.js_files(), ["c.js"]);
    }

    #[test]
    fn test_finish_build_fires_handlers_and_clears_memo() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut app = App::new(scratch_dir("finish"));
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&fired);
        app.connect(Event::BuildFinished, move |event| {
            assert!(event.error.is_none());
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let node = Descriptor::flag().named("ready").arc();
        app.registry().mark_documented(&node, "proto_ready");

        app.finish_build(None).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(app.registry().is_empty());
    }

    #[test]
    fn test_finish_build_reports_handler_errors() {
        let mut app = App::new(scratch_dir("handler-err"));
        app.connect(Event::BuildFinished, |_| Err(Error::MissingApplication));

        let err = app.finish_build(None).unwrap_err();
        assert!(matches!(err, Error::MissingApplication));
        // The memo is reset even when a handler fails.
        assert!(app.registry().is_empty());
    }

    #[test]
    fn test_document_item_selects_by_priority() {
        use crate::documenters::register_documenters;

        let mut app = App::new(scratch_dir("select"));
        register_documenters(Some(&mut app)).unwrap();

        let d = Descriptor::flag().named("ready").arc();
        let lines = app.document_item("proto", "ready", &d).unwrap();

        // The general documenter outranks the alias documenter.
        assert!(!lines.iter().any(|l| l.contains("AKA:")));
    }

    #[test]
    fn test_document_item_as_picks_by_objtype() {
        use crate::documenters::register_documenters;

        let mut app = App::new(scratch_dir("as"));
        register_documenters(Some(&mut app)).unwrap();

        let d = Descriptor::flag().named("ready").arc();
        let lines = app
            .document_item_as("renamed", "proto", "ready", &d)
            .unwrap();
        assert!(lines.iter().any(|l| l.contains("AKA: \"ready\"")));

        // The alias documenter rejects unnamed nodes.
        let plain = Descriptor::flag().arc();
        assert!(app
            .document_item_as("renamed", "proto", "flag", &plain)
            .is_none());
    }

    #[test]
    fn test_document_item_without_documenters() {
        let mut app = App::new(scratch_dir("none"));
        let d = Descriptor::flag().arc();
        assert!(app.document_item("proto", "flag", &d).is_none());
    }

    #[test]
    fn test_pages_accumulate_and_write() {
        use crate::documenters::register_documenters;

        let outdir = scratch_dir("pages");
        let mut app = App::new(&outdir);
        register_documenters(Some(&mut app)).unwrap();

        let d = Descriptor::struct_of([Descriptor::padding(2).arc()])
            .named("Header")
            .arc();
        app.document_item("proto", "wire::Header", &d).unwrap();

        assert_eq!(app.page_names(), ["wire::Header"]);
        assert!(app.page("wire::Header").is_some());

        let written = app.write_pages().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("wire__header.rst"));
        let contents = std::fs::read_to_string(&written[0]).unwrap();
        assert!(contents.contains(".. attribute:: wire::Header"));

        std::fs::remove_dir_all(&outdir).ok();
    }
}
