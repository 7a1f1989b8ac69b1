//! Bundled static assets

use std::path::Path;

use tracing::debug;

use crate::app::{App, Event};
use crate::error::{Error, Result};

/// Assets shipped with the extension, as file name and contents pairs.
///
/// Contents are embedded so the crate stays a single artifact; they are
/// materialized into the output tree when a build succeeds.
pub const ASSETS: &[(&str, &str)] = &[(
    "fieldguide.css",
    include_str!("../assets/fieldguide.css"),
)];

fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or_default()
}

/// Register the bundled assets with the host and connect the hook that
/// copies them into the output tree once a build finishes.
///
/// # Errors
///
/// Returns [`Error::MissingApplication`] when called without an
/// application.
pub fn init_assets(app: Option<&mut App>) -> Result<()> {
    let app = app.ok_or(Error::MissingApplication)?;

    for (name, _) in ASSETS.iter().filter(|(n, _)| extension(n) == "css") {
        app.add_css_file(*name);
    }
    for (name, _) in ASSETS.iter().filter(|(n, _)| extension(n) == "js") {
        app.add_js_file(*name);
    }

    app.connect(Event::BuildFinished, |event| {
        // Nothing to publish for a failed build.
        match event.error {
            None => copy_assets(&event.outdir),
            Some(_) => Ok(()),
        }
    });
    Ok(())
}

/// Copy the bundled assets into `<outdir>/_static/`.
pub fn copy_assets(outdir: &Path) -> Result<()> {
    let target = outdir.join("_static");
    std::fs::create_dir_all(&target)?;
    for (name, contents) in ASSETS {
        let path = target.join(name);
        std::fs::write(&path, contents).map_err(|source| Error::AssetCopy {
            name: (*name).to_string(),
            path: path.clone(),
            source,
        })?;
        debug!(asset = %name, path = %path.display(), "copied asset");
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "fieldguide-assets-{}-{}",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_init_requires_an_application() {
        let err = init_assets(None).unwrap_err();
        assert!(matches!(err, Error::MissingApplication));
    }

    #[test]
    fn test_stylesheet_is_registered() {
        let mut app = App::new(scratch_dir("register"));
        init_assets(Some(&mut app)).unwrap();
        assert_eq!(app.css_files(), ["fieldguide.css"]);
        assert!(app.js_files().is_empty());
    }

    #[test]
    fn test_assets_copied_on_success() {
        let outdir = scratch_dir("copy");
        let mut app = App::new(&outdir);
        init_assets(Some(&mut app)).unwrap();

        app.finish_build(None).unwrap();
        let copied = outdir.join("_static").join("fieldguide.css");
        let contents = std::fs::read_to_string(&copied).unwrap();
        assert!(contents.contains(".attribute"));

        std::fs::remove_dir_all(&outdir).ok();
    }

    #[test]
    fn test_assets_skipped_on_failure() {
        let outdir = scratch_dir("skip");
        let mut app = App::new(&outdir);
        init_assets(Some(&mut app)).unwrap();

        app.finish_build(Some("source read failed".to_string()))
            .unwrap();
        assert!(!outdir.join("_static").exists());

        std::fs::remove_dir_all(&outdir).ok();
    }

    #[test]
    fn test_embedded_stylesheet_is_not_empty() {
        let (name, contents) = ASSETS[0];
        assert_eq!(name, "fieldguide.css");
        assert!(!contents.is_empty());
    }
}
