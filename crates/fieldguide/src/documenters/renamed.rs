//! The alias documenter for named nodes

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::{DocItem, Documenter};
use crate::registry::BuildRegistry;
use crate::render::{RenderOptions, Renderer};

/// Documents a named node as an alias: just the header plus an `AKA:`
/// line carrying the attached name, without expanding the layout.
///
/// Selected explicitly by objtype; the general
/// [`DescriptorDocumenter`] outranks it otherwise.
///
/// [`DescriptorDocumenter`]: super::DescriptorDocumenter
#[derive(Debug, Default)]
pub struct RenamedDocumenter;

impl Documenter for RenamedDocumenter {
    fn objtype(&self) -> &'static str {
        "renamed"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn can_document(&self, descriptor: &Descriptor) -> bool {
        matches!(descriptor.kind(), DescriptorKind::Renamed { .. })
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
        if let Some(name) = item.descriptor.name() {
            r.append(format!("   :type: AKA: \"{name}\""));
        }
        r.append_blank();
        r.indented(|r| r.append_docs(&item.descriptor));
        r.into_lines()
    }
}
