//! Renamed and transformed wrapper rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::{display_type_name, Renderer};

/// Render a named node.
///
/// The first visit produces a full attribute block with the wrapped
/// layout nested under it. Any later visit of the same node, anywhere
/// in the build, produces a one-line link back to the first block
/// instead.
pub fn render_renamed(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Renamed { name, inner } = descriptor.kind() else {
        return;
    };

    if let Some(target) = r.registry().target_for(descriptor) {
        r.append(format!("`See: \"{name}\" <{target}>`_"));
        r.append_blank();
        return;
    }

    r.append_blank();
    if r.options().emit_anchors {
        r.append(format!(".. _{}:", r.target_name(descriptor)));
        r.append_blank();
    }
    r.append(format!(".. attribute:: {name}"));
    r.append(format!("   :type: {}", display_type_name(inner)));
    r.append("   :noindex:");
    r.append_blank();
    r.append_docs(descriptor);
    r.recurse(descriptor);
}

/// Render a transformed node.
///
/// The transform only changes bytes on the wire, not the documented
/// shape, so the wrapper is dropped and the inner node rendered in its
/// place.
pub fn render_transformed(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Transformed { inner } = descriptor.kind() else {
        return;
    };
    r.append_docs(descriptor);
    r.render(inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuildRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_visit_renders_block() {
        let registry = BuildRegistry::new();
        let mut r = Renderer::new("proto", "Header", &registry);

        let d = Descriptor::flag().named("ready").arc();
        render_renamed(&mut r, &d);

        assert_eq!(
            r.into_lines(),
            vec![
                "",
                ".. _proto_ready:",
                "",
                ".. attribute:: ready",
                "   :type: Flag",
                "   :noindex:",
                "",
            ]
        );
        assert!(registry.is_documented(&d));
    }

    #[test]
    fn test_second_visit_renders_reference() {
        let registry = BuildRegistry::new();
        let d = Descriptor::flag().named("ready").arc();

        let mut first = Renderer::new("proto", "Header", &registry);
        render_renamed(&mut first, &d);

        let mut second = Renderer::new("proto", "Trailer", &registry);
        render_renamed(&mut second, &d);

        assert_eq!(
            second.into_lines(),
            vec!["`See: \"ready\" <proto_ready>`_", ""]
        );
    }

    #[test]
    fn test_anchor_can_be_disabled() {
        use super::super::RenderOptions;

        let registry = BuildRegistry::new();
        let options = RenderOptions {
            emit_anchors: false,
        };
        let mut r = Renderer::with_options("proto", "Header", &registry, options);

        let d = Descriptor::flag().named("ready").arc();
        render_renamed(&mut r, &d);

        assert!(!r.into_lines().iter().any(|l| l.starts_with(".. _")));
    }

    #[test]
    fn test_wrapper_docs_render_before_body() {
        let registry = BuildRegistry::new();
        let mut r = Renderer::new("proto", "Header", &registry);

        let d = Descriptor::bits_integer(4, false)
            .named("version")
            .with_docs("Protocol version.")
            .arc();
        render_renamed(&mut r, &d);

        let lines = r.into_lines();
        let docs_at = lines.iter().position(|l| l == "Protocol version.").unwrap();
        let body_at = lines
            .iter()
            .position(|l| l.ends_with("Unsigned 4 bit integer."))
            .unwrap();
        assert!(docs_at < body_at);
    }

    #[test]
    fn test_transformed_is_transparent() {
        let registry = BuildRegistry::new();
        let mut r = Renderer::new("proto", "Header", &registry);

        let d = Descriptor::bytes_integer(2, false).transformed().arc();
        render_transformed(&mut r, &d);

        assert_eq!(r.into_lines(), vec!["Unsigned 2 byte integer.", ""]);
    }
}
