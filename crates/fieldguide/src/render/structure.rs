//! Struct rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};

use super::Renderer;

/// Render a struct: each field in declaration order, then the struct's
/// own documentation.
///
/// Fields go back through the main dispatcher, so named fields produce
/// their attribute blocks and anonymous fields (padding, flags) their
/// plain descriptions.
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::Struct { fields } = descriptor.kind() else {
        return;
    };
    for field in fields {
        r.render(field);
    }
    r.append_docs(descriptor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuildRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_render_in_order() {
        let registry = BuildRegistry::new();
        let mut r = Renderer::new("proto", "Header", &registry);

        let s = Descriptor::struct_of([
            Descriptor::padding(2).arc(),
            Descriptor::flag().with_docs("Set when the frame is final.").arc(),
        ])
        .arc();
        render(&mut r, &s);

        assert_eq!(
            r.into_lines(),
            vec![
                "2 byte padding.",
                "",
                "Set when the frame is final.",
                ""
            ]
        );
    }

    #[test]
    fn test_struct_docs_follow_fields() {
        let registry = BuildRegistry::new();
        let mut r = Renderer::new("proto", "Header", &registry);

        let s = Descriptor::struct_of([Descriptor::padding(1).arc()])
            .with_docs("Reserved region.")
            .arc();
        render(&mut r, &s);

        let lines = r.into_lines();
        assert_eq!(lines.last(), Some(&String::new()));
        assert!(lines.contains(&"Reserved region.".to_string()));
        assert!(lines[0].starts_with("1 byte padding."));
    }
}
