//! Format-field rendering

use std::sync::Arc;

use fieldguide_schema::{Descriptor, DescriptorKind};
use tracing::warn;

use super::Renderer;
use crate::consts::{endian_spec, format_spec};

/// Render a format field: byte order, packed size, and one type row per
/// format character.
///
/// Characters outside the format alphabet are skipped with a warning
/// instead of failing the build.
pub fn render(r: &mut Renderer<'_>, descriptor: &Arc<Descriptor>) {
    let DescriptorKind::FormatField { fmt, bytes } = descriptor.kind() else {
        return;
    };
    let mut chars = fmt.chars();

    let endian = chars
        .next()
        .and_then(endian_spec)
        .map(|spec| spec.endian.to_string());
    match endian {
        Some(endian) => r.append(format!("**Endian:** {endian}")),
        None => {
            warn!(fmt = %fmt, "format string has no endianness prefix");
            r.append("**Endian:** unspecified");
        }
    }
    r.append_blank();

    r.append(format!("**Size:** {bytes}"));
    r.append_blank();

    r.append("**Underlying Types:**");
    r.append_blank();
    for c in chars {
        let Some(spec) = format_spec(c) else {
            warn!(format = %c, "unknown format character");
            continue;
        };
        r.append(format!("  Type: {}", spec.rust_type));
        r.append_blank();
        if let Some(size) = spec.std_size {
            r.append(format!("  Size: {size}"));
            r.append_blank();
        }
        r.append(format!("  Sign: {}", spec.signed));
        r.append_blank();
    }
    r.append_docs(descriptor);
}
