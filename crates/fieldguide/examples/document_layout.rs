use std::sync::Arc;

use anyhow::Context;
use fieldguide::schema::{Descriptor, SwitchCase};
use fieldguide::App;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let outdir = std::env::temp_dir().join("fieldguide-example");
    let mut app = App::new(&outdir);
    fieldguide::setup(Some(&mut app))?;

    let kind = Descriptor::enum_of(
        Descriptor::bits_integer(4, false).arc(),
        [("DATA", 0x1), ("ACK", 0x2), ("RESET", 0xF)],
    )
    .named("kind")
    .with_docs("What the frame carries.")
    .arc();

    let header = Descriptor::struct_of([
        Descriptor::uint8().named("version").arc(),
        Arc::clone(&kind),
        Descriptor::uint16_be()
            .named("length")
            .with_docs("Payload length in bytes.")
            .arc(),
        Descriptor::padding(1).arc(),
    ])
    .named("Header")
    .arc();

    let body = Descriptor::switch(
        Some("Header.kind"),
        [
            SwitchCase::new(
                0x1,
                Descriptor::struct_of([
                    Descriptor::uint32_be().named("offset").arc(),
                    Descriptor::flag()
                        .named("last")
                        .with_docs("Set on the final chunk.")
                        .arc(),
                ])
                .named("Data")
                .arc(),
            ),
            SwitchCase::new(0x2, Descriptor::pass().named("Ack").arc()),
        ],
    )
    .named("Body")
    .arc();

    let frame = Descriptor::struct_of([Arc::clone(&header), Arc::clone(&body)])
        .named("Frame")
        .with_docs("One frame on the wire.")
        .arc();

    app.document_item("proto", "wire::Frame", &frame)
        .context("no documenter accepted the frame")?;
    app.document_item("proto", "wire::Header", &header)
        .context("no documenter accepted the header")?;

    for name in app.page_names() {
        println!("──── {name} ────");
        if let Some(page) = app.page(name) {
            for line in page {
                println!("{line}");
            }
        }
    }

    let written = app.write_pages()?;
    app.finish_build(None)?;
    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
