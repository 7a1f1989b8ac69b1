//! # Fieldguide Design Documentation
//!
//! This crate contains design documentation and architectural decision
//! records for the Fieldguide project.
//!
//! ## Documentation Location
//!
//! All design documents are located in the `docs/` directory at the root
//! of this crate.
//!
//! Key documents:
//! - `architecture.md` - Overall system architecture
//!
//! ## Project Shape
//!
//! Fieldguide is split in two:
//! - `fieldguide-schema` - the descriptor object model for binary
//!   layouts, with no knowledge of rendering
//! - `fieldguide` - the renderer, documenters and host application
//!   surface that turn descriptor trees into reStructuredText pages

// This is a documentation-only crate
#![no_std]
