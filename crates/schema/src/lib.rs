//! # fieldguide-schema
//!
//! The descriptor object model for binary layouts.
//!
//! A layout is a tree of [`Descriptor`] nodes: aggregates (structs,
//! switches), symbolic views (enums), name- and transform-attaching
//! wrappers, and leaf fields (explicit-width integers, printf-struct
//! format fields, flags, padding). The tree is acyclic by construction,
//! but a single node may be shared under multiple parents through its
//! `Arc`, which is how common field definitions are reused across
//! layouts.
//!
//! This crate only *describes* layouts. Parsing or building binary data
//! against a descriptor tree is deliberately out of scope; consumers such
//! as the `fieldguide` renderer inspect already-constructed nodes and
//! nothing more.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod descriptor;
mod shortcuts;

pub use descriptor::{CaseValue, Descriptor, DescriptorKind, SwitchCase};
