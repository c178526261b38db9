//! Token reference parsing and resolution.
//!
//! Token values may be a literal, a whole-string reference such as
//! `{color.base.white}`, or a longer string with references embedded in it
//! (`linear-gradient(to right, {color.a}, {color.b})`). This crate parses
//! those spans and resolves them recursively against a merged token tree,
//! detecting cycles and missing targets.

pub mod ast;
pub mod error;
mod parser;
pub mod resolver;

// --- Public API ---
pub use ast::{Fragment, ValueTemplate};
pub use error::ReferenceError;
pub use parser::parse_value_template;
pub use resolver::{ResolvedTree, Resolver, UnresolvedPolicy};
