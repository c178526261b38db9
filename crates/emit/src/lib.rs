//! Format emitters for resolved design tokens.
//!
//! Each emitter selects its subset of the tree with a [`TokenFilter`] and
//! renders one [`Artifact`]: CSS custom properties (with an optional
//! Tailwind `@theme` block), typography utility classes, Mantine palette
//! tuples, plain data modules for code consumers, and `@font-face` rules.

pub mod artifact;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod format;
pub mod media;

pub use artifact::{Artifact, CommentStyle};
pub use emitter::{
    BrandPaletteEmitter, CssVariableEmitter, DataShape, Emit, Emitter, FontFaceEmitter, ModuleFormat,
    PlatformDataEmitter, TypographyClassEmitter,
};
pub use error::EmitError;
pub use filter::TokenFilter;
pub use media::{Breakpoint, MediaQueries};
