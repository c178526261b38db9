//! The closed set of output formats.
//!
//! Every emitter is a pure function from a resolved token tree to one
//! [`Artifact`]. The [`Emitter`] enum dispatches statically; orchestration
//! code picks the variants it needs per build key.

use crate::artifact::Artifact;
use crate::error::EmitError;
use swatch_reference::ResolvedTree;

pub mod css_variables;
pub mod font_face;
pub mod palette;
pub mod platform;
pub mod typography;

pub use css_variables::CssVariableEmitter;
pub use font_face::FontFaceEmitter;
pub use palette::BrandPaletteEmitter;
pub use platform::{DataShape, ModuleFormat, PlatformDataEmitter};
pub use typography::TypographyClassEmitter;

/// A component that turns a resolved token tree into one generated file.
pub trait Emit {
    /// Where the artifact goes, relative to the output root.
    fn output_path(&self) -> &str;

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError>;
}

/// An enum for static dispatch of `Emit` implementations.
#[derive(Debug, Clone)]
pub enum Emitter {
    CssVariables(CssVariableEmitter),
    TypographyClasses(TypographyClassEmitter),
    BrandPalette(BrandPaletteEmitter),
    PlatformData(PlatformDataEmitter),
    FontFace(FontFaceEmitter),
}

impl Emitter {
    /// A short label for logs and build reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Emitter::CssVariables(e) if e.tailwind_theme => "css-theme",
            Emitter::CssVariables(_) => "css-variables",
            Emitter::TypographyClasses(_) => "typography-classes",
            Emitter::BrandPalette(_) => "brand-palette",
            Emitter::PlatformData(_) => "platform-data",
            Emitter::FontFace(_) => "font-face",
        }
    }
}

impl Emit for Emitter {
    fn output_path(&self) -> &str {
        match self {
            Emitter::CssVariables(e) => e.output_path(),
            Emitter::TypographyClasses(e) => e.output_path(),
            Emitter::BrandPalette(e) => e.output_path(),
            Emitter::PlatformData(e) => e.output_path(),
            Emitter::FontFace(e) => e.output_path(),
        }
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        log::debug!("Emitting {} to '{}'", self.kind(), self.output_path());
        match self {
            Emitter::CssVariables(e) => e.emit(resolved),
            Emitter::TypographyClasses(e) => e.emit(resolved),
            Emitter::BrandPalette(e) => e.emit(resolved),
            Emitter::PlatformData(e) => e.emit(resolved),
            Emitter::FontFace(e) => e.emit(resolved),
        }
    }
}

impl From<CssVariableEmitter> for Emitter {
    fn from(e: CssVariableEmitter) -> Self {
        Emitter::CssVariables(e)
    }
}

impl From<TypographyClassEmitter> for Emitter {
    fn from(e: TypographyClassEmitter) -> Self {
        Emitter::TypographyClasses(e)
    }
}

impl From<BrandPaletteEmitter> for Emitter {
    fn from(e: BrandPaletteEmitter) -> Self {
        Emitter::BrandPalette(e)
    }
}

impl From<PlatformDataEmitter> for Emitter {
    fn from(e: PlatformDataEmitter) -> Self {
        Emitter::PlatformData(e)
    }
}

impl From<FontFaceEmitter> for Emitter {
    fn from(e: FontFaceEmitter) -> Self {
        Emitter::FontFace(e)
    }
}
