//! Pure value transforms for the token emitters.
//!
//! Every function here is side-effect free. Emitters pick the transforms
//! they need and apply them after reference resolution, so a referenced
//! token's pixel value is already concrete when it gets converted.

pub mod chain;
pub mod dimension;
pub mod name;
pub mod palette;
pub mod parsers;

pub use chain::{TransformChain, ValueTransform};
pub use dimension::{DEFAULT_REM_BASE, number_value, px_to_number, px_to_rem, trim_decimal};
pub use name::{NameTransform, camel_to_kebab, dedupe_doubled_segment, kebab_to_camel};
pub use palette::{PALETTE_LENGTH, STANDARD_SHADES, is_shade_key, order_shades, pad_palette_array};
pub use parsers::{TransformError, parse_px};
