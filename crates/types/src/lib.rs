pub mod brand;
pub mod diagnostic;
pub mod error;
pub mod path;
pub mod token;
pub mod tree;

pub use brand::{Brand, BuildKey, Mode};
pub use diagnostic::Diagnostic;
pub use error::TreeError;
pub use path::TokenPath;
pub use token::{Token, TokenMetadata, VALUE_KEYS};
pub use tree::{TokenGroup, TokenNode, TokenTree};
