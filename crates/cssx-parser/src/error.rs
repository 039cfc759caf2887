//! Parser error types
//!
//! The parser reports through the shared core error shape.

pub use cssx_core::error::{ParseError, ParseErrorKind, Result};
