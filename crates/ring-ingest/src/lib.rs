//! Import parser for ringboard.
//!
//! Import text lists areas as bracketed headers followed by their classes
//! in running order:
//!
//! ```text
//! [Main Ring]
//! Lead Line Walk/Trot
//! Beginner Equitation
//!
//! [Ring 2]
//! Hunter Pleasure
//! ```

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{ParsedImport, parse_header, parse_import, parse_show};
