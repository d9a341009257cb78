//! Parser tests.
//!
//! - `parser`: statements and every expression form
//! - `precedence`: operator grouping, checked through the rendered program
//! - `errors`: messages and recovery
//! - `properties`: rendering re-parses to the same tree

mod parser;
