//! Parser tests.
//!
//! - `parser`: statements, precedence, literals and error recovery
//! - `modify`: the post-order rewrite
