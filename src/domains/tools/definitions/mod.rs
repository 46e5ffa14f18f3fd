//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod big_rewrite;

pub use big_rewrite::{BigRewriteParams, BigRewriteTool};
