//! Text domain module.
//!
//! Cheap measurements over in-memory text. Both functions are total: every
//! `&str` has an answer and nothing here can fail.

mod lines;
mod tokens;

pub use lines::count_lines;
pub use tokens::{CHARS_PER_TOKEN, estimate_tokens};
