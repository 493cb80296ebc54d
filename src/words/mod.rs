//! Words Module
//!
//! String reversal used by the `POST /` handler.

mod reverse;


pub use reverse::reverse;

// == Public Constants ==
/// Returned in place of a reversal when no word was supplied.
///
/// This is "No word detected" spelled backwards.
pub const NO_WORD_SENTINEL: &str = "detceted drow oN";
