//! Multi-pattern literal phrase matching.
//!
//! Builds an ephemeral character-level trie per call and scans the text in
//! a single pass. Nothing is shared between calls, so concurrent scans
//! need no locking.

mod trie;

pub use trie::{MatchResult, match_phrases};
