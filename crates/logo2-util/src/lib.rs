//! logo2-util - Foundation types shared across the interpreter pipeline.
//!
//! This crate holds the small pieces every phase needs: source locations
//! and the hash-map types used for name lookup tables. It has no knowledge
//! of tokens, AST nodes, or values.

mod span;

pub use span::Span;

// Re-export the hash maps used for every name -> binding table in the
// workspace (vocabulary, parslet registries, scopes, symbol tables).
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
