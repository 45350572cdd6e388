//! Word-chain mimic text generation library.
//!
//! This crate builds a word-adjacency model from a source text and
//! generates new text imitating it:
//! - Normalized word tokens with an empty-string start sentinel
//! - Uniform random successor choice, weighted by repetition in the source
//! - Sentence and paragraph formatting of the generated words
//! - Word frequency counting over the same tokens

/// Core chain model and generation logic.
///
/// Exposes the chain, the generator, the generation configuration, and the
/// word frequency counter.
pub mod model;

/// I/O utilities (source file loading).
pub mod io;
