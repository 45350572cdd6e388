//! Top-level module for the word-chain mimic system.
//!
//! This crate provides a word-level mimic text generator, including:
//! - Token normalization shared by every component (`token`)
//! - The word-adjacency model (`WordChain`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)
//! - Word occurrence counting over the same tokens (`WordFrequency`)

/// Token normalization (lowercasing and boundary punctuation stripping).
///
/// Every component derives its keys from this module, so lookups stay
/// consistent across the chain, the generator, and the frequency counter.
pub mod token;

/// Word-adjacency model built from a source text.
///
/// Maps every token to the ordered sequence of tokens observed after it,
/// with the empty-string sentinel marking the start and the dead ends.
pub mod chain;

/// Generation configuration structure.
///
/// Stores the output shape (section, sentence, and paragraph sizes) and
/// the start seed strategy. Used by `Generator`.
pub mod generation_input;

/// High-level interface for generating mimic text from a word chain.
///
/// Exposes chain construction, seeded generation, and sentence and
/// paragraph formatting.
pub mod generator;

/// Word occurrence counting.
///
/// Counts normalized words over the same tokens as the chain and provides
/// the orderings used for display.
pub mod frequency;
