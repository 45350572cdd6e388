use rand::Rng;
use rand::prelude::IteratorRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::token::tokenize;

/// The empty-string sentinel.
///
/// It is both the default start key of a generation (it maps to the first
/// word of the source) and the dead-end marker appended to a unique last
/// token so a generation can wrap back instead of getting stuck.
pub const SENTINEL: &str = "";

/// Word-adjacency model of a source text.
///
/// Every token of the source maps to the sequence of tokens observed
/// immediately after it, in source order. Duplicates are kept: a word that
/// follows a given seed five times appears five times in its sequence, which
/// is what weights the uniform random choice during generation.
///
/// # Responsibilities
/// - Build the transition mapping from a source text in a single pass
/// - Answer successor lookups during generation
/// - Provide random keys for the random start strategy
///
/// # Invariants
/// - After building from a non-empty source, the sentinel key exists and its
///   first element is the first token of the source
/// - Every key maps to a non-empty sequence; a last token never observed
///   elsewhere maps to `[SENTINEL]`
/// - All keys and all sequence values are normalized tokens (or the sentinel)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordChain {
	/// Mapping from a token (or the sentinel) to the tokens observed
	/// immediately after it.
	/// Example: { "the" => ["cat", "hall", "cat"] }
	transitions: HashMap<String, Vec<String>>,
}

impl WordChain {
	/// Builds the chain from a source text.
	///
	/// # Behavior
	/// - Splits the text on whitespace and normalizes every word.
	/// - Registers the sentinel entry pointing at the first token.
	/// - Appends each token to the sequence of the token before it.
	/// - If the last token ends up with no successors, appends the sentinel
	///   to its sequence so generation can wrap.
	///
	/// # Notes
	/// - An empty or blank text yields an empty chain.
	/// - A word made only of punctuation normalizes to the empty string and
	///   is recorded under the sentinel key like any other token, so such
	///   words act as resets back to the start of the chain.
	pub fn from_text(text: &str) -> Self {
		let words = tokenize(text);
		let mut transitions: HashMap<String, Vec<String>> = HashMap::new();

		for (i, word) in words.iter().enumerate() {
			// The first token doubles as the successor of the sentinel.
			if i == 0 {
				transitions.insert(SENTINEL.to_owned(), vec![word.clone()]);
			}

			let successors = transitions.entry(word.clone()).or_default();

			if i + 1 == words.len() {
				// A sequence still empty at the last index means the token was
				// never seen before; point it at the sentinel.
				if successors.is_empty() {
					successors.push(SENTINEL.to_owned());
				}
			} else {
				successors.push(words[i + 1].clone());
			}
		}

		log::debug!("built word chain: {} entries from {} words", transitions.len(), words.len());

		Self { transitions }
	}

	/// Returns the observed successors of `token`, if the token is known.
	///
	/// The lookup is exact: keys are normalized tokens and the sentinel.
	pub fn successors(&self, token: &str) -> Option<&[String]> {
		self.transitions.get(token).map(Vec::as_slice)
	}

	/// Number of entries in the chain (distinct tokens, plus the sentinel
	/// for non-empty sources).
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	/// Returns `true` if the chain has no entries.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over the keys of the chain.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.transitions.keys().map(String::as_str)
	}

	/// Returns `true` if at least one real (non-sentinel) token is present.
	///
	/// A source made only of punctuation builds a chain whose single key is
	/// the sentinel; such a chain has no content to mimic.
	pub fn has_words(&self) -> bool {
		self.tokens().any(|token| !token.is_empty())
	}

	/// Returns a random key (seed) from the chain.
	///
	/// Useful for starting a generation somewhere other than the first word
	/// of the source. Returns `None` if the chain is empty.
	pub fn get_random_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
		self.transitions.keys().choose(rng).cloned()
	}
}
