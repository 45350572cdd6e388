use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::token::{normalize, tokenize};

/// Occurrence counts of the normalized words of a source text.
///
/// Shares the chain's normalization, so `The`, `the` and `the,` all count as
/// the same word. Words that normalize to the empty string (punctuation
/// runs) are skipped.
///
/// # Responsibilities
/// - Count normalized word occurrences in a single pass
/// - Provide alphabetical and by-count orderings for display
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordFrequency {
	/// Mapping from a normalized word to its number of occurrences.
	counts: HashMap<String, usize>,
}

impl WordFrequency {
	/// Counts the words of a source text.
	pub fn from_text(text: &str) -> Self {
		let mut counts: HashMap<String, usize> = HashMap::new();
		for word in tokenize(text) {
			if word.is_empty() {
				continue;
			}
			*counts.entry(word).or_insert(0) += 1;
		}

		log::debug!("counted {} distinct words", counts.len());

		Self { counts }
	}

	/// Returns the number of occurrences of `word`.
	///
	/// The query is normalized before lookup, so `count("The!")` and
	/// `count("the")` answer the same. An unknown word counts zero.
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(&normalize(word)).copied().unwrap_or(0)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Returns `true` if no word was counted.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Returns every word with its count, sorted alphabetically ascending.
	pub fn alphabetical(&self) -> Vec<(&str, usize)> {
		let mut entries: Vec<(&str, usize)> = self.counts.iter().map(|(word, count)| (word.as_str(), *count)).collect();
		entries.sort();
		entries
	}

	/// Returns the `limit` most frequent words with their counts.
	///
	/// Ordered by count descending; words with the same count are ordered
	/// alphabetically ascending so the listing is stable.
	pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
		let mut entries: Vec<(&str, usize)> = self.counts.iter().map(|(word, count)| (word.as_str(), *count)).collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		entries.truncate(limit);
		entries
	}
}
