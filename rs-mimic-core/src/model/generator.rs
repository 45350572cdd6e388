use crate::model::chain::{SENTINEL, WordChain};
use crate::model::generation_input::{GenerationInput, StartSeed};
use crate::model::token::normalize;
use rand::Rng;

/// High-level text generator over a word chain.
///
/// # Responsibilities
/// - Own the `WordChain` built from a source text
/// - Resolve the start seed strategy of a `GenerationInput`
/// - Walk the chain and format the picked words into sentences and
///   paragraphs
#[derive(Debug)]
pub struct Generator {
	chain: WordChain
}

impl Generator {
	/// Creates a generator over an already built chain.
	pub fn new(chain: WordChain) -> Self {
		Self { chain }
	}

	/// Builds the chain from a source text and wraps it in a generator.
	pub fn from_text(text: &str) -> Self {
		Self::new(WordChain::from_text(text))
	}

	/// Read-only access to the underlying chain.
	pub fn chain(&self) -> &WordChain {
		&self.chain
	}

	/// Generates a section of mimic text using the thread-local RNG.
	///
	/// Convenience wrapper around `generate_with`.
	pub fn generate(&self, generation_input: &GenerationInput) -> Result<String, String> {
		self.generate_with(generation_input, &mut rand::rng())
	}

	/// Generates a section of mimic text with the given random source.
	///
	/// # Parameters
	/// - `generation_input`: Output shape and start seed strategy.
	/// - `rng`: Random source used to pick among successors; injecting it
	///   keeps generation reproducible under test.
	///
	/// # Returns
	/// - `Ok(String)` with the formatted section
	/// - `Err(String)` if the start seed is unknown, or if a lookup reaches
	///   a key with no successors (possible only on a hand-built or
	///   deserialized chain)
	///
	/// # Behavior
	/// - Walks the chain from the resolved seed, picking one successor
	///   uniformly at random at each step.
	/// - Empty tokens reset the walk through the sentinel entry; they are
	///   neither counted nor emitted.
	/// - Every `sentence_length`-th word closes a sentence and every
	///   `paragraph_length`-th sentence closes a paragraph. The first word
	///   of a sentence is capitalized. The separator after the last word is
	///   kept.
	///
	/// # Notes
	/// - A chain without real words (empty or punctuation-only source)
	///   yields `Ok("")`, as does a zero `section_length`.
	pub fn generate_with<R: Rng + ?Sized>(&self, generation_input: &GenerationInput, rng: &mut R) -> Result<String, String> {
		if !self.chain.has_words() {
			log::debug!("chain has no words, nothing to generate");
			return Ok(String::new());
		}

		let mut seed = match &generation_input.start_seed {
			StartSeed::Sentinel => SENTINEL.to_owned(),
			StartSeed::Custom(raw) => {
				let token = normalize(raw);
				if self.chain.successors(&token).is_none() {
					log::warn!("seed '{}' is not part of the chain", token);
					return Err(format!("Invalid generation state: unknown seed '{}'", token));
				}
				token
			}
			StartSeed::Random => match self.chain.get_random_seed(rng) {
				Some(token) => token,
				None => SENTINEL.to_owned()
			}
		};

		let sentence_length = generation_input.sentence_length();
		let paragraph_length = generation_input.paragraph_length();

		let mut output = String::new();
		let mut count = 0;
		while count < generation_input.section_length {
			let candidates = match self.chain.successors(&seed) {
				Some(successors) if !successors.is_empty() => successors,
				_ => return Err(format!("Invalid generation state: no successors for seed '{}'", seed))
			};
			let word = &candidates[rng.random_range(0..candidates.len())];

			if !word.is_empty() {
				count += 1;
				if count % sentence_length == 1 {
					output.push_str(&Generator::capitalize(word));
				} else {
					output.push_str(word);
				}
				if count % sentence_length == 0 || count == generation_input.section_length {
					// count / sentence_length is the number of completed sentences;
					// a section end mid-sentence never closes a paragraph
					if count % sentence_length == 0 && (count / sentence_length) % paragraph_length == 0 {
						output.push_str(".\n\n");
					} else {
						output.push_str(". ");
					}
				} else {
					output.push(' ');
				}
			}

			seed = word.clone();
		}

		Ok(output)
	}

	/// Uppercases the first character of a word, leaving the rest untouched.
	fn capitalize(word: &str) -> String {
		let mut chars = word.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::tokenize;
	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};
	use std::collections::HashSet;

	/// Counting random source: 0, 1, 2, ...
	///
	/// The range reduction is a widening multiply, so as long as the counter
	/// stays far below `u64::MAX / range` every draw maps to index 0 and the
	/// walk always takes the first successor.
	struct FirstPickRng(u64);

	impl RngCore for FirstPickRng {
		fn next_u32(&mut self) -> u32 {
			self.next_u64() as u32
		}

		fn next_u64(&mut self) -> u64 {
			let value = self.0;
			self.0 += 1;
			value
		}

		fn fill_bytes(&mut self, dest: &mut [u8]) {
			dest.fill(0);
		}
	}

	#[test]
	fn walk_wraps_through_the_sentinel_and_formats_paragraphs() {
		let generator = Generator::from_text("alpha beta gamma");
		let mut input = GenerationInput::new();
		input.section_length = 7;
		input.set_sentence_length(3).unwrap();
		input.set_paragraph_length(2).unwrap();

		let text = generator.generate_with(&input, &mut FirstPickRng(0)).unwrap();
		assert_eq!(text, "Alpha beta gamma. Alpha beta gamma.\n\nAlpha. ");
	}

	#[test]
	fn section_end_on_a_paragraph_boundary_emits_the_paragraph_break() {
		let generator = Generator::from_text("Hello world. Hello there.");
		let mut input = GenerationInput::new();
		input.section_length = 2;
		input.set_sentence_length(2).unwrap();
		input.set_paragraph_length(1).unwrap();

		let text = generator.generate_with(&input, &mut FirstPickRng(0)).unwrap();
		assert_eq!(text, "Hello world.\n\n");
	}

	#[test]
	fn single_word_section_keeps_the_trailing_separator() {
		let generator = Generator::from_text("hi");
		let mut input = GenerationInput::new();
		input.section_length = 1;

		let text = generator.generate_with(&input, &mut FirstPickRng(0)).unwrap();
		assert_eq!(text, "Hi. ");
	}

	#[test]
	fn extreme_sentence_length_does_not_overflow_the_paragraph_check() {
		let generator = Generator::from_text("alpha beta gamma");
		let mut input = GenerationInput::new();
		input.section_length = 2;
		input.set_sentence_length(usize::MAX).unwrap();

		let text = generator.generate_with(&input, &mut FirstPickRng(0)).unwrap();
		assert_eq!(text, "Alpha beta. ");
	}

	#[test]
	fn custom_seed_is_normalized_before_lookup() {
		let generator = Generator::from_text("one two three");
		let mut input = GenerationInput::new();
		input.section_length = 1;
		input.start_seed = StartSeed::Custom("\"Two!\"".to_owned());

		let text = generator.generate_with(&input, &mut FirstPickRng(0)).unwrap();
		assert_eq!(text, "Three. ");
	}

	#[test]
	fn unknown_custom_seed_is_rejected() {
		let generator = Generator::from_text("one two three");
		let mut input = GenerationInput::new();
		input.start_seed = StartSeed::Custom("zebra".to_owned());

		let error = generator.generate(&input).unwrap_err();
		assert_eq!(error, "Invalid generation state: unknown seed 'zebra'");
	}

	#[test]
	fn zero_section_length_generates_nothing() {
		let generator = Generator::from_text("some words here");
		let mut input = GenerationInput::new();
		input.section_length = 0;

		assert_eq!(generator.generate(&input).unwrap(), "");
	}

	#[test]
	fn sources_without_words_generate_empty_output() {
		let mut input = GenerationInput::new();
		input.section_length = 10;

		assert_eq!(Generator::from_text("").generate(&input).unwrap(), "");
		assert_eq!(Generator::from_text("-- !! ??").generate(&input).unwrap(), "");
	}

	#[test]
	fn generated_words_come_from_the_source_and_match_the_requested_count() {
		let source = "the cat sat on the mat and the dog sat on the rug";
		let generator = Generator::from_text(source);
		let vocabulary: HashSet<String> = tokenize(source).into_iter().collect();

		let mut input = GenerationInput::new();
		input.section_length = 50;

		let mut rng = StdRng::seed_from_u64(42);
		let text = generator.generate_with(&input, &mut rng).unwrap();

		let words: Vec<&str> = text.split_whitespace().collect();
		assert_eq!(words.len(), 50);
		for word in words {
			assert!(vocabulary.contains(&normalize(word)));
		}
	}

	#[test]
	fn random_start_seed_generates_from_the_chain() {
		let generator = Generator::from_text("north south east west");
		let mut input = GenerationInput::new();
		input.section_length = 8;
		input.start_seed = StartSeed::Random;

		let text = generator.generate(&input).unwrap();
		assert!(!text.is_empty());
	}

	#[test]
	fn dead_end_seed_reports_an_invalid_state() {
		let chain: WordChain = serde_json::from_str(r#"{"transitions":{"":["stuck"],"stuck":[]}}"#).unwrap();
		let generator = Generator::new(chain);
		let mut input = GenerationInput::new();
		input.section_length = 2;

		let error = generator.generate(&input).unwrap_err();
		assert_eq!(error, "Invalid generation state: no successors for seed 'stuck'");
	}
}
