/// Default number of real words emitted per section.
pub const DEFAULT_SECTION_LENGTH: usize = 200;

/// Default number of sentences per paragraph.
pub const DEFAULT_PARAGRAPH_LENGTH: usize = 3;

/// Default number of words per sentence.
pub const DEFAULT_SENTENCE_LENGTH: usize = 15;

/// Strategy used to select the starting seed (lookup key) of a generation.
///
/// # Variants
/// - `Sentinel`: start from the empty-string sentinel, which maps to the
///   first word of the source text.
/// - `Custom(String)`: start from the given word; it is normalized before
///   lookup and must be part of the chain.
/// - `Random`: start from a random key of the chain.
#[derive(PartialEq, Debug)]
pub enum StartSeed {
	Sentinel,
	Custom(String),
	Random,
}

/// Input parameters for one text generation.
///
/// `GenerationInput` contains the output shape (section, sentence, and
/// paragraph sizes) and the starting seed strategy.
///
/// # Responsibilities
/// - Track generation parameters (`section_length`, `start_seed`)
/// - Guard the two sizes the formatter takes `count` modulo of
///   (`sentence_length`, `paragraph_length`), which therefore can never be
///   zero
///
/// # Invariants
/// - `sentence_length >= 1` and `paragraph_length >= 1`
pub struct GenerationInput {
	/// Total number of real words to emit (the section size).
	/// Zero is allowed and produces an empty output.
	pub section_length: usize,

	/// Starting seed strategy.
	pub start_seed: StartSeed,

	/// Number of words per sentence. Never zero.
	sentence_length: usize,

	/// Number of sentences per paragraph. Never zero.
	paragraph_length: usize,
}

impl GenerationInput {
	/// Creates an input with the default sizes (200 words per section, 15
	/// words per sentence, 3 sentences per paragraph), starting from the
	/// sentinel.
	pub fn new() -> Self {
		Self {
			section_length: DEFAULT_SECTION_LENGTH,
			start_seed: StartSeed::Sentinel,
			sentence_length: DEFAULT_SENTENCE_LENGTH,
			paragraph_length: DEFAULT_PARAGRAPH_LENGTH,
		}
	}

	/// Returns the current sentence length (words per sentence).
	pub fn sentence_length(&self) -> usize {
		self.sentence_length
	}

	/// Returns the current paragraph length (sentences per paragraph).
	pub fn paragraph_length(&self) -> usize {
		self.paragraph_length
	}

	/// Sets the sentence length (words per sentence).
	///
	/// # Errors
	/// Returns an error if `sentence_length` is zero.
	pub fn set_sentence_length(&mut self, sentence_length: usize) -> Result<(), String> {
		if sentence_length == 0 {
			return Err("Sentence length must be at least 1".to_owned());
		}
		self.sentence_length = sentence_length;
		Ok(())
	}

	/// Sets the paragraph length (sentences per paragraph).
	///
	/// # Errors
	/// Returns an error if `paragraph_length` is zero.
	pub fn set_paragraph_length(&mut self, paragraph_length: usize) -> Result<(), String> {
		if paragraph_length == 0 {
			return Err("Paragraph length must be at least 1".to_owned());
		}
		self.paragraph_length = paragraph_length;
		Ok(())
	}
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self::new()
	}
}
