/// Punctuation characters stripped from word boundaries during normalization.
///
/// Only the boundaries are stripped: punctuation inside a word, like the
/// apostrophe in `don't` or the hyphen in `well-known`, is preserved.
pub const BOUNDARY_PUNCTUATION: &[char] = &[
	'.', ',', ':', ';', '-', '`', '\'', '"', '!', '?', '(', ')', '[', ']',
];

/// Normalizes a raw word into a token.
///
/// - Converts to lowercase
/// - Strips `BOUNDARY_PUNCTUATION` from both ends
///
/// Normalizing an already-normalized token returns it unchanged. A word made
/// only of boundary punctuation normalizes to the empty string.
pub fn normalize(raw: &str) -> String {
	raw.to_lowercase().trim_matches(BOUNDARY_PUNCTUATION).to_owned()
}

/// Splits a text on whitespace and normalizes every word.
///
/// Tokens keep the order of the source text. Empty tokens are kept: a word
/// consisting only of punctuation normalizes to `""`, which the chain treats
/// as a reset marker.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(normalize).collect()
}
