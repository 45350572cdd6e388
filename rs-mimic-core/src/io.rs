use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns its whole content as a `String`.
///
/// - Reads the entire file into memory
/// - No size guard: sources are expected to fit comfortably in memory
///
/// # Errors
/// Returns the underlying I/O error if the file cannot be opened or read.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
