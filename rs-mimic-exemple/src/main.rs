use rs_mimic_core::io::read_file;
use rs_mimic_core::model::frequency::WordFrequency;
use rs_mimic_core::model::generation_input::{GenerationInput, StartSeed};
use rs_mimic_core::model::generator::Generator;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Use the source file given on the command line, or fall back to the
    // bundled sample
    let contents = match env::args().nth(1) {
        Some(path) => read_file(path)?,
        None => include_str!("../data/sample.txt").to_owned(),
    };

    // Build the word chain once; every generation below walks the same chain
    let app: Generator = Generator::from_text(&contents);
    println!("Chain built: {} entries", app.chain().len());

    // Default input: 200 words per section, 15 words per sentence,
    // 3 sentences per paragraph, starting from the first word of the source
    let mut input = GenerationInput::new();

    println!("\n--- Mimic (default settings) ---");
    println!("{}", app.generate(&input)?);

    // Shorter shape: 24 words, 8 per sentence, 2 sentences per paragraph
    input.section_length = 24;
    input.set_sentence_length(8)?;
    input.set_paragraph_length(2)?;

    // Start seed can be set to
    // 'Sentinel' to start from the first word of the source
    // 'Random' to start from a random word of the chain
    // 'Custom' to start from a chosen word (normalized before lookup)
    input.start_seed = StartSeed::Random;

    // Generate 3 short sections, each from a fresh random seed
    println!("--- Mimic (24 words, random start) ---");
    for i in 0..3 {
        println!("Variant {}:\n{}", i + 1, app.generate(&input)?);
    }

    // Test invalid sizes
    match input.set_sentence_length(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Sentence length 0 is invalid, must be at least 1"),
    }
    match input.set_paragraph_length(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Paragraph length 0 is invalid, must be at least 1"),
    }

    // Attempting to start from a word the sample never contains
    input.start_seed = StartSeed::Custom("xylophone".to_owned());
    match app.generate(&input) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("The seed 'xylophone' is not part of the chain"),
    }

    // The most frequent words of the source, count descending
    let frequency = WordFrequency::from_text(&contents);
    let top_words = frequency.top(20);

    println!("\n--- Top {} words ---", top_words.len());
    for (word, count) in &top_words {
        println!("{} {}", word, count);
    }
    println!("\nDisplaying the top {} words only.", top_words.len());

    Ok(())
}
