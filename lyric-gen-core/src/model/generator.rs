use log::debug;

use super::corpus::Corpus;
use super::history::{History, PLACEHOLDER};
use super::ngram_model::NGramModel;
use super::sampler::WeightedSampler;

/// Samples the next word for `history`.
///
/// Returns the placeholder `~` if the model never observed this history.
fn next_word<S: WeightedSampler + ?Sized>(
	model: &NGramModel,
	history: &History,
	sampler: &mut S,
) -> String {
	model
		.get(&history.key())
		.and_then(|distribution| distribution.sample(sampler))
		.unwrap_or(PLACEHOLDER)
		.to_owned()
}

/// Generates exactly `n_words` raw words from the model.
///
/// # Behavior
/// - Starts from `n - 1` placeholders
/// - At each step, draws a word from the distribution of the current
///   history, or `~` if the history is unknown
/// - Slides the history over the drawn word, placeholders included
///
/// # Notes
/// - `n` should match `model.order()`: with any other value no history
///   matches and every word is `~`.
/// - Once the window is filled with placeholders past the start of the
///   text, generation can keep producing `~` until `n_words` is reached.
pub fn generate_words<S: WeightedSampler + ?Sized>(
	model: &NGramModel,
	n: usize,
	n_words: usize,
	sampler: &mut S,
) -> Vec<String> {
	let mut history = History::new(n);
	let mut words = Vec::with_capacity(n_words);

	for _ in 0..n_words {
		let word = next_word(model, &history, sampler);
		history.push(&word);
		words.push(word);
	}

	words
}

/// Removes a leading `(` and a trailing `)` from a word.
///
/// Only the boundary characters are looked at: `"(hello)"` becomes
/// `"hello"` and `"(glow"` becomes `"glow"`, but inner brackets are kept.
pub fn strip_brackets(word: &str) -> &str {
	let word = word.strip_prefix('(').unwrap_or(word);
	word.strip_suffix(')').unwrap_or(word)
}

/// Puts back line breaks in front of words that start a line somewhere in
/// the corpus.
///
/// The first word is never touched. This is a heuristic: a word is moved to
/// a new line if it follows a line break anywhere in the corpus, whatever
/// its actual context.
pub fn restore_line_breaks(words: &mut [String], corpus: &Corpus) {
	for word in words.iter_mut().skip(1) {
		if !word.starts_with('\n') && corpus.has_line_start(word) {
			word.insert(0, '\n');
		}
	}
}

/// Generates `n_words` words and renders them as text.
///
/// # Parameters
/// - `corpus`: The text the model was trained on, used to place line breaks.
/// - `model`: A model trained with order `n`.
/// - `n`: Order of the model.
/// - `n_words`: Number of words to generate (0 gives an empty string).
/// - `sampler`: Source of randomness.
///
/// # Returns
/// The words joined by single spaces. Words that start a line are prefixed
/// with `\n`, so the output can contain `"word \nnext"` sequences.
pub fn generate<S: WeightedSampler + ?Sized>(
	corpus: &Corpus,
	model: &NGramModel,
	n: usize,
	n_words: usize,
	sampler: &mut S,
) -> String {
	let mut words: Vec<String> = generate_words(model, n, n_words, sampler)
		.iter()
		.map(|word| strip_brackets(word).to_owned())
		.collect();
	restore_line_breaks(&mut words, corpus);

	debug!(
		"generated {} words, {} unknown histories",
		words.len(),
		words.iter().filter(|word| word.as_str() == PLACEHOLDER).count()
	);
	words.join(" ")
}
