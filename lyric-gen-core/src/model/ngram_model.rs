use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use super::distribution::Distribution;
use super::trainer::Trainer;
use crate::error::Result;

/// Word-level n-gram model.
///
/// Maps every history seen during training (the space-joined (n-1)
/// preceding words) to the distribution of the words that followed it.
///
/// # Invariants
/// - `n` is always >= 1
/// - Every distribution is non-empty and normalized
/// - The model is never mutated once built
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NGramModel {
	/// The order of the model (history length + 1)
	n: usize,

	/// Mapping from a history to the distribution of its continuations
	histories: HashMap<String, Distribution>,
}

impl NGramModel {
	pub(crate) fn new(n: usize, histories: HashMap<String, Distribution>) -> Self {
		Self { n, histories }
	}

	/// Trains an order-`n` model on every document of `corpus`.
	///
	/// An empty corpus yields an empty model.
	///
	/// # Errors
	/// Returns `LyricError::InvalidOrder` if `n == 0`.
	pub fn train(corpus: &Corpus, n: usize) -> Result<Self> {
		let mut trainer = Trainer::new(n)?;
		for document in corpus.documents() {
			trainer.add_document(document);
		}
		Ok(trainer.build())
	}

	/// The order `n` the model was trained with.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Distribution of the words observed after `history`.
	pub fn get(&self, history: &str) -> Option<&Distribution> {
		self.histories.get(history)
	}

	pub fn contains(&self, history: &str) -> bool {
		self.histories.contains_key(history)
	}

	/// Iterates over `(history, distribution)` pairs in arbitrary order.
	pub fn histories(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.histories.iter().map(|(key, distribution)| (key.as_str(), distribution))
	}

	/// Number of distinct histories.
	pub fn len(&self) -> usize {
		self.histories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.histories.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::LyricError;

	fn assert_close(actual: Option<f64>, expected: f64) {
		let actual = actual.expect("missing word");
		assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
	}

	#[test]
	fn bigram_scenario() {
		let model = NGramModel::train(&Corpus::from("I love cats I love dogs"), 2).unwrap();

		assert_eq!(model.order(), 2);
		assert_eq!(model.len(), 4);
		assert_close(model.get("~").unwrap().probability_of("I"), 1.0);
		assert_close(model.get("I").unwrap().probability_of("love"), 1.0);
		assert_close(model.get("love").unwrap().probability_of("cats"), 0.5);
		assert_close(model.get("love").unwrap().probability_of("dogs"), 0.5);
		assert_close(model.get("cats").unwrap().probability_of("I"), 1.0);
		assert!(model.get("dogs").is_none());
	}

	#[test]
	fn ties_are_ordered_by_first_occurrence() {
		let model = NGramModel::train(&Corpus::from("I love cats I love dogs"), 2).unwrap();
		let words: Vec<&str> = model.get("love").unwrap().words().collect();
		assert_eq!(words, vec!["cats", "dogs"]);
	}

	#[test]
	fn most_frequent_comes_first() {
		let model = NGramModel::train(&Corpus::from("a x a y a y"), 2).unwrap();
		let distribution = model.get("a").unwrap();
		assert_eq!(distribution.words().collect::<Vec<_>>(), vec!["y", "x"]);
		assert_close(distribution.probability_of("y"), 2.0 / 3.0);
	}

	#[test]
	fn every_distribution_is_normalized() {
		let corpus = Corpus::from(vec![
			"the sun is up\nthe sun is out\nthe moon is down",
			"[Chorus]\nthe sun the sun the moon\nis up is up",
		]);
		for n in 1..=4 {
			let model = NGramModel::train(&corpus, n).unwrap();
			for (_, distribution) in model.histories() {
				assert!(!distribution.is_empty());
				let sum: f64 = distribution.probabilities().iter().sum();
				assert!((sum - 1.0).abs() < 1e-9, "n={n} sum={sum}");
			}
		}
	}

	#[test]
	fn histories_have_n_minus_one_words() {
		let corpus = Corpus::from("one two three four five six");
		let model = NGramModel::train(&corpus, 3).unwrap();
		for (history, _) in model.histories() {
			assert_eq!(history.split(' ').count(), 2, "{history:?}");
		}
		assert!(model.contains("~ ~"));
		assert!(model.contains("~ one"));
		assert!(model.contains("one two"));
	}

	#[test]
	fn histories_never_cross_documents() {
		let model = NGramModel::train(&Corpus::from(vec!["a b", "c d"]), 2).unwrap();
		assert!(model.get("b").is_none());
		let starts: Vec<&str> = model.get("~").unwrap().words().collect();
		assert_eq!(starts, vec!["a", "c"]);
	}

	#[test]
	fn skipped_tokens_never_appear() {
		let corpus = Corpus::from("[Intro]\nhey  there\n[Chorus 2]\nhey [x] you\t\t");
		let model = NGramModel::train(&corpus, 2).unwrap();
		for (history, distribution) in model.histories() {
			assert!(!history.is_empty());
			assert!(!history.contains('[') && !history.contains(']'));
			for word in distribution.words() {
				assert!(!word.is_empty());
				assert!(!word.contains('[') && !word.contains(']'));
			}
		}
		// Skipped tokens do not reset the history either
		assert_close(model.get("hey").unwrap().probability_of("you"), 0.5);
	}

	#[test]
	fn empty_corpus_gives_empty_model() {
		assert!(NGramModel::train(&Corpus::new(), 3).unwrap().is_empty());
		assert!(NGramModel::train(&Corpus::from(" \n\t"), 3).unwrap().is_empty());
	}

	#[test]
	fn unigram_model_uses_the_empty_history() {
		let model = NGramModel::train(&Corpus::from("a b a"), 1).unwrap();
		assert_eq!(model.len(), 1);
		assert_close(model.get("").unwrap().probability_of("a"), 2.0 / 3.0);
	}

	#[test]
	fn order_zero_is_rejected() {
		assert!(matches!(
			NGramModel::train(&Corpus::from("a b"), 0),
			Err(LyricError::InvalidOrder(0))
		));
	}
}
