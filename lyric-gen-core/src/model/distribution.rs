use serde::{Deserialize, Serialize};

use super::sampler::WeightedSampler;

/// Probability distribution over the words following one history.
///
/// # Invariants
/// - Never empty once produced by training
/// - Probabilities sum to 1.0 (within floating-point tolerance)
/// - Entries are ordered by descending probability
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Distribution {
	entries: Vec<(String, f64)>,
}

impl Distribution {
	pub(crate) fn new(entries: Vec<(String, f64)>) -> Self {
		Self { entries }
	}

	/// The `(word, probability)` pairs, most frequent first.
	pub fn entries(&self) -> &[(String, f64)] {
		&self.entries
	}

	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(word, _)| word.as_str())
	}

	pub fn probabilities(&self) -> Vec<f64> {
		self.entries.iter().map(|(_, probability)| *probability).collect()
	}

	/// Probability of `word`, or `None` if it never followed this history.
	pub fn probability_of(&self, word: &str) -> Option<f64> {
		self.entries
			.iter()
			.find(|(candidate, _)| candidate == word)
			.map(|(_, probability)| *probability)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Draws one word, using the stored probabilities as weights.
	pub fn sample<S: WeightedSampler + ?Sized>(&self, sampler: &mut S) -> Option<&str> {
		let index = sampler.choose_index(&self.probabilities())?;
		self.entries.get(index).map(|(word, _)| word.as_str())
	}
}
