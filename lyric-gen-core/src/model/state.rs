use std::collections::HashMap;

use super::distribution::Distribution;

/// Training-time counts for a single history.
///
/// A `State` corresponds to one (n-1)-word history (`key`) and stores every
/// word observed right after it, with the number of observations.
///
/// ## Responsibilities:
/// - Accumulate continuation counts during training
/// - Remember the order in which continuations were first seen
/// - Normalize the counts into a `Distribution`
///
/// ## Invariants
/// - `counts` holds each continuation once, in first-encountered order
/// - Each count is strictly positive
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (space-joined history).
	key: String,
	/// Continuations and their counts, in first-encountered order.
	/// Example: [("love", 2), ("hate", 1)]
	counts: Vec<(String, usize)>,
	/// Position of each continuation in `counts`.
	index: HashMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given history.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			counts: Vec::new(),
			index: HashMap::new(),
		}
	}

	pub(crate) fn key(&self) -> &str {
		&self.key
	}

	/// Records one occurrence of `word` after this history.
	pub(crate) fn add_transition(&mut self, word: &str) {
		match self.index.get(word) {
			Some(&position) => self.counts[position].1 += 1,
			None => {
				self.index.insert(word.to_owned(), self.counts.len());
				self.counts.push((word.to_owned(), 1));
			}
		}
	}

	/// Converts the counts into `(word, frequency)` pairs.
	///
	/// Pairs are ordered by descending count; equal counts keep their
	/// first-encountered order (the sort is stable).
	pub(crate) fn normalize(&self) -> Distribution {
		let total: usize = self.counts.iter().map(|(_, count)| count).sum();

		let mut ordered: Vec<&(String, usize)> = self.counts.iter().collect();
		ordered.sort_by(|a, b| b.1.cmp(&a.1));

		let entries = ordered
			.into_iter()
			.map(|(word, count)| (word.clone(), *count as f64 / total as f64))
			.collect();
		Distribution::new(entries)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_repeated_transitions() {
		let mut state = State::new("love");
		state.add_transition("cats");
		state.add_transition("dogs");
		state.add_transition("cats");

		let distribution = state.normalize();
		assert_eq!(distribution.words().collect::<Vec<_>>(), vec!["cats", "dogs"]);
		assert!((distribution.probability_of("cats").unwrap() - 2.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn ties_keep_first_seen_order() {
		let mut state = State::new("~");
		for word in ["b", "a", "c", "a", "b"] {
			state.add_transition(word);
		}

		let distribution = state.normalize();
		let words: Vec<&str> = distribution.words().collect();
		assert_eq!(words, vec!["b", "a", "c"]);
	}
}
