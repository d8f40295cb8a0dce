use std::collections::HashMap;

use log::debug;

use super::corpus::tokenize;
use super::history::History;
use super::ngram_model::NGramModel;
use super::state::State;
use crate::error::{LyricError, Result};

/// Accumulates n-gram counts document by document, then freezes them into
/// an immutable `NGramModel`.
///
/// # Responsibilities
/// - Tokenize each document and skip empty or bracketed tokens
/// - Count every (history, next word) pair
/// - Restart from a placeholder history at each new document
#[derive(Debug)]
pub struct Trainer {
	/// Order of the model being built
	n: usize,

	/// Counts per history key
	states: HashMap<String, State>,

	/// Number of documents seen so far
	documents: usize,
}

impl Trainer {
	/// Creates a trainer for an order-`n` model.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	///
	/// # Notes
	/// - `n == 1` is accepted: every word is counted under the empty history.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(LyricError::InvalidOrder(n));
		}
		Ok(Self { n, states: HashMap::new(), documents: 0 })
	}

	/// Adds one document to the counts.
	pub fn add_document(&mut self, document: &str) {
		let mut history = History::new(self.n);
		let mut words = 0usize;

		for word in tokenize(document) {
			let key = history.key();
			self.states
				.entry(key)
				.or_insert_with_key(|key| State::new(key))
				.add_transition(word);
			history.push(word);
			words += 1;
		}

		self.documents += 1;
		debug!("document {}: {} words counted", self.documents, words);
	}

	/// Normalizes the counts and returns the trained model.
	pub fn build(self) -> NGramModel {
		let histories: HashMap<_, _> = self
			.states
			.into_values()
			.map(|state| (state.key().to_owned(), state.normalize()))
			.collect();

		debug!(
			"order-{} model built from {} documents: {} histories",
			self.n,
			self.documents,
			histories.len()
		);
		NGramModel::new(self.n, histories)
	}
}
