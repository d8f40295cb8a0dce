use std::collections::VecDeque;

/// Placeholder word filling the history before any word has been seen.
/// It is also the token produced for a history the model never observed.
pub const PLACEHOLDER: &str = "~";

/// Sliding window over the last (n-1) words.
///
/// # Invariants
/// - The window always holds exactly `n - 1` words
/// - `key()` is the words joined by a single space, which is the form
///   used to index an `NGramModel`
#[derive(Clone, Debug, PartialEq)]
pub struct History {
	words: VecDeque<String>,
}

impl History {
	/// Creates the initial history of an order-`n` model: `n - 1`
	/// placeholders. For `n <= 1` the window is empty.
	pub fn new(n: usize) -> Self {
		let size = n.saturating_sub(1);
		Self {
			words: std::iter::repeat_n(PLACEHOLDER.to_owned(), size).collect(),
		}
	}

	/// Slides the window: drops the oldest word and appends `word`.
	///
	/// An empty window stays empty.
	pub fn push(&mut self, word: &str) {
		if self.words.pop_front().is_some() {
			self.words.push_back(word.to_owned());
		}
	}

	/// Number of words in the window (`n - 1`).
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// The space-joined key of the current window.
	pub fn key(&self) -> String {
		self.words.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_with_placeholders() {
		assert_eq!(History::new(2).key(), "~");
		assert_eq!(History::new(4).key(), "~ ~ ~");
	}

	#[test]
	fn push_keeps_the_window_size() {
		let mut history = History::new(3);
		for word in ["a", "b", "c", "d"] {
			history.push(word);
			assert_eq!(history.len(), 2);
		}
		assert_eq!(history.key(), "c d");
	}

	#[test]
	fn push_partially_replaces_placeholders() {
		let mut history = History::new(3);
		history.push("hello");
		assert_eq!(history.key(), "~ hello");
	}

	#[test]
	fn unigram_history_is_empty() {
		let mut history = History::new(1);
		history.push("word");
		assert!(history.is_empty());
		assert_eq!(history.key(), "");
	}
}
