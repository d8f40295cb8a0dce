use serde::{Deserialize, Serialize};

/// Characters a document is split on. Each one is a separator on its own,
/// so runs of them produce empty tokens that are skipped later.
const SEPARATORS: [char; 3] = [' ', '\n', '\t'];

/// Returns `true` if a token takes part in training.
///
/// Empty tokens and section annotations such as `[Chorus]` are skipped.
pub fn is_trainable(token: &str) -> bool {
	!token.is_empty() && !token.contains('[') && !token.contains(']')
}

/// Splits a document into its trainable tokens, in document order.
pub fn tokenize(document: &str) -> impl Iterator<Item = &str> {
	document.split(SEPARATORS).filter(|token| is_trainable(token))
}

/// A body of training text made of one or more independent documents.
///
/// A single text is simply a corpus of one document: histories never span
/// two documents, and nothing downstream special-cases the singular form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Corpus {
	documents: Vec<String>,
}

impl Corpus {
	/// Creates an empty corpus.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a document.
	pub fn push(&mut self, document: impl Into<String>) {
		self.documents.push(document.into());
	}

	pub fn documents(&self) -> &[String] {
		&self.documents
	}

	/// Number of documents.
	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	/// Returns `true` if `word` directly follows a line break somewhere in
	/// the corpus.
	///
	/// This is a plain substring scan over every document, regardless of
	/// where the match sits.
	pub fn has_line_start(&self, word: &str) -> bool {
		let needle = format!("\n{word}");
		self.documents.iter().any(|document| document.contains(&needle))
	}
}

impl From<&str> for Corpus {
	fn from(document: &str) -> Self {
		Self { documents: vec![document.to_owned()] }
	}
}

impl From<String> for Corpus {
	fn from(document: String) -> Self {
		Self { documents: vec![document] }
	}
}

impl From<Vec<String>> for Corpus {
	fn from(documents: Vec<String>) -> Self {
		Self { documents }
	}
}

impl From<Vec<&str>> for Corpus {
	fn from(documents: Vec<&str>) -> Self {
		Self { documents: documents.into_iter().map(str::to_owned).collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_skips_empty_and_bracketed_tokens() {
		let tokens: Vec<&str> = tokenize("[Verse 1]\nHello  there\t[x]\n\nfriend").collect();
		assert_eq!(tokens, vec!["Hello", "there", "friend"]);
	}

	#[test]
	fn tokenize_keeps_carriage_returns() {
		let tokens: Vec<&str> = tokenize("one\r\ntwo").collect();
		assert_eq!(tokens, vec!["one\r", "two"]);
	}

	#[test]
	fn line_start_scans_every_document() {
		let corpus = Corpus::from(vec!["sing along", "we\nsing loud"]);
		assert!(corpus.has_line_start("sing"));
		assert!(!corpus.has_line_start("along"));
		assert!(!corpus.has_line_start("we"));
	}

	#[test]
	fn single_text_is_one_document() {
		let corpus = Corpus::from("I love cats");
		assert_eq!(corpus.len(), 1);
		assert!(!corpus.is_empty());
		assert!(Corpus::new().is_empty());
	}
}
