use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LyricError>;

/// Errors raised by the trainer, the store and the I/O helpers.
///
/// Generation itself never fails: an unknown history degrades to the
/// fallback token instead of producing an error.
#[derive(Debug, Error)]
pub enum LyricError {
	#[error("n-gram order must be >= 1, got {0}")]
	InvalidOrder(usize),

	#[error("artist '{0}' is not in the store")]
	UnknownArtist(String),

	#[error("expected a directory, got: {0}")]
	InvalidDataDir(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("model cache error: {0}")]
	Cache(#[from] postcard::Error),
}
