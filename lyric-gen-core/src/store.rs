use std::collections::HashMap;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LyricError, Result};
use crate::io;
use crate::model::corpus::Corpus;
use crate::model::generator;
use crate::model::ngram_model::NGramModel;
use crate::model::sampler::WeightedSampler;

/// Extension of the files holding one song each.
const DOCUMENT_EXTENSION: &str = "txt";

/// Extension of the cached, postcard-encoded models.
const CACHE_EXTENSION: &str = "bin";

/// Normalizes an artist name into a store key.
///
/// Trims, lowercases and replaces each run of whitespace with a single `-`.
///
/// Examples:
/// - `"Bob Dylan"` → `"bob-dylan"`
/// - `"  Lin-Manuel   Miranda "` → `"lin-manuel-miranda"`
pub fn normalize_artist_key(name: &str) -> String {
	name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Lyrics of one artist and the model trained on them.
///
/// This is also the on-disk form of the model cache: keeping the lyrics next
/// to the model lets a cache built from different lyrics be detected.
#[derive(Serialize, Deserialize, Debug)]
struct Artist {
	corpus: Corpus,
	model: NGramModel,
}

impl Artist {
	fn matches(&self, corpus: &Corpus, order: usize) -> bool {
		self.model.order() == order && self.corpus == *corpus
	}
}

/// Store mapping artists to their lyrics and trained models.
///
/// The caller owns the store: it is built explicitly (`new` or `open`),
/// passed to whatever needs it, and released by dropping it.
///
/// # Responsibilities
/// - Load one corpus per artist from a data directory
/// - Train (or reload from cache) one model per artist, all of the same order
/// - Resolve artist names to their corpus and model
///
/// # Notes
/// - Every method taking an artist name normalizes it with
///   `normalize_artist_key`, so `"Bob Dylan"` and `"bob-dylan"` are the same
///   artist.
/// - Unknown artists are reported as `LyricError::UnknownArtist`, which
///   callers can recover from.
#[derive(Debug)]
pub struct LyricStore {
	order: usize,
	artists: HashMap<String, Artist>,
}

impl LyricStore {
	/// Creates an empty store whose models are trained with order `order`.
	///
	/// # Errors
	/// Returns `LyricError::InvalidOrder` if `order == 0`.
	pub fn new(order: usize) -> Result<Self> {
		if order == 0 {
			return Err(LyricError::InvalidOrder(order));
		}
		Ok(Self { order, artists: HashMap::new() })
	}

	/// Loads every artist found in `dir`.
	///
	/// # Layout
	/// - `dir/<artist>/*.txt`: one song per file, read in name order
	/// - `dir/<artist-key>.bin`: model cache, written after training
	///
	/// # Behavior
	/// - A cache is reused only if it was trained with the same order on the
	///   same lyrics; otherwise the model is retrained and the cache
	///   overwritten.
	/// - An unreadable or unwritable cache is reported with a warning and
	///   does not stop loading.
	/// - Artists without any `.txt` file are skipped.
	///
	/// # Errors
	/// - `LyricError::InvalidDataDir` if `dir` is not a directory
	/// - `LyricError::Io` if the lyrics cannot be read
	pub fn open<P: AsRef<Path>>(dir: P, order: usize) -> Result<Self> {
		let mut store = Self::new(order)?;

		let folder = io::normalize_folder(dir.as_ref());
		if !folder.is_dir() {
			return Err(LyricError::InvalidDataDir(folder.display().to_string()));
		}

		for artist_dir in io::list_dirs(&folder)? {
			let key = normalize_artist_key(&io::get_name(&artist_dir)?);
			if store.artists.contains_key(&key) {
				warn!("skipping {}: artist '{}' already loaded", artist_dir.display(), key);
				continue;
			}

			let corpus = Self::read_corpus(&artist_dir)?;
			if corpus.is_empty() {
				warn!("skipping {}: no .{} files", artist_dir.display(), DOCUMENT_EXTENSION);
				continue;
			}

			let cache_path = folder.join(format!("{key}.{CACHE_EXTENSION}"));
			let artist = store.load_or_train(corpus, &cache_path)?;
			store.artists.insert(key, artist);
		}

		info!("loaded {} artists from {}", store.artists.len(), folder.display());
		Ok(store)
	}

	/// Reads every song of an artist directory as one document each.
	fn read_corpus(artist_dir: &Path) -> Result<Corpus> {
		let mut corpus = Corpus::new();
		for file in io::list_files(artist_dir, DOCUMENT_EXTENSION)? {
			corpus.push(io::read_document(&file)?);
		}
		Ok(corpus)
	}

	/// Returns the cached artist for `corpus` if still valid, otherwise
	/// trains the model and refreshes the cache.
	///
	/// Cache failures never abort loading: an unreadable cache is retrained,
	/// a cache that cannot be written is only reported.
	fn load_or_train(&self, corpus: Corpus, cache_path: &Path) -> Result<Artist> {
		if cache_path.exists() {
			match std::fs::read(cache_path) {
				Ok(bytes) => match postcard::from_bytes::<Artist>(&bytes) {
					Ok(cached) if cached.matches(&corpus, self.order) => {
						debug!("using cached model {}", cache_path.display());
						return Ok(cached);
					}
					Ok(_) => debug!("stale cache {}, retraining", cache_path.display()),
					Err(e) => warn!("ignoring unreadable cache {}: {}", cache_path.display(), e),
				},
				Err(e) => warn!("ignoring unreadable cache {}: {}", cache_path.display(), e),
			}
		}

		let model = NGramModel::train(&corpus, self.order)?;
		let artist = Artist { corpus, model };
		if let Err(e) = Self::write_cache(&artist, cache_path) {
			warn!("could not write cache {}: {}", cache_path.display(), e);
		}
		info!("trained {} ({} histories)", cache_path.display(), artist.model.len());

		Ok(artist)
	}

	fn write_cache(artist: &Artist, cache_path: &Path) -> Result<()> {
		std::fs::write(cache_path, postcard::to_stdvec(artist)?)?;
		Ok(())
	}

	/// Adds (or replaces) an artist, training its model from `corpus`.
	pub fn insert(&mut self, name: &str, corpus: Corpus) -> Result<()> {
		let model = NGramModel::train(&corpus, self.order)?;
		self.artists.insert(normalize_artist_key(name), Artist { corpus, model });
		Ok(())
	}

	/// Order shared by every model of the store.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sorted list of artist keys.
	pub fn artists(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.artists.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	pub fn contains(&self, name: &str) -> bool {
		self.artists.contains_key(&normalize_artist_key(name))
	}

	pub fn len(&self) -> usize {
		self.artists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.artists.is_empty()
	}

	fn artist(&self, name: &str) -> Result<&Artist> {
		let key = normalize_artist_key(name);
		self.artists.get(&key).ok_or(LyricError::UnknownArtist(key))
	}

	/// The trained model of an artist.
	pub fn get_model(&self, name: &str) -> Result<&NGramModel> {
		Ok(&self.artist(name)?.model)
	}

	/// The raw lyrics of an artist.
	pub fn get_corpus(&self, name: &str) -> Result<&Corpus> {
		Ok(&self.artist(name)?.corpus)
	}

	/// Generates `n_words` words of lyrics in the style of an artist.
	pub fn generate<S: WeightedSampler + ?Sized>(
		&self,
		name: &str,
		n_words: usize,
		sampler: &mut S,
	) -> Result<String> {
		let artist = self.artist(name)?;
		Ok(generator::generate(&artist.corpus, &artist.model, self.order, n_words, sampler))
	}
}
