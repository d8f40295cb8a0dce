//! Word-level n-gram lyric generation library.
//!
//! This crate provides:
//! - Training of word n-gram models from one or many documents
//! - Stochastic generation of lyrics with an injectable randomness source
//! - A store mapping artists to their lyrics and trained models
//! - Internal utilities for I/O and path handling
//!
//! The entry points are `NGramModel::train`, `generator::generate` and
//! `LyricStore`.

/// Core n-gram models and generation logic.
pub mod model;

/// Artist-keyed store of corpora and trained models.
pub mod store;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (file loading, directory listing).
///
/// Not exposed
pub(crate) mod io;

pub use error::{LyricError, Result};
pub use model::corpus::Corpus;
pub use model::generator::generate;
pub use model::ngram_model::NGramModel;
pub use model::sampler::{RngSampler, WeightedSampler};
pub use store::LyricStore;
