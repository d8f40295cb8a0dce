//! Word-level n-gram training and generation.
//!
//! This module provides:
//! - The training input (`Corpus`) and its tokenization rules
//! - The sliding word window (`History`)
//! - Training (`Trainer`) of immutable models (`NGramModel`)
//! - Injectable weighted sampling (`WeightedSampler`)
//! - Text generation and its post-processing (`generator`)

/// Documents used for training, tokenization and line-start lookups.
pub mod corpus;

/// Per-history probability distributions stored in a trained model.
pub mod distribution;

/// Sequence generation from a trained model.
///
/// Samples words from a sliding history, strips boundary brackets and
/// restores line breaks using the training corpus.
pub mod generator;

/// Fixed-size window over the last (n-1) words.
pub mod history;

/// Trained, read-only word n-gram model.
pub mod ngram_model;

/// Weighted random choice behind a trait, with a `rand`-backed implementation.
pub mod sampler;

/// Training-time counts for a single history.
///
/// Not exposed publicly.
mod state;

/// Incremental trainer producing an `NGramModel`.
pub mod trainer;
