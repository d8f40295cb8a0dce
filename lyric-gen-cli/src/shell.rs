//! Interactive prompt loop around a `LyricStore`.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the whole dialog
//! can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;
use lyric_gen_core::{LyricStore, WeightedSampler};

/// Number of words generated when the user just presses enter.
pub const DEFAULT_WORD_COUNT: usize = 100;

const UNKNOWN_ARTIST: &str =
	"Sorry, that artist is not in my database. Would you like to try again? [Y/N] ";

/// Parses a number of words to generate.
///
/// Rejects anything that is not a positive integer.
pub fn parse_word_count(input: &str) -> std::result::Result<usize, String> {
	match input.trim().parse::<usize>() {
		Ok(0) => Err("the number of words must be positive".to_owned()),
		Ok(n) => Ok(n),
		Err(_) => Err(format!("'{}' is not a number of words", input.trim())),
	}
}

pub struct Shell<'a, R, W> {
	store: &'a LyricStore,
	sampler: &'a mut dyn WeightedSampler,
	input: R,
	output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
	pub fn new(
		store: &'a LyricStore,
		sampler: &'a mut dyn WeightedSampler,
		input: R,
		output: W,
	) -> Self {
		Self { store, sampler, input, output }
	}

	/// Runs rounds of "pick an artist, pick a length, print lyrics" until the
	/// user declines to continue or the input ends.
	pub fn run(&mut self) -> Result<()> {
		let options = self.store.artists().join(", ");

		loop {
			let question = format!("\nPlease enter an artist. Your options are: {options}:\n");
			let Some(artist) = self.prompt(&question)? else {
				return Ok(());
			};

			if !self.store.contains(&artist) {
				debug!("unknown artist '{}'", artist);
				if self.confirm(UNKNOWN_ARTIST)? {
					continue;
				}
				return Ok(());
			}

			let Some(n_words) = self.read_word_count()? else {
				return Ok(());
			};

			let lyrics = self.store.generate(&artist, n_words, &mut *self.sampler)?;
			writeln!(self.output, "{lyrics}")?;

			if !self.confirm("\nLyric generation complete! Do you want to try again? [Y/N] ")? {
				return Ok(());
			}
		}
	}

	/// Asks for a word count until a valid one is entered. An empty answer
	/// selects `DEFAULT_WORD_COUNT`.
	fn read_word_count(&mut self) -> Result<Option<usize>> {
		let question = format!(
			"Please enter the number of words you want to generate [{DEFAULT_WORD_COUNT}]: "
		);
		loop {
			let Some(answer) = self.prompt(&question)? else {
				return Ok(None);
			};
			if answer.is_empty() {
				return Ok(Some(DEFAULT_WORD_COUNT));
			}
			match parse_word_count(&answer) {
				Ok(n) => return Ok(Some(n)),
				Err(e) => writeln!(self.output, "Invalid input: {e}")?,
			}
		}
	}

	fn confirm(&mut self, question: &str) -> Result<bool> {
		Ok(matches!(self.prompt(question)?.as_deref(), Some("Y" | "y")))
	}

	/// Prints `message` and reads one trimmed line. `None` on end of input.
	fn prompt(&mut self, message: &str) -> Result<Option<String>> {
		write!(self.output, "{message}")?;
		self.output.flush()?;

		let mut line = String::new();
		let read = self.input.read_line(&mut line).context("failed to read from stdin")?;
		if read == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim().to_owned()))
	}
}
