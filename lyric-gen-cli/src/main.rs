//! Lyric generator - interactive command line front-end
//!
//! Loads one n-gram model per artist from a data directory, then asks which
//! artist to imitate and how many words to generate.

mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use lyric_gen_core::{LyricStore, RngSampler, WeightedSampler};

use shell::{DEFAULT_WORD_COUNT, Shell, parse_word_count};

#[derive(Parser, Debug)]
#[command(name = "lyric-gen")]
#[command(about = "Generate song lyrics in the style of an artist with a word n-gram model")]
struct Args {
	/// Directory holding one sub-directory of .txt songs per artist
	#[arg(short, long, default_value = "./data")]
	data: PathBuf,

	/// Order of the n-gram models (history of order - 1 words)
	#[arg(short, long, default_value = "3")]
	order: usize,

	/// Seed for reproducible generation
	#[arg(short, long)]
	seed: Option<u64>,

	/// Artist to imitate (skips the interactive prompt)
	#[arg(short, long)]
	artist: Option<String>,

	/// Number of words to generate with --artist
	#[arg(short, long, default_value_t = DEFAULT_WORD_COUNT, value_parser = parse_word_count)]
	words: usize,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	let env = env_logger::Env::default().default_filter_or(default_filter);
	env_logger::Builder::from_env(env).init();
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let store = LyricStore::open(&args.data, args.order)
		.with_context(|| format!("failed to load lyrics from {}", args.data.display()))?;
	if store.is_empty() {
		bail!("no artists found in {}", args.data.display());
	}
	info!("{} artists ready, order {}", store.len(), store.order());

	let mut sampler: Box<dyn WeightedSampler> = match args.seed {
		Some(seed) => Box::new(RngSampler::seeded(seed)),
		None => Box::new(RngSampler::from_entropy()),
	};

	if let Some(artist) = &args.artist {
		let lyrics = store.generate(artist, args.words, sampler.as_mut())?;
		println!("{lyrics}");
		return Ok(());
	}

	let stdin = io::stdin();
	Shell::new(&store, sampler.as_mut(), stdin.lock(), io::stdout()).run()
}
