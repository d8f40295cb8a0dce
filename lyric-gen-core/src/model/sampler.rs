use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of weighted random choices used by the generator.
///
/// Injecting the sampler keeps generation reproducible in tests: any
/// implementation that picks indices deterministically makes the whole
/// generation deterministic.
pub trait WeightedSampler {
	/// Picks an index into `weights`, with probability proportional to its
	/// weight.
	///
	/// Returns `None` if there is nothing to choose from (empty slice or no
	/// positive weight).
	fn choose_index(&mut self, weights: &[f64]) -> Option<usize>;
}

impl<S: WeightedSampler + ?Sized> WeightedSampler for &mut S {
	fn choose_index(&mut self, weights: &[f64]) -> Option<usize> {
		(**self).choose_index(weights)
	}
}

/// Weighted sampler backed by a `rand` generator.
///
/// Draws are independent and with replacement.
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
	rng: R,
}

impl<R: Rng> RngSampler<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RngSampler<ThreadRng> {
	/// Sampler using the thread-local generator.
	pub fn from_entropy() -> Self {
		Self::new(rand::rng())
	}
}

impl RngSampler<StdRng> {
	/// Reproducible sampler for a given seed.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> WeightedSampler for RngSampler<R> {
	/// Cumulative subtraction over the weights: O(n) per draw.
	fn choose_index(&mut self, weights: &[f64]) -> Option<usize> {
		let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
		if total <= 0.0 || !total.is_finite() {
			return None;
		}

		let mut r = self.rng.random_range(0.0..total);

		let mut fallback = None;
		for (index, weight) in weights.iter().enumerate() {
			if *weight <= 0.0 {
				continue;
			}
			if r < *weight {
				return Some(index);
			}
			r -= weight;
			fallback = Some(index);
		}

		// Rounding can leave a tiny remainder past the last bucket
		fallback
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nothing_to_choose_from() {
		let mut sampler = RngSampler::seeded(7);
		assert_eq!(sampler.choose_index(&[]), None);
		assert_eq!(sampler.choose_index(&[0.0, 0.0]), None);
	}

	#[test]
	fn zero_weights_are_never_picked() {
		let mut sampler = RngSampler::seeded(42);
		for _ in 0..200 {
			assert_eq!(sampler.choose_index(&[0.0, 1.0, 0.0]), Some(1));
		}
	}

	#[test]
	fn same_seed_same_draws() {
		let weights = [0.5, 0.25, 0.25];
		let mut a = RngSampler::seeded(1234);
		let mut b = RngSampler::seeded(1234);
		let draws_a: Vec<_> = (0..50).map(|_| a.choose_index(&weights)).collect();
		let draws_b: Vec<_> = (0..50).map(|_| b.choose_index(&weights)).collect();
		assert_eq!(draws_a, draws_b);
	}

	#[test]
	fn follows_the_weights() {
		let mut sampler = RngSampler::seeded(99);
		let mut counts = [0usize; 2];
		for _ in 0..10_000 {
			counts[sampler.choose_index(&[0.8, 0.2]).unwrap()] += 1;
		}
		// Expected 8000, generous bounds
		assert!(counts[0] > 7500 && counts[0] < 8500, "{counts:?}");
	}
}
