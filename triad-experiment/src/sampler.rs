use rand::Rng;
use rand::seq::index;
use tracing::warn;

/// Source of randomness for trial generation: "pick k of n" plus a fair coin.
///
/// Every generator takes a sampler explicitly so tests can swap in a
/// deterministic one.
pub trait Sampler {
    /// Returns `k` items taken from `items`.
    fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T>;

    /// Unbiased coin used to place a check trial's target.
    fn coin_flip(&mut self) -> bool;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        (**self).sample(items, k)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Uniform sampling without replacement backed by any `Rng`.
#[derive(Debug, Clone)]
pub struct UniformSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for UniformSampler<R> {
    fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        let amount = if k > items.len() {
            warn!(
                requested = k,
                available = items.len(),
                "sample larger than population, clamping"
            );
            items.len()
        } else {
            k
        };
        index::sample(&mut self.rng, items.len(), amount)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Deterministic stand-in: always takes the first `k` items in input order.
///
/// The coin alternates starting with `true`.
#[derive(Debug, Clone, Default)]
pub struct FirstK {
    flips: usize,
}

impl FirstK {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sampler for FirstK {
    fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        items.iter().take(k).cloned().collect()
    }

    fn coin_flip(&mut self) -> bool {
        let heads = self.flips % 2 == 0;
        self.flips += 1;
        heads
    }
}
