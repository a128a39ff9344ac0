//! Benchmark and self-check driver (feature `harness`).
//!
//! Fills a buffer with seeded random keys, runs each sort over it for a number of
//! rounds, checks that every round came out sorted, and reports the average time per
//! round. Results are returned as [`Report`]s and also logged through the [`log`]
//! facade, so a binary only needs to install a logger to see them.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algo;
use crate::error::SortError;

/// Every sort the harness knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Counting,
    Radix,
    Merge,
    Quick,
    Heap,
    /// `slice::sort_unstable`, as a reference point.
    StdUnstable,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::StdUnstable,
    ];

    /// Display name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "BubbleSort",
            Self::Selection => "SelectionSort",
            Self::Insertion => "InsertionSort",
            Self::Counting => "CountingSort",
            Self::Radix => "RadixSort",
            Self::Merge => "MergeSort",
            Self::Quick => "QuickSort",
            Self::Heap => "HeapSort",
            Self::StdUnstable => "slice::sort_unstable",
        }
    }

    /// Sorts `seq` with this algorithm.
    pub fn run(self, seq: &mut [i32]) -> Result<(), SortError> {
        match self {
            Self::Bubble => algo::bubble_sort(seq),
            Self::Selection => algo::selection_sort(seq),
            Self::Insertion => algo::insertion_sort(seq),
            Self::Counting => return algo::counting_sort(seq),
            Self::Radix => return algo::radix_sort(seq),
            Self::Merge => return algo::merge_sort(seq),
            Self::Quick => algo::quick_sort_by(seq, |a: &i32, b: &i32| a.cmp(b)),
            Self::Heap => algo::heap_sort(seq),
            Self::StdUnstable => seq.sort_unstable(),
        }
        Ok(())
    }
}

/// Harness parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of keys per buffer.
    pub len: usize,
    /// Timed rounds per algorithm.
    pub rounds: usize,
    /// Keys are drawn from `0..bound`.
    pub bound: i32,
    /// Seed for the key generator.
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: 3000,
            rounds: 100,
            bound: 1000,
            seed: 0x5EED,
        }
    }
}

impl HarnessConfig {
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Non-positive bounds are raised to 1 (every key is 0).
    pub fn with_bound(mut self, bound: i32) -> Self {
        self.bound = bound.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of timing one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub rounds: usize,
    /// `true` if every round produced an ascending buffer.
    pub sorted: bool,
    /// Mean wall-clock time of one sort call.
    pub average: Duration,
}

/// Outcome of the binary search self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub iterative: bool,
    pub recursive: bool,
}

/// Seeded benchmark driver.
pub struct Harness {
    config: HarnessConfig,
    rng: StdRng,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Times `algorithm` over `rounds` freshly generated buffers.
    ///
    /// Stops at the first error; a failed round is never reported as sorted.
    pub fn measure(&mut self, algorithm: Algorithm) -> Result<Report, SortError> {
        let HarnessConfig {
            len, rounds, bound, ..
        } = self.config;

        let mut total = Duration::ZERO;
        let mut sorted = true;

        for round in 0..rounds {
            let mut buffer = random_buffer(&mut self.rng, len, bound);

            let start = Instant::now();
            algorithm.run(&mut buffer)?;
            let elapsed = start.elapsed();

            total += elapsed;
            if !is_sorted(&buffer) {
                warn!("{} left round {} unsorted", algorithm.name(), round);
                sorted = false;
            }
            debug!("{} round {} took {:?}", algorithm.name(), round, elapsed);
        }

        let average = mean_duration(total, rounds);

        if sorted {
            info!("{} working", algorithm.name());
        } else {
            warn!("{} not working", algorithm.name());
        }
        info!("{} time: {:?}", algorithm.name(), average);

        Ok(Report {
            algorithm,
            rounds,
            sorted,
            average,
        })
    }

    /// Measures every algorithm in [`Algorithm::ALL`].
    pub fn run_all(&mut self) -> Result<Vec<Report>, SortError> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| self.measure(algorithm))
            .collect()
    }

    /// Searches `0..100` for a present key and an absent one with both variants.
    pub fn check_searches(&self) -> SearchReport {
        let seq: Vec<i32> = (0..100).collect();
        let (present, absent) = (30, 7_222_222);

        let iterative = algo::binary_search_iterative(&seq, &present) == Some(30)
            && algo::binary_search_iterative(&seq, &absent).is_none();
        let recursive = algo::binary_search_recursive(&seq, &present) == Some(30)
            && algo::binary_search_recursive(&seq, &absent).is_none();

        let checks = [
            ("BinarySearchIterative", iterative),
            ("BinarySearchRecursive", recursive),
        ];
        for (name, ok) in checks {
            if ok {
                info!("{name} working");
            } else {
                warn!("{name} not working");
            }
        }

        SearchReport {
            iterative,
            recursive,
        }
    }
}

/// Mean of `total` over `rounds`, zero when no round ran.
fn mean_duration(total: Duration, rounds: usize) -> Duration {
    if rounds == 0 {
        Duration::ZERO
    } else {
        total.div_f64(rounds as f64)
    }
}

/// Returns `len` keys drawn uniformly from `0..bound`.
pub fn random_buffer<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: i32) -> Vec<i32> {
    let bound = bound.max(1);
    (0..len).map(|_| rng.random_range(0..bound)).collect()
}

/// `true` if `seq` is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}
