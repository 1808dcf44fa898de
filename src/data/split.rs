use std::fmt;

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// TestSize – how many rows go to the test subset
// ---------------------------------------------------------------------------

/// Size of the test subset: a fraction of the rows or an absolute row count.
///
/// In JSON a float is read as a fraction and an integer as a count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestSize {
    Count(usize),
    Fraction(f64),
}

impl Default for TestSize {
    fn default() -> Self {
        TestSize::Fraction(0.2)
    }
}

impl fmt::Display for TestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestSize::Count(c) => write!(f, "{c}"),
            TestSize::Fraction(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Split indices
// ---------------------------------------------------------------------------

/// Positional row indices of the two subsets. Disjoint, and together they
/// cover `0..n` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Randomized train/test partition parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainTestSplit {
    pub test_size: TestSize,
    pub random_state: u64,
    pub shuffle: bool,
}

impl Default for TrainTestSplit {
    fn default() -> Self {
        Self {
            test_size: TestSize::default(),
            random_state: 42,
            shuffle: true,
        }
    }
}

impl TrainTestSplit {
    /// Compute `(n_train, n_test)` for `n` rows.
    ///
    /// A fractional test size is rounded up; the train subset gets the rest
    /// and must not be empty.
    pub fn sizes(&self, n: usize) -> Result<(usize, usize)> {
        let n_test = match self.test_size {
            TestSize::Fraction(f) => {
                if !(f > 0.0 && f < 1.0) {
                    bail!("test_size={f} should be a fraction in the open interval (0, 1)");
                }
                (f * n as f64).ceil() as usize
            }
            TestSize::Count(c) => {
                if c == 0 || c >= n {
                    bail!(
                        "test_size={c} should be a positive row count smaller than the number of rows ({n})"
                    );
                }
                c
            }
        };

        let n_train = n - n_test;
        if n_train == 0 {
            bail!(
                "with n_samples={n} and test_size={}, the resulting train set will be empty",
                self.test_size
            );
        }
        Ok((n_train, n_test))
    }

    /// Partition `0..n` into train and test indices.
    ///
    /// When shuffling, the test subset takes the first `n_test` entries of a
    /// permutation drawn from a `ChaCha8Rng` seeded with `random_state`, and
    /// the train subset takes the rest. The ChaCha stream is fixed, so a seed
    /// names the same permutation in every build. Without shuffling, the
    /// first `n_train` rows are train and the remainder test.
    pub fn split_indices(&self, n: usize) -> Result<SplitIndices> {
        let (n_train, n_test) = self.sizes(n)?;

        let mut order: Vec<usize> = (0..n).collect();
        let (train, test) = if self.shuffle {
            let mut rng = ChaCha8Rng::seed_from_u64(self.random_state);
            order.shuffle(&mut rng);
            let train = order.split_off(n_test);
            (train, order)
        } else {
            let test = order.split_off(n_train);
            (order, test)
        };

        log::debug!(
            "split {n} rows: {} train / {} test (seed {}, shuffle {})",
            train.len(),
            test.len(),
            self.random_state,
            self.shuffle
        );

        Ok(SplitIndices { train, test })
    }

    /// Split a dataset into `(train, test)` subsets.
    pub fn split(&self, dataset: &Dataset) -> Result<(Dataset, Dataset)> {
        let indices = self.split_indices(dataset.len())?;
        Ok((dataset.take(&indices.train), dataset.take(&indices.test)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use std::collections::BTreeSet;

    fn assert_partition(indices: &SplitIndices, n: usize) {
        let train: BTreeSet<_> = indices.train.iter().copied().collect();
        let test: BTreeSet<_> = indices.test.iter().copied().collect();
        assert_eq!(train.len(), indices.train.len(), "duplicate train index");
        assert_eq!(test.len(), indices.test.len(), "duplicate test index");
        assert!(train.is_disjoint(&test));
        let all: BTreeSet<_> = train.union(&test).copied().collect();
        assert_eq!(all, (0..n).collect::<BTreeSet<_>>());
    }

    #[test]
    fn default_split_of_ten_rows_is_eight_two() {
        let indices = TrainTestSplit::default().split_indices(10).unwrap();
        assert_eq!(indices.train.len(), 8);
        assert_eq!(indices.test.len(), 2);
        assert_partition(&indices, 10);
    }

    #[test]
    fn fractional_test_size_rounds_up() {
        let split = TrainTestSplit::default();
        assert_eq!(split.sizes(100).unwrap(), (80, 20));
        assert_eq!(split.sizes(3).unwrap(), (2, 1));
        assert_eq!(split.sizes(7).unwrap(), (5, 2));
        assert_eq!(split.sizes(33).unwrap(), (26, 7));
    }

    #[test]
    fn partitions_are_exhaustive_and_disjoint() {
        let split = TrainTestSplit::default();
        for n in [2, 5, 17, 64, 1000] {
            let indices = split.split_indices(n).unwrap();
            assert_partition(&indices, n);
        }
    }

    #[test]
    fn same_seed_gives_same_partition() {
        let split = TrainTestSplit::default();
        assert_eq!(split.split_indices(50).unwrap(), split.split_indices(50).unwrap());
    }

    #[test]
    fn seed_42_picks_known_rows() {
        let indices = TrainTestSplit::default().split_indices(10).unwrap();
        assert_eq!(indices.train, vec![5, 7, 9, 4, 8, 1, 6, 2]);
        assert_eq!(indices.test, vec![0, 3]);
    }

    #[test]
    fn different_seeds_give_different_partitions() {
        let a = TrainTestSplit::default();
        let b = TrainTestSplit { random_state: 7, ..a };
        assert_ne!(a.split_indices(200).unwrap(), b.split_indices(200).unwrap());
    }

    #[test]
    fn no_shuffle_keeps_source_order() {
        let split = TrainTestSplit { shuffle: false, ..Default::default() };
        let indices = split.split_indices(5).unwrap();
        assert_eq!(indices.train, vec![0, 1, 2, 3]);
        assert_eq!(indices.test, vec![4]);
    }

    #[test]
    fn count_test_size() {
        let split = TrainTestSplit { test_size: TestSize::Count(3), ..Default::default() };
        assert_eq!(split.sizes(10).unwrap(), (7, 3));
        assert!(split.sizes(3).is_err());
        let zero = TrainTestSplit { test_size: TestSize::Count(0), ..Default::default() };
        assert!(zero.sizes(10).is_err());
    }

    #[test]
    fn empty_train_set_is_rejected() {
        let split = TrainTestSplit::default();
        for n in [0, 1] {
            let err = split.split_indices(n).unwrap_err();
            assert!(err.to_string().contains("train set will be empty"), "{err}");
        }
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        for f in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let split = TrainTestSplit { test_size: TestSize::Fraction(f), ..Default::default() };
            assert!(split.sizes(10).is_err(), "accepted {f}");
        }
    }

    #[test]
    fn test_size_json_is_untagged() {
        let f: TestSize = serde_json::from_str("0.25").unwrap();
        let c: TestSize = serde_json::from_str("4").unwrap();
        assert_eq!(f, TestSize::Fraction(0.25));
        assert_eq!(c, TestSize::Count(4));
    }

    #[test]
    fn split_dataset_moves_whole_rows() {
        let rows: Vec<StringRecord> = (1..=10)
            .map(|i| StringRecord::from(vec![i.to_string(), format!("v{i}")]))
            .collect();
        let ds = Dataset::new(StringRecord::from(vec!["id", "value"]), rows).unwrap();

        let (train, test) = TrainTestSplit::default().split(&ds).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        for row in train.rows().iter().chain(test.rows()) {
            assert_eq!(&row[1], format!("v{}", &row[0]));
        }
    }
}
