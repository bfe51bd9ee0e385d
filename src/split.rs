//! Train / validation / test splitting.
//!
//! Rows are shuffled by a seeded pseudo-random permutation and cut into
//! contiguous blocks: `floor(n * train_fraction)` rows of training data,
//! `floor(n * val_fraction)` of validation, and the remainder as test. The
//! same seed always produces the same assignment.

use crate::error::PrepError;
use crate::table::{Column, Table};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Feature matrix and target column for one subset, row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePair {
    pub x: Table,
    pub y: Column,
}

/// Split result. The validation subset is structurally absent when
/// `val_fraction` is zero, not merely empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Split {
    TrainTest {
        train: TablePair,
        test: TablePair,
    },
    TrainValTest {
        train: TablePair,
        val: TablePair,
        test: TablePair,
    },
}

/// Partition the table into train / (validation /) test subsets, separating
/// the target column out as `y`.
///
/// `seed` makes the permutation reproducible; `None` draws one from the OS.
/// Feature columns keep their order, and `x` / `y` stay row-aligned within
/// each subset.
///
/// # Errors
/// [`PrepError::ColumnNotFound`] for an absent target,
/// [`PrepError::InvalidParameter`] for negative fractions or
/// `train_fraction + val_fraction > 1.0`.
pub fn split(
    table: &Table,
    target: &str,
    train_fraction: f64,
    val_fraction: f64,
    seed: Option<u64>,
) -> Result<Split, PrepError> {
    if !table.has_column(target) {
        return Err(PrepError::ColumnNotFound(target.to_string()));
    }
    if !(0.0..=1.0).contains(&train_fraction) || !(0.0..=1.0).contains(&val_fraction) {
        return Err(PrepError::InvalidParameter(
            "split fractions must lie in [0, 1]".to_string(),
        ));
    }
    if train_fraction + val_fraction > 1.0 {
        return Err(PrepError::InvalidParameter(format!(
            "train_fraction + val_fraction must not exceed 1.0, got {}",
            train_fraction + val_fraction
        )));
    }

    let n = table.n_rows();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    indices.shuffle(&mut rng);

    let n_train = (n as f64 * train_fraction).floor() as usize;
    let n_val = (n as f64 * val_fraction).floor() as usize;

    let train = subset(table, target, &indices[..n_train]);
    let test = subset(table, target, &indices[n_train + n_val..]);
    if n_val > 0 {
        let val = subset(table, target, &indices[n_train..n_train + n_val]);
        Ok(Split::TrainValTest { train, val, test })
    } else {
        Ok(Split::TrainTest { train, test })
    }
}

fn subset(table: &Table, target: &str, indices: &[usize]) -> TablePair {
    let mut selected = table.select_rows(indices);
    let y = selected
        .remove_column(target)
        .expect("target checked above");
    TablePair { x: selected, y }
}
