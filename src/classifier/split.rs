use std::collections::BTreeMap;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::errors::*;
use crate::labels::Label;

/// Row indices of a train/test partition, both sorted in increasing order
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

impl TrainTestSplit {
    /// Picks the rows of `values` designated by `indices`
    pub fn select<T: Clone>(values: &[T], indices: &[usize]) -> Vec<T> {
        indices.iter().map(|ix| values[*ix].clone()).collect()
    }
}

/// Splits rows into a train set and a test set preserving the proportion of each label.
///
/// The test set holds `ceil(test_size * n)` rows. Each class contributes the floor of its
/// proportional share, the remaining rows go to the classes with the largest remainders. The
/// rows drawn from each class are chosen by a shuffle seeded with `seed`.
pub fn stratified_split<L: Label>(
    labels: &[L],
    test_size: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if !(test_size > 0. && test_size < 1.) {
        return Err(NeuronError::InvalidInput(format!(
            "test_size must be strictly between 0 and 1, got {}",
            test_size
        ))
        .into());
    }
    let nb_samples = labels.len();
    let mut indices_per_class: BTreeMap<L, Vec<usize>> = BTreeMap::new();
    for (ix, label) in labels.iter().enumerate() {
        indices_per_class.entry(*label).or_insert_with(Vec::new).push(ix);
    }
    if let Some((label, indices)) = indices_per_class.iter().find(|(_, ixs)| ixs.len() < 2) {
        return Err(NeuronError::InsufficientClassSamples(format!(
            "{} '{}' has {} example(s), at least 2 are needed",
            L::AXIS,
            label.as_str(),
            indices.len()
        ))
        .into());
    }

    let nb_classes = indices_per_class.len();
    let nb_test = (test_size * nb_samples as f64).ceil() as usize;
    let nb_train = nb_samples - nb_test;
    if nb_test < nb_classes || nb_train < nb_classes {
        return Err(NeuronError::InsufficientClassSamples(format!(
            "a split of {} train and {} test rows cannot hold the {} {} classes",
            nb_train, nb_test, nb_classes, L::AXIS
        ))
        .into());
    }

    let mut test_counts = indices_per_class
        .values()
        .map(|ixs| ixs.len() * nb_test / nb_samples)
        .collect_vec();
    let remainders = indices_per_class
        .values()
        .map(|ixs| ixs.len() * nb_test % nb_samples)
        .enumerate()
        .sorted_by(|(ix_a, rem_a), (ix_b, rem_b)| rem_b.cmp(rem_a).then(ix_a.cmp(ix_b)))
        .map(|(class_ix, _)| class_ix)
        .collect_vec();
    let class_sizes = indices_per_class.values().map(|ixs| ixs.len()).collect_vec();
    let mut missing = nb_test - test_counts.iter().sum::<usize>();
    while missing > 0 {
        let mut assigned = false;
        for class_ix in remainders.iter() {
            if missing == 0 {
                break;
            }
            if test_counts[*class_ix] + 1 < class_sizes[*class_ix] {
                test_counts[*class_ix] += 1;
                missing -= 1;
                assigned = true;
            }
        }
        if !assigned {
            break;
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = vec![];
    let mut test_indices = vec![];
    for (mut indices, nb_class_test) in indices_per_class.into_values().zip(test_counts) {
        indices.shuffle(&mut rng);
        let class_train = indices.split_off(nb_class_test);
        test_indices.extend(indices);
        train_indices.extend(class_train);
    }
    train_indices.sort_unstable();
    test_indices.sort_unstable();

    Ok(TrainTestSplit {
        train_indices,
        test_indices,
    })
}
