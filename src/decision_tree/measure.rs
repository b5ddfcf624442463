//! Defines the impurity measures used for attribute selection.
use std::collections::HashMap;

use crate::Sample;


/// Binary-logarithm entropy of the class column of `sample`,
/// restricted to the observations listed in `rows`:
/// `-Σ_c p_c·log2(p_c)` over each distinct class value `c`
/// with empirical probability `p_c`.
///
/// Only observed classes enter the sum, so `p_c > 0` always holds
/// and `log2(0)` never arises.
/// Empty `rows` and single-class `rows` both yield `0.0`.
pub fn entropy(sample: &Sample, rows: &[usize]) -> f64 {
    if rows.is_empty() { return 0.0; }

    let mut counts = HashMap::<&str, usize>::new();
    for &i in rows {
        *counts.entry(sample.class(i)).or_insert(0) += 1;
    }

    let total = rows.len() as f64;
    counts.values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Information gain of splitting the observations in `rows`
/// on the feature column `attribute`:
/// the class entropy minus the sizes-weighted entropy of
/// the partition induced by the distinct values at that column.
///
/// The gain is never negative.
pub fn information_gain(
    sample: &Sample,
    rows: &[usize],
    attribute: usize,
) -> f64
{
    if rows.is_empty() { return 0.0; }

    let mut partition = HashMap::<&str, Vec<usize>>::new();
    for &i in rows {
        partition.entry(sample.value(i, attribute))
            .or_default()
            .push(i);
    }

    let total = rows.len() as f64;
    let split_entropy = partition.values()
        .map(|subset| {
            let weight = subset.len() as f64 / total;
            weight * entropy(sample, subset)
        })
        .sum::<f64>();

    entropy(sample, rows) - split_entropy
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rows: &[&[&str]]) -> Sample {
        let rows = rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        Sample::from_rows(rows).unwrap()
    }

    #[test]
    fn entropy_of_pure_sample_is_zero() {
        let s = sample(&[
            &["Yes", "a"],
            &["Yes", "b"],
            &["Yes", "c"],
        ]);
        let rows = [0, 1, 2];
        assert_eq!(entropy(&s, &rows), 0.0);
    }

    #[test]
    fn entropy_of_even_split_is_one_bit() {
        let s = sample(&[
            &["Yes", "a"],
            &["Yes", "b"],
            &["No", "a"],
            &["No", "b"],
        ]);
        let rows = [0, 1, 2, 3];
        assert_eq!(entropy(&s, &rows), 1.0);
    }

    #[test]
    fn entropy_of_empty_rows_is_zero() {
        let s = sample(&[&["Yes", "a"]]);
        assert_eq!(entropy(&s, &[]), 0.0);
    }

    #[test]
    fn perfect_attribute_gains_full_entropy() {
        let s = sample(&[
            &["Yes", "a", "x"],
            &["Yes", "a", "y"],
            &["No", "b", "x"],
            &["No", "b", "y"],
        ]);
        let rows = [0, 1, 2, 3];

        assert_eq!(information_gain(&s, &rows, 1), 1.0);
        assert_eq!(information_gain(&s, &rows, 2), 0.0);
    }
}
