//! Defines accuracy and confusion-matrix scoring over
//! a held-out sample.
use std::fmt;

use crate::Sample;
use super::classifier::Classifier;


/// Fraction of observations of `sample` whose predicted label
/// equals the class column.
/// Returns `None` for an empty sample:
/// the accuracy is undefined there,
/// and the division is never performed.
pub fn accuracy<C>(f: &C, sample: &Sample) -> Option<f64>
    where C: Classifier
{
    let (n_rows, _) = sample.shape();
    if n_rows == 0 { return None; }

    let correct = (0..n_rows)
        .filter(|&row| f.label(sample, row) == sample.class(row))
        .count();

    Some(correct as f64 / n_rows as f64)
}


/// Confusion counts over two designated class labels.
///
/// The counting is scoped to the two labels named by the caller;
/// the sample may contain further class values.
/// For each observation with predicted label `p` and actual label
/// `a`:
/// if `p` equals the positive label, the observation counts as
/// a true positive when `a` is positive and a false positive
/// otherwise;
/// if `p` differs from the positive label, it counts as a true
/// negative when `a` equals the negative label and a false
/// negative otherwise.
///
/// The second branch keys on the **negative** label rather than
/// on "not positive". This asymmetric convention is deliberate
/// and kept bit-for-bit;
/// the four counts always sum to the number of observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    /// Predicted positive, actually positive.
    pub true_positive: usize,
    /// Predicted not-positive, actually negative.
    pub true_negative: usize,
    /// Predicted positive, actually not positive.
    pub false_positive: usize,
    /// Predicted not-positive, actually not negative.
    pub false_negative: usize,
}


impl ConfusionMatrix {
    /// Count the predictions of `f` over `sample` against
    /// the designated `positive` and `negative` class labels.
    pub fn from_classifier<C>(
        f: &C,
        sample: &Sample,
        positive: &str,
        negative: &str,
    ) -> Self
        where C: Classifier
    {
        let mut counts = Self::default();

        let (n_rows, _) = sample.shape();
        for row in 0..n_rows {
            let predicted = f.label(sample, row);
            let actual = sample.class(row);

            if predicted == positive {
                if actual == positive {
                    counts.true_positive += 1;
                } else {
                    counts.false_positive += 1;
                }
            } else if actual == negative {
                counts.true_negative += 1;
            } else {
                counts.false_negative += 1;
            }
        }

        counts
    }


    /// Sum of the four counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative
            + self.false_positive + self.false_negative
    }


    /// Sensitivity, `TP / (TP + FN)`.
    /// `None` on a zero denominator.
    #[inline]
    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }


    /// Specificity, `TN / (TN + FP)`.
    /// `None` on a zero denominator.
    #[inline]
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.true_negative, self.true_negative + self.false_positive)
    }


    /// Precision, `TP / (TP + FP)`.
    /// `None` on a zero denominator.
    #[inline]
    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }


    /// Overall accuracy, `(TP + TN) / (TP + TN + FP + FN)`.
    /// `None` when all counts are zero.
    #[inline]
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positive + self.true_negative, self.total())
    }
}


#[inline]
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 { return None; }
    Some(numerator as f64 / denominator as f64)
}


impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[TP {tp}] [TN {tn}] [FP {fp}] [FN {fn_}]",
            tp = self.true_positive,
            tn = self.true_negative,
            fp = self.false_positive,
            fn_ = self.false_negative,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_tree::Id3;

    fn sample(rows: &[&[&str]]) -> Sample {
        let rows = rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        Sample::from_rows(rows).unwrap()
    }

    #[test]
    fn accuracy_of_empty_sample_is_undefined() {
        let train = sample(&[&["Yes", "a"], &["No", "b"]]);
        let f = Id3::fit(&train);

        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        let (_, test) = train.holdout_split(1.0, &mut rng);
        assert_eq!(test.shape().0, 0);
        assert_eq!(accuracy(&f, &test), None);
    }

    #[test]
    fn accuracy_on_training_rows_of_separable_data() {
        let train = sample(&[
            &["Yes", "a", "x"],
            &["Yes", "a", "y"],
            &["No", "b", "x"],
            &["No", "b", "y"],
        ]);
        let f = Id3::fit(&train);

        assert_eq!(accuracy(&f, &train), Some(1.0));
    }

    #[test]
    fn counts_sum_to_sample_size() {
        let train = sample(&[
            &["Yes", "a"],
            &["No", "b"],
            &["Maybe", "c"],
        ]);
        let f = Id3::fit(&train);

        let test = sample(&[
            &["Yes", "a"],
            &["No", "b"],
            &["Maybe", "c"],
            &["Maybe", "a"],
            &["Yes", "b"],
        ]);

        let counts =
            ConfusionMatrix::from_classifier(&f, &test, "Yes", "No");
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn asymmetric_negative_branch() {
        // Classifier predicts "No" for a "Maybe" row:
        // predicted != positive and actual != negative,
        // so the row counts as a false negative.
        let train = sample(&[&["No", "a"], &["No", "b"]]);
        let f = Id3::fit(&train);

        let test = sample(&[&["Maybe", "a"]]);
        let counts =
            ConfusionMatrix::from_classifier(&f, &test, "Yes", "No");

        assert_eq!(counts.false_negative, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn derived_rates() {
        let counts = ConfusionMatrix {
            true_positive: 40,
            true_negative: 30,
            false_positive: 10,
            false_negative: 20,
        };

        assert_eq!(counts.sensitivity(), Some(40.0 / 60.0));
        assert_eq!(counts.specificity(), Some(30.0 / 40.0));
        assert_eq!(counts.precision(), Some(40.0 / 50.0));
        assert_eq!(counts.accuracy(), Some(0.7));

        let empty = ConfusionMatrix::default();
        assert_eq!(empty.sensitivity(), None);
        assert_eq!(empty.accuracy(), None);
    }
}
