//! Defines the tabular dataset struct.
use rand::Rng;

use crate::Error;


/// Struct `Sample` holds a batch of categorical observations
/// in row-major order.
/// Column `0` is always the class column;
/// the remaining columns are feature attributes
/// addressed by integer index.
/// Every row has the same column count.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    rows: Vec<Vec<String>>,
    n_column: usize,
}


impl Sample {
    /// Build a sample from rows of cells.
    ///
    /// The rows must be non-empty, share one column count,
    /// and carry at least one feature column
    /// next to the class column.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, Error> {
        let n_column = match rows.first() {
            Some(row) => row.len(),
            None => { return Err(Error::EmptySample); },
        };

        if n_column < 2 {
            return Err(Error::NoFeatureColumn);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_column {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: n_column,
                    found: row.len(),
                });
            }
        }

        Ok(Self { rows, n_column })
    }


    /// Returns the pair of the number of rows and
    /// the number of columns, class column included.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_column)
    }


    /// The class label of the `row`-th observation.
    #[inline]
    pub fn class(&self, row: usize) -> &str {
        &self.rows[row][0]
    }


    /// The cell value at (`row`, `column`).
    /// Column `0` is the class column.
    #[inline]
    pub fn value(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }


    /// Indices of the feature columns, `1..n_column`.
    #[inline]
    pub fn feature_columns(&self) -> impl Iterator<Item = usize> {
        1..self.n_column
    }


    /// Split into a training and a test sample by assigning
    /// each row independently:
    /// a uniform draw below `train_ratio` sends the row to
    /// the training side.
    ///
    /// Either side may come out empty for small samples or
    /// extreme ratios; evaluation callers must guard the
    /// empty-test-set case.
    pub fn holdout_split<R: Rng>(
        &self,
        train_ratio: f64,
        rng: &mut R,
    ) -> (Self, Self)
    {
        assert!(
            (0f64..=1f64).contains(&train_ratio),
            "train ratio must be in [0, 1]. got {train_ratio}."
        );

        let mut train = Vec::new();
        let mut test = Vec::new();
        for row in &self.rows {
            if rng.gen::<f64>() < train_ratio {
                train.push(row.clone());
            } else {
                test.push(row.clone());
            }
        }

        let train = Self { rows: train, n_column: self.n_column };
        let test = Self { rows: test, n_column: self.n_column };

        (train, test)
    }
}
