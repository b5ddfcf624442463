//! Defines the conditional probability table of a network node.
use std::collections::HashMap;

use crate::Error;


/// A lookup from a boolean tuple of parent outcomes to the probability
/// that the owning node's outcome is `true`.
/// The outcomes are ordered as the owning node declares its parents.
/// A root node has a single entry keyed by the empty tuple,
/// which is its marginal probability.
///
/// Rows are independent conditional probabilities,
/// so they are not required to sum to one across the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalProbabilityTable {
    table: HashMap<Vec<bool>, f64>,
}


impl ConditionalProbabilityTable {
    /// Build a table from `(parent outcomes, probability)` rows.
    /// Later rows overwrite earlier rows with the same outcomes.
    #[inline]
    pub fn from_rows<I>(rows: I) -> Self
        where I: IntoIterator<Item = (Vec<bool>, f64)>
    {
        let table = rows.into_iter().collect();
        Self { table }
    }


    /// Returns the probability stored for `outcomes`.
    /// A combination without an entry is a configuration error,
    /// reported as [`Error::MissingCptEntry`](Error::MissingCptEntry)
    /// by the owning node.
    #[inline]
    pub fn probability(&self, outcomes: &[bool]) -> Option<f64> {
        self.table.get(outcomes).copied()
    }


    /// Number of rows in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }


    /// `true` if the table has no row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }


    /// Check every probability against `[0, 1]`.
    /// `node` names the owner for error reporting.
    #[inline]
    pub(super) fn check_range(&self, node: &str) -> Result<(), Error> {
        for &value in self.table.values() {
            if !(0f64..=1f64).contains(&value) {
                return Err(Error::ProbabilityOutOfRange {
                    node: node.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
