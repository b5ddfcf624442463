//! Crate-wide error type.
//!
//! Everything that can go wrong while loading a network definition,
//! reading a dataset, or drawing a joint sample is reported through
//! [`Error`](Error). Classification itself never fails: an attribute
//! value that was not seen during induction resolves to the node's
//! default label instead.
use thiserror::Error;


/// Errors raised while loading definitions and sampling networks.
#[derive(Debug, Error)]
pub enum Error {
    /// The CPT of `node` has no entry for the parent outcomes
    /// encountered during sampling.
    /// Sampling cannot proceed for that node;
    /// the missing probability is never defaulted to `0` or `1`.
    #[error(
        "node `{node}` has no CPT entry for parent outcomes {outcomes:?}"
    )]
    MissingCptEntry {
        /// Name of the node whose CPT is incomplete.
        node: String,
        /// The parent outcome combination that has no entry.
        outcomes: Vec<bool>,
    },


    /// A node refers to a parent that is not declared before it.
    /// Declaration order defines the evaluation order,
    /// so a forward or unknown reference breaks
    /// the parent-before-child invariant.
    #[error("node `{node}` refers to undeclared parent `{parent}`")]
    UnknownParent {
        /// Name of the referring node.
        node: String,
        /// The undeclared parent name.
        parent: String,
    },


    /// Two nodes in a network definition share one name.
    #[error("node `{0}` is declared more than once")]
    DuplicateNodeName(String),


    /// A CPT row lists a number of parent outcomes that differs from
    /// the number of declared parents.
    #[error(
        "node `{node}` declares {expected} parent(s) \
         but a CPT row lists {found} outcome(s)"
    )]
    CptArityMismatch {
        /// Name of the offending node.
        node: String,
        /// Number of declared parents.
        expected: usize,
        /// Number of outcomes in the CPT row.
        found: usize,
    },


    /// A CPT row carries a probability outside `[0, 1]`.
    #[error("node `{node}` has probability {value} outside [0, 1]")]
    ProbabilityOutOfRange {
        /// Name of the offending node.
        node: String,
        /// The rejected probability.
        value: f64,
    },


    /// A dataset row has a column count that differs from the first row.
    #[error(
        "row {row} has {found} column(s), expected {expected}"
    )]
    RaggedRow {
        /// Zero-based row index within the dataset.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },


    /// The dataset contains no rows.
    #[error("the dataset is empty")]
    EmptySample,


    /// The dataset has a class column but no feature column.
    #[error("the dataset has no feature column")]
    NoFeatureColumn,


    /// An I/O failure while reading a definition or dataset.
    #[error(transparent)]
    Io(#[from] std::io::Error),


    /// A malformed JSON network definition.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
