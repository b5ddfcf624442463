//! The files in `sample/` directory define the tabular dataset type
//! consumed by the decision-tree inducer.

/// Defines the dataset struct and the holdout split.
pub mod sample_struct;

/// Defines the CSV reader.
pub mod reader;


pub use self::sample_struct::Sample;
pub use self::reader::SampleReader;
