//! Defines the CSV reader for [`Sample`](crate::Sample).
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Error;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`](Sample).
/// Reads a comma-delimited text file whose column `0` is
/// the class label and whose remaining columns are
/// categorical feature values.
/// # Example
/// ```no_run
/// use bayestree::SampleReader;
/// let sample = SampleReader::default()
///     .file("data.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: false }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has a header row or not.
    /// A header row is skipped.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments
    /// and returns `Result<Sample, Error>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, Error> {
        let file = self.file
            .expect("The file name for the sample is not set");
        let file = File::open(file)?;

        let mut lines = BufReader::new(file).lines();
        if self.has_header {
            lines.next().transpose()?;
        }

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<String>>();
            rows.push(row);
        }

        Sample::from_rows(rows)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headerless_csv() {
        let file = write_tmp("Yes,a,x\nNo,b,y\n");

        let sample = SampleReader::default()
            .file(file.path())
            .read()
            .unwrap();

        assert_eq!(sample.shape(), (2, 3));
        assert_eq!(sample.class(1), "No");
        assert_eq!(sample.value(0, 1), "a");
    }

    #[test]
    fn skips_header_row() {
        let file = write_tmp("class,attr\nYes,a\nNo,b\n");

        let sample = SampleReader::default()
            .file(file.path())
            .has_header(true)
            .read()
            .unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.class(0), "Yes");
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_tmp("");

        let err = SampleReader::default()
            .file(file.path())
            .read()
            .unwrap_err();

        assert!(matches!(err, Error::EmptySample));
    }

    #[test]
    fn ragged_file_is_rejected() {
        let file = write_tmp("Yes,a,x\nNo,b\n");

        let err = SampleReader::default()
            .file(file.path())
            .read()
            .unwrap_err();

        assert!(matches!(err, Error::RaggedRow { .. }));
    }
}
