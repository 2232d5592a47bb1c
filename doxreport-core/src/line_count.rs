//! Line counting for source files named in the log.

use std::path::PathBuf;

use crate::error::{DoxReportError, Result};
use crate::fs::FileSystem;

/// Reports how many lines a source file has.
#[cfg_attr(test, mockall::automock)]
pub trait LineCounter {
    /// Count the lines of the file named `file_name` in the log.
    fn count_lines(&self, file_name: &str) -> Result<usize>;
}

/// Counts every physical line of a file, whatever its language.
///
/// Relative file names are resolved against `root`.
pub struct SourceLineCounter<F: FileSystem> {
    fs: F,
    root: PathBuf,
}

impl<F: FileSystem> SourceLineCounter<F> {
    /// Create a counter rooted at `root`.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }
}

impl<F: FileSystem> LineCounter for SourceLineCounter<F> {
    fn count_lines(&self, file_name: &str) -> Result<usize> {
        let path = self.root.join(file_name);
        let contents = match self.fs.read_to_string(&path) {
            Ok(contents) => contents,
            Err(DoxReportError::Io(source)) => {
                return Err(DoxReportError::MissingSource { path, source });
            }
            Err(other) => return Err(other),
        };

        Ok(count_lines(&contents))
    }
}

fn count_lines(text: &str) -> usize {
    text.lines().count()
}
