use std::fmt;

use crate::utils::normalize_path;

/// Pure position information in PHP source files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }

    /// Render as a POT reference (`path:line`) with forward-slash separators.
    pub fn reference(&self) -> String {
        format!("{}:{}", normalize_path(&self.file_path), self.line)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_path, self.line)
    }
}

/// Byte offsets where each line of a source text starts.
///
/// Built once per file so line lookups during extraction are O(log n).
#[derive(Debug, Clone)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut offsets = vec![0]; // Line 1 starts at offset 0
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { offsets }
    }

    /// Returns the 1-based line number containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(line) => line + 1, // Exact match at line start
            Err(line) => line,    // Falls within this line
        }
    }
}
