//! Byte-offset to line-number resolution.
//!
//! Line resolution happens once per regex match and files can be large, so
//! the cumulative offset of every line start is computed once per file and
//! each match resolves via binary search instead of re-scanning the text.

/// Precomputed table of line-start byte offsets for one file.
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Build the offset table. Line 1 always starts at offset 0, even for
    /// empty input.
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line number containing `offset`.
    ///
    /// An offset exactly at a line start belongs to that line; an offset at
    /// or past end-of-file resolves to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }

    /// Byte offset of the start of a 1-based line.
    pub fn start_of(&self, line: usize) -> usize {
        self.starts[line - 1]
    }

    /// Full text of a 1-based line, without the trailing newline.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map_or(text.len(), |&next| next - 1);
        let slice = &text[start..end];
        slice.strip_suffix('\r').unwrap_or(slice)
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
