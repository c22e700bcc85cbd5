//! Small shared helpers for path display and error reporting.

use ruff_text_size::TextSize;

/// A utility struct to convert byte offsets to line numbers.
///
/// The parser reports errors with byte offsets, but warnings read better
/// with line numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        // Newlines are always single bytes in UTF-8.
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = usize::from(offset);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

/// Normalizes a path for display: forward slashes, no leading `./`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pyjumble::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\pkg\\mod.py")), "pkg/mod.py");
/// assert_eq!(normalize_display_path(Path::new("./src/app.py")), "src/app.py");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn line_index_maps_offsets_to_lines() {
        let index = LineIndex::new("a\nbb\nccc\n");
        assert_eq!(index.line_index(TextSize::from(0)), 1);
        assert_eq!(index.line_index(TextSize::from(2)), 2);
        assert_eq!(index.line_index(TextSize::from(3)), 2);
        assert_eq!(index.line_index(TextSize::from(5)), 3);
    }

    #[test]
    fn display_path_is_normalized() {
        assert_eq!(normalize_display_path(Path::new("./a/b.py")), "a/b.py");
        assert_eq!(normalize_display_path(Path::new("a/b.py")), "a/b.py");
    }
}
