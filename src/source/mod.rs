use std::ops::Range;

pub mod pos;

pub use pos::{Position, SourceIndex};

/// In-memory copy of one RPN input with amortization data to speed location queries when
/// rendering diagnostics. The conversion pipeline never needs this; only error display does.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    text: String,
    lines: Vec<usize>,
}

impl SourceFile {
    /// Create a new in-memory file from the given display name and contents
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let first_line = std::iter::once(0);
        let newlines = text
            .char_indices()
            .filter_map(|(idx, ch)| (ch == '\n').then_some(idx + 1));

        let lines = first_line
            .chain(newlines)
            .collect();

        Self {
            name: name.into(),
            text,
            lines,
        }
    }

    /// Get the text of a 1-based line number without its line terminator
    pub fn line_text(&self, line: SourceIndex) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let range = self.range_of_line(index).ok()?;

        Some(self.text[range].trim_end_matches(['\n', '\r']))
    }

    /// Get the byte offset of a 1-based position. Columns past the end of their line (as with
    /// the end of input marker) clamp to the end of that line's content.
    pub fn offset_of(&self, pos: Position) -> usize {
        let index = (pos.line as usize).saturating_sub(1).min(self.line_max());
        let Ok(range) = self.range_of_line(index) else {
            return self.text.len()
        };

        let content = self.text[range.clone()].trim_end_matches(['\n', '\r']);
        let skip = (pos.column as usize).saturating_sub(1);

        content
            .char_indices()
            .nth(skip)
            .map(|(idx, _)| range.start + idx)
            .unwrap_or(range.start + content.len())
    }

    /// Get the byte range covering the character at a 1-based position, or an empty range at
    /// the end of the line when the position has no character under it
    pub fn span_of(&self, pos: Position) -> Range<usize> {
        let start = self.offset_of(pos);
        let len = self.text[start..]
            .chars()
            .next()
            .filter(|c| *c != '\n' && *c != '\r')
            .map_or(0, char::len_utf8);

        start..start + len
    }

    /// Get the 0-based line index of the given byte position in the file
    fn line_of_offset(&self, offset: usize) -> usize {
        self.upper_bound_offset(offset).1
    }

    /// Get the byte range for the text contained in a given 0-based line index
    fn range_of_line(&self, line: usize) -> Result<Range<usize>, FileDataQueryError> {
        let start = *self.lines.get(line).ok_or_else(|| FileDataQueryError::LineTooLarge {
            err: line,
            max: self.line_max(),
        })?;

        let end = self.lines.get(line + 1).copied().unwrap_or(self.text.len());

        Ok(
            Range {
                start,
                end,
            }
        )
    }

    /// Get the first line entry less than or equal to the given byte position.
    /// Returns (byte position of line start, line index)
    fn upper_bound_offset(&self, offset: usize) -> (usize, usize) {
        match self.lines.binary_search(&offset) {
            Ok(line) => (offset, line),
            Err(pos) => {
                let line = pos - 1;
                (self.lines[line], line)
            }
        }
    }

    /// Get the last 0-based line index of this file
    fn line_max(&self) -> usize {
        self.lines.len() - 1
    }
}

impl<'a> codespan_reporting::files::Files<'a> for SourceFile {
    type FileId = ();
    type Name = &'a str;
    type Source = &'a str;

    fn name(&'a self, _: Self::FileId) -> Result<Self::Name, codespan_reporting::files::Error> {
        Ok(&self.name)
    }

    fn source(&'a self, _: Self::FileId) -> Result<Self::Source, codespan_reporting::files::Error> {
        Ok(&self.text)
    }

    fn line_index(&'a self, _: Self::FileId, byte_index: usize) -> Result<usize, codespan_reporting::files::Error> {
        Ok(self.line_of_offset(byte_index))
    }

    fn line_range(&'a self, _: Self::FileId, line_index: usize) -> Result<Range<usize>, codespan_reporting::files::Error> {
        self.range_of_line(line_index).map_err(Into::into)
    }
}

#[derive(Debug, thiserror::Error)]
enum FileDataQueryError {
    #[error("Line number {} too large for file with {} lines", err, max)]
    LineTooLarge {
        max: usize,
        err: usize,
    },
}

impl From<FileDataQueryError> for codespan_reporting::files::Error {
    fn from(value: FileDataQueryError) -> Self {
        match value {
            FileDataQueryError::LineTooLarge { err, max } => Self::LineTooLarge { given: err, max, },
        }
    }
}
