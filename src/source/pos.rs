use std::fmt;

/// Type used for line and column numbers, assumes inputs do not exceed 4G lines or columns
pub type SourceIndex = u32;

/// 1-based line and column of a character in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: SourceIndex,
    pub column: SourceIndex,
}

impl Position {
    /// Position of the first character of any input
    pub const START: Self = Self::new(1, 1);

    pub const fn new(line: SourceIndex, column: SourceIndex) -> Self {
        debug_assert!(line >= 1 && column >= 1);

        Self {
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
