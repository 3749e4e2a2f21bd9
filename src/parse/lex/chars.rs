

/// Check if the given character separates tokens. Only newline advances the line counter.
pub const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
