//! Human-facing display of conversion errors against the input they came from.

use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    term::{self, termcolor::WriteColor},
};

use crate::{error::Error, source::SourceFile};

/// Build a codespan diagnostic with a primary label under the offending character
pub fn to_diagnostic(file: &SourceFile, err: &Error) -> Diagnostic<()> {
    let label = match err {
        Error::Lex(_) => "not valid in an RPN expression",
        Error::Parse(_) => "here",
    };

    Diagnostic::error()
        .with_code(err.stage())
        .with_message(err.message())
        .with_labels(vec![
            Label::primary((), file.span_of(err.position())).with_message(label),
        ])
}

/// Render an error to a terminal (or any color-aware writer)
pub fn emit(
    writer: &mut dyn WriteColor,
    file: &SourceFile,
    err: &Error,
) -> Result<(), codespan_reporting::files::Error> {
    let config = term::Config::default();
    term::emit(writer, &config, file, &to_diagnostic(file, err))
}

/// Render an error as plain text: the message, then the offending line with its number and a
/// caret under the error column
pub fn format_plain(file: &SourceFile, err: &Error) -> String {
    let mut out = format!("Error: {}\n\n", err.message());

    let Some(line) = file.line_text(err.line()) else {
        return out
    };

    let number = err.line().to_string();
    let gutter = " ".repeat(number.len());
    let indent = " ".repeat((err.column() as usize).saturating_sub(1));

    out.push_str(&format!("{number} | {line}\n"));
    out.push_str(&format!("{gutter} | {indent}^"));
    out
}
