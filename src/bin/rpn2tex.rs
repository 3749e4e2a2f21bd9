use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use rpn2tex::{diagnostic, SourceFile};

/// Convert Reverse Polish Notation expressions to LaTeX
#[derive(Parser, Debug)]
#[command(name = "rpn2tex", version)]
struct Cli {
    /// Input file path, or "-" to read standard input
    input: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// When to color error reports
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,

    /// Print errors as plain text with a caret under the error column
    #[arg(long)]
    plain: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(value: Color) -> Self {
        match value {
            Color::Auto => Self::Auto,
            Color::Always => Self::Always,
            Color::Never => Self::Never,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", read_message(path, source))]
    Read {
        path: String,
        source: io::Error,
    },
    #[error("{}", write_message(path, source))]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

fn read_message(path: &str, err: &io::Error) -> String {
    if path == "-" {
        return format!("Error reading from stdin: {err}")
    }

    match err.kind() {
        io::ErrorKind::NotFound => format!("Error: Input file not found: {path}"),
        io::ErrorKind::PermissionDenied => format!("Error: Permission denied reading: {path}"),
        io::ErrorKind::IsADirectory => format!("Error: Expected a file, got a directory: {path}"),
        _ => format!("Error reading file {path}: {err}"),
    }
}

fn write_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::PermissionDenied => format!("Error: Permission denied writing: {path}"),
        io::ErrorKind::IsADirectory => format!("Error: Cannot write to directory: {path}"),
        _ => format!("Error writing to file {path}: {err}"),
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    let read = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };

    read.map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn write_output(path: Option<&PathBuf>, latex: &str) -> Result<(), CliError> {
    let Some(path) = path else {
        println!("{latex}");
        return Ok(())
    };

    fs::write(path, format!("{latex}\n"))
        .map_err(|source| CliError::Write { path: path.clone(), source })?;
    eprintln!("Generated: {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let text = match read_input(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE
        }
    };

    let latex = match rpn2tex::convert(&text) {
        Ok(latex) => latex,
        Err(err) => {
            let name = if cli.input == "-" { "<stdin>" } else { cli.input.as_str() };
            let file = SourceFile::new(name, text);

            if cli.plain {
                eprintln!("{}", diagnostic::format_plain(&file, &err));
            } else {
                let mut stderr = StandardStream::stderr(cli.color.into());
                if let Err(e) = diagnostic::emit(&mut stderr, &file, &err) {
                    log::warn!("failed to render diagnostic: {e}");
                    eprintln!("{}", diagnostic::format_plain(&file, &err));
                }
            }
            return ExitCode::FAILURE
        }
    };

    if let Err(e) = write_output(cli.output.as_ref(), &latex) {
        eprintln!("{e}");
        return ExitCode::FAILURE
    }

    ExitCode::SUCCESS
}
