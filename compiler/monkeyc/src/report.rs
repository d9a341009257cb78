//! Source-labelled parse error reports.

use std::io::{self, Write};

use ariadne::{sources, Config, Label, Report, ReportKind};
use monkey_parse::ParseError;

/// Write one report per error, each pointing at the offending token.
///
/// Errors at end of input get a one-column label at the end of the text.
pub fn write_parse_errors<W: Write>(
    mut writer: W,
    path: &str,
    source: &str,
    errors: &[ParseError],
    color: bool,
) -> io::Result<()> {
    for error in errors {
        let mut range = error.span().to_range();
        if range.is_empty() {
            range.end = range.start + 1;
        }

        Report::build(ReportKind::Error, path.to_owned(), range.start)
            .with_message(error.to_string())
            .with_label(Label::new((path.to_owned(), range)).with_message(label_text(error)))
            .with_config(Config::default().with_color(color))
            .finish()
            .write(sources([(path.to_owned(), source.to_owned())]), &mut writer)?;
    }
    Ok(())
}

/// Write reports to stderr, colored when stderr is a terminal.
pub fn eprint_parse_errors(path: &str, source: &str, errors: &[ParseError]) -> io::Result<()> {
    let color = io::IsTerminal::is_terminal(&io::stderr());
    write_parse_errors(io::stderr().lock(), path, source, errors, color)
}

fn label_text(error: &ParseError) -> String {
    match error {
        ParseError::UnexpectedToken { found, .. } => format!("found {found} here"),
        ParseError::NoPrefixRule { kind, .. } => format!("{kind} cannot start an expression"),
        ParseError::InvalidInteger { .. } => "does not fit in a 64-bit integer".to_owned(),
    }
}
