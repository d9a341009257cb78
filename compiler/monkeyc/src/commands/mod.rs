//! Command handlers for the `monkey` CLI.
//!
//! Each handler reports parse errors itself (as source-labelled reports on
//! stderr) and returns a [`CommandError`] so that `main` can choose the
//! exit code.

use std::io;

use monkey_eval::EvalError;

mod debug;
mod run;

pub use debug::{expand_file, lex_file, parse_file};
pub use run::{run_file, run_repl};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{count} parse error(s) in '{path}'")]
    Parse { path: String, count: usize },

    #[error("{0}")]
    Runtime(EvalError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read a source file, mapping I/O failures to user-facing errors.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_owned();
        match e.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound { path },
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Read { path, source: e },
        }
    })
}

/// Parse `source`, reporting errors against `path`.
pub(crate) fn parse_or_report(
    path: &str,
    source: &str,
) -> Result<monkey_ir::Program, CommandError> {
    let output = crate::parse_source(source);
    if output.has_errors() {
        crate::report::eprint_parse_errors(path, source, &output.errors)?;
        return Err(CommandError::Parse {
            path: path.to_owned(),
            count: output.errors.len(),
        });
    }
    Ok(output.program)
}
