//! Line-at-a-time read-eval-print loop.
//!
//! Every line runs in one [`Session`], so bindings and macros persist
//! between lines.

use std::io::{self, BufRead, Write};

use monkey_parse::ParseError;

use crate::pipeline::{ends_with_let, parse_source, Session};

pub const PROMPT: &str = ">> ";

pub const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Run the loop until `input` is exhausted, printing through the session's
/// print handler for `puts` and to `output` for everything else.
pub fn start<R: BufRead, W: Write>(input: R, output: W) -> io::Result<()> {
    start_with_session(&mut Session::new(), input, output)
}

pub fn start_with_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let parsed = parse_source(&line);
        if parsed.has_errors() {
            print_parse_errors(&mut output, &parsed.errors)?;
            continue;
        }

        let quiet = ends_with_let(&parsed.program);
        let value = session.run_program(parsed.program);
        if !quiet || value.is_error() {
            writeln!(output, "{value}")?;
        }
    }
}

fn print_parse_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    output.write_all(MONKEY_FACE.as_bytes())?;
    writeln!(output, "Whoops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
