//! Interactive shell.
//!
//! Each entry runs through the same pipeline as a file. Bindings and macros
//! persist for the whole session.

use std::io::{self, BufRead, Write};

use monkey_eval::{RunError, Session, Value};
use tracing::debug;

use crate::commands::write_parse_errors;

/// Prompts and the multi-line toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub multi_prompt: String,
    /// A line holding only this starts and ends multi-line entry.
    pub multi_toggle: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: ">> ".to_string(),
            multi_prompt: "-> ".to_string(),
            multi_toggle: ".".to_string(),
        }
    }
}

/// A read-eval-print loop over any line source and sink.
pub struct Repl<R, W> {
    config: ReplConfig,
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(config: ReplConfig, session: Session, input: R, output: W) -> Self {
        Repl {
            config,
            session,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(mut self) -> io::Result<()> {
        self.banner()?;

        let prompt = self.config.prompt.clone();
        while let Some(line) = self.read_line(&prompt)? {
            if line.eq_ignore_ascii_case("quit") {
                break;
            }

            let source = if line == self.config.multi_toggle {
                self.read_multi_line()?
            } else if let Some(path) = run_command(&line) {
                self.load_file(path)?
            } else {
                line
            };

            self.eval(&source)?;
        }
        Ok(())
    }

    fn banner(&mut self) -> io::Result<()> {
        let toggle = &self.config.multi_toggle;
        writeln!(self.output, "Welcome to the Monkey programming language!")?;
        writeln!(
            self.output,
            "Type in commands, or type \"quit\" (without quotes) to exit."
        )?;
        writeln!(
            self.output,
            "Enter {toggle} to turn multi-line mode on.  Enter {toggle} again to turn it off and evaluate."
        )
    }

    /// Prompt and read one line without its terminator. `None` at end of
    /// input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Collect lines up to the closing toggle or end of input.
    fn read_multi_line(&mut self) -> io::Result<String> {
        let prompt = self.config.multi_prompt.clone();
        let mut source = String::new();
        while let Some(line) = self.read_line(&prompt)? {
            if line == self.config.multi_toggle {
                break;
            }
            source.push_str(&line);
            source.push('\n');
        }
        Ok(source)
    }

    /// Contents of `path`, or nothing after reporting why it can't be read.
    fn load_file(&mut self, path: &str) -> io::Result<String> {
        if path.is_empty() {
            writeln!(self.output, "Missing filename")?;
            return Ok(String::new());
        }
        match std::fs::read_to_string(path) {
            Ok(source) => Ok(source),
            Err(error) => {
                debug!(path, %error, "cannot load file");
                writeln!(self.output, "{error}")?;
                Ok(String::new())
            }
        }
    }

    fn eval(&mut self, source: &str) -> io::Result<()> {
        match self.session.run(source) {
            Ok(Value::Void) => Ok(()),
            Ok(value) => writeln!(self.output, "{value}"),
            Err(RunError::Parse(errors)) => write_parse_errors(&mut self.output, &errors),
            Err(error) => writeln!(self.output, "ERROR: {error}"),
        }
    }
}

/// The path in a `run <path>` line.
fn run_command(line: &str) -> Option<&str> {
    let (command, rest) = line.split_at_checked(3)?;
    if !command.eq_ignore_ascii_case("run") {
        return None;
    }
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}
