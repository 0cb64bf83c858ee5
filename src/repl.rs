use std::io::{self, BufRead, IsTerminal, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::error::Result;
use crate::field::Field;
use crate::output::{self, Format};
use crate::session::{Event, Session};
use crate::time::Operation;

const PROMPT: &str = "clock-calc> ";

const HELP: &str = "\
commands:
  h1|m1|h2|m2 [value]  edit a field (no value clears it)
  add | sub            calculate time1 + time2 or time1 - time2
  clear                clear inputs and result
  rm <id>              remove a history entry
  history              list recent calculations
  show                 show inputs and result
  quit                 leave the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    session: Session,
    format: Format,
}

impl Repl {
    pub fn new(format: Format) -> Self {
        Self {
            session: Session::new(),
            format,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(err) => {
                writeln!(out, "parse error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            [] => {}
            ["quit" | "exit"] => return Ok(Flow::Quit),
            ["help"] => writeln!(out, "{HELP}")?,
            [name @ ("h1" | "m1" | "h2" | "m2"), rest @ ..] if rest.len() <= 1 => {
                let field: Field = name.parse()?;
                let value = rest.first().copied().unwrap_or_default();
                self.session.handle(Event::Edit {
                    field,
                    value: value.to_string(),
                });
            }
            [name @ ("h1" | "m1" | "h2" | "m2"), ..] => writeln!(out, "usage: {name} [value]")?,
            ["add"] => self.calculate(Operation::Add, out)?,
            ["sub"] => self.calculate(Operation::Subtract, out)?,
            ["clear"] => {
                self.session.handle(Event::Clear);
            }
            ["rm", id] => match id.parse() {
                Ok(id) => {
                    self.session.handle(Event::RemoveHistory(id));
                }
                Err(_) => writeln!(out, "not a history id: {id}")?,
            },
            ["rm", ..] => writeln!(out, "usage: rm <id>")?,
            ["history"] => output::print_history(out, self.format, self.session.history())?,
            ["show"] => output::print_state(
                out,
                self.format,
                self.session.inputs(),
                self.session.result(),
            )?,
            [other, ..] => writeln!(out, "unknown command: {other} (try `help`)")?,
        }
        Ok(Flow::Continue)
    }

    fn calculate(&mut self, op: Operation, out: &mut impl Write) -> Result<()> {
        if let Some(notification) = self.session.handle(Event::Calculate(op)) {
            output::print_notification(out, self.format, notification, self.session.result())?;
        }
        Ok(())
    }

    /// Feeds lines from a non-interactive reader, e.g. piped stdin.
    pub fn run_lines(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn run_editor(&mut self, out: &mut impl Write) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let line = match rl.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Err(err) = rl.add_history_entry(trimmed) {
                warn!(%err, "failed to record line history");
            }

            if self.handle_line(trimmed, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }

        Ok(())
    }
}

pub fn run_session(format: Format) -> Result<()> {
    let mut repl = Repl::new(format);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if stdin.is_terminal() {
        debug!("starting interactive session");
        repl.run_editor(&mut stdout)
    } else {
        debug!("reading session commands from stdin");
        repl.run_lines(stdin.lock(), &mut stdout)
    }
}
