//! Yes/no confirmation
//!
//! The orchestrator only sees the [`Confirmer`] trait, so tests can swap the
//! terminal prompt for a scripted answer source.

use crate::types::{ConcordError, Result};
use console::Term;
use dialoguer::Confirm;
use std::io::{self, BufRead, ErrorKind, Write};

/// Reply to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,

    /// Ctrl-C or end of input; ends the whole command
    Interrupted,
}

/// Asks the user a yes/no question
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> Result<Answer>;
}

/// Interactive prompt on the controlling terminal
///
/// Falls back to reading `y`/`n` lines from stdin when stderr is not a
/// terminal (piped input, CI).
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<Answer> {
        let term = Term::stderr();
        if !term.is_term() {
            let stdin = io::stdin();
            return read_answer(stdin.lock(), &mut io::stderr(), prompt);
        }

        match Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_on(&term)
        {
            Ok(true) => Ok(Answer::Yes),
            Ok(false) => Ok(Answer::No),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                let _ = term.show_cursor();
                let _ = term.write_line("");
                Ok(Answer::Interrupted)
            }
            Err(e) => Err(ConcordError::Prompt(e.to_string())),
        }
    }
}

/// Line-based prompt: re-asks until the answer is `y` or `n`
///
/// End of input counts as an interrupt.
pub fn read_answer<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> Result<Answer> {
    write!(output, "{prompt} (y/n): ")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(Answer::Interrupted);
        }
        match line.trim() {
            "y" => return Ok(Answer::Yes),
            "n" => return Ok(Answer::No),
            _ => {
                write!(output, "Please type y or n: ")?;
                output.flush()?;
            }
        }
    }
}
