//! User confirmation before generating into a non-empty directory.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::{theme::Theme, Input};

use crate::constants::TRUTHY_ANSWERS;
use crate::error::{Error, Result};

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Shows `message` and reads one answer.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Prompter backed by dialoguer on a terminal and a plain line read otherwise.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Shows the question exactly as given, without dialoguer's `: ` suffix.
struct VerbatimTheme;

impl Theme for VerbatimTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}{sel}")
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        let stdout = Term::stdout();
        let answer = if io::stdin().is_terminal() && stdout.is_term() {
            Input::<String>::with_theme(&VerbatimTheme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text_on(&stdout)
                .map_err(|e| Error::PromptError(e.to_string()))?
        } else {
            print!("{message}");
            io::stdout().flush()?;
            read_input()?
        };
        Ok(is_truthy(&answer))
    }
}

/// Reads one line from stdin. End of input reads as an empty answer.
pub fn read_input() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Whether an answer means "yes": `y`, `yes`, `ok` or `true`, ignoring case
/// and surrounding whitespace.
pub fn is_truthy(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    TRUTHY_ANSWERS.contains(&answer.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONFIRM_MESSAGE;

    #[test]
    fn test_prompt_is_shown_verbatim() {
        let mut shown = String::new();
        VerbatimTheme.format_input_prompt(&mut shown, CONFIRM_MESSAGE, None).unwrap();
        assert_eq!(shown, "destination is not empty, continue? [y/N] ");

        let mut answered = String::new();
        VerbatimTheme.format_input_prompt_selection(&mut answered, CONFIRM_MESSAGE, "y").unwrap();
        assert_eq!(answered, "destination is not empty, continue? [y/N] y");
    }

    #[test]
    fn test_is_truthy() {
        for answer in ["y", "Y", "yes", "YES\n", " ok ", "True"] {
            assert!(is_truthy(answer), "{answer:?} should confirm");
        }
        for answer in ["", "n", "no", "yess", "nope", "y e s", "false"] {
            assert!(!is_truthy(answer), "{answer:?} should decline");
        }
    }
}
