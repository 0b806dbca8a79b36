// Confirmation capability for destructive operations

use std::io::{BufRead, Write};
use tracing::warn;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete ALL tasks?";

/// Asks the user whether a destructive operation may proceed
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Fixed answer without asking anyone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assume(pub bool);

impl Confirm for Assume {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Interactive yes/no prompt over a reader/writer pair
///
/// Only `y` or `yes` (any case) count as consent. EOF and I/O errors decline.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = write!(self.output, "{} [y/N] ", prompt).and_then(|_| self.output.flush()) {
            warn!(error = ?e, "Failed to write confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = ?e, "Failed to read confirmation answer");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let accepted = PromptConfirm::new(Cursor::new(input.as_bytes()), &mut output).confirm(DELETE_PROMPT);
        (accepted, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_accepts_yes() {
        assert!(answer("y\n").0);
        assert!(answer("Y\n").0);
        assert!(answer("yes\n").0);
        assert!(answer("  YES  \n").0);
    }

    #[test]
    fn test_prompt_declines_everything_else() {
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("yep\n").0);
        assert!(!answer("").0);
    }

    #[test]
    fn test_prompt_writes_question() {
        let (_, output) = answer("n\n");
        assert_eq!(output, "Are you sure you want to delete this task? [y/N] ");
    }

    #[test]
    fn test_assume() {
        assert!(Assume(true).confirm(CLEAR_PROMPT));
        assert!(!Assume(false).confirm(CLEAR_PROMPT));
    }

    #[test]
    fn test_closure_sees_prompt() {
        let mut seen = Vec::new();
        let mut confirm = |prompt: &str| {
            seen.push(prompt.to_string());
            true
        };
        assert!(confirm.confirm(CLEAR_PROMPT));
        assert_eq!(seen, vec![CLEAR_PROMPT.to_string()]);
    }
}
