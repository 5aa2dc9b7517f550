//! Session state.
//!
//! A single record owned by the runtime for the lifetime of the process:
//! the transcript shown above the prompt and the line being edited.
//! Created empty, mutated in place by the reducer, dropped on exit.

/// Label prefixed to lines the user committed.
pub const USER_LABEL: &str = "You";

/// Label prefixed to the echoed reply.
pub const ASSISTANT_LABEL: &str = "Alfred";

/// Spaces a pasted tab expands to.
const TAB_WIDTH: usize = 4;

/// Editor state for one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Committed lines in display order. Append-only, never evicted.
    pub transcript: Vec<String>,
    /// The uncommitted line after the prompt marker.
    pub input: String,
    /// Set once the loop has been asked to terminate.
    pub should_quit: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the current input.
    ///
    /// Appends the user line and its echo, then clears the input.
    /// Returns `false` (and changes nothing) when the input is empty.
    pub fn commit(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }

        let line = std::mem::take(&mut self.input);
        self.transcript.push(format!("{USER_LABEL}: {line}"));
        self.transcript
            .push(format!("{ASSISTANT_LABEL}: {}", echo_reply(&line)));
        true
    }

    /// Appends a typed character.
    pub fn insert_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.input.push(ch);
        }
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Appends pasted text on the single input line.
    pub fn insert_paste(&mut self, text: &str) {
        self.input.push_str(&sanitize_paste(text));
    }
}

/// Placeholder reply: the committed line, verbatim.
fn echo_reply(line: &str) -> &str {
    line
}

/// Flattens pasted text to one line of printable characters.
///
/// Each line break (`\r\n`, `\r` or `\n`) becomes one space, tabs expand,
/// other control characters drop.
fn sanitize_paste(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                let _ = chars.next_if_eq(&'\n');
                out.push(' ');
            }
            '\n' => out.push(' '),
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
