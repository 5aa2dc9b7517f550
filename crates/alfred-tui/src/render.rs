//! Pure view/render functions for the TUI.
//!
//! Functions here take `&SessionState` by immutable reference and never
//! mutate state or return effects. The whole screen is regenerated from
//! state on every frame.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::state::SessionState;

/// Title shown on the first line.
pub const TITLE: &str = "Alfred CLI Chat";

/// Marker in front of the input line.
pub const PROMPT: &str = "> ";

/// Footer naming the quit keys.
pub const HELP: &str = "Press Esc or Ctrl+C to quit.";

/// Builds the textual view of the session.
///
/// Title, blank line, one line per transcript entry, blank line, prompt
/// with the current input, blank line, help footer.
pub fn view(state: &SessionState) -> String {
    let mut s = String::with_capacity(
        TITLE.len()
            + HELP.len()
            + state.input.len()
            + state.transcript.iter().map(|e| e.len() + 1).sum::<usize>()
            + 8,
    );

    s.push_str(TITLE);
    s.push_str("\n\n");

    for entry in &state.transcript {
        s.push_str(entry);
        s.push('\n');
    }

    s.push('\n');
    s.push_str(PROMPT);
    s.push_str(&state.input);
    s.push_str("\n\n");
    s.push_str(HELP);
    s
}

/// Row of the prompt line within `view` (title, blank, entries, blank).
fn prompt_row(state: &SessionState) -> usize {
    state.transcript.len() + 3
}

/// The view broken into screen rows for a given width.
#[derive(Debug, PartialEq, Eq)]
struct ScreenLayout {
    rows: Vec<String>,
    /// (row, col) right after the input text.
    cursor: (usize, usize),
}

/// Hard-wraps one line by display width.
///
/// A character never straddles rows; an empty line still takes one row.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && current_width > 0 {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    rows.push(current);
    rows
}

fn layout(state: &SessionState, width: usize) -> ScreenLayout {
    let width = width.max(1);
    let prompt = prompt_row(state);
    let mut rows = Vec::new();
    let mut cursor = (0, 0);

    for (idx, line) in view(state).lines().enumerate() {
        let wrapped = wrap_line(line, width);
        if idx == prompt {
            let last_row = rows.len() + wrapped.len() - 1;
            let last_width: usize = wrapped
                .last()
                .map_or(0, |row| row.chars().filter_map(UnicodeWidthChar::width).sum());
            // A full last row pushes the cursor onto the following (blank) row
            cursor = if last_width >= width {
                (last_row + 1, 0)
            } else {
                (last_row, last_width)
            };
        }
        rows.extend(wrapped);
    }

    ScreenLayout { rows, cursor }
}

/// First visible row so the bottom of the view stays on screen.
fn scroll_offset(total_rows: usize, height: u16) -> usize {
    total_rows.saturating_sub(usize::from(height))
}

/// Screen position of the cursor, if its row is visible.
fn cursor_position(cursor: (usize, usize), area: Rect, offset: usize) -> Option<Position> {
    let (row, col) = cursor;
    let row = row.checked_sub(offset)?;
    if row >= usize::from(area.height) || col >= usize::from(area.width) {
        return None;
    }
    Some(Position::new(area.x + col as u16, area.y + row as u16))
}

/// Renders the entire TUI to the frame.
pub fn render(state: &SessionState, frame: &mut Frame) {
    let area = frame.area();
    let ScreenLayout { rows, cursor } = layout(state, usize::from(area.width));
    let offset = scroll_offset(rows.len(), area.height);

    let lines: Vec<Line<'static>> = rows.into_iter().skip(offset).map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines), area);

    if let Some(position) = cursor_position(cursor, area, offset) {
        frame.set_cursor_position(position);
    }
}
