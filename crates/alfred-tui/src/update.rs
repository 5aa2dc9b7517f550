//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! Key handling, first match wins:
//! 1. Ctrl+C / Esc quit
//! 2. Enter commits
//! 3. Space inserts a space
//! 4. Backspace / Delete remove the last character
//! 5. Printable characters are appended
//! 6. Anything else is ignored

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::SessionState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Never fails: unknown input is a no-op.
pub fn update(state: &mut SessionState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Interrupt => {
            tracing::info!("quit requested by interrupt signal");
            vec![UiEffect::Quit]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
    }
}

fn handle_terminal_event(state: &mut SessionState, event: Event) -> Vec<UiEffect> {
    match event {
        // Release/repeat events (kitty protocol, Windows) would double-type.
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Paste(text) => {
            state.insert_paste(&text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut SessionState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    // AltGr arrives as Ctrl+Alt on Windows and carries a real character.
    let altgr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c' | 'C') if ctrl => {
            tracing::info!("quit requested by ctrl+c");
            vec![UiEffect::Quit]
        }
        KeyCode::Esc => {
            tracing::info!("quit requested by esc");
            vec![UiEffect::Quit]
        }
        KeyCode::Enter => {
            if state.commit() {
                tracing::debug!(transcript_len = state.transcript.len(), "line committed");
            }
            vec![]
        }
        // Other Ctrl chords carry no printable text.
        KeyCode::Char(_) if ctrl && !altgr => vec![],
        KeyCode::Char(' ') => {
            state.input.push(' ');
            vec![]
        }
        KeyCode::Backspace | KeyCode::Delete => {
            state.backspace();
            vec![]
        }
        KeyCode::Char(ch) => {
            state.insert_char(ch);
            vec![]
        }
        _ => vec![],
    }
}
