use super::state::AppState;
use crate::content::{CopyTarget, LinkTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    if state.show_help {
        handle_help_overlay(key, state);
        return;
    }

    match (key.code, key.modifiers) {
        // Focus (Shift+Tab arrives as BackTab)
        (KeyCode::Tab, KeyModifiers::NONE)
        | (KeyCode::Down, KeyModifiers::NONE)
        | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.focus_next();
        }
        (KeyCode::BackTab, _)
        | (KeyCode::Up, KeyModifiers::NONE)
        | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.focus_prev();
        }

        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            state.activate_focused();
        }

        // Shortcuts
        (KeyCode::Char('c'), KeyModifiers::NONE) => state.copy(CopyTarget::Install),
        (KeyCode::Char('y'), KeyModifiers::NONE) => state.copy(CopyTarget::Code),
        (KeyCode::Char('g'), KeyModifiers::NONE) => state.open(LinkTarget::Github),
        (KeyCode::Char('d'), KeyModifiers::NONE) => state.open(LinkTarget::Docs),

        // Scrolling
        (KeyCode::PageDown, _) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            state.scroll_down();
        }
        (KeyCode::PageUp, _) | (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.scroll_up();
        }
        (KeyCode::Home, _) => {
            state.scroll = 0;
        }

        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            state.show_help = true;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE)
        | (KeyCode::Esc, _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        _ => {}
    }
}

fn handle_help_overlay(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => state.show_help = false,
        _ => {}
    }
}
