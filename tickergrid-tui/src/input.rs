//! Keyboard input dispatch — input box first, then global keys, then
//! panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The symbol input box consumes keys while focused.
    if app.input_focused && app.active_panel == Panel::History {
        match key.code {
            KeyCode::Enter => {
                app.submit_symbol();
                app.input_focused = false;
                return;
            }
            KeyCode::Esc => {
                app.input_focused = false;
                return;
            }
            KeyCode::Backspace => {
                app.symbol_input.pop();
                return;
            }
            KeyCode::Char(c) => {
                app.symbol_input.push(c);
                return;
            }
            KeyCode::Tab => {} // falls through to panel switching
            _ => return,
        }
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::History;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Seasonal;
            return;
        }
        KeyCode::Char('3') | KeyCode::Char('?') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::History => handle_history_key(app, key),
        Panel::Seasonal => handle_seasonal_key(app, key),
        Panel::Help => {}
    }
}

fn handle_history_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.input_focused = true;
            app.symbol_input.clear();
        }
        KeyCode::Char('h') | KeyCode::Left => app.history.cursor_left(),
        KeyCode::Char('l') | KeyCode::Right => app.history.cursor_right(),
        KeyCode::Char('s') | KeyCode::Enter => app.apply_sort(),
        KeyCode::Char('e') => app.export_csv(),
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.history.session.rows().len();
            if rows > 0 && app.history.scroll + 1 < rows {
                app.history.scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history.scroll = app.history.scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.history.scroll = 0,
        _ => {}
    }
}

fn handle_seasonal_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') | KeyCode::Enter => {
            app.seasonal.view = app.seasonal.view.toggle();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.seasonal.days.len();
            if rows > 0 && app.seasonal.scroll + 1 < rows {
                app.seasonal.scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.seasonal.scroll = app.seasonal.scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.seasonal.scroll = 0,
        _ => {}
    }
}
