//! Top-level UI layout — symbol bar, active panel, status bar.

pub mod help_panel;
pub mod history_panel;
pub mod seasonal_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: symbol bar + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_symbol_bar(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

/// The symbol entry box, with the loaded symbol as context.
fn draw_symbol_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.input_focused && app.active_panel == Panel::History;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(" Symbol ")
        .title_style(theme::panel_title(focused));

    let mut spans: Vec<Span> = Vec::new();
    if focused {
        spans.push(Span::styled(&app.symbol_input, theme::text()));
        spans.push(Span::styled("_", theme::accent()));
    } else if let Some(symbol) = app.history.session.symbol() {
        spans.push(Span::styled(symbol, theme::accent_bold()));
    } else {
        spans.push(Span::styled("press / to enter a symbol", theme::muted()));
    }
    if app.history.loading {
        spans.push(Span::styled("  loading...", theme::warning()));
    }

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::History => history_panel::render(f, inner, app),
        Panel::Seasonal => seasonal_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}
