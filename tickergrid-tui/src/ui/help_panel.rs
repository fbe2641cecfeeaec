//! Panel 3 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — History");
    key(&mut lines, "/", "Focus the symbol box (Enter fetches, Esc cancels)");
    key(&mut lines, "h/l or ←/→", "Move the sort-column cursor");
    key(&mut lines, "s / Enter", "Sort by cursor column (again to flip direction)");
    key(&mut lines, "e", "Export the table as CSV, in displayed order");
    key(&mut lines, "j / k", "Scroll down / up");
    key(&mut lines, "g", "Jump to top");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Seasonal");
    key(&mut lines, "w / Enter", "Switch between average returns and win rates");
    key(&mut lines, "j / k", "Scroll down / up");
    lines.push(Line::from(""));

    if !app.symbols.is_empty() {
        section(&mut lines, "Available Symbols");
        let names: Vec<&str> = app.symbols.iter().map(|s| s.symbol.as_str()).collect();
        lines.push(Line::from(Span::styled(
            format!("  {}", names.join("  ")),
            theme::muted(),
        )));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
