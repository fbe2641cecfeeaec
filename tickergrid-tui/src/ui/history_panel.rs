//! Panel 1 — History: the OHLCV table with sortable columns.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use tickergrid_core::render::{RenderedRow, TableView, HISTORY_COLUMNS};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(view) = app.history.session.view() else {
        let para = Paragraph::new(Line::from(Span::styled(
            "No data loaded. Press / and enter a symbol.",
            theme::muted(),
        )));
        f.render_widget(para, area);
        return;
    };

    // Summary line + table.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}  ", view.title), theme::accent_bold()),
        Span::styled(&view.summary, theme::muted()),
        Span::styled(
            "  [←/→]column [s/Enter]sort [e]xport",
            theme::muted(),
        ),
    ]));
    f.render_widget(summary, chunks[0]);

    f.render_widget(build_table(&view, app), chunks[1]);
}

fn build_table<'a>(view: &'a TableView, app: &'a AppState) -> Table<'a> {
    let header_cells = (0..view.header.len()).map(|i| {
        let label = view.header_label(i);
        let style = if i == app.history.sort_cursor {
            theme::accent_bold().add_modifier(Modifier::UNDERLINED)
        } else {
            theme::accent()
        };
        Cell::from(label).style(style)
    });
    let header = Row::new(header_cells).height(1);

    let visible = view
        .rows
        .iter()
        .skip(app.history.scroll)
        .map(|row| build_row(row));

    let mut widths = vec![Constraint::Length(11)];
    widths.extend(std::iter::repeat(Constraint::Length(10)).take(HISTORY_COLUMNS.len() - 1));

    Table::new(visible, widths).header(header).column_spacing(1)
}

fn build_row(row: &RenderedRow) -> Row<'_> {
    let cells = row.cells.iter().map(|cell| {
        Cell::from(cell.text.as_str()).style(theme::cell_style(&cell.tags))
    });
    let mut out = Row::new(cells).height(1);
    // Row-level highlight markers from the upstream dataset.
    if !row.tags.is_empty() {
        out = out.style(theme::warning());
    }
    out
}
