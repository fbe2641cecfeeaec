//! Panel 2 — Seasonal: average-return and win-rate heatmap tables.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use tickergrid_core::render::{seasonal_views, TableView};

use crate::app::{AppState, SeasonalView};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let s = &app.seasonal;

    if let Some(err) = &s.error {
        let para = Paragraph::new(Line::from(Span::styled(err.as_str(), theme::negative())));
        f.render_widget(para, area);
        return;
    }
    if s.loading {
        let para = Paragraph::new(Line::from(Span::styled(
            format!("Loading seasonal data for {}...", s.symbol),
            theme::warning(),
        )));
        f.render_widget(para, area);
        return;
    }

    let today = chrono::Local::now().date_naive();
    let (avg, win) = seasonal_views(&s.days, today);
    let view = match s.view {
        SeasonalView::AvgReturns => avg,
        SeasonalView::WinRates => win,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} — {}  ", s.symbol, view.title), theme::accent_bold()),
        Span::styled(&view.summary, theme::muted()),
        Span::styled("  [w]switch table [j/k]scroll", theme::muted()),
    ]));
    f.render_widget(summary, chunks[0]);

    if view.rows.is_empty() {
        return;
    }
    f.render_widget(build_table(&view, s.scroll), chunks[1]);
}

fn build_table(view: &TableView, scroll: usize) -> Table<'_> {
    let header_cells = view
        .header
        .iter()
        .map(|h| Cell::from(h.as_str()).style(theme::accent_bold()));
    let header = Row::new(header_cells).height(1);

    let rows = view.rows.iter().skip(scroll).map(|row| {
        let cells = row
            .cells
            .iter()
            .map(|cell| Cell::from(cell.text.as_str()).style(theme::cell_style(&cell.tags)));
        let mut out = Row::new(cells).height(1);
        if row.has_tag("highlight-today") {
            out = out.style(theme::today_row());
        }
        out
    });

    // Date column wide, the rest compact.
    let mut widths = vec![
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    widths.extend(
        std::iter::repeat(Constraint::Length(8)).take(view.header.len().saturating_sub(3)),
    );

    Table::new(rows, widths).header(header).column_spacing(1)
}
