use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType,
        Paragraph, Row, Table, Tabs, Wrap,
    },
};
use tally_core::{
    category_month_matrix, category_shares, category_summary, compare_periods, daily_summary,
    descriptive_stats, histogram, monthly_summary, recent_transactions, summarize,
    top_transactions, type_breakdown, DescriptiveStats, SortOrder, Transaction,
    TxnType,
};

use super::app::{AnalyticsView, App, InputMode, Page, TxnTab};
use super::theme::{self, Theme};
use crate::format::{format_number, format_percent, Formatter};

const HISTOGRAM_BINS: usize = 10;

/// Rendering settings that do not change while the dashboard runs
pub struct Presentation {
    pub fmt: Formatter,
    pub theme: Theme,
    pub top_n: usize,
}

fn panel<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn money_cell(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}

fn type_color(t: TxnType) -> Color {
    match t {
        TxnType::Debit => theme::EXPENSE,
        TxnType::Credit => theme::INCOME,
    }
}

pub fn draw(f: &mut Frame<'_>, app: &App, p: &Presentation) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // page tabs
            Constraint::Length(1), // filter line
            Constraint::Min(0),    // main
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    let tabs = Tabs::new(Page::ALL.iter().map(|pg| pg.title()))
        .select(app.page.index())
        .block(panel("tally"))
        .highlight_style(bold().fg(theme::ACCENT));
    f.render_widget(tabs, chunks[0]);

    f.render_widget(Paragraph::new(filter_line(app, p)), chunks[1]);

    if app.filtered.is_empty() {
        draw_no_data(f, chunks[2]);
    } else {
        match app.page {
            Page::Dashboard => draw_dashboard(f, chunks[2], app, p),
            Page::Analytics => draw_analytics(f, chunks[2], app, p),
            Page::Transactions => draw_transactions(f, chunks[2], app, p),
        }
    }

    let footer_text = match app.input_mode {
        InputMode::Search => format!("Search: {}_   (Enter: keep  Esc: clear)", app.search_input),
        InputMode::Normal => match &app.status {
            Some(msg) => msg.clone(),
            None => "Tab/Shift+Tab: page  ←/→: view  ↑/↓: scroll  s: sort  o: order  \
                     t: type  p: period  /: search  r: reset  e: export  q: quit"
                .to_string(),
        },
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(theme::MUTED))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[3]);
}

fn filter_line(app: &App, p: &Presentation) -> Line<'static> {
    let period = match (app.preset, app.filtered.date_range()) {
        (Some(preset), _) => preset.label().to_string(),
        (None, Some((first, last))) => format!("{} .. {}", p.fmt.date(first), p.fmt.date(last)),
        (None, None) => "-".to_string(),
    };
    let kind = app.type_filter.map_or("All types", |t| t.label());
    let order = match app.sort_order {
        SortOrder::Ascending => "asc",
        SortOrder::Descending => "desc",
    };
    let mut spans = vec![
        Span::styled(
            format!(" {} transactions ", format_number(app.filtered.len())),
            bold(),
        ),
        Span::raw(format!("| {period} | {kind} | sort: {} {order}", app.sort_key.label())),
    ];
    if !app.search_input.is_empty() {
        spans.push(Span::raw(format!(" | search: \"{}\"", app.search_input)));
    }
    Line::from(spans)
}

fn draw_no_data(f: &mut Frame<'_>, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from("No data for this filter").style(bold()),
        Line::from("Press r to reset filters").style(Style::default().fg(theme::MUTED)),
    ])
    .alignment(Alignment::Center)
    .block(panel(""));
    f.render_widget(msg, area);
}

fn draw_dashboard(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let s = summarize(&app.filtered);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    let kpis = [
        ("Income", p.fmt.currency(s.total_income), theme::INCOME),
        ("Expense", p.fmt.currency(s.total_expense), theme::EXPENSE),
        ("Balance", p.fmt.currency(s.balance), theme::ACCENT),
        ("Transactions", format_number(s.transaction_count), Color::White),
    ];
    for (i, (title, value, color)) in kpis.into_iter().enumerate() {
        let card = Paragraph::new(Line::from(value).style(bold().fg(color)))
            .alignment(Alignment::Center)
            .block(panel(title));
        f.render_widget(card, cards[i]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let debits: Vec<Transaction> = app.filtered.iter().filter(|t| t.is_debit()).cloned().collect();
    let expense_rows = category_summary(&debits);
    let bars: Vec<Bar> = expense_rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::default()
                .value(r.total_amount.round() as u64)
                .label(Line::from(r.category.clone()))
                .text_value(p.fmt.compact(r.total_amount))
                .style(Style::default().fg(p.theme.category(&r.category, i)))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel("Expense by category"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, body[0]);

    let recent = recent_transactions(&app.filtered, p.top_n);
    let table = transaction_table(&recent, p, None, format!("Recent {}", p.top_n));
    f.render_widget(table, body[1]);
}

/// Transactions as a table. `highlight` is a row index to reverse-video.
fn transaction_table<'a>(
    txns: &[Transaction],
    p: &Presentation,
    highlight: Option<usize>,
    title: String,
) -> Table<'a> {
    let rows = txns.iter().enumerate().map(|(idx, t)| {
        let mut row = Row::new(vec![
            Cell::from(p.fmt.date(t.date)),
            Cell::from(t.category.clone()),
            Cell::from(Span::styled(t.txn_type.label(), Style::default().fg(type_color(t.txn_type)))),
            money_cell(p.fmt.currency(t.amount)),
            Cell::from(t.description.clone()),
        ]);
        if highlight == Some(idx) {
            row = row.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        row
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(20),
        Constraint::Length(7),
        Constraint::Length(16),
        Constraint::Min(10),
    ];

    Table::new(rows, widths)
        .header(Row::new(vec!["Date", "Category", "Type", "Amount", "Description"]).style(bold()))
        .block(panel(title))
}

fn draw_analytics(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let tabs = Tabs::new(AnalyticsView::ALL.iter().map(|v| v.title()))
        .select(app.analytics.index())
        .block(panel("View"))
        .highlight_style(bold().fg(theme::ACCENT));
    f.render_widget(tabs, rows[0]);

    match app.analytics {
        AnalyticsView::Overview => draw_overview(f, rows[1], app, p),
        AnalyticsView::Categories => draw_categories(f, rows[1], app, p),
        AnalyticsView::TimeSeries => draw_time_series(f, rows[1], app, p),
        AnalyticsView::Distribution => draw_distribution(f, rows[1], app, p),
        AnalyticsView::Comparison => draw_comparison(f, rows[1], app, p),
    }
}

fn draw_overview(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let types = type_breakdown(&app.filtered);
    let total: f64 = types.iter().map(|t| t.total_amount).sum();
    let type_rows = types.iter().map(|t| {
        let share = if total > 0.0 { t.total_amount / total * 100.0 } else { 0.0 };
        Row::new(vec![
            Cell::from(Span::styled(t.txn_type.label(), Style::default().fg(type_color(t.txn_type)))),
            Cell::from(format_number(t.transaction_count)),
            money_cell(p.fmt.currency(t.total_amount)),
            Cell::from(format_percent(share)),
        ])
    });
    let type_table = Table::new(
        type_rows,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Type", "Count", "Total", "Share"]).style(bold()))
    .block(panel("By type"));
    f.render_widget(type_table, rows[0]);

    let months = monthly_summary(&app.filtered);
    let mut chart = BarChart::default()
        .block(panel("Monthly income vs expense"))
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);
    for m in &months {
        let bars = [
            Bar::default()
                .value(m.income.round() as u64)
                .text_value(p.fmt.compact(m.income))
                .style(Style::default().fg(theme::INCOME)),
            Bar::default()
                .value(m.expense.round() as u64)
                .text_value(p.fmt.compact(m.expense))
                .style(Style::default().fg(theme::EXPENSE)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(m.month.to_string()))
                .bars(&bars),
        );
    }
    f.render_widget(chart, rows[1]);
}

fn draw_categories(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let shares = category_shares(&category_summary(&app.filtered));
    let rows = shares.iter().enumerate().skip(app.scroll).map(|(i, s)| {
        let color = p.theme.category(&s.category, i);
        Row::new(vec![
            Cell::from(Span::styled("■", Style::default().fg(color))),
            Cell::from(s.category.clone()),
            Cell::from(format_number(s.transaction_count)),
            money_cell(p.fmt.currency(s.total_amount)),
            money_cell(format_percent(s.percent)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(vec!["", "Category", "Count", "Total", "Share"]).style(bold()))
    .block(panel("Category totals"));
    f.render_widget(table, cols[0]);

    let bars: Vec<Bar> = shares
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Bar::default()
                .value((s.percent * 10.0).round() as u64)
                .label(Line::from(s.category.clone()))
                .text_value(format_percent(s.percent))
                .style(Style::default().fg(p.theme.category(&s.category, i)))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel("Share of total"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, cols[1]);
}

fn axis_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return [0.0, 1.0];
    }
    if hi > lo { [lo, hi] } else { [lo - 1.0, hi + 1.0] }
}

fn draw_time_series(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let days = daily_summary(&app.filtered);
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return;
    };
    let x_of = |date: chrono::NaiveDate| (date - first.date).num_days() as f64;
    let x_bounds = [0.0, x_of(last.date).max(1.0)];
    let x_labels = vec![p.fmt.date(first.date), p.fmt.date(last.date)];

    let volume: Vec<(f64, f64)> = days.iter().map(|d| (x_of(d.date), d.total_amount)).collect();

    let mut chronological: Vec<&Transaction> = app.filtered.iter().collect();
    chronological.sort_by_key(|t| t.date);
    let mut running = 0.0;
    let net: Vec<(f64, f64)> = chronological
        .iter()
        .map(|t| {
            running += t.signed_amount();
            (x_of(t.date), running)
        })
        .collect();

    for (slot, title, points, color) in [
        (rows[0], "Daily volume", &volume, theme::ACCENT),
        (rows[1], "Running net balance", &net, theme::INCOME),
    ] {
        let y_bounds = axis_bounds(points.iter().map(|(_, y)| *y));
        let dataset = Dataset::default()
            .name(title)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(points);
        let chart = Chart::new(vec![dataset])
            .block(panel(title))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(theme::MUTED))
                    .bounds(x_bounds)
                    .labels(x_labels.clone()),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(theme::MUTED))
                    .bounds(y_bounds)
                    .labels(vec![p.fmt.compact(y_bounds[0]), p.fmt.compact(y_bounds[1])]),
            );
        f.render_widget(chart, slot);
    }
}

fn stats_lines(stats: &DescriptiveStats, fmt: &Formatter) -> Vec<Line<'static>> {
    let std = stats.std.map_or_else(|| "n/a".to_string(), |s| fmt.currency(s));
    [
        ("Count", format_number(stats.count)),
        ("Mean", fmt.currency(stats.mean)),
        ("Median", fmt.currency(stats.median)),
        ("Std", std),
        ("Min", fmt.currency(stats.min)),
        ("Q1", fmt.currency(stats.q1)),
        ("Q3", fmt.currency(stats.q3)),
        ("Max", fmt.currency(stats.max)),
    ]
    .into_iter()
    .map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), Style::default().fg(theme::MUTED)),
            Span::raw(value),
        ])
    })
    .collect()
}

fn draw_distribution(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let (Ok(stats), Ok(bins)) = (
        descriptive_stats(&app.filtered),
        histogram(&app.filtered, HISTOGRAM_BINS),
    ) else {
        draw_no_data(f, area);
        return;
    };

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count as u64)
                .label(Line::from(p.fmt.compact(b.lower)))
                .style(Style::default().fg(theme::ACCENT))
        })
        .collect();
    let chart = BarChart::default()
        .block(panel("Amount distribution"))
        .bar_width(7)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, cols[0]);

    let para = Paragraph::new(stats_lines(&stats, &p.fmt)).block(panel("Statistics"));
    f.render_widget(para, cols[1]);
}

fn draw_comparison(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    match compare_periods(&app.filtered) {
        Some(cmp) => {
            let periods = [("First half", &cmp.first), ("Second half", &cmp.second)]
                .into_iter()
                .map(|(label, period)| {
                    Row::new(vec![
                        Cell::from(label),
                        Cell::from(format!("{} .. {}", p.fmt.date(period.start), p.fmt.date(period.end))),
                        money_cell(p.fmt.currency(period.summary.total_income)),
                        money_cell(p.fmt.currency(period.summary.total_expense)),
                        money_cell(p.fmt.currency(period.summary.balance)),
                    ])
                });
            let table = Table::new(
                periods,
                [
                    Constraint::Length(12),
                    Constraint::Length(26),
                    Constraint::Length(16),
                    Constraint::Length(16),
                    Constraint::Length(16),
                ],
            )
            .header(Row::new(vec!["Period", "Dates", "Income", "Expense", "Balance"]).style(bold()))
            .block(panel("Period comparison"));
            f.render_widget(table, rows[0]);

            let deltas = cmp.categories.iter().skip(app.scroll).map(|c| {
                let change = c.change();
                let color = if change > 0.0 { theme::EXPENSE } else { theme::INCOME };
                Row::new(vec![
                    Cell::from(c.category.clone()),
                    money_cell(p.fmt.currency(c.first)),
                    money_cell(p.fmt.currency(c.second)),
                    Cell::from(
                        Line::from(p.fmt.currency(change))
                            .alignment(Alignment::Right)
                            .style(Style::default().fg(color)),
                    ),
                ])
            });
            let table = Table::new(
                deltas,
                [
                    Constraint::Length(20),
                    Constraint::Length(14),
                    Constraint::Length(14),
                    Constraint::Length(14),
                ],
            )
            .header(Row::new(vec!["Category", "First", "Second", "Change"]).style(bold()))
            .block(panel("By category"));
            f.render_widget(table, body[0]);
        }
        None => {
            let msg = Paragraph::new("Need at least two transactions to compare periods")
                .wrap(Wrap { trim: true })
                .block(panel("Period comparison"));
            f.render_widget(msg, rows[0]);
        }
    }

    let matrix = category_month_matrix(&app.filtered);
    let peak = matrix.max_cell();
    let mut header = vec![Cell::from("Category")];
    header.extend(matrix.months.iter().map(|m| Cell::from(m.to_string())));
    let grid = matrix.categories.iter().zip(&matrix.cells).skip(app.scroll).map(|(cat, cells)| {
        let mut row = vec![Cell::from(cat.clone())];
        row.extend(cells.iter().map(|&v| {
            let style = if peak > 0.0 && v >= peak * 0.5 {
                bold().fg(theme::EXPENSE)
            } else if v == 0.0 {
                Style::default().fg(theme::MUTED)
            } else {
                Style::default()
            };
            Cell::from(Line::from(p.fmt.compact(v)).alignment(Alignment::Right)).style(style)
        }));
        Row::new(row)
    });
    let mut widths = vec![Constraint::Length(20)];
    widths.extend(matrix.months.iter().map(|_| Constraint::Length(10)));
    let table = Table::new(grid, widths)
        .header(Row::new(header).style(bold()))
        .block(panel("Category x month"));
    f.render_widget(table, body[1]);
}

fn draw_transactions(f: &mut Frame<'_>, area: Rect, app: &App, p: &Presentation) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let selected = match app.txn_tab {
        TxnTab::Table => 0,
        TxnTab::Stats => 1,
    };
    let tabs = Tabs::new(["Table", "Stats"])
        .select(selected)
        .block(panel("View"))
        .highlight_style(bold().fg(theme::ACCENT));
    f.render_widget(tabs, rows[0]);

    match app.txn_tab {
        TxnTab::Table => {
            let sorted = app.sorted();
            let title = format!(
                "Sorted by {} {}",
                app.sort_key.label(),
                match app.sort_order {
                    SortOrder::Ascending => "↑",
                    SortOrder::Descending => "↓",
                }
            );
            // Keep the highlighted row on screen
            let visible = rows[1].height.saturating_sub(3) as usize;
            let offset = app.scroll.saturating_sub(visible.saturating_sub(1));
            let window = &sorted[offset.min(sorted.len())..];
            let table = transaction_table(window, p, Some(app.scroll - offset), title);
            f.render_widget(table, rows[1]);
        }
        TxnTab::Stats => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(34), Constraint::Min(0)])
                .split(rows[1]);
            match descriptive_stats(&app.filtered) {
                Ok(stats) => {
                    let para = Paragraph::new(stats_lines(&stats, &p.fmt)).block(panel("Amounts"));
                    f.render_widget(para, cols[0]);
                }
                Err(_) => draw_no_data(f, cols[0]),
            }

            let tops = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(cols[1]);
            for (slot, txn_type) in [(tops[0], TxnType::Debit), (tops[1], TxnType::Credit)] {
                let top = top_transactions(&app.filtered, p.top_n, Some(txn_type));
                let title = format!("Top {} {}", p.top_n, txn_type.label().to_lowercase());
                f.render_widget(transaction_table(&top, p, None, title), slot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySection;
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use tally_core::FilterCriteria;

    fn presentation() -> Presentation {
        Presentation {
            fmt: Formatter::new(&DisplaySection::default()),
            theme: Theme::default(),
            top_n: 5,
        }
    }

    fn app(criteria: FilterCriteria) -> App {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        let data = vec![
            Transaction::new(d(1, 1), "Gaji", TxnType::Credit, 5_000_000.0, "Gaji bulanan"),
            Transaction::new(d(1, 5), "Transport", TxnType::Debit, 25_000.0, "Ojek"),
            Transaction::new(d(2, 3), "Belanja", TxnType::Debit, 150_000.0, "Supermarket"),
        ]
        .into();
        App::new(data, criteria, d(2, 3), PathBuf::from("unused.csv"))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let p = presentation();
        terminal.draw(|f| draw(f, app, &p)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = app(FilterCriteria::all());
        for page in Page::ALL {
            app.page = page;
            for view in AnalyticsView::ALL {
                app.analytics = view;
                for tab in [TxnTab::Table, TxnTab::Stats] {
                    app.txn_tab = tab;
                    render(&app);
                }
            }
        }
        app.page = Page::Dashboard;
        assert!(render(&app).contains("Rp 4,825,000"));
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut app = app(FilterCriteria::all().with_categories(Vec::<String>::new()));
        for view in AnalyticsView::ALL {
            app.page = Page::Analytics;
            app.analytics = view;
            assert!(render(&app).contains("No data for this filter"));
        }
    }

    #[test]
    fn test_single_transaction_renders() {
        let app = app(FilterCriteria::all().with_search("ojek"));
        assert_eq!(app.filtered.len(), 1);
        let mut app = app;
        app.page = Page::Analytics;
        for view in AnalyticsView::ALL {
            app.analytics = view;
            render(&app);
        }
    }
}
