use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tally_core::{
    apply_filters, sort_transactions, DatePreset, FilterCriteria, SortKey, SortOrder,
    TransactionSet, TxnType,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Analytics,
    Transactions,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Analytics, Page::Transactions];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analytics => "Analytics",
            Page::Transactions => "Transactions",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsView {
    Overview,
    Categories,
    TimeSeries,
    Distribution,
    Comparison,
}

impl AnalyticsView {
    pub const ALL: [AnalyticsView; 5] = [
        AnalyticsView::Overview,
        AnalyticsView::Categories,
        AnalyticsView::TimeSeries,
        AnalyticsView::Distribution,
        AnalyticsView::Comparison,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AnalyticsView::Overview => "Overview",
            AnalyticsView::Categories => "Categories",
            AnalyticsView::TimeSeries => "Time series",
            AnalyticsView::Distribution => "Distribution",
            AnalyticsView::Comparison => "Comparison",
        }
    }

    pub fn index(&self) -> usize {
        AnalyticsView::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TxnTab {
    Table,
    Stats,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Dashboard state. Every view is derived from `filtered`, which is
/// recomputed from `data` whenever a filter control changes.
pub struct App {
    pub data: TransactionSet,
    pub filtered: TransactionSet,
    pub page: Page,
    pub analytics: AnalyticsView,
    pub txn_tab: TxnTab,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub preset: Option<DatePreset>,
    pub type_filter: Option<TxnType>,
    pub input_mode: InputMode,
    pub search_input: String,
    pub scroll: usize,
    pub status: Option<String>,
    pub should_quit: bool,
    /// Criteria from the command line; interactive controls narrow these
    base: FilterCriteria,
    today: NaiveDate,
    export_path: PathBuf,
}

impl App {
    pub fn new(
        data: TransactionSet,
        base: FilterCriteria,
        today: NaiveDate,
        export_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            filtered: TransactionSet::default(),
            data,
            page: Page::Dashboard,
            analytics: AnalyticsView::Overview,
            txn_tab: TxnTab::Table,
            sort_key: SortKey::Date,
            sort_order: SortOrder::Descending,
            preset: None,
            type_filter: None,
            input_mode: InputMode::Normal,
            search_input: base.search_text.clone(),
            scroll: 0,
            status: None,
            should_quit: false,
            base,
            today,
            export_path,
        };
        app.refresh();
        app
    }

    /// Criteria currently in effect
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = self.base.clone();
        if let Some(preset) = self.preset {
            let (start, end) = preset.range(self.today);
            criteria.start_date = Some(criteria.start_date.map_or(start, |s| s.max(start)));
            criteria.end_date = Some(criteria.end_date.map_or(end, |e| e.min(end)));
        }
        if let Some(t) = self.type_filter {
            let allowed = criteria.types.as_ref().is_none_or(|types| types.contains(&t));
            criteria.types = Some(if allowed { BTreeSet::from([t]) } else { BTreeSet::new() });
        }
        criteria.with_search(self.search_input.clone())
    }

    pub fn refresh(&mut self) {
        self.filtered = apply_filters(&self.data, &self.criteria());
        self.clamp_scroll();
    }

    /// The filtered set in the table's current order
    pub fn sorted(&self) -> TransactionSet {
        sort_transactions(&self.filtered, self.sort_key, self.sort_order)
    }

    pub fn next_page(&mut self) {
        let i = (self.page.index() + 1) % Page::ALL.len();
        self.page = Page::ALL[i];
        self.scroll = 0;
    }

    pub fn prev_page(&mut self) {
        let i = (self.page.index() + Page::ALL.len() - 1) % Page::ALL.len();
        self.page = Page::ALL[i];
        self.scroll = 0;
    }

    fn shift_view(&mut self, forward: bool) {
        match self.page {
            Page::Analytics => {
                let n = AnalyticsView::ALL.len();
                let i = self.analytics.index();
                let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
                self.analytics = AnalyticsView::ALL[next];
            }
            Page::Transactions => {
                self.txn_tab = match self.txn_tab {
                    TxnTab::Table => TxnTab::Stats,
                    TxnTab::Stats => TxnTab::Table,
                };
            }
            Page::Dashboard => {}
        }
        self.scroll = 0;
    }

    pub fn cycle_sort_key(&mut self) {
        let i = SortKey::ALL.iter().position(|k| *k == self.sort_key).unwrap_or(0);
        self.sort_key = SortKey::ALL[(i + 1) % SortKey::ALL.len()];
    }

    /// All -> Debit -> Credit -> All
    pub fn cycle_type_filter(&mut self) {
        self.type_filter = match self.type_filter {
            None => Some(TxnType::Debit),
            Some(TxnType::Debit) => Some(TxnType::Credit),
            Some(TxnType::Credit) => None,
        };
        self.refresh();
    }

    /// None -> Today -> 7d -> 30d -> 90d -> None
    pub fn cycle_preset(&mut self) {
        self.preset = match self.preset {
            None => Some(DatePreset::ALL[0]),
            Some(p) => {
                let i = DatePreset::ALL.iter().position(|x| *x == p).unwrap_or(0);
                DatePreset::ALL.get(i + 1).copied()
            }
        };
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.preset = None;
        self.type_filter = None;
        self.search_input = self.base.search_text.clone();
        self.sort_key = SortKey::Date;
        self.sort_order = SortOrder::Descending;
        self.status = Some("Filters reset".to_string());
        self.refresh();
    }

    pub fn export_view(&mut self) {
        let rows = self.sorted();
        match tally_ingest::export_csv(&self.export_path, &rows) {
            Ok(()) => {
                self.status = Some(format!(
                    "Exported {} rows to {}",
                    rows.len(),
                    self.export_path.display()
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll += 1;
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.filtered.len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_key_normal(key),
            InputMode::Search => self.handle_key_search(key),
        }
    }

    fn handle_key_normal(&mut self, key: KeyEvent) {
        use KeyCode::*;

        self.status = None;
        match key.code {
            Char('q') => self.should_quit = true,
            Tab => self.next_page(),
            BackTab => self.prev_page(),
            Right => self.shift_view(true),
            Left => self.shift_view(false),
            Down => self.scroll_down(),
            Up => self.scroll_up(),
            Char('s') => self.cycle_sort_key(),
            Char('o') => self.sort_order = self.sort_order.toggled(),
            Char('t') => self.cycle_type_filter(),
            Char('p') => self.cycle_preset(),
            Char('/') => self.input_mode = InputMode::Search,
            Char('r') => self.reset_filters(),
            Char('e') => self.export_view(),
            _ => {}
        }
    }

    fn handle_key_search(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.search_input.clear();
                self.input_mode = InputMode::Normal;
                self.refresh();
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.refresh();
            }
            _ => {}
        }
    }
}
