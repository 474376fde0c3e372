//! Interactive dashboard

mod app;
mod theme;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use tally_core::{FilterCriteria, TransactionSet};

use crate::config::Config;
use crate::format::Formatter;

use app::App;
use theme::Theme;
use ui::Presentation;

pub fn run_dashboard(
    data: TransactionSet,
    criteria: FilterCriteria,
    today: NaiveDate,
    export_path: PathBuf,
    cfg: &Config,
) -> Result<()> {
    let mut app = App::new(data, criteria, today, export_path);
    let presentation = Presentation {
        fmt: Formatter::new(&cfg.display),
        theme: Theme::from_config(&cfg.colors),
        top_n: cfg.display.top_n,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app, &presentation);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    presentation: &Presentation,
) -> Result<()> {
    tracing::info!(transactions = app.data.len(), "dashboard started");
    loop {
        terminal.draw(|f| ui::draw(f, app, presentation))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }
    tracing::info!("dashboard closed");
    Ok(())
}
