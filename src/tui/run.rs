use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, error};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::{Frame, Terminal};

use super::events::{handle_key_event, Action};
use super::layout::dashboard_chunks;
use super::state::{Dashboard, FrameKey};
use super::views::{draw_help_overlay, draw_status_panel};
use crate::error::Result;
use crate::provider::RepoDataProvider;

pub fn run(provider: &mut RepoDataProvider, limit: usize) -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, provider, limit);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    provider: &mut RepoDataProvider,
    limit: usize,
) -> Result<()> {
    let mut dashboard = Dashboard::new(provider.path(), limit);
    let mut last_drawn: Option<FrameKey> = None;

    dashboard.set_status("Connecting to repository...");
    render(terminal, &dashboard, &mut last_drawn)?;
    match provider.connect() {
        Ok(()) => {
            dashboard.set_status("Connected successfully!");
            load_current(terminal, &mut dashboard, provider, &mut last_drawn)?;
        }
        Err(e) => {
            error!("{e}");
            dashboard.set_error(&e);
        }
    }

    loop {
        if last_drawn.as_ref() != Some(&dashboard.frame_key()) {
            render(terminal, &dashboard, &mut last_drawn)?;
        }

        if !poll(Duration::from_millis(200))? {
            continue;
        }
        match read()? {
            Event::Key(key_event) => match handle_key_event(key_event, &mut dashboard) {
                Action::Quit => break,
                Action::None => {}
                Action::Load => load_current(terminal, &mut dashboard, provider, &mut last_drawn)?,
                Action::Refresh => {
                    provider.clear_cache();
                    load_current(terminal, &mut dashboard, provider, &mut last_drawn)?;
                }
            },
            Event::Resize(_, _) => last_drawn = None,
            _ => {}
        }
    }

    debug!("Leaving dashboard");
    Ok(())
}

/// Show the loading state, then run the walk and let the next frame pick up the result.
fn load_current<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
    provider: &mut RepoDataProvider,
    last_drawn: &mut Option<FrameKey>,
) -> Result<()> {
    dashboard.begin_load();
    render(terminal, dashboard, last_drawn)?;
    dashboard.finish_load(provider);
    Ok(())
}

fn render<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &Dashboard,
    last_drawn: &mut Option<FrameKey>,
) -> Result<()> {
    terminal.draw(|f| draw_dashboard(f, dashboard))?;
    *last_drawn = Some(dashboard.frame_key());
    Ok(())
}

fn draw_dashboard(f: &mut Frame, dashboard: &Dashboard) {
    let size = f.size();
    let (status_area, tabs_area, body_area) = dashboard_chunks(size);

    draw_status_panel(f, status_area, &dashboard.state);

    let tabs = Tabs::new(dashboard.titles())
        .block(Block::default().borders(Borders::ALL).title("Views"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(dashboard.state.tab_index);
    f.render_widget(tabs, tabs_area);

    dashboard.current().draw(f, body_area);

    if dashboard.state.show_help {
        draw_help_overlay(f, size);
    }
}
