use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use super::{draw_placeholder, header_cell, View};
use crate::error::Result;
use crate::model::{AggregationKind, RecentCommits};
use crate::provider::RepoDataProvider;
use crate::tui::binding::Bound;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Table of the newest commits in history order.
pub struct RecentView {
    data: Bound<RecentCommits>,
    limit: usize,
    selected: usize,
    moves: u64,
}

impl RecentView {
    pub fn new(limit: usize) -> Self {
        Self {
            data: Bound::new(),
            limit,
            selected: 0,
            moves: 0,
        }
    }

    pub fn data(&self) -> &RecentCommits {
        self.data.get()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl View for RecentView {
    fn kind(&self) -> AggregationKind {
        AggregationKind::Recent
    }

    fn title(&self) -> &'static str {
        "Recent Commits"
    }

    fn begin_load(&mut self) {
        self.data.begin_load();
    }

    fn load(&mut self, provider: &mut RepoDataProvider) -> Result<()> {
        let limit = self.limit;
        self.data.load_with(|| provider.recent_commits(limit).cloned())?;
        self.selected = self.selected.min(self.data.get().len().saturating_sub(1));
        Ok(())
    }

    fn clear(&mut self) {
        self.selected = 0;
        self.data.reset();
    }

    fn is_loading(&self) -> bool {
        self.data.is_loading()
    }

    fn revision(&self) -> u64 {
        // selection moves must redraw too
        self.data.revision().wrapping_add(self.moves)
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        if self.is_loading() {
            draw_placeholder(f, area, self.title(), "Loading...");
            return;
        }
        let commits = self.data.get();
        if commits.is_empty() {
            draw_placeholder(f, area, self.title(), "No commits to show");
            return;
        }

        let rows: Vec<Row> = commits
            .iter()
            .map(|commit| {
                Row::new(vec![
                    Cell::from(commit.short_id.clone()).style(Style::default().fg(Color::Cyan)),
                    Cell::from(commit.author.clone()).style(Style::default().fg(Color::Magenta)),
                    Cell::from(commit.authored_at.format(DATE_FORMAT).to_string())
                        .style(Style::default().fg(Color::Green)),
                    Cell::from(commit.summary.clone()),
                ])
            })
            .collect();

        let mut table_state = TableState::default();
        table_state.select(Some(self.selected));

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Percentage(20),
                Constraint::Length(18),
                Constraint::Min(10),
            ],
        )
        .header(Row::new([
            header_cell("Hash", Color::Yellow),
            header_cell("Author", Color::Yellow),
            header_cell("Date", Color::Yellow),
            header_cell("Message", Color::Yellow),
        ]))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .title(format!("{} ({} commits)", self.title(), commits.len()))
                .borders(Borders::ALL),
        );

        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.data.get().len() {
            self.selected += 1;
            self.moves += 1;
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.moves += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitRecord;
    use chrono::{FixedOffset, TimeZone};

    fn commits(n: usize) -> RecentCommits {
        let tz = FixedOffset::east_opt(3600).unwrap();
        (0..n)
            .map(|i| {
                CommitRecord::new(
                    format!("{i:040}"),
                    "Alice",
                    tz.with_ymd_and_hms(2024, 5, 1, 10, i as u32, 0).unwrap(),
                    "message",
                )
            })
            .collect()
    }

    #[test]
    fn selection_stays_within_rows() {
        let mut view = RecentView::new(20);
        view.data.set(commits(2));
        view.select_previous();
        assert_eq!(view.selected(), 0);
        view.select_next();
        view.select_next();
        assert_eq!(view.selected(), 1);
    }

    #[test]
    fn clear_empties_rows_and_selection() {
        let mut view = RecentView::new(20);
        view.data.set(commits(3));
        view.select_next();
        let before = view.revision();
        view.clear();
        assert!(view.data().is_empty());
        assert_eq!(view.selected(), 0);
        assert_ne!(view.revision(), before);
    }

    #[test]
    fn date_column_uses_author_offset() {
        let rows = commits(1);
        assert_eq!(rows[0].authored_at.format(DATE_FORMAT).to_string(), "2024-05-01 10:00");
    }
}
