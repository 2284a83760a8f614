use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use super::{draw_placeholder, truncate, View};
use crate::error::Result;
use crate::model::{AggregationKind, AuthorHistogram};
use crate::provider::RepoDataProvider;
use crate::tui::binding::Bound;
use crate::tui::draw::bar_style;

const TOP_AUTHORS: usize = 10;
const NAME_WIDTH: usize = 15;

/// Bar chart of the most active authors.
#[derive(Default)]
pub struct AuthorsView {
    data: Bound<AuthorHistogram>,
}

impl AuthorsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &AuthorHistogram {
        self.data.get()
    }

    /// Top authors with display-truncated names, most commits first.
    pub fn top_authors(&self) -> Vec<(String, usize)> {
        self.data
            .get()
            .ranked()
            .into_iter()
            .take(TOP_AUTHORS)
            .map(|(name, count)| (truncate(name, NAME_WIDTH), count))
            .collect()
    }
}

impl View for AuthorsView {
    fn kind(&self) -> AggregationKind {
        AggregationKind::Author
    }

    fn title(&self) -> &'static str {
        "Commits by Author"
    }

    fn begin_load(&mut self) {
        self.data.begin_load();
    }

    fn load(&mut self, provider: &mut RepoDataProvider) -> Result<()> {
        self.data.load_with(|| provider.commits_by_author().cloned())
    }

    fn clear(&mut self) {
        self.data.reset();
    }

    fn is_loading(&self) -> bool {
        self.data.is_loading()
    }

    fn revision(&self) -> u64 {
        self.data.revision()
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        if self.is_loading() {
            draw_placeholder(f, area, self.title(), "Loading...");
            return;
        }
        let top = self.top_authors();
        if top.is_empty() {
            draw_placeholder(f, area, self.title(), "No attributed commits to show");
            return;
        }

        let max = top.first().map(|(_, count)| *count).unwrap_or(0);
        let bars: Vec<Bar> = top
            .iter()
            .map(|(name, count)| {
                Bar::default()
                    .value(*count as u64)
                    .label(Line::from(name.clone()))
                    .style(bar_style(*count, max))
            })
            .collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let per_bar = inner_width / top.len();
        let bar_width = per_bar.saturating_sub(1).clamp(1, NAME_WIDTH) as u16;

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(format!(
                        "{} (top {} of {})",
                        self.title(),
                        top.len(),
                        self.data.get().len()
                    ))
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(Style::default().fg(Color::Black).bg(Color::Gray));
        f.render_widget(chart, area);
    }
}
