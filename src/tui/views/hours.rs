use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use super::{draw_placeholder, View};
use crate::error::Result;
use crate::model::{AggregationKind, HourHistogram, HOURS_PER_DAY};
use crate::provider::RepoDataProvider;
use crate::tui::binding::Bound;
use crate::tui::draw::bar_style;

/// Bar chart of commits per authored hour.
#[derive(Default)]
pub struct HoursView {
    data: Bound<HourHistogram>,
}

impl HoursView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &HourHistogram {
        self.data.get()
    }
}

impl View for HoursView {
    fn kind(&self) -> AggregationKind {
        AggregationKind::Hour
    }

    fn title(&self) -> &'static str {
        "Commits by Hour"
    }

    fn begin_load(&mut self) {
        self.data.begin_load();
    }

    fn load(&mut self, provider: &mut RepoDataProvider) -> Result<()> {
        self.data.load_with(|| provider.commits_by_hour().cloned())
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
        let hours = self.data.get();
        if hours.is_empty() {
            draw_placeholder(f, area, self.title(), "No commits to show");
            return;
        }

        let counts = hours.counts();
        let max = counts.iter().copied().max().unwrap_or(0);
        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(hour, &count)| {
                Bar::default()
                    .value(count as u64)
                    .label(Line::from(format!("{hour:02}")))
                    .style(bar_style(count, max))
            })
            .collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let gaps = HOURS_PER_DAY - 1;
        let bar_width = (inner_width.saturating_sub(gaps) / HOURS_PER_DAY).max(1) as u16;

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(format!("{} (24h, {} commits)", self.title(), hours.total()))
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(Style::default().fg(Color::Black).bg(Color::Gray));
        f.render_widget(chart, area);
    }
}
