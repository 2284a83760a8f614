use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph};
use ratatui::Frame;

use crate::error::Result;
use crate::model::AggregationKind;
use crate::provider::RepoDataProvider;

mod authors;
mod help;
mod hours;
mod recent;
mod status;

pub use authors::AuthorsView;
pub use help::draw_help_overlay;
pub use hours::HoursView;
pub use recent::RecentView;
pub use status::draw_status_panel;

/// One dashboard tab bound to a single provider aggregation.
pub trait View {
    fn kind(&self) -> AggregationKind;

    fn title(&self) -> &'static str;

    /// Raise the loading flag so the next frame can show it before the walk.
    fn begin_load(&mut self);

    /// Fetch this view's aggregation and store it as the view's own data.
    fn load(&mut self, provider: &mut RepoDataProvider) -> Result<()>;

    /// Drop the view's copy of the data. The provider cache is untouched.
    fn clear(&mut self);

    fn is_loading(&self) -> bool;

    /// Changes whenever the view needs to be redrawn.
    fn revision(&self) -> u64;

    fn draw(&self, f: &mut Frame, area: Rect);

    fn select_next(&mut self) {}

    fn select_previous(&mut self) {}
}

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Placeholder panel used while loading or when there is nothing to show.
pub(crate) fn draw_placeholder(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(placeholder, area);
}
