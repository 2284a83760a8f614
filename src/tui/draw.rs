use ratatui::style::{Color, Modifier, Style};

/// Bar colour for the hour and author charts. Each bar is banded against the
/// busiest bar of the same chart, so the peak hour or top author reads red
/// and empty hours fade out.
pub fn bar_style(count: usize, busiest: usize) -> Style {
    if count == 0 || busiest == 0 {
        return Style::default().fg(Color::DarkGray);
    }

    match count * 4 / busiest {
        4.. => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        3 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        2 => Style::default().fg(Color::Green),
        1 => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::Blue),
    }
}
