use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::state::TuiState;

/// Repository, status, and equivalent git command lines above the tabs.
pub fn draw_status_panel(f: &mut Frame, area: Rect, state: &TuiState) {
    let label = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let status_style = if state.status_is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Repository: ", label),
            Span::styled(state.repository.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(state.status.clone(), status_style),
        ]),
        Line::from(vec![
            Span::styled("Command: ", label),
            Span::styled(state.command.clone(), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("ginsight"));
    f.render_widget(panel, area);
}
