use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::state::Dashboard;

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// The active tab changed; load its data.
    Load,
    /// Drop the provider cache, then load the active tab again.
    Refresh,
}

/// Handle a keyboard event, mutating dashboard state and returning the follow-up action.
pub fn handle_key_event(key_event: KeyEvent, dashboard: &mut Dashboard) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    if dashboard.state.show_help {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1) => dashboard.state.show_help = false,
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        return Action::None;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::F(1) => {
            dashboard.state.show_help = true;
            Action::None
        }
        KeyCode::Right | KeyCode::Tab => {
            dashboard.next_tab();
            Action::Load
        }
        KeyCode::Left | KeyCode::BackTab => {
            dashboard.previous_tab();
            Action::Load
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dashboard.current_mut().select_next();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            dashboard.current_mut().select_previous();
            Action::None
        }
        KeyCode::Char('c') => {
            let title = dashboard.current().title();
            dashboard.current_mut().clear();
            dashboard.set_status(format!("Cleared {title}"));
            Action::None
        }
        KeyCode::Char('r') => Action::Refresh,
        _ => Action::None,
    }
}
