use std::path::Path;

use super::views::{AuthorsView, HoursView, RecentView, View};
use crate::error::InsightError;
use crate::provider::RepoDataProvider;

pub struct TuiState {
    pub repository: String,
    pub status: String,
    pub status_is_error: bool,
    pub command: String,
    pub tab_index: usize,
    pub show_help: bool,
}

impl TuiState {
    pub fn new(repository: &Path) -> Self {
        Self {
            repository: repository.display().to_string(),
            status: "Initializing...".to_string(),
            status_is_error: false,
            command: "None".to_string(),
            tab_index: 0,
            show_help: false,
        }
    }
}

/// Everything that decides what a frame looks like. A new frame is drawn
/// only when this differs from the last drawn one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameKey {
    tab_index: usize,
    show_help: bool,
    status: String,
    revisions: Vec<u64>,
}

pub struct Dashboard {
    pub state: TuiState,
    pub views: Vec<Box<dyn View>>,
    limit: usize,
}

impl Dashboard {
    pub fn new(repository: &Path, limit: usize) -> Self {
        let views: Vec<Box<dyn View>> = vec![
            Box::new(HoursView::new()),
            Box::new(AuthorsView::new()),
            Box::new(RecentView::new(limit)),
        ];
        Self {
            state: TuiState::new(repository),
            views,
            limit,
        }
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.views.iter().map(|v| v.title()).collect()
    }

    pub fn current(&self) -> &dyn View {
        self.views[self.state.tab_index].as_ref()
    }

    pub fn current_mut(&mut self) -> &mut dyn View {
        self.views[self.state.tab_index].as_mut()
    }

    pub fn next_tab(&mut self) {
        self.state.tab_index = (self.state.tab_index + 1) % self.views.len();
    }

    pub fn previous_tab(&mut self) {
        self.state.tab_index = if self.state.tab_index == 0 {
            self.views.len() - 1
        } else {
            self.state.tab_index - 1
        };
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status = message.into();
        self.state.status_is_error = false;
    }

    pub fn set_error(&mut self, error: &InsightError) {
        self.state.status = format!("Error: {error}");
        self.state.status_is_error = true;
    }

    /// First half of a load: mark the current view as loading so the
    /// caller can draw that before the walk blocks.
    pub fn begin_load(&mut self) {
        let title = self.current().title();
        let command = self.current().kind().command_line(self.limit);
        self.state.command = command;
        self.set_status(format!("Loading {title}..."));
        self.current_mut().begin_load();
    }

    /// Second half of a load: run the current view's aggregation.
    pub fn finish_load(&mut self, provider: &mut RepoDataProvider) {
        let title = self.current().title();
        match self.current_mut().load(provider) {
            Ok(()) => self.set_status(format!("Viewing {title}")),
            Err(e) => self.set_error(&e),
        }
    }

    pub fn frame_key(&self) -> FrameKey {
        FrameKey {
            tab_index: self.state.tab_index,
            show_help: self.state.show_help,
            status: self.state.status.clone(),
            revisions: self.views.iter().map(|v| v.revision()).collect(),
        }
    }
}
