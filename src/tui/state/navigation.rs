use tracing::debug;

use super::{BrowserState, Focus};

/// Navigation direction for wrapping list movement
#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Advance an index within a wrapping list
fn wrap_index(current: usize, count: usize, direction: Direction) -> usize {
    match direction {
        Direction::Down => {
            if current < count - 1 { current + 1 } else { 0 }
        }
        Direction::Up => {
            if current > 0 { current - 1 } else { count - 1 }
        }
    }
}

impl BrowserState {
    pub fn move_down(&mut self) {
        self.navigate(Direction::Down);
    }

    pub fn move_up(&mut self) {
        self.navigate(Direction::Up);
    }

    fn navigate(&mut self, direction: Direction) {
        let count = match self.focus {
            Focus::Filters => self.filter_rows().len(),
            Focus::Cards => self.card_rows().len(),
        };
        if count == 0 {
            return;
        }
        let pane = match self.focus {
            Focus::Filters => &mut self.filters,
            Focus::Cards => &mut self.cards,
        };
        pane.select(wrap_index(pane.selected_index, count, direction));
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Filters => Focus::Cards,
            Focus::Cards => Focus::Filters,
        };
    }

    /// Enter: toggle the selected filter, or open the selected project's tab
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Filters => self.toggle_selected_filter(),
            Focus::Cards => self.open_selected_project(),
        }
    }

    pub fn open_selected_project(&mut self) {
        let Some(project) = self.selected_project() else {
            return;
        };
        let repo = project.repo_name().to_string();
        let title = project.title.clone();

        if self.tabs.open(&repo) {
            debug!(%repo, route = %self.route(), "opened project");
            self.status_message = Some(format!("Opened {}", title));
        } else if self.tabs.active() != repo {
            self.warn_status(format!("Cannot open tab for {}", repo));
        }
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
    }

    pub fn previous_tab(&mut self) {
        self.tabs.previous();
    }

    /// Close the active project tab; the gallery tab stays open
    pub fn close_active_tab(&mut self) {
        let active = self.tabs.active().to_string();
        if self.tabs.close(&active) {
            self.status_message = Some(format!("Closed {}", active));
        }
    }

    /// Cycle through the site's content views
    pub fn next_view(&mut self) {
        let views = self.navigator.views();
        let Some(index) = views.iter().position(|v| v == self.navigator.current()) else {
            return;
        };
        let next = views[(index + 1) % views.len()].clone();
        if let Some(route) = self.navigator.navigate(&next) {
            debug!(route = %route, "switched view");
            self.status_message = Some(format!("View: {}", next));
        }
    }
}
