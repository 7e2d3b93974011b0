use crate::gallery::{FilterState, VisibilityDelta};

use super::BrowserState;

impl BrowserState {
    /// Apply the selected filter, or remove it if already applied.
    /// The selection follows the control to its new position.
    pub fn toggle_selected_filter(&mut self) {
        let Some(filter) = self.selected_filter() else {
            return;
        };
        let tag = self.engine.catalog().filter(filter).tag.clone();

        let (verb, delta) = match self.engine.filter_state(filter) {
            FilterState::Unapplied => ("Applied", self.engine.apply(filter)),
            FilterState::Applied { .. } => ("Removed", self.engine.remove(filter)),
        };

        if let Some(index) = self.filter_rows().iter().position(|f| *f == filter) {
            self.filters.select(index);
        }
        self.refresh_selection();
        self.status_message = Some(format!("{} {}: {}", verb, tag, describe(&delta)));
    }

    /// Remove every filter and the query
    pub fn clear_all(&mut self) {
        let delta = self.engine.clear();
        self.search.text.clear();
        self.search.editing = false;
        self.filters.select(0);
        self.refresh_selection();
        self.status_message = Some(format!("Cleared filters: {}", describe(&delta)));
    }
}

fn describe(delta: &VisibilityDelta) -> String {
    match (delta.hidden.len(), delta.shown.len()) {
        (0, 0) => "no change".to_string(),
        (hidden, 0) => format!("{} hidden", hidden),
        (0, shown) => format!("{} shown", shown),
        (hidden, shown) => format!("{} hidden, {} shown", hidden, shown),
    }
}
