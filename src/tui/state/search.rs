use super::BrowserState;

/// Free-text query box
#[derive(Debug, Default)]
pub struct SearchState {
    pub text: String,
    pub editing: bool,
}

impl BrowserState {
    pub fn start_search(&mut self) {
        self.search.editing = true;
    }

    /// Query updates are live: every keystroke re-filters
    pub fn search_char(&mut self, c: char) {
        self.search.text.push(c);
        self.apply_search();
    }

    pub fn search_backspace(&mut self) {
        self.search.text.pop();
        self.apply_search();
    }

    /// Stop editing and keep the query
    pub fn finish_search(&mut self) {
        self.search.editing = false;
    }

    /// Stop editing and drop the query
    pub fn cancel_search(&mut self) {
        self.search.editing = false;
        self.search.text.clear();
        self.apply_search();
    }

    fn apply_search(&mut self) {
        self.engine.set_query(&self.search.text);
        self.refresh_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;

    #[test]
    fn test_typing_narrows_cards_and_filters() {
        let (mut state, _temp) = create_test_browser();
        state.start_search();
        state.search_char('z');

        assert!(state.search.editing);
        assert_eq!(card_keys(&state), vec!["C"]);
        assert_eq!(filter_tags(&state), vec!["z"]);
    }

    #[test]
    fn test_backspace_restores() {
        let (mut state, _temp) = create_test_browser();
        state.start_search();
        state.search_char('z');
        state.search_backspace();

        assert_eq!(card_keys(&state), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_applied_filters_survive_query() {
        let (mut state, _temp) = create_test_browser();
        state.toggle_selected_filter(); // applies x
        state.start_search();
        state.search_char('z');

        // Applied x stays listed even though the query does not match it
        assert_eq!(filter_tags(&state), vec!["x", "z"]);
        assert!(card_keys(&state).is_empty());

        state.cancel_search();
        assert_eq!(card_keys(&state), vec!["A", "B"]);
        assert_eq!(state.engine.applied().len(), 1);
    }

    #[test]
    fn test_finish_keeps_query() {
        let (mut state, _temp) = create_test_browser();
        state.start_search();
        state.search_char('y');
        state.finish_search();

        assert!(!state.search.editing);
        assert_eq!(state.engine.query(), "y");
        assert_eq!(card_keys(&state), vec!["A", "C"]);
    }
}
