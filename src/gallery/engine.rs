use std::collections::BTreeSet;

use tracing::debug;

use super::catalog::{CardId, Catalog, FilterId};
use super::query::{card_search_text, matches, normalize_query};

/// Presentation state of a filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Unapplied,
    /// Applied; position 0 is the most recently applied filter
    Applied { position: usize },
}

/// Cards whose displayed/hidden membership changed during one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityDelta {
    pub hidden: Vec<CardId>,
    pub shown: Vec<CardId>,
}

impl VisibilityDelta {
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty() && self.shown.is_empty()
    }

    fn merge(&mut self, other: VisibilityDelta) {
        self.hidden.extend(other.hidden);
        self.shown.extend(other.shown);
    }
}

/// Tag filter state over a fixed catalog.
///
/// `displayed` and `hidden` partition every card. With filters applied,
/// `displayed` is the intersection of their card sets; with none, it is every
/// card. The query is an overlay: it only narrows what is shown and never
/// touches the partition or the applied filters.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Catalog,
    displayed: BTreeSet<CardId>,
    hidden: BTreeSet<CardId>,
    /// Most recently applied first
    applied: Vec<FilterId>,
    is_applied: Vec<bool>,
    query: String,
    card_text: Vec<String>,
}

impl FilterEngine {
    pub fn new(catalog: Catalog) -> Self {
        let displayed = catalog.card_ids().collect();
        let is_applied = vec![false; catalog.filters().len()];
        let card_text = catalog
            .cards()
            .iter()
            .map(|card| card_search_text(&card.tags))
            .collect();
        Self {
            catalog,
            displayed,
            hidden: BTreeSet::new(),
            applied: Vec::new(),
            is_applied,
            query: String::new(),
            card_text,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a filter, hiding displayed cards that lack its tag.
    /// No-op if the filter is already applied.
    pub fn apply(&mut self, filter: FilterId) -> VisibilityDelta {
        if self.is_applied[filter.0] {
            return VisibilityDelta::default();
        }

        let cards = self.catalog.cards_of(filter);
        let to_hide: Vec<CardId> = self.displayed.difference(cards).copied().collect();
        for card in &to_hide {
            self.displayed.remove(card);
            self.hidden.insert(*card);
        }

        self.applied.insert(0, filter);
        self.is_applied[filter.0] = true;

        debug!(
            tag = %self.catalog.filter(filter).tag,
            hidden = to_hide.len(),
            displayed = self.displayed.len(),
            "applied filter"
        );

        VisibilityDelta {
            hidden: to_hide,
            shown: Vec::new(),
        }
    }

    /// Remove an applied filter, revealing the cards it alone was hiding.
    /// No-op if the filter is not applied.
    pub fn remove(&mut self, filter: FilterId) -> VisibilityDelta {
        if !self.is_applied[filter.0] {
            return VisibilityDelta::default();
        }

        self.applied.retain(|f| *f != filter);
        self.is_applied[filter.0] = false;

        let to_show: Vec<CardId> = if self.applied.is_empty() {
            std::mem::take(&mut self.hidden).into_iter().collect()
        } else {
            // Only cards qualifying under every remaining filter but lacking
            // the removed tag can have been hidden by it alone.
            let removed_cards = self.catalog.cards_of(filter);
            self.intersection_of_applied()
                .difference(removed_cards)
                .filter(|card| self.hidden.contains(card))
                .copied()
                .collect()
        };

        for card in &to_show {
            self.hidden.remove(card);
            self.displayed.insert(*card);
        }

        debug!(
            tag = %self.catalog.filter(filter).tag,
            shown = to_show.len(),
            displayed = self.displayed.len(),
            "removed filter"
        );

        VisibilityDelta {
            hidden: Vec::new(),
            shown: to_show,
        }
    }

    /// Remove every applied filter and reset the query.
    pub fn clear(&mut self) -> VisibilityDelta {
        let mut delta = VisibilityDelta::default();
        while let Some(&filter) = self.applied.first() {
            delta.merge(self.remove(filter));
        }
        self.query.clear();
        debug!(cards = self.displayed.len(), "cleared filters");
        delta
    }

    /// Set the free-text query overlay. An empty string removes it.
    pub fn set_query(&mut self, text: &str) {
        self.query = normalize_query(text);
        debug!(query = %self.query, "query updated");
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn displayed(&self) -> &BTreeSet<CardId> {
        &self.displayed
    }

    pub fn hidden(&self) -> &BTreeSet<CardId> {
        &self.hidden
    }

    /// Applied filters in display order (most recently applied first)
    pub fn applied(&self) -> &[FilterId] {
        &self.applied
    }

    /// Unapplied filters in catalog order
    pub fn unapplied(&self) -> impl Iterator<Item = FilterId> + '_ {
        self.catalog.filter_ids().filter(|f| !self.is_applied[f.0])
    }

    pub fn filter_state(&self, filter: FilterId) -> FilterState {
        match self.applied.iter().position(|f| *f == filter) {
            Some(position) => FilterState::Applied { position },
            None => FilterState::Unapplied,
        }
    }

    pub fn is_card_visible(&self, card: CardId) -> bool {
        self.displayed.contains(&card)
            && (self.query.is_empty() || self.card_text[card.0].contains(&self.query))
    }

    /// Applied controls are always shown; unapplied ones are narrowed by the query.
    pub fn is_filter_control_visible(&self, filter: FilterId) -> bool {
        self.is_applied[filter.0]
            || self.query.is_empty()
            || matches(&self.catalog.filter(filter).label, &self.query)
    }

    /// Visible cards in catalog order
    pub fn visible_cards(&self) -> Vec<CardId> {
        self.displayed
            .iter()
            .copied()
            .filter(|card| self.is_card_visible(*card))
            .collect()
    }

    pub fn visible_unapplied_filters(&self) -> Vec<FilterId> {
        self.unapplied()
            .filter(|f| self.is_filter_control_visible(*f))
            .collect()
    }

    fn intersection_of_applied(&self) -> BTreeSet<CardId> {
        let mut filters = self.applied.iter();
        let Some(first) = filters.next() else {
            return self.catalog.card_ids().collect();
        };
        let mut result = self.catalog.cards_of(*first).clone();
        for filter in filters {
            let cards = self.catalog.cards_of(*filter);
            result.retain(|card| cards.contains(card));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::Card;

    /// Cards = {A:[x,y], B:[x], C:[y,z]}
    fn scenario() -> FilterEngine {
        let catalog = Catalog::new(vec![
            Card::new("A", ["x", "y"]),
            Card::new("B", ["x"]),
            Card::new("C", ["y", "z"]),
        ])
        .unwrap();
        FilterEngine::new(catalog)
    }

    fn tag(engine: &FilterEngine, tag: &str) -> FilterId {
        engine.catalog().filter_by_tag(tag).unwrap()
    }

    fn keys(engine: &FilterEngine, cards: impl IntoIterator<Item = CardId>) -> Vec<String> {
        cards
            .into_iter()
            .map(|c| engine.catalog().card(c).key.clone())
            .collect()
    }

    fn displayed_keys(engine: &FilterEngine) -> Vec<String> {
        keys(engine, engine.displayed().iter().copied())
    }

    /// Brute-force definition of the displayed set
    fn brute_force_displayed(engine: &FilterEngine) -> BTreeSet<CardId> {
        let catalog = engine.catalog();
        catalog
            .card_ids()
            .filter(|card| {
                engine
                    .applied()
                    .iter()
                    .all(|f| catalog.card(*card).tags.contains(&catalog.filter(*f).tag))
            })
            .collect()
    }

    fn assert_partition(engine: &FilterEngine) {
        let all: BTreeSet<CardId> = engine.catalog().card_ids().collect();
        assert!(engine.displayed().is_disjoint(engine.hidden()));
        let union: BTreeSet<CardId> = engine.displayed().union(engine.hidden()).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_initial_state_displays_everything() {
        let engine = scenario();
        assert_eq!(displayed_keys(&engine), vec!["A", "B", "C"]);
        assert!(engine.hidden().is_empty());
        assert!(engine.applied().is_empty());
        assert_eq!(engine.query(), "");
    }

    #[test]
    fn test_scenario_apply_remove_clear() {
        let mut engine = scenario();
        let (x, y) = (tag(&engine, "x"), tag(&engine, "y"));

        engine.apply(x);
        assert_eq!(displayed_keys(&engine), vec!["A", "B"]);

        engine.apply(y);
        assert_eq!(displayed_keys(&engine), vec!["A"]);

        engine.remove(x);
        assert_eq!(displayed_keys(&engine), vec!["A", "C"]);
        assert_eq!(keys(&engine, engine.hidden().iter().copied()), vec!["B"]);

        engine.clear();
        assert_eq!(displayed_keys(&engine), vec!["A", "B", "C"]);
        assert!(engine.applied().is_empty());
    }

    #[test]
    fn test_apply_reports_hidden_cards() {
        let mut engine = scenario();
        let z = tag(&engine, "z");
        let delta = engine.apply(z);
        assert_eq!(keys(&engine, delta.hidden), vec!["A", "B"]);
        assert!(delta.shown.is_empty());
    }

    #[test]
    fn test_remove_reports_only_revealed_cards() {
        let mut engine = scenario();
        let (x, y) = (tag(&engine, "x"), tag(&engine, "y"));
        engine.apply(x);
        engine.apply(y);
        let delta = engine.remove(x);
        assert_eq!(keys(&engine, delta.shown), vec!["C"]);
        assert!(delta.hidden.is_empty());
    }

    #[test]
    fn test_applied_order_is_most_recent_first() {
        let mut engine = scenario();
        let (x, y, z) = (tag(&engine, "x"), tag(&engine, "y"), tag(&engine, "z"));
        engine.apply(x);
        engine.apply(z);
        engine.apply(y);
        assert_eq!(engine.applied(), &[y, z, x]);
        assert_eq!(engine.filter_state(y), FilterState::Applied { position: 0 });
        assert_eq!(engine.filter_state(x), FilterState::Applied { position: 2 });

        engine.remove(z);
        assert_eq!(engine.applied(), &[y, x]);
        assert_eq!(engine.filter_state(z), FilterState::Unapplied);
        assert_eq!(engine.unapplied().collect::<Vec<_>>(), vec![z]);
    }

    #[test]
    fn test_duplicate_apply_and_stray_remove_are_noops() {
        let mut engine = scenario();
        let (x, y) = (tag(&engine, "x"), tag(&engine, "y"));
        engine.apply(x);
        assert!(engine.apply(x).is_empty());
        assert_eq!(engine.applied(), &[x]);

        assert!(engine.remove(y).is_empty());
        assert_eq!(displayed_keys(&engine), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_after_apply_restores_partition() {
        let mut engine = scenario();
        let (x, z) = (tag(&engine, "x"), tag(&engine, "z"));
        engine.apply(x);
        let before = (engine.displayed().clone(), engine.hidden().clone());

        engine.apply(z);
        engine.remove(z);

        assert_eq!((engine.displayed().clone(), engine.hidden().clone()), before);
    }

    #[test]
    fn test_apply_order_independent() {
        let mut first = scenario();
        let mut second = scenario();
        let (x, y) = (tag(&first, "x"), tag(&first, "y"));

        first.apply(x);
        first.apply(y);
        second.apply(y);
        second.apply(x);

        let expected: BTreeSet<CardId> = first
            .catalog()
            .cards_of(x)
            .intersection(first.catalog().cards_of(y))
            .copied()
            .collect();
        assert_eq!(first.displayed(), &expected);
        assert_eq!(second.displayed(), &expected);
    }

    #[test]
    fn test_query_narrows_without_changing_membership() {
        let mut engine = scenario();
        engine.set_query("z");

        let visible = engine.visible_cards();
        assert_eq!(keys(&engine, visible), vec!["C"]);
        assert!(engine.applied().is_empty());
        assert_eq!(engine.displayed().len(), 3);

        engine.set_query("");
        assert_eq!(keys(&engine, engine.visible_cards()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_query_narrows_unapplied_controls_only() {
        let mut engine = scenario();
        let (x, y, z) = (tag(&engine, "x"), tag(&engine, "y"), tag(&engine, "z"));
        engine.apply(x);
        engine.set_query("Y");

        assert!(engine.is_filter_control_visible(x));
        assert!(engine.is_filter_control_visible(y));
        assert!(!engine.is_filter_control_visible(z));
        assert_eq!(engine.visible_unapplied_filters(), vec![y]);
    }

    #[test]
    fn test_query_restores_exact_visibility() {
        let mut engine = scenario();
        let y = tag(&engine, "y");
        engine.apply(y);
        let cards_before = engine.visible_cards();
        let filters_before = engine.visible_unapplied_filters();

        engine.set_query("q");
        assert!(engine.visible_cards().is_empty());

        engine.set_query("");
        assert_eq!(engine.visible_cards(), cards_before);
        assert_eq!(engine.visible_unapplied_filters(), filters_before);
    }

    #[test]
    fn test_query_matches_hyphenated_tags() {
        let catalog = Catalog::new(vec![
            Card::new("ml", ["machine-learning"]),
            Card::new("web", ["web-dev"]),
        ])
        .unwrap();
        let mut engine = FilterEngine::new(catalog);

        engine.set_query("Machine Learn");
        assert_eq!(keys(&engine, engine.visible_cards()), vec!["ml"]);

        engine.set_query("web-d");
        assert_eq!(keys(&engine, engine.visible_cards()), vec!["web"]);
    }

    #[test]
    fn test_query_matching_a_label_matches_its_cards() {
        let catalog = Catalog::new(vec![
            Card::new("viz", ["data_viz"]),
            Card::new("ml", ["machine-learning"]),
        ])
        .unwrap();
        let mut engine = FilterEngine::new(catalog);

        for query in ["data viz", "data_viz", "Data-Viz", "machine learning", "machine_learning"] {
            engine.set_query(query);
            let shown_filters = engine.visible_unapplied_filters();
            assert!(!shown_filters.is_empty(), "no control for {query:?}");
            for filter in shown_filters {
                let carriers = engine.catalog().cards_of(filter).clone();
                for card in carriers {
                    assert!(engine.is_card_visible(card), "card hidden for {query:?}");
                }
            }
        }

        let viz = tag(&engine, "data_viz");
        engine.set_query("data viz");
        engine.apply(viz);
        assert_eq!(keys(&engine, engine.visible_cards()), vec!["viz"]);
    }

    #[test]
    fn test_clear_resets_query_and_filters() {
        let mut engine = scenario();
        let (x, y) = (tag(&engine, "x"), tag(&engine, "y"));
        engine.apply(y);
        engine.apply(x);
        engine.set_query("zzz");

        let delta = engine.clear();

        let mut shown = keys(&engine, delta.shown);
        shown.sort();
        assert_eq!(shown, vec!["B", "C"]);
        assert!(engine.applied().is_empty());
        assert_eq!(engine.query(), "");
        assert_eq!(engine.visible_cards().len(), 3);
        assert_eq!(engine.visible_unapplied_filters().len(), 3);
    }

    #[test]
    fn test_untagged_card_hidden_by_any_filter() {
        let catalog = Catalog::new(vec![
            Card::new("tagged", ["x"]),
            Card::new("bare", Vec::<String>::new()),
        ])
        .unwrap();
        let mut engine = FilterEngine::new(catalog);
        let x = tag(&engine, "x");
        engine.apply(x);
        assert_eq!(displayed_keys(&engine), vec!["tagged"]);
        engine.remove(x);
        assert_eq!(displayed_keys(&engine), vec!["tagged", "bare"]);
    }

    /// xorshift64, enough to drive a reproducible operation sequence
    struct Rng(u64);

    impl Rng {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }

        fn below(&mut self, n: usize) -> usize {
            (self.next() % n as u64) as usize
        }
    }

    #[test]
    fn test_incremental_matches_brute_force() {
        let tags = ["a", "b", "c", "d", "e", "f"];
        let mut rng = Rng(0x9E37_79B9_7F4A_7C15);

        for _round in 0..20 {
            let cards = (0..25)
                .map(|i| {
                    let card_tags: Vec<&str> =
                        tags.iter().copied().filter(|_| rng.below(3) == 0).collect();
                    Card::new(format!("card-{}", i), card_tags)
                })
                .collect();
            let mut engine = FilterEngine::new(Catalog::new(cards).unwrap());
            let filter_count = engine.catalog().filters().len();
            if filter_count == 0 {
                continue;
            }

            for _step in 0..60 {
                let filter = FilterId(rng.below(filter_count));
                match rng.below(10) {
                    0 => {
                        engine.clear();
                    }
                    1 => engine.set_query(tags[rng.below(tags.len())]),
                    2..=5 => {
                        engine.apply(filter);
                    }
                    _ => {
                        engine.remove(filter);
                    }
                }
                assert_partition(&engine);
                assert_eq!(engine.displayed(), &brute_force_displayed(&engine));
            }
        }
    }
}
