use std::collections::{BTreeMap, BTreeSet, HashMap};

use thiserror::Error;

/// Index of a card inside a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub(crate) usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a filter inside a [`Catalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterId(pub(crate) usize);

impl FilterId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A gallery item identified by a stable key and carrying a set of tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub tags: BTreeSet<String>,
}

impl Card {
    pub fn new<I, S>(key: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filter control for one distinct tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub tag: String,
    pub label: String,
}

impl Filter {
    fn for_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            label: tag_label(tag),
        }
    }
}

/// Human-readable text for a tag identifier ("machine-learning" -> "machine learning").
pub fn tag_label(tag: &str) -> String {
    tag.replace(['-', '_'], " ")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate card key: {0}")]
    DuplicateCard(String),
}

/// Fixed collection of cards and the filters derived from their tags.
///
/// Filters are ordered by tag. The filter -> card index is built once here and
/// never changes afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    filters: Vec<Filter>,
    cards_by_filter: Vec<BTreeSet<CardId>>,
    card_keys: HashMap<String, CardId>,
    filter_tags: HashMap<String, FilterId>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut card_keys = HashMap::with_capacity(cards.len());
        let mut index: BTreeMap<&str, BTreeSet<CardId>> = BTreeMap::new();

        for (i, card) in cards.iter().enumerate() {
            if card_keys.insert(card.key.clone(), CardId(i)).is_some() {
                return Err(CatalogError::DuplicateCard(card.key.clone()));
            }
            for tag in &card.tags {
                index.entry(tag.as_str()).or_default().insert(CardId(i));
            }
        }

        let mut filters = Vec::with_capacity(index.len());
        let mut cards_by_filter = Vec::with_capacity(index.len());
        let mut filter_tags = HashMap::with_capacity(index.len());
        for (i, (tag, card_ids)) in index.into_iter().enumerate() {
            filters.push(Filter::for_tag(tag));
            filter_tags.insert(tag.to_string(), FilterId(i));
            cards_by_filter.push(card_ids);
        }

        Ok(Self {
            cards,
            filters,
            cards_by_filter,
            card_keys,
            filter_tags,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.cards.len()).map(CardId)
    }

    pub fn filter_ids(&self) -> impl Iterator<Item = FilterId> + '_ {
        (0..self.filters.len()).map(FilterId)
    }

    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.0]
    }

    pub fn filter(&self, id: FilterId) -> &Filter {
        &self.filters[id.0]
    }

    pub fn card_by_key(&self, key: &str) -> Option<CardId> {
        self.card_keys.get(key).copied()
    }

    pub fn filter_by_tag(&self, tag: &str) -> Option<FilterId> {
        self.filter_tags.get(tag).copied()
    }

    /// Cards carrying the filter's tag
    pub fn cards_of(&self, id: FilterId) -> &BTreeSet<CardId> {
        &self.cards_by_filter[id.0]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
