use crate::card::Card;
use crate::favorites::FavoritesSet;

/// Category selection driven by the filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter button token. Blank tokens select everything.
    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "" | "todos" | "all" => Self::All,
            "favoritos" | "favorites" => Self::Favorites,
            _ => Self::Category(token),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::All => "todos",
            Self::Favorites => "favoritos",
            Self::Category(c) => c,
        }
    }
}

/// Current filter state: category plus free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: &str) -> Self {
        let mut state = Self {
            category,
            query: String::new(),
        };
        state.set_query(query);
        state
    }

    /// Store the query trimmed and lowercased.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

fn category_matches(card: &Card, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All | CategoryFilter::Favorites => true,
        CategoryFilter::Category(c) => card.category == *c,
    }
}

fn favorite_matches(card: &Card, category: &CategoryFilter, favorites: &FavoritesSet) -> bool {
    match category {
        CategoryFilter::Favorites => card.card_id().is_some_and(|id| favorites.contains(id)),
        _ => true,
    }
}

fn search_matches(card: &Card, query: &str) -> bool {
    query.is_empty()
        || card.names.to_lowercase().contains(query)
        || card.title.to_lowercase().contains(query)
        || card.rendered_text().to_lowercase().contains(query)
}

/// Visibility of one card: conjunction of category, favorite and search predicates.
pub fn card_visible(card: &Card, state: &FilterState, favorites: &FavoritesSet) -> bool {
    category_matches(card, &state.category)
        && favorite_matches(card, &state.category, favorites)
        && search_matches(card, state.query())
}

/// Visibility for every card, index-aligned with `cards`. Always visits the whole set.
pub fn visibility(cards: &[Card], state: &FilterState, favorites: &FavoritesSet) -> Vec<bool> {
    cards
        .iter()
        .map(|card| card_visible(card, state, favorites))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, FilterState, visibility};
    use crate::card::Card;
    use crate::favorites::FavoritesSet;
    use crate::rarity::Rarity;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("Onça-pintada", "onca jaguar", "mamifero", Some("raro"), "Maior felino das Américas."),
            Card::new("Arara-azul", "arara", "ave", Some("epico"), "Bico forte para quebrar cocos."),
            Card::new("Capivara", "capivara", "mamifero", None, "Vive perto da onça e de rios."),
            Card::new("Jacaré-do-papo-amarelo", "jacare", "reptil", Some("incomum"), "Habita brejos."),
        ]
    }

    fn visible_titles(cards: &[Card], state: &FilterState, favs: &FavoritesSet) -> Vec<String> {
        cards
            .iter()
            .zip(visibility(cards, state, favs))
            .filter(|(_, v)| *v)
            .map(|(c, _)| c.title.clone())
            .collect()
    }

    #[test]
    fn all_with_empty_query_shows_everything() {
        let cards = cards();
        let vis = visibility(&cards, &FilterState::default(), &FavoritesSet::new());
        assert_eq!(vis, vec![true; cards.len()]);
    }

    #[test]
    fn category_filter_matches_tag() {
        let cards = cards();
        let state = FilterState::new(CategoryFilter::parse("Mamifero"), "");
        assert_eq!(
            visible_titles(&cards, &state, &FavoritesSet::new()),
            vec!["Onça-pintada", "Capivara"]
        );
    }

    #[test]
    fn favorites_filter_shows_exactly_the_favorited_subset() {
        let cards = cards();
        let mut favs = FavoritesSet::new();
        favs.toggle("Arara-azul");
        favs.toggle("Capivara");
        let state = FilterState::new(CategoryFilter::Favorites, "");
        assert_eq!(visible_titles(&cards, &state, &favs), vec!["Arara-azul", "Capivara"]);

        let empty = FavoritesSet::new();
        assert!(visible_titles(&cards, &state, &empty).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_over_name_and_text() {
        let cards = cards();
        let favs = FavoritesSet::new();
        let by_name = FilterState::new(CategoryFilter::All, "  JAGUAR ");
        assert_eq!(visible_titles(&cards, &by_name, &favs), vec!["Onça-pintada"]);

        let by_text = FilterState::new(CategoryFilter::All, "Cocos");
        assert_eq!(visible_titles(&cards, &by_text, &favs), vec!["Arara-azul"]);
    }

    #[test]
    fn onca_query_shows_only_matching_cards_with_boss_badge_on_named_ones() {
        let cards = cards();
        let state = FilterState::new(CategoryFilter::parse("todos"), "onç");
        let visible: Vec<&Card> = cards
            .iter()
            .zip(visibility(&cards, &state, &FavoritesSet::new()))
            .filter(|(_, v)| *v)
            .map(|(c, _)| c)
            .collect();
        let titles: Vec<&str> = visible.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Onça-pintada", "Capivara"]);
        for card in visible {
            if card.title.to_lowercase().contains("onç") {
                assert_eq!(card.rarity, Rarity::Boss);
                assert_eq!(card.rarity.label(), "Boss");
            }
        }
    }

    #[test]
    fn predicates_combine_with_and() {
        let cards = cards();
        let mut favs = FavoritesSet::new();
        favs.toggle("Onça-pintada");
        favs.toggle("Arara-azul");
        let state = FilterState::new(CategoryFilter::Favorites, "bico");
        assert_eq!(visible_titles(&cards, &state, &favs), vec!["Arara-azul"]);

        let state = FilterState::new(CategoryFilter::parse("reptil"), "felino");
        assert!(visible_titles(&cards, &state, &favs).is_empty());
    }

    #[test]
    fn tokens_round_trip() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("favorites"), CategoryFilter::Favorites);
        assert_eq!(CategoryFilter::parse("ave").token(), "ave");
        assert_eq!(CategoryFilter::Favorites.token(), "favoritos");
    }
}
