use std::cmp::Ordering;

use rand::Rng;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    NameAsc,
    NameDesc,
    Rarity,
    Random,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [Self::NameAsc, Self::NameDesc, Self::Rarity, Self::Random];

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "az" | "name-asc" => Some(Self::NameAsc),
            "za" | "name-desc" => Some(Self::NameDesc),
            "raridade" | "rarity" => Some(Self::Rarity),
            "aleatorio" | "aleatório" | "random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::NameAsc => "az",
            Self::NameDesc => "za",
            Self::Rarity => "raridade",
            Self::Random => "aleatorio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Nome (A–Z)",
            Self::NameDesc => "Nome (Z–A)",
            Self::Rarity => "Raridade",
            Self::Random => "Aleatório",
        }
    }
}

/// Primary collation key: accents stripped, lowercased.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive, accent-aware name comparison. Base letters decide first,
/// accents and case only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Unbiased Fisher–Yates shuffle, walking from the end.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Reorder `order` (indices into `cards`) in place. Name and rarity sorts are
/// stable, so ties keep their previous relative order.
pub fn sort_order<R: Rng + ?Sized>(order: &mut [usize], cards: &[Card], mode: SortMode, rng: &mut R) {
    let name = |idx: usize| cards.get(idx).map(Card::sort_name).unwrap_or("");
    match mode {
        SortMode::NameAsc => order.sort_by(|&a, &b| compare_names(name(a), name(b))),
        SortMode::NameDesc => order.sort_by(|&a, &b| compare_names(name(b), name(a))),
        SortMode::Rarity => order.sort_by(|&a, &b| {
            let rank = |idx: usize| cards.get(idx).map(|c| c.rarity.rank()).unwrap_or(0);
            rank(b).cmp(&rank(a))
        }),
        SortMode::Random => shuffle(order, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::{SortMode, compare_names, shuffle, sort_order};
    use crate::card::Card;
    use crate::rarity::Rarity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cmp::Ordering;

    fn cards() -> Vec<Card> {
        vec![
            Card::new("Tucano-toco", "tucano", "ave", Some("incomum"), ""),
            Card::new("Onça-pintada", "onca", "mamifero", None, ""),
            Card::new("arara-azul", "arara", "ave", Some("lendario"), ""),
            Card::new("Ema", "ema", "ave", None, ""),
            Card::new("Ipê-amarelo", "ipe", "planta", Some("raro"), ""),
            Card::new("Boto-cor-de-rosa", "boto", "mamifero", Some("lendario"), ""),
            Card::new("Jacaré", "jacare", "reptil", None, ""),
        ]
    }

    fn titles(order: &[usize], cards: &[Card]) -> Vec<String> {
        order.iter().map(|&i| cards[i].title.clone()).collect()
    }

    #[test]
    fn accents_and_case_do_not_dominate() {
        assert_eq!(compare_names("Ema", "arara"), Ordering::Greater);
        assert_eq!(compare_names("Ipê", "Iguana"), Ordering::Greater);
        assert_eq!(compare_names("Onça", "Onca"), Ordering::Greater);
        assert_eq!(compare_names("onca", "ONCA"), Ordering::Equal);
    }

    #[test]
    fn name_desc_is_reverse_of_name_asc() {
        let cards = cards();
        let mut rng = StdRng::seed_from_u64(7);
        let mut asc: Vec<usize> = (0..cards.len()).collect();
        sort_order(&mut asc, &cards, SortMode::NameAsc, &mut rng);
        assert_eq!(
            titles(&asc, &cards),
            vec![
                "arara-azul",
                "Boto-cor-de-rosa",
                "Ema",
                "Ipê-amarelo",
                "Jacaré",
                "Onça-pintada",
                "Tucano-toco"
            ]
        );

        let mut desc = asc.clone();
        sort_order(&mut desc, &cards, SortMode::NameDesc, &mut rng);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn rarity_sort_puts_boss_first_and_is_stable() {
        let cards = cards();
        let mut rng = StdRng::seed_from_u64(1);
        let mut order: Vec<usize> = (0..cards.len()).collect();
        sort_order(&mut order, &cards, SortMode::Rarity, &mut rng);

        let ranks: Vec<Rarity> = order.iter().map(|&i| cards[i].rarity).collect();
        assert_eq!(ranks.first(), Some(&Rarity::Boss));
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));

        let boss_pos = ranks.iter().rposition(|r| *r == Rarity::Boss);
        let comum_pos = ranks.iter().position(|r| *r == Rarity::Comum);
        assert!(boss_pos < comum_pos);

        // Arara and Boto are both lendario; input order is kept.
        assert_eq!(
            titles(&order[1..3], &cards),
            vec!["arara-azul", "Boto-cor-de-rosa"]
        );
    }

    #[test]
    fn non_random_sorts_are_idempotent() {
        let cards = cards();
        let mut rng = StdRng::seed_from_u64(3);
        for mode in [SortMode::NameAsc, SortMode::NameDesc, SortMode::Rarity] {
            let mut once: Vec<usize> = (0..cards.len()).collect();
            sort_order(&mut once, &cards, mode, &mut rng);
            let mut twice = once.clone();
            sort_order(&mut twice, &cards, mode, &mut rng);
            assert_eq!(once, twice, "{mode:?}");
        }
    }

    #[test]
    fn random_sort_is_a_permutation() {
        let cards = cards();
        let mut rng = StdRng::seed_from_u64(42);
        let mut order: Vec<usize> = (0..cards.len()).collect();
        for _ in 0..20 {
            sort_order(&mut order, &cards, SortMode::Random, &mut rng);
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..cards.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn parses_tokens() {
        assert_eq!(SortMode::parse("AZ"), Some(SortMode::NameAsc));
        assert_eq!(SortMode::parse("rarity"), Some(SortMode::Rarity));
        assert_eq!(SortMode::parse("aleatório"), Some(SortMode::Random));
        assert_eq!(SortMode::parse("price"), None);
        for mode in SortMode::ALL {
            assert_eq!(SortMode::parse(mode.token()), Some(mode));
        }
    }
}
