use rand::Rng;

use crate::card::{Card, CardSource};
use crate::favorites::FavoritesSet;
use crate::filter::{FilterState, visibility};
use crate::sort::{SortMode, sort_order};

/// Filter buttons offered by the page, in display order: (token, label).
pub const FILTERS: &[(&str, &str)] = &[
    ("todos", "Todos"),
    ("mamifero", "Mamíferos"),
    ("ave", "Aves"),
    ("reptil", "Répteis"),
    ("anfibio", "Anfíbios"),
    ("peixe", "Peixes"),
    ("inseto", "Insetos"),
    ("planta", "Plantas"),
    ("favoritos", "Favoritos"),
];

pub const BUILTIN_CARDS: &[CardSource] = &[
    CardSource {
        title: "Onça-pintada",
        names: "onça jaguar Panthera onca",
        category: "mamifero",
        rarity: Some("lendario"),
        text: "Maior felino das Américas, nada bem e caça às margens dos rios do Pantanal.",
    },
    CardSource {
        title: "Onça-parda",
        names: "suçuarana puma Puma concolor",
        category: "mamifero",
        rarity: Some("epico"),
        text: "Também chamada de suçuarana, ocupa quase todos os biomas brasileiros.",
    },
    CardSource {
        title: "Capivara",
        names: "capivara Hydrochoerus hydrochaeris",
        category: "mamifero",
        rarity: None,
        text: "O maior roedor do mundo vive em grupos perto de lagos e rios.",
    },
    CardSource {
        title: "Lobo-guará",
        names: "lobo guará Chrysocyon brachyurus",
        category: "mamifero",
        rarity: Some("raro"),
        text: "Canídeo de pernas longas típico do Cerrado; come muita lobeira.",
    },
    CardSource {
        title: "Tamanduá-bandeira",
        names: "tamanduá Myrmecophaga tridactyla",
        category: "mamifero",
        rarity: Some("incomum"),
        text: "Língua de até 60 cm para capturar formigas e cupins.",
    },
    CardSource {
        title: "Boto-cor-de-rosa",
        names: "boto Inia geoffrensis",
        category: "mamifero",
        rarity: Some("lendario"),
        text: "Golfinho de água doce da Amazônia, cercado de lendas.",
    },
    CardSource {
        title: "Mico-leão-dourado",
        names: "mico leão Leontopithecus rosalia",
        category: "mamifero",
        rarity: Some("epico"),
        text: "Primata da Mata Atlântica salvo da extinção por programas de reintrodução.",
    },
    CardSource {
        title: "Arara-azul",
        names: "arara Anodorhynchus hyacinthinus",
        category: "ave",
        rarity: Some("epico"),
        text: "Bico forte o bastante para quebrar cocos de palmeiras.",
    },
    CardSource {
        title: "Tucano-toco",
        names: "tucano Ramphastos toco",
        category: "ave",
        rarity: Some("incomum"),
        text: "O bico enorme ajuda a regular a temperatura do corpo.",
    },
    CardSource {
        title: "Ema",
        names: "ema Rhea americana",
        category: "ave",
        rarity: None,
        text: "Maior ave do Brasil; não voa, mas corre a mais de 60 km/h.",
    },
    CardSource {
        title: "Harpia",
        names: "gavião-real Harpia harpyja",
        category: "ave",
        rarity: Some("lendario"),
        text: "Uma das águias mais fortes do planeta, caça preguiças e macacos.",
    },
    CardSource {
        title: "Jacaré-do-papo-amarelo",
        names: "jacaré Caiman latirostris",
        category: "reptil",
        rarity: Some("incomum"),
        text: "Vive em brejos e manguezais do litoral.",
    },
    CardSource {
        title: "Sucuri",
        names: "anaconda Eunectes murinus",
        category: "reptil",
        rarity: Some("raro"),
        text: "Serpente constritora que passa boa parte do tempo na água.",
    },
    CardSource {
        title: "Jabuti-piranga",
        names: "jabuti Chelonoidis carbonarius",
        category: "reptil",
        rarity: None,
        text: "Quelônio terrestre de manchas vermelhas nas patas.",
    },
    CardSource {
        title: "Sapo-cururu",
        names: "sapo cururu Rhinella marina",
        category: "anfibio",
        rarity: None,
        text: "Glândulas atrás dos olhos produzem veneno contra predadores.",
    },
    CardSource {
        title: "Perereca-de-vidro",
        names: "perereca Vitreorana",
        category: "anfibio",
        rarity: Some("raro"),
        text: "A pele da barriga é transparente e deixa ver os órgãos.",
    },
    CardSource {
        title: "Pirarucu",
        names: "pirarucu Arapaima gigas",
        category: "peixe",
        rarity: Some("epico"),
        text: "Um dos maiores peixes de água doce; sobe à superfície para respirar.",
    },
    CardSource {
        title: "Piranha-vermelha",
        names: "piranha Pygocentrus nattereri",
        category: "peixe",
        rarity: Some("incomum"),
        text: "Dentes afiados, mas raramente ataca pessoas.",
    },
    CardSource {
        title: "Borboleta-azul",
        names: "morpho Morpho helenor",
        category: "inseto",
        rarity: Some("raro"),
        text: "As asas azuis não têm pigmento: a cor vem da estrutura das escamas.",
    },
    CardSource {
        title: "Ipê-amarelo",
        names: "ipê Handroanthus albus",
        category: "planta",
        rarity: None,
        text: "Floresce no fim do inverno e cobre o chão de amarelo.",
    },
    CardSource {
        title: "Vitória-régia",
        names: "vitória régia Victoria amazonica",
        category: "planta",
        rarity: Some("incomum"),
        text: "Folhas flutuantes podem passar de dois metros de diâmetro.",
    },
];

/// The card set plus the display order the sort engine mutates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    order: Vec<usize>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Self {
        let order = (0..cards.len()).collect();
        Self { cards, order }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_CARDS.iter().map(Card::from).collect())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, idx: usize) -> Option<&Card> {
        self.cards.get(idx)
    }

    /// Current display order as indices into `cards()`.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn ordered(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|&idx| self.cards.get(idx))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Index-aligned with `cards()`, not with `order()`.
    pub fn visibility(&self, state: &FilterState, favorites: &FavoritesSet) -> Vec<bool> {
        visibility(&self.cards, state, favorites)
    }

    /// For each card, its rank among visible cards in display order.
    pub fn visible_positions(&self, visible: &[bool]) -> Vec<Option<usize>> {
        let mut positions = vec![None; self.cards.len()];
        let mut next = 0;
        for &idx in &self.order {
            if visible.get(idx).copied().unwrap_or(false) {
                positions[idx] = Some(next);
                next += 1;
            }
        }
        positions
    }

    pub fn sort<R: Rng + ?Sized>(&mut self, mode: SortMode, rng: &mut R) {
        sort_order(&mut self.order, &self.cards, mode, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::{BUILTIN_CARDS, Catalog, FILTERS};
    use crate::favorites::FavoritesSet;
    use crate::filter::{CategoryFilter, FilterState};
    use crate::rarity::Rarity;
    use crate::sort::SortMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn builtin_identities_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), BUILTIN_CARDS.len());
    }

    #[test]
    fn every_builtin_category_has_a_filter_button() {
        let tokens: HashSet<&str> = FILTERS.iter().map(|(token, _)| *token).collect();
        for card in Catalog::builtin().cards() {
            assert!(tokens.contains(card.category.as_str()), "{}", card.category);
        }
    }

    #[test]
    fn onca_cards_are_boss() {
        let catalog = Catalog::builtin();
        for card in catalog.cards().iter().filter(|c| c.title.starts_with("Onça")) {
            assert_eq!(card.rarity, Rarity::Boss);
        }
    }

    #[test]
    fn sort_keeps_every_card_exactly_once() {
        let mut catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        for mode in SortMode::ALL {
            catalog.sort(mode, &mut rng);
            let mut seen = catalog.order().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..catalog.cards().len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn visible_positions_follow_display_order() {
        let mut catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(0);
        catalog.sort(SortMode::NameDesc, &mut rng);
        let state = FilterState::new(CategoryFilter::parse("ave"), "");
        let visible = catalog.visibility(&state, &FavoritesSet::new());
        let positions = catalog.visible_positions(&visible);

        let ranked: Vec<&str> = catalog
            .order()
            .iter()
            .filter_map(|&idx| positions[idx].map(|_| catalog.cards()[idx].title.as_str()))
            .collect();
        assert_eq!(ranked, vec!["Tucano-toco", "Harpia", "Ema", "Arara-azul"]);

        let capivara = catalog.index_of("Capivara");
        assert_eq!(capivara.and_then(|idx| positions[idx]), None);
        let tucano = catalog.index_of("Tucano-toco");
        assert_eq!(tucano.and_then(|idx| positions[idx]), Some(0));
    }
}
