/// Descriptive fields shown in the expanded card panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Details {
    pub habitat: &'static str,
    pub diet: &'static str,
    pub curiosity: &'static str,
}

pub const DEFAULT_DETAILS: Details = Details {
    habitat: "Diversos biomas brasileiros",
    diet: "Variada",
    curiosity: "Ainda estamos reunindo curiosidades sobre esta espécie.",
};

/// Lowercase name prefix → details. Longer prefixes are listed before shorter
/// ones that share a stem.
const DETAILS_TABLE: &[(&str, Details)] = &[
    (
        "onça-parda",
        Details {
            habitat: "Do Cerrado à Mata Atlântica",
            diet: "Carnívora: veados, roedores e aves",
            curiosity: "Não ruge; se comunica com assobios e chiados.",
        },
    ),
    (
        "onça",
        Details {
            habitat: "Pantanal, Amazônia e matas ciliares",
            diet: "Carnívora: capivaras, jacarés e queixadas",
            curiosity: "Tem a mordida mais forte entre os felinos, proporcional ao tamanho.",
        },
    ),
    (
        "capivara",
        Details {
            habitat: "Margens de rios, lagos e brejos",
            diet: "Herbívora: gramíneas e plantas aquáticas",
            curiosity: "Consegue ficar até cinco minutos submersa.",
        },
    ),
    (
        "lobo-guará",
        Details {
            habitat: "Cerrado e campos abertos",
            diet: "Onívora: frutos da lobeira, pequenos animais",
            curiosity: "Estampa a cédula de 200 reais.",
        },
    ),
    (
        "tamanduá",
        Details {
            habitat: "Cerrado, Pantanal e Amazônia",
            diet: "Insetívora: formigas e cupins",
            curiosity: "Come até 30 mil insetos por dia.",
        },
    ),
    (
        "boto",
        Details {
            habitat: "Rios da bacia amazônica",
            diet: "Piscívora",
            curiosity: "Fica mais rosado quanto mais velho e agitado.",
        },
    ),
    (
        "mico-leão",
        Details {
            habitat: "Mata Atlântica do Rio de Janeiro",
            diet: "Onívora: frutas, insetos e néctar",
            curiosity: "Vive em grupos familiares onde todos ajudam a carregar os filhotes.",
        },
    ),
    (
        "arara",
        Details {
            habitat: "Pantanal e Cerrado",
            diet: "Frugívora: cocos de acuri e bocaiúva",
            curiosity: "Forma casais que duram a vida inteira.",
        },
    ),
    (
        "tucano",
        Details {
            habitat: "Bordas de mata e Cerrado",
            diet: "Onívora: frutas, ovos e filhotes",
            curiosity: "O bico é leve, feito de queratina em estrutura esponjosa.",
        },
    ),
    (
        "harpia",
        Details {
            habitat: "Florestas tropicais altas",
            diet: "Carnívora: preguiças e macacos",
            curiosity: "As garras traseiras são maiores que as de um urso-pardo.",
        },
    ),
    (
        "jacaré",
        Details {
            habitat: "Brejos, manguezais e lagoas",
            diet: "Carnívora: peixes, caramujos e aves",
            curiosity: "A temperatura do ninho define o sexo dos filhotes.",
        },
    ),
    (
        "sucuri",
        Details {
            habitat: "Rios e pântanos da Amazônia e Pantanal",
            diet: "Carnívora: capivaras, aves e peixes",
            curiosity: "Pode passar semanas sem comer depois de uma presa grande.",
        },
    ),
    (
        "pirarucu",
        Details {
            habitat: "Lagos de várzea amazônicos",
            diet: "Piscívora",
            curiosity: "As escamas são usadas como lixa de unha.",
        },
    ),
    (
        "ipê",
        Details {
            habitat: "Cerrado e Mata Atlântica",
            diet: "Fotossíntese",
            curiosity: "Perde todas as folhas antes de florescer.",
        },
    ),
    (
        "vitória-régia",
        Details {
            habitat: "Águas calmas da Amazônia",
            diet: "Fotossíntese",
            curiosity: "A flor abre branca à noite e fica rosa no segundo dia.",
        },
    ),
];

/// Details for a card identity, matched by lowercase name prefix. Falls back to
/// `DEFAULT_DETAILS` when nothing matches.
pub fn lookup(id: &str) -> Details {
    let key = id.trim().to_lowercase();
    DETAILS_TABLE
        .iter()
        .find(|(prefix, _)| key.starts_with(prefix))
        .map(|(_, details)| *details)
        .unwrap_or(DEFAULT_DETAILS)
}
