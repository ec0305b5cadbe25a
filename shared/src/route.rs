/// Page sections addressable by URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Enciclopedia,
    Sobre,
    Contato,
}

/// Deprecated fragments and the identifiers they now point to.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[("empresa", "sobre"), ("catalogo", "enciclopedia")];

pub const DEFAULT_SECTION: Section = Section::Enciclopedia;

impl Section {
    pub const ALL: [Section; 3] = [Self::Enciclopedia, Self::Sobre, Self::Contato];

    pub fn id(self) -> &'static str {
        match self {
            Self::Enciclopedia => "enciclopedia",
            Self::Sobre => "sobre",
            Self::Contato => "contato",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Enciclopedia => "Enciclopédia",
            Self::Sobre => "Sobre",
            Self::Contato => "Contato",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn is_catalog(self) -> bool {
        self == Self::Enciclopedia
    }
}

/// Result of resolving a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Section(Section),
    NotFound,
}

impl Route {
    /// Resolve a raw `location.hash` value (with or without the leading `#`).
    pub fn resolve(hash: &str) -> Self {
        let id = normalize_fragment(hash);
        match Section::from_id(&id) {
            Some(section) => Self::Section(section),
            None => Self::NotFound,
        }
    }

    pub fn section(self) -> Option<Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::NotFound => None,
        }
    }

    /// Whether the menu entry linking to `href` should be marked current.
    pub fn is_current_href(self, href: &str) -> bool {
        let Some(target) = href.strip_prefix('#') else {
            return false;
        };
        self.section().is_some_and(|section| section.id() == target)
    }
}

/// Strip the `#`, substitute the default for an empty fragment and rewrite
/// legacy aliases to their canonical identifiers.
pub fn normalize_fragment(hash: &str) -> String {
    let id = hash.trim().trim_start_matches('#');
    if id.is_empty() {
        return DEFAULT_SECTION.id().to_string();
    }
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == id)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Route, Section, normalize_fragment};

    #[test]
    fn empty_fragment_maps_to_catalog() {
        assert_eq!(Route::resolve(""), Route::Section(Section::Enciclopedia));
        assert_eq!(Route::resolve("#"), Route::Section(Section::Enciclopedia));
    }

    #[test]
    fn legacy_aliases_resolve_to_canonical_sections() {
        assert_eq!(Route::resolve("#empresa"), Route::Section(Section::Sobre));
        assert_eq!(Route::resolve("#catalogo"), Route::Section(Section::Enciclopedia));
        assert_eq!(normalize_fragment("#empresa"), "sobre");
    }

    #[test]
    fn unknown_fragment_shows_nothing() {
        assert_eq!(Route::resolve("#loja"), Route::NotFound);
        assert_eq!(Route::resolve("#loja").section(), None);
    }

    #[test]
    fn declared_sections_resolve_to_themselves() {
        for section in Section::ALL {
            assert_eq!(Route::resolve(&format!("#{}", section.id())), Route::Section(section));
        }
    }

    #[test]
    fn menu_marking_follows_resolved_route() {
        let route = Route::resolve("#empresa");
        assert!(route.is_current_href("#sobre"));
        assert!(!route.is_current_href("#enciclopedia"));
        assert!(!route.is_current_href("sobre"));
        assert!(!Route::NotFound.is_current_href("#loja"));
    }
}
