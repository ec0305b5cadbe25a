use serde::{Deserialize, Serialize};

/// Name fragments that always promote a card to `Boss`, whatever its declared tag.
pub const BOSS_NAME_MARKERS: &[&str] = &["onç"];

/// Ordinal rarity of a catalog card, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Comum,
    Incomum,
    Raro,
    Epico,
    Lendario,
    Boss,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Self::Comum,
        Self::Incomum,
        Self::Raro,
        Self::Epico,
        Self::Lendario,
        Self::Boss,
    ];

    /// Parse a rarity attribute. Accepts the ascii token or the accented label,
    /// case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "comum" => Some(Self::Comum),
            "incomum" => Some(Self::Incomum),
            "raro" => Some(Self::Raro),
            "epico" | "épico" => Some(Self::Epico),
            "lendario" | "lendário" => Some(Self::Lendario),
            "boss" => Some(Self::Boss),
            _ => None,
        }
    }

    /// Severity rank used by the rarity sort (higher sorts first).
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Comum => "Comum",
            Self::Incomum => "Incomum",
            Self::Raro => "Raro",
            Self::Epico => "Épico",
            Self::Lendario => "Lendário",
            Self::Boss => "Boss",
        }
    }

    /// CSS modifier for the injected badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Comum => "rarity-comum",
            Self::Incomum => "rarity-incomum",
            Self::Raro => "rarity-raro",
            Self::Epico => "rarity-epico",
            Self::Lendario => "rarity-lendario",
            Self::Boss => "rarity-boss",
        }
    }
}

/// True when the name carries one of the boss markers.
pub fn is_boss_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    BOSS_NAME_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Effective rarity of a card: the name override wins, then the declared tag,
/// then `Comum`. Idempotent.
pub fn resolve_rarity(name: &str, declared: Option<&str>) -> Rarity {
    if is_boss_name(name) {
        return Rarity::Boss;
    }
    declared.and_then(Rarity::parse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{Rarity, resolve_rarity};

    #[test]
    fn ordering_follows_severity() {
        let mut shuffled = vec![
            Rarity::Boss,
            Rarity::Comum,
            Rarity::Lendario,
            Rarity::Raro,
            Rarity::Epico,
            Rarity::Incomum,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Rarity::ALL.to_vec());
        assert!(Rarity::Boss.rank() > Rarity::Lendario.rank());
    }

    #[test]
    fn parses_accented_and_ascii_tokens() {
        assert_eq!(Rarity::parse("épico"), Some(Rarity::Epico));
        assert_eq!(Rarity::parse("EPICO"), Some(Rarity::Epico));
        assert_eq!(Rarity::parse(" Lendário "), Some(Rarity::Lendario));
        assert_eq!(Rarity::parse("mythic"), None);
    }

    #[test]
    fn missing_or_unknown_tag_defaults_to_comum() {
        assert_eq!(resolve_rarity("Capivara", None), Rarity::Comum);
        assert_eq!(resolve_rarity("Capivara", Some("???")), Rarity::Comum);
        assert_eq!(resolve_rarity("Capivara", Some("raro")), Rarity::Raro);
    }

    #[test]
    fn name_override_beats_declared_tag() {
        assert_eq!(resolve_rarity("Onça-pintada", Some("comum")), Rarity::Boss);
        assert_eq!(resolve_rarity("ONÇA-PARDA", None), Rarity::Boss);
        assert_eq!(Rarity::Boss.label(), "Boss");
    }

    #[test]
    fn resolution_is_idempotent() {
        let once = resolve_rarity("Onça-pintada", Some("raro"));
        let twice = resolve_rarity("Onça-pintada", Some(once.label()));
        assert_eq!(once, twice);
    }
}
