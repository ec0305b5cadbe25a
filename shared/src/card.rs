use serde::{Deserialize, Serialize};

use crate::rarity::{Rarity, resolve_rarity};

/// Canonical card identity: the trimmed display title.
pub type CardId = String;

/// Static markup-level description of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct CardSource {
    pub title: &'static str,
    /// Space-separated names the entry is also known by (popular + scientific).
    pub names: &'static str,
    pub category: &'static str,
    pub rarity: Option<&'static str>,
    pub text: &'static str,
}

/// One catalog entry after the rarity-assignment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub names: String,
    pub category: String,
    pub rarity: Rarity,
    pub text: String,
}

impl Card {
    pub fn new(
        title: &str,
        names: &str,
        category: &str,
        rarity: Option<&str>,
        text: &str,
    ) -> Self {
        let title = title.trim().to_string();
        Self {
            id: title.clone(),
            rarity: resolve_rarity(&title, rarity),
            names: names.trim().to_string(),
            category: category.trim().to_lowercase(),
            text: text.trim().to_string(),
            title,
        }
    }

    /// Identity of the card, or `None` when the title is blank.
    pub fn card_id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    /// Name used for sorting: the title, falling back to the first known name.
    pub fn sort_name(&self) -> &str {
        if self.title.is_empty() {
            self.names.split_whitespace().next().unwrap_or("")
        } else {
            &self.title
        }
    }

    /// Everything a visitor can read on the card, as the search predicate sees it.
    pub fn rendered_text(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.title,
            self.rarity.label(),
            self.category,
            self.text
        )
    }
}

impl From<&CardSource> for Card {
    fn from(src: &CardSource) -> Self {
        Card::new(src.title, src.names, src.category, src.rarity, src.text)
    }
}
