use crate::card::CardId;

/// Where a click landed, as far as card expansion cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Card(CardId),
    /// A button or link embedded in a card. Never changes expansion.
    Control,
    Outside,
}

/// At most one expanded card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: Option<CardId>,
}

impl Expansion {
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Apply a click. Returns the card that was collapsed, if any.
    pub fn click(&mut self, target: ClickTarget) -> Option<CardId> {
        match target {
            ClickTarget::Control => None,
            ClickTarget::Outside => self.expanded.take(),
            ClickTarget::Card(id) => {
                if self.is_expanded(&id) {
                    self.expanded.take()
                } else {
                    self.expanded.replace(id)
                }
            }
        }
    }

    pub fn collapse(&mut self) -> Option<CardId> {
        self.expanded.take()
    }
}
