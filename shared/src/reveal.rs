use crate::route::Route;

pub const REVEAL_BASE_DELAY_MS: u32 = 80;
pub const REVEAL_STEP_MS: u32 = 60;

/// Delay before the `index`-th visible card appears in a staggered reveal.
pub fn reveal_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    REVEAL_BASE_DELAY_MS.saturating_add(index.saturating_mul(REVEAL_STEP_MS))
}

/// How catalog cards should appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Staggered,
    Immediate,
}

/// Decides between staggered and immediate reveals.
///
/// Two single-use flags: `from_menu` is raised by a menu activation and consumed
/// by the next navigation; `deferred` is raised by a sort while the catalog is
/// hidden and consumed by the next navigation into the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealPlanner {
    from_menu: bool,
    deferred: bool,
}

impl RevealPlanner {
    pub fn menu_activated(&mut self) {
        self.from_menu = true;
    }

    /// Called after every navigation. Returns the reveal to play when the catalog
    /// is entered, `None` for any other destination.
    pub fn navigated(&mut self, route: Route) -> Option<Reveal> {
        let from_menu = std::mem::take(&mut self.from_menu);
        let section = route.section()?;
        if !section.is_catalog() {
            return None;
        }
        let deferred = std::mem::take(&mut self.deferred);
        if from_menu || deferred {
            Some(Reveal::Staggered)
        } else {
            Some(Reveal::Immediate)
        }
    }

    /// Called after the catalog order changed. Animates now when the catalog is
    /// on screen, otherwise remembers to animate on the next visit.
    pub fn sorted(&mut self, catalog_visible: bool) -> Option<Reveal> {
        if catalog_visible {
            Some(Reveal::Staggered)
        } else {
            self.deferred = true;
            None
        }
    }
}
