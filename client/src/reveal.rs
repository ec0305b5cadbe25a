use std::cell::RefCell;

use fauna_shared::Reveal;
use fauna_shared::reveal::reveal_delay_ms;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

thread_local! {
    static REVEAL_TIMERS: RefCell<Vec<Timeout>> = const { RefCell::new(Vec::new()) };
}

/// Everything is revealed.
pub(crate) const REVEAL_ALL: usize = usize::MAX;

/// Play a reveal over `visible_count` cards. `revealed` holds how many leading
/// visible cards are shown; a new reveal cancels the timers of the previous one.
pub(crate) fn play(reveal: Reveal, revealed: RwSignal<usize>, visible_count: usize) {
    REVEAL_TIMERS.with(|slot| slot.borrow_mut().clear());

    if reveal == Reveal::Immediate || visible_count == 0 {
        revealed.set(REVEAL_ALL);
        return;
    }

    revealed.set(0);
    let timers: Vec<Timeout> = (0..visible_count)
        .map(|idx| {
            let last = idx + 1 == visible_count;
            Timeout::new(reveal_delay_ms(idx), move || {
                if last {
                    revealed.set(REVEAL_ALL);
                } else {
                    revealed.update(|shown| *shown = (*shown).max(idx + 1));
                }
            })
        })
        .collect();
    REVEAL_TIMERS.with(|slot| *slot.borrow_mut() = timers);
}

/// Whether the card at `position` among visible cards is currently shown.
pub(crate) fn is_revealed(position: Option<usize>, revealed: usize) -> bool {
    position.is_some_and(|pos| pos < revealed)
}

#[cfg(test)]
mod tests {
    use super::{REVEAL_ALL, is_revealed};

    #[test]
    fn hidden_cards_are_never_revealed() {
        assert!(!is_revealed(None, REVEAL_ALL));
    }

    #[test]
    fn reveals_leading_positions_only() {
        assert!(is_revealed(Some(0), 1));
        assert!(!is_revealed(Some(1), 1));
        assert!(is_revealed(Some(500), REVEAL_ALL));
    }
}
