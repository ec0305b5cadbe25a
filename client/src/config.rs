/// localStorage key holding the JSON array of favorited card titles.
pub const FAVORITES_KEY: &str = "fauna_favorites";

/// Delay before a menu click re-reads the fragment when the hash did not change.
pub const MENU_NAVIGATION_DELAY_MS: u32 = 0;

pub const SEARCH_INPUT_SELECTOR: &str = "[data-search-input]";
pub const CARD_SELECTOR: &str = "[data-card]";
/// Anything inside a card that must not toggle expansion.
pub const CARD_CONTROL_SELECTOR: &str = "button, a, select, input, [data-card-control]";
