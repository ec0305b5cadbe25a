pub mod card;
pub mod catalog;
pub mod details;
pub mod expansion;
pub mod favorites;
pub mod filter;
pub mod rarity;
pub mod reveal;
pub mod route;
pub mod sort;
pub mod topbar;

pub use card::{Card, CardId};
pub use catalog::Catalog;
pub use expansion::{ClickTarget, Expansion};
pub use favorites::FavoritesSet;
pub use filter::{CategoryFilter, FilterState};
pub use rarity::Rarity;
pub use reveal::{Reveal, RevealPlanner};
pub use route::{Route, Section};
pub use sort::SortMode;
pub use topbar::{TimerAction, Topbar, TopbarInput};
