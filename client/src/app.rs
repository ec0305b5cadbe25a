use fauna_shared::{Catalog, ClickTarget, Expansion, FavoritesSet, FilterState, RevealPlanner, Route, Section};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::bindings::{bind_window, clear_window_bindings};
use crate::catalog_view::CatalogGrid;
use crate::config::{CARD_SELECTOR, SEARCH_INPUT_SELECTOR};
use crate::controls::{FilterBar, SearchBar, SortSelect, VisibleCounter};
use crate::reveal::REVEAL_ALL;
use crate::router;
use crate::storage::load_favorites;
use crate::topbar::Topbar;

/// All mutable page state, owned by the root component and shared through
/// context. Every field is a copyable handle.
#[derive(Clone, Copy)]
pub(crate) struct PageState {
    pub catalog: RwSignal<Catalog>,
    pub filter: RwSignal<FilterState>,
    pub favorites: RwSignal<FavoritesSet>,
    pub route: RwSignal<Route>,
    /// Bumped on every navigation so focus/scroll effects rerun for the same route.
    pub nav_nonce: RwSignal<u64>,
    pub expansion: RwSignal<Expansion>,
    pub planner: StoredValue<RevealPlanner>,
    pub revealed: RwSignal<usize>,
    pub visible: Memo<Vec<bool>>,
    pub positions: Memo<Vec<Option<usize>>>,
}

impl PageState {
    fn new() -> Self {
        let catalog = RwSignal::new(Catalog::builtin());
        let filter = RwSignal::new(FilterState::default());
        let favorites = RwSignal::new(load_favorites());

        // Visibility and positions are derived in one pass over every card.
        let visible = Memo::new(move |_| {
            filter.with(|filter| {
                favorites.with(|favs| catalog.with(|catalog| catalog.visibility(filter, favs)))
            })
        });
        let positions = Memo::new(move |_| {
            visible.with(|visible| catalog.with(|catalog| catalog.visible_positions(visible)))
        });

        Self {
            catalog,
            filter,
            favorites,
            route: RwSignal::new(Route::NotFound),
            nav_nonce: RwSignal::new(0),
            expansion: RwSignal::new(Expansion::default()),
            planner: StoredValue::new(RevealPlanner::default()),
            revealed: RwSignal::new(REVEAL_ALL),
            visible,
            positions,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible
            .with_untracked(|visible| visible.iter().filter(|v| **v).count())
    }

    pub fn catalog_on_screen(&self) -> bool {
        self.route.get_untracked() == Route::Section(Section::Enciclopedia)
    }
}

fn focus_search_input() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.query_selector(SEARCH_INPUT_SELECTOR).ok().flatten()
        && let Ok(input) = el.dyn_into::<web_sys::HtmlElement>()
    {
        input.focus().ok();
    }
}

fn bind_page_events(state: PageState) {
    bind_window("hashchange", move |_| router::navigate(state));

    // Clicks inside a card are handled by the card itself.
    bind_window("click", move |e| {
        let inside_card = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(CARD_SELECTOR).ok().flatten())
            .is_some();
        if !inside_card && state.expansion.with_untracked(|exp| exp.expanded().is_some()) {
            state.expansion.update(|exp| {
                exp.click(ClickTarget::Outside);
            });
        }
    });

    bind_window("keydown", move |e| {
        let Some(e) = e.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        let key = e.key();
        let target_tag = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default();

        // Don't intercept when typing in an input
        if target_tag == "INPUT" || target_tag == "TEXTAREA" {
            if key == "Escape"
                && let Some(el) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            {
                el.blur().ok();
            }
            return;
        }

        match key.as_str() {
            "Escape" => {
                state.expansion.update(|exp| {
                    exp.collapse();
                });
            }
            "/" => {
                e.prevent_default();
                focus_search_input();
            }
            _ => {}
        }
    });
}

/// Root application component. Owns the page state and provides it via context.
#[component]
pub fn App() -> impl IntoView {
    let state = PageState::new();
    provide_context(state);

    clear_window_bindings();
    bind_page_events(state);
    on_cleanup(clear_window_bindings);

    // Initial load counts as a direct navigation.
    router::navigate(state);

    Effect::new(move || {
        let _ = state.nav_nonce.get();
        router::focus_active_section(state.route.get_untracked());
    });

    view! {
        <Topbar />
        <main class="page">
            <section id=Section::Enciclopedia.id() class="card section"
                style:display=move || router::section_display(state.route.get(), Section::Enciclopedia)
            >
                <h2 tabindex="-1">{Section::Enciclopedia.title()}</h2>
                <div class="toolbar">
                    <SearchBar />
                    <SortSelect />
                    <VisibleCounter />
                </div>
                <FilterBar />
                <CatalogGrid />
            </section>
            <section id=Section::Sobre.id() class="card section"
                style:display=move || router::section_display(state.route.get(), Section::Sobre)
            >
                <h2 tabindex="-1">{Section::Sobre.title()}</h2>
                <p>
                    "Uma enciclopédia de bolso da fauna e da flora brasileiras. "
                    "Marque seus favoritos com a estrela e ordene o catálogo por nome ou raridade."
                </p>
                <button id="continueGuest" class="guest-button"
                    on:click=move |_| router::go_to(Section::Enciclopedia)
                >
                    "Continuar como visitante"
                </button>
            </section>
            <section id=Section::Contato.id() class="card section"
                style:display=move || router::section_display(state.route.get(), Section::Contato)
            >
                <h2 tabindex="-1">{Section::Contato.title()}</h2>
                <p>"Sugestões de espécies e correções: contato@fauna.example"</p>
            </section>
        </main>
    }
}
