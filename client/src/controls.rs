use fauna_shared::catalog::FILTERS;
use fauna_shared::{CategoryFilter, SortMode};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::PageState;
use crate::reveal;

/// Category buttons. Exactly one is active.
#[component]
pub(crate) fn FilterBar() -> impl IntoView {
    let state: PageState = expect_context();

    view! {
        <div class="filters" role="group" aria-label="Filtros">
            {FILTERS
                .iter()
                .map(move |&(token, label)| {
                    let filter = CategoryFilter::parse(token);
                    let active_filter = filter.clone();
                    let is_active = move || {
                        state.filter.with(|f| f.category == active_filter)
                    };
                    view! {
                        <button
                            type="button"
                            class="filter-button"
                            data-filter=token
                            class:active=is_active.clone()
                            aria-pressed=move || if is_active() { "true" } else { "false" }
                            on:click=move |_| {
                                let filter = filter.clone();
                                state.filter.update(|f| f.category = filter);
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(crate) fn SearchBar() -> impl IntoView {
    let state: PageState = expect_context();

    let apply = move |input: &web_sys::HtmlInputElement| {
        let value = input.value();
        state.filter.update(|f| f.set_query(&value));
    };

    view! {
        <input
            id="searchInput"
            data-search-input=""
            class="search-input"
            type="search"
            placeholder="Buscar espécie..."
            aria-label="Buscar espécie"
            on:input=move |e| {
                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    apply(&input);
                }
            }
            on:keydown=move |e| {
                if e.key() != "Enter" {
                    return;
                }
                e.prevent_default();
                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    apply(&input);
                }
            }
        />
    }
}

/// Sort picker. Each change reorders the catalog in place.
#[component]
pub(crate) fn SortSelect() -> impl IntoView {
    let state: PageState = expect_context();

    let on_change = move |e: leptos::ev::Event| {
        let Some(select) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        let Some(mode) = SortMode::parse(&select.value()) else {
            return;
        };
        state
            .catalog
            .update(|catalog| catalog.sort(mode, &mut rand::thread_rng()));

        let on_screen = state.catalog_on_screen();
        let mut reveal = None;
        state
            .planner
            .update_value(|planner| reveal = planner.sorted(on_screen));
        if let Some(reveal) = reveal {
            reveal::play(reveal, state.revealed, state.visible_count());
        }
    };

    view! {
        <select class="sort-select" aria-label="Ordenar" on:change=on_change>
            <option value="" selected=true>"Ordenar por..."</option>
            {SortMode::ALL
                .into_iter()
                .map(|mode| view! { <option value=mode.token()>{mode.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub(crate) fn VisibleCounter() -> impl IntoView {
    let state: PageState = expect_context();
    let count = Memo::new(move |_| state.visible.with(|v| v.iter().filter(|v| **v).count()));

    view! {
        <span class="result-count" aria-live="polite">
            {move || match count.get() {
                1 => "1 espécie".to_string(),
                n => format!("{n} espécies"),
            }}
        </span>
    }
}
