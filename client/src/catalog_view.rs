use fauna_shared::details::lookup;
use fauna_shared::favorites::indicator;
use fauna_shared::{Card, ClickTarget, Rarity};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::PageState;
use crate::config::CARD_CONTROL_SELECTOR;
use crate::reveal::is_revealed;
use crate::storage::toggle_favorite;

/// Card grid. Reordering moves the existing card nodes; nothing is recreated.
#[component]
pub(crate) fn CatalogGrid() -> impl IntoView {
    let state: PageState = expect_context();

    view! {
        <div class="animal-grid">
            <For
                each=move || state.catalog.with(|catalog| catalog.order().to_vec())
                key=|idx| *idx
                children=move |idx| view! { <AnimalCard idx=idx /> }
            />
            <p class="empty-state" style:display=move || {
                if state.visible.with(|v| v.iter().any(|v| *v)) { "none" } else { "block" }
            }>
                "Nenhuma espécie encontrada."
            </p>
        </div>
    }
}

/// Whether a click on `target` belongs to an embedded control rather than the card.
fn is_control_click(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(CARD_CONTROL_SELECTOR).ok().flatten())
        .is_some()
}

#[component]
fn AnimalCard(idx: usize) -> impl IntoView {
    let state: PageState = expect_context();
    let Some(card) = state.catalog.with_untracked(|catalog| catalog.card(idx).cloned()) else {
        return ().into_any();
    };
    let id = card.id.clone();
    let panel_card = card.clone();

    let is_visible = move || state.visible.with(|v| v.get(idx).copied().unwrap_or(false));
    let revealed = move || {
        let position = state.positions.with(|p| p.get(idx).copied().flatten());
        is_revealed(position, state.revealed.get())
    };
    let expanded = {
        let id = id.clone();
        Memo::new(move |_| state.expansion.with(|e| e.is_expanded(&id)))
    };

    let on_click = {
        let id = id.clone();
        move |e: leptos::ev::MouseEvent| {
            let target = if is_control_click(e.target()) {
                ClickTarget::Control
            } else {
                ClickTarget::Card(id.clone())
            };
            state.expansion.update(|exp| {
                exp.click(target);
            });
        }
    };

    let on_keydown = move |e: leptos::ev::KeyboardEvent| {
        let key = e.key();
        if key != "Enter" && key != " " {
            return;
        }
        if is_control_click(e.target()) {
            return;
        }
        e.prevent_default();
        let id = id.clone();
        state.expansion.update(|exp| {
            exp.click(ClickTarget::Card(id));
        });
    };

    view! {
        <article
            class="animal-card"
            data-card=""
            data-type=card.category.clone()
            data-name=card.names.clone()
            data-rarity=card.rarity.label()
            tabindex="0"
            aria-expanded=move || if expanded.get() { "true" } else { "false" }
            class:expanded=move || expanded.get()
            class:revealed=revealed
            style:display=move || if is_visible() { "flex" } else { "none" }
            on:click=on_click
            on:keydown=on_keydown
        >
            <header class="animal-card-header">
                <h3>{card.title.clone()}</h3>
                <RarityBadge rarity=card.rarity />
            </header>
            <p class="animal-card-text">{card.text.clone()}</p>
            {move || {
                expanded
                    .get()
                    .then(|| {
                        let card = panel_card.clone();
                        view! {
                            <FavoriteToggle id=card.id.clone() />
                            <DetailPanel card=card />
                        }
                    })
            }}
        </article>
    }
    .into_any()
}

#[component]
fn RarityBadge(rarity: Rarity) -> impl IntoView {
    view! {
        <span class=format!("rarity-badge {}", rarity.css_class())>{rarity.label()}</span>
    }
}

/// Star button bound to one card's favorite status.
#[component]
fn FavoriteToggle(id: String) -> impl IntoView {
    let state: PageState = expect_context();
    let favorited = {
        let id = id.clone();
        Memo::new(move |_| state.favorites.with(|favs| favs.contains(&id)))
    };

    view! {
        <button
            type="button"
            class="favorite-toggle"
            data-card-control=""
            aria-label="Favoritar"
            aria-pressed=move || indicator(favorited.get()).1
            on:click=move |e| {
                e.stop_propagation();
                toggle_favorite(state.favorites, &id);
            }
        >
            {move || indicator(favorited.get()).0}
        </button>
    }
}

/// Lazily built panel with the descriptive fields for an expanded card.
#[component]
fn DetailPanel(card: Card) -> impl IntoView {
    let details = lookup(&card.id);

    view! {
        <dl class="animal-details">
            <dt>"Habitat"</dt>
            <dd>{details.habitat}</dd>
            <dt>"Alimentação"</dt>
            <dd>{details.diet}</dd>
            <dt>"Curiosidade"</dt>
            <dd>{details.curiosity}</dd>
            <dt>"Raridade"</dt>
            <dd>{card.rarity.label()}</dd>
        </dl>
    }
}
