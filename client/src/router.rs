use leptos::prelude::{Set, Update, UpdateValue};
use fauna_shared::{Route, Section};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;

use crate::app::PageState;
use crate::config::MENU_NAVIGATION_DELAY_MS;
use crate::reveal;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Re-read the fragment and make the matching section current.
pub(crate) fn navigate(state: PageState) {
    let hash = current_hash();
    let route = Route::resolve(&hash);
    if route == Route::NotFound {
        web_sys::console::warn_1(&format!("No section for fragment {hash:?}").into());
    }

    state.route.set(route);
    state.nav_nonce.update(|n| *n += 1);

    let mut reveal = None;
    state.planner.update_value(|planner| reveal = planner.navigated(route));
    if let Some(reveal) = reveal {
        reveal::play(reveal, state.revealed, state.visible_count());
    }
}

/// A menu entry was activated. Marks the navigation as menu-originated; when the
/// link points at the fragment already in the URL no `hashchange` will fire, so
/// the navigation is scheduled directly.
pub(crate) fn menu_activated(state: PageState, href: &str) {
    state.planner.update_value(|planner| planner.menu_activated());
    if current_hash() == href {
        let _ = Timeout::new(MENU_NAVIGATION_DELAY_MS, move || navigate(state)).forget();
    }
}

/// Programmatic navigation; the resulting `hashchange` drives the update.
pub(crate) fn go_to(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_hash(section.id()).is_err() {
        web_sys::console::warn_1(&format!("Could not navigate to #{}", section.id()).into());
    }
}

pub(crate) fn section_display(route: Route, section: Section) -> &'static str {
    if route == Route::Section(section) {
        "block"
    } else {
        "none"
    }
}

/// Move focus to the active section's heading and smooth-scroll it into view.
pub(crate) fn focus_active_section(route: Route) {
    let Some(section) = route.section() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = document.get_element_by_id(section.id()) else {
        web_sys::console::warn_1(&format!("Section #{} is missing", section.id()).into());
        return;
    };

    if let Ok(Some(heading)) = el.query_selector("h2, h1")
        && let Ok(heading) = heading.dyn_into::<web_sys::HtmlElement>()
    {
        heading.focus().ok();
    }

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
