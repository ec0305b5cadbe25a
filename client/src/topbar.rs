use std::cell::RefCell;

use fauna_shared::topbar::TOPBAR_HIDE_AFTER_MS;
use fauna_shared::{Section, TimerAction, Topbar as TopbarModel, TopbarInput};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::PageState;
use crate::bindings::bind_window;
use crate::router;

thread_local! {
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Feed one input to the model and carry out the timer action it asks for.
fn dispatch(model: RwSignal<TopbarModel>, input: TopbarInput) {
    let mut action = TimerAction::Keep;
    model.update(|bar| action = bar.handle(input));
    apply_timer(model, action);
}

fn apply_timer(model: RwSignal<TopbarModel>, action: TimerAction) {
    match action {
        TimerAction::Keep => {}
        TimerAction::Cancel => {
            // Dropping a gloo Timeout clears it.
            HIDE_TIMER.with(|slot| slot.borrow_mut().take());
        }
        TimerAction::Arm { generation } => {
            let timer = Timeout::new(TOPBAR_HIDE_AFTER_MS, move || {
                dispatch(model, TopbarInput::TimerFired { generation });
            });
            HIDE_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
        }
    }
}

/// Auto-hiding navigation bar with the section menu.
#[component]
pub fn Topbar() -> impl IntoView {
    let model = RwSignal::new(TopbarModel::default());

    let mut action = TimerAction::Keep;
    model.update(|bar| action = bar.start(scroll_y()));
    apply_timer(model, action);

    bind_window("pointermove", move |e| {
        let Some(e) = e.dyn_ref::<web_sys::PointerEvent>() else {
            return;
        };
        dispatch(model, TopbarInput::PointerMove { y: f64::from(e.client_y()) });
    });
    bind_window("scroll", move |_| {
        dispatch(model, TopbarInput::Scroll { y: scroll_y() });
    });
    on_cleanup(|| {
        HIDE_TIMER.with(|slot| slot.borrow_mut().take());
    });

    view! {
        <header
            class="topbar"
            class:topbar-hidden=move || !model.with(|bar| bar.visible())
            on:pointerenter=move |_| dispatch(model, TopbarInput::Enter)
            on:pointerleave=move |_| dispatch(model, TopbarInput::Leave)
            on:touchstart=move |_| dispatch(model, TopbarInput::Enter)
        >
            <span class="brand">"Fauna & Flora"</span>
            <nav class="menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <MenuItem section=section /> })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn MenuItem(section: Section) -> impl IntoView {
    let state: PageState = expect_context();
    let href = format!("#{}", section.id());
    let is_current = {
        let href = href.clone();
        Memo::new(move |_| state.route.get().is_current_href(&href))
    };

    let on_click = {
        let href = href.clone();
        move |_: leptos::ev::MouseEvent| router::menu_activated(state, &href)
    };

    view! {
        <a
            class="menu-item"
            href=href
            class:active-menu=move || is_current.get()
            aria-current=move || is_current.get().then_some("page")
            on:click=on_click
            on:keydown=move |e: leptos::ev::KeyboardEvent| {
                if e.key() == " " {
                    e.prevent_default();
                    if let Some(el) = e
                        .current_target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                    {
                        el.click();
                    }
                }
            }
        >
            {section.title()}
        </a>
    }
}
