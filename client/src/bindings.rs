use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct WindowBinding {
    window: web_sys::Window,
    event: &'static str,
    handler: Closure<dyn Fn(web_sys::Event)>,
}

impl Drop for WindowBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.handler.as_ref().unchecked_ref());
    }
}

thread_local! {
    static WINDOW_BINDINGS: RefCell<Vec<WindowBinding>> = const { RefCell::new(Vec::new()) };
}

/// Attach `handler` to a window event for the lifetime of the mounted app.
pub(crate) fn bind_window(event: &'static str, handler: impl Fn(web_sys::Event) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::Event)>::new(handler);
    if window
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&format!("Could not listen for {event}").into());
        return;
    }
    WINDOW_BINDINGS.with(|slot| {
        slot.borrow_mut().push(WindowBinding {
            window,
            event,
            handler,
        });
    });
}

/// Remove every window listener registered through `bind_window`.
pub(crate) fn clear_window_bindings() {
    WINDOW_BINDINGS.with(|slot| slot.borrow_mut().clear());
}
