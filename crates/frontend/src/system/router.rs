//! History-backed route source.
//!
//! The drawer treats routing as an external collaborator: it needs the
//! current path and a way to be told when it changes. This module keeps
//! the current path in a signal, mirrors pushState/popstate onto it, and
//! exposes observer registration over it. Route matching, layouts, and
//! the rest of a router's job stay out of scope.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
pub struct RouterContext {
    path: RwSignal<String>,
}

impl RouterContext {
    /// Creates the route source at the browser's current location and
    /// starts following back/forward navigation.
    pub fn new() -> Self {
        let router = Self {
            path: RwSignal::new(current_pathname()),
        };
        router.listen_popstate();
        router
    }

    /// Current route path (reactive read).
    pub fn path(&self) -> String {
        self.path.get()
    }

    /// Navigates to an internal route: pushes a history entry and
    /// updates the path signal.
    pub fn navigate(&self, to: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }

    /// Registers a handler invoked with the new path after every route
    /// change, and once immediately for the current one. Handlers run
    /// synchronously, one route change at a time.
    pub fn after_each(&self, handler: impl Fn(&str) + 'static) {
        let path = self.path;
        Effect::new(move |_| {
            path.with(|current| handler(current));
        });
    }

    fn listen_popstate(&self) {
        let path = self.path;
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            path.set(current_pathname());
        });
        let listener: &js_sys::Function = on_popstate.as_ref().unchecked_ref();
        if window
            .add_event_listener_with_callback("popstate", listener)
            .is_err()
        {
            log::warn!("popstate listener could not be registered");
        }
        // The listener lives as long as the page.
        on_popstate.forget();
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
