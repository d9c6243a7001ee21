use leptos::prelude::*;

/// Global UI state shared through Leptos context.
///
/// The drawer and the shell read and mutate this through methods instead
/// of binding to any particular store framework.
#[derive(Clone, Copy)]
pub struct DocsContext {
    /// Whether the navigation drawer is shown
    pub sidebar_open: RwSignal<bool>,
    /// Whether the search overlay is active; any navigation clears it
    pub searching: RwSignal<bool>,
    /// Path color of the current route, drives the logo tint
    pub current_color: RwSignal<String>,
}

impl DocsContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            searching: RwSignal::new(false),
            current_color: RwSignal::new(String::new()),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }

    pub fn set_searching(&self, val: bool) {
        self.searching.set(val);
    }

    pub fn set_current_color(&self, color: &str) {
        if self.current_color.with_untracked(|current| current != color) {
            self.current_color.set(color.to_string());
        }
    }
}

impl Default for DocsContext {
    fn default() -> Self {
        Self::new()
    }
}
