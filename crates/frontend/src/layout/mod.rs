pub mod global_context;
pub mod nav;
pub mod page;

use global_context::DocsContext;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                    |
/// +------------------------------------------+
/// |  NavDrawer   |         Page              |
/// +------------------------------------------+
/// ```
///
/// The drawer is shown when the sidebar is open and the current page
/// carries navigation (`show_nav`).
#[component]
pub fn Shell<N, C>(
    nav: N,
    content: C,
    #[prop(into)] show_nav: Signal<bool>,
) -> impl IntoView
where
    N: Fn() -> AnyView + Send + 'static,
    C: Fn() -> AnyView + Send + 'static,
{
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let drawer_visible = move || ctx.sidebar_open.get() && show_nav.get();

    view! {
        <div class="docs-layout">
            <TopBar />
            <div class="docs-body">
                <aside data-zone="nav" class="docs-drawer" class:hidden=move || !drawer_visible()>
                    {nav()}
                </aside>
                <main class="docs-main">
                    {content()}
                </main>
            </div>
        </div>
    }
}

/// Top bar with the drawer toggle.
#[component]
fn TopBar() -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");

    view! {
        <div class="docs-topbar">
            <button
                class="docs-topbar__menu-btn"
                title=move || if ctx.sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                on:click=move |_| ctx.toggle_sidebar()
            >
                {icon("menu")}
            </button>
        </div>
    }
}
