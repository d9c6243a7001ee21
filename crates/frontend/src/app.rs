use crate::layout::global_context::DocsContext;
use crate::layout::nav::{NavDrawer, NavState};
use crate::layout::page::PageView;
use crate::layout::Shell;
use crate::system::router::RouterContext;
use contracts::site::{resolve, Site};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared UI state and the route source to the whole app.
    provide_context(DocsContext::new());
    provide_context(RouterContext::new());

    let site = RwSignal::new(None::<Site>);
    spawn_local(async move {
        match load_site().await {
            Ok(loaded) => site.set(Some(loaded)),
            Err(err) => log::error!("site document could not be loaded: {err}"),
        }
    });

    view! {
        {move || site.get().map(|site| view! { <SiteShell site /> })}
    }
}

#[component]
fn SiteShell(site: Site) -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let router = use_context::<RouterContext>().expect("RouterContext not found");

    let Site {
        config,
        routes,
        nav,
    } = site;
    let nav_state = RwSignal::new(NavState::new(nav));
    let config = StoredValue::new(config);
    let routes = StoredValue::new(routes);

    // Keep drawer expansion, path color, and the document title in step
    // with the route. Runs once for the initial route as well.
    router.after_each(move |path| {
        nav_state.update(|nav| nav.on_route_changed(path));

        let color =
            config.with_value(|c| c.color_for_path(path).unwrap_or_default().to_string());
        ctx.set_current_color(&color);

        let title = routes.with_value(|routes| {
            resolve(routes, path).and_then(|route| route.meta.as_ref().map(|m| m.title.clone()))
        });
        if let Some(title) = title {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
        }
    });

    let show_nav = Signal::derive(move || {
        let path = router.path();
        routes.with_value(|routes| {
            resolve(routes, &path)
                .and_then(|route| route.meta.as_ref())
                .map(|meta| meta.has_nav)
                .unwrap_or(false)
        })
    });

    view! {
        <Shell
            nav=move || view! { <NavDrawer nav_state config /> }.into_any()
            content=move || view! { <PageView routes /> }.into_any()
            show_nav
        />
    }
}

/// Fetches the generated site document the build publishes next to the
/// app bundle.
async fn load_site() -> Result<Site, gloo_net::Error> {
    let response = gloo_net::http::Request::get("/config.json").send().await?;
    response.json::<Site>().await
}
