use crate::system::router::RouterContext;
use contracts::site::{resolve, Route};
use leptos::prelude::*;

/// Placeholder page body: resolves the current route and shows its
/// metadata. Actual page rendering belongs to the generated site, not to
/// this crate.
#[component]
pub fn PageView(routes: StoredValue<Vec<Route>>) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");

    view! {
        <div class="docs-page">
            {move || {
                let path = router.path();
                routes.with_value(|routes| match resolve(routes, &path) {
                    Some(route) => page_article(route),
                    None => {
                        log::warn!("no route matches {path}");
                        view! {
                            <article class="docs-page__missing">
                                <h1>"Page not found"</h1>
                                <p>{path.clone()}</p>
                            </article>
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}

fn page_article(route: &Route) -> AnyView {
    let Some(meta) = &route.meta else {
        return ().into_any();
    };
    let heading = match &meta.h1_prefix {
        Some(prefix) => format!("{prefix} {}", meta.h1),
        None => meta.h1.clone(),
    };
    let description = meta.description.clone();

    view! {
        <article class="docs-page__article">
            <h1>{heading}</h1>
            {description.map(|text| view! { <p class="docs-page__description">{text}</p> })}
        </article>
    }
    .into_any()
}
