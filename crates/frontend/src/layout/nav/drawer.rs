//! Navigation drawer: toolbar with site identity and release picker,
//! then the navigation tree bound to [`NavState`].

use crate::layout::global_context::DocsContext;
use crate::layout::nav::state::{GroupId, NavState, PanelId};
use crate::shared::icons::icon;
use crate::system::router::RouterContext;
use contracts::site::{hue_rotation, NavGroup, NavItem, NavLink, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn NavDrawer(nav_state: RwSignal<NavState>, config: StoredValue<SiteConfig>) -> impl IntoView {
    // The tree itself is static; only the expansion state is reactive.
    let items = nav_state.with_untracked(|nav| nav.items().to_vec());

    view! {
        <div class="doc-nav">
            <DrawerToolbar config />
            <hr class="doc-nav__divider" />
            <ul class="doc-nav__list">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(section, item)| top_item(section, item, nav_state))
                    .collect_view()}
            </ul>
        </div>
    }
}

fn top_item(section: usize, item: NavItem, nav_state: RwSignal<NavState>) -> AnyView {
    match item {
        NavItem::Group(group) if group.is_deep() => {
            view! { <ExpansionSection section group nav_state /> }.into_any()
        }
        NavItem::Group(group) => view! { <li><PlainGroup group /></li> }.into_any(),
        NavItem::Header { header } => {
            view! { <li class="doc-nav__caption">{header}</li> }.into_any()
        }
        NavItem::Divider { .. } => view! { <li><hr class="doc-nav__divider" /></li> }.into_any(),
        NavItem::Link(link) => view! { <li><LinkTile link /></li> }.into_any(),
    }
}

/// A deep top-level section: its children render as expansion panels of
/// which exactly one is open.
#[component]
fn ExpansionSection(
    section: usize,
    group: NavGroup,
    nav_state: RwSignal<NavState>,
) -> impl IntoView {
    view! {
        <li class="doc-nav__groups">
            {group
                .items
                .into_iter()
                .enumerate()
                .map(|(index, entry)| match entry {
                    NavItem::Group(panel) => {
                        let id = GroupId::new(section, index);
                        view! { <GroupPanel id panel nav_state /> }.into_any()
                    }
                    other => top_item(section, other, nav_state),
                })
                .collect_view()}
        </li>
    }
}

/// One expansion panel. Clicking its header makes it the single open
/// group; its body holds sub-panels and plain links.
#[component]
fn GroupPanel(id: GroupId, panel: NavGroup, nav_state: RwSignal<NavState>) -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let title = panel.title.clone().unwrap_or_default();
    let action = panel.action.clone();
    let children = StoredValue::new(panel.items);

    let is_expanded = move || nav_state.with(|nav| nav.is_expanded(id));
    let is_active = move || nav_state.with(|nav| nav.active() == id);
    let open = move |_| {
        nav_state.update(|nav| nav.open_group(id));
        ctx.set_searching(false);
    };

    view! {
        <section class="doc-nav__group">
            <ul
                class="doc-nav__group-header"
                class:doc-nav__group-header--active=is_active
                on:click=open
            >
                <li>
                    <a class="doc-nav__tile">
                        {action.map(|name| view! {
                            <span class="doc-nav__tile-action">{icon(&name)}</span>
                        })}
                        <div class="doc-nav__tile-title">{title}</div>
                    </a>
                </li>
            </ul>
            <Show when=is_expanded>
                <div class="doc-nav__group-items">
                    {children
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| match entry {
                            NavItem::Group(sub) => {
                                view! { <SubPanel id=id.panel(index) sub nav_state /> }.into_any()
                            }
                            NavItem::Link(link) => view! { <LinkTile link /> }.into_any(),
                            NavItem::Header { header } => {
                                view! { <div class="doc-nav__caption">{header}</div> }.into_any()
                            }
                            NavItem::Divider { .. } => {
                                view! { <hr class="doc-nav__divider" /> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </section>
    }
}

/// Third-level sub-panel. Opening is monotonic: the panel collapses only
/// when a sibling group takes over via route sync.
#[component]
fn SubPanel(id: PanelId, sub: NavGroup, nav_state: RwSignal<NavState>) -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let title = sub.title.clone().unwrap_or_default();
    let action = sub.action.clone();
    let links = StoredValue::new(sub.items);

    let is_open = move || nav_state.with(|nav| nav.is_panel_open(id));
    let open = move |_| {
        nav_state.update(|nav| nav.open_group_item(id));
        ctx.set_searching(false);
    };

    view! {
        <div class="doc-nav__subgroup">
            <a class="doc-nav__tile" on:click=open>
                {action.map(|name| view! {
                    <span class="doc-nav__tile-action">{icon(&name)}</span>
                })}
                <div class="doc-nav__tile-title">{title}</div>
                <span class="doc-nav__tile-chevron">{icon("keyboard_arrow_down")}</span>
            </a>
            <Show when=is_open>
                <div class="doc-nav__subgroup-items">
                    {links
                        .get_value()
                        .into_iter()
                        .filter_map(|entry| entry.as_link().cloned())
                        .map(|link| view! { <LinkTile link /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Shallow group: a local fold that also opens while the route is under
/// its `pathprefix`.
#[component]
fn PlainGroup(group: NavGroup) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let title = group.title.clone().unwrap_or_default();
    let action = group.action.clone();
    let prefix = StoredValue::new(group.pathprefix.clone());
    let links = StoredValue::new(group.items);
    let toggled = RwSignal::new(false);

    let is_open = move || {
        toggled.get()
            || prefix.with_value(|p| {
                p.as_deref()
                    .is_some_and(|prefix| router.path().starts_with(prefix))
            })
    };

    view! {
        <div class="doc-nav__subgroup">
            <a class="doc-nav__tile" on:click=move |_| toggled.update(|open| *open = !*open)>
                {action.map(|name| view! {
                    <span class="doc-nav__tile-action">{icon(&name)}</span>
                })}
                <div class="doc-nav__tile-title">{title}</div>
                <span class="doc-nav__tile-chevron">{icon("keyboard_arrow_down")}</span>
            </a>
            <Show when=is_open>
                <div class="doc-nav__subgroup-items">
                    {links
                        .get_value()
                        .into_iter()
                        .filter_map(|entry| entry.as_link().cloned())
                        .map(|link| view! { <LinkTile link /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Leaf entry: an internal route, an external URL, or an inert tile.
#[component]
fn LinkTile(link: NavLink) -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let NavLink {
        title,
        to,
        href,
        action,
        action_class,
        disabled,
        target,
        ..
    } = link;

    let action_view = action.map(|name| {
        let class = match action_class {
            Some(extra) => format!("doc-nav__tile-action {extra}"),
            None => "doc-nav__tile-action".to_string(),
        };
        view! { <span class=class>{icon(&name)}</span> }
    });

    match (to, href) {
        (Some(to), _) => {
            let target_path = StoredValue::new(to.clone());
            view! {
                <a
                    class="doc-nav__tile"
                    class:doc-nav__tile--disabled=disabled
                    href=to
                    on:click=move |ev| {
                        ev.prevent_default();
                        if !disabled {
                            router.navigate(&target_path.get_value());
                            ctx.set_searching(false);
                        }
                    }
                >
                    {action_view}
                    <div class="doc-nav__tile-title">{title}</div>
                </a>
            }
            .into_any()
        }
        (None, Some(href)) => view! {
            <a
                class="doc-nav__tile"
                class:doc-nav__tile--disabled=disabled
                href=href
                target=target
                rel="noopener"
                on:click=move |_| ctx.set_searching(false)
            >
                {action_view}
                <div class="doc-nav__tile-title">{title}</div>
            </a>
        }
        .into_any(),
        (None, None) => view! {
            <span class="doc-nav__tile doc-nav__tile--disabled">
                {action_view}
                <div class="doc-nav__tile-title">{title}</div>
            </span>
        }
        .into_any(),
    }
}

/// Toolbar block: logo or icon linking home, the site title, and the
/// release line.
#[component]
fn DrawerToolbar(config: StoredValue<SiteConfig>) -> impl IntoView {
    let ctx = use_context::<DocsContext>().expect("DocsContext not found");
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let nav_logo = config.with_value(|c| c.nav_logo.clone());
    let nav_icon = config.with_value(|c| c.nav_icon.clone());
    let nav_title = config.with_value(|c| c.nav_title.clone());

    // The logo is tinted to match the current path color.
    let logo_filter =
        move || format!("hue-rotate({}deg)", hue_rotation(&ctx.current_color.get()));

    view! {
        <div class="doc-nav__toolbar">
            <a
                class="doc-nav__avatar"
                href="/"
                on:click=move |ev| {
                    ev.prevent_default();
                    router.navigate("/");
                }
            >
                {match (nav_logo, nav_icon) {
                    (Some(logo), _) => view! {
                        <img class="doc-nav__logo" src=logo style:filter=logo_filter />
                    }
                    .into_any(),
                    (None, Some(name)) => icon(&name),
                    (None, None) => ().into_any(),
                }}
            </a>
            <div class="doc-nav__titles">
                <div class="doc-nav__title">{nav_title}</div>
                <VersionMenu config />
            </div>
        </div>
    }
}

/// Release line: a dropdown when several releases are published, a plain
/// label otherwise. The current release routes to "/", archived ones
/// link to their snapshot.
#[component]
fn VersionMenu(config: StoredValue<SiteConfig>) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let release = config.with_value(|c| c.release.clone());
    let releases = config.with_value(|c| c.releases.clone());
    let label = version_label(&release, &releases);

    if releases.len() > 1 {
        let is_open = RwSignal::new(false);
        let entries = StoredValue::new(releases);
        view! {
            <div class="version-menu">
                <button
                    class="version-menu__trigger"
                    on:click=move |_| is_open.update(|open| *open = !*open)
                >
                    <span>{format!("Version: {label}")}</span>
                    {icon("arrow_drop_down")}
                </button>
                <Show when=move || is_open.get()>
                    <ul class="version-menu__list">
                        {entries
                            .get_value()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                if index == 0 {
                                    view! {
                                        <li>
                                            <a
                                                href="/"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    router.navigate("/");
                                                    is_open.set(false);
                                                }
                                            >
                                                {entry}
                                            </a>
                                        </li>
                                    }
                                    .into_any()
                                } else {
                                    let snapshot = format!("/releases/{entry}");
                                    view! {
                                        <li><a href=snapshot>{entry}</a></li>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        }
        .into_any()
    } else {
        view! {
            <span class="version-menu__current">{format!("Version: {label}")}</span>
        }
        .into_any()
    }
}

/// The current release renders parenthesized, archived ones verbatim.
fn version_label(release: &str, releases: &[String]) -> String {
    if releases.first().map(String::as_str) == Some(release) {
        format!("({release})")
    } else {
        release.to_string()
    }
}
