//! Expansion state of the navigation drawer.
//!
//! The drawer shows a tree of depth <= 4. Top-level sections that are
//! deep groups (`depth > 2`) render their children as expansion panels,
//! and exactly one of those panels is open at a time. Third-level
//! sub-panels inside an open panel collapse and expand independently.
//!
//! State lives in maps keyed by typed node identifiers. An identifier is
//! resolved against the tree before any mutation; one that does not name
//! a matching node is ignored, the same way the original drawer ignored
//! element references that had not rendered yet.

use contracts::site::NavItem;
use log::debug;
use std::collections::HashMap;

/// Identifies a second-level group panel: `section` indexes the top-level
/// entry, `group` the panel inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId {
    pub section: usize,
    pub group: usize,
}

/// Identifies a third-level sub-panel inside a group panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId {
    pub section: usize,
    pub group: usize,
    pub item: usize,
}

impl GroupId {
    pub fn new(section: usize, group: usize) -> Self {
        Self { section, group }
    }

    /// Id of the `item`-th sub-panel inside this group.
    pub fn panel(self, item: usize) -> PanelId {
        PanelId {
            section: self.section,
            group: self.group,
            item,
        }
    }
}

/// Open/closed state of the drawer tree plus the single active group.
///
/// Absent map entries read as collapsed, so only nodes that were ever
/// touched occupy memory.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    items: Vec<NavItem>,
    expanded: HashMap<GroupId, bool>,
    panels: HashMap<PanelId, bool>,
    active: GroupId,
}

impl NavState {
    /// Builds the initial state in one pass over the tree: the first
    /// panel of the first deep section starts expanded, every other
    /// panel collapsed, and the active pointer sits at `(0, 0)`.
    pub fn new(items: Vec<NavItem>) -> Self {
        let mut expanded = HashMap::new();
        let mut first_assigned = false;
        for (section, item) in items.iter().enumerate() {
            let Some(group) = item.as_group().filter(|g| g.is_deep()) else {
                continue;
            };
            for panel in 0..group.items.len() {
                let open = !first_assigned;
                first_assigned = true;
                expanded.insert(GroupId::new(section, panel), open);
            }
        }
        Self {
            items,
            expanded,
            panels: HashMap::new(),
            active: GroupId::new(0, 0),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn active(&self) -> GroupId {
        self.active
    }

    pub fn is_expanded(&self, id: GroupId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    pub fn is_panel_open(&self, id: PanelId) -> bool {
        self.panels.get(&id).copied().unwrap_or(false)
    }

    /// Makes `id` the single expanded group: collapses the previously
    /// active group, expands `id`, and moves the active pointer.
    /// Idempotent when `id` is already expanded.
    pub fn open_group(&mut self, id: GroupId) {
        if self.group_at(id).is_none() {
            debug!("open_group: no group panel at {id:?}");
            return;
        }
        if self.is_expanded(id) {
            return;
        }
        self.toggle_group(self.active);
        self.toggle_group(id);
        self.active = id;
    }

    /// Flips a single group panel without touching the active pointer or
    /// any sibling. `open_group` builds on this for its collapse/expand
    /// pair.
    pub fn toggle_group(&mut self, id: GroupId) {
        if self.group_at(id).is_none() {
            debug!("toggle_group: no group panel at {id:?}");
            return;
        }
        let entry = self.expanded.entry(id).or_insert(false);
        *entry = !*entry;
    }

    /// Opens a third-level sub-panel. Never collapses: re-opening an open
    /// panel is a no-op.
    pub fn open_group_item(&mut self, id: PanelId) {
        if self.panel_at(id).is_none() {
            debug!("open_group_item: no sub-panel at {id:?}");
            return;
        }
        self.panels.insert(id, true);
    }

    /// Synchronizes expansion with a route change.
    ///
    /// If the active group already owns the path (its `pathprefix` is a
    /// prefix of it), nothing happens. Otherwise the deep sections are
    /// scanned for the first third-level entry whose `pathprefix` matches;
    /// its sub-panel and its parent group are opened and the active
    /// pointer moves there. A path no entry claims leaves the expansion
    /// untouched.
    pub fn on_route_changed(&mut self, path: &str) {
        if let Some(prefix) = self
            .group_at(self.active)
            .and_then(|active| active.pathprefix())
        {
            if path.starts_with(prefix) {
                return;
            }
        }

        match self.find_claiming_panel(path) {
            Some(id) => {
                debug!("route {path} opens group {:?}, sub-panel {}",
                    GroupId::new(id.section, id.group), id.item);
                self.open_group_item(id);
                self.open_group(GroupId::new(id.section, id.group));
            }
            None => debug!("route {path} matches no nav entry; expansion unchanged"),
        }
    }

    /// First third-level entry whose `pathprefix` is a prefix of `path`.
    fn find_claiming_panel(&self, path: &str) -> Option<PanelId> {
        for (section, item) in self.items.iter().enumerate() {
            let Some(top) = item.as_group().filter(|g| g.is_deep()) else {
                continue;
            };
            for (group, entry) in top.items.iter().enumerate() {
                let Some(panel_group) = entry.as_group() else {
                    continue;
                };
                for (item, sub) in panel_group.items.iter().enumerate() {
                    let Some(prefix) = sub.pathprefix() else {
                        continue;
                    };
                    if path.starts_with(prefix) {
                        return Some(GroupId::new(section, group).panel(item));
                    }
                }
            }
        }
        None
    }

    /// Second-level node named by `id`, if the tree has one there.
    fn group_at(&self, id: GroupId) -> Option<&NavItem> {
        self.items
            .get(id.section)?
            .as_group()
            .filter(|g| g.is_deep())?
            .items
            .get(id.group)
    }

    /// Third-level group node named by `id`. Leaf links at that position
    /// do not count: only groups own a collapsible sub-panel.
    fn panel_at(&self, id: PanelId) -> Option<&NavItem> {
        self.group_at(GroupId::new(id.section, id.group))?
            .as_group()?
            .items
            .get(id.item)
            .filter(|item| item.as_group().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::site::{NavGroup, NavLink};

    fn link(title: &str, to: &str) -> NavItem {
        NavItem::Link(NavLink {
            title: title.to_string(),
            to: Some(to.to_string()),
            href: None,
            action: None,
            action_class: None,
            disabled: false,
            target: None,
            pathprefix: None,
        })
    }

    fn group(title: &str, pathprefix: Option<&str>, depth: u32, items: Vec<NavItem>) -> NavItem {
        NavItem::Group(NavGroup {
            title: Some(title.to_string()),
            pathprefix: pathprefix.map(str::to_string),
            depth,
            action: None,
            items,
        })
    }

    /// The "Pet Project doc" tree: one deep section with two panels
    /// ("Cool Stuff", "Boring Stuff"), then a header and an external link.
    fn petproject_tree() -> Vec<NavItem> {
        let cool = group(
            "Cool Stuff",
            None,
            4,
            vec![
                group(
                    "What is it about?",
                    Some("/about"),
                    4,
                    vec![
                        link("Introduction", "/about/01_intro"),
                        link("Admonitions", "/about/03_admonitions"),
                    ],
                ),
                group(
                    "Getting started",
                    Some("/getting-started"),
                    4,
                    vec![link("The pre-requisites", "/getting-started/01_prerequisites")],
                ),
            ],
        );
        let boring = group(
            "Boring Stuff",
            None,
            4,
            vec![
                group(
                    "Let's code!",
                    Some("/lets-code"),
                    4,
                    vec![link("Let's code some Java", "/lets-code/02_java")],
                ),
                link("Play time!", "/playtime"),
            ],
        );
        let section = NavItem::Group(NavGroup {
            title: None,
            pathprefix: None,
            depth: 4,
            action: None,
            items: vec![cool, boring],
        });
        vec![
            section,
            NavItem::Header {
                header: "Additional Resources".to_string(),
            },
            link("Javadocs", "/javadocs"),
        ]
    }

    #[test]
    fn first_panel_of_first_deep_section_starts_expanded() {
        let nav = NavState::new(petproject_tree());

        assert!(nav.is_expanded(GroupId::new(0, 0)));
        assert!(!nav.is_expanded(GroupId::new(0, 1)));
        assert_eq!(nav.active(), GroupId::new(0, 0));
        // Entries outside the deep section read collapsed.
        assert!(!nav.is_expanded(GroupId::new(1, 0)));
        assert!(!nav.is_expanded(GroupId::new(2, 0)));
    }

    #[test]
    fn only_the_first_deep_section_gets_the_default_expansion() {
        let deep = |title: &str| {
            group(
                title,
                None,
                4,
                vec![group("inner", None, 4, vec![link("leaf", "/leaf")])],
            )
        };
        let items = vec![
            NavItem::Group(NavGroup {
                title: None,
                pathprefix: None,
                depth: 4,
                action: None,
                items: vec![deep("first"), deep("second")],
            }),
            NavItem::Group(NavGroup {
                title: None,
                pathprefix: None,
                depth: 4,
                action: None,
                items: vec![deep("third")],
            }),
        ];
        let nav = NavState::new(items);

        assert!(nav.is_expanded(GroupId::new(0, 0)));
        assert!(!nav.is_expanded(GroupId::new(0, 1)));
        assert!(!nav.is_expanded(GroupId::new(1, 0)));
    }

    #[test]
    fn open_group_is_idempotent() {
        let mut nav = NavState::new(petproject_tree());
        nav.open_group(GroupId::new(0, 1));
        let after_first = nav.clone();

        nav.open_group(GroupId::new(0, 1));
        assert_eq!(nav, after_first);
    }

    #[test]
    fn open_group_keeps_exactly_one_group_expanded() {
        let mut nav = NavState::new(petproject_tree());

        nav.open_group(GroupId::new(0, 1));
        assert!(!nav.is_expanded(GroupId::new(0, 0)));
        assert!(nav.is_expanded(GroupId::new(0, 1)));
        assert_eq!(nav.active(), GroupId::new(0, 1));

        nav.open_group(GroupId::new(0, 0));
        assert!(nav.is_expanded(GroupId::new(0, 0)));
        assert!(!nav.is_expanded(GroupId::new(0, 1)));
        assert_eq!(nav.active(), GroupId::new(0, 0));
    }

    #[test]
    fn open_group_ignores_an_id_the_tree_does_not_have() {
        let mut nav = NavState::new(petproject_tree());
        let before = nav.clone();

        // Section 1 is a header, section 9 does not exist.
        nav.open_group(GroupId::new(1, 0));
        nav.open_group(GroupId::new(9, 0));
        nav.open_group(GroupId::new(0, 7));

        assert_eq!(nav, before);
    }

    #[test]
    fn route_change_opens_matching_group_and_sub_panel() {
        let mut nav = NavState::new(petproject_tree());

        nav.on_route_changed("/lets-code/02_java");

        assert!(nav.is_expanded(GroupId::new(0, 1)));
        assert!(!nav.is_expanded(GroupId::new(0, 0)));
        assert_eq!(nav.active(), GroupId::new(0, 1));
        assert!(nav.is_panel_open(GroupId::new(0, 1).panel(0)));
    }

    #[test]
    fn route_change_within_active_group_is_a_no_op() {
        let mut nav = NavState::new(petproject_tree());
        nav.on_route_changed("/about/03_admonitions");
        let synced = nav.clone();

        // Still under /about: re-syncing lands on the same group.
        nav.on_route_changed("/about/01_intro");
        assert_eq!(nav, synced);
    }

    #[test]
    fn route_change_to_admonitions_lands_on_the_about_panel() {
        let mut nav = NavState::new(petproject_tree());

        nav.on_route_changed("/about/03_admonitions");

        // "Cool Stuff" stays expanded, "What is it about?" is open.
        assert!(nav.is_expanded(GroupId::new(0, 0)));
        assert_eq!(nav.active(), GroupId::new(0, 0));
        assert!(nav.is_panel_open(GroupId::new(0, 0).panel(0)));
        assert!(!nav.is_panel_open(GroupId::new(0, 0).panel(1)));
    }

    #[test]
    fn unmatched_route_leaves_expansion_untouched() {
        let mut nav = NavState::new(petproject_tree());
        nav.open_group(GroupId::new(0, 1));
        let before = nav.clone();

        nav.on_route_changed("/playtime");

        assert_eq!(nav, before);
    }

    #[test]
    fn open_group_item_never_collapses() {
        let mut nav = NavState::new(petproject_tree());
        let id = GroupId::new(0, 0).panel(1);

        nav.open_group_item(id);
        assert!(nav.is_panel_open(id));
        nav.open_group_item(id);
        assert!(nav.is_panel_open(id));
    }

    #[test]
    fn open_group_item_ignores_leaf_positions() {
        let mut nav = NavState::new(petproject_tree());

        // (0, 1, 1) is the "Play time!" leaf link, not a sub-panel.
        let id = GroupId::new(0, 1).panel(1);
        nav.open_group_item(id);

        assert!(!nav.is_panel_open(id));
    }

    #[test]
    fn toggle_group_flips_without_moving_the_pointer() {
        let mut nav = NavState::new(petproject_tree());

        nav.toggle_group(GroupId::new(0, 1));
        assert!(nav.is_expanded(GroupId::new(0, 1)));
        // Both panels are momentarily open; the pointer did not move.
        assert!(nav.is_expanded(GroupId::new(0, 0)));
        assert_eq!(nav.active(), GroupId::new(0, 0));

        nav.toggle_group(GroupId::new(0, 1));
        assert!(!nav.is_expanded(GroupId::new(0, 1)));
    }

    #[test]
    fn tree_without_deep_sections_stays_inert() {
        let items = vec![
            group("Flat", Some("/flat"), 2, vec![link("Leaf", "/flat/leaf")]),
            link("Top", "/top"),
        ];
        let mut nav = NavState::new(items);
        let before = nav.clone();

        nav.on_route_changed("/flat/leaf");
        nav.open_group(GroupId::new(0, 0));
        nav.open_group_item(GroupId::new(0, 0).panel(0));

        assert_eq!(nav, before);
    }
}
