use serde::{Deserialize, Serialize};

/// One node of the navigation tree.
///
/// The generator emits plain objects distinguished by which fields are
/// present; the untagged representation mirrors that. Variants are
/// mutually exclusive: a node is a header, a divider, a group with
/// children, or a leaf link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Inert section caption
    Header { header: String },
    /// Horizontal rule between entries
    Divider { divider: bool },
    Group(NavGroup),
    Link(NavLink),
}

/// A collapsible group of child items. `depth` is the total depth of the
/// generated tree below the document root; groups with `depth > 2` render
/// as expansion panels and take part in expansion tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavGroup {
    pub title: Option<String>,
    #[serde(default)]
    pub pathprefix: Option<String>,
    pub depth: u32,
    #[serde(default)]
    pub action: Option<String>,
    pub items: Vec<NavItem>,
}

/// A leaf entry: an internal route (`to`) or an external URL (`href`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "actionClass")]
    pub action_class: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub pathprefix: Option<String>,
}

impl NavItem {
    pub fn as_group(&self) -> Option<&NavGroup> {
        match self {
            NavItem::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&NavLink> {
        match self {
            NavItem::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Route prefix of this node, whatever its variant.
    pub fn pathprefix(&self) -> Option<&str> {
        match self {
            NavItem::Group(group) => group.pathprefix.as_deref(),
            NavItem::Link(link) => link.pathprefix.as_deref(),
            _ => None,
        }
    }
}

impl NavGroup {
    /// Deep groups render as expansion panels and are tracked by the
    /// drawer's expansion state.
    pub fn is_deep(&self) -> bool {
        self.depth > 2
    }
}
