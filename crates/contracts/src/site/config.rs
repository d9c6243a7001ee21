use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Site-wide configuration emitted by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Route of the landing page (e.g. "home")
    pub home: String,
    /// Release this document was generated for
    pub release: String,
    /// All published releases, current one first
    pub releases: Vec<String>,
    /// Route prefix -> color name; `"*"` is the fallback entry
    pub path_colors: HashMap<String, String>,
    pub theme: ThemeColors,
    /// Title shown in the drawer toolbar
    pub nav_title: String,
    /// Material icon name, used when no logo image is configured
    pub nav_icon: Option<String>,
    /// Logo image URL, takes precedence over `nav_icon`
    pub nav_logo: Option<String>,
}

/// Theme color palette of the generated site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub error: String,
    pub info: String,
    pub success: String,
    pub warning: String,
}

impl SiteConfig {
    /// Color name for a route path: the longest configured prefix wins,
    /// the `"*"` entry is the fallback.
    pub fn color_for_path(&self, path: &str) -> Option<&str> {
        self.path_colors
            .iter()
            .filter(|(prefix, _)| *prefix != "*" && path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .or_else(|| self.path_colors.get_key_value("*"))
            .map(|(_, color)| color.as_str())
    }
}

/// Hue-rotate degrees used to tint the nav logo for a path color.
pub fn hue_rotation(color: &str) -> i32 {
    match color {
        "purple" => 420,
        "darken-3 pink" => 480,
        "indigo" => 370,
        "cyan" => 337,
        "teal" => 315,
        _ => 0,
    }
}
