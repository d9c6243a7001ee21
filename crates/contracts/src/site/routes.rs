use serde::{Deserialize, Serialize};

/// One entry of the generated route table. Either a page (`meta` present)
/// or a redirect. The `"*"` path is the catch-all entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Page metadata the generator derives from document front matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub h1: String,
    pub title: String,
    pub h1_prefix: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub custom_layout: Option<String>,
    /// Whether the navigation drawer is shown on this page
    pub has_nav: bool,
}

/// Upper bound on redirect hops; a longer chain is treated as a cycle.
const MAX_REDIRECTS: usize = 8;

/// Resolve a path to its page route, following redirects and the `"*"`
/// catch-all. Returns `None` for a path the table does not cover or a
/// redirect chain that never reaches a page.
pub fn resolve<'a>(routes: &'a [Route], path: &str) -> Option<&'a Route> {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECTS {
        let route = routes
            .iter()
            .find(|r| r.path == current)
            .or_else(|| routes.iter().find(|r| r.path == "*"))?;
        match &route.redirect {
            Some(target) => {
                // Generated tables use bare route names ("home") as well
                // as absolute paths in redirect targets.
                current = if target.starts_with('/') {
                    target.clone()
                } else {
                    format!("/{target}")
                };
            }
            None => return Some(route),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str, h1: &str, has_nav: bool) -> Route {
        Route {
            path: path.to_string(),
            redirect: None,
            meta: Some(PageMeta {
                h1: h1.to_string(),
                title: h1.to_string(),
                h1_prefix: None,
                description: None,
                keywords: None,
                custom_layout: None,
                has_nav,
            }),
        }
    }

    fn redirect(path: &str, target: &str) -> Route {
        Route {
            path: path.to_string(),
            redirect: Some(target.to_string()),
            meta: None,
        }
    }

    #[test]
    fn direct_page_lookup() {
        let routes = vec![page("/home", "Pet project", false)];
        let found = resolve(&routes, "/home").unwrap();
        assert_eq!(found.meta.as_ref().unwrap().h1, "Pet project");
    }

    #[test]
    fn root_redirects_to_home() {
        let routes = vec![page("/home", "Pet project", false), redirect("/", "home")];
        let found = resolve(&routes, "/").unwrap();
        assert_eq!(found.path, "/home");
    }

    #[test]
    fn unknown_path_falls_back_to_catch_all() {
        let routes = vec![
            page("/home", "Pet project", false),
            redirect("/", "home"),
            redirect("*", "/"),
        ];
        let found = resolve(&routes, "/no/such/page").unwrap();
        assert_eq!(found.path, "/home");
    }

    #[test]
    fn redirect_cycle_resolves_to_none() {
        let routes = vec![redirect("/a", "/b"), redirect("/b", "/a")];
        assert_eq!(resolve(&routes, "/a"), None);
    }

    #[test]
    fn empty_table_resolves_to_none() {
        assert_eq!(resolve(&[], "/home"), None);
    }
}
