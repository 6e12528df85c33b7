// ============================================================================
// ROUTER MODULE - Static route table + path matching
// ============================================================================
// The table is plain data (path pattern, name, view tag); this module owns
// the generic matcher that resolves a browser path to a table entry and
// extracts any dynamic segment values.
// ============================================================================

pub mod history;
pub mod params;
pub mod pattern;
pub mod route;

pub use params::Params;
pub use route::{route_table, Route, RouteName, ViewId};

use crate::router::pattern::{normalize_path, Pattern};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RouterError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },
    #[error("duplicate route name '{0}'")]
    DuplicateName(RouteName),
    #[error("no route named '{0}'")]
    UnknownRoute(RouteName),
    #[error("missing required path parameter '{0}'")]
    MissingParam(String),
}

/// A resolved route: which entry matched and what the dynamic segments bound to
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub view: ViewId,
    pub params: Params,
}

struct CompiledRoute {
    route: Route,
    pattern: Pattern,
}

/// Path-based router rooted at a deployment base URL.
///
/// Constructed once at startup from the route table; the table is fixed for
/// the application's lifetime.
pub struct Router {
    base: String,
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Compile a route table. Fails on a malformed pattern or a duplicate name.
    pub fn new(base: impl Into<String>, table: Vec<Route>) -> Result<Self, RouterError> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(table.len());

        for route in table {
            if !seen.insert(route.name) {
                return Err(RouterError::DuplicateName(route.name));
            }
            let pattern = Pattern::parse(route.path)?;
            routes.push(CompiledRoute { route, pattern });
        }

        Ok(Self {
            base: base.into(),
            routes,
        })
    }

    /// Resolve a browser path (including the base prefix) to a route.
    ///
    /// Returns `None` when the path is outside the base or matches no table
    /// entry; the caller decides what to render (see the not-found view).
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let rest = self.strip_base(path)?;
        let normalized = normalize_path(rest);

        self.routes.iter().find_map(|compiled| {
            compiled.pattern.match_path(&normalized).map(|params| RouteMatch {
                name: compiled.route.name,
                view: compiled.route.view,
                params,
            })
        })
    }

    /// Build the full browser path for a named route, filling dynamic
    /// segments from `params`. The inverse of `resolve`.
    pub fn path_for(&self, name: RouteName, params: &Params) -> Result<String, RouterError> {
        let compiled = self
            .routes
            .iter()
            .find(|c| c.route.name == name)
            .ok_or(RouterError::UnknownRoute(name))?;

        let path = compiled.pattern.fill(params)?;
        Ok(self.with_base(&path))
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|c| &c.route)
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(base)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            // e.g. base "/planner" must not swallow "/planner-v2"
            None
        }
    }

    fn with_base(&self, path: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new("/", route_table()).expect("route table must compile")
    }

    #[test]
    fn route_names_are_pairwise_distinct() {
        let table = route_table();
        let names: HashSet<RouteName> = table.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn recipe_detail_is_the_only_dynamic_route() {
        let router = router();
        let dynamic: Vec<RouteName> = router
            .routes
            .iter()
            .filter(|c| c.pattern.is_dynamic())
            .map(|c| c.route.name)
            .collect();
        assert_eq!(dynamic, vec![RouteName::RecipeDetail]);
    }

    #[test]
    fn static_paths_resolve_to_their_routes() {
        let router = router();
        let cases = [
            ("/", RouteName::Home),
            ("/bibliotheek", RouteName::Library),
            ("/boodschappen", RouteName::ShoppingList),
            ("/profiel", RouteName::Profile),
        ];
        for (path, expected) in cases {
            let m = router.resolve(path).unwrap_or_else(|| panic!("{path} must resolve"));
            assert_eq!(m.name, expected, "path {path}");
            assert!(m.params.is_empty(), "static route {path} captures nothing");
        }
    }

    #[test]
    fn recipe_path_binds_the_id_segment() {
        let m = router().resolve("/gerecht/42").expect("must resolve");
        assert_eq!(m.name, RouteName::RecipeDetail);
        assert_eq!(m.view, ViewId::RecipeDetail);
        assert_eq!(m.params.get("id"), Some("42"));
    }

    #[test]
    fn undeclared_path_resolves_to_none() {
        let router = router();
        assert_eq!(router.resolve("/nonexistent"), None);
        assert_eq!(router.resolve("/gerecht"), None);
        assert_eq!(router.resolve("/gerecht/42/extra"), None);
    }

    #[test]
    fn trailing_and_doubled_slashes_are_tolerated() {
        let router = router();
        assert_eq!(router.resolve("/profiel/").unwrap().name, RouteName::Profile);
        assert_eq!(router.resolve("//bibliotheek").unwrap().name, RouteName::Library);
    }

    #[test]
    fn base_prefix_is_stripped_before_matching() {
        let router = Router::new("/planner", route_table()).unwrap();
        assert_eq!(router.resolve("/planner/profiel").unwrap().name, RouteName::Profile);
        assert_eq!(router.resolve("/planner").unwrap().name, RouteName::Home);
        assert_eq!(router.resolve("/planner/").unwrap().name, RouteName::Home);
        // sibling deployments must not match
        assert_eq!(router.resolve("/planner-v2/profiel"), None);
        assert_eq!(router.resolve("/profiel"), None);
    }

    #[test]
    fn path_for_inverts_static_routes() {
        let router = router();
        let path = router.path_for(RouteName::Library, &Params::new()).unwrap();
        assert_eq!(path, "/bibliotheek");
        assert_eq!(router.resolve(&path).unwrap().name, RouteName::Library);
    }

    #[test]
    fn path_for_fills_the_recipe_id() {
        let router = router();
        let mut params = Params::new();
        params.insert("id", "42");
        assert_eq!(
            router.path_for(RouteName::RecipeDetail, &params).unwrap(),
            "/gerecht/42"
        );
    }

    #[test]
    fn path_for_requires_the_id() {
        let err = router()
            .path_for(RouteName::RecipeDetail, &Params::new())
            .unwrap_err();
        assert_eq!(err, RouterError::MissingParam("id".to_string()));
    }

    #[test]
    fn path_for_respects_the_base() {
        let router = Router::new("/planner", route_table()).unwrap();
        assert_eq!(
            router.path_for(RouteName::ShoppingList, &Params::new()).unwrap(),
            "/planner/boodschappen"
        );
    }

    #[test]
    fn duplicate_names_are_rejected_at_construction() {
        let table = vec![
            Route::new("/", RouteName::Home, ViewId::Week),
            Route::new("/week", RouteName::Home, ViewId::Week),
        ];
        assert_eq!(
            Router::new("/", table).err(),
            Some(RouterError::DuplicateName(RouteName::Home))
        );
    }
}
