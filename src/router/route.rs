// ============================================================================
// ROUTE TABLE - The app's five routes as plain data
// ============================================================================

use std::fmt;

/// Symbolic route identifier, used for programmatic navigation instead of
/// literal path strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Library,
    ShoppingList,
    Profile,
    RecipeDetail,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Library => "library",
            RouteName::ShoppingList => "shopping-list",
            RouteName::Profile => "profile",
            RouteName::RecipeDetail => "recipe-detail",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque tag for the view a route renders. The table carries no rendering
/// logic; `views::render_view` maps tags to render functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Week,
    Library,
    ShoppingList,
    Profile,
    RecipeDetail,
}

/// One route table entry: a path pattern bound to a named view
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub view: ViewId,
}

impl Route {
    pub fn new(path: &'static str, name: RouteName, view: ViewId) -> Self {
        Self { path, name, view }
    }
}

/// The application's route table. Fixed at startup; `/gerecht/:id` is the
/// only entry with a dynamic segment.
pub fn route_table() -> Vec<Route> {
    vec![
        Route::new("/", RouteName::Home, ViewId::Week),
        Route::new("/bibliotheek", RouteName::Library, ViewId::Library),
        Route::new("/boodschappen", RouteName::ShoppingList, ViewId::ShoppingList),
        Route::new("/profiel", RouteName::Profile, ViewId::Profile),
        Route::new("/gerecht/:id", RouteName::RecipeDetail, ViewId::RecipeDetail),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_render_their_wire_form() {
        assert_eq!(RouteName::ShoppingList.to_string(), "shopping-list");
        assert_eq!(RouteName::RecipeDetail.to_string(), "recipe-detail");
    }

    #[test]
    fn table_has_the_five_routes_in_order() {
        let paths: Vec<&str> = route_table().iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/", "/bibliotheek", "/boodschappen", "/profiel", "/gerecht/:id"]
        );
    }
}
