// ============================================================================
// NAV STATE - The current route as reactive state
// ============================================================================

use crate::router::RouteMatch;
use crate::state::ReactiveState;

/// Navigation state: `None` means the current path matched no route (the
/// not-found view renders).
#[derive(Clone)]
pub struct NavState {
    current: ReactiveState<Option<RouteMatch>>,
}

impl NavState {
    pub fn new(initial: Option<RouteMatch>) -> Self {
        Self {
            current: ReactiveState::new(initial),
        }
    }

    pub fn current(&self) -> Option<RouteMatch> {
        self.current.with(|c| c.clone())
    }

    /// Replace the current route; subscribers (the re-render hook) fire
    pub fn set_current(&self, route: Option<RouteMatch>) {
        self.current.set(route);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{route_table, RouteName, Router};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn navigation_updates_fire_subscribers() {
        let router = Router::new("/", route_table()).unwrap();
        let nav = NavState::new(router.resolve("/"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let nav_clone = nav.clone();
        nav.subscribe(move || {
            seen_clone
                .borrow_mut()
                .push(nav_clone.current().map(|m| m.name));
        });

        nav.set_current(router.resolve("/gerecht/42"));
        nav.set_current(router.resolve("/nonexistent"));

        assert_eq!(*seen.borrow(), vec![Some(RouteName::RecipeDetail), None]);
    }
}
