// ============================================================================
// APP - Application root: mount point, router, navigation
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{history, route_table, Params, RouteName, Router, RouterError};
use crate::state::NavState;
use crate::views;

/// Shared navigation handle passed down to views: resolves names to paths
/// and drives history + state on navigation.
#[derive(Clone)]
pub struct NavHandle {
    router: Rc<Router>,
    nav: NavState,
}

impl NavHandle {
    /// Browser path for a named route (includes the deployment base)
    pub fn path_for(&self, name: RouteName, params: &Params) -> Result<String, RouterError> {
        self.router.path_for(name, params)
    }

    /// The name of the currently rendered route, if any matched
    pub fn current_name(&self) -> Option<RouteName> {
        self.nav.current().map(|m| m.name)
    }

    /// Navigate to a browser path: push a history entry and update the
    /// navigation state, which schedules a re-render.
    pub fn navigate(&self, path: &str) {
        log::info!("🧭 [NAV] Navigating to {}", path);
        if let Err(e) = history::push(path) {
            log::error!("❌ [NAV] pushState failed: {:?}", e);
        }
        self.nav.set_current(self.router.resolve(path));
    }
}

/// Application root
pub struct App {
    root: Element,
    handle: NavHandle,
}

impl App {
    /// Build the app: claim the mount point, compile the route table and
    /// resolve the current location, and hook up navigation.
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let router = Router::new(config.base_url, route_table())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let router = Rc::new(router);

        let initial_path = history::current_path()?;
        let nav = NavState::new(router.resolve(&initial_path));
        let handle = NavHandle { router, nav };

        // Re-render on every navigation, batched through a zero-delay timeout
        handle.nav.subscribe(move || {
            Timeout::new(0, || {
                crate::rerender_app();
            })
            .forget();
        });

        // Back/forward buttons: re-resolve the location. Registered once here.
        {
            let handle = handle.clone();
            history::on_popstate(move || match history::current_path() {
                Ok(path) => handle.nav.set_current(handle.router.resolve(&path)),
                Err(e) => log::error!("❌ [APP] Could not read location: {:?}", e),
            })?;
        }

        Ok(Self { root, handle })
    }

    /// Full render of the current route into the mount point
    pub fn render(&self) -> Result<(), JsValue> {
        let current = self.handle.nav.current();

        set_inner_html(&self.root, "");
        let view = match &current {
            Some(m) => {
                log::info!("🧭 [APP] Rendering route '{}'", m.name);
                views::render_view(&self.handle, m)?
            }
            None => {
                log::warn!("⚠️ [APP] No route matches the current path");
                views::render_not_found(&self.handle)?
            }
        };
        append_child(&self.root, &view)
    }
}
