use serde::{Deserialize, Serialize};
use crate::utils::constants::BASE_URL;

/// Application configuration, injected into `App::new` so tests and
/// alternative deployments can construct isolated instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root prefix under which all routes are served
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_a_valid_router_base() {
        use crate::router::{route_table, RouteName, Router};

        let config = AppConfig::default();
        let router = Router::new(config.base_url, route_table()).unwrap();
        let home = router.path_for(RouteName::Home, &Default::default()).unwrap();
        assert_eq!(router.resolve(&home).unwrap().name, RouteName::Home);
    }
}
