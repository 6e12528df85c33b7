/// Deployment base URL.
/// Configured at compile time:
/// - Default: "/" (app served from the site root)
/// - Sub-path deployments: via BASE_URL env var (see build.rs / .env)
pub const BASE_URL: &str = match option_env!("BASE_URL") {
    Some(url) => url,
    None => "/",
};
