// ============================================================================
// PARAMS - Typed capture of dynamic path segments
// ============================================================================

use crate::router::RouterError;

/// Values captured from dynamic path segments, keyed by parameter name.
///
/// Kept as a small ordered list; route patterns carry at most a handful of
/// parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but a missing parameter is an error instead of a silent
    /// `None`; use for parameters the route pattern guarantees.
    pub fn require(&self, name: &str) -> Result<&str, RouterError> {
        self.get(name)
            .ok_or_else(|| RouterError::MissingParam(name.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_require() {
        let mut params = Params::new();
        params.insert("id", "42");

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.require("id").unwrap(), "42");
        assert_eq!(params.get("slug"), None);
        assert_eq!(
            params.require("slug").unwrap_err(),
            RouterError::MissingParam("slug".to_string())
        );
    }
}
