// ============================================================================
// PATH PATTERNS - Compiled form of a route path
// ============================================================================

use crate::router::{Params, RouterError};
use std::borrow::Cow;

/// One segment of a compiled pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal segment, matched verbatim
    Static(String),
    /// Dynamic segment (`:id`); the matched value is captured under this name
    Param(String),
}

/// A route path pattern compiled into segments
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a pattern like `/gerecht/:id`. Patterns are absolute and may
    /// only contain static and `:name` segments.
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        if !pattern.starts_with('/') {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must start with '/'",
            });
        }

        let mut segments = Vec::new();
        for seg in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = seg.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouterError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "dynamic segment has no name",
                    });
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(seg.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Match a normalized path against this pattern, capturing dynamic
    /// segment values. Segment counts must agree exactly.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segs.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (pattern_seg, path_seg) in self.segments.iter().zip(segs) {
            match pattern_seg {
                Segment::Static(expected) => {
                    if expected != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, path_seg),
            }
        }
        Some(params)
    }

    /// Render this pattern back to a concrete path, substituting dynamic
    /// segments from `params`.
    pub fn fill(&self, params: &Params) -> Result<String, RouterError> {
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            match seg {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(name) => out.push_str(params.require(name)?),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

/// Normalize a browser path for matching: collapse doubled slashes and drop
/// the trailing slash. Borrows when the path is already clean.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let needs_rebuild = !path.starts_with('/')
        || (path.ends_with('/') && path != "/")
        || path.contains("//");
    if !needs_rebuild {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len() + 1);
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_and_dynamic_segments() {
        let p = Pattern::parse("/gerecht/:id").unwrap();
        assert!(p.is_dynamic());
        assert_eq!(p.raw(), "/gerecht/:id");

        let p = Pattern::parse("/bibliotheek").unwrap();
        assert!(!p.is_dynamic());
    }

    #[test]
    fn root_pattern_matches_only_root() {
        let p = Pattern::parse("/").unwrap();
        assert!(p.match_path("/").is_some());
        assert!(p.match_path("/x").is_none());
    }

    #[test]
    fn relative_pattern_is_rejected() {
        let err = Pattern::parse("gerecht/:id").unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
    }

    #[test]
    fn unnamed_dynamic_segment_is_rejected() {
        let err = Pattern::parse("/gerecht/:").unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
    }

    #[test]
    fn captures_the_dynamic_value() {
        let p = Pattern::parse("/gerecht/:id").unwrap();
        let params = p.match_path("/gerecht/pasta-pesto").unwrap();
        assert_eq!(params.get("id"), Some("pasta-pesto"));
    }

    #[test]
    fn static_mismatch_does_not_match() {
        let p = Pattern::parse("/gerecht/:id").unwrap();
        assert!(p.match_path("/recept/42").is_none());
        assert!(p.match_path("/gerecht").is_none());
    }

    #[test]
    fn normalization_borrows_clean_paths() {
        assert!(matches!(normalize_path("/profiel"), Cow::Borrowed("/profiel")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
        assert_eq!(normalize_path("/profiel/"), "/profiel");
        assert_eq!(normalize_path("//gerecht//42"), "/gerecht/42");
        assert_eq!(normalize_path(""), "/");
    }
}
