use super::RouterError;

/// A URL path template. Segments are literals or named `:param` captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parameters captured while matching a concrete path against a pattern,
/// in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn push(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        if pattern.is_empty() {
            return Err(RouterError::invalid(pattern, "pattern is empty"));
        }
        if !pattern.starts_with('/') {
            return Err(RouterError::invalid(pattern, "pattern must start with `/`"));
        }

        // Root is the one pattern with no segments.
        if pattern == "/" {
            return Ok(Self {
                raw: pattern.to_string(),
                segments: Vec::new(),
            });
        }

        let mut segments = Vec::new();
        for segment in pattern[1..].split('/') {
            if segment.is_empty() {
                return Err(RouterError::invalid(pattern, "empty path segment"));
            }
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouterError::invalid(pattern, "parameter segment has no name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path, capturing `:param` segments. Returns `None`
    /// when the path does not fit this pattern.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        if !path.starts_with('/') {
            return None;
        }
        let path = normalize(path);

        if self.segments.is_empty() {
            return (path == "/").then(RouteParams::default);
        }
        if path == "/" {
            return None;
        }

        let concrete: Vec<&str> = path[1..].split('/').collect();
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, value) in self.segments.iter().zip(concrete) {
            match segment {
                Segment::Literal(lit) if lit == value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push(name, value),
            }
        }
        Some(params)
    }

    /// Two patterns collide when they match exactly the same set of paths:
    /// identical literals, parameters in the same positions (names ignored).
    pub(crate) fn same_shape(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }
}

/// Strip a single trailing slash, keeping root intact.
pub(crate) fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed_patterns() {
        assert!(RoutePattern::parse("").is_err());
        assert!(RoutePattern::parse("product").is_err());
        assert!(RoutePattern::parse("/product//detail").is_err());
        assert!(RoutePattern::parse("/product/:").is_err());
    }

    #[test]
    fn test_root_matches_only_root() {
        let root = RoutePattern::parse("/").unwrap();
        assert!(root.matches("/").is_some());
        assert!(root.matches("/product").is_none());
    }

    #[test]
    fn test_literal_match() {
        let pattern = RoutePattern::parse("/account-list-page").unwrap();
        assert!(pattern.matches("/account-list-page").is_some());
        assert!(pattern.matches("/account-list-page/").is_some());
        assert!(pattern.matches("/address-list-page").is_none());
        assert!(pattern.matches("/account-list-page/extra").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = RoutePattern::parse("/product/:productId").unwrap();
        let params = pattern.matches("/product/42").unwrap();
        assert_eq!(params.get("productId"), Some("42"));
        assert_eq!(params.len(), 1);
        assert!(pattern.matches("/product").is_none());
        assert!(pattern.matches("/brand/42").is_none());
    }

    #[test]
    fn test_same_shape_ignores_param_names() {
        let a = RoutePattern::parse("/product/:productId").unwrap();
        let b = RoutePattern::parse("/product/:id").unwrap();
        let c = RoutePattern::parse("/brand/:brandId").unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
