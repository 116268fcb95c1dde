use super::pattern::normalize;
use super::{RouteParams, RoutePattern, RouterError};

/// Ordered table of (pattern, page) entries. Resolution is total: paths no
/// entry matches resolve to the fallback page supplied at build time.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
    fallback: P,
}

#[derive(Debug, Clone)]
struct RouteEntry<P> {
    pattern: RoutePattern,
    page: P,
}

/// Result of resolving a concrete path: the page to mount, the captured
/// parameters, and the normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<P> {
    pub page: P,
    pub params: RouteParams,
    pub path: String,
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder<P> {
    routes: Vec<(String, P)>,
}

impl<P> RouteTableBuilder<P> {
    pub fn route(mut self, pattern: impl Into<String>, page: P) -> Self {
        self.routes.push((pattern.into(), page));
        self
    }

    /// Parse every pattern and reject colliding entries up front. A table
    /// that would need first-match tie-breaking between identical patterns
    /// is a construction error, not a runtime quirk.
    pub fn build(self, fallback: P) -> Result<RouteTable<P>, RouterError> {
        let mut entries: Vec<RouteEntry<P>> = Vec::with_capacity(self.routes.len());

        for (raw, page) in self.routes {
            let pattern = RoutePattern::parse(&raw)?;
            if entries.iter().any(|e| e.pattern.same_shape(&pattern)) {
                return Err(RouterError::DuplicateRoute(raw));
            }
            entries.push(RouteEntry { pattern, page });
        }

        Ok(RouteTable { entries, fallback })
    }
}

impl<P: Clone> RouteTable<P> {
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// First matching entry wins; registration order is the match order.
    pub fn resolve(&self, path: &str) -> RouteMatch<P> {
        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                return RouteMatch {
                    page: entry.page.clone(),
                    params,
                    path: normalize(path).to_string(),
                };
            }
        }

        RouteMatch {
            page: self.fallback.clone(),
            params: RouteParams::default(),
            path: normalize(path).to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
