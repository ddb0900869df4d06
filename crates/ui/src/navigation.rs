//! Navigation seam.
//!
//! Components only ask for a route change; what a route change means (DOM
//! history, a test recorder) belongs to the [`Navigator`] implementation.

use storefront_core::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ProductDetail(ProductId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ProductDetail(id) => format!("/products/{id}"),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Route::Home);
        }
        let id = path.strip_prefix("/products/")?;
        if id.contains('/') {
            return None;
        }
        ProductId::parse(id).ok().map(Route::ProductDetail)
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Fire-and-forget route change.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// In-memory navigator: tracks the current route and every visit.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Routes navigated to, oldest first (the initial route is not included).
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<&Route> {
        self.history.pop()?;
        self.current = self.history.last().cloned().unwrap_or(Route::Home);
        Some(&self.current)
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route, "navigate");
        self.current = route.clone();
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> Route {
        Route::ProductDetail(ProductId::parse(id).unwrap())
    }

    #[test]
    fn detail_path_is_canonical() {
        assert_eq!(detail("p1").path(), "/products/p1");
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn parse_round_trips_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/products/p1"), Some(detail("p1")));
        assert_eq!(Route::parse("/products/p1/"), Some(detail("p1")));
        assert_eq!(Route::parse("/products/"), None);
        assert_eq!(Route::parse("/products/a/b"), None);
        assert_eq!(Route::parse("/cart"), None);
    }

    #[test]
    fn router_records_history_and_goes_back() {
        let mut router = Router::new();
        router.navigate(detail("p1"));
        router.navigate(detail("p2"));

        assert_eq!(router.current(), &detail("p2"));
        assert_eq!(router.history().len(), 2);

        assert_eq!(router.back(), Some(&detail("p1")));
        assert_eq!(router.back(), Some(&Route::Home));
        assert_eq!(router.back(), None);
    }
}
