// Route dispatcher - picks the one renderer to mount for the active path

use super::registry::{Slide, SlideRegistry};
use crate::route;
use crate::view::PageRenderer;
use std::sync::Arc;

/// Result of matching a path
pub enum Dispatch<'a> {
    /// A primary slide, drawn inside the transition presenter
    Slide { index: usize, slide: &'a Slide },
    /// A standalone page (project details), drawn as is
    Page {
        path: &'a str,
        renderer: &'a Arc<dyn PageRenderer>,
    },
    Unmatched,
}

impl Dispatch<'_> {
    pub fn renderer(&self) -> Option<&Arc<dyn PageRenderer>> {
        match self {
            Dispatch::Slide { slide, .. } => Some(&slide.renderer),
            Dispatch::Page { renderer, .. } => Some(renderer),
            Dispatch::Unmatched => None,
        }
    }

    pub fn is_slide(&self) -> bool {
        matches!(self, Dispatch::Slide { .. })
    }
}

pub struct RouteDispatcher {
    registry: Arc<SlideRegistry>,
    pages: Vec<(String, Arc<dyn PageRenderer>)>,
}

impl RouteDispatcher {
    pub fn new(registry: Arc<SlideRegistry>) -> Self {
        Self {
            registry,
            pages: Vec::new(),
        }
    }

    /// Register a standalone page. Slides win over pages on equal paths.
    pub fn add_page(&mut self, path: impl Into<String>, renderer: Arc<dyn PageRenderer>) {
        let path = path.into();
        if self.registry.lookup_by_path(&path).is_some() || self.page(&path).is_some() {
            log::warn!("page {} shadows an existing route, ignored", path);
            return;
        }
        self.pages.push((path, renderer));
    }

    pub fn with_page(mut self, path: impl Into<String>, renderer: Arc<dyn PageRenderer>) -> Self {
        self.add_page(path, renderer);
        self
    }

    /// Exact-match the path against slides first, then standalone pages
    pub fn dispatch(&self, path: &str) -> Dispatch<'_> {
        if let Some(index) = self.registry.index_of(path) {
            if let Some(slide) = self.registry.get(index) {
                return Dispatch::Slide { index, slide };
            }
        }
        match self.page(path) {
            Some((path, renderer)) => Dispatch::Page {
                path: path.as_str(),
                renderer,
            },
            None => Dispatch::Unmatched,
        }
    }

    /// True exactly when the navigation bar must be hidden for this path
    pub fn suppress_chrome(&self, path: &str) -> bool {
        route::is_project_page(path)
    }

    pub fn page_paths(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|(path, _)| path.as_str())
    }

    fn page(&self, path: &str) -> Option<&(String, Arc<dyn PageRenderer>)> {
        self.pages.iter().find(|(p, _)| p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::registry::tests::{registry, Blank};

    fn dispatcher() -> RouteDispatcher {
        RouteDispatcher::new(Arc::new(registry(&["/", "/work", "/reflection"])))
            .with_page("/projects/microimpute", Arc::new(Blank("microimpute")))
            .with_page("/projects/data-schema", Arc::new(Blank("data-schema")))
    }

    #[test]
    fn test_slides_dispatch_with_index() {
        let dispatcher = dispatcher();
        match dispatcher.dispatch("/work") {
            Dispatch::Slide { index, slide } => {
                assert_eq!(index, 1);
                assert_eq!(slide.path, "/work");
            }
            _ => panic!("expected a slide"),
        }
    }

    #[test]
    fn test_pages_dispatch_by_exact_path() {
        let dispatcher = dispatcher();
        let dispatch = dispatcher.dispatch("/projects/microimpute");
        assert!(!dispatch.is_slide());
        assert_eq!(dispatch.renderer().map(|r| r.name().to_string()), Some("microimpute".into()));

        assert!(matches!(dispatcher.dispatch("/projects/microimpute/"), Dispatch::Unmatched));
        assert!(matches!(dispatcher.dispatch("/Work"), Dispatch::Unmatched));
    }

    #[test]
    fn test_unknown_paths_render_nothing() {
        let dispatcher = dispatcher();
        let dispatch = dispatcher.dispatch("/projects/unknown");
        assert!(matches!(dispatch, Dispatch::Unmatched));
        assert!(dispatch.renderer().is_none());
    }

    #[test]
    fn test_chrome_flag() {
        let dispatcher = dispatcher();
        assert!(dispatcher.suppress_chrome("/projects/microimpute"));
        assert!(dispatcher.suppress_chrome("/projects/unknown"));
        for path in ["/", "/work", "/reflection", "/elsewhere"] {
            assert!(!dispatcher.suppress_chrome(path));
        }
    }

    #[test]
    fn test_pages_cannot_shadow_slides() {
        let dispatcher = dispatcher().with_page("/work", Arc::new(Blank("impostor")));
        assert!(dispatcher.dispatch("/work").is_slide());
        assert_eq!(dispatcher.page_paths().count(), 2);
    }
}
