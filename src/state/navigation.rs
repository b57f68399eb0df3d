// Navigation controller - current slide index kept in sync with the active route
use crate::deck::SlideRegistry;
use crate::state::Router;
use std::sync::Arc;

/// Index changes push a route (index -> route); route changes from anywhere
/// else come back through `sync_with_route` (route -> index).
pub struct NavigationController {
    registry: Arc<SlideRegistry>,
    current_index: usize,
    active: bool,
}

impl NavigationController {
    pub fn new(registry: Arc<SlideRegistry>) -> Self {
        Self {
            registry,
            current_index: 0,
            active: true,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// False while the active route is not a slide (e.g. a project page)
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    /// Fraction of the deck seen so far, in (0, 1]
    pub fn progress(&self) -> f32 {
        if self.registry.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f32 / self.registry.len() as f32
    }

    /// Move to the next slide. No-op on the last one.
    pub fn advance(&mut self, router: &mut impl Router) -> bool {
        if self.registry.is_empty() || self.current_index >= self.registry.last_index() {
            return false;
        }
        self.set_index(self.current_index + 1, router);
        true
    }

    /// Move to the previous slide. No-op on the first one.
    pub fn retreat(&mut self, router: &mut impl Router) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.set_index(self.current_index - 1, router);
        true
    }

    /// Jump straight to a slide. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, router: &mut impl Router) -> bool {
        if index >= self.registry.len() {
            log::debug!("ignoring selection of slide {} (only {})", index, self.registry.len());
            return false;
        }
        self.set_index(index, router);
        true
    }

    /// Re-derive the index from a route that changed outside the controller.
    ///
    /// Returns true when the index moved. Paths that are not slides leave the
    /// index alone and mark the controller inactive.
    pub fn sync_with_route(&mut self, path: &str) -> bool {
        match self.registry.index_of(path) {
            Some(index) => {
                self.active = true;
                if index == self.current_index {
                    return false;
                }
                log::debug!("route {} reconciled to slide {}", path, index);
                self.current_index = index;
                true
            }
            None => {
                self.active = false;
                false
            }
        }
    }

    fn set_index(&mut self, index: usize, router: &mut impl Router) {
        self.current_index = index;
        self.active = true;
        if let Some(slide) = self.registry.get(index) {
            log::debug!("slide {} -> {}", index, slide.path);
            router.navigate(slide.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::registry::tests::registry;
    use crate::state::History;

    const PATHS: [&str; 5] = ["/", "/background", "/work", "/london", "/reflection"];

    fn controller() -> (NavigationController, History) {
        (
            NavigationController::new(Arc::new(registry(&PATHS))),
            History::new("/"),
        )
    }

    #[test]
    fn test_go_to_every_index() {
        let (mut nav, mut router) = controller();
        for i in 0..PATHS.len() {
            assert!(nav.go_to(i, &mut router));
            assert_eq!(nav.current_index(), i);
            assert_eq!(router.location(), PATHS[i]);
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let (mut nav, mut router) = controller();
        nav.go_to(2, &mut router);
        assert!(!nav.go_to(5, &mut router));
        assert!(!nav.go_to(usize::MAX, &mut router));
        assert_eq!(nav.current_index(), 2);
        assert_eq!(router.location(), "/work");
    }

    #[test]
    fn test_advance_stops_at_last() {
        let (mut nav, mut router) = controller();
        nav.go_to(4, &mut router);
        let revision = router.revision();
        assert!(!nav.advance(&mut router));
        assert_eq!(nav.current_index(), 4);
        assert_eq!(router.revision(), revision);
    }

    #[test]
    fn test_retreat_stops_at_first() {
        let (mut nav, mut router) = controller();
        assert!(!nav.retreat(&mut router));
        assert_eq!(nav.current_index(), 0);
        assert_eq!(router.revision(), 0);
    }

    #[test]
    fn test_advance_and_retreat_push_routes() {
        let (mut nav, mut router) = controller();
        nav.advance(&mut router);
        nav.advance(&mut router);
        assert_eq!(router.location(), "/work");
        nav.retreat(&mut router);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(router.location(), "/background");
    }

    #[test]
    fn test_deep_link_reconciles_index() {
        let (mut nav, _) = controller();
        for (i, path) in PATHS.iter().enumerate() {
            nav.sync_with_route(path);
            assert_eq!(nav.current_index(), i);
            assert!(nav.is_active());
        }
    }

    #[test]
    fn test_sync_short_circuits_when_unchanged() {
        let (mut nav, mut router) = controller();
        nav.go_to(3, &mut router);
        assert!(!nav.sync_with_route("/london"));
        assert!(nav.sync_with_route("/work"));
    }

    #[test]
    fn test_non_slide_route_keeps_index_and_deactivates() {
        let (mut nav, mut router) = controller();
        nav.go_to(2, &mut router);
        assert!(!nav.sync_with_route("/projects/microimpute"));
        assert_eq!(nav.current_index(), 2);
        assert!(!nav.is_active());

        nav.sync_with_route("/work");
        assert!(nav.is_active());
    }

    #[test]
    fn test_progress() {
        let (mut nav, mut router) = controller();
        assert_eq!(nav.progress(), 0.2);
        nav.go_to(4, &mut router);
        assert_eq!(nav.progress(), 1.0);
    }

    #[test]
    fn test_empty_registry_is_inert() {
        let mut nav = NavigationController::new(Arc::new(registry(&[])));
        let mut router = History::new("/");
        assert!(!nav.advance(&mut router));
        assert!(!nav.retreat(&mut router));
        assert!(!nav.go_to(0, &mut router));
        assert_eq!(nav.progress(), 0.0);
    }
}
