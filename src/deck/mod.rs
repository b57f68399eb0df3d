// Deck - registry, controller, dispatcher and presenter wired to one history

pub mod dispatch;
pub mod registry;
pub mod transition;

pub use dispatch::{Dispatch, RouteDispatcher};
pub use registry::{Slide, SlideRegistry};
pub use transition::{Frame, Phase, TransitionPresenter};

use crate::config::{TransitionConfig, UnmatchedRoute};
use crate::route;
use crate::state::{History, NavigationController, Router};
use crate::view::PageRenderer;
use std::sync::Arc;
use std::time::Duration;

/// User intents that move through the deck
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    Back,
    Forward,
}

pub struct Deck {
    history: History,
    navigation: NavigationController,
    dispatcher: RouteDispatcher,
    presenter: TransitionPresenter,
    unmatched: UnmatchedRoute,
    seen_revision: Option<u64>,
}

impl Deck {
    pub fn new(
        dispatcher: RouteDispatcher,
        registry: Arc<SlideRegistry>,
        start_route: &str,
        timing: &TransitionConfig,
        unmatched: UnmatchedRoute,
    ) -> Self {
        let mut deck = Self {
            history: History::new(&route::normalize(start_route)),
            navigation: NavigationController::new(registry),
            dispatcher,
            presenter: TransitionPresenter::new(
                Duration::from_millis(timing.enter_ms),
                Duration::from_millis(timing.exit_ms),
            ),
            unmatched,
            seen_revision: None,
        };
        deck.reconcile();
        deck
    }

    pub fn location(&self) -> &str {
        self.history.location()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    /// The navigation bar is hidden on project pages only
    pub fn chrome_visible(&self) -> bool {
        !self.dispatcher.suppress_chrome(self.history.location())
    }

    /// Navigation bar button to highlight: the kept index whenever the bar is shown
    pub fn highlighted_slide(&self) -> Option<usize> {
        self.chrome_visible().then(|| self.navigation.current_index())
    }

    pub fn dispatch(&self) -> Dispatch<'_> {
        self.dispatcher.dispatch(self.history.location())
    }

    pub fn dispatch_path<'a>(&'a self, path: &str) -> Dispatch<'a> {
        self.dispatcher.dispatch(path)
    }

    pub fn presenter(&self) -> &TransitionPresenter {
        &self.presenter
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Back => self.back(),
            Command::Forward => self.forward(),
        }
    }

    /// Arrow-key step forward from the retained slide index, whatever the
    /// active route is.
    pub fn advance(&mut self) -> bool {
        let moved = self.navigation.advance(&mut self.history);
        self.reconcile();
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.navigation.retreat(&mut self.history);
        self.reconcile();
        moved
    }

    /// Explicit selection from the navigation bar
    pub fn select(&mut self, index: usize) -> bool {
        let moved = self.navigation.go_to(index, &mut self.history);
        self.reconcile();
        moved
    }

    /// Navigate straight to a path (address bar, project cards, links)
    pub fn open(&mut self, path: &str) {
        log::info!("open {}", path);
        self.history.navigate(path);
        self.reconcile();
    }

    pub fn back(&mut self) -> bool {
        let moved = self.history.go_back().is_some();
        self.reconcile();
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.history.go_forward().is_some();
        self.reconcile();
        moved
    }

    /// Route -> index pass, run after anything that may have moved the location
    pub fn reconcile(&mut self) {
        if self.seen_revision == Some(self.history.revision()) {
            return;
        }

        let location = self.history.location().to_string();
        if matches!(self.dispatcher.dispatch(&location), Dispatch::Unmatched) {
            log::warn!("no route matches {}", location);
            if self.unmatched == UnmatchedRoute::FirstSlide {
                if let Some(first) = self.navigation.registry().get(0) {
                    let first = first.path;
                    self.history.replace(first);
                }
            }
        }

        self.seen_revision = Some(self.history.revision());
        let location = self.history.location().to_string();
        if self.navigation.sync_with_route(&location) {
            log::debug!("slide index -> {}", self.navigation.current_index());
        }
        log::debug!(
            "{} renders {}",
            location,
            self.dispatch().renderer().map_or("nothing", |r| r.name())
        );
    }

    /// Feed the active route to the transition presenter; call once per frame.
    pub fn animate(&mut self, now: f64) {
        let location = self.history.location();
        if self.dispatcher.dispatch(location).is_slide() {
            self.presenter.show(location, now);
        } else {
            self.presenter.clear();
        }
    }

    pub fn unmatched_policy(&self) -> UnmatchedRoute {
        self.unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn deck_at(start: &str) -> Deck {
        deck_with(start, UnmatchedRoute::Empty)
    }

    fn deck_with(start: &str, unmatched: UnmatchedRoute) -> Deck {
        let registry = Arc::new(content::slide_registry());
        let dispatcher = content::route_dispatcher(registry.clone());
        Deck::new(
            dispatcher,
            registry,
            start,
            &TransitionConfig::default(),
            unmatched,
        )
    }

    #[test]
    fn test_three_right_arrows_reach_london() {
        let mut deck = deck_at("/");
        assert_eq!(deck.current_index(), 0);
        for _ in 0..3 {
            assert!(deck.apply(Command::Advance));
        }
        assert_eq!(deck.location(), "/london");
        assert_eq!(deck.current_index(), 3);
        assert!(deck.chrome_visible());
    }

    #[test]
    fn test_deep_link_to_project_page() {
        let deck = deck_at("/projects/microimpute");
        assert!(!deck.chrome_visible());
        match deck.dispatch() {
            Dispatch::Page { path, renderer } => {
                assert_eq!(path, "/projects/microimpute");
                assert_eq!(renderer.name(), "microimpute");
            }
            _ => panic!("expected the microimpute page"),
        }
    }

    #[test]
    fn test_project_page_after_browsing() {
        let mut deck = deck_at("/");
        deck.apply(Command::Advance);
        deck.apply(Command::Advance);
        deck.open("/projects/microimpute");
        assert!(!deck.chrome_visible());
        assert_eq!(deck.dispatch().renderer().map(|r| r.name().to_string()), Some("microimpute".to_string()));
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn test_right_arrow_on_last_slide_stays() {
        let mut deck = deck_at("/reflection");
        assert_eq!(deck.current_index(), 4);
        let revision = deck.history().revision();
        assert!(!deck.apply(Command::Advance));
        assert_eq!(deck.location(), "/reflection");
        assert_eq!(deck.history().revision(), revision);
    }

    #[test]
    fn test_left_arrow_on_first_slide_stays() {
        let mut deck = deck_at("/");
        assert!(!deck.apply(Command::Retreat));
        assert_eq!(deck.location(), "/");
    }

    #[test]
    fn test_start_route_is_normalized_like_the_address_bar() {
        let deck = deck_at(" projects/microimpute/ ");
        assert_eq!(deck.location(), "/projects/microimpute");
        assert!(matches!(deck.dispatch(), Dispatch::Page { .. }));

        let deck = deck_at("london");
        assert_eq!(deck.current_index(), 3);
    }

    #[test]
    fn test_every_slide_is_deep_linkable() {
        let registry = content::slide_registry();
        for (i, slide) in registry.iter().enumerate() {
            let deck = deck_at(slide.path);
            assert_eq!(deck.current_index(), i);
            assert!(deck.chrome_visible());
        }
    }

    #[test]
    fn test_history_back_reconciles_index() {
        let mut deck = deck_at("/");
        deck.select(4);
        deck.select(1);
        assert!(deck.apply(Command::Back));
        assert_eq!(deck.location(), "/reflection");
        assert_eq!(deck.current_index(), 4);
        assert!(deck.apply(Command::Forward));
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_right_arrow_on_project_page_continues_from_work() {
        let mut deck = deck_at("/work");
        deck.open("/projects/microimpute");
        assert!(deck.apply(Command::Advance));
        assert_eq!(deck.location(), "/london");
        assert_eq!(deck.current_index(), 3);
        assert!(deck.chrome_visible());
    }

    #[test]
    fn test_left_arrow_on_project_page_retreats_from_work() {
        let mut deck = deck_at("/work");
        deck.open("/projects/data-schema");
        assert!(deck.apply(Command::Retreat));
        assert_eq!(deck.location(), "/background");
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_arrows_on_unmatched_route_use_kept_index() {
        let mut deck = deck_at("/background");
        deck.open("/nowhere");
        assert!(deck.apply(Command::Advance));
        assert_eq!(deck.location(), "/work");
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn test_deep_linked_project_page_advances_from_first_slide() {
        let mut deck = deck_at("/projects/cross-repo");
        assert_eq!(deck.current_index(), 0);
        assert!(deck.apply(Command::Advance));
        assert_eq!(deck.location(), "/background");
    }

    #[test]
    fn test_unmatched_route_renders_nothing_by_default() {
        let mut deck = deck_at("/background");
        deck.open("/nowhere");
        assert!(matches!(deck.dispatch(), Dispatch::Unmatched));
        assert!(deck.chrome_visible());
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn test_unmatched_route_keeps_slide_highlighted() {
        let mut deck = deck_at("/london");
        assert_eq!(deck.highlighted_slide(), Some(3));
        deck.open("/nowhere");
        assert!(!deck.navigation().is_active());
        assert_eq!(deck.highlighted_slide(), Some(3));

        deck.open("/projects/microimpute");
        assert_eq!(deck.highlighted_slide(), None);
    }

    #[test]
    fn test_unmatched_route_can_redirect() {
        let mut deck = deck_with("/background", UnmatchedRoute::FirstSlide);
        deck.open("/nowhere");
        assert_eq!(deck.location(), "/");
        assert_eq!(deck.current_index(), 0);
        assert!(deck.history().can_go_back());
    }

    #[test]
    fn test_presenter_follows_slides_only() {
        let mut deck = deck_at("/");
        deck.animate(0.0);
        assert_eq!(deck.presenter().phase(), Phase::Entering);

        deck.open("/projects/cross-repo");
        deck.animate(0.1);
        assert_eq!(deck.presenter().phase(), Phase::Removed);

        deck.apply(Command::Back);
        deck.animate(0.2);
        assert_eq!(deck.presenter().frame(0.2).map(|f| f.route), Some("/"));
    }
}
