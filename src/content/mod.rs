// Presentation content - the slide sequence and the project pages

pub mod background;
pub mod intro;
pub mod london;
pub mod projects;
pub mod reflection;
pub mod work;

use crate::deck::{RouteDispatcher, Slide, SlideRegistry};
use crate::view::PageRenderer;
use std::sync::Arc;

/// The arrow-key sequence, in presentation order
pub fn slide_registry() -> SlideRegistry {
    SlideRegistry::new([
        Slide::new("/", "Intro", Arc::new(intro::Intro::new())),
        Slide::new("/background", "Background", Arc::new(background::Background)),
        Slide::new("/work", "My work", Arc::new(work::Work)),
        Slide::new("/london", "London", Arc::new(london::London)),
        Slide::new("/reflection", "Reflection", Arc::new(reflection::Reflection)),
    ])
}

/// Slides plus every project detail page
pub fn route_dispatcher(registry: Arc<SlideRegistry>) -> RouteDispatcher {
    projects::all()
        .into_iter()
        .fold(RouteDispatcher::new(registry), |dispatcher, page| {
            let renderer: Arc<dyn PageRenderer> = Arc::new(page);
            dispatcher.with_page(page.path(), renderer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Dispatch;
    use crate::route;

    #[test]
    fn test_slide_order() {
        let registry = slide_registry();
        let paths: Vec<&str> = registry.iter().map(|s| s.path).collect();
        assert_eq!(paths, ["/", "/background", "/work", "/london", "/reflection"]);
        assert_eq!(registry.index_of(route::WORK_OVERVIEW), Some(2));
    }

    #[test]
    fn test_every_work_card_targets_a_page() {
        let dispatcher = route_dispatcher(Arc::new(slide_registry()));
        for card in &work::CARDS {
            let path = route::project_path(card.slug);
            match dispatcher.dispatch(&path) {
                Dispatch::Page { renderer, .. } => assert_eq!(renderer.name(), card.slug),
                _ => panic!("{} has no page", path),
            }
        }
    }

    #[test]
    fn test_project_pages_hide_chrome_slides_do_not() {
        let registry = Arc::new(slide_registry());
        let dispatcher = route_dispatcher(registry.clone());
        for slide in registry.iter() {
            assert!(!dispatcher.suppress_chrome(slide.path));
        }
        for path in dispatcher.page_paths() {
            assert!(dispatcher.suppress_chrome(path));
        }
    }
}
