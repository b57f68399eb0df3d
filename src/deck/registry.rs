// Ordered slide registry - the primary navigable sequence

use crate::view::PageRenderer;
use std::sync::Arc;

/// One entry in the arrow-key sequence
#[derive(Clone)]
pub struct Slide {
    pub path: &'static str,
    pub display_name: &'static str,
    pub renderer: Arc<dyn PageRenderer>,
}

impl Slide {
    pub fn new(
        path: &'static str,
        display_name: &'static str,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            path,
            display_name,
            renderer,
        }
    }
}

impl std::fmt::Debug for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("path", &self.path)
            .field("display_name", &self.display_name)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

/// Immutable once built; paths are unique.
#[derive(Debug)]
pub struct SlideRegistry {
    slides: Vec<Slide>,
}

impl SlideRegistry {
    /// Build the registry. Later duplicates of an already registered path are dropped.
    pub fn new(slides: impl IntoIterator<Item = Slide>) -> Self {
        let mut unique: Vec<Slide> = Vec::new();
        for slide in slides {
            if unique.iter().any(|s| s.path == slide.path) {
                log::warn!("duplicate slide path {} ignored", slide.path);
                continue;
            }
            unique.push(slide);
        }
        Self { slides: unique }
    }

    pub fn lookup_by_path(&self, path: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.path == path)
    }

    pub fn index_of(&self, path: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.path == path)
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::view::{PageContext, PageRenderer};
    use eframe::egui;

    pub(crate) struct Blank(pub &'static str);

    impl PageRenderer for Blank {
        fn name(&self) -> &str {
            self.0
        }

        fn render(&self, _ui: &mut egui::Ui, _context: &PageContext) -> Result<(), String> {
            Ok(())
        }
    }

    pub(crate) fn registry(paths: &[&'static str]) -> SlideRegistry {
        SlideRegistry::new(
            paths
                .iter()
                .map(|&p| Slide::new(p, p, Arc::new(Blank(p)))),
        )
    }

    #[test]
    fn test_lookup_by_path() {
        let registry = registry(&["/", "/background", "/work"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup_by_path("/work").map(|s| s.path), Some("/work"));
        assert_eq!(registry.index_of("/background"), Some(1));
        assert!(registry.lookup_by_path("/projects/microimpute").is_none());
        assert_eq!(registry.last_index(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let registry = registry(&["/b", "/a", "/c"]);
        let paths: Vec<_> = registry.iter().map(|s| s.path).collect();
        assert_eq!(paths, vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn test_duplicate_paths_are_dropped() {
        let registry = registry(&["/", "/work", "/"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of("/"), Some(0));
    }
}
