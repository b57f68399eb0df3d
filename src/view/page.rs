// Page renderer trait and the context handed to every slide and project page

use crate::style::Theme;
use crate::view::highlight::CodeHighlighter;
use eframe::egui;
use std::cell::RefCell;
use std::path::Path;

/// Context passed to page renderers containing shared resources
///
/// Renderers never navigate or open links themselves. They record the request
/// here and the app applies it after the frame is drawn.
pub struct PageContext<'a> {
    pub theme: Theme,
    pub image_dir: &'a Path,
    pub body_size: f32,
    pub heading_size: f32,
    pub highlighter: &'a CodeHighlighter,
    pub next_route: &'a RefCell<Option<String>>,
    pub open_link: &'a RefCell<Option<String>>,
}

impl PageContext<'_> {
    pub fn navigate(&self, path: impl Into<String>) {
        *self.next_route.borrow_mut() = Some(path.into());
    }

    pub fn open(&self, url: impl Into<String>) {
        *self.open_link.borrow_mut() = Some(url.into());
    }

    pub fn image_uri(&self, file_name: &str) -> String {
        format!("file://{}", self.image_dir.join(file_name).display())
    }
}

/// Trait for anything that draws the content of a route
pub trait PageRenderer: Send + Sync {
    /// Name of this renderer (for logging and debugging)
    fn name(&self) -> &str;

    /// Draw the page into the given UI.
    ///
    /// Returns Ok(()) on success, or Err(message) which is shown in place of the page.
    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String>;
}
