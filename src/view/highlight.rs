// Syntax highlighting for code samples on project pages

use crate::style::{self, Theme};
use eframe::egui;
use std::cell::RefCell;
use std::collections::HashMap;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    // Samples are static, so a finished layout can be reused every frame
    cache: RefCell<HashMap<(String, &'static str), egui::text::LayoutJob>>,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Highlight `code` written in the language with file extension `extension`
    pub fn layout(&self, code: &str, extension: &str, theme: Theme) -> egui::text::LayoutJob {
        let key = (code.to_string(), theme.code_theme());
        if let Some(job) = self.cache.borrow().get(&key) {
            return job.clone();
        }
        let job = self.highlight(code, extension, theme);
        self.cache.borrow_mut().insert(key, job.clone());
        job
    }

    fn highlight(&self, code: &str, extension: &str, theme: Theme) -> egui::text::LayoutJob {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let font_id = egui::FontId::monospace(style::CODE_FONT_SIZE);
        let mut job = egui::text::LayoutJob::default();

        let Some(code_theme) = self.theme_set.themes.get(theme.code_theme()) else {
            log::warn!("missing code theme {}", theme.code_theme());
            job.append(code, 0.0, egui::TextFormat::simple(font_id, theme.text()));
            return job;
        };

        let mut highlighter = HighlightLines::new(syntax, code_theme);
        for line in LinesWithEndings::from(code) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            if ranges.is_empty() {
                job.append(line, 0.0, egui::TextFormat::simple(font_id.clone(), theme.text()));
                continue;
            }
            for (style, text) in ranges {
                let color = egui::Color32::from_rgb(
                    style.foreground.r,
                    style.foreground.g,
                    style.foreground.b,
                );
                job.append(text, 0.0, egui::TextFormat::simple(font_id.clone(), color));
            }
        }
        job
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_all_text() {
        let highlighter = CodeHighlighter::new();
        let code = "import numpy as np\nx = np.zeros(3)\n";
        let job = highlighter.layout(code, "py", Theme::Dark);
        assert_eq!(job.text, code);
        assert!(job.sections.len() > 2);
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let highlighter = CodeHighlighter::new();
        let job = highlighter.layout("just words", "nope", Theme::Light);
        assert_eq!(job.text, "just words");
    }
}
