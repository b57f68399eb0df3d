// Content blocks shared by the slides and the project pages

use crate::style::{self, Theme};
use crate::view::PageContext;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    /// Boxed list with a title, e.g. "Key capabilities"
    Card {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Boxed title and explanation, e.g. "Method 1: ..."
    Callout {
        title: &'static str,
        body: &'static str,
    },
    Code {
        caption: &'static str,
        language: &'static str,
        source: &'static str,
    },
    /// Image from the image directory, replaced by `fallback` if it cannot be loaded
    Image {
        file: &'static str,
        alt: &'static str,
        fallback: &'static str,
    },
    Links(&'static [Link]),
    /// A notebook or documentation pointer with its own heading
    Notebook {
        title: &'static str,
        link: Link,
    },
}

pub fn render_blocks(ui: &mut egui::Ui, blocks: &[Block], context: &PageContext) {
    for block in blocks {
        render_block(ui, block, context);
        ui.add_space(10.0);
    }
}

fn render_block(ui: &mut egui::Ui, block: &Block, context: &PageContext) {
    let theme = context.theme;
    match *block {
        Block::Paragraph(text) => paragraph(ui, text, context),
        Block::Bullets(items) => bullets(ui, items, context),
        Block::Card { title, items } => {
            style::card_frame(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(title).strong().size(context.body_size + 2.0));
                ui.add_space(6.0);
                bullets(ui, items, context);
            });
        }
        Block::Callout { title, body } => {
            style::card_frame(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(title)
                        .strong()
                        .color(theme.accent())
                        .size(context.body_size),
                );
                paragraph(ui, body, context);
            });
        }
        Block::Code {
            caption,
            language,
            source,
        } => {
            ui.label(egui::RichText::new(caption).strong().color(theme.muted()));
            egui::Frame::new()
                .fill(egui::Color32::from_black_alpha(80))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    egui::ScrollArea::horizontal()
                        .id_salt(caption)
                        .show(ui, |ui| {
                            ui.label(context.highlighter.layout(source, language, theme));
                        });
                });
        }
        Block::Image {
            file,
            alt,
            fallback,
        } => image_or_placeholder(ui, context, file, alt, fallback),
        Block::Links(links) => link_row(ui, links, context),
        Block::Notebook { title, link } => {
            style::card_frame(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(title).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        link_button(ui, link, context);
                    });
                });
            });
        }
    }
}

pub fn heading(ui: &mut egui::Ui, text: &str, context: &PageContext) {
    ui.label(
        egui::RichText::new(text)
            .size(context.heading_size)
            .strong()
            .color(context.theme.text()),
    );
}

pub fn section_title(ui: &mut egui::Ui, text: &str, context: &PageContext) {
    ui.label(
        egui::RichText::new(text)
            .size(context.body_size * 1.5)
            .strong()
            .color(context.theme.text()),
    );
    ui.add_space(6.0);
}

pub fn paragraph(ui: &mut egui::Ui, text: &str, context: &PageContext) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(context.body_size)
                .color(context.theme.text()),
        )
        .wrap(),
    );
}

pub fn bullets(ui: &mut egui::Ui, items: &[&str], context: &PageContext) {
    for item in items {
        ui.horizontal_top(|ui| {
            ui.label(egui::RichText::new("•").color(context.theme.accent()));
            paragraph(ui, item, context);
        });
    }
}

pub fn link_button(ui: &mut egui::Ui, link: Link, context: &PageContext) {
    let text = egui::RichText::new(link.label).color(context.theme.accent());
    if ui
        .add(egui::Button::new(text).frame(true))
        .on_hover_text(link.url)
        .clicked()
    {
        context.open(link.url);
    }
}

pub fn link_row(ui: &mut egui::Ui, links: &[Link], context: &PageContext) {
    ui.horizontal_wrapped(|ui| {
        for link in links {
            link_button(ui, *link, context);
        }
    });
}

/// Show an image from the image directory, or a labelled placeholder if it fails to load
pub fn image_or_placeholder(
    ui: &mut egui::Ui,
    context: &PageContext,
    file: &str,
    alt: &str,
    fallback: &str,
) {
    let uri = context.image_uri(file);
    match ui.ctx().try_load_image(&uri, egui::load::SizeHint::default()) {
        Ok(egui::load::ImagePoll::Ready { .. }) => {
            ui.add(
                egui::Image::new(uri)
                    .max_height(style::IMAGE_MAX_HEIGHT)
                    .maintain_aspect_ratio(true)
                    .corner_radius(egui::CornerRadius::same(12)),
            )
            .on_hover_text(alt);
        }
        Ok(egui::load::ImagePoll::Pending { .. }) => {
            ui.spinner();
        }
        Err(err) => {
            let id = egui::Id::new(("image_failed", file));
            if !ui.data(|d| d.get_temp::<bool>(id).unwrap_or(false)) {
                log::debug!("image {} unavailable: {}", uri, err);
                ui.data_mut(|d| d.insert_temp(id, true));
            }
            placeholder(ui, context.theme, fallback);
        }
    }
}

pub fn placeholder(ui: &mut egui::Ui, theme: Theme, label: &str) {
    style::card_frame(theme).show(ui, |ui| {
        ui.set_min_size(egui::vec2(220.0, 160.0));
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(label).color(theme.muted()));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CodeHighlighter;
    use std::cell::RefCell;
    use std::path::Path;

    fn failed_flag(ctx: &egui::Context, file: &str) -> Option<bool> {
        ctx.data(|d| d.get_temp::<bool>(egui::Id::new(("image_failed", file))))
    }

    #[test]
    fn test_unloadable_image_falls_back_to_placeholder() {
        // No image loaders installed, so every image load fails
        let ctx = egui::Context::default();
        let highlighter = CodeHighlighter::new();
        let next_route = RefCell::new(None);
        let open_link = RefCell::new(None);
        let context = PageContext {
            theme: Theme::Dark,
            image_dir: Path::new("/nonexistent/images"),
            body_size: 16.0,
            heading_size: 32.0,
            highlighter: &highlighter,
            next_route: &next_route,
            open_link: &open_link,
        };

        assert_eq!(failed_flag(&ctx, "missing.png"), None);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                image_or_placeholder(ui, &context, "missing.png", "alt", "Photo unavailable");
            });
        });
        assert_eq!(failed_flag(&ctx, "missing.png"), Some(true));
        assert!(next_route.into_inner().is_none());
        assert!(open_link.into_inner().is_none());
    }
}
