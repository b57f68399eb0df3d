// Project detail pages - one shared layout, one data file per project

mod congressional_districts;
mod cross_repo;
mod data_schema;
mod microcalibrate;
mod microimpute;
mod parameter_updates;

use crate::route;
use crate::style;
use crate::view::blocks::{self, Block, Link};
use crate::view::{PageContext, PageRenderer};
use eframe::egui;

pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

pub struct NextSteps {
    pub intro: &'static str,
    pub items: &'static [&'static str],
    pub issues: &'static [Link],
}

pub struct ProjectPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
    pub next_steps: NextSteps,
}

impl ProjectPage {
    pub fn path(&self) -> String {
        route::project_path(self.slug)
    }

    fn render_next_steps(&self, ui: &mut egui::Ui, context: &PageContext) {
        let steps = &self.next_steps;
        style::highlight_frame(context.theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            blocks::section_title(ui, "🎯 Next steps", context);
            blocks::paragraph(ui, steps.intro, context);
            if !steps.items.is_empty() {
                ui.add_space(6.0);
                blocks::bullets(ui, steps.items, context);
            }
            if !steps.issues.is_empty() {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("Related GitHub issues:").color(context.theme.muted()));
                blocks::link_row(ui, steps.issues, context);
            }
        });
    }
}

impl PageRenderer for ProjectPage {
    fn name(&self) -> &str {
        self.slug
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        egui::ScrollArea::vertical()
            .id_salt(self.slug)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                style::centered_column(ui, |ui| {
                    ui.add_space(20.0);
                    if ui.button("← Back to work overview").clicked() {
                        context.navigate(route::WORK_OVERVIEW);
                    }
                    ui.add_space(16.0);
                    blocks::heading(ui, self.title, context);
                    ui.label(
                        egui::RichText::new(self.subtitle)
                            .size(context.body_size + 2.0)
                            .color(context.theme.muted()),
                    );
                    ui.add_space(24.0);

                    for section in self.sections {
                        style::card_frame(context.theme).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            blocks::section_title(ui, section.title, context);
                            blocks::render_blocks(ui, section.blocks, context);
                        });
                        ui.add_space(style::CARD_SPACING);
                    }

                    self.render_next_steps(ui, context);
                    ui.add_space(40.0);
                });
            });
        Ok(())
    }
}

// Lets the statics be registered as shared renderers without copying them
impl PageRenderer for &'static ProjectPage {
    fn name(&self) -> &str {
        self.slug
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        PageRenderer::render(*self, ui, context)
    }
}

/// Every project page, in work overview order
pub fn all() -> [&'static ProjectPage; 6] {
    [
        &parameter_updates::PAGE,
        &microimpute::PAGE,
        &microcalibrate::PAGE,
        &cross_repo::PAGE,
        &congressional_districts::PAGE,
        &data_schema::PAGE,
    ]
}
