// Work overview - one clickable card per project page

use crate::route;
use crate::style;
use crate::view::blocks;
use crate::view::{PageContext, PageRenderer};
use eframe::egui;

pub struct ProjectCard {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub const CARDS: [ProjectCard; 6] = [
    ProjectCard {
        slug: "parameter-updates",
        icon: "🔄",
        title: "Parameter updates",
        description: "Updated tax and benefit parameters in PolicyEngine US to reflect latest legislation",
        tech: &["policyengine_us"],
    },
    ProjectCard {
        slug: "microimpute",
        icon: "🎯",
        title: "MicroImpute",
        description: "Statistical imputation framework for transferring variables between surveys with method \
                      benchmarking and evaluation tools",
        tech: &["microimpute"],
    },
    ProjectCard {
        slug: "microcalibrate",
        icon: "⚖️",
        title: "MicroCalibrate",
        description: "Survey weight calibration using gradient descent with real-time visualization dashboard",
        tech: &["microcalibrate", "l0"],
    },
    ProjectCard {
        slug: "cross-repo",
        icon: "🔧",
        title: "Cross-repo contributions",
        description: "Bug fixes, feature additions, and documentation improvements across PolicyEngine repositories",
        tech: &["microdf", "policyengine_uk", "policyengine_us", "policyengine_us_data"],
    },
    ProjectCard {
        slug: "congressional-districts",
        icon: "🏛️",
        title: "Congressional district calibration",
        description: "Created calibration routines compatible with the new targets database and helped calibrate at \
                      state and congressional district levels",
        tech: &["us_congressional_districts", "policyengine_us_data", "policyengine_data"],
    },
    ProjectCard {
        slug: "data-schema",
        icon: "📊",
        title: "New data schema",
        description: "Generalized SingleYearDataset and MultiYearDataset enabling some new functionality and a more \
                      linear, function-based dataset generation process",
        tech: &["policyengine_data", "policyengine_core"],
    },
];

const COLUMNS: usize = 3;

/// Repository behind a tech badge
pub fn repo_url(tech: &str) -> Option<&'static str> {
    Some(match tech {
        "policyengine_us" => "https://github.com/PolicyEngine/policyengine-us",
        "microimpute" => "https://github.com/PolicyEngine/microimpute",
        "microcalibrate" => "https://github.com/PolicyEngine/microcalibrate",
        "l0" => "https://github.com/PolicyEngine/l0",
        "microdf" => "https://github.com/PolicyEngine/microdf",
        "policyengine_uk" => "https://github.com/PolicyEngine/policyengine-uk",
        "policyengine_us_data" => "https://github.com/PolicyEngine/policyengine-us-data",
        "us_congressional_districts" => "https://github.com/PolicyEngine/us-congressional-districts",
        "policyengine_data" => "https://github.com/PolicyEngine/policyengine-data",
        "policyengine_core" => "https://github.com/PolicyEngine/policyengine-core",
        _ => return None,
    })
}

pub struct Work;

impl Work {
    fn render_card(ui: &mut egui::Ui, card: &ProjectCard, context: &PageContext) {
        let theme = context.theme;
        let mut badge_clicked = false;

        // The card senses clicks underneath its children so the badges stay clickable
        let response = ui
            .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
                style::card_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.set_min_height(220.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(card.icon).size(context.body_size * 1.8));
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(card.title)
                                    .strong()
                                    .size(context.body_size + 4.0)
                                    .color(theme.text()),
                            )
                            .wrap(),
                        );
                    });
                    ui.add_space(8.0);
                    ui.add(
                        egui::Label::new(egui::RichText::new(card.description).color(theme.muted())).wrap(),
                    );
                    ui.add_space(10.0);
                    ui.horizontal_wrapped(|ui| {
                        for tech in card.tech {
                            let badge = egui::Button::new(
                                egui::RichText::new(*tech).monospace().color(theme.text()),
                            )
                            .corner_radius(egui::CornerRadius::same(12));
                            if ui.add(badge).clicked() {
                                badge_clicked = true;
                                match repo_url(tech) {
                                    Some(url) => context.open(url),
                                    None => log::warn!("no repository known for {}", tech),
                                }
                            }
                        }
                    });
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("Click to explore →").color(theme.accent()));
                });
            })
            .response
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() && !badge_clicked {
            context.navigate(route::project_path(card.slug));
        }
    }
}

impl PageRenderer for Work {
    fn name(&self) -> &str {
        "work"
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        egui::ScrollArea::vertical()
            .id_salt("work")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                style::centered_column(ui, |ui| {
                    ui.add_space(30.0);
                    ui.vertical_centered(|ui| blocks::heading(ui, "My work at PolicyEngine", context));
                    ui.add_space(24.0);
                    for row in CARDS.chunks(COLUMNS) {
                        ui.columns(COLUMNS, |columns| {
                            for (column, card) in columns.iter_mut().zip(row) {
                                Self::render_card(column, card, context);
                            }
                        });
                        ui.add_space(style::CARD_SPACING);
                    }
                    ui.add_space(40.0);
                });
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_badge_has_a_repository() {
        for card in &CARDS {
            for tech in card.tech {
                let url = repo_url(tech);
                assert!(url.is_some(), "{} has no repository", tech);
                assert!(url.is_some_and(|u| u.starts_with("https://github.com/PolicyEngine/")));
            }
        }
    }

    #[test]
    fn test_unknown_badge() {
        assert_eq!(repo_url("numpy"), None);
    }
}
