use crate::view::blocks;
use crate::view::{PageContext, PageRenderer};
use chrono::NaiveDate;
use eframe::egui;

pub struct Intro {
    pub date: Option<NaiveDate>,
}

impl Intro {
    pub fn new() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2025, 8, 22),
        }
    }

    pub fn formatted_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%B %-d, %Y").to_string())
    }
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for Intro {
    fn name(&self) -> &str {
        "intro"
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        let theme = context.theme;
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() * 0.12).max(20.0));

            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(160.0);
                    ui.set_min_height(160.0);
                    blocks::image_or_placeholder(
                        ui,
                        context,
                        "logo.png",
                        "PolicyEngine logo",
                        "Add logo.png to images/",
                    );
                });

            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("PolicyEngine internship")
                    .size(context.heading_size * 1.4)
                    .strong()
                    .color(theme.text()),
            );
            ui.label(
                egui::RichText::new("February - August 2025")
                    .size(context.body_size + 2.0)
                    .color(theme.muted()),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("End of internship presentation")
                    .size(context.body_size * 1.7)
                    .color(theme.text()),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("María Juaristi")
                    .size(context.body_size * 1.5)
                    .color(theme.text()),
            );
            if let Some(date) = self.formatted_date() {
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new(date)
                        .size(context.body_size + 2.0)
                        .color(theme.muted()),
                );
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_date_is_long_form() {
        assert_eq!(Intro::new().formatted_date().as_deref(), Some("August 22, 2025"));
    }
}
