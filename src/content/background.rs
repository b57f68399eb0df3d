use crate::style;
use crate::view::blocks;
use crate::view::{PageContext, PageRenderer};
use eframe::egui;

const PHOTOS: [(&str, &str, &str); 2] = [
    ("profile2.jpeg", "Profile 2", "Add profile2.jpeg to images/"),
    ("profile.jpg", "Profile", "Add profile.jpg to images/"),
];

const INTRO_LINE: &str = "I grew up in Spain but have been moving around the world since I was 17, always with some \
                          jamón in my suitcase.";

const INFO: [(&str, &str); 2] = [
    (
        "Education",
        "Rising senior at Minerva University studying a double major in Politics and Data Science.",
    ),
    (
        "Interests",
        "Was always interested in social impact and governance, but my love for puzzles nudged me into coding, down \
         the path of policy analysis.",
    ),
];

pub struct Background;

impl PageRenderer for Background {
    fn name(&self) -> &str {
        "background"
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        let theme = context.theme;
        style::centered_column(ui, |ui| {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| blocks::heading(ui, "About me", context));
            ui.add_space(24.0);

            ui.columns(2, |columns| {
                let (photos, info) = columns.split_at_mut(1);
                let photos = &mut photos[0];
                for (file, alt, fallback) in PHOTOS {
                    blocks::image_or_placeholder(photos, context, file, alt, fallback);
                    photos.add_space(12.0);
                }

                style::card_frame(theme).show(&mut info[0], |ui| {
                    ui.set_width(ui.available_width());
                    blocks::paragraph(ui, INTRO_LINE, context);
                    ui.add_space(20.0);
                    for (title, body) in INFO {
                        ui.label(
                            egui::RichText::new(title)
                                .strong()
                                .size(context.body_size + 3.0)
                                .color(theme.text()),
                        );
                        ui.label(egui::RichText::new(body).size(context.body_size).color(theme.muted()));
                        ui.add_space(14.0);
                    }
                });
            });
        });
        Ok(())
    }
}
