use crate::style;
use crate::view::blocks;
use crate::view::{PageContext, PageRenderer};
use eframe::egui;

const EXPERIENCE: &str = "I fell in love with the city! It was great to work in person with Nikhil and Vahid and \
    finally meeting Ben and Max. I became much faster and dynamic in my coding after seeing Nikhil work in real time. \
    Got amazing life advice from Vahid. I was always so excited to go to the WeWork! I also learned a lot about EA, \
    attending conferences, and talking about PolicyEngine's work. I identified the best climbing gyms in the city (let \
    me know if you need recommendations ;).";

const IMMERSION: &[&str] = &[
    "Drank £8.50 pints",
    "Commuted over 2 hours on any given day",
    "Had a cup of tea with my housemates every evening",
    "Ate food from around the world without leaving my neighborhood",
    "Enjoyed so many free museums",
];

pub struct London;

fn info_title(ui: &mut egui::Ui, text: &str, context: &PageContext) {
    ui.label(
        egui::RichText::new(text)
            .strong()
            .size(context.body_size + 3.0)
            .color(context.theme.text()),
    );
}

impl PageRenderer for London {
    fn name(&self) -> &str {
        "london"
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        egui::ScrollArea::vertical()
            .id_salt("london")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                style::centered_column(ui, |ui| {
                    ui.add_space(30.0);
                    ui.vertical_centered(|ui| blocks::heading(ui, "My time in London", context));
                    ui.add_space(24.0);

                    ui.columns(2, |columns| {
                        blocks::image_or_placeholder(
                            &mut columns[0],
                            context,
                            "team.png",
                            "PolicyEngine team",
                            "Add team.png to images/",
                        );

                        style::card_frame(context.theme).show(&mut columns[1], |ui| {
                            ui.set_width(ui.available_width());
                            info_title(ui, "The experience", context);
                            blocks::paragraph(ui, EXPERIENCE, context);
                            ui.add_space(14.0);

                            info_title(ui, "Cultural immersion", context);
                            blocks::paragraph(
                                ui,
                                "Living and working in London was a truly transformative experience:",
                                context,
                            );
                            blocks::bullets(ui, IMMERSION, context);
                            ui.add_space(14.0);

                            info_title(ui, "Key memories", context);
                            blocks::paragraph(
                                ui,
                                "Thank you for the pool masterclasses, they were a game changer!",
                                context,
                            );
                        });
                    });
                    ui.add_space(40.0);
                });
            });
        Ok(())
    }
}
