use crate::style;
use crate::view::blocks;
use crate::view::{PageContext, PageRenderer};
use eframe::egui;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Learnings,
    Gratitude,
    Future,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Learnings, Tab::Gratitude, Tab::Future];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Learnings => "Key takeaways",
            Tab::Gratitude => "Gratitude",
            Tab::Future => "Looking forward",
        }
    }
}

const LESSONS: &[&str] = &[
    "I now know what start up culture is like. I loved working with a small team, seeing everyone's contributions being \
     valued. I also love the dynamism and everyone's flexibility to adapt to changes and jump between tasks when someone \
     needs help.",
    "I gained a deeper understanding and commitment to open-source projects, especially in the context of public policy \
     and social impact, where transparent and reliable data can make such a difference.",
    "I knew GitHub was cool but, damn, it can do so much! I really like how it supports collaboration and project \
     management.",
    "Working remotely is very comfortable, but there is still so much value in in-person collaboration. I loved the \
     experience of working with the team in London, and even if not the most time efficient, stand-ups were the \
     highlight of my days and kept me motivated.",
];

const GROWTH: &str = "I think I've built a lot of technical skills, but also a lot of dynamism and adaptability. I feel \
    more confident in my ability to contribute to complex projects and jump from one thing to another to be there where \
    I can be of most help.";

const THANKS: &str = "Thank you so much everyone for keeping me motivated and supporting my learning throughout. Special \
    mention to Nikhil for being such a great mentor, always so fast to answer my questions and with so many examples and \
    guidance for me to know what to do next.";

const MOMENTS: &[&str] = &[
    "I really enjoyed the two days that Ben and I spent diving into every imputation model while in London. I felt so \
     much more comfortable with the results I was producing and started to truly understand the math behind it all.",
    "I really appreciated when Max invited me to a meeting with Urban Institute to discuss the Social Genome Project they \
     were working on. I loved seeing how our work interacts with the broader policy and social impact landscape and how \
     we can contribute to it. I learned a lot debriefing about it with him afterwards.",
    "There's been a couple stand-ups and post-scrums that were particularly fun and engaging, for example the time we \
     spent like three hours discussing a new dataset schema and just nerded around possible implementations with \
     Anthony, Ben and Mike.",
];

const FUTURE: &str = "Well, now I have a lot of developer skills that I never thought I would even seek. I feel closer \
    to what data science is especially in interaction with the social sciences and public policy. I hope to continue \
    working in this field, contributing to open-source projects that have a positive social impact. I must admit I \
    didn't think I would work in econ related topics, but more and more, I find I get really curious and excited about \
    modeling all these complex behaviors.";

const CONTINUED: [&str; 2] = [
    "In the short term, I plan to keep contributing to microimpute as part of my thesis, focusing on improving its \
     performance and usability. I really hope to get that paper out and contribute to research in the field. If new \
     ideas about data imputation and its applications arise, please reach out! I'd love to hear them and keep them in \
     mind while I work on microimpute.",
    "And of course, if you have any questions about the things I have been working on or need a quick clarification \
     please let me know! I will be happy to help. I will also keep an eye on the PolicyEngine slack and may show up to \
     a stand-up if to share microimpute updates.",
];

const NEXT: &[&str] = &[
    "For now, writing my thesis on microimpute, taking my last data science courses and graduating!",
    "I hope to explore more about the intersection of data science and social impact, and attend a couple conferences \
     to learn more about the latest developments, that was great fun.",
];

pub struct Reflection;

impl Reflection {
    fn tab_id() -> egui::Id {
        egui::Id::new("reflection_tab")
    }

    /// Selected tab, kept in egui temp memory for the lifetime of the window
    pub fn selected(ctx: &egui::Context) -> Tab {
        ctx.data(|d| d.get_temp::<Tab>(Self::tab_id())).unwrap_or_default()
    }

    pub fn select(ctx: &egui::Context, tab: Tab) {
        ctx.data_mut(|d| d.insert_temp(Self::tab_id(), tab));
    }

    fn highlights(ui: &mut egui::Ui, items: &[&str], context: &PageContext) {
        for item in items {
            egui::Frame::new()
                .fill(context.theme.card_fill())
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_top(|ui| {
                        ui.label(egui::RichText::new("✨").size(context.body_size * 1.4));
                        blocks::paragraph(ui, item, context);
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn subtitle(ui: &mut egui::Ui, text: &str, context: &PageContext) {
        ui.label(
            egui::RichText::new(text)
                .strong()
                .size(context.body_size * 1.4)
                .color(context.theme.text()),
        );
        ui.add_space(8.0);
    }

    fn render_tab(ui: &mut egui::Ui, tab: Tab, context: &PageContext) {
        let theme = context.theme;
        match tab {
            Tab::Learnings => {
                Self::subtitle(ui, "Valuable lessons", context);
                Self::highlights(ui, LESSONS, context);
                ui.add_space(12.0);
                Self::subtitle(ui, "Professional growth", context);
                egui::Frame::new()
                    .fill(theme.card_fill())
                    .stroke(egui::Stroke::new(4.0, theme.muted()))
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(GROWTH)
                                    .italics()
                                    .size(context.body_size + 3.0)
                                    .color(theme.text()),
                            )
                            .wrap(),
                        );
                    });
            }
            Tab::Gratitude => {
                Self::subtitle(ui, "Thank you to the team", context);
                blocks::paragraph(ui, THANKS, context);
                ui.add_space(16.0);
                Self::subtitle(ui, "Memorable moments", context);
                Self::highlights(ui, MOMENTS, context);
                ui.add_space(16.0);
                style::highlight_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("🙏 Thank you!")
                                .strong()
                                .size(context.heading_size * 0.8)
                                .color(theme.text()),
                        );
                        ui.label("To everyone at PolicyEngine for this incredible opportunity");
                    });
                });
            }
            Tab::Future => {
                Self::subtitle(ui, "How this experience shapes my future", context);
                blocks::paragraph(ui, FUTURE, context);
                ui.add_space(16.0);
                Self::subtitle(ui, "Continued contributions", context);
                for text in CONTINUED {
                    blocks::paragraph(ui, text, context);
                    ui.add_space(8.0);
                }
                ui.add_space(8.0);
                Self::subtitle(ui, "Next steps", context);
                Self::highlights(ui, NEXT, context);
            }
        }
    }
}

impl PageRenderer for Reflection {
    fn name(&self) -> &str {
        "reflection"
    }

    fn render(&self, ui: &mut egui::Ui, context: &PageContext) -> Result<(), String> {
        let mut selected = Self::selected(ui.ctx());

        egui::ScrollArea::vertical()
            .id_salt("reflection")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                style::centered_column(ui, |ui| {
                    ui.add_space(30.0);
                    ui.vertical_centered(|ui| {
                        blocks::heading(ui, "Reflections", context);
                        ui.add_space(20.0);
                        ui.horizontal(|ui| {
                            for tab in Tab::ALL {
                                ui.selectable_value(&mut selected, tab, tab.label());
                            }
                        });
                    });
                    ui.add_space(20.0);
                    style::card_frame(context.theme).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.set_min_height(400.0);
                        Self::render_tab(ui, selected, context);
                    });
                    ui.add_space(40.0);
                });
            });

        if selected != Self::selected(ui.ctx()) {
            log::debug!("reflection tab -> {:?}", selected);
            Self::select(ui.ctx(), selected);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_defaults_to_key_takeaways() {
        let ctx = egui::Context::default();
        assert_eq!(Reflection::selected(&ctx), Tab::Learnings);
        assert_eq!(Reflection::selected(&ctx).label(), "Key takeaways");
    }

    #[test]
    fn test_tab_selection_is_remembered() {
        let ctx = egui::Context::default();
        Reflection::select(&ctx, Tab::Future);
        assert_eq!(Reflection::selected(&ctx), Tab::Future);
    }
}
