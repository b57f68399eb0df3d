// Window chrome for Recap
// Address strip, slide navigation bar and status line

use crate::app::Recap;
use crate::deck::Command;
use crate::route;
use crate::style;
use crate::view::PageContext;
use eframe::egui;
use std::cell::RefCell;

pub const KEY_HINT: &str = "Use ← → arrow keys to navigate";

impl Recap {
    /// Back/forward buttons and the address bar. Always visible.
    pub(crate) fn render_address_bar(&mut self, ctx: &egui::Context) {
        self.ui_state.sync_address(self.deck.location());

        egui::TopBottomPanel::top("address_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let history = self.deck.history();
                if ui
                    .add_enabled(history.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+←)")
                    .clicked()
                {
                    self.deck.apply(Command::Back);
                }
                let history = self.deck.history();
                if ui
                    .add_enabled(history.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+→)")
                    .clicked()
                {
                    self.deck.apply(Command::Forward);
                }

                let response = ui.add_sized(
                    [ui.available_width(), 22.0],
                    egui::TextEdit::singleline(&mut self.ui_state.address)
                        .font(egui::TextStyle::Monospace),
                );
                if response.has_focus() {
                    self.ui_state.address_dirty = true;
                }
                if response.lost_focus() {
                    self.ui_state.address_dirty = false;
                    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                        let path = route::normalize(&self.ui_state.address);
                        self.deck.open(&path);
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    /// Error and info messages, newest error first
    pub(crate) fn render_status_line(&mut self, ctx: &egui::Context) {
        if self.ui_state.error_message.is_none() && self.ui_state.info_message.is_none() {
            return;
        }
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((err, _)) = &self.ui_state.error_message {
                    ui.colored_label(egui::Color32::RED, err);
                } else if let Some((info, _)) = &self.ui_state.info_message {
                    ui.colored_label(self.ui_state.theme.muted(), info);
                }
            });
        });
    }

    /// Slide buttons, progress bar and key hint. Hidden on project pages.
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        if !self.deck.chrome_visible() {
            return;
        }
        let theme = self.ui_state.theme;
        let next_selection = RefCell::new(None);

        egui::TopBottomPanel::bottom("nav_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.background())
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                let navigation = self.deck.navigation();
                let highlighted = self.deck.highlighted_slide();
                // Dimmed while the kept index belongs to a route that is not a slide
                let fill = if navigation.is_active() {
                    theme.accent()
                } else {
                    theme.muted()
                };
                ui.add(
                    egui::ProgressBar::new(navigation.progress())
                        .desired_height(style::PROGRESS_HEIGHT)
                        .fill(fill),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.spacing_mut().button_padding =
                        egui::vec2(style::NAV_BUTTON_PADDING * 2.0, style::NAV_BUTTON_PADDING);
                    for (index, slide) in navigation.registry().iter().enumerate() {
                        let selected = highlighted == Some(index);
                        if ui.selectable_label(selected, slide.display_name).clicked() {
                            *next_selection.borrow_mut() = Some(index);
                        }
                    }
                    if self.ui_state.show_key_hint {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(KEY_HINT).color(theme.muted()));
                        });
                    }
                });
            });

        if let Some(index) = next_selection.into_inner() {
            self.deck.select(index);
        }
    }
}

/// Shown for unmatched paths when `deck.unmatched = "not_found"`
pub fn render_not_found(ui: &mut egui::Ui, path: &str, context: &PageContext) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(
            egui::RichText::new(format!("No slide at {}", path))
                .size(context.body_size * 1.5)
                .color(context.theme.muted()),
        );
        ui.add_space(12.0);
        if ui.button("Go to the first slide").clicked() {
            context.navigate(route::ROOT);
        }
    });
}
