use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// "light" selects the light theme, anything else is dark
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        let mut visuals = match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.background();
        visuals.window_fill = self.background();
        ctx.set_visuals(visuals);
    }

    pub fn background(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_rgb(22, 27, 58),
            Theme::Light => egui::Color32::from_rgb(244, 246, 252),
        }
    }

    /// Translucent fill for cards and the navigation bar
    pub fn card_fill(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_white_alpha(18),
            Theme::Light => egui::Color32::from_black_alpha(10),
        }
    }

    pub fn card_stroke(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_white_alpha(50),
            Theme::Light => egui::Color32::from_black_alpha(40),
        }
    }

    pub fn text(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_white_alpha(242),
            Theme::Light => egui::Color32::from_rgb(30, 34, 60),
        }
    }

    pub fn muted(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_white_alpha(170),
            Theme::Light => egui::Color32::from_rgb(100, 104, 130),
        }
    }

    pub fn accent(self) -> egui::Color32 {
        match self {
            Theme::Dark => egui::Color32::from_rgb(0, 255, 200),
            Theme::Light => egui::Color32::from_rgb(0, 140, 120),
        }
    }

    /// Name of the syntect theme used for code samples
    pub fn code_theme(self) -> &'static str {
        match self {
            Theme::Dark => "base16-ocean.dark",
            Theme::Light => "base16-ocean.light",
        }
    }
}

// --- Sizing ---
pub const CONTENT_MAX_WIDTH: f32 = 1000.0;
pub const NAV_BUTTON_PADDING: f32 = 8.0;
pub const PROGRESS_HEIGHT: f32 = 3.0;
pub const CARD_SPACING: f32 = 16.0;
pub const IMAGE_MAX_HEIGHT: f32 = 320.0;
pub const CODE_FONT_SIZE: f32 = 13.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

/// A rounded translucent frame used for cards, tabs and the navigation bar
pub fn card_frame(theme: Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card_fill())
        .stroke(egui::Stroke::new(1.0, theme.card_stroke()))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
}

/// Highlighted variant of `card_frame` for "Next steps" boxes
pub fn highlight_frame(theme: Theme) -> egui::Frame {
    let accent = theme.accent();
    egui::Frame::new()
        .fill(accent.gamma_multiply(0.08))
        .stroke(egui::Stroke::new(2.0, accent.gamma_multiply(0.3)))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(20))
}

/// Center a column of at most `CONTENT_MAX_WIDTH` in the available space
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_max_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_config() {
        assert_eq!(Theme::from_config("light"), Theme::Light);
        assert_eq!(Theme::from_config("Light"), Theme::Light);
        assert_eq!(Theme::from_config("dark"), Theme::Dark);
        assert_eq!(Theme::from_config("solarized"), Theme::Dark);
    }
}
