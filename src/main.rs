mod app;
mod config;
mod content;
mod deck;
mod error;
mod input;
mod route;
mod state;
mod style;
mod view;

use app::Recap;
use config::Config;
use eframe::egui;
use env_logger::Env;
use std::path::Path;

const TITLE: &str = "PolicyEngine internship";

/// Window icon from `<image_dir>/logo.png`, if it exists and decodes
fn load_icon(image_dir: &Path) -> Option<egui::IconData> {
    let path = image_dir.join("logo.png");
    match image::open(&path) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            log::debug!("no window icon from {}: {}", path.display(), e);
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = Config::create_default() {
        log::warn!("{}", e);
    }
    let config = Config::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_title(TITLE)
        .with_fullscreen(config.window.fullscreen);
    if let Some(icon) = load_icon(&config.image_dir()) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = Recap::new(config);
            app.ui_state.theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
