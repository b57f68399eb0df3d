use crate::config::{Config, UnmatchedRoute};
use crate::content;
use crate::deck::{Deck, Dispatch};
use crate::error::Error;
use crate::state::UIState;
use crate::style::{self, Theme};
use crate::view::chrome;
use crate::view::{CodeHighlighter, PageContext, PageRenderer};
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Recap {
    // Routing
    pub deck: Deck,

    // UI State
    pub ui_state: UIState,

    // Rendering resources
    pub config: Config,
    pub highlighter: CodeHighlighter,
    pub image_dir: PathBuf,
}

impl Recap {
    pub fn new(config: Config) -> Self {
        let registry = Arc::new(content::slide_registry());
        let dispatcher = content::route_dispatcher(registry.clone());
        let deck = Deck::new(
            dispatcher,
            registry,
            &config.deck.start_route,
            &config.transition,
            config.deck.unmatched,
        );
        log::info!("starting at {}", deck.location());

        Self {
            deck,
            ui_state: UIState::new(Theme::from_config(&config.theme.mode), config.deck.show_key_hint),
            image_dir: config.image_dir(),
            highlighter: CodeHighlighter::new(),
            config,
        }
    }

    fn open_link(&mut self, url: String) {
        log::info!("opening {}", url);
        let result = open::that(&url).map_err(|source| Error::OpenLink {
            url: url.clone(),
            source,
        });
        match result {
            Ok(()) => self.ui_state.set_info(format!("Opened {}", url)),
            Err(e) => {
                log::warn!("{}", e);
                self.ui_state.set_error(e.to_string());
            }
        }
    }

    fn render_page(
        &self,
        ui: &mut egui::Ui,
        now: f64,
        next_route: &RefCell<Option<String>>,
        open_link: &RefCell<Option<String>>,
    ) {
        let context = PageContext {
            theme: self.ui_state.theme,
            image_dir: &self.image_dir,
            body_size: self.config.font.body_size,
            heading_size: self.config.font.heading_size,
            highlighter: &self.highlighter,
            next_route,
            open_link,
        };

        let result = match self.deck.dispatch() {
            Dispatch::Page { renderer, .. } => renderer.render(ui, &context),
            Dispatch::Unmatched => {
                if self.deck.unmatched_policy() == UnmatchedRoute::NotFound {
                    chrome::render_not_found(ui, self.deck.location(), &context);
                }
                Ok(())
            }
            // Slides go through the presenter, which may still be showing the previous one
            Dispatch::Slide { .. } => match self.deck.presenter().frame(now) {
                Some(frame) => match self.deck.dispatch_path(frame.route) {
                    Dispatch::Slide { slide, .. } => {
                        let rect = ui.max_rect().translate(egui::vec2(frame.offset_x, 0.0));
                        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                            ui.set_opacity(frame.opacity);
                            slide.renderer.render(ui, &context)
                        })
                        .inner
                    }
                    _ => Ok(()),
                },
                None => Ok(()),
            },
        };

        if let Err(message) = result {
            ui.colored_label(egui::Color32::RED, message);
        }
    }
}

impl eframe::App for Recap {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_state.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        self.handle_input(ctx);

        let now = ctx.input(|i| i.time);
        self.deck.animate(now);
        if self.deck.presenter().is_animating() {
            ctx.request_repaint();
        }

        // Deferred actions
        let next_route = RefCell::new(None);
        let open_link = RefCell::new(None);

        self.render_address_bar(ctx);
        self.render_status_line(ctx);
        self.render_nav_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui, now, &next_route, &open_link);
        });

        // Apply deferred actions
        if let Some(path) = next_route.into_inner() {
            self.deck.open(&path);
            ctx.request_repaint();
        }
        if let Some(url) = open_link.into_inner() {
            self.open_link(url);
        }

        // Messages expire on their own, so keep ticking while one is shown
        if self.ui_state.error_message.is_some() || self.ui_state.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
