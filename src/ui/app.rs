use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::book_request::BookRequest;
use crate::model::story_text::{story_lines, StoryLine};
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;
use crate::ui::{form_panel, story_panel};

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub form: BookRequest,
    pub rendered_lines: Vec<StoryLine>,
    pub status: Option<String>,
}

impl UiState {
    /// Fold one engine response into the two state cells. A loaded story
    /// fully replaces the previous view, null included.
    pub fn apply(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::StoryLoaded(story) => {
                self.rendered_lines = story
                    .map(|s| story_lines(&s))
                    .unwrap_or_default();
            }
            EngineResponse::ConnectionStatus(msg) => {
                self.status = if msg.is_empty() { None } else { Some(msg) };
            }
        }
    }
}

/* =========================
   App
   ========================= */

pub struct App {
    ui: UiState,
    settings: UiSettings,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl App {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx);
            engine.run();
        });

        Self {
            ui: UiState::default(),
            settings: settings_io::load_settings(),
            cmd_tx,
            resp_rx,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.apply(resp);
        }

        form_panel::draw_form_panel(ctx, &mut self.ui, &mut self.settings, &self.cmd_tx);
        story_panel::draw_story_panel(ctx, &self.ui, &self.settings);

        // Engine replies arrive between frames; poll so they show up
        // without waiting for the next input event.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
