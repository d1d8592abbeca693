use eframe::egui;

use crate::model::story_text::StoryLine;
use crate::ui::app::UiState;
use crate::ui::settings::UiSettings;

/// The story view. Nothing is drawn at all until a story has loaded.
pub fn draw_story_panel(ctx: &egui::Context, state: &UiState, settings: &UiSettings) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if state.rendered_lines.is_empty() {
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for line in &state.rendered_lines {
                draw_line(ui, settings, line);
            }
        });
    });
}

fn draw_line(ui: &mut egui::Ui, settings: &UiSettings, line: &StoryLine) {
    match line {
        StoryLine::Title(text) => {
            ui.heading(egui::RichText::new(text.as_str()).color(settings.color("Title")));
        }
        StoryLine::Paragraph(text) => {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(text.as_str()).color(settings.color("Paragraph")));
        }
        StoryLine::ImagePrompt(text) => {
            ui.label(
                egui::RichText::new(text.as_str())
                    .color(settings.color("ImagePrompt"))
                    .italics(),
            );
        }
        StoryLine::Caption(text) => {
            ui.label(
                egui::RichText::new(text.as_str())
                    .color(settings.color("Caption"))
                    .small(),
            );
        }
        StoryLine::Separator => {
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);
        }
        StoryLine::Description(text) => {
            ui.label(egui::RichText::new(text.as_str()).color(settings.color("Description")));
        }
    }
}
