use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::protocol::EngineCommand;
use crate::model::book_request::Field;
use crate::ui::app::UiState;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

pub fn draw_form_panel(
    ctx: &egui::Context,
    state: &mut UiState,
    settings: &mut UiSettings,
    cmd_tx: &Sender<EngineCommand>,
) {
    egui::SidePanel::left("form")
        .resizable(true)
        .default_width(360.0)
        .min_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_header(ui, state);

                ui.separator();

                for field in Field::ALL {
                    if field == Field::Hero {
                        ui.add_space(10.0);
                        ui.heading("Legend Questions");
                    }
                    draw_field(ui, state, field);
                    ui.add_space(4.0);
                }

                ui.add_space(8.0);
                if ui.button("Submit").clicked() {
                    let _ = cmd_tx.send(EngineCommand::GenerateBook(state.form.clone()));
                }

                ui.add_space(16.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.small_button("Test connection").clicked() {
                        let _ = cmd_tx.send(EngineCommand::TestConnection);
                    }
                    ui.hyperlink_to("Be A Good Bot - AI Club", "https://beagoodbot.com");
                });

                draw_options(ui, settings);
            });
        });
}

fn draw_header(ui: &mut egui::Ui, state: &UiState) {
    ui.heading("📖 Little Legend Lab");
    ui.label("Welcome to the most personalized story book generator for the new generation.");

    if let Some(status) = &state.status {
        ui.label(egui::RichText::new(status.as_str()).weak());
    }
}

/// One labeled input plus its suggestion menu. Picking a suggestion just
/// fills the input; any free text is accepted.
fn draw_field(ui: &mut egui::Ui, state: &mut UiState, field: Field) {
    ui.label(field.label());

    ui.horizontal(|ui| {
        let mut value = state.form.get(field).to_owned();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(field.placeholder())
                .desired_width(220.0),
        );
        if response.changed() {
            state.form.set(field, value);
        }

        egui::ComboBox::from_id_salt(field.key())
            .selected_text("")
            .width(24.0)
            .show_ui(ui, |ui| {
                for suggestion in field.suggestions() {
                    if ui.selectable_label(false, *suggestion).clicked() {
                        state.form.set(field, *suggestion);
                    }
                }
            });
    });
}

fn draw_options(ui: &mut egui::Ui, settings: &mut UiSettings) {
    ui.collapsing("Options", |ui| {
        let mut changed = false;

        ui.label("UI Scale");
        changed |= ui
            .add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0))
            .changed();

        ui.add_space(6.0);
        ui.label("Story colors");
        for key in ["Title", "Paragraph", "ImagePrompt", "Caption", "Description"] {
            ui.horizontal(|ui| {
                let mut color = settings.color(key);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    settings.set_color(key, color);
                    changed = true;
                }
                ui.label(key);
            });
        }

        if changed {
            settings_io::save_settings(settings);
        }
    });
}
