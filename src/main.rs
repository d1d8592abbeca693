mod engine;
mod model;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 760.0])
            .with_icon(window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Little Legend Lab",
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::App::new()))),
    )
}

fn window_icon() -> egui::IconData {
    match image::load_from_memory(include_bytes!("../assets/book-icon.png")) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(err) => {
            log::warn!("failed to decode window icon: {err}");
            egui::IconData::default()
        }
    }
}
