use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("little_legend_lab");
    fs::create_dir_all(&path).ok();
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    save_to(&settings_path(), settings);
}

fn load_from(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn save_to(path: &Path, settings: &UiSettings) {
    if let Ok(json) = serde_json::to_string_pretty(settings) {
        let _ = fs::write(path, json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_settings.json");

        let mut settings = UiSettings::default();
        settings.ui_scale = 1.25;
        settings.set_color("Title", Color32::from_rgba_unmultiplied(1, 2, 3, 255));

        save_to(&path, &settings);
        let loaded = load_from(&path);

        assert_eq!(loaded.ui_scale, 1.25);
        assert_eq!(
            loaded.color("Title"),
            Color32::from_rgba_unmultiplied(1, 2, 3, 255)
        );
    }

    #[test]
    fn missing_or_corrupt_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let missing = load_from(&dir.path().join("nope.json"));
        assert_eq!(missing.ui_scale, 1.0);

        let corrupt_path = dir.path().join("bad.json");
        fs::write(&corrupt_path, "{not json").unwrap();
        let corrupt = load_from(&corrupt_path);
        assert_eq!(corrupt.ui_scale, 1.0);
    }
}
