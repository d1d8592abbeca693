use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Story line kind → color mapping (extensible)
    pub line_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut line_colors = HashMap::new();

        line_colors.insert("Title".into(), [240, 200, 120, 255]);
        line_colors.insert("Paragraph".into(), [220, 220, 220, 255]);
        line_colors.insert("ImagePrompt".into(), [140, 170, 220, 255]);
        line_colors.insert("Caption".into(), [160, 160, 160, 255]);
        line_colors.insert("Description".into(), [150, 200, 160, 255]);

        Self {
            ui_scale: 1.0,
            line_colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.line_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.line_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}
