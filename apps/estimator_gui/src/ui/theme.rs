use client_core::SeriesColor;
use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub border: egui::Color32,
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub accent: egui::Color32,
    pub text_muted: egui::Color32,
}

pub const PALETTE: Palette = Palette {
    app_background: egui::Color32::from_rgb(0x0f, 0x17, 0x2a),
    card_background: egui::Color32::from_rgb(0x1e, 0x29, 0x3b),
    border: egui::Color32::from_rgb(0x33, 0x41, 0x55),
    primary: egui::Color32::from_rgb(0x63, 0x66, 0xf1),
    secondary: egui::Color32::from_rgb(0xec, 0x48, 0x99),
    accent: egui::Color32::from_rgb(0xfb, 0xbf, 0x24),
    text_muted: egui::Color32::from_rgb(0x94, 0xa3, 0xb8),
};

pub fn series_color(color: SeriesColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |v: u8| (v as f32 + (255.0 - v as f32) * t).round() as u8;
    egui::Color32::from_rgb(lerp(c.r()), lerp(c.g()), lerp(c.b()))
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PALETTE.app_background;
    visuals.window_fill = PALETTE.card_background;
    visuals.extreme_bg_color = lighten_color(PALETTE.app_background, 0.04);
    visuals.selection.bg_fill = PALETTE.primary;
    visuals.hyperlink_color = PALETTE.secondary;
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_series_colors_exactly() {
        let color = series_color(SeriesColor::rgb(0x63, 0x66, 0xf1));
        assert_eq!(color, PALETTE.primary);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let base = egui::Color32::from_rgb(0, 100, 255);
        assert_eq!(lighten_color(base, 0.0), base);
        assert_eq!(lighten_color(base, 1.0), egui::Color32::WHITE);
        let half = lighten_color(base, 0.5);
        assert_eq!((half.r(), half.g(), half.b()), (128, 178, 255));
    }
}
