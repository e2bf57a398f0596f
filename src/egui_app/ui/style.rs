use eframe::egui::{Color32, CornerRadius, Stroke, Visuals, style::WidgetVisuals};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_card: Color32,
    pub bg_page: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub heading: Color32,
    pub result_fill: Color32,
    pub result_outline: Color32,
    pub result_heading: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_card: Color32::WHITE,
        bg_page: Color32::from_rgb(243, 244, 246),
        outline: Color32::from_rgb(209, 213, 219),
        text_primary: Color32::from_rgb(55, 65, 81),
        text_muted: Color32::from_rgb(107, 114, 128),
        accent: Color32::from_rgb(22, 163, 74),
        heading: Color32::from_rgb(21, 128, 61),
        result_fill: Color32::from_rgb(240, 253, 244),
        result_outline: Color32::from_rgb(187, 247, 208),
        result_heading: Color32::from_rgb(22, 101, 52),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_page;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.selection.bg_fill = palette.result_outline;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.slider_trailing_fill = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().outline)
}

pub fn result_stroke() -> Stroke {
    Stroke::new(1.0, palette().result_outline)
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Busy => "Busy",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(156, 163, 175),
        StatusTone::Busy => Color32::from_rgb(59, 130, 246),
        StatusTone::Info => palette().accent,
        StatusTone::Warning => Color32::from_rgb(217, 119, 6),
        StatusTone::Error => Color32::from_rgb(220, 38, 38),
    }
}
