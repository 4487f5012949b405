use eframe::egui::{
    self, load::SizedTexture, vec2, Align2, CornerRadius, FontId, Frame, Key, Margin, RichText,
    Stroke,
};
use lite_gallery_application::{AppEvent, ViewerScreen};

use crate::ui::layout;
use crate::ui::textures::{TextureCache, TextureSize};
use crate::ui::theme;

const BACK_GLYPH: &str = "‹";
const BACK_SIZE: f32 = 40.0;
const ACTION_SIZE: f32 = 50.0;
const ACTION_GAP: f32 = 20.0;

pub fn show(
    ctx: &egui::Context,
    screen: &ViewerScreen,
    textures: &mut TextureCache,
) -> Option<AppEvent> {
    let mut event = None;
    if ctx.input(|input| input.key_pressed(Key::Escape)) {
        event = Some(AppEvent::Back);
    }

    egui::TopBottomPanel::top("viewer_header")
        .frame(bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if round_button(ui, BACK_GLYPH, 24.0, BACK_SIZE).clicked() {
                    event = Some(AppEvent::Back);
                }
            });
            ui.painter().text(
                ui.max_rect().center(),
                Align2::CENTER_CENTER,
                screen.title(),
                FontId::proportional(17.0),
                theme::TITLE,
            );
        });

    egui::TopBottomPanel::bottom("viewer_footer")
        .frame(bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let actions = screen.actions();
                let count = actions.len() as f32;
                let total = count * ACTION_SIZE + (count - 1.0) * ACTION_GAP;
                ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = ACTION_GAP;
                for action in actions {
                    if round_button(ui, action.glyph(), 20.0, ACTION_SIZE).clicked() {
                        event = Some(AppEvent::ViewerAction(action));
                    }
                }
            });
        });

    egui::CentralPanel::default()
        .frame(Frame::default().fill(theme::VIEWER_BACKGROUND))
        .show(ctx, |ui| {
            let bounds = ui.max_rect();
            if let Some(texture) = textures.get(ctx, screen.uri(), TextureSize::Full) {
                let rect = layout::contain_rect(texture.size_vec2(), bounds);
                egui::Image::from_texture(SizedTexture::from_handle(texture)).paint_at(ui, rect);
            }
        });

    event
}

fn bar_frame() -> Frame {
    Frame::default()
        .fill(theme::BAR_FILL)
        .stroke(Stroke::new(0.5, theme::GLASS_BORDER))
        .inner_margin(Margin::symmetric(16, 12))
}

fn round_button(ui: &mut egui::Ui, glyph: &str, text_size: f32, size: f32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).size(text_size).color(theme::TITLE))
            .fill(theme::GLASS_FILL)
            .stroke(Stroke::new(1.0, theme::GLASS_BORDER))
            .corner_radius(CornerRadius::same((size / 2.0) as u8))
            .min_size(vec2(size, size)),
    )
}
