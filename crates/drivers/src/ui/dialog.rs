use eframe::egui::{self, vec2, CornerRadius, Frame, Margin, RichText, Stroke};
use lite_gallery_application::AppEvent;

use crate::ui::theme;

pub const TITLE: &str = "Excluir imagem?";
pub const SUBTITLE: &str = "Esta ação não pode ser desfeita";
pub const CANCEL_LABEL: &str = "Cancelar";
pub const DELETE_LABEL: &str = "Excluir";

const CONTENT_WIDTH: f32 = 252.0;
const BUTTON_HEIGHT: f32 = 44.0;

/// Delete confirmation overlay. Escape and backdrop clicks count as cancel.
pub fn show(ctx: &egui::Context) -> Option<AppEvent> {
    let modal = egui::Modal::new(egui::Id::new("delete_confirmation"))
        .backdrop_color(theme::MODAL_BACKDROP)
        .frame(
            Frame::default()
                .fill(theme::MODAL_FILL)
                .stroke(Stroke::new(1.5, theme::MODAL_BORDER))
                .corner_radius(CornerRadius::same(24))
                .inner_margin(Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.set_width(CONTENT_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(TITLE)
                        .size(18.0)
                        .strong()
                        .color(theme::TITLE),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new(SUBTITLE)
                        .size(14.0)
                        .color(theme::MODAL_SUBTITLE),
                );
            });
            ui.add_space(24.0);

            ui.columns(2, |columns| {
                let cancel = egui::Button::new(
                    RichText::new(CANCEL_LABEL)
                        .size(16.0)
                        .strong()
                        .color(theme::ACCENT),
                )
                .fill(theme::CANCEL_FILL)
                .stroke(Stroke::new(1.5, theme::CANCEL_BORDER))
                .corner_radius(CornerRadius::same(12))
                .min_size(vec2(columns[0].available_width(), BUTTON_HEIGHT));

                let delete = egui::Button::new(
                    RichText::new(DELETE_LABEL)
                        .size(16.0)
                        .strong()
                        .color(theme::TITLE),
                )
                .fill(theme::DESTRUCTIVE)
                .corner_radius(CornerRadius::same(12))
                .min_size(vec2(columns[1].available_width(), BUTTON_HEIGHT));

                if columns[0].add(cancel).clicked() {
                    Some(AppEvent::CancelDelete)
                } else if columns[1].add(delete).clicked() {
                    Some(AppEvent::ConfirmDelete)
                } else {
                    None
                }
            })
        });

    let dismissed = modal.should_close();
    modal
        .inner
        .or(dismissed.then_some(AppEvent::CancelDelete))
}
