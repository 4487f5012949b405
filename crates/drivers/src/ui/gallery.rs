use std::collections::HashMap;

use eframe::egui::{
    self, load::SizedTexture, pos2, Color32, CornerRadius, Frame, Margin, Mesh, Rect, RichText,
    Sense, Shape, Stroke, StrokeKind, Vec2,
};
use lite_gallery_application::AppEvent;
use lite_gallery_domain::{GalleryState, ImageId, ImageRecord};

use crate::ui::layout::{self, GRID_PADDING, SHADE_FRACTION, TILE_MARGIN, TILE_RADIUS};
use crate::ui::press::{PressFeedback, PressGesture};
use crate::ui::textures::{TextureCache, TextureSize};
use crate::ui::theme;

pub const TITLE: &str = "Galeria";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub columns: usize,
    /// Seconds a press must be held to count as a long press.
    pub long_press_delay: f64,
}

#[derive(Debug, Default)]
struct TileMotion {
    gesture: PressGesture,
    feedback: PressFeedback,
}

/// Per-tile gesture and animation state, keyed by record id.
#[derive(Debug, Default)]
pub struct TileMotions {
    tiles: HashMap<ImageId, TileMotion>,
}

impl TileMotions {
    pub fn retain(&mut self, records: &[ImageRecord]) {
        self.tiles
            .retain(|id, _| records.iter().any(|record| &record.id == id));
    }

    /// True while a tile is held or still animating; the UI keeps repainting
    /// until this settles.
    pub fn any_active(&self, now: f64) -> bool {
        self.tiles
            .values()
            .any(|tile| tile.gesture.is_held() || tile.feedback.is_animating(now))
    }
}

pub fn show(
    ctx: &egui::Context,
    state: &GalleryState,
    tiles: &mut TileMotions,
    textures: &mut TextureCache,
    settings: &GridSettings,
    now: f64,
) -> Vec<AppEvent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("gallery_header")
        .frame(
            Frame::default()
                .fill(theme::HEADER_FILL)
                .stroke(Stroke::new(1.0, theme::HEADER_BORDER))
                .inner_margin(Margin::symmetric(20, 20)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(TITLE)
                        .size(36.0)
                        .strong()
                        .color(theme::TITLE),
                );
            });
        });

    egui::CentralPanel::default()
        .frame(
            Frame::default()
                .fill(theme::GALLERY_BACKGROUND)
                .inner_margin(Margin::same(GRID_PADDING)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    let cell = layout::grid_cell_size(ui.available_width(), settings.columns);
                    for row in state.records().chunks(settings.columns.max(1)) {
                        ui.horizontal(|ui| {
                            for record in row {
                                let motion = tiles.tiles.entry(record.id.clone()).or_default();
                                if let Some(event) =
                                    tile(ui, record, cell, motion, textures, settings, now)
                                {
                                    events.push(event);
                                }
                            }
                        });
                    }
                });
        });

    events
}

fn tile(
    ui: &mut egui::Ui,
    record: &ImageRecord,
    cell: Vec2,
    motion: &mut TileMotion,
    textures: &mut TextureCache,
    settings: &GridSettings,
    now: f64,
) -> Option<AppEvent> {
    let (cell_rect, response) = ui.allocate_exact_size(cell, Sense::click());

    let outcome = motion.gesture.update(
        response.is_pointer_button_down_on(),
        now,
        settings.long_press_delay,
    );
    if outcome.pressed_in {
        motion.feedback.press_in(now);
    }
    if outcome.released {
        motion.feedback.press_out(now);
    }

    let event = if outcome.long_pressed || response.secondary_clicked() {
        Some(AppEvent::LongPress(record.clone()))
    } else if response.clicked() && !outcome.suppress_click {
        Some(AppEvent::Select(record.clone()))
    } else {
        None
    };

    if ui.is_rect_visible(cell_rect) {
        let style = motion.feedback.sample(now);
        let rect = layout::scale_about_center(cell_rect.shrink(TILE_MARGIN), style.scale);
        paint_tile(ui, rect, record, textures, style.opacity);
    }

    event
}

fn paint_tile(
    ui: &egui::Ui,
    rect: Rect,
    record: &ImageRecord,
    textures: &mut TextureCache,
    opacity: f32,
) {
    let radius = CornerRadius::same(TILE_RADIUS);
    let painter = ui.painter();
    painter.rect_filled(rect, radius, theme::TILE_FILL.gamma_multiply(opacity));

    if let Some(texture) = textures.get(ui.ctx(), &record.uri, TextureSize::Thumbnail) {
        let uv = layout::cover_uv(texture.size_vec2(), rect.size());
        egui::Image::from_texture(SizedTexture::from_handle(texture))
            .uv(uv)
            .corner_radius(radius)
            .tint(Color32::WHITE.gamma_multiply(opacity))
            .paint_at(ui, rect);
    }

    paint_shade(painter, rect, opacity);
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(1.5, theme::TILE_BORDER.gamma_multiply(opacity)),
        StrokeKind::Inside,
    );
}

/// Darkens the lower part of a tile, fading in from transparent.
fn paint_shade(painter: &egui::Painter, rect: Rect, opacity: f32) {
    let top = rect.bottom() - rect.height() * SHADE_FRACTION;
    let inset = f32::from(TILE_RADIUS) / 2.0;
    let shade = Rect::from_min_max(
        pos2(rect.left() + inset, top),
        pos2(rect.right() - inset, rect.bottom() - 1.5),
    );
    let bottom = theme::TILE_SHADE.gamma_multiply(opacity);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(shade.left_top(), Color32::TRANSPARENT);
    mesh.colored_vertex(shade.right_top(), Color32::TRANSPARENT);
    mesh.colored_vertex(shade.right_bottom(), bottom);
    mesh.colored_vertex(shade.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use eframe::egui::{vec2, Event, Modifiers, PointerButton, Pos2, RawInput};
    use lite_gallery_application::{ApplicationError, ImageDecoder};
    use lite_gallery_domain::DecodedImage;

    use super::*;

    const SETTINGS: GridSettings = GridSettings {
        columns: 3,
        long_press_delay: 0.5,
    };
    const CENTER: Pos2 = pos2(50.0, 50.0);

    struct NoImages;

    impl ImageDecoder for NoImages {
        fn decode(&self, uri: &str, _max_side: u32) -> Result<DecodedImage, ApplicationError> {
            Err(ApplicationError::Io(format!("{uri} is not on disk")))
        }
    }

    /// One 100x100 tile at the top-left corner of a headless context.
    struct TileHarness {
        ctx: egui::Context,
        record: ImageRecord,
        motion: TileMotion,
        textures: TextureCache,
        events: Vec<AppEvent>,
    }

    impl TileHarness {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                record: ImageRecord::new("1", "mem://1.jpg").expect("record"),
                motion: TileMotion::default(),
                textures: TextureCache::new(Box::new(NoImages)),
                events: Vec::new(),
            }
        }

        fn frame(&mut self, time: f64, events: Vec<Event>) {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
                time: Some(time),
                events,
                ..Default::default()
            };
            let mut event = None;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default()
                    .frame(Frame::default())
                    .show(ctx, |ui| {
                        event = tile(
                            ui,
                            &self.record,
                            vec2(100.0, 100.0),
                            &mut self.motion,
                            &mut self.textures,
                            &SETTINGS,
                            time,
                        );
                    });
            });
            self.events.extend(event);
        }

        fn hover(&mut self, time: f64) {
            self.frame(time, vec![Event::PointerMoved(CENTER)]);
        }

        fn button(&mut self, time: f64, button: PointerButton, pressed: bool) {
            self.frame(
                time,
                vec![
                    Event::PointerMoved(CENTER),
                    Event::PointerButton {
                        pos: CENTER,
                        button,
                        pressed,
                        modifiers: Modifiers::NONE,
                    },
                ],
            );
        }

        fn names(&self) -> Vec<&'static str> {
            self.events
                .iter()
                .map(|event| match event {
                    AppEvent::Select(_) => "select",
                    AppEvent::LongPress(_) => "long_press",
                    _ => "other",
                })
                .collect()
        }
    }

    #[test]
    fn quick_tap_selects_the_tile() {
        let mut harness = TileHarness::new();
        harness.hover(0.0);
        harness.button(0.1, PointerButton::Primary, true);
        harness.button(0.2, PointerButton::Primary, false);

        assert_eq!(harness.names(), vec!["select"]);
        assert!(matches!(
            &harness.events[0],
            AppEvent::Select(record) if record.id.as_str() == "1"
        ));
    }

    #[test]
    fn release_after_long_press_is_not_a_tap() {
        let mut harness = TileHarness::new();
        harness.hover(0.0);
        harness.button(0.1, PointerButton::Primary, true);
        harness.frame(0.4, Vec::new());
        assert!(harness.events.is_empty());

        harness.frame(0.7, Vec::new());
        assert_eq!(harness.names(), vec!["long_press"]);

        // Still inside egui's click window, so egui reports a click here.
        harness.button(0.75, PointerButton::Primary, false);
        assert_eq!(harness.names(), vec!["long_press"]);
    }

    #[test]
    fn secondary_click_is_a_long_press() {
        let mut harness = TileHarness::new();
        harness.hover(0.0);
        harness.button(0.1, PointerButton::Secondary, true);
        harness.button(0.2, PointerButton::Secondary, false);

        assert_eq!(harness.names(), vec!["long_press"]);
    }

    #[test]
    fn holding_starts_press_feedback_and_release_settles_it() {
        let mut harness = TileHarness::new();
        harness.hover(0.0);
        harness.button(0.1, PointerButton::Primary, true);
        assert!(harness.motion.gesture.is_held());
        assert!(harness.motion.feedback.is_animating(0.15));

        harness.button(0.2, PointerButton::Primary, false);
        assert!(!harness.motion.gesture.is_held());
        assert!(!harness.motion.feedback.is_animating(5.0));
    }
}
