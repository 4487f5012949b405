use eframe::egui;
use lite_gallery_application::{AppController, ImageDecoder};

use crate::ui::gallery::{self, GridSettings, TileMotions};
use crate::ui::textures::TextureCache;
use crate::ui::{dialog, viewer};

pub struct GalleryApp {
    controller: AppController,
    textures: TextureCache,
    tiles: TileMotions,
    settings: GridSettings,
}

impl GalleryApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: AppController,
        decoder: Box<dyn ImageDecoder>,
        settings: GridSettings,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            controller,
            textures: TextureCache::new(decoder),
            tiles: TileMotions::default(),
            settings,
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|input| input.time);
        let mut events = Vec::new();

        match self.controller.current_viewer() {
            Some(screen) => events.extend(viewer::show(ctx, &screen, &mut self.textures)),
            None => {
                events.extend(gallery::show(
                    ctx,
                    self.controller.gallery(),
                    &mut self.tiles,
                    &mut self.textures,
                    &self.settings,
                    now,
                ));
                if self.controller.gallery().dialog_open() {
                    events.extend(dialog::show(ctx));
                }
            }
        }

        for event in events {
            self.controller.dispatch(event);
        }

        let records = self.controller.gallery().records();
        self.tiles.retain(records);
        self.textures
            .retain(records.iter().map(|record| record.uri.as_str()));

        if self.tiles.any_active(now) {
            ctx.request_repaint();
        }
    }
}
