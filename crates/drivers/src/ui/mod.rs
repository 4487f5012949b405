mod app;
mod dialog;
mod gallery;
mod layout;
mod motion;
mod press;
mod textures;
mod theme;
mod viewer;

use eframe::egui;
use lite_gallery_application::{AppController, ImageDecoder};
use log::info;

use crate::config::AppConfig;
use app::GalleryApp;
use gallery::GridSettings;

pub fn launch_window(
    controller: AppController,
    decoder: Box<dyn ImageDecoder>,
    config: &AppConfig,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(gallery::TITLE)
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    let settings = GridSettings {
        columns: config.columns,
        long_press_delay: config.long_press_ms as f64 / 1000.0,
    };

    info!(
        "opening gallery window with {} images, {} columns",
        controller.gallery().len(),
        settings.columns
    );

    eframe::run_native(
        "lite-gallery",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, controller, decoder, settings)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
