use std::collections::HashMap;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use lite_gallery_application::ImageDecoder;
use log::warn;

/// Longest side of a grid tile texture.
pub const THUMBNAIL_SIDE: u32 = 512;

/// Which decode a caller wants: small for grid tiles, as large as the GPU
/// allows for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSize {
    Thumbnail,
    Full,
}

impl TextureSize {
    fn max_side(self, ctx: &egui::Context) -> u32 {
        let gpu_limit = ctx.input(|i| i.max_texture_side);
        let gpu_limit = u32::try_from(gpu_limit).unwrap_or(u32::MAX);
        match self {
            Self::Thumbnail => THUMBNAIL_SIDE.min(gpu_limit),
            Self::Full => gpu_limit,
        }
    }
}

enum TextureSlot {
    Ready(TextureHandle),
    Failed,
}

/// Decoded textures keyed by uri and size. A uri that fails to load stays
/// failed for the rest of the session; callers draw the empty placeholder
/// instead.
pub struct TextureCache {
    decoder: Box<dyn ImageDecoder>,
    slots: HashMap<(String, TextureSize), TextureSlot>,
}

impl TextureCache {
    pub fn new(decoder: Box<dyn ImageDecoder>) -> Self {
        Self {
            decoder,
            slots: HashMap::new(),
        }
    }

    pub fn get(
        &mut self,
        ctx: &egui::Context,
        uri: &str,
        size: TextureSize,
    ) -> Option<&TextureHandle> {
        let key = (uri.to_string(), size);
        if !self.slots.contains_key(&key) {
            let slot = self.load(ctx, uri, size);
            self.slots.insert(key.clone(), slot);
        }

        match self.slots.get(&key) {
            Some(TextureSlot::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Drops textures whose uri is no longer displayed.
    pub fn retain<'a>(&mut self, live: impl IntoIterator<Item = &'a str>) {
        let live: Vec<&str> = live.into_iter().collect();
        self.slots.retain(|(uri, _), _| live.contains(&uri.as_str()));
    }

    fn load(&self, ctx: &egui::Context, uri: &str, size: TextureSize) -> TextureSlot {
        let max_side = size.max_side(ctx);
        let decoded = match self.decoder.decode(uri, max_side) {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!("image {uri} not loaded: {error}");
                return TextureSlot::Failed;
            }
        };

        // egui panics on textures past the GPU limit or on a short pixel buffer.
        if decoded.width > max_side || decoded.height > max_side {
            warn!(
                "image {uri} not loaded: {}x{} exceeds {max_side}px",
                decoded.width, decoded.height
            );
            return TextureSlot::Failed;
        }
        let expected_len = decoded.width as usize * decoded.height as usize * 4;
        if decoded.rgba.len() != expected_len {
            warn!(
                "image {uri} not loaded: {} bytes for {}x{}",
                decoded.rgba.len(),
                decoded.width,
                decoded.height
            );
            return TextureSlot::Failed;
        }

        let image = ColorImage::from_rgba_unmultiplied(
            [decoded.width as usize, decoded.height as usize],
            &decoded.rgba,
        );
        TextureSlot::Ready(ctx.load_texture(uri, image, TextureOptions::LINEAR))
    }
}
