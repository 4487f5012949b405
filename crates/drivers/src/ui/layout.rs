use eframe::egui::{pos2, vec2, Rect, Vec2};

pub const GRID_PADDING: i8 = 8;
pub const TILE_MARGIN: f32 = 4.0;
/// Tiles are 3 wide by 4 tall.
pub const TILE_ASPECT: f32 = 3.0 / 4.0;
pub const TILE_RADIUS: u8 = 16;
pub const SHADE_FRACTION: f32 = 0.4;

/// Size of one grid cell (tile plus its margin on every side) when `columns`
/// cells share `inner_width`.
pub fn grid_cell_size(inner_width: f32, columns: usize) -> Vec2 {
    let columns = columns.max(1) as f32;
    let width = (inner_width / columns).max(2.0 * TILE_MARGIN + 1.0);
    let tile_width = width - 2.0 * TILE_MARGIN;
    vec2(width, tile_width / TILE_ASPECT + 2.0 * TILE_MARGIN)
}

pub fn scale_about_center(rect: Rect, scale: f32) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * scale)
}

/// Largest rect with the image's aspect ratio that fits in `bounds`, centered.
pub fn contain_rect(image_size: Vec2, bounds: Rect) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Rect::from_center_size(bounds.center(), Vec2::ZERO);
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    Rect::from_center_size(bounds.center(), image_size * scale)
}

/// Texture coordinates that crop the image to fill `target` without
/// distortion.
pub fn cover_uv(image_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_aspect = image_size.x / image_size.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let visible = target_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(inset, 0.0), pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / target_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, inset), pos2(1.0, 1.0 - inset))
    }
}
