use eframe::egui::Color32;

pub const GALLERY_BACKGROUND: Color32 = Color32::from_rgb(0x0A, 0x0A, 0x0A);
pub const VIEWER_BACKGROUND: Color32 = Color32::BLACK;
pub const HEADER_FILL: Color32 = Color32::from_rgba_premultiplied(16, 16, 20, 204);
pub const HEADER_BORDER: Color32 = Color32::from_rgba_premultiplied(20, 20, 20, 20);
pub const TITLE: Color32 = Color32::WHITE;

pub const TILE_FILL: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1E);
pub const TILE_BORDER: Color32 = Color32::from_rgba_premultiplied(2, 26, 51, 51);
pub const TILE_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 153);

pub const ACCENT: Color32 = Color32::from_rgb(0x0A, 0x84, 0xFF);
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(0xFF, 0x45, 0x3A);

pub const MODAL_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 191);
pub const MODAL_FILL: Color32 = Color32::from_rgba_premultiplied(19, 19, 24, 242);
pub const MODAL_BORDER: Color32 = Color32::from_rgba_premultiplied(31, 31, 31, 31);
pub const MODAL_SUBTITLE: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);
pub const CANCEL_FILL: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 15);
pub const CANCEL_BORDER: Color32 = Color32::from_rgba_premultiplied(4, 53, 102, 102);

pub const GLASS_FILL: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
pub const GLASS_BORDER: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51);
pub const BAR_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 77);
