use std::collections::HashMap;
use std::time::Duration;

use eframe::egui;

use crate::deck::Deck;

/// How promptly a view's surface must reflect a page change.
///
/// The content window repaints before the next event is handled; the
/// presenter waits for the next clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPolicy {
    Immediate,
    Deferred,
}

impl RedrawPolicy {
    pub fn request(self, ctx: &egui::Context) {
        match self {
            RedrawPolicy::Immediate => ctx.request_repaint(),
            RedrawPolicy::Deferred => ctx.request_repaint_after(Duration::from_secs(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TextureKey {
    page: usize,
    width_px: u32,
}

const MAX_CACHED_TEXTURES: usize = 8;

/// Rasterized pages uploaded as textures, keyed by page and target pixel
/// width. A redraw always blits a finished texture, never a page in the
/// middle of rasterizing.
#[derive(Default)]
pub struct PageTextureCache {
    textures: HashMap<TextureKey, egui::TextureHandle>,
}

impl PageTextureCache {
    /// Returns the texture for `page` rasterized `width_px` wide, rendering
    /// on first use. `None` means rasterization failed and the caller
    /// should draw background only.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        deck: &Deck,
        page: usize,
        width_px: u32,
    ) -> Option<egui::TextureHandle> {
        let key = TextureKey { page, width_px };
        if let Some(handle) = self.textures.get(&key) {
            return Some(handle.clone());
        }

        let scale = width_px as f32 / deck.page_size(page).width;
        let image = match deck.render_page(page, scale) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("failed to rasterize page {}: {err}", page + 1);
                return None;
            }
        };

        // Old sizes are never revisited after a resize; drop everything
        // once the cache fills.
        if self.textures.len() >= MAX_CACHED_TEXTURES {
            self.textures.clear();
        }

        let handle = ctx.load_texture(
            format!("page_{page}_{width_px}"),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(key, handle.clone());
        Some(handle)
    }
}

/// The largest rect with the given aspect ratio centered in `available`,
/// which is the page scaled by min(sw/pw, sh/ph).
pub fn fit_rect(available: egui::Rect, aspect: f32) -> egui::Rect {
    let height = (available.width() / aspect).min(available.height());
    let size = egui::vec2(height * aspect, height);
    egui::Rect::from_center_size(available.center(), size)
}

/// Draws a page letterboxed into `available`: white fill behind the page
/// frame, surrounding background untouched. A missing texture leaves the
/// white frame only.
pub fn draw_page(
    painter: &egui::Painter,
    ctx: &egui::Context,
    cache: &mut PageTextureCache,
    deck: &Deck,
    page: usize,
    aspect: f32,
    available: egui::Rect,
) {
    let frame = fit_rect(available, aspect);
    painter.rect_filled(frame, 0.0, egui::Color32::WHITE);

    let width_px = (frame.width() * ctx.pixels_per_point()).round().max(1.0) as u32;
    if let Some(texture) = cache.texture(ctx, deck, page, width_px) {
        painter.image(
            texture.id(),
            frame,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
