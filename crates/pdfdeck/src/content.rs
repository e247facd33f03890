use eframe::egui;

use crate::deck::{Deck, PageSize};
use crate::render::{self, PageTextureCache, RedrawPolicy};

/// The audience-facing window: exactly the current page, aspect-locked on
/// a black background, optionally fullscreen.
pub struct ContentView {
    page: usize,
    aspect: f32,
    fullscreen: bool,
}

impl ContentView {
    pub fn new(page: usize, size: PageSize) -> Self {
        Self {
            page,
            aspect: size.aspect(),
            fullscreen: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Shows a new page, recomputing the aspect ratio, and requests an
    /// immediate repaint.
    pub fn set_page(&mut self, page: usize, size: PageSize, ctx: &egui::Context) {
        self.page = page;
        self.aspect = size.aspect();
        RedrawPolicy::Immediate.request(ctx);
    }

    /// Flips fullscreen on the content window; the presenter is unaffected.
    pub fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        self.fullscreen = !self.fullscreen;
        ctx.send_viewport_cmd_to(
            egui::ViewportId::ROOT,
            egui::ViewportCommand::Fullscreen(self.fullscreen),
        );
    }

    pub fn ui(
        &self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        deck: &Deck,
        cache: &mut PageTextureCache,
    ) {
        let rect = ui.max_rect();
        ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
        render::draw_page(ui.painter(), ctx, cache, deck, self.page, self.aspect, rect);
    }
}
