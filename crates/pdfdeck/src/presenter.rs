use std::time::Duration;

use chrono::Local;
use eframe::egui;

use crate::deck::{Deck, PageSize};
use crate::input::{self, Gesture};
use crate::render::{self, PageTextureCache, RedrawPolicy};
use crate::timer::{self, PresentationTimer};

const STATUS_FONT_SIZE: f32 = 36.0;
const PAGE_MARGIN: f32 = 8.0;

/// The speaker-facing window: current page on the left, status readout and
/// next page on the right. Never fullscreen.
pub struct PresenterView {
    current: usize,
    next: Option<usize>,
    current_aspect: f32,
    next_aspect: f32,
    total: usize,
    timer: PresentationTimer,
}

impl PresenterView {
    pub fn new(
        current: usize,
        current_size: PageSize,
        next: Option<(usize, PageSize)>,
        total: usize,
    ) -> Self {
        let mut view = Self {
            current,
            next: None,
            current_aspect: current_size.aspect(),
            next_aspect: current_size.aspect(),
            total,
            timer: PresentationTimer::default(),
        };
        // Seeding the initial pair must not start the clock; only
        // navigation does.
        view.set_state(current, current_size, next);
        view
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn current_aspect(&self) -> f32 {
        self.current_aspect
    }

    pub fn next_aspect(&self) -> f32 {
        self.next_aspect
    }

    /// Stores the new page pair, recomputing both aspect ratios. With
    /// `start_timer` the elapsed clock starts on the first call; the
    /// repaint waits for the next tick.
    pub fn set_page(
        &mut self,
        current: usize,
        current_size: PageSize,
        next: Option<(usize, PageSize)>,
        start_timer: bool,
        ctx: &egui::Context,
    ) {
        self.set_state(current, current_size, next);
        if start_timer {
            self.timer.start_if_needed();
        }
        RedrawPolicy::Deferred.request(ctx);
    }

    fn set_state(
        &mut self,
        current: usize,
        current_size: PageSize,
        next: Option<(usize, PageSize)>,
    ) {
        self.current = current;
        self.current_aspect = current_size.aspect();
        self.next = next.map(|(index, _)| index);
        if let Some((_, size)) = next {
            self.next_aspect = size.aspect();
        }
    }

    /// Wall clock, elapsed time, and slide position, read from live state
    /// on every call so the readout can never lag behind navigation.
    pub fn status_text(&self) -> String {
        let clock = Local::now().format("%H:%M:%S");
        let elapsed = timer::format_elapsed(self.timer.elapsed());
        format!(
            "{clock}\n\n{elapsed}\nSlide {}/{}",
            self.current + 1,
            self.total
        )
    }

    /// Renders the presenter window as an immediate child viewport and
    /// returns the gestures captured there, plus whether the window was
    /// asked to close.
    pub fn show(
        &self,
        ctx: &egui::Context,
        deck: &Deck,
        cache: &mut PageTextureCache,
    ) -> (Vec<Gesture>, bool) {
        let mut gestures = Vec::new();
        let mut close_requested = false;

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("pdfdeck presenter"),
            egui::ViewportBuilder::default()
                .with_title("pdfdeck presenter")
                .with_inner_size([800.0, 600.0]),
            |ctx, _class| {
                gestures = ctx.input(|i| input::gather(i));
                close_requested = ctx.input(|i| i.viewport().close_requested());

                egui::CentralPanel::default().show(ctx, |ui| {
                    self.panel_ui(ui, ctx, deck, cache);
                });

                // Keep the clock ticking once a second even with no input.
                ctx.request_repaint_after(Duration::from_secs(1));
            },
        );

        (gestures, close_requested)
    }

    fn panel_ui(
        &self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        deck: &Deck,
        cache: &mut PageTextureCache,
    ) {
        let rect = ui.max_rect();
        let split_x = rect.left() + rect.width() / 2.0;

        let current_rect =
            egui::Rect::from_min_max(rect.min, egui::pos2(split_x, rect.bottom())).shrink(PAGE_MARGIN);
        render::draw_page(
            ui.painter(),
            ctx,
            cache,
            deck,
            self.current,
            self.current_aspect,
            current_rect,
        );

        let right = egui::Rect::from_min_max(egui::pos2(split_x, rect.top()), rect.max);

        let text_color = ui.visuals().text_color();
        let mut job = egui::text::LayoutJob::simple(
            self.status_text(),
            egui::FontId::proportional(STATUS_FONT_SIZE),
            text_color,
            right.width(),
        );
        job.halign = egui::Align::Center;
        let galley = ui.fonts(|fonts| fonts.layout_job(job));
        let text_height = galley.rect.height();
        ui.painter().galley(
            egui::pos2(right.center().x, right.top() + PAGE_MARGIN),
            galley,
            text_color,
        );

        let next_rect = egui::Rect::from_min_max(
            egui::pos2(right.left(), right.top() + text_height + PAGE_MARGIN * 2.0),
            right.max,
        )
        .shrink(PAGE_MARGIN);
        if let Some(next) = self.next {
            render::draw_page(
                ui.painter(),
                ctx,
                cache,
                deck,
                next,
                self.next_aspect,
                next_rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f32, height: f32) -> PageSize {
        PageSize { width, height }
    }

    fn view() -> PresenterView {
        PresenterView::new(0, size(612.0, 792.0), Some((1, size(612.0, 792.0))), 5)
    }

    #[test]
    fn seeding_does_not_start_the_timer() {
        let view = view();
        assert!(!view.timer.is_running());
        assert!(view.status_text().contains("00:00"));
    }

    #[test]
    fn set_page_recomputes_both_aspects() {
        let ctx = egui::Context::default();
        let mut view = view();

        view.set_page(2, size(800.0, 400.0), Some((3, size(500.0, 500.0))), true, &ctx);
        assert_eq!(view.current(), 2);
        assert_eq!(view.next(), Some(3));
        assert_eq!(view.current_aspect(), 2.0);
        assert_eq!(view.next_aspect(), 1.0);
    }

    #[test]
    fn last_page_keeps_the_previous_next_aspect() {
        let ctx = egui::Context::default();
        let mut view = view();

        view.set_page(4, size(612.0, 792.0), None, true, &ctx);
        assert_eq!(view.next(), None);
        // The absent page renders nothing; the stored ratio just stays.
        assert!((view.next_aspect() - 612.0 / 792.0).abs() < 1e-6);
    }

    #[test]
    fn navigation_starts_the_timer() {
        let ctx = egui::Context::default();
        let mut view = view();

        view.set_page(1, size(612.0, 792.0), Some((2, size(612.0, 792.0))), true, &ctx);
        assert!(view.timer.is_running());

        // Further navigation keeps it running; it never resets.
        view.set_page(2, size(612.0, 792.0), Some((3, size(612.0, 792.0))), true, &ctx);
        assert!(view.timer.is_running());
    }

    #[test]
    fn status_text_shows_one_based_position() {
        let view = view();
        assert!(view.status_text().ends_with("Slide 1/5"));
    }
}
