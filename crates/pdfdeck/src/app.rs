use eframe::egui;

use crate::content::ContentView;
use crate::deck::Deck;
use crate::input::{self, Gesture};
use crate::navigation::NavigationState;
use crate::presenter::PresenterView;
use crate::render::PageTextureCache;

/// Owns the deck and the navigation state, and routes every gesture from
/// either window through one dispatch point.
struct DeckApp {
    deck: Deck,
    nav: NavigationState,
    content: ContentView,
    presenter: PresenterView,
    textures: PageTextureCache,
}

impl DeckApp {
    fn new(deck: Deck, initial_page: isize) -> Self {
        let nav = NavigationState::new(deck.page_count(), initial_page);
        let spread = nav.spread(nav.current() as isize);
        let current_size = deck.page_size(spread.index);

        let content = ContentView::new(spread.index, current_size);
        let presenter = PresenterView::new(
            spread.index,
            current_size,
            spread.next.map(|i| (i, deck.page_size(i))),
            nav.page_count(),
        );

        Self {
            deck,
            nav,
            content,
            presenter,
            textures: PageTextureCache::default(),
        }
    }

    /// Moves by `delta` pages and pushes the new pair into both windows.
    /// At a boundary the index stays put but the pages are still
    /// re-pushed.
    fn advance(&mut self, delta: isize, ctx: &egui::Context) {
        let spread = self.nav.advance(delta);
        let current_size = self.deck.page_size(spread.index);

        self.content.set_page(spread.index, current_size, ctx);
        self.presenter.set_page(
            spread.index,
            current_size,
            spread.next.map(|i| (i, self.deck.page_size(i))),
            true,
            ctx,
        );
    }

    fn handle(&mut self, gesture: Gesture, ctx: &egui::Context) {
        match gesture {
            Gesture::Advance => self.advance(1, ctx),
            Gesture::Retreat => self.advance(-1, ctx),
            Gesture::ToggleFullscreen => self.content.toggle_fullscreen(ctx),
            Gesture::Quit => quit(ctx),
        }
    }
}

fn quit(ctx: &egui::Context) {
    ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut gestures = ctx.input(|i| input::gather(i));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK).inner_margin(0.0))
            .show(ctx, |ui| {
                self.content.ui(ui, ctx, &self.deck, &mut self.textures);
            });

        let (presenter_gestures, presenter_closed) =
            self.presenter.show(ctx, &self.deck, &mut self.textures);
        gestures.extend(presenter_gestures);

        // Closing either window ends the presentation.
        if presenter_closed {
            quit(ctx);
        }

        for gesture in gestures {
            self.handle(gesture, ctx);
        }
    }
}

/// Opens both windows for an already-loaded deck and runs the event loop
/// until quit. Loading happens before this, so a bad file never flashes
/// a window.
pub fn run(deck: Deck, title: &str) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(deck, 0)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
