use std::path::PathBuf;

use clap::Parser;

use crate::app;
use crate::deck::Deck;

#[derive(Parser)]
#[command(name = "pdfdeck")]
#[command(author, version, about)]
#[command(long_about = "A dual-window PDF presentation tool.\n\n\
    The content window shows the current page for the audience while the\n\
    presenter window tracks the current and next pages, the wall clock,\n\
    and the time elapsed since the first slide change.\n\n\
    Examples:\n  \
    pdfdeck talk.pdf             Present a PDF\n  \
    pdfdeck                      Pick the PDF in a file dialog")]
pub struct Cli {
    /// PDF file to present
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let path = match self.file {
            Some(file) => file,
            None => match pick_file() {
                Some(file) => file,
                None => {
                    error_dialog(
                        "No file selected!\n\nYou can specify the PDF file to open on the \
                         command line if you don't want to use the \"Open File\" dialog.",
                    );
                    anyhow::bail!("no file selected");
                }
            },
        };

        // The deck loads before either window is created; a failure gets
        // a dialog and a nonzero exit.
        let deck = match Deck::open(&path) {
            Ok(deck) => deck,
            Err(err) => {
                error_dialog(&format!("Could not open {}:\n\n{err}", path.display()));
                return Err(err.into());
            }
        };

        let title = format!(
            "pdfdeck — {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        app::run(deck, &title)
    }
}

/// Native open dialog, filtered to PDFs with an escape hatch for
/// everything else.
fn pick_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PDF files", &["pdf"])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn error_dialog(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("pdfdeck")
        .set_description(message)
        .show();
}
