mod app;
mod cli;
mod content;
mod deck;
mod input;
mod navigation;
mod presenter;
mod render;
mod timer;

use clap::Parser;
use colored::Colorize;

fn main() {
    init_logging();

    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging() {
    let _ = simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
