mod app;
mod cli;
mod commands;
mod error;
mod interval;
mod launcher;
mod logging;
mod notice;
mod render;
mod scanner;
mod slideshow;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, cli.quiet, !cli.no_color);

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
