mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // A wrong file count is a usage hint, not an error: print usage and
    // exit 0.
    if cli.files.len() != 1 {
        println!("Requires exactly one LaTeX file argument.");
        println!("{}", Cli::command().render_usage());
        return;
    }

    let result = commands::compile::run(
        &cli.files[0],
        cli.papersize.as_deref(),
        cli.show,
        cli.noclean,
        cli.verbose,
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
