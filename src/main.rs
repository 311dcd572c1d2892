use std::io::{self, Write};
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use stanza::{load_corpus, EnglishStemmer, Searcher};

mod cli;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            mode,
            highlight,
            json,
        } => {
            let documents = load_corpus(&corpus)?;
            let searcher = build_searcher(documents);
            let results = searcher.search(&query, mode.into());

            let mut stdout = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &results)?;
                writeln!(stdout)?;
            } else {
                // Keep pipelines clean: markers only when stdout is a
                // color-capable terminal
                let style = if cli::display::use_colors() {
                    highlight.style()
                } else {
                    None
                };
                cli::display::render_results(&mut stdout, &results, style)?;
            }
        }

        Commands::Inspect { corpus } => {
            let documents = load_corpus(&corpus)?;
            let searcher = build_searcher(documents);
            let mut stdout = io::stdout().lock();
            cli::display::render_inspect(&mut stdout, searcher.index())?;
        }
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn build_searcher(documents: Vec<stanza::Document>) -> Searcher {
    Searcher::new_parallel(documents, Arc::new(EnglishStemmer::new()))
}

#[cfg(not(feature = "parallel"))]
fn build_searcher(documents: Vec<stanza::Document>) -> Searcher {
    Searcher::new(documents, Arc::new(EnglishStemmer::new()))
}
