use clap::Parser;
use std::fs;

use typeahead::{encode, tokenize, Autocomplete, AutocompleteOptions};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            scores,
            json,
            no_phonetic,
            max_distance,
        } => run_search(
            &corpus,
            &query,
            limit,
            scores,
            json,
            no_phonetic,
            max_distance,
        ),
        Commands::Encode { word } => {
            println!("{}", encode(&word));
            Ok(())
        }
        Commands::Tokens { text } => {
            for token in tokenize(&text) {
                println!("{}", token);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    corpus_path: &str,
    query: &str,
    limit: usize,
    scores: bool,
    json: bool,
    no_phonetic: bool,
    max_distance: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(corpus_path)
        .map_err(|e| format!("failed to read {}: {}", corpus_path, e))?;
    let corpus: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let options = AutocompleteOptions {
        max_edit_distance: max_distance,
        use_phonetic: !no_phonetic,
    };
    let engine = Autocomplete::with_options(corpus, options)?;

    let ranked = engine.search_with_score(query, limit)?;

    if json {
        let payload = serde_json::to_string_pretty(&ranked)?;
        println!("{}", payload);
    } else if scores {
        for scored in &ranked {
            println!("{}", scored);
        }
    } else {
        for scored in &ranked {
            println!("{}", scored.suggestion.word);
        }
    }

    Ok(())
}
