use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Fuzzy, phonetic, frequency-learning autocomplete over name catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog file for a query
    Search {
        /// Path to the catalog: one name per line, blank lines skipped
        #[arg(short, long)]
        corpus: String,

        /// The (possibly partial or misspelled) query
        query: String,

        /// Maximum number of suggestions to return
        #[arg(short, long, default_value_t = typeahead::DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Show the score next to each suggestion
        #[arg(long)]
        scores: bool,

        /// Emit results as a JSON array instead of plain lines
        #[arg(long)]
        json: bool,

        /// Disable the phonetic candidate source and bonus
        #[arg(long)]
        no_phonetic: bool,

        /// Maximum edit distance for fuzzy matching
        #[arg(long, default_value_t = 2)]
        max_distance: usize,
    },

    /// Print the phonetic code for a word
    Encode {
        /// Word to encode
        word: String,
    },

    /// Print the tokens a string splits into
    Tokens {
        /// Text to tokenize
        text: String,
    },
}
