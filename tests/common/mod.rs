//! Shared test utilities and fixtures.

#![allow(dead_code)]

use typeahead::{Autocomplete, AutocompleteOptions};

// Re-export the canonical catalog from typeahead::testing
pub use typeahead::testing::{catalog, catalog_owned};

/// Engine built from the canonical catalog with default options.
pub fn build_engine() -> Autocomplete {
    Autocomplete::new(catalog()).expect("catalog has no empty entries")
}

/// Engine built from the canonical catalog with the phonetic source off.
pub fn build_engine_no_phonetic() -> Autocomplete {
    let options = AutocompleteOptions {
        use_phonetic: false,
        ..AutocompleteOptions::default()
    };
    Autocomplete::with_options(catalog(), options).expect("catalog has no empty entries")
}

/// A larger synthetic catalog in the `"<Name> <Publisher>"` shape.
pub fn synthetic_catalog(size: usize) -> Vec<String> {
    let adjectives = ["Ultimate", "Simple", "Advanced", "Modular", "Dynamic"];
    let nouns = ["Inventory", "Shader", "Terrain", "Dialogue", "Physics"];
    let publishers = ["Studios", "Labs", "Works", "Forge", "Collective"];

    (0..size)
        .map(|i| {
            format!(
                "{} {} {:03} {}",
                adjectives[i % adjectives.len()],
                nouns[(i / adjectives.len()) % nouns.len()],
                i,
                publishers[i % publishers.len()],
            )
        })
        .collect()
}
