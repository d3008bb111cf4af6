//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides one canonical corpus so tests don't each invent their own.

#![doc(hidden)]

/// A small catalog of asset-store-like names: `"<Name> <Publisher>"`.
pub fn catalog() -> Vec<&'static str> {
    vec![
        "Damage Numbers Pro Ekincan Tas",
        "Quantum Console QFSW",
        "Quantum Physics Corp",
        "Smith Co",
        "Dark Tonic Studios",
        "Mesh Baker Pro",
        "Ultimate Inventory System",
        "Shader Graph Toolkit",
    ]
}

/// The catalog as owned strings, for callers that need `Vec<String>`.
pub fn catalog_owned() -> Vec<String> {
    catalog().into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        let words = catalog();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| !w.is_empty()));
        assert_eq!(catalog_owned().len(), words.len());
    }
}
