//! Catalog sources
//!
//! The parser and repository read catalog text through [`CatalogSource`],
//! keyed by flat catalog name. Where the bytes live is the source's
//! business; the shipped catalogs are compiled in.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Provides catalog text by name
pub trait CatalogSource {
    /// Read the UTF-8 text of the named catalog.
    ///
    /// A catalog that cannot be read is [`Error::MissingCatalog`]; at
    /// repository build time that is fatal.
    fn read(&self, name: &str) -> Result<String>;
}

macro_rules! embed_catalog {
    ($name:literal) => {
        ($name, include_str!(concat!("../configs/rules/", $name, ".txt")))
    };
}

static EMBEDDED: &[(&str, &str)] = &[
    embed_catalog!("ash_approx_any"),
    embed_catalog!("ash_approx_common"),
    embed_catalog!("ash_approx_english"),
    embed_catalog!("ash_approx_german"),
    embed_catalog!("ash_exact_any"),
    embed_catalog!("ash_exact_common"),
    embed_catalog!("ash_exact_english"),
    embed_catalog!("ash_exact_german"),
    embed_catalog!("ash_rules_any"),
    embed_catalog!("ash_rules_english"),
    embed_catalog!("ash_rules_german"),
    embed_catalog!("gen_approx_any"),
    embed_catalog!("gen_approx_common"),
    embed_catalog!("gen_approx_english"),
    embed_catalog!("gen_approx_french"),
    embed_catalog!("gen_approx_german"),
    embed_catalog!("gen_exact_any"),
    embed_catalog!("gen_exact_common"),
    embed_catalog!("gen_exact_english"),
    embed_catalog!("gen_exact_french"),
    embed_catalog!("gen_exact_german"),
    embed_catalog!("gen_rules_any"),
    embed_catalog!("gen_rules_english"),
    embed_catalog!("gen_rules_french"),
    embed_catalog!("gen_rules_german"),
    embed_catalog!("sep_approx_any"),
    embed_catalog!("sep_approx_common"),
    embed_catalog!("sep_approx_french"),
    embed_catalog!("sep_approx_spanish"),
    embed_catalog!("sep_exact_any"),
    embed_catalog!("sep_exact_common"),
    embed_catalog!("sep_exact_french"),
    embed_catalog!("sep_exact_spanish"),
    embed_catalog!("sep_rules_any"),
    embed_catalog!("sep_rules_french"),
    embed_catalog!("sep_rules_spanish"),
];

/// The catalogs shipped with the crate, compiled in
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogs;

impl CatalogSource for EmbeddedCatalogs {
    fn read(&self, name: &str) -> Result<String> {
        EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| Error::MissingCatalog(name.to_string()))
    }
}

/// An in-memory source, for tests and programmatic catalogs
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogs {
    catalogs: HashMap<String, String>,
}

impl MemoryCatalogs {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a catalog
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.catalogs.insert(name.into(), text.into());
        self
    }
}

impl CatalogSource for MemoryCatalogs {
    fn read(&self, name: &str) -> Result<String> {
        self.catalogs
            .get(name)
            .cloned()
            .ok_or_else(|| Error::MissingCatalog(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogs_are_complete() {
        let source = EmbeddedCatalogs;
        for (name, _) in EMBEDDED {
            assert!(source.read(name).is_ok());
        }
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        assert!(matches!(
            EmbeddedCatalogs.read("gen_rules_klingon"),
            Err(Error::MissingCatalog(name)) if name == "gen_rules_klingon"
        ));
    }

    #[test]
    fn test_memory_catalogs_round_trip() {
        let mut source = MemoryCatalogs::new();
        source.insert("test_rules_x", "\"a\" \"\" \"\" \"a\"\n");
        assert_eq!(
            source.read("test_rules_x").unwrap(),
            "\"a\" \"\" \"\" \"a\"\n"
        );
        assert!(source.read("other").is_err());
    }
}
