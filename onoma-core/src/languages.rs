//! Language sets and the per-kind language registry
//!
//! Rules are scoped to languages. Callers request rules with a
//! [`LanguageSet`]; the registry declares which concrete languages each
//! name kind ships catalogs for.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::category::NameKind;
use crate::error::{Error, Result};

/// Wildcard language marker. A requested set containing it bypasses all
/// language restrictions, and `<kind>_<rulekind>_any` catalogs hold the
/// rule sets served for multi-language requests.
pub const ANY_LANGUAGE: &str = "any";

/// A set of languages requested by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSet {
    /// The wildcard: no restriction
    Any,
    /// A concrete set of language names
    Of(BTreeSet<String>),
}

impl LanguageSet {
    /// Build a set from language names. A set containing the wildcard
    /// marker collapses to [`LanguageSet::Any`].
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if set.contains(ANY_LANGUAGE) {
            LanguageSet::Any
        } else {
            LanguageSet::Of(set)
        }
    }

    /// Build a single-language set
    pub fn single(name: impl Into<String>) -> Self {
        Self::from_names([name.into()])
    }

    /// Whether this set is the wildcard
    pub fn is_any(&self) -> bool {
        matches!(self, LanguageSet::Any)
    }

    /// Whether a concrete language is in the set. The wildcard contains
    /// every language.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            LanguageSet::Any => true,
            LanguageSet::Of(set) => set.contains(name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegistryConfig {
    ash: KindLanguages,
    gen: KindLanguages,
    sep: KindLanguages,
}

#[derive(Debug, Deserialize)]
struct KindLanguages {
    languages: Vec<String>,
}

/// Languages declared per name kind
///
/// The repository builds one rule set per declared language, so a
/// language listed here must have a catalog for every rule kind of its
/// name kind. The wildcard language is declared like any other because
/// wildcard catalogs are ordinary rule sets.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    ash: BTreeSet<String>,
    gen: BTreeSet<String>,
    sep: BTreeSet<String>,
}

static EMBEDDED_REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Parse a registry from its TOML form
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(text)
            .map_err(|e| Error::Configuration(format!("failed to parse language registry: {e}")))?;

        Ok(Self {
            ash: config.ash.languages.into_iter().collect(),
            gen: config.gen.languages.into_iter().collect(),
            sep: config.sep.languages.into_iter().collect(),
        })
    }

    /// The registry shipped with the crate
    pub fn embedded() -> &'static LanguageRegistry {
        EMBEDDED_REGISTRY.get_or_init(|| {
            Self::from_toml(include_str!("../configs/languages.toml"))
                .expect("embedded language registry is valid")
        })
    }

    /// Languages declared for a name kind, in sorted order
    pub fn languages(&self, kind: NameKind) -> &BTreeSet<String> {
        match kind {
            NameKind::Ashkenazi => &self.ash,
            NameKind::Generic => &self.gen,
            NameKind::Sephardic => &self.sep,
        }
    }
}
