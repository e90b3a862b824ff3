//! Engine error types

use thiserror::Error;

use crate::category::{NameKind, RuleKind};

/// Errors raised while building or querying a rule repository
#[derive(Debug, Error)]
pub enum Error {
    /// A declared catalog source could not be read
    #[error("missing rule catalog: {0}")]
    MissingCatalog(String),

    /// An include chain revisited a catalog it is already parsing
    #[error("include cycle detected: {0}")]
    IncludeCycle(String),

    /// A context expression failed to compile
    #[error("invalid context expression {expr:?}: {source}")]
    InvalidContext {
        /// The offending expression as written in the catalog
        expr: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration loading or parsing error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A lookup named a rule set the repository does not hold
    #[error("no rules found for {name_kind}, {rule_kind}, {language}")]
    UnknownRuleSet {
        /// Requested name kind
        name_kind: NameKind,
        /// Requested rule kind
        rule_kind: RuleKind,
        /// Requested language key
        language: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
