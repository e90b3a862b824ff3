//! Rule representation and matching engine for phonetic name encoding
//!
//! A phonetic encoder walks a name left to right, asking at each
//! position which transformation rule fires. This crate is the part
//! underneath that walk: the rule entity with its pattern-and-context
//! match predicate and language scoping, the catalog text parser, and
//! the build-once repository that serves every rule set by name kind,
//! rule kind, and language. The encoding walk itself and the guessing
//! of a name's languages live with the caller.
//!
//! Everything is immutable after the repository is built; rules and
//! repositories can be read from any number of threads without locks.
//!
//! # Example
//!
//! ```rust
//! use onoma_core::{LanguageSet, NameKind, RuleKind, RuleRepository};
//!
//! let repository = RuleRepository::shared();
//! let langs = LanguageSet::single("english");
//! let rules = repository
//!     .rules_for(NameKind::Generic, RuleKind::Rules, &langs)
//!     .unwrap();
//!
//! let name = "schmidt";
//! let fired: Vec<_> = rules
//!     .iter()
//!     .filter(|rule| rule.applies_to(&langs))
//!     .filter(|rule| rule.pattern_and_context_match(name, 0))
//!     .map(|rule| rule.phoneme())
//!     .collect();
//! assert!(!fired.is_empty());
//! ```

pub mod category;
pub mod error;
pub mod languages;
pub mod parser;
pub mod repository;
pub mod rule;
pub mod source;

pub use category::{NameKind, RuleKind};
pub use error::{Error, Result};
pub use languages::{LanguageRegistry, LanguageSet, ANY_LANGUAGE};
pub use parser::{CatalogParser, Diagnostic, ParsedRule};
pub use repository::{catalog_name, RuleRepository, COMMON_LANGUAGE};
pub use rule::{LanguageLogic, Rule};
pub use source::{CatalogSource, EmbeddedCatalogs, MemoryCatalogs};
