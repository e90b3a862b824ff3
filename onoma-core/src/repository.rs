//! The rule repository
//!
//! Built once from a catalog source and a language registry, read-only
//! afterwards. Every name kind × rule kind × declared language gets its
//! catalog parsed and compiled eagerly; lookups after that are pure map
//! reads and never allocate.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::category::{NameKind, RuleKind};
use crate::error::{Error, Result};
use crate::languages::{LanguageRegistry, LanguageSet, ANY_LANGUAGE};
use crate::parser::{CatalogParser, Diagnostic};
use crate::rule::Rule;
use crate::source::{CatalogSource, EmbeddedCatalogs};

/// Synthetic language key for the shared catalogs of non-primary rule
/// kinds.
pub const COMMON_LANGUAGE: &str = "common";

/// The catalog name for a (kind, rule kind, language) combination
pub fn catalog_name(name_kind: NameKind, rule_kind: RuleKind, language: &str) -> String {
    format!("{}_{}_{}", name_kind.code(), rule_kind.code(), language)
}

type LanguageMap = HashMap<String, Vec<Rule>>;

/// Immutable store of every compiled rule set
pub struct RuleRepository {
    sets: HashMap<NameKind, HashMap<RuleKind, LanguageMap>>,
    diagnostics: Vec<Diagnostic>,
}

static SHARED: OnceLock<RuleRepository> = OnceLock::new();

impl RuleRepository {
    /// Build a repository by parsing and compiling every catalog the
    /// registry declares.
    ///
    /// Fails on the first unreadable catalog, include cycle, or context
    /// expression that does not compile. Malformed lines do not fail
    /// the build; they are skipped and kept as [`diagnostics`].
    ///
    /// [`diagnostics`]: RuleRepository::diagnostics
    pub fn build(source: &impl CatalogSource, registry: &LanguageRegistry) -> Result<Self> {
        let mut parser = CatalogParser::new(source);
        let mut sets = HashMap::new();

        for name_kind in NameKind::ALL {
            let mut kinds = HashMap::new();
            for rule_kind in RuleKind::ALL {
                let mut by_language = LanguageMap::new();
                for language in registry.languages(name_kind) {
                    let rules = load(&mut parser, name_kind, rule_kind, language)?;
                    by_language.insert(language.clone(), rules);
                }
                if !rule_kind.is_primary() {
                    let rules = load(&mut parser, name_kind, rule_kind, COMMON_LANGUAGE)?;
                    by_language.insert(COMMON_LANGUAGE.to_string(), rules);
                }
                kinds.insert(rule_kind, by_language);
            }
            sets.insert(name_kind, kinds);
        }

        Ok(Self {
            sets,
            diagnostics: parser.take_diagnostics(),
        })
    }

    /// The repository over the embedded catalogs, built on first use
    /// and shared for the life of the process.
    pub fn shared() -> &'static RuleRepository {
        SHARED.get_or_init(|| {
            Self::build(&EmbeddedCatalogs, LanguageRegistry::embedded())
                .expect("embedded rule catalogs are valid")
        })
    }

    /// Rules for an exact (name kind, rule kind, language) key.
    ///
    /// An unknown key is [`Error::UnknownRuleSet`]; an empty rule list
    /// under a known key is a valid, non-error result.
    pub fn rules(&self, name_kind: NameKind, rule_kind: RuleKind, language: &str) -> Result<&[Rule]> {
        self.sets
            .get(&name_kind)
            .and_then(|kinds| kinds.get(&rule_kind))
            .and_then(|by_language| by_language.get(language))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownRuleSet {
                name_kind,
                rule_kind,
                language: language.to_string(),
            })
    }

    /// Rules for a requested language set.
    ///
    /// A single concrete language resolves exactly; the wildcard and
    /// every multi-language request resolve through the `any` rule set.
    pub fn rules_for(
        &self,
        name_kind: NameKind,
        rule_kind: RuleKind,
        languages: &LanguageSet,
    ) -> Result<&[Rule]> {
        match languages {
            LanguageSet::Of(set) if set.len() == 1 => {
                let only = set.iter().next().expect("set has one element");
                self.rules(name_kind, rule_kind, only)
            }
            _ => self.rules(name_kind, rule_kind, ANY_LANGUAGE),
        }
    }

    /// Diagnostics collected while the repository was built
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

fn load<S: CatalogSource>(
    parser: &mut CatalogParser<'_, S>,
    name_kind: NameKind,
    rule_kind: RuleKind,
    language: &str,
) -> Result<Vec<Rule>> {
    let name = catalog_name(name_kind, rule_kind, language);
    parser
        .parse(&name)?
        .into_iter()
        .map(|parsed| {
            Rule::new(
                parsed.pattern,
                &parsed.left_context,
                &parsed.right_context,
                parsed.phoneme,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryCatalogs;

    fn tiny_registry() -> LanguageRegistry {
        LanguageRegistry::from_toml(
            r#"
            [ash]
            languages = ["any"]

            [gen]
            languages = ["any", "english"]

            [sep]
            languages = ["any"]
            "#,
        )
        .unwrap()
    }

    fn tiny_source() -> MemoryCatalogs {
        let mut source = MemoryCatalogs::new();
        let registry = tiny_registry();
        for name_kind in NameKind::ALL {
            for rule_kind in RuleKind::ALL {
                for language in registry.languages(name_kind) {
                    source.insert(
                        catalog_name(name_kind, rule_kind, language),
                        "\"a\" \"\" \"\" \"a\"\n",
                    );
                }
                if !rule_kind.is_primary() {
                    source.insert(
                        catalog_name(name_kind, rule_kind, COMMON_LANGUAGE),
                        "\"o\" \"\" \"\" \"o\"\n",
                    );
                }
            }
        }
        source
    }

    #[test]
    fn test_build_and_exact_lookup() {
        let repository = RuleRepository::build(&tiny_source(), &tiny_registry()).unwrap();
        let rules = repository
            .rules(NameKind::Generic, RuleKind::Rules, "english")
            .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern(), "a");
    }

    #[test]
    fn test_common_key_only_for_non_primary_kinds() {
        let repository = RuleRepository::build(&tiny_source(), &tiny_registry()).unwrap();
        assert!(repository
            .rules(NameKind::Generic, RuleKind::Approx, COMMON_LANGUAGE)
            .is_ok());
        assert!(matches!(
            repository.rules(NameKind::Generic, RuleKind::Rules, COMMON_LANGUAGE),
            Err(Error::UnknownRuleSet { .. })
        ));
    }

    #[test]
    fn test_unknown_language_fails_loudly() {
        let repository = RuleRepository::build(&tiny_source(), &tiny_registry()).unwrap();
        match repository.rules(NameKind::Generic, RuleKind::Rules, "klingon") {
            Err(Error::UnknownRuleSet { language, .. }) => assert_eq!(language, "klingon"),
            other => panic!("expected UnknownRuleSet, got {other:?}"),
        }
    }

    #[test]
    fn test_language_set_delegation() {
        let repository = RuleRepository::build(&tiny_source(), &tiny_registry()).unwrap();

        let single = LanguageSet::single("english");
        assert!(repository
            .rules_for(NameKind::Generic, RuleKind::Rules, &single)
            .is_ok());

        // Multi-language and wildcard requests both land on "any".
        let multi = LanguageSet::from_names(["english", "french"]);
        let via_multi = repository
            .rules_for(NameKind::Generic, RuleKind::Rules, &multi)
            .unwrap();
        let via_any = repository
            .rules(NameKind::Generic, RuleKind::Rules, ANY_LANGUAGE)
            .unwrap();
        assert_eq!(via_multi, via_any);
    }

    #[test]
    fn test_missing_catalog_fails_build() {
        let mut source = tiny_source();
        let registry = LanguageRegistry::from_toml(
            r#"
            [ash]
            languages = ["any"]

            [gen]
            languages = ["any", "english", "french"]

            [sep]
            languages = ["any"]
            "#,
        )
        .unwrap();
        // No gen_*_french catalogs exist in the source.
        source.insert("gen_rules_french", "\"a\" \"\" \"\" \"a\"\n");
        assert!(matches!(
            RuleRepository::build(&source, &registry),
            Err(Error::MissingCatalog(_))
        ));
    }
}
