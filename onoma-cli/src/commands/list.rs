//! List command implementation

use anyhow::Result;
use clap::Args;

use onoma_core::{LanguageRegistry, NameKind, RuleKind, RuleRepository, COMMON_LANGUAGE};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list rule sets of this name kind
    #[arg(short, long, value_enum)]
    pub kind: Option<super::NameKindArg>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let repository = RuleRepository::shared();
        let registry = LanguageRegistry::embedded();
        let only: Option<NameKind> = self.kind.map(Into::into);

        println!("{:<6} {:<8} {:<10} {:>6}", "kind", "rules", "language", "count");
        for name_kind in NameKind::ALL {
            if only.is_some_and(|kind| kind != name_kind) {
                continue;
            }
            for rule_kind in RuleKind::ALL {
                for language in registry.languages(name_kind) {
                    print_set(repository, name_kind, rule_kind, language)?;
                }
                if !rule_kind.is_primary() {
                    print_set(repository, name_kind, rule_kind, COMMON_LANGUAGE)?;
                }
            }
        }
        Ok(())
    }
}

fn print_set(
    repository: &RuleRepository,
    name_kind: NameKind,
    rule_kind: RuleKind,
    language: &str,
) -> Result<()> {
    let rules = repository.rules(name_kind, rule_kind, language)?;
    println!(
        "{:<6} {:<8} {:<10} {:>6}",
        name_kind.code(),
        rule_kind.code(),
        language,
        rules.len()
    );
    Ok(())
}
