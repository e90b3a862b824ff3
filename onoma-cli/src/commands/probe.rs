//! Probe command implementation

use anyhow::Result;
use clap::Args;

use onoma_core::{LanguageSet, RuleRepository};

/// Arguments for the probe command
#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Name kind to probe
    #[arg(value_enum)]
    pub kind: super::NameKindArg,

    /// Input string to walk
    pub input: String,

    /// Rule kind to probe
    #[arg(short, long, value_enum, default_value = "rules")]
    pub rules: super::RuleKindArg,

    /// Languages in scope, comma separated; defaults to the wildcard
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Report every matching rule per position, not just the first
    #[arg(short, long)]
    pub all: bool,
}

impl ProbeArgs {
    /// Execute the probe command
    pub fn execute(&self) -> Result<()> {
        let langs = if self.languages.is_empty() {
            LanguageSet::Any
        } else {
            LanguageSet::from_names(self.languages.iter().cloned())
        };
        let rules = RuleRepository::shared().rules_for(self.kind.into(), self.rules.into(), &langs)?;

        log::info!(
            "probing {:?} with {} rules in scope",
            self.input,
            rules.len()
        );

        for (pos, _) in self.input.char_indices() {
            let mut matched = rules
                .iter()
                .filter(|rule| rule.applies_to(&langs))
                .filter(|rule| rule.pattern_and_context_match(&self.input, pos));
            let hits: Vec<_> = if self.all {
                matched.collect()
            } else {
                matched.next().into_iter().collect()
            };
            for rule in hits {
                println!(
                    "{:>4}  {:?} -> {:?}",
                    pos,
                    rule.pattern(),
                    rule.phoneme()
                );
            }
        }
        Ok(())
    }
}
