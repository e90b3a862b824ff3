//! Show command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use onoma_core::{Rule, RuleRepository};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Name kind of the rule set
    #[arg(value_enum)]
    pub kind: super::NameKindArg,

    /// Rule kind of the rule set
    #[arg(value_enum)]
    pub rules: super::RuleKindArg,

    /// Language key, a concrete language or "any" or "common"
    pub language: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One rule per line
    Text,
    /// JSON array of rules
    Json,
}

/// Serialized view of one rule. Context expressions are shown in their
/// compiled, anchored form.
#[derive(Debug, Serialize)]
struct RuleDto<'a> {
    pattern: &'a str,
    left_context: &'a str,
    right_context: &'a str,
    phoneme: &'a str,
}

impl<'a> From<&'a Rule> for RuleDto<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            pattern: rule.pattern(),
            left_context: rule.left_context().as_str(),
            right_context: rule.right_context().as_str(),
            phoneme: rule.phoneme(),
        }
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> Result<()> {
        let rules = RuleRepository::shared().rules(self.kind.into(), self.rules.into(), &self.language)?;

        match self.format {
            OutputFormat::Text => {
                for rule in rules {
                    let dto = RuleDto::from(rule);
                    println!(
                        "{:<10} {:<14} {:<14} {}",
                        dto.pattern, dto.left_context, dto.right_context, dto.phoneme
                    );
                }
            }
            OutputFormat::Json => {
                let dtos: Vec<RuleDto<'_>> = rules.iter().map(Into::into).collect();
                println!("{}", serde_json::to_string_pretty(&dtos)?);
            }
        }
        Ok(())
    }
}
