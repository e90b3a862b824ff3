//! CLI command implementations

use clap::Subcommand;

use onoma_core::{NameKind, RuleKind};

pub mod check;
pub mod list;
pub mod probe;
pub mod show;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every rule set the engine ships
    List(list::ListArgs),

    /// Print the rules of one rule set
    Show(show::ShowArgs),

    /// Parse a catalog file and report malformed lines
    Check(check::CheckArgs),

    /// Report which rules match an input at which positions
    Probe(probe::ProbeArgs),
}

/// Name kinds as CLI values
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum NameKindArg {
    /// Ashkenazi names
    Ash,
    /// General names
    Gen,
    /// Sephardic names
    Sep,
}

impl From<NameKindArg> for NameKind {
    fn from(arg: NameKindArg) -> Self {
        match arg {
            NameKindArg::Ash => NameKind::Ashkenazi,
            NameKindArg::Gen => NameKind::Generic,
            NameKindArg::Sep => NameKind::Sephardic,
        }
    }
}

/// Rule kinds as CLI values
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RuleKindArg {
    /// Primary transliteration rules
    Rules,
    /// Approximate-matching folding
    Approx,
    /// Exact-matching folding
    Exact,
}

impl From<RuleKindArg> for RuleKind {
    fn from(arg: RuleKindArg) -> Self {
        match arg {
            RuleKindArg::Rules => RuleKind::Rules,
            RuleKindArg::Approx => RuleKind::Approx,
            RuleKindArg::Exact => RuleKind::Exact,
        }
    }
}
