//! Category keys for rule sets
//!
//! Every rule catalog is addressed by a name kind (the naming tradition
//! the catalog covers) and a rule kind (the processing phase it feeds).
//! Both sets are fixed; catalogs are named `<kind>_<rulekind>_<lang>`.

use std::fmt;

/// Naming tradition a rule catalog applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameKind {
    /// Ashkenazi Jewish names
    Ashkenazi,
    /// General names, no particular tradition
    #[default]
    Generic,
    /// Sephardic Jewish names
    Sephardic,
}

impl NameKind {
    /// Every name kind, in catalog order
    pub const ALL: [NameKind; 3] = [NameKind::Ashkenazi, NameKind::Generic, NameKind::Sephardic];

    /// Create a NameKind from its catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ash" | "ashkenazi" => Some(NameKind::Ashkenazi),
            "gen" | "generic" => Some(NameKind::Generic),
            "sep" | "sephardic" => Some(NameKind::Sephardic),
            _ => None,
        }
    }

    /// Get the catalog code
    pub fn code(&self) -> &'static str {
        match self {
            NameKind::Ashkenazi => "ash",
            NameKind::Generic => "gen",
            NameKind::Sephardic => "sep",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Processing phase a rule catalog feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleKind {
    /// Primary transliteration rules
    #[default]
    Rules,
    /// Approximate-matching phoneme folding
    Approx,
    /// Exact-matching phoneme folding
    Exact,
}

impl RuleKind {
    /// Every rule kind, in catalog order
    pub const ALL: [RuleKind; 3] = [RuleKind::Rules, RuleKind::Approx, RuleKind::Exact];

    /// Create a RuleKind from its catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "rules" => Some(RuleKind::Rules),
            "approx" => Some(RuleKind::Approx),
            "exact" => Some(RuleKind::Exact),
            _ => None,
        }
    }

    /// Get the catalog code
    pub fn code(&self) -> &'static str {
        match self {
            RuleKind::Rules => "rules",
            RuleKind::Approx => "approx",
            RuleKind::Exact => "exact",
        }
    }

    /// Whether this is the primary kind. Only non-primary kinds carry a
    /// shared `common` catalog alongside the per-language ones.
    pub fn is_primary(&self) -> bool {
        matches!(self, RuleKind::Rules)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_kind_codes_round_trip() {
        for kind in NameKind::ALL {
            assert_eq!(NameKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_name_kind_from_long_name() {
        assert_eq!(NameKind::from_code("Ashkenazi"), Some(NameKind::Ashkenazi));
        assert_eq!(NameKind::from_code("GENERIC"), Some(NameKind::Generic));
        assert_eq!(NameKind::from_code("klingon"), None);
    }

    #[test]
    fn test_rule_kind_codes_round_trip() {
        for kind in RuleKind::ALL {
            assert_eq!(RuleKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_only_rules_is_primary() {
        assert!(RuleKind::Rules.is_primary());
        assert!(!RuleKind::Approx.is_primary());
        assert!(!RuleKind::Exact.is_primary());
    }
}
