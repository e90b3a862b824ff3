//! The phoneme rule entity
//!
//! A rule carries a literal pattern, a left and a right context
//! expression, the phoneme it produces, and a language scope. It matches
//! at a position when the pattern sits there literally, the left context
//! matches the text ending at the pattern, and the right context matches
//! the text starting after it. Rules are immutable and safe to share
//! across threads.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::languages::LanguageSet;

/// How a rule's language set combines with a requested set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageLogic {
    /// At least one of the rule's languages must be requested
    #[default]
    Any,
    /// Every one of the rule's languages must be requested
    All,
}

/// A phoneme rule
///
/// Context expressions are compiled once at construction: the left
/// context is anchored to end exactly where the pattern begins, the
/// right context to start exactly where it ends. Both use search
/// semantics within their side of the input, so an unanchored end is
/// free to match anywhere.
#[derive(Clone)]
pub struct Rule {
    pattern: String,
    left_context: Regex,
    right_context: Regex,
    phoneme: String,
    languages: BTreeSet<String>,
    logic: LanguageLogic,
}

impl Rule {
    /// Create a rule with no language restriction.
    ///
    /// Fails with [`Error::InvalidContext`] when either context
    /// expression does not compile.
    pub fn new(
        pattern: impl Into<String>,
        left_context: &str,
        right_context: &str,
        phoneme: impl Into<String>,
    ) -> Result<Self> {
        let compile = |expr: &str, anchored: String| {
            Regex::new(&anchored).map_err(|e| Error::InvalidContext {
                expr: expr.to_string(),
                source: e,
            })
        };

        Ok(Self {
            pattern: pattern.into(),
            left_context: compile(left_context, format!("{left_context}$"))?,
            right_context: compile(right_context, format!("^{right_context}"))?,
            phoneme: phoneme.into(),
            languages: BTreeSet::new(),
            logic: LanguageLogic::default(),
        })
    }

    /// Restrict the rule to a set of languages
    pub fn with_languages(mut self, languages: BTreeSet<String>, logic: LanguageLogic) -> Self {
        self.languages = languages;
        self.logic = logic;
        self
    }

    /// Decide if the pattern and both contexts match `input` at `pos`.
    ///
    /// `pos` is a byte offset. When the pattern cannot fit between `pos`
    /// and the end of the input the rule does not match.
    ///
    /// # Panics
    ///
    /// Panics when `pos` does not lie on a character boundary of
    /// `input`. That is a caller bug, not a failed match.
    pub fn pattern_and_context_match(&self, input: &str, pos: usize) -> bool {
        let Some(end) = pos.checked_add(self.pattern.len()) else {
            return false;
        };
        if end > input.len() {
            // not enough room for the pattern to match
            return false;
        }
        assert!(
            input.is_char_boundary(pos),
            "cannot match pattern off a character boundary (byte {pos})"
        );

        if input.as_bytes()[pos..end] != *self.pattern.as_bytes() {
            return false;
        }
        // The pattern span is valid UTF-8, so `end` is a boundary here.
        self.right_context.is_match(&input[end..]) && self.left_context.is_match(&input[..pos])
    }

    /// Decide if the rule's language restriction is satisfied.
    ///
    /// A wildcard request or an unrestricted rule always passes,
    /// whatever the logic flag says. Otherwise [`LanguageLogic::All`]
    /// requires the request to cover every rule language, and
    /// [`LanguageLogic::Any`] requires it to share at least one.
    pub fn applies_to(&self, requested: &LanguageSet) -> bool {
        if requested.is_any() || self.languages.is_empty() {
            return true;
        }
        match self.logic {
            LanguageLogic::All => self.languages.iter().all(|l| requested.contains(l)),
            LanguageLogic::Any => self.languages.iter().any(|l| requested.contains(l)),
        }
    }

    /// The literal pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The phoneme produced when the rule fires
    pub fn phoneme(&self) -> &str {
        &self.phoneme
    }

    /// The compiled left context, as anchored
    pub fn left_context(&self) -> &Regex {
        &self.left_context
    }

    /// The compiled right context, as anchored
    pub fn right_context(&self) -> &Regex {
        &self.right_context
    }

    /// Languages the rule is restricted to; empty means unrestricted
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    /// The language combination logic
    pub fn logic(&self) -> LanguageLogic {
        self.logic
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.left_context.as_str() == other.left_context.as_str()
            && self.right_context.as_str() == other.right_context.as_str()
            && self.phoneme == other.phoneme
            && self.languages == other.languages
            && self.logic == other.logic
    }
}

impl Eq for Rule {}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("left_context", &self.left_context.as_str())
            .field("right_context", &self.right_context.as_str())
            .field("phoneme", &self.phoneme)
            .field("languages", &self.languages)
            .field("logic", &self.logic)
            .finish()
    }
}
