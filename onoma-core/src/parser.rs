//! Rule catalog text parser
//!
//! Catalogs are line-oriented UTF-8 text: four whitespace-separated,
//! optionally double-quoted fields per rule line, `//` end-of-line
//! comments, `/*` ... `*/` line-level block comments, and `#include`
//! directives that splice another catalog in place. Malformed lines are
//! diagnosed and skipped; only an unreadable catalog or an include
//! cycle aborts a parse.

use std::fmt;

use crate::error::{Error, Result};
use crate::source::CatalogSource;

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const INCLUDE_KEYWORD: &str = "#include";
const DOUBLE_QUOTE: char = '"';

/// One rule line, as written in a catalog
///
/// The plain catalog format carries no language scope; parsed rules are
/// unrestricted until a caller says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// Literal pattern field
    pub pattern: String,
    /// Left context expression field
    pub left_context: String,
    /// Right context expression field
    pub right_context: String,
    /// Phoneme field
    pub phoneme: String,
}

/// A recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Catalog the line came from
    pub catalog: String,
    /// 1-based line number within that catalog
    pub line: u32,
    /// What was wrong
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.catalog, self.line, self.message)
    }
}

/// Parses rule catalogs out of a [`CatalogSource`]
///
/// Diagnostics accumulate across `parse` calls, so one parser can walk
/// a whole catalog family and report everything it skipped.
pub struct CatalogParser<'s, S: CatalogSource> {
    source: &'s S,
    diagnostics: Vec<Diagnostic>,
}

impl<'s, S: CatalogSource> CatalogParser<'s, S> {
    /// Create a parser over a source
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the named catalog, following includes, and return its
    /// rules in textual order.
    pub fn parse(&mut self, name: &str) -> Result<Vec<ParsedRule>> {
        let mut chain = Vec::new();
        self.parse_catalog(name, &mut chain)
    }

    /// Diagnostics collected so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn parse_catalog(&mut self, name: &str, chain: &mut Vec<String>) -> Result<Vec<ParsedRule>> {
        if chain.iter().any(|seen| seen == name) {
            chain.push(name.to_string());
            return Err(Error::IncludeCycle(chain.join(" -> ")));
        }
        let text = self.source.read(name)?;
        chain.push(name.to_string());

        let mut rules = Vec::new();
        let mut in_block_comment = false;

        for (index, raw_line) in text.lines().enumerate() {
            let line_no = index as u32 + 1;

            if in_block_comment {
                if raw_line.ends_with(BLOCK_COMMENT_CLOSE) {
                    in_block_comment = false;
                }
                continue;
            }
            if raw_line.starts_with(BLOCK_COMMENT_OPEN) {
                in_block_comment = true;
                continue;
            }

            let line = match raw_line.find(LINE_COMMENT) {
                Some(at) => &raw_line[..at],
                None => raw_line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix(INCLUDE_KEYWORD) {
                let target = rest.trim();
                if target.contains(char::is_whitespace) {
                    self.warn(name, line_no, format!("malformed include statement: {raw_line:?}"));
                } else {
                    let included = self.parse_catalog(target, chain)?;
                    rules.extend(included);
                }
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                self.warn(
                    name,
                    line_no,
                    format!(
                        "malformed rule statement split into {} fields: {raw_line:?}",
                        fields.len()
                    ),
                );
                continue;
            }
            rules.push(ParsedRule {
                pattern: strip_quotes(fields[0]),
                left_context: strip_quotes(fields[1]),
                right_context: strip_quotes(fields[2]),
                phoneme: strip_quotes(fields[3]),
            });
        }

        chain.pop();
        Ok(rules)
    }

    fn warn(&mut self, catalog: &str, line: u32, message: String) {
        log::warn!("{catalog}:{line}: {message}");
        self.diagnostics.push(Diagnostic {
            catalog: catalog.to_string(),
            line,
            message,
        });
    }
}

/// Strip at most one leading and one trailing double quote. Interior
/// quotes are left alone; this is not an unescape.
fn strip_quotes(field: &str) -> String {
    let field = field.strip_prefix(DOUBLE_QUOTE).unwrap_or(field);
    let field = field.strip_suffix(DOUBLE_QUOTE).unwrap_or(field);
    field.to_string()
}
