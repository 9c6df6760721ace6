//! Keyword filter for scene and entity names.
//!
//! A keyword string is split on whitespace into terms. Each term must
//! occur in the candidate name; a term written as `-word` must not occur.
//! Terms combine with AND. Matching is case-sensitive and unanchored.
//!
//! A lone `-` is an ordinary term and matches names containing a hyphen.
//!
//! # Usage
//!
//! ```
//! use rehearsal_views::filter::KeywordFilter;
//!
//! let filter = KeywordFilter::compile("act1 -cut");
//! assert!(filter.matches("act1 scene2"));
//! assert!(!filter.matches("act1 scene2 (cut)"));
//! ```

use serde::{Deserialize, Serialize};

/// Characters escaped in the pattern form of a term.
const PATTERN_METACHARS: &[char] = &[
    '\\', '^', '$', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|',
];

/// One term of a compiled filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// The name must contain this text.
    Require(String),
    /// The name must not contain this text.
    Exclude(String),
}

impl Term {
    fn parse(token: &str) -> Self {
        match token.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => Self::Exclude(rest.to_string()),
            _ => Self::Require(token.to_string()),
        }
    }

    /// Whether `name` satisfies this term.
    #[inline]
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            Self::Require(text) => name.contains(text.as_str()),
            Self::Exclude(text) => !name.contains(text.as_str()),
        }
    }
}

/// A compiled keyword filter.
///
/// Compile once and reuse for every candidate. The empty filter accepts
/// everything, including the empty name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordFilter {
    terms: Vec<Term>,
}

impl KeywordFilter {
    /// Compiles a keyword string.
    pub fn compile(keyword: &str) -> Self {
        let terms: Vec<Term> = keyword.split_whitespace().map(Term::parse).collect();
        tracing::trace!(keyword, terms = terms.len(), "compiled keyword filter");
        Self { terms }
    }

    /// A filter that accepts every name.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Whether this filter accepts every name.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The compiled terms.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Whether `name` passes every term.
    pub fn matches(&self, name: &str) -> bool {
        self.terms.iter().all(|t| t.accepts(name))
    }

    /// Indices of the matching names, in input order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<usize> {
        names
            .iter()
            .enumerate()
            .filter(|(_, n)| self.matches(n.as_ref()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Equivalent regular expression using lookahead groups.
    ///
    /// `.*` for the empty filter; otherwise `^` followed by `(?=.*term)`
    /// or `(?!.*term)` per term, with each term escaped by [`escape_term`].
    pub fn pattern(&self) -> String {
        if self.terms.is_empty() {
            return ".*".to_string();
        }
        let mut pattern = String::from("^");
        for term in &self.terms {
            match term {
                Term::Require(text) => {
                    pattern.push_str("(?=.*");
                    pattern.push_str(&escape_term(text));
                }
                Term::Exclude(text) => {
                    pattern.push_str("(?!.*");
                    pattern.push_str(&escape_term(text));
                }
            }
            pattern.push(')');
        }
        pattern
    }
}

/// Escapes `\ ^ $ . * + ? ( ) [ ] { } |` with a backslash.
///
/// No other character is touched, `-` included.
pub fn escape_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if PATTERN_METACHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
