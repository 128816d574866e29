//! Board and list resolution by title.
//!
//! Mirrors wekan's own lookup behaviour: a case-insensitive substring match
//! by default, an exact title comparison when requested, first match in
//! provider order wins. An unmatched query is a hard error so callers can
//! tell "no board matched" apart from "board matched, zero cards".

use burndown_core::error::{BurndownError, Result};
use burndown_core::models::{BoardList, Card, SortField};
use regex::RegexBuilder;
use tracing::debug;

use crate::reader::BoardExport;

// ── BoardResolver ─────────────────────────────────────────────────────────────

/// Resolves title queries against a set of loaded board exports.
pub struct BoardResolver {
    exports: Vec<BoardExport>,
}

impl BoardResolver {
    /// Wrap the loaded exports. Order is preserved and decides tie-breaks:
    /// when several boards match a query, the first in export order wins.
    pub fn new(exports: Vec<BoardExport>) -> Self {
        Self { exports }
    }

    /// Number of loaded board exports.
    pub fn board_count(&self) -> usize {
        self.exports.len()
    }

    /// Find the board whose title matches `query`.
    pub fn find_board(&self, query: &str, exact: bool) -> Result<&BoardExport> {
        let matcher = TitleMatcher::new(query, exact);
        let found = self
            .exports
            .iter()
            .find(|e| matcher.matches(&e.board.title))
            .ok_or_else(|| BurndownError::BoardNotFound(query.to_string()))?;
        debug!(
            "Board query \"{}\" resolved to \"{}\" ({})",
            query,
            found.board.title,
            found.source.display()
        );
        Ok(found)
    }

    /// Find the list on `export` whose title matches `query`.
    pub fn find_list<'a>(
        &self,
        export: &'a BoardExport,
        query: &str,
        exact: bool,
    ) -> Result<&'a BoardList> {
        let matcher = TitleMatcher::new(query, exact);
        export
            .lists
            .iter()
            .find(|l| matcher.matches(&l.title))
            .ok_or_else(|| BurndownError::ListNotFound(query.to_string()))
    }

    /// Collect the cards of `export`, optionally narrowed to one list, sorted
    /// ascending by the selected timestamp.
    ///
    /// Cards missing the sort timestamp sort first; the aggregator skips
    /// them anyway. May legitimately return an empty vector.
    pub fn cards_sorted(
        &self,
        export: &BoardExport,
        list_id: Option<&str>,
        sort_field: SortField,
    ) -> Vec<Card> {
        let mut cards: Vec<Card> = export
            .cards
            .iter()
            .filter(|c| list_id.map_or(true, |id| c.list_id == id))
            .cloned()
            .collect();
        cards.sort_by_key(|c| sort_field.timestamp_of(c));
        cards
    }
}

// ── TitleMatcher ──────────────────────────────────────────────────────────────

/// Compiled title predicate: exact comparison or case-insensitive substring.
struct TitleMatcher {
    query: String,
    pattern: Option<regex::Regex>,
}

impl TitleMatcher {
    fn new(query: &str, exact: bool) -> Self {
        let pattern = if exact {
            None
        } else {
            // Escape the query so titles with regex metacharacters, e.g.
            // "Sprint (Q1)", match literally.
            RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()
                .ok()
        };
        Self {
            query: query.to_string(),
            pattern,
        }
    }

    fn matches(&self, title: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(title),
            None => title == self.query,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
