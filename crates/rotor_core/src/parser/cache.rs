//! Source-provider function cache.
//!
//! The first full parse of a source records, for every sufficiently large
//! function body, everything a later parse of the *same provider* needs to
//! skip that body: where it ends, the token that closed it, the parameter
//! count, strictness, and the function's free variables (so the enclosing
//! scope still sees its captures).  On re-entry the parser replays the entry
//! instead of descending into the body.
//!
//! The cache is keyed by the byte offset of the function's parameter list —
//! stable for a given provider — and owned by the embedder: its lifetime
//! *is* the provider identity, and entries are never invalidated.  Sharing a
//! cache across different sources is an embedder error this type does not
//! police.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::arena::IdentId;
use crate::parser::token::{Position, Token};

/// Minimum body length (in bytes) for a `{…}` block body to be cached.
/// `function(){}` plus a few characters; anything smaller re-parses faster
/// than a cache probe pays for.
pub const BLOCK_BODY_CACHE_THRESHOLD: usize = 16;

/// Minimum body length (in bytes) for an arrow concise-expression body to be
/// cached.
pub const ARROW_BODY_CACHE_THRESHOLD: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// CacheEntry
// ─────────────────────────────────────────────────────────────────────────────

/// Skip-reparse record for one function body.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Position of the first body token (the `{`, or the start of an arrow
    /// expression body).
    pub body_start: Position,
    /// Lexer position just past the end of the body.
    pub body_end: Position,
    /// The token that terminated the body (the closing `}`, or the token
    /// after an arrow expression body), replayed into the parser verbatim.
    pub end_token: Token,
    /// Number of declared parameters.
    pub parameter_count: u32,
    /// `true` when the function body is strict.
    pub strict: bool,
    /// Free variables of the function — names used but not declared inside
    /// it — replayed into the enclosing scope on a cache hit.
    pub uses: SmallVec<[IdentId; 8]>,
    /// `true` when the body is an arrow concise expression rather than a
    /// `{…}` block.
    pub is_arrow_expression_body: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// SourceProviderCache
// ─────────────────────────────────────────────────────────────────────────────

/// All cached function bodies of one source provider.
#[derive(Debug, Default)]
pub struct SourceProviderCache {
    entries: HashMap<usize, CacheEntry>,
}

impl SourceProviderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry for the function whose parameter list starts at
    /// `start_offset`.
    pub fn get(&self, start_offset: usize) -> Option<&CacheEntry> {
        self.entries.get(&start_offset)
    }

    /// Record `entry` for the function starting at `start_offset`.  An
    /// existing entry wins: a re-parse of the same provider must not churn
    /// the cache.
    pub fn insert(&mut self, start_offset: usize, entry: CacheEntry) {
        self.entries.entry(start_offset).or_insert(entry);
    }

    /// Number of cached function bodies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `true` when a body of `body_len` bytes is worth caching.
pub fn worth_caching(body_len: usize, is_arrow_expression_body: bool) -> bool {
    let threshold = if is_arrow_expression_body {
        ARROW_BODY_CACHE_THRESHOLD
    } else {
        BLOCK_BODY_CACHE_THRESHOLD
    };
    body_len > threshold
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{Span, TokenKind, TokenValue};

    fn entry(parameter_count: u32) -> CacheEntry {
        let pos = Position {
            offset: 40,
            line: 2,
            column: 1,
        };
        CacheEntry {
            body_start: Position {
                offset: 20,
                line: 1,
                column: 21,
            },
            body_end: pos,
            end_token: Token {
                kind: TokenKind::RightBrace,
                value: TokenValue::None,
                span: Span {
                    start: pos,
                    end: pos,
                },
                had_line_terminator_before: false,
            },
            parameter_count,
            strict: false,
            uses: SmallVec::new(),
            is_arrow_expression_body: false,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = SourceProviderCache::new();
        assert!(cache.get(10).is_none());
        cache.insert(10, entry(2));
        assert_eq!(cache.get(10).unwrap().parameter_count, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_existing_entry_wins() {
        let mut cache = SourceProviderCache::new();
        cache.insert(10, entry(2));
        cache.insert(10, entry(9));
        assert_eq!(cache.get(10).unwrap().parameter_count, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_thresholds() {
        assert!(!worth_caching(BLOCK_BODY_CACHE_THRESHOLD, false));
        assert!(worth_caching(BLOCK_BODY_CACHE_THRESHOLD + 1, false));
        assert!(!worth_caching(ARROW_BODY_CACHE_THRESHOLD, true));
        assert!(worth_caching(ARROW_BODY_CACHE_THRESHOLD + 1, true));
    }
}
