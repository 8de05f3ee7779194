//! JavaScript parser infrastructure.
//!
//! - [`token`] — lexical tokens, flag bits, and the binary-operator
//!   precedence table.
//! - [`lexer`] — ES5/ES6 lexer with an offset-resettable cursor.
//! - [`ast`] — AST node definitions (interned identifiers).
//! - [`scope`] — parse-time scope stack and name resolution.
//! - [`cache`] — source-provider function-body skip cache.
//! - [`builder`] — the tree-builder contract ([`builder::AstBuilder`] /
//!   [`builder::SyntaxChecker`]).
//! - [`parser`] — the recursive-descent core and [`parser::Parser`] entry
//!   point.
//!
//! The convenience functions below cover the two common embeddings: a full
//! AST parse against caller-owned interner/cache state, and a standalone
//! syntax check.

/// AST node definitions.
pub mod ast;
/// The tree-builder contract and its two implementations.
pub mod builder;
/// Source-provider function-body skip cache.
pub mod cache;
/// ES5/ES6 lexer.
pub mod lexer;
/// The recursive-descent parser core.
pub mod parser;
/// Parse-time scope stack and name resolution.
pub mod scope;
/// Lexical tokens and flag bits.
pub mod token;

use crate::arena::{Arena, Interner};
use crate::error::RotorResult;

use builder::{AstBuilder, SyntaxChecker};
use cache::SourceProviderCache;
use parser::{ParseMode, ParseOptions, ParseOutput, Parser};

/// Parse `source` as a classic script and build the full AST.
///
/// Identifiers are interned into `interner`; function bodies above the cache
/// threshold are recorded in `cache` so a later parse of the same provider
/// can skip them.
pub fn parse_program<'a>(
    source: &str,
    interner: &mut Interner<'a>,
    cache: &mut SourceProviderCache,
) -> RotorResult<ParseOutput<AstBuilder>> {
    let mut parser = Parser::new(source, interner, cache, ParseOptions::default());
    let mut builder = AstBuilder::new();
    parser.parse(&mut builder).map_err(Into::into)
}

/// Parse `source` as an ES module and build the full AST.
pub fn parse_module<'a>(
    source: &str,
    interner: &mut Interner<'a>,
    cache: &mut SourceProviderCache,
) -> RotorResult<ParseOutput<AstBuilder>> {
    let options = ParseOptions {
        parse_mode: ParseMode::ModuleEvaluate,
        ..ParseOptions::default()
    };
    let mut parser = Parser::new(source, interner, cache, options);
    let mut builder = AstBuilder::new();
    parser.parse(&mut builder).map_err(Into::into)
}

/// Validate the syntax of `source` without building an AST.
///
/// Allocates its own throwaway interner and cache; use the [`Parser`] API
/// directly to share those across parses.
pub fn check_syntax(source: &str, module: bool) -> RotorResult<()> {
    let arena = Arena::new();
    let mut interner = Interner::new(&arena);
    let mut cache = SourceProviderCache::new();
    let options = ParseOptions {
        parse_mode: if module {
            ParseMode::ModuleAnalyze
        } else {
            ParseMode::Program
        },
        ..ParseOptions::default()
    };
    let mut parser = Parser::new(source, &mut interner, &mut cache, options);
    let mut checker = SyntaxChecker::new();
    parser.parse(&mut checker).map_err(Into::into)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program_smoke() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let mut cache = SourceProviderCache::new();
        let output = parse_program("var x = 1 + 2;", &mut interner, &mut cache).unwrap();
        assert_eq!(output.elements.len(), 1);
    }

    #[test]
    fn test_check_syntax_verdicts() {
        assert!(check_syntax("let a = [1, 2].length;", false).is_ok());
        assert!(check_syntax("let a = ;", false).is_err());
    }

    #[test]
    fn test_check_syntax_module() {
        assert!(check_syntax("let x = 1; export { x };", true).is_ok());
        assert!(check_syntax("export { x };", true).is_err());
    }
}
