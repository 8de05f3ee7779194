//! `rotor_core` — the foundational parser library for the Rotor JavaScript
//! engine.
//!
//! # Crate layout
//!
//! - [`error`] — Engine error types and `RotorResult` alias.
//! - [`arena`] — Bump-pointer parse arena and identifier interner.
//! - [`parser`] — JavaScript parser: lexer, AST, scope stack, source-provider
//!   cache, tree builders, and the recursive-descent core.

/// Bump-pointer parse arena and identifier interner.
pub mod arena;
/// Engine error types and [`RotorResult`](error::RotorResult) alias.
pub mod error;
/// JavaScript parser infrastructure.
pub mod parser;
