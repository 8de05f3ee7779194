//! Parse arena and identifier interner.
//!
//! An [`Arena`] is a bump-pointer region allocator backed by [`bumpalo`].
//! Objects allocated inside an arena are valid for the lifetime of the arena;
//! all memory is freed in bulk when the [`Arena`] is dropped.
//!
//! An [`Interner`] borrows an arena and maps identifier text to stable
//! [`IdentId`] handles.  Two identifiers are the same name if and only if
//! their handles are equal, so the parser never compares strings on its hot
//! paths.  A [`WellKnown`] table of pre-interned names (directive text,
//! contextual keywords, synthetic generator bindings, …) is built once at
//! interner construction.
//!
//! # Example
//!
//! ```
//! use rotor_core::arena::{Arena, Interner};
//!
//! let arena = Arena::new();
//! let mut interner = Interner::new(&arena);
//! let a = interner.intern("foo");
//! let b = interner.intern("foo");
//! assert_eq!(a, b);
//! assert_eq!(interner.resolve(a), "foo");
//! ```

use std::collections::HashMap;

use bumpalo::Bump;

// ─────────────────────────────────────────────────────────────────────────────
// Arena
// ─────────────────────────────────────────────────────────────────────────────

/// A bump-pointer region allocator for parse-lifetime data.
///
/// All allocations made through [`Arena::alloc`] or [`Arena::alloc_str`] are
/// tied to the lifetime of the `Arena`. When the `Arena` is dropped, every
/// allocation is freed at once without running individual destructors (the
/// same semantics as `bumpalo`).
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Create a new, empty `Arena`.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocate `value` inside the arena and return a reference to it.
    ///
    /// Destructors are **not** run when the arena is dropped; if `T` has a
    /// non-trivial `Drop` impl that you must not skip, do not allocate it
    /// here.
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Copy `s` into the arena and return the arena-owned slice.
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IdentId
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque handle for an interned identifier.
///
/// Handles are dense indices into the owning [`Interner`]; equality of
/// handles is equality of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentId(u32);

impl IdentId {
    /// Returns the raw index of this handle.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Well-known names
// ─────────────────────────────────────────────────────────────────────────────

/// Pre-interned names the parser consults on hot paths.
///
/// The `Copy` derive lets the parser keep its own copy of the table and
/// compare handles without touching the interner.
#[derive(Debug, Clone, Copy)]
pub struct WellKnown {
    /// `"use strict"` — the strict-mode directive text.
    pub use_strict: IdentId,
    /// `arguments`
    pub arguments: IdentId,
    /// `eval`
    pub eval: IdentId,
    /// `get`
    pub get: IdentId,
    /// `set`
    pub set: IdentId,
    /// `of`
    pub of: IdentId,
    /// `as`
    pub as_: IdentId,
    /// `from`
    pub from: IdentId,
    /// `target`
    pub target: IdentId,
    /// `prototype`
    pub prototype: IdentId,
    /// `constructor`
    pub constructor: IdentId,
    /// `static`
    pub static_: IdentId,
    /// `default`
    pub default: IdentId,
    /// `let`
    pub let_: IdentId,
    /// `yield`
    pub yield_: IdentId,
    /// `null`
    pub null: IdentId,
    /// `__proto__`
    pub proto: IdentId,
    /// `@generator` — synthetic generator callee binding.
    pub generator: IdentId,
    /// `@generatorState` — synthetic resume-state binding.
    pub generator_state: IdentId,
    /// `@generatorValue` — synthetic sent-value binding.
    pub generator_value: IdentId,
    /// `@generatorResumeMode` — synthetic resume-mode binding.
    pub generator_resume_mode: IdentId,
    /// `*default*` — synthetic name for anonymous default exports.
    pub star_default: IdentId,

    reserved_if_strict: [IdentId; 9],
}

impl WellKnown {
    /// Returns `true` for `eval` and `arguments`, which may not be binding
    /// names in strict mode.
    pub fn is_eval_or_arguments(&self, name: IdentId) -> bool {
        name == self.eval || name == self.arguments
    }

    /// Returns `true` for the FutureReservedWords that are reserved only in
    /// strict mode (`implements`, `interface`, `package`, `private`,
    /// `protected`, `public`, `static`, `let`, `yield`).
    pub fn is_reserved_if_strict(&self, name: IdentId) -> bool {
        self.reserved_if_strict.contains(&name)
    }

    /// Returns `true` when `name` is not usable as a binding name in strict
    /// mode for any reason.
    pub fn is_strict_mode_restricted(&self, name: IdentId) -> bool {
        self.is_eval_or_arguments(name) || self.is_reserved_if_strict(name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interner
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier interner backed by an [`Arena`].
///
/// Interned string bytes live in the arena; the interner itself only stores
/// handles and `&str` views, so cloning names never copies text.
pub struct Interner<'a> {
    arena: &'a Arena,
    map: HashMap<&'a str, IdentId>,
    strings: Vec<&'a str>,
    well_known: WellKnown,
}

impl<'a> Interner<'a> {
    /// Create an interner over `arena` with the [`WellKnown`] table
    /// pre-populated.
    pub fn new(arena: &'a Arena) -> Self {
        let mut interner = Self {
            arena,
            map: HashMap::new(),
            strings: Vec::new(),
            // Placeholder; replaced below once the names exist.
            well_known: WellKnown {
                use_strict: IdentId(0),
                arguments: IdentId(0),
                eval: IdentId(0),
                get: IdentId(0),
                set: IdentId(0),
                of: IdentId(0),
                as_: IdentId(0),
                from: IdentId(0),
                target: IdentId(0),
                prototype: IdentId(0),
                constructor: IdentId(0),
                static_: IdentId(0),
                default: IdentId(0),
                let_: IdentId(0),
                yield_: IdentId(0),
                null: IdentId(0),
                proto: IdentId(0),
                generator: IdentId(0),
                generator_state: IdentId(0),
                generator_value: IdentId(0),
                generator_resume_mode: IdentId(0),
                star_default: IdentId(0),
                reserved_if_strict: [IdentId(0); 9],
            },
        };

        let static_ = interner.intern("static");
        let let_ = interner.intern("let");
        let yield_ = interner.intern("yield");
        interner.well_known = WellKnown {
            use_strict: interner.intern("use strict"),
            arguments: interner.intern("arguments"),
            eval: interner.intern("eval"),
            get: interner.intern("get"),
            set: interner.intern("set"),
            of: interner.intern("of"),
            as_: interner.intern("as"),
            from: interner.intern("from"),
            target: interner.intern("target"),
            prototype: interner.intern("prototype"),
            constructor: interner.intern("constructor"),
            static_,
            default: interner.intern("default"),
            let_,
            yield_,
            null: interner.intern("null"),
            proto: interner.intern("__proto__"),
            generator: interner.intern("@generator"),
            generator_state: interner.intern("@generatorState"),
            generator_value: interner.intern("@generatorValue"),
            generator_resume_mode: interner.intern("@generatorResumeMode"),
            star_default: interner.intern("*default*"),
            reserved_if_strict: [
                interner.intern("implements"),
                interner.intern("interface"),
                interner.intern("package"),
                interner.intern("private"),
                interner.intern("protected"),
                interner.intern("public"),
                static_,
                let_,
                yield_,
            ],
        };
        interner
    }

    /// Intern `text`, returning the existing handle if the name is known.
    pub fn intern(&mut self, text: &str) -> IdentId {
        if let Some(&id) = self.map.get(text) {
            return id;
        }
        let stored = self.arena.alloc_str(text);
        let id = IdentId(self.strings.len() as u32);
        self.strings.push(stored);
        self.map.insert(stored, id);
        id
    }

    /// Resolve a handle back to its text.
    pub fn resolve(&self, id: IdentId) -> &'a str {
        self.strings[id.index()]
    }

    /// The pre-interned well-known name table.
    pub fn well_known(&self) -> WellKnown {
        self.well_known
    }

    /// Number of distinct interned names.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` when no names have been interned (never the case after
    /// construction, since the well-known table is pre-interned).
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_single_value() {
        let arena = Arena::new();
        let r: &u32 = arena.alloc(99_u32);
        assert_eq!(*r, 99);
    }

    #[test]
    fn test_alloc_str_round_trip() {
        let arena = Arena::new();
        let s = arena.alloc_str("hello");
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_intern_same_text_same_handle() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let a = interner.intern("x");
        let b = interner.intern("x");
        let c = interner.intern("y");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_resolve_round_trip() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let id = interner.intern("someIdentifier");
        assert_eq!(interner.resolve(id), "someIdentifier");
    }

    #[test]
    fn test_well_known_pre_interned() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let wk = interner.well_known();
        assert_eq!(interner.intern("use strict"), wk.use_strict);
        assert_eq!(interner.intern("arguments"), wk.arguments);
        assert_eq!(interner.intern("@generatorState"), wk.generator_state);
        assert_eq!(interner.resolve(wk.proto), "__proto__");
    }

    #[test]
    fn test_strict_mode_restricted_names() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let wk = interner.well_known();
        for name in ["eval", "arguments", "implements", "let", "yield"] {
            let id = interner.intern(name);
            assert!(wk.is_strict_mode_restricted(id), "{name} should be restricted");
        }
        let plain = interner.intern("plain");
        assert!(!wk.is_strict_mode_restricted(plain));
    }

    #[test]
    fn test_handles_are_dense() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let before = interner.len();
        let id = interner.intern("fresh_name");
        assert_eq!(id.index(), before);
        assert_eq!(interner.len(), before + 1);
    }
}
