//! Parse-time scope stack and name resolution.
//!
//! # Overview
//!
//! The parser pushes a [`Scope`] for every lexical environment it enters and
//! pops it on every exit path.  A [`ScopeStack`] records, per scope:
//!
//! - **Declared names** — `var`-bindings (hoisted to the nearest function
//!   boundary) and lexical bindings (`let`/`const`/`class`/imports, block
//!   scoped).
//! - **Used names** — identifier references; on pop, uses not resolved
//!   locally propagate into the parent as *closed-variable candidates*, and
//!   a function scope marks every name it declares that an inner function
//!   closes over as captured.
//! - **Labels** — active statement labels with their loop-ness, for
//!   `break`/`continue` validation.
//! - **Strict mode and function facts** — strictness (monotone once set),
//!   generator/arrow markers, constructor kind, the expected `super`
//!   binding, and the parameter list needed for retroactive strict-mode
//!   validation.
//!
//! Declaration attempts return a [`DeclarationResult`] bitmask; the caller
//! decides which bits are fatal (duplicate lexicals always are, duplicate
//! `var`s never are, duplicate parameters only for non-simple lists).
//!
//! Speculative parses push scopes marked *throwaway*: popping one never
//! propagates names into the parent, so a rewound parse leaves no trace.

use std::collections::HashSet;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::arena::{IdentId, WellKnown};
use crate::parser::token::Position;

// ─────────────────────────────────────────────────────────────────────────────
// Scope kind
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of a JavaScript scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A function-boundary scope: program top-level, function body, or
    /// generator wrapper/body.  `var` declarations hoist here.
    Function,
    /// A `{ … }` block scope (`if`, `for`, bare block, …).
    Block,
    /// The scope created by a `catch (param)` clause.
    Catch,
    /// The top-level scope of an ES module (also a function boundary).
    Module,
    /// The scope introduced by a `with (obj)` statement.
    With,
    /// The lexical scope wrapping a `switch` statement's clause lists.
    Switch,
}

impl ScopeKind {
    /// Returns `true` if this kind is a function boundary (i.e. `var`
    /// declarations hoist here and parameter lists belong to it).
    pub fn is_function_boundary(self) -> bool {
        matches!(self, ScopeKind::Function | ScopeKind::Module)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Declaration verdicts
// ─────────────────────────────────────────────────────────────────────────────

bitflags! {
    /// Outcome of a declaration attempt.  An empty set means the declaration
    /// is valid; the caller decides which set bits are fatal in its context.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeclarationResult: u8 {
        /// The name is restricted in strict mode (`eval`, `arguments`, or a
        /// strict-reserved word) and the scope is strict.
        const INVALID_STRICT_MODE = 0b01;
        /// The name collides with an existing binding.
        const INVALID_DUPLICATE_DECLARATION = 0b10;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Function facts
// ─────────────────────────────────────────────────────────────────────────────

/// Constructor disposition of the function a scope belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// Not a constructor.
    None,
    /// Constructor of a class with no `extends` clause.
    Base,
    /// Constructor of a derived class; may contain `super(…)`.
    Derived,
}

/// Whether code in a function expects a bound `super` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperBinding {
    /// `super.property` is valid (methods, class constructors).
    Needed,
    /// No `super` binding is available.
    NotNeeded,
}

/// A statement label active in a scope.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    /// The label name.
    pub name: IdentId,
    /// `true` when the labeled statement is an iteration statement, making
    /// the label a valid `continue` target.
    pub is_loop: bool,
}

/// A strict-mode restriction discovered retroactively (the scope collected
/// its parameters before a `"use strict"` directive was seen).
#[derive(Debug, Clone, Copy)]
pub enum StrictViolation {
    /// The function itself is named `eval`/`arguments`/a reserved word.
    FunctionName(IdentId, Position),
    /// A parameter uses a restricted name.
    ParameterName(IdentId, Position),
    /// Two parameters share a name.
    DuplicateParameter(IdentId, Position),
}

// ─────────────────────────────────────────────────────────────────────────────
// Scope
// ─────────────────────────────────────────────────────────────────────────────

/// One lexical environment on the [`ScopeStack`].
#[derive(Debug)]
pub struct Scope {
    /// The kind of this scope.
    pub kind: ScopeKind,
    /// `true` once the scope is strict (inherited, or set by a directive /
    /// module context / class body).  Monotone within a scope.
    pub strict: bool,
    /// `var`-bindings (and parameters, and hoisted function names) declared
    /// directly in this scope.  Populated only on function boundaries.
    declared_vars: HashSet<IdentId>,
    /// Lexical bindings (`let`/`const`/`class`/imports) declared here.
    lexical: HashSet<IdentId>,
    /// Names referenced from code in this scope.
    used: HashSet<IdentId>,
    /// Free names of already-popped child scopes.
    closed_candidates: HashSet<IdentId>,
    /// Names declared here that an inner function closes over.
    captures: HashSet<IdentId>,
    /// Active statement labels, innermost last.
    labels: Vec<Label>,
    /// Parameters declared in this (function) scope, with positions for
    /// retroactive strict-mode reporting.
    params: SmallVec<[(IdentId, Position); 8]>,
    /// First duplicated parameter name, if any.
    duplicate_param: Option<(IdentId, Position)>,
    /// `true` when the parameter list uses defaults, destructuring, or rest.
    pub has_non_simple_params: bool,
    /// The function's own name (for named expressions and strict checks).
    pub function_name: Option<(IdentId, Position)>,
    /// The scope closes over `this`/`arguments` dynamically (direct `eval`,
    /// `with`): everything visible must be kept alive.
    pub needs_full_activation: bool,
    /// `true` for generator wrapper and body scopes.
    pub is_generator: bool,
    /// `true` for arrow-function scopes (`this`/`super`/`arguments` are
    /// lexical).
    pub is_arrow: bool,
    /// A `super(…)` call appeared directly in this function.
    pub has_direct_super: bool,
    /// Constructor disposition of the owning function.
    pub constructor_kind: ConstructorKind,
    /// Whether a `super` binding is available to this function.
    pub expected_super_binding: SuperBinding,
    /// A binding named `arguments` shadows the implicit object.
    pub shadows_arguments: bool,
    /// Exported names of a module scope (for duplicate-export checks).
    exported_names: HashSet<IdentId>,
    /// Speculative scope: popping it must not leak names to the parent.
    pub throwaway: bool,
}

impl Scope {
    fn new(kind: ScopeKind, strict: bool) -> Self {
        Self {
            kind,
            strict,
            declared_vars: HashSet::new(),
            lexical: HashSet::new(),
            used: HashSet::new(),
            closed_candidates: HashSet::new(),
            captures: HashSet::new(),
            labels: Vec::new(),
            params: SmallVec::new(),
            duplicate_param: None,
            has_non_simple_params: false,
            function_name: None,
            needs_full_activation: false,
            is_generator: false,
            is_arrow: false,
            has_direct_super: false,
            constructor_kind: ConstructorKind::None,
            expected_super_binding: SuperBinding::NotNeeded,
            shadows_arguments: false,
            exported_names: HashSet::new(),
            throwaway: false,
        }
    }

    /// Returns `true` when `name` is declared directly in this scope.
    pub fn declares(&self, name: IdentId) -> bool {
        self.declared_vars.contains(&name) || self.lexical.contains(&name)
    }

    /// Returns `true` when `name` is a declared parameter of this scope.
    pub fn declares_parameter(&self, name: IdentId) -> bool {
        self.params.iter().any(|&(n, _)| n == name)
    }

    /// Number of declared parameters.
    pub fn parameter_count(&self) -> u32 {
        self.params.len() as u32
    }

    /// The first duplicated parameter name, if any.  Duplicates are recorded
    /// rather than rejected at declaration time; whether they are fatal
    /// depends on strictness and the shape of the parameter list.
    pub fn duplicate_parameter(&self) -> Option<(IdentId, Position)> {
        self.duplicate_param
    }

    /// Names declared here that an inner function closes over.
    pub fn captures(&self) -> &HashSet<IdentId> {
        &self.captures
    }

    /// Names this scope declares as `var`-bindings (function boundaries only).
    pub fn var_declarations(&self) -> &HashSet<IdentId> {
        &self.declared_vars
    }

    /// Free names of this scope: referenced (directly or by a popped child)
    /// but not declared here.
    pub fn free_variables(&self) -> HashSet<IdentId> {
        self.used
            .iter()
            .filter(|name| !self.declares(**name))
            .copied()
            .collect()
    }

    /// Mark `name` as referenced from this scope.
    pub fn use_variable(&mut self, name: IdentId) {
        self.used.insert(name);
    }

    /// Replay a cached function's free variables into this scope, as if its
    /// body had been parsed and popped here.
    pub fn absorb_cached_uses(&mut self, names: &[IdentId]) {
        for &name in names {
            self.used.insert(name);
            self.closed_candidates.insert(name);
        }
    }

    /// First retroactive strict-mode violation recorded by this scope, if
    /// any.  Consulted when a directive prologue turns the scope strict
    /// after its name and parameters were already collected.
    pub fn strict_mode_violation(&self, wk: &WellKnown) -> Option<StrictViolation> {
        if let Some((name, pos)) = self.function_name {
            if wk.is_strict_mode_restricted(name) {
                return Some(StrictViolation::FunctionName(name, pos));
            }
        }
        for &(name, pos) in &self.params {
            if wk.is_strict_mode_restricted(name) {
                return Some(StrictViolation::ParameterName(name, pos));
            }
        }
        if let Some((name, pos)) = self.duplicate_param {
            return Some(StrictViolation::DuplicateParameter(name, pos));
        }
        None
    }

    /// Record an exported name on a module scope; returns `false` when the
    /// name was already exported.
    pub fn record_export(&mut self, exported: IdentId) -> bool {
        self.exported_names.insert(exported)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScopeStack
// ─────────────────────────────────────────────────────────────────────────────

/// The parser's stack of active scopes (back = innermost).
///
/// The stack is empty at parser construction and at successful termination;
/// on error paths the parser unwinds whatever remains.
#[derive(Debug)]
pub struct ScopeStack {
    stack: Vec<Scope>,
    well_known: WellKnown,
}

impl ScopeStack {
    /// Create an empty stack.
    pub fn new(well_known: WellKnown) -> Self {
        Self {
            stack: Vec::new(),
            well_known,
        }
    }

    /// Number of active scopes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` when no scopes are active.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a scope of `kind`, inheriting strictness from the parent.
    pub fn push(&mut self, kind: ScopeKind) -> &mut Scope {
        let strict = self.stack.last().map(|s| s.strict).unwrap_or(false);
        self.stack.push(Scope::new(kind, strict));
        self.stack.last_mut().expect("scope was just pushed")
    }

    /// Pop the innermost scope.  Unless the scope is throwaway, its free
    /// names propagate into the parent as uses and — when the popped scope
    /// is a function boundary — as closed-variable candidates.  The popped
    /// scope's `captures` set is finalized here: every name it declares that
    /// some inner function closed over.
    pub fn pop(&mut self) -> Scope {
        let mut scope = self.stack.pop().expect("pop on empty scope stack");

        // Candidates that resolved against this scope's own declarations are
        // its captures; the rest pass through.
        let (captured, passing): (HashSet<IdentId>, HashSet<IdentId>) = scope
            .closed_candidates
            .iter()
            .copied()
            .partition(|name| scope.declares(*name));
        scope.captures = captured;

        if !scope.throwaway {
            if let Some(parent) = self.stack.last_mut() {
                let free = scope.free_variables();
                parent.used.extend(free.iter().copied());
                if scope.kind.is_function_boundary() {
                    parent.closed_candidates.extend(free);
                } else {
                    parent
                        .closed_candidates
                        .extend(passing.iter().filter(|n| free.contains(n)).copied());
                }
                if scope.needs_full_activation && !scope.kind.is_function_boundary() {
                    parent.needs_full_activation = true;
                }
            }
        }
        scope
    }

    /// Drop every scope above `depth` without propagation (speculative
    /// rollback / error unwind).
    pub fn truncate(&mut self, depth: usize) {
        self.stack.truncate(depth);
    }

    /// The innermost scope.
    pub fn current(&self) -> &Scope {
        self.stack.last().expect("scope stack is empty")
    }

    /// The innermost scope, mutably.
    pub fn current_mut(&mut self) -> &mut Scope {
        self.stack.last_mut().expect("scope stack is empty")
    }

    /// Returns `true` when the innermost scope is strict.
    pub fn is_strict(&self) -> bool {
        self.stack.last().map(|s| s.strict).unwrap_or(false)
    }

    /// The innermost function-boundary scope.
    pub fn current_function(&self) -> &Scope {
        self.function_index()
            .map(|i| &self.stack[i])
            .expect("no function scope on the stack")
    }

    /// The innermost function-boundary scope, mutably.
    pub fn current_function_mut(&mut self) -> &mut Scope {
        let i = self.function_index().expect("no function scope on the stack");
        &mut self.stack[i]
    }

    fn function_index(&self) -> Option<usize> {
        (0..self.stack.len())
            .rev()
            .find(|&i| self.stack[i].kind.is_function_boundary())
    }

    /// The nearest enclosing non-arrow function scope — the one `this`,
    /// `super`, and `new.target` resolve against.
    pub fn closest_ordinary_function(&self) -> Option<&Scope> {
        self.stack
            .iter()
            .rev()
            .find(|s| s.kind.is_function_boundary() && !s.is_arrow)
    }

    /// Like [`ScopeStack::closest_ordinary_function`], mutably.
    pub fn closest_ordinary_function_mut(&mut self) -> Option<&mut Scope> {
        self.stack
            .iter_mut()
            .rev()
            .find(|s| s.kind.is_function_boundary() && !s.is_arrow)
    }

    // ── Declarations ─────────────────────────────────────────────────────────

    /// Declare a `var`-binding (or hoisted function name).  The binding is
    /// inserted at the nearest function boundary; the walk up to that
    /// boundary reports a collision with any lexical binding in between.
    pub fn declare_variable(&mut self, name: IdentId) -> DeclarationResult {
        let mut result = self.strict_check(name);
        let target = self
            .function_index()
            .expect("var declaration with no function scope");
        for scope in &self.stack[target..] {
            if scope.lexical.contains(&name) {
                result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
            }
        }
        let wk_arguments = self.well_known.arguments;
        let scope = &mut self.stack[target];
        scope.declared_vars.insert(name);
        if name == wk_arguments {
            scope.shadows_arguments = true;
        }
        result
    }

    /// Declare a lexical binding (`let`/`const`/`class`/import) in the
    /// innermost scope.  Collides with any existing binding in that scope.
    pub fn declare_lexical(&mut self, name: IdentId) -> DeclarationResult {
        let mut result = self.strict_check(name);
        let scope = self.current_mut();
        if scope.lexical.contains(&name) || scope.declared_vars.contains(&name) {
            result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
        }
        scope.lexical.insert(name);
        result
    }

    /// Declare a formal parameter in the innermost function-boundary scope.
    /// Duplicates are reported but still recorded; the caller decides
    /// whether the list permits them.
    pub fn declare_parameter(&mut self, name: IdentId, pos: Position) -> DeclarationResult {
        let mut result = self.strict_check(name);
        let wk_arguments = self.well_known.arguments;
        let scope = self.current_function_mut();
        if scope.declares_parameter(name) {
            result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
            if scope.duplicate_param.is_none() {
                scope.duplicate_param = Some((name, pos));
            }
        }
        scope.params.push((name, pos));
        scope.declared_vars.insert(name);
        if name == wk_arguments {
            scope.shadows_arguments = true;
        }
        result
    }

    /// Mark `name` as referenced from the innermost scope.
    pub fn use_variable(&mut self, name: IdentId) {
        self.current_mut().used.insert(name);
    }

    fn strict_check(&self, name: IdentId) -> DeclarationResult {
        if self.is_strict() && self.well_known.is_strict_mode_restricted(name) {
            DeclarationResult::INVALID_STRICT_MODE
        } else {
            DeclarationResult::empty()
        }
    }

    // ── Labels ───────────────────────────────────────────────────────────────

    /// Push a statement label onto the innermost scope.
    pub fn push_label(&mut self, name: IdentId, is_loop: bool) {
        self.current_mut().labels.push(Label { name, is_loop });
    }

    /// Pop the most recent label from the innermost scope.
    pub fn pop_label(&mut self) {
        self.current_mut().labels.pop();
    }

    /// Look up an active label, walking outwards but never across a function
    /// boundary.
    pub fn find_label(&self, name: IdentId) -> Option<Label> {
        for scope in self.stack.iter().rev() {
            if let Some(label) = scope.labels.iter().rev().find(|l| l.name == name) {
                return Some(*label);
            }
            if scope.kind.is_function_boundary() {
                break;
            }
        }
        None
    }

    /// Returns `true` when any active label in the current function has
    /// `name` (used to reject duplicate labels).
    pub fn label_in_use(&self, name: IdentId) -> bool {
        self.find_label(name).is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Arena, Interner};
    use crate::parser::token::Position;

    fn pos() -> Position {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn stack<'a>(interner: &Interner<'a>) -> ScopeStack {
        ScopeStack::new(interner.well_known())
    }

    // ── Declaration verdicts ─────────────────────────────────────────────────

    #[test]
    fn test_duplicate_var_is_ok() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        assert!(scopes.declare_variable(x).is_empty());
        assert!(scopes.declare_variable(x).is_empty());
        scopes.pop();
    }

    #[test]
    fn test_duplicate_lexical_is_reported() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        assert!(scopes.declare_lexical(x).is_empty());
        assert!(scopes
            .declare_lexical(x)
            .contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
    }

    #[test]
    fn test_var_shadowing_lexical_is_reported() {
        // let x; { var x; } — the var walks up to the function boundary and
        // collides with the outer let.
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_lexical(x);
        scopes.push(ScopeKind::Block);
        assert!(scopes
            .declare_variable(x)
            .contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
    }

    #[test]
    fn test_var_then_lexical_same_scope_is_reported() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_variable(x);
        assert!(scopes
            .declare_lexical(x)
            .contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
    }

    #[test]
    fn test_lexical_shadowing_in_inner_block_is_ok() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_lexical(x);
        scopes.push(ScopeKind::Block);
        assert!(scopes.declare_lexical(x).is_empty());
    }

    #[test]
    fn test_strict_mode_restricted_names() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let eval = interner.intern("eval");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.current_mut().strict = true;
        assert!(scopes
            .declare_variable(eval)
            .contains(DeclarationResult::INVALID_STRICT_MODE));
    }

    #[test]
    fn test_sloppy_mode_allows_eval_binding() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let eval = interner.intern("eval");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        assert!(scopes.declare_variable(eval).is_empty());
    }

    #[test]
    fn test_duplicate_parameter_reported_but_recorded() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let a = interner.intern("a");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        assert!(scopes.declare_parameter(a, pos()).is_empty());
        assert!(scopes
            .declare_parameter(a, pos())
            .contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
        assert_eq!(scopes.current_function().parameter_count(), 2);
    }

    // ── Capture propagation ──────────────────────────────────────────────────

    #[test]
    fn test_capture_propagates_to_declaring_function() {
        // function outer() { var x; function inner() { return x; } }
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function); // outer
        scopes.declare_variable(x);
        scopes.push(ScopeKind::Function); // inner
        scopes.use_variable(x);
        scopes.pop();
        let outer = scopes.pop();
        assert!(outer.captures().contains(&x));
    }

    #[test]
    fn test_unresolved_use_becomes_closed_candidate() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let g = interner.intern("g");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function); // program
        scopes.push(ScopeKind::Function); // f
        scopes.use_variable(g);
        let f = scopes.pop();
        assert!(f.free_variables().contains(&g));
        let program = scopes.pop();
        // The program scope does not declare g either, so it stays free.
        assert!(program.free_variables().contains(&g));
    }

    #[test]
    fn test_block_scope_does_not_capture() {
        // A use from a block of the same function resolves locally; it is
        // neither free nor a capture.
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_variable(x);
        scopes.push(ScopeKind::Block);
        scopes.use_variable(x);
        scopes.pop();
        let f = scopes.pop();
        assert!(!f.free_variables().contains(&x));
        assert!(f.captures().is_empty());
    }

    #[test]
    fn test_capture_through_intermediate_block() {
        // function f() { var x; { function g() { return x; } } }
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function); // f
        scopes.declare_variable(x);
        scopes.push(ScopeKind::Block);
        scopes.push(ScopeKind::Function); // g
        scopes.use_variable(x);
        scopes.pop();
        scopes.pop();
        let f = scopes.pop();
        assert!(f.captures().contains(&x), "capture must cross the block");
    }

    #[test]
    fn test_lexical_capture_belongs_to_block() {
        // { let x; (function () { return x; }); } — the block owns the
        // capture, and nothing leaks past it.
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.push(ScopeKind::Block);
        scopes.declare_lexical(x);
        scopes.push(ScopeKind::Function);
        scopes.use_variable(x);
        scopes.pop();
        let block = scopes.pop();
        assert!(block.captures().contains(&x));
        let program = scopes.pop();
        assert!(program.free_variables().is_empty());
        assert!(program.captures().is_empty());
    }

    #[test]
    fn test_throwaway_scope_leaks_nothing() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        let speculative = scopes.push(ScopeKind::Function);
        speculative.throwaway = true;
        scopes.use_variable(x);
        scopes.pop();
        let outer = scopes.pop();
        assert!(outer.free_variables().is_empty());
        assert!(outer.captures().is_empty());
    }

    #[test]
    fn test_truncate_discards_without_propagation() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        let depth = scopes.depth();
        scopes.push(ScopeKind::Block);
        scopes.use_variable(x);
        scopes.truncate(depth);
        let outer = scopes.pop();
        assert!(outer.free_variables().is_empty());
    }

    #[test]
    fn test_cached_uses_replay() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let y = interner.intern("y");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_variable(x);
        scopes.current_mut().absorb_cached_uses(&[x, y]);
        let scope = scopes.pop();
        assert!(scope.captures().contains(&x));
        assert!(scope.free_variables().contains(&y));
    }

    // ── Labels ───────────────────────────────────────────────────────────────

    #[test]
    fn test_label_lookup_and_loopness() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let outer = interner.intern("outer");
        let inner = interner.intern("inner");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.push_label(outer, true);
        scopes.push(ScopeKind::Block);
        scopes.push_label(inner, false);
        assert!(scopes.find_label(outer).unwrap().is_loop);
        assert!(!scopes.find_label(inner).unwrap().is_loop);
        scopes.pop_label();
        assert!(scopes.find_label(inner).is_none());
    }

    #[test]
    fn test_labels_do_not_cross_function_boundary() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let l = interner.intern("l");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.push_label(l, true);
        scopes.push(ScopeKind::Function);
        assert!(scopes.find_label(l).is_none());
    }

    // ── Strict-mode retro validation ─────────────────────────────────────────

    #[test]
    fn test_strict_violation_on_parameter() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let wk = interner.well_known();
        let eval = interner.intern("eval");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_parameter(eval, pos());
        let violation = scopes.current().strict_mode_violation(&wk);
        assert!(matches!(
            violation,
            Some(StrictViolation::ParameterName(name, _)) if name == eval
        ));
    }

    #[test]
    fn test_strict_violation_on_duplicate_parameter() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let wk = interner.well_known();
        let a = interner.intern("a");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Function);
        scopes.declare_parameter(a, pos());
        scopes.declare_parameter(a, pos());
        assert!(matches!(
            scopes.current().strict_mode_violation(&wk),
            Some(StrictViolation::DuplicateParameter(name, _)) if name == a
        ));
    }

    #[test]
    fn test_module_export_duplicates() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let a = interner.intern("a");
        let mut scopes = stack(&interner);
        scopes.push(ScopeKind::Module);
        assert!(scopes.current_mut().record_export(a));
        assert!(!scopes.current_mut().record_export(a));
    }

    #[test]
    fn test_scope_stack_balance() {
        let arena = Arena::new();
        let interner = Interner::new(&arena);
        let mut scopes = stack(&interner);
        assert!(scopes.is_empty());
        scopes.push(ScopeKind::Function);
        scopes.push(ScopeKind::Block);
        scopes.push(ScopeKind::Switch);
        scopes.pop();
        scopes.pop();
        scopes.pop();
        assert!(scopes.is_empty());
    }
}
