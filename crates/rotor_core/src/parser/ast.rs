//! Abstract syntax tree node definitions for the ES5/ES6 grammar.
//!
//! Every node struct carries a [`SourceLocation`] field (`loc`) that pinpoints
//! its position in the source text.  [`SourceLocation`] is a type alias for
//! [`crate::parser::token::Span`] so it is [`Copy`].
//!
//! Identifiers are interned [`IdentId`] handles, never strings; resolve them
//! through the [`Interner`](crate::arena::Interner) that produced the parse.
//!
//! # Structure
//!
//! - [`SourceElements`] — the root production (a statement list).
//! - [`Stmt`] — statement nodes, including module `import`/`export` items.
//! - [`Expr`] — expression nodes.
//! - [`Pat`] — binding/assignment destructuring pattern nodes.
//! - [`Function`] / [`Class`] — callable and class payloads shared by the
//!   declaration and expression forms.
//!
//! Logical `&&`/`||` are ordinary [`BinaryOp`] variants: the parser folds all
//! binary operators through one precedence climber and the downstream
//! compiler re-splits short-circuit forms.

use crate::arena::IdentId;
use crate::parser::token::{Position, Span};

// ─────────────────────────────────────────────────────────────────────────────
// Source location
// ─────────────────────────────────────────────────────────────────────────────

/// Source location attached to every AST node — a half-open `[start, end)`
/// byte span in the source text.
pub type SourceLocation = Span;

/// The root production: a list of statements (and, for modules, module
/// declarations).
pub type SourceElements = Vec<Stmt>;

// ─────────────────────────────────────────────────────────────────────────────
// Common helpers
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript identifier (name, label, or binding).
#[derive(Debug, Clone, Copy)]
pub struct Ident {
    /// Source location.
    pub loc: SourceLocation,
    /// Interned name handle.
    pub name: IdentId,
}

/// A function/method parameter (pattern with optional default).
#[derive(Debug, Clone)]
pub struct Param {
    /// Source location.
    pub loc: SourceLocation,
    /// The binding pattern.
    pub pat: Pat,
    /// Default value (`= expr`), if present.
    pub default: Option<Expr>,
    /// `true` for a trailing rest parameter (`...name`).
    pub is_rest: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Statements
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript statement (or module item).
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `{ … }` block statement.
    Block(BlockStmt),
    /// `var / let / const` variable declaration.
    VarDecl(VarDecl),
    /// `function` declaration.
    FnDecl(Box<Function>),
    /// `class` declaration.
    ClassDecl(Box<Class>),
    /// Expression statement (`expr ;`).
    Expr(ExprStmt),
    /// `if (test) consequent else alternate`
    If(IfStmt),
    /// `for (init; test; update) body`
    For(Box<ForStmt>),
    /// `for (left in right) body`
    ForIn(Box<ForInStmt>),
    /// `for (left of right) body`
    ForOf(Box<ForOfStmt>),
    /// `while (test) body`
    While(WhileStmt),
    /// `do body while (test);`
    DoWhile(DoWhileStmt),
    /// `switch (discriminant) { cases }`
    Switch(Box<SwitchStmt>),
    /// `try { … } catch (…) { … } finally { … }`
    Try(Box<TryStmt>),
    /// `return argument?;`
    Return(ReturnStmt),
    /// `throw argument;`
    Throw(ThrowStmt),
    /// `break label?;`
    Break(BreakStmt),
    /// `continue label?;`
    Continue(ContinueStmt),
    /// `label: body`
    Labeled(Box<LabeledStmt>),
    /// `debugger;`
    Debugger(DebuggerStmt),
    /// `with (object) body`
    With(Box<WithStmt>),
    /// Empty statement `;`.
    Empty(EmptyStmt),
    /// `import … from "source"` (module top-level only).
    Import(Box<ImportDecl>),
    /// `export { … } [from "source"]` or `export declaration`.
    ExportNamed(Box<ExportNamedDecl>),
    /// `export default …`.
    ExportDefault(Box<ExportDefaultDecl>),
    /// `export * from "source"`.
    ExportAll(ExportAllDecl),
}

impl Stmt {
    /// Returns the source location of this statement.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Stmt::Block(s) => s.loc,
            Stmt::VarDecl(s) => s.loc,
            Stmt::FnDecl(s) => s.loc,
            Stmt::ClassDecl(s) => s.loc,
            Stmt::Expr(s) => s.loc,
            Stmt::If(s) => s.loc,
            Stmt::For(s) => s.loc,
            Stmt::ForIn(s) => s.loc,
            Stmt::ForOf(s) => s.loc,
            Stmt::While(s) => s.loc,
            Stmt::DoWhile(s) => s.loc,
            Stmt::Switch(s) => s.loc,
            Stmt::Try(s) => s.loc,
            Stmt::Return(s) => s.loc,
            Stmt::Throw(s) => s.loc,
            Stmt::Break(s) => s.loc,
            Stmt::Continue(s) => s.loc,
            Stmt::Labeled(s) => s.loc,
            Stmt::Debugger(s) => s.loc,
            Stmt::With(s) => s.loc,
            Stmt::Empty(s) => s.loc,
            Stmt::Import(s) => s.loc,
            Stmt::ExportNamed(s) => s.loc,
            Stmt::ExportDefault(s) => s.loc,
            Stmt::ExportAll(s) => s.loc,
        }
    }

    /// Update the end of this statement's byte range.
    pub fn set_end(&mut self, end: Position) {
        match self {
            Stmt::Block(s) => s.loc.end = end,
            Stmt::VarDecl(s) => s.loc.end = end,
            Stmt::FnDecl(s) => s.loc.end = end,
            Stmt::ClassDecl(s) => s.loc.end = end,
            Stmt::Expr(s) => s.loc.end = end,
            Stmt::If(s) => s.loc.end = end,
            Stmt::For(s) => s.loc.end = end,
            Stmt::ForIn(s) => s.loc.end = end,
            Stmt::ForOf(s) => s.loc.end = end,
            Stmt::While(s) => s.loc.end = end,
            Stmt::DoWhile(s) => s.loc.end = end,
            Stmt::Switch(s) => s.loc.end = end,
            Stmt::Try(s) => s.loc.end = end,
            Stmt::Return(s) => s.loc.end = end,
            Stmt::Throw(s) => s.loc.end = end,
            Stmt::Break(s) => s.loc.end = end,
            Stmt::Continue(s) => s.loc.end = end,
            Stmt::Labeled(s) => s.loc.end = end,
            Stmt::Debugger(s) => s.loc.end = end,
            Stmt::With(s) => s.loc.end = end,
            Stmt::Empty(s) => s.loc.end = end,
            Stmt::Import(s) => s.loc.end = end,
            Stmt::ExportNamed(s) => s.loc.end = end,
            Stmt::ExportDefault(s) => s.loc.end = end,
            Stmt::ExportAll(s) => s.loc.end = end,
        }
    }
}

/// `{ statements }` block statement.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Statements in the block.
    pub body: Vec<Stmt>,
}

/// Expression statement: `expr ;`
#[derive(Debug, Clone)]
pub struct ExprStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The expression.
    pub expr: Box<Expr>,
}

/// `if (test) consequent else alternate`
#[derive(Debug, Clone)]
pub struct IfStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Condition expression.
    pub test: Box<Expr>,
    /// Taken branch.
    pub consequent: Box<Stmt>,
    /// Not-taken branch, if present.
    pub alternate: Option<Box<Stmt>>,
}

/// `for (init; test; update) body`
#[derive(Debug, Clone)]
pub struct ForStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional initializer.
    pub init: Option<ForInit>,
    /// Optional loop condition.
    pub test: Option<Expr>,
    /// Optional update expression.
    pub update: Option<Expr>,
    /// Loop body.
    pub body: Stmt,
}

/// The initializer slot in a C-style `for` statement.
#[derive(Debug, Clone)]
pub enum ForInit {
    /// `var / let / const` declaration.
    VarDecl(VarDecl),
    /// Plain expression.
    Expr(Expr),
}

/// The binding slot of a `for-in` / `for-of` header.
#[derive(Debug, Clone)]
pub struct ForHead {
    /// Declaration keyword; `None` when the left side is an assignment
    /// target rather than a declaration.
    pub decl_kind: Option<DeclKind>,
    /// The bound (or assigned) pattern.
    pub pat: Pat,
}

/// `for (left in right) body`
#[derive(Debug, Clone)]
pub struct ForInStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Left-hand side binding.
    pub left: ForHead,
    /// The object being enumerated.
    pub right: Expr,
    /// Loop body.
    pub body: Stmt,
}

/// `for (left of right) body`
#[derive(Debug, Clone)]
pub struct ForOfStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Left-hand side binding.
    pub left: ForHead,
    /// The iterable.
    pub right: Expr,
    /// Loop body.
    pub body: Stmt,
}

/// `while (test) body`
#[derive(Debug, Clone)]
pub struct WhileStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop condition.
    pub test: Box<Expr>,
    /// Loop body.
    pub body: Box<Stmt>,
}

/// `do body while (test);`
#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Loop body.
    pub body: Box<Stmt>,
    /// Loop condition.
    pub test: Box<Expr>,
}

/// `switch (discriminant) { clauses }`
///
/// Clause lists before and after `default` are kept separate so the compiler
/// can preserve fall-through dispatch order.
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The value being switched on.
    pub discriminant: Expr,
    /// `case` clauses preceding `default`.
    pub first_clauses: Vec<SwitchClause>,
    /// The `default` clause, if present.
    pub default_clause: Option<SwitchClause>,
    /// `case` clauses following `default`.
    pub second_clauses: Vec<SwitchClause>,
}

/// A single `case expr:` or `default:` clause in a `switch` statement.
#[derive(Debug, Clone)]
pub struct SwitchClause {
    /// Source location.
    pub loc: SourceLocation,
    /// `None` for the `default:` clause; `Some(expr)` for `case expr:`.
    pub test: Option<Expr>,
    /// Body statements for this clause.
    pub body: Vec<Stmt>,
}

/// `try { block } catch (param) { handler } finally { finalizer }`
#[derive(Debug, Clone)]
pub struct TryStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The `try` block.
    pub block: Stmt,
    /// Optional `catch` clause.
    pub handler: Option<CatchClause>,
    /// Optional `finally` block.
    pub finalizer: Option<Stmt>,
}

/// `catch (param) body`
#[derive(Debug, Clone)]
pub struct CatchClause {
    /// Source location.
    pub loc: SourceLocation,
    /// Binding parameter (identifier or destructuring pattern).
    pub param: Pat,
    /// The catch block.
    pub body: Stmt,
}

/// `return argument?;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional return value.
    pub argument: Option<Box<Expr>>,
}

/// `throw argument;`
#[derive(Debug, Clone)]
pub struct ThrowStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The thrown value.
    pub argument: Box<Expr>,
}

/// `break label?;`
#[derive(Debug, Clone)]
pub struct BreakStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional target label.
    pub label: Option<IdentId>,
}

/// `continue label?;`
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// Optional target label.
    pub label: Option<IdentId>,
}

/// `label: body`
#[derive(Debug, Clone)]
pub struct LabeledStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The label identifier.
    pub label: Ident,
    /// The labeled statement.
    pub body: Stmt,
}

/// `debugger;`
#[derive(Debug, Clone)]
pub struct DebuggerStmt {
    /// Source location.
    pub loc: SourceLocation,
}

/// `with (object) body` — sloppy mode only.
#[derive(Debug, Clone)]
pub struct WithStmt {
    /// Source location.
    pub loc: SourceLocation,
    /// The scope object.
    pub object: Expr,
    /// The body statement.
    pub body: Stmt,
}

/// Empty statement `;`.
#[derive(Debug, Clone)]
pub struct EmptyStmt {
    /// Source location.
    pub loc: SourceLocation,
}

// ─────────────────────────────────────────────────────────────────────────────
// Variable declarations
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a variable declaration uses `var`, `let`, or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `var` — function-scoped.
    Var,
    /// `let` — block-scoped, reassignable.
    Let,
    /// `const` — block-scoped, non-reassignable.
    Const,
}

/// `var / let / const declarators`
#[derive(Debug, Clone)]
pub struct VarDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// Declaration keyword.
    pub kind: DeclKind,
    /// One or more declarators.
    pub declarators: Vec<VarDeclarator>,
}

/// A single `pattern [= initializer]` in a variable declaration.
#[derive(Debug, Clone)]
pub struct VarDeclarator {
    /// Source location.
    pub loc: SourceLocation,
    /// The binding pattern.
    pub id: Pat,
    /// Optional initializer expression.
    pub init: Option<Expr>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Functions
// ─────────────────────────────────────────────────────────────────────────────

/// The grammar production a function was parsed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Plain `function` declaration or expression.
    Normal,
    /// Object-literal or class method (`name() { … }`).
    Method,
    /// Getter (`get name() { … }`).
    Getter,
    /// Setter (`set name(v) { … }`).
    Setter,
    /// Arrow function.
    Arrow,
    /// Generator (`function*` or `*name() { … }`).
    Generator,
}

/// The body slot of a [`Function`].
#[derive(Debug, Clone)]
pub enum FnBody {
    /// `{ statements }` block body.
    Block(Vec<Stmt>),
    /// Concise arrow expression body (an implicit return).
    Expr(Box<Expr>),
    /// The body was skipped via the source-provider cache; only the metadata
    /// on the owning [`Function`] is populated.  The compiler re-parses the
    /// recorded byte range on demand.
    Skipped,
}

/// A parsed function: shared payload of declarations, expressions, arrows,
/// and class/object methods.
#[derive(Debug, Clone)]
pub struct Function {
    /// Source location of the whole function.
    pub loc: SourceLocation,
    /// Function name; `None` for anonymous expressions and arrows.
    pub name: Option<Ident>,
    /// The production this function was parsed under.
    pub kind: FunctionKind,
    /// Parameter list.
    pub params: Vec<Param>,
    /// Number of declared parameters (also valid when the body was skipped).
    pub param_count: u32,
    /// Function body.
    pub body: FnBody,
    /// Byte range of the body (the `{…}` block or the concise expression).
    pub body_span: Span,
    /// `true` when the function body is strict.
    pub strict: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Classes
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a class constructor is base or derived (`extends`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassConstructorKind {
    /// No `extends` clause.
    Base,
    /// Has an `extends` clause; `super(…)` is required before `this`.
    Derived,
}

/// The variant of a class method definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Regular method.
    Method,
    /// Getter (`get key() { … }`).
    Get,
    /// Setter (`set key(v) { … }`).
    Set,
}

/// `[static] [get|set|*] key(params) { body }`
#[derive(Debug, Clone)]
pub struct ClassMethod {
    /// Source location.
    pub loc: SourceLocation,
    /// `method`, `get`, or `set`.
    pub kind: MethodKind,
    /// The property key.
    pub key: PropKey,
    /// The method's function value (always an [`Expr::Fn`]).
    pub value: Expr,
}

/// A parsed class: shared payload of declarations and expressions.
#[derive(Debug, Clone)]
pub struct Class {
    /// Source location.
    pub loc: SourceLocation,
    /// Class name; `None` only for anonymous class expressions.
    pub name: Option<Ident>,
    /// The `extends` expression, if present.
    pub parent: Option<Expr>,
    /// Explicit `constructor` method, if the body declared one.
    pub constructor: Option<Expr>,
    /// Whether the (explicit or synthesized) constructor is base or derived.
    pub constructor_kind: ClassConstructorKind,
    /// Prototype methods.
    pub instance_methods: Vec<ClassMethod>,
    /// Static methods.
    pub static_methods: Vec<ClassMethod>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Modules
// ─────────────────────────────────────────────────────────────────────────────

/// `import specifiers from "source"`
#[derive(Debug, Clone)]
pub struct ImportDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// Default import binding (`import d from …`).
    pub default: Option<Ident>,
    /// Namespace import binding (`import * as ns from …`).
    pub namespace: Option<Ident>,
    /// Named import specifiers (`import { a, b as c } from …`).
    pub named: Vec<ImportSpecifier>,
    /// The module specifier string.
    pub source: IdentId,
}

/// `{ imported as local }` — named import specifier.
#[derive(Debug, Clone)]
pub struct ImportSpecifier {
    /// Source location.
    pub loc: SourceLocation,
    /// The name as exported from the module.
    pub imported: IdentId,
    /// The local binding.
    pub local: Ident,
}

/// `export { specifiers } [from "source"]` or `export declaration`
#[derive(Debug, Clone)]
pub struct ExportNamedDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// Named export specifiers.
    pub specifiers: Vec<ExportSpecifier>,
    /// Re-export source, if present.
    pub source: Option<IdentId>,
    /// Inline declaration (`export function f() { … }`, etc.).
    pub declaration: Option<Box<Stmt>>,
}

/// `{ local as exported }` — named export specifier.
#[derive(Debug, Clone)]
pub struct ExportSpecifier {
    /// Source location.
    pub loc: SourceLocation,
    /// The local (or re-exported) name.
    pub local: IdentId,
    /// The exported name.
    pub exported: IdentId,
}

/// The exported item in an `export default …` declaration.
#[derive(Debug, Clone)]
pub enum ExportDefaultItem {
    /// `export default function [id] (…) { … }` or `export default class …`.
    Decl(Box<Stmt>),
    /// `export default expr`.
    Expr(Box<Expr>),
}

/// `export default …`
#[derive(Debug, Clone)]
pub struct ExportDefaultDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// The local binding the default export resolves to (`*default*` for
    /// anonymous values).
    pub binding: IdentId,
    /// The exported item.
    pub declaration: ExportDefaultItem,
}

/// `export * from "source"`
#[derive(Debug, Clone)]
pub struct ExportAllDecl {
    /// Source location.
    pub loc: SourceLocation,
    /// The source module specifier.
    pub source: IdentId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// A destructuring pattern: binding form (declarations, parameters, catch)
/// or assignment form (expression destructuring).
#[derive(Debug, Clone)]
pub enum Pat {
    /// A single binding name.
    Binding(Ident),
    /// An assignment target (member expression chain or identifier), used
    /// only by expression destructuring.
    Target(Box<Expr>),
    /// `[a, , b = 1, ...rest]`
    Array(Box<ArrayPat>),
    /// `{ a, b: c = 1, [k]: d, ...rest }`
    Object(Box<ObjectPat>),
}

impl Pat {
    /// Returns the source location of this pattern.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Pat::Binding(p) => p.loc,
            Pat::Target(e) => e.loc(),
            Pat::Array(p) => p.loc,
            Pat::Object(p) => p.loc,
        }
    }
}

/// One element of an [`ArrayPat`].
#[derive(Debug, Clone)]
pub struct ArrayPatElem {
    /// The element pattern.
    pub pat: Pat,
    /// Default value, if present.
    pub default: Option<Expr>,
}

/// Array destructuring pattern.
#[derive(Debug, Clone)]
pub struct ArrayPat {
    /// Source location.
    pub loc: SourceLocation,
    /// Elements; `None` records an elision (`,`).
    pub elements: Vec<Option<ArrayPatElem>>,
    /// Trailing rest element, if present.
    pub rest: Option<Pat>,
}

/// One property of an [`ObjectPat`].
#[derive(Debug, Clone)]
pub struct ObjectPatProp {
    /// Source location.
    pub loc: SourceLocation,
    /// The property key.
    pub key: PropKey,
    /// The inner pattern the value is bound/assigned to.
    pub pat: Pat,
    /// Default value, if present.
    pub default: Option<Expr>,
}

/// Object destructuring pattern.
#[derive(Debug, Clone)]
pub struct ObjectPat {
    /// Source location.
    pub loc: SourceLocation,
    /// Property entries.
    pub props: Vec<ObjectPatProp>,
    /// Trailing rest property, if present.
    pub rest: Option<Pat>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Literals
// ─────────────────────────────────────────────────────────────────────────────

/// `null` literal.
#[derive(Debug, Clone, Copy)]
pub struct NullLit {
    /// Source location.
    pub loc: SourceLocation,
}

/// `true` or `false` literal.
#[derive(Debug, Clone, Copy)]
pub struct BoolLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The boolean value.
    pub value: bool,
}

/// Numeric literal.
#[derive(Debug, Clone, Copy)]
pub struct NumLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The parsed numeric value.
    pub value: f64,
}

/// String literal.
#[derive(Debug, Clone, Copy)]
pub struct StringLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The decoded (cooked) string value.
    pub value: IdentId,
}

/// Regular-expression literal `/pattern/flags`.
#[derive(Debug, Clone, Copy)]
pub struct RegExpLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The pattern text (between the slashes).
    pub pattern: IdentId,
    /// The flag characters (after the closing slash).
    pub flags: IdentId,
}

/// `` `quasis ${expressions} quasis` `` — template literal.
#[derive(Debug, Clone)]
pub struct TemplateLit {
    /// Source location.
    pub loc: SourceLocation,
    /// The string parts (one more than `expressions`).
    pub quasis: Vec<TemplateElement>,
    /// The interpolated expressions.
    pub expressions: Vec<Expr>,
}

/// A static string fragment inside a template literal.
#[derive(Debug, Clone, Copy)]
pub struct TemplateElement {
    /// Source location.
    pub loc: SourceLocation,
    /// Cooked (decoded) value; `None` if the fragment has an invalid escape
    /// (legal only in tagged position).
    pub cooked: Option<IdentId>,
    /// Raw source text of this fragment (backslashes not interpreted).
    pub raw: IdentId,
    /// `true` for the final quasi (at the end of the template).
    pub tail: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Expressions
// ─────────────────────────────────────────────────────────────────────────────

/// A JavaScript expression.
#[derive(Debug, Clone)]
pub enum Expr {
    /// `null`
    Null(NullLit),
    /// `true` / `false`
    Bool(BoolLit),
    /// Numeric literal.
    Num(NumLit),
    /// String literal.
    Str(StringLit),
    /// Regular-expression literal.
    Regexp(RegExpLit),
    /// Template literal.
    Template(Box<TemplateLit>),

    /// Plain identifier.
    Ident(Ident),
    /// `this`
    This(ThisExpr),
    /// `super` (callee or member base; validated by the parser).
    Super(SuperExpr),
    /// `new.target`
    NewTarget(NewTargetExpr),
    /// Array literal `[elements]`.
    Array(Box<ArrayExpr>),
    /// Object literal `{ properties }`.
    Object(Box<ObjectExpr>),

    /// Function expression.
    Fn(Box<Function>),
    /// Arrow function expression.
    Arrow(Box<Function>),
    /// Class expression.
    Class(Box<Class>),

    /// Unary prefix operator.
    Unary(Box<UnaryExpr>),
    /// `++` / `--` update expression.
    Update(Box<UpdateExpr>),
    /// Binary infix operator (including `&&` / `||`).
    Binary(Box<BinaryExpr>),
    /// `test ? consequent : alternate`
    Conditional(Box<ConditionalExpr>),
    /// Assignment expression (`=`, `+=`, …).
    Assign(Box<AssignExpr>),
    /// Destructuring assignment (`[a, b] = c`, `({x} = o)`).
    AssignPattern(Box<AssignPatternExpr>),
    /// Comma-separated sequence `a, b, c`.
    Sequence(Box<SequenceExpr>),

    /// `object.property` / `object[expr]`
    Member(Box<MemberExpr>),
    /// `callee(args)`
    Call(Box<CallExpr>),
    /// `new callee(args)`
    New(Box<NewExpr>),

    /// `` tag`template` ``
    TaggedTemplate(Box<TaggedTemplateExpr>),

    /// `...argument` inside an array literal or call argument list.
    Spread(Box<SpreadElement>),

    /// `yield [*] [argument]` — generator bodies only.
    Yield(Box<YieldExpr>),
}

impl Expr {
    /// Returns the source location of this expression.
    pub fn loc(&self) -> SourceLocation {
        match self {
            Expr::Null(e) => e.loc,
            Expr::Bool(e) => e.loc,
            Expr::Num(e) => e.loc,
            Expr::Str(e) => e.loc,
            Expr::Regexp(e) => e.loc,
            Expr::Template(e) => e.loc,
            Expr::Ident(e) => e.loc,
            Expr::This(e) => e.loc,
            Expr::Super(e) => e.loc,
            Expr::NewTarget(e) => e.loc,
            Expr::Array(e) => e.loc,
            Expr::Object(e) => e.loc,
            Expr::Fn(e) => e.loc,
            Expr::Arrow(e) => e.loc,
            Expr::Class(e) => e.loc,
            Expr::Unary(e) => e.loc,
            Expr::Update(e) => e.loc,
            Expr::Binary(e) => e.loc,
            Expr::Conditional(e) => e.loc,
            Expr::Assign(e) => e.loc,
            Expr::AssignPattern(e) => e.loc,
            Expr::Sequence(e) => e.loc,
            Expr::Member(e) => e.loc,
            Expr::Call(e) => e.loc,
            Expr::New(e) => e.loc,
            Expr::TaggedTemplate(e) => e.loc,
            Expr::Spread(e) => e.loc,
            Expr::Yield(e) => e.loc,
        }
    }

    /// Update the end of this expression's byte range.
    pub fn set_end(&mut self, end: Position) {
        match self {
            Expr::Null(e) => e.loc.end = end,
            Expr::Bool(e) => e.loc.end = end,
            Expr::Num(e) => e.loc.end = end,
            Expr::Str(e) => e.loc.end = end,
            Expr::Regexp(e) => e.loc.end = end,
            Expr::Template(e) => e.loc.end = end,
            Expr::Ident(e) => e.loc.end = end,
            Expr::This(e) => e.loc.end = end,
            Expr::Super(e) => e.loc.end = end,
            Expr::NewTarget(e) => e.loc.end = end,
            Expr::Array(e) => e.loc.end = end,
            Expr::Object(e) => e.loc.end = end,
            Expr::Fn(e) => e.loc.end = end,
            Expr::Arrow(e) => e.loc.end = end,
            Expr::Class(e) => e.loc.end = end,
            Expr::Unary(e) => e.loc.end = end,
            Expr::Update(e) => e.loc.end = end,
            Expr::Binary(e) => e.loc.end = end,
            Expr::Conditional(e) => e.loc.end = end,
            Expr::Assign(e) => e.loc.end = end,
            Expr::AssignPattern(e) => e.loc.end = end,
            Expr::Sequence(e) => e.loc.end = end,
            Expr::Member(e) => e.loc.end = end,
            Expr::Call(e) => e.loc.end = end,
            Expr::New(e) => e.loc.end = end,
            Expr::TaggedTemplate(e) => e.loc.end = end,
            Expr::Spread(e) => e.loc.end = end,
            Expr::Yield(e) => e.loc.end = end,
        }
    }
}

/// `this`
#[derive(Debug, Clone, Copy)]
pub struct ThisExpr {
    /// Source location.
    pub loc: SourceLocation,
}

/// `super`
#[derive(Debug, Clone, Copy)]
pub struct SuperExpr {
    /// Source location.
    pub loc: SourceLocation,
}

/// `new.target`
#[derive(Debug, Clone, Copy)]
pub struct NewTargetExpr {
    /// Source location.
    pub loc: SourceLocation,
}

/// Array literal: `[elements]`.
#[derive(Debug, Clone)]
pub struct ArrayExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Elements, where `None` represents an elision (`,`).
    pub elements: Vec<Option<Expr>>,
}

/// Object literal: `{ properties }`.
#[derive(Debug, Clone)]
pub struct ObjectExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Property list.
    pub properties: Vec<Prop>,
}

/// A single property in an object literal.
#[derive(Debug, Clone)]
pub struct Prop {
    /// Source location.
    pub loc: SourceLocation,
    /// The property key.
    pub key: PropKey,
    /// The value/kind of this property.
    pub value: PropValue,
}

/// The key in an object property or class member.
#[derive(Debug, Clone)]
pub enum PropKey {
    /// Identifier key.
    Ident(Ident),
    /// String literal key.
    Str(StringLit),
    /// Numeric literal key.
    Num(NumLit),
    /// Computed key `[expr]`.
    Computed(Box<Expr>),
}

impl PropKey {
    /// The interned name of an identifier or string key.
    pub fn static_name(&self) -> Option<IdentId> {
        match self {
            PropKey::Ident(id) => Some(id.name),
            PropKey::Str(s) => Some(s.value),
            _ => None,
        }
    }
}

/// The value of a property in an object literal.
#[derive(Debug, Clone)]
pub enum PropValue {
    /// `key: value` — standard property.
    Value(Expr),
    /// `{ key }` — shorthand property (the value is the key resolved as a
    /// variable reference).
    Shorthand(Expr),
    /// `get key() { … }` — getter (an [`Expr::Fn`]).
    Get(Expr),
    /// `set key(v) { … }` — setter (an [`Expr::Fn`]).
    Set(Expr),
    /// `key(params) { … }` — method (an [`Expr::Fn`]).
    Method(Expr),
}

/// `...argument` — spread element in array literals or call arguments.
#[derive(Debug, Clone)]
pub struct SpreadElement {
    /// Source location.
    pub loc: SourceLocation,
    /// The spread argument.
    pub argument: Expr,
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `typeof`
    Typeof,
    /// `void`
    Void,
    /// `delete`
    Delete,
}

/// Unary prefix expression.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The unary operator.
    pub op: UnaryOp,
    /// The operand.
    pub argument: Expr,
}

/// The increment / decrement operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOp {
    /// `++`
    Inc,
    /// `--`
    Dec,
}

/// `++` / `--` update expression.
#[derive(Debug, Clone)]
pub struct UpdateExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// `++` or `--`.
    pub op: UpdateOp,
    /// `true` for prefix, `false` for postfix.
    pub prefix: bool,
    /// The operand (must be a reference).
    pub argument: Expr,
}

/// A binary operator (logical `&&` / `||` included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNotEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `instanceof`
    Instanceof,
    /// `in`
    In,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `>>>`
    UnsignedRightShift,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

/// Binary infix expression.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Expr,
    /// Right operand.
    pub right: Expr,
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// Condition.
    pub test: Expr,
    /// Value when truthy.
    pub consequent: Expr,
    /// Value when falsy.
    pub alternate: Expr,
}

/// An assignment operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `<<=`
    LeftShiftAssign,
    /// `>>=`
    RightShiftAssign,
    /// `>>>=`
    UnsignedRightShiftAssign,
    /// `&=`
    BitAndAssign,
    /// `|=`
    BitOrAssign,
    /// `^=`
    BitXorAssign,
}

/// Assignment expression with a reference target.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The operator.
    pub op: AssignOp,
    /// The target reference (identifier or member access).
    pub target: Expr,
    /// The assigned value.
    pub value: Expr,
}

/// Destructuring assignment: `pattern = value` in expression position.
#[derive(Debug, Clone)]
pub struct AssignPatternExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The assignment pattern.
    pub pattern: Pat,
    /// The assigned value.
    pub value: Expr,
}

/// Comma-separated sequence `a, b, c`.
#[derive(Debug, Clone)]
pub struct SequenceExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The expressions, in evaluation order (always ≥ 2).
    pub expressions: Vec<Expr>,
}

/// The property slot of a [`MemberExpr`].
#[derive(Debug, Clone)]
pub enum MemberProp {
    /// `object.name`
    Dot(Ident),
    /// `object[expr]`
    Bracket(Expr),
}

/// `object.property` / `object[expr]`
#[derive(Debug, Clone)]
pub struct MemberExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The base object.
    pub object: Expr,
    /// The accessed property.
    pub property: MemberProp,
}

/// `callee(args)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The called expression.
    pub callee: Expr,
    /// Call arguments (spread elements included).
    pub arguments: Vec<Expr>,
}

/// `new callee(args)` / `new callee`
#[derive(Debug, Clone)]
pub struct NewExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The constructed expression.
    pub callee: Expr,
    /// Arguments; `None` for argument-less `new F`.
    pub arguments: Option<Vec<Expr>>,
}

/// `` tag`template` ``
#[derive(Debug, Clone)]
pub struct TaggedTemplateExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The tag function expression.
    pub tag: Expr,
    /// The template literal.
    pub quasi: TemplateLit,
}

/// `yield [*] [argument]`
#[derive(Debug, Clone)]
pub struct YieldExpr {
    /// Source location.
    pub loc: SourceLocation,
    /// The yielded value, if present.
    pub argument: Option<Expr>,
    /// `true` for `yield*` delegation.
    pub delegate: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Arena, Interner};

    fn loc() -> SourceLocation {
        Span {
            start: Position {
                offset: 0,
                line: 1,
                column: 1,
            },
            end: Position {
                offset: 0,
                line: 1,
                column: 1,
            },
        }
    }

    #[test]
    fn test_stmt_loc_accessor() {
        let stmt = Stmt::Empty(EmptyStmt { loc: loc() });
        assert_eq!(stmt.loc().start.offset, 0);
    }

    #[test]
    fn test_expr_set_end() {
        let mut expr = Expr::This(ThisExpr { loc: loc() });
        let end = Position {
            offset: 4,
            line: 1,
            column: 5,
        };
        expr.set_end(end);
        assert_eq!(expr.loc().end.offset, 4);
    }

    #[test]
    fn test_prop_key_static_name() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let name = interner.intern("key");
        let key = PropKey::Ident(Ident { loc: loc(), name });
        assert_eq!(key.static_name(), Some(name));
        let computed = PropKey::Computed(Box::new(Expr::This(ThisExpr { loc: loc() })));
        assert_eq!(computed.static_name(), None);
    }

    #[test]
    fn test_pattern_loc() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let name = interner.intern("x");
        let pat = Pat::Binding(Ident { loc: loc(), name });
        assert_eq!(pat.loc().start.line, 1);
    }
}
