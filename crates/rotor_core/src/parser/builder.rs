//! The tree-builder contract: the parser's pluggable back-end.
//!
//! The grammar is written once, against [`TreeBuilder`].  Two implementations
//! exist:
//!
//! - [`AstBuilder`] constructs [`ast`] nodes and supports the function-body
//!   cache.
//! - [`SyntaxChecker`] discards structure; expressions reduce to an
//!   [`ExprClass`] classifier so cover-grammar decisions (is this an object
//!   literal? a valid assignment target?) still resolve, and every other
//!   node type is `()`.  The parser uses it for whole-program syntax
//!   validation and for speculative probes, where the function cache must
//!   stay disabled.
//!
//! All `create_*` operations take the node's [`Span`], computed by the
//! parser from its own token bookkeeping, so builders never need to inspect
//! the values they produced.

use crate::arena::IdentId;
use crate::parser::ast::{
    self, AssignOp, BinaryOp, ClassConstructorKind, DeclKind, FunctionKind, MethodKind, UnaryOp,
    UpdateOp,
};
use crate::parser::token::{Position, Span};

// ─────────────────────────────────────────────────────────────────────────────
// Parser-assembled payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Key of an object-literal property, class member, or object-pattern entry.
#[derive(Debug)]
pub enum PropertyKey<E> {
    /// Identifier key.
    Ident(Span, IdentId),
    /// String literal key.
    Str(Span, IdentId),
    /// Numeric literal key.
    Num(Span, f64),
    /// Computed key `[expr]`.
    Computed(E),
}

impl<E> PropertyKey<E> {
    /// The interned name of an identifier or string key.
    pub fn static_name(&self) -> Option<IdentId> {
        match self {
            PropertyKey::Ident(_, name) | PropertyKey::Str(_, name) => Some(*name),
            _ => None,
        }
    }
}

/// A static string fragment of a template literal.
#[derive(Debug, Clone, Copy)]
pub struct TemplateQuasi {
    /// Source span of the fragment's token.
    pub span: Span,
    /// Cooked value; `None` for an invalid escape in tagged position.
    pub cooked: Option<IdentId>,
    /// Raw text.
    pub raw: IdentId,
    /// `true` for the final fragment.
    pub tail: bool,
}

/// One element of an array pattern (`None` entries are elisions and are
/// passed separately).
pub struct ArrayPatternEntry<B: TreeBuilder + ?Sized> {
    /// The element pattern.
    pub pattern: B::Pattern,
    /// Default value, if present.
    pub default: Option<B::Expr>,
}

/// One property of an object pattern.
pub struct ObjectPatternEntry<B: TreeBuilder + ?Sized> {
    /// Span of the whole entry.
    pub span: Span,
    /// The property key.
    pub key: PropertyKey<B::Expr>,
    /// The inner pattern.
    pub pattern: B::Pattern,
    /// Default value, if present.
    pub default: Option<B::Expr>,
}

/// A single declarator of a `var`/`let`/`const` statement.
pub struct DeclaratorInfo<B: TreeBuilder + ?Sized> {
    /// Span of `pattern [= init]`.
    pub span: Span,
    /// The bound pattern.
    pub pattern: B::Pattern,
    /// The initializer, if present.
    pub init: Option<B::Expr>,
}

/// The initializer slot of a C-style `for` header.
pub enum ForInitInfo<B: TreeBuilder + ?Sized> {
    /// `for (var/let/const …;;)`
    Decl(B::Stmt),
    /// `for (expr;;)`
    Expr(B::Expr),
}

/// The left side of a `for-in` / `for-of` header.
pub struct ForHeadInfo<B: TreeBuilder + ?Sized> {
    /// Declaration keyword, or `None` for an assignment-target head.
    pub decl_kind: Option<DeclKind>,
    /// The bound (or assigned) pattern.
    pub pattern: B::Pattern,
}

/// The body slot of a [`FunctionInfo`].
pub enum FunctionBody<B: TreeBuilder + ?Sized> {
    /// `{ statements }` block body.
    Block(B::SourceElements),
    /// Arrow concise-expression body.
    Expr(B::Expr),
    /// Body skipped via the source-provider cache.
    Skipped,
}

/// Output of a function parse, assembled by the parser and handed to the
/// builder to turn into a declaration or expression node.
pub struct FunctionInfo<B: TreeBuilder + ?Sized> {
    /// Function name, if any.
    pub name: Option<(Span, IdentId)>,
    /// The production the function was parsed under.
    pub kind: FunctionKind,
    /// Formal parameter list.
    pub params: B::ParamList,
    /// Number of declared parameters (valid even when the body is skipped).
    pub param_count: u32,
    /// The body.
    pub body: FunctionBody<B>,
    /// Span of the whole function.
    pub span: Span,
    /// Span of the body.
    pub body_span: Span,
    /// `true` when the body is strict.
    pub strict: bool,
}

/// One method of a class body.
pub struct ClassMethodInfo<B: TreeBuilder + ?Sized> {
    /// Span of the member.
    pub span: Span,
    /// `method`, `get`, or `set`.
    pub kind: MethodKind,
    /// The member key.
    pub key: PropertyKey<B::Expr>,
    /// The method function (a function expression value).
    pub function: B::Expr,
}

/// Output of a class parse.
pub struct ClassInfo<B: TreeBuilder + ?Sized> {
    /// Span of the whole class.
    pub span: Span,
    /// Class name, if any.
    pub name: Option<(Span, IdentId)>,
    /// The `extends` expression.
    pub parent: Option<B::Expr>,
    /// Explicit constructor, if declared.
    pub constructor: Option<B::Expr>,
    /// Base or derived.
    pub constructor_kind: ClassConstructorKind,
    /// Prototype methods.
    pub instance_methods: Vec<ClassMethodInfo<B>>,
    /// Static methods.
    pub static_methods: Vec<ClassMethodInfo<B>>,
}

/// A named import binding.
#[derive(Debug, Clone, Copy)]
pub struct ImportSpecifierInfo {
    /// Span of the specifier.
    pub span: Span,
    /// The name exported by the requested module.
    pub imported: IdentId,
    /// The local binding name.
    pub local: IdentId,
}

/// A named export specifier.
#[derive(Debug, Clone, Copy)]
pub struct ExportSpecifierInfo {
    /// Span of the specifier.
    pub span: Span,
    /// The local name.
    pub local: IdentId,
    /// The exported name.
    pub exported: IdentId,
}

/// The exported item of an `export default` declaration.
pub enum ExportDefaultInfo<B: TreeBuilder + ?Sized> {
    /// A hoistable declaration (`function` / `class`).
    Decl(B::Stmt),
    /// An expression.
    Expr(B::Expr),
}

// ─────────────────────────────────────────────────────────────────────────────
// TreeBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// The parser's pluggable back-end.
///
/// Capability flags are queried as ordinary methods; the parser skips cache
/// population when [`TreeBuilder::can_use_function_cache`] is `false` and
/// elides construction-only bookkeeping when [`TreeBuilder::creates_ast`] is
/// `false`.
pub trait TreeBuilder {
    /// Expression values.
    type Expr: std::fmt::Debug;
    /// Statement values.
    type Stmt: std::fmt::Debug;
    /// Statement lists.
    type SourceElements: std::fmt::Debug;
    /// Destructuring patterns.
    type Pattern: std::fmt::Debug;
    /// Object-literal properties.
    type Property: std::fmt::Debug;
    /// Switch clauses.
    type Clause: std::fmt::Debug;
    /// Formal parameter lists.
    type ParamList: std::fmt::Debug;

    /// `true` when this builder constructs AST nodes.
    fn creates_ast(&self) -> bool;
    /// `true` when the parser may consult and populate the function cache.
    fn can_use_function_cache(&self) -> bool;

    // ── Leaves ───────────────────────────────────────────────────────────────

    /// Identifier reference.
    fn create_ident(&mut self, span: Span, name: IdentId) -> Self::Expr;
    /// String literal.
    fn create_string(&mut self, span: Span, value: IdentId) -> Self::Expr;
    /// Numeric literal.
    fn create_number(&mut self, span: Span, value: f64) -> Self::Expr;
    /// `true` / `false`.
    fn create_bool(&mut self, span: Span, value: bool) -> Self::Expr;
    /// `null`.
    fn create_null(&mut self, span: Span) -> Self::Expr;
    /// Regular-expression literal.
    fn create_regexp(&mut self, span: Span, pattern: IdentId, flags: IdentId) -> Self::Expr;
    /// `this`.
    fn create_this(&mut self, span: Span) -> Self::Expr;
    /// `super`.
    fn create_super(&mut self, span: Span) -> Self::Expr;
    /// `new.target`.
    fn create_new_target(&mut self, span: Span) -> Self::Expr;
    /// Template literal.
    fn create_template(
        &mut self,
        span: Span,
        quasis: Vec<TemplateQuasi>,
        expressions: Vec<Self::Expr>,
    ) -> Self::Expr;
    /// `` tag`template` ``.
    fn create_tagged_template(
        &mut self,
        span: Span,
        tag: Self::Expr,
        quasis: Vec<TemplateQuasi>,
        expressions: Vec<Self::Expr>,
    ) -> Self::Expr;

    // ── Expressions ──────────────────────────────────────────────────────────

    /// Binary infix expression (`&&`/`||` included).
    fn create_binary(
        &mut self,
        span: Span,
        op: BinaryOp,
        left: Self::Expr,
        right: Self::Expr,
    ) -> Self::Expr;
    /// Unary prefix expression.
    fn create_unary(&mut self, span: Span, op: UnaryOp, operand: Self::Expr) -> Self::Expr;
    /// `++`/`--` in prefix or postfix position.
    fn create_update(
        &mut self,
        span: Span,
        op: UpdateOp,
        prefix: bool,
        operand: Self::Expr,
    ) -> Self::Expr;
    /// `test ? consequent : alternate`.
    fn create_conditional(
        &mut self,
        span: Span,
        test: Self::Expr,
        consequent: Self::Expr,
        alternate: Self::Expr,
    ) -> Self::Expr;
    /// Assignment with a reference target.
    fn create_assignment(
        &mut self,
        span: Span,
        op: AssignOp,
        target: Self::Expr,
        value: Self::Expr,
    ) -> Self::Expr;
    /// Destructuring assignment (`[a] = b`).
    fn create_destructuring_assignment(
        &mut self,
        span: Span,
        pattern: Self::Pattern,
        value: Self::Expr,
    ) -> Self::Expr;
    /// Comma sequence.
    fn create_sequence(&mut self, span: Span, expressions: Vec<Self::Expr>) -> Self::Expr;
    /// Array literal.
    fn create_array(&mut self, span: Span, elements: Vec<Option<Self::Expr>>) -> Self::Expr;
    /// Object literal.
    fn create_object(&mut self, span: Span, properties: Vec<Self::Property>) -> Self::Expr;
    /// Spread element.
    fn create_spread(&mut self, span: Span, operand: Self::Expr) -> Self::Expr;
    /// `yield` / `yield*`.
    fn create_yield(
        &mut self,
        span: Span,
        argument: Option<Self::Expr>,
        delegate: bool,
    ) -> Self::Expr;
    /// `base.name`.
    fn create_dot_access(
        &mut self,
        span: Span,
        base: Self::Expr,
        property_span: Span,
        property: IdentId,
    ) -> Self::Expr;
    /// `base[index]`.
    fn create_bracket_access(
        &mut self,
        span: Span,
        base: Self::Expr,
        index: Self::Expr,
    ) -> Self::Expr;
    /// `callee(arguments)`.
    fn create_call(&mut self, span: Span, callee: Self::Expr, arguments: Vec<Self::Expr>)
        -> Self::Expr;
    /// `new callee(arguments)` / `new callee`.
    fn create_new(
        &mut self,
        span: Span,
        callee: Self::Expr,
        arguments: Option<Vec<Self::Expr>>,
    ) -> Self::Expr;
    /// Function expression.
    fn create_function_expr(&mut self, info: FunctionInfo<Self>) -> Self::Expr;
    /// Arrow function expression.
    fn create_arrow_function_expr(&mut self, info: FunctionInfo<Self>) -> Self::Expr;
    /// Class expression.
    fn create_class_expr(&mut self, info: ClassInfo<Self>) -> Self::Expr;

    // ── Object-literal properties ────────────────────────────────────────────

    /// `key: value` (or shorthand when `shorthand` is set).
    fn create_property(
        &mut self,
        span: Span,
        key: PropertyKey<Self::Expr>,
        value: Self::Expr,
        shorthand: bool,
    ) -> Self::Property;
    /// `get key() { … }`.
    fn create_getter_property(
        &mut self,
        span: Span,
        key: PropertyKey<Self::Expr>,
        function: Self::Expr,
    ) -> Self::Property;
    /// `set key(v) { … }`.
    fn create_setter_property(
        &mut self,
        span: Span,
        key: PropertyKey<Self::Expr>,
        function: Self::Expr,
    ) -> Self::Property;
    /// `key(params) { … }`.
    fn create_method_property(
        &mut self,
        span: Span,
        key: PropertyKey<Self::Expr>,
        function: Self::Expr,
    ) -> Self::Property;

    // ── Patterns ─────────────────────────────────────────────────────────────

    /// A single binding name.
    fn create_binding_location(&mut self, span: Span, name: IdentId) -> Self::Pattern;
    /// An assignment target inside an expression pattern.
    fn create_assignment_element(&mut self, target: Self::Expr) -> Self::Pattern;
    /// Array pattern (elisions as `None`, rest passed separately).
    fn create_array_pattern(
        &mut self,
        span: Span,
        entries: Vec<Option<ArrayPatternEntry<Self>>>,
        rest: Option<Self::Pattern>,
    ) -> Self::Pattern;
    /// Object pattern.
    fn create_object_pattern(
        &mut self,
        span: Span,
        entries: Vec<ObjectPatternEntry<Self>>,
        rest: Option<Self::Pattern>,
    ) -> Self::Pattern;

    // ── Formal parameters ────────────────────────────────────────────────────

    /// Fresh, empty parameter list.
    fn create_param_list(&mut self) -> Self::ParamList;
    /// Append one parameter.
    fn append_parameter(
        &mut self,
        list: &mut Self::ParamList,
        span: Span,
        pattern: Self::Pattern,
        default: Option<Self::Expr>,
        is_rest: bool,
    );

    // ── Source elements ──────────────────────────────────────────────────────

    /// Fresh, empty statement list.
    fn create_source_elements(&mut self) -> Self::SourceElements;
    /// Append one statement.
    fn append_source_element(&mut self, elements: &mut Self::SourceElements, stmt: Self::Stmt);

    // ── Statements ───────────────────────────────────────────────────────────

    /// `{ … }`.
    fn create_block(&mut self, span: Span, body: Self::SourceElements) -> Self::Stmt;
    /// `;`.
    fn create_empty_statement(&mut self, span: Span) -> Self::Stmt;
    /// `expr;`.
    fn create_expr_statement(&mut self, span: Span, expr: Self::Expr) -> Self::Stmt;
    /// `if (…) … else …`.
    fn create_if(
        &mut self,
        span: Span,
        test: Self::Expr,
        consequent: Self::Stmt,
        alternate: Option<Self::Stmt>,
    ) -> Self::Stmt;
    /// `while (…) …`.
    fn create_while(&mut self, span: Span, test: Self::Expr, body: Self::Stmt) -> Self::Stmt;
    /// `do … while (…);`.
    fn create_do_while(&mut self, span: Span, body: Self::Stmt, test: Self::Expr) -> Self::Stmt;
    /// `for (init; test; update) body`.
    fn create_for(
        &mut self,
        span: Span,
        init: Option<ForInitInfo<Self>>,
        test: Option<Self::Expr>,
        update: Option<Self::Expr>,
        body: Self::Stmt,
    ) -> Self::Stmt;
    /// `for (left in right) body`.
    fn create_for_in(
        &mut self,
        span: Span,
        left: ForHeadInfo<Self>,
        right: Self::Expr,
        body: Self::Stmt,
    ) -> Self::Stmt;
    /// `for (left of right) body`.
    fn create_for_of(
        &mut self,
        span: Span,
        left: ForHeadInfo<Self>,
        right: Self::Expr,
        body: Self::Stmt,
    ) -> Self::Stmt;
    /// `break [label];`.
    fn create_break(&mut self, span: Span, label: Option<IdentId>) -> Self::Stmt;
    /// `continue [label];`.
    fn create_continue(&mut self, span: Span, label: Option<IdentId>) -> Self::Stmt;
    /// `return [expr];`.
    fn create_return(&mut self, span: Span, argument: Option<Self::Expr>) -> Self::Stmt;
    /// `throw expr;`.
    fn create_throw(&mut self, span: Span, argument: Self::Expr) -> Self::Stmt;
    /// `try { … } [catch (p) { … }] [finally { … }]`; the catch triple is
    /// `(clause span, parameter pattern, body)`.
    fn create_try(
        &mut self,
        span: Span,
        block: Self::Stmt,
        handler: Option<(Span, Self::Pattern, Self::Stmt)>,
        finalizer: Option<Self::Stmt>,
    ) -> Self::Stmt;
    /// One `case expr:` / `default:` clause.
    fn create_switch_clause(
        &mut self,
        span: Span,
        test: Option<Self::Expr>,
        body: Self::SourceElements,
    ) -> Self::Clause;
    /// `switch (…) { … }` with the clause lists split around `default`.
    fn create_switch(
        &mut self,
        span: Span,
        discriminant: Self::Expr,
        first_clauses: Vec<Self::Clause>,
        default_clause: Option<Self::Clause>,
        second_clauses: Vec<Self::Clause>,
    ) -> Self::Stmt;
    /// `with (obj) body`.
    fn create_with(&mut self, span: Span, object: Self::Expr, body: Self::Stmt) -> Self::Stmt;
    /// `debugger;`.
    fn create_debugger(&mut self, span: Span) -> Self::Stmt;
    /// `label: body`.
    fn create_labeled(
        &mut self,
        span: Span,
        label_span: Span,
        label: IdentId,
        body: Self::Stmt,
    ) -> Self::Stmt;
    /// `var/let/const declarators;`.
    fn create_declaration_statement(
        &mut self,
        span: Span,
        kind: DeclKind,
        declarators: Vec<DeclaratorInfo<Self>>,
    ) -> Self::Stmt;
    /// `function name(…) { … }` declaration.
    fn create_function_declaration(&mut self, info: FunctionInfo<Self>) -> Self::Stmt;
    /// `class name { … }` declaration.
    fn create_class_declaration(&mut self, info: ClassInfo<Self>) -> Self::Stmt;

    // ── Modules ──────────────────────────────────────────────────────────────

    /// `import …` declaration (default / namespace / named forms).
    fn create_import_declaration(
        &mut self,
        span: Span,
        default: Option<(Span, IdentId)>,
        namespace: Option<(Span, IdentId)>,
        named: Vec<ImportSpecifierInfo>,
        source: IdentId,
    ) -> Self::Stmt;
    /// `export * from "source";`.
    fn create_export_all(&mut self, span: Span, source: IdentId) -> Self::Stmt;
    /// `export { … } [from "source"];` or `export declaration`.
    fn create_export_named(
        &mut self,
        span: Span,
        specifiers: Vec<ExportSpecifierInfo>,
        source: Option<IdentId>,
        declaration: Option<Self::Stmt>,
    ) -> Self::Stmt;
    /// `export default …;`.
    fn create_export_default(
        &mut self,
        span: Span,
        binding: IdentId,
        item: ExportDefaultInfo<Self>,
    ) -> Self::Stmt;

    // ── Node surgery ─────────────────────────────────────────────────────────

    /// Record a widened end offset on an already-built expression (used when
    /// trailing tokens extend a node after construction).
    fn set_end_offset(&mut self, expr: &mut Self::Expr, end: Position);

    // ── Classification queries ───────────────────────────────────────────────

    /// `true` for a plain object or array literal (the cover-grammar rewind
    /// trigger).
    fn is_object_or_array_literal(&self, expr: &Self::Expr) -> bool;
    /// `true` for a valid assignment target (identifier or member access).
    fn is_location(&self, expr: &Self::Expr) -> bool;
    /// The name of a plain identifier expression.
    fn is_identifier(&self, expr: &Self::Expr) -> Option<IdentId>;
    /// `true` for a plain string-literal expression (directive detection).
    fn is_string_literal(&self, expr: &Self::Expr) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// AstBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// The full tree builder: every operation constructs an [`ast`] node.
#[derive(Debug, Default)]
pub struct AstBuilder;

impl AstBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        AstBuilder
    }

    fn key(key: PropertyKey<ast::Expr>) -> ast::PropKey {
        match key {
            PropertyKey::Ident(span, name) => ast::PropKey::Ident(ast::Ident { loc: span, name }),
            PropertyKey::Str(span, value) => {
                ast::PropKey::Str(ast::StringLit { loc: span, value })
            }
            PropertyKey::Num(span, value) => ast::PropKey::Num(ast::NumLit { loc: span, value }),
            PropertyKey::Computed(expr) => ast::PropKey::Computed(Box::new(expr)),
        }
    }

    fn quasis(quasis: Vec<TemplateQuasi>) -> Vec<ast::TemplateElement> {
        quasis
            .into_iter()
            .map(|q| ast::TemplateElement {
                loc: q.span,
                cooked: q.cooked,
                raw: q.raw,
                tail: q.tail,
            })
            .collect()
    }

    fn function(info: FunctionInfo<Self>) -> ast::Function {
        ast::Function {
            loc: info.span,
            name: info
                .name
                .map(|(loc, name)| ast::Ident { loc, name }),
            kind: info.kind,
            params: info.params,
            param_count: info.param_count,
            body: match info.body {
                FunctionBody::Block(elements) => ast::FnBody::Block(elements),
                FunctionBody::Expr(expr) => ast::FnBody::Expr(Box::new(expr)),
                FunctionBody::Skipped => ast::FnBody::Skipped,
            },
            body_span: info.body_span,
            strict: info.strict,
        }
    }

    fn class(info: ClassInfo<Self>) -> ast::Class {
        let method = |m: ClassMethodInfo<Self>| ast::ClassMethod {
            loc: m.span,
            kind: m.kind,
            key: Self::key(m.key),
            value: m.function,
        };
        ast::Class {
            loc: info.span,
            name: info
                .name
                .map(|(loc, name)| ast::Ident { loc, name }),
            parent: info.parent,
            constructor: info.constructor,
            constructor_kind: info.constructor_kind,
            instance_methods: info.instance_methods.into_iter().map(method).collect(),
            static_methods: info.static_methods.into_iter().map(method).collect(),
        }
    }
}

impl TreeBuilder for AstBuilder {
    type Expr = ast::Expr;
    type Stmt = ast::Stmt;
    type SourceElements = ast::SourceElements;
    type Pattern = ast::Pat;
    type Property = ast::Prop;
    type Clause = ast::SwitchClause;
    type ParamList = Vec<ast::Param>;

    fn creates_ast(&self) -> bool {
        true
    }

    fn can_use_function_cache(&self) -> bool {
        true
    }

    fn create_ident(&mut self, span: Span, name: IdentId) -> ast::Expr {
        ast::Expr::Ident(ast::Ident { loc: span, name })
    }

    fn create_string(&mut self, span: Span, value: IdentId) -> ast::Expr {
        ast::Expr::Str(ast::StringLit { loc: span, value })
    }

    fn create_number(&mut self, span: Span, value: f64) -> ast::Expr {
        ast::Expr::Num(ast::NumLit { loc: span, value })
    }

    fn create_bool(&mut self, span: Span, value: bool) -> ast::Expr {
        ast::Expr::Bool(ast::BoolLit { loc: span, value })
    }

    fn create_null(&mut self, span: Span) -> ast::Expr {
        ast::Expr::Null(ast::NullLit { loc: span })
    }

    fn create_regexp(&mut self, span: Span, pattern: IdentId, flags: IdentId) -> ast::Expr {
        ast::Expr::Regexp(ast::RegExpLit {
            loc: span,
            pattern,
            flags,
        })
    }

    fn create_this(&mut self, span: Span) -> ast::Expr {
        ast::Expr::This(ast::ThisExpr { loc: span })
    }

    fn create_super(&mut self, span: Span) -> ast::Expr {
        ast::Expr::Super(ast::SuperExpr { loc: span })
    }

    fn create_new_target(&mut self, span: Span) -> ast::Expr {
        ast::Expr::NewTarget(ast::NewTargetExpr { loc: span })
    }

    fn create_template(
        &mut self,
        span: Span,
        quasis: Vec<TemplateQuasi>,
        expressions: Vec<ast::Expr>,
    ) -> ast::Expr {
        ast::Expr::Template(Box::new(ast::TemplateLit {
            loc: span,
            quasis: Self::quasis(quasis),
            expressions,
        }))
    }

    fn create_tagged_template(
        &mut self,
        span: Span,
        tag: ast::Expr,
        quasis: Vec<TemplateQuasi>,
        expressions: Vec<ast::Expr>,
    ) -> ast::Expr {
        ast::Expr::TaggedTemplate(Box::new(ast::TaggedTemplateExpr {
            loc: span,
            tag,
            quasi: ast::TemplateLit {
                loc: span,
                quasis: Self::quasis(quasis),
                expressions,
            },
        }))
    }

    fn create_binary(
        &mut self,
        span: Span,
        op: BinaryOp,
        left: ast::Expr,
        right: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::Binary(Box::new(ast::BinaryExpr {
            loc: span,
            op,
            left,
            right,
        }))
    }

    fn create_unary(&mut self, span: Span, op: UnaryOp, operand: ast::Expr) -> ast::Expr {
        ast::Expr::Unary(Box::new(ast::UnaryExpr {
            loc: span,
            op,
            argument: operand,
        }))
    }

    fn create_update(
        &mut self,
        span: Span,
        op: UpdateOp,
        prefix: bool,
        operand: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::Update(Box::new(ast::UpdateExpr {
            loc: span,
            op,
            prefix,
            argument: operand,
        }))
    }

    fn create_conditional(
        &mut self,
        span: Span,
        test: ast::Expr,
        consequent: ast::Expr,
        alternate: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::Conditional(Box::new(ast::ConditionalExpr {
            loc: span,
            test,
            consequent,
            alternate,
        }))
    }

    fn create_assignment(
        &mut self,
        span: Span,
        op: AssignOp,
        target: ast::Expr,
        value: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::Assign(Box::new(ast::AssignExpr {
            loc: span,
            op,
            target,
            value,
        }))
    }

    fn create_destructuring_assignment(
        &mut self,
        span: Span,
        pattern: ast::Pat,
        value: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::AssignPattern(Box::new(ast::AssignPatternExpr {
            loc: span,
            pattern,
            value,
        }))
    }

    fn create_sequence(&mut self, span: Span, expressions: Vec<ast::Expr>) -> ast::Expr {
        ast::Expr::Sequence(Box::new(ast::SequenceExpr {
            loc: span,
            expressions,
        }))
    }

    fn create_array(&mut self, span: Span, elements: Vec<Option<ast::Expr>>) -> ast::Expr {
        ast::Expr::Array(Box::new(ast::ArrayExpr {
            loc: span,
            elements,
        }))
    }

    fn create_object(&mut self, span: Span, properties: Vec<ast::Prop>) -> ast::Expr {
        ast::Expr::Object(Box::new(ast::ObjectExpr {
            loc: span,
            properties,
        }))
    }

    fn create_spread(&mut self, span: Span, operand: ast::Expr) -> ast::Expr {
        ast::Expr::Spread(Box::new(ast::SpreadElement {
            loc: span,
            argument: operand,
        }))
    }

    fn create_yield(
        &mut self,
        span: Span,
        argument: Option<ast::Expr>,
        delegate: bool,
    ) -> ast::Expr {
        ast::Expr::Yield(Box::new(ast::YieldExpr {
            loc: span,
            argument,
            delegate,
        }))
    }

    fn create_dot_access(
        &mut self,
        span: Span,
        base: ast::Expr,
        property_span: Span,
        property: IdentId,
    ) -> ast::Expr {
        ast::Expr::Member(Box::new(ast::MemberExpr {
            loc: span,
            object: base,
            property: ast::MemberProp::Dot(ast::Ident {
                loc: property_span,
                name: property,
            }),
        }))
    }

    fn create_bracket_access(
        &mut self,
        span: Span,
        base: ast::Expr,
        index: ast::Expr,
    ) -> ast::Expr {
        ast::Expr::Member(Box::new(ast::MemberExpr {
            loc: span,
            object: base,
            property: ast::MemberProp::Bracket(index),
        }))
    }

    fn create_call(
        &mut self,
        span: Span,
        callee: ast::Expr,
        arguments: Vec<ast::Expr>,
    ) -> ast::Expr {
        ast::Expr::Call(Box::new(ast::CallExpr {
            loc: span,
            callee,
            arguments,
        }))
    }

    fn create_new(
        &mut self,
        span: Span,
        callee: ast::Expr,
        arguments: Option<Vec<ast::Expr>>,
    ) -> ast::Expr {
        ast::Expr::New(Box::new(ast::NewExpr {
            loc: span,
            callee,
            arguments,
        }))
    }

    fn create_function_expr(&mut self, info: FunctionInfo<Self>) -> ast::Expr {
        ast::Expr::Fn(Box::new(Self::function(info)))
    }

    fn create_arrow_function_expr(&mut self, info: FunctionInfo<Self>) -> ast::Expr {
        ast::Expr::Arrow(Box::new(Self::function(info)))
    }

    fn create_class_expr(&mut self, info: ClassInfo<Self>) -> ast::Expr {
        ast::Expr::Class(Box::new(Self::class(info)))
    }

    fn create_property(
        &mut self,
        span: Span,
        key: PropertyKey<ast::Expr>,
        value: ast::Expr,
        shorthand: bool,
    ) -> ast::Prop {
        ast::Prop {
            loc: span,
            key: Self::key(key),
            value: if shorthand {
                ast::PropValue::Shorthand(value)
            } else {
                ast::PropValue::Value(value)
            },
        }
    }

    fn create_getter_property(
        &mut self,
        span: Span,
        key: PropertyKey<ast::Expr>,
        function: ast::Expr,
    ) -> ast::Prop {
        ast::Prop {
            loc: span,
            key: Self::key(key),
            value: ast::PropValue::Get(function),
        }
    }

    fn create_setter_property(
        &mut self,
        span: Span,
        key: PropertyKey<ast::Expr>,
        function: ast::Expr,
    ) -> ast::Prop {
        ast::Prop {
            loc: span,
            key: Self::key(key),
            value: ast::PropValue::Set(function),
        }
    }

    fn create_method_property(
        &mut self,
        span: Span,
        key: PropertyKey<ast::Expr>,
        function: ast::Expr,
    ) -> ast::Prop {
        ast::Prop {
            loc: span,
            key: Self::key(key),
            value: ast::PropValue::Method(function),
        }
    }

    fn create_binding_location(&mut self, span: Span, name: IdentId) -> ast::Pat {
        ast::Pat::Binding(ast::Ident { loc: span, name })
    }

    fn create_assignment_element(&mut self, target: ast::Expr) -> ast::Pat {
        ast::Pat::Target(Box::new(target))
    }

    fn create_array_pattern(
        &mut self,
        span: Span,
        entries: Vec<Option<ArrayPatternEntry<Self>>>,
        rest: Option<ast::Pat>,
    ) -> ast::Pat {
        ast::Pat::Array(Box::new(ast::ArrayPat {
            loc: span,
            elements: entries
                .into_iter()
                .map(|entry| {
                    entry.map(|e| ast::ArrayPatElem {
                        pat: e.pattern,
                        default: e.default,
                    })
                })
                .collect(),
            rest,
        }))
    }

    fn create_object_pattern(
        &mut self,
        span: Span,
        entries: Vec<ObjectPatternEntry<Self>>,
        rest: Option<ast::Pat>,
    ) -> ast::Pat {
        ast::Pat::Object(Box::new(ast::ObjectPat {
            loc: span,
            props: entries
                .into_iter()
                .map(|e| ast::ObjectPatProp {
                    loc: e.span,
                    key: Self::key(e.key),
                    pat: e.pattern,
                    default: e.default,
                })
                .collect(),
            rest,
        }))
    }

    fn create_param_list(&mut self) -> Vec<ast::Param> {
        Vec::new()
    }

    fn append_parameter(
        &mut self,
        list: &mut Vec<ast::Param>,
        span: Span,
        pattern: ast::Pat,
        default: Option<ast::Expr>,
        is_rest: bool,
    ) {
        list.push(ast::Param {
            loc: span,
            pat: pattern,
            default,
            is_rest,
        });
    }

    fn create_source_elements(&mut self) -> ast::SourceElements {
        Vec::new()
    }

    fn append_source_element(&mut self, elements: &mut ast::SourceElements, stmt: ast::Stmt) {
        elements.push(stmt);
    }

    fn create_block(&mut self, span: Span, body: ast::SourceElements) -> ast::Stmt {
        ast::Stmt::Block(ast::BlockStmt { loc: span, body })
    }

    fn create_empty_statement(&mut self, span: Span) -> ast::Stmt {
        ast::Stmt::Empty(ast::EmptyStmt { loc: span })
    }

    fn create_expr_statement(&mut self, span: Span, expr: ast::Expr) -> ast::Stmt {
        ast::Stmt::Expr(ast::ExprStmt {
            loc: span,
            expr: Box::new(expr),
        })
    }

    fn create_if(
        &mut self,
        span: Span,
        test: ast::Expr,
        consequent: ast::Stmt,
        alternate: Option<ast::Stmt>,
    ) -> ast::Stmt {
        ast::Stmt::If(ast::IfStmt {
            loc: span,
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }

    fn create_while(&mut self, span: Span, test: ast::Expr, body: ast::Stmt) -> ast::Stmt {
        ast::Stmt::While(ast::WhileStmt {
            loc: span,
            test: Box::new(test),
            body: Box::new(body),
        })
    }

    fn create_do_while(&mut self, span: Span, body: ast::Stmt, test: ast::Expr) -> ast::Stmt {
        ast::Stmt::DoWhile(ast::DoWhileStmt {
            loc: span,
            body: Box::new(body),
            test: Box::new(test),
        })
    }

    fn create_for(
        &mut self,
        span: Span,
        init: Option<ForInitInfo<Self>>,
        test: Option<ast::Expr>,
        update: Option<ast::Expr>,
        body: ast::Stmt,
    ) -> ast::Stmt {
        let init = init.map(|i| match i {
            ForInitInfo::Decl(stmt) => match stmt {
                ast::Stmt::VarDecl(decl) => ast::ForInit::VarDecl(decl),
                other => {
                    // Only declaration statements reach this arm.
                    debug_assert!(false, "non-declaration for-init: {other:?}");
                    ast::ForInit::Expr(ast::Expr::Null(ast::NullLit { loc: other.loc() }))
                }
            },
            ForInitInfo::Expr(expr) => ast::ForInit::Expr(expr),
        });
        ast::Stmt::For(Box::new(ast::ForStmt {
            loc: span,
            init,
            test,
            update,
            body,
        }))
    }

    fn create_for_in(
        &mut self,
        span: Span,
        left: ForHeadInfo<Self>,
        right: ast::Expr,
        body: ast::Stmt,
    ) -> ast::Stmt {
        ast::Stmt::ForIn(Box::new(ast::ForInStmt {
            loc: span,
            left: ast::ForHead {
                decl_kind: left.decl_kind,
                pat: left.pattern,
            },
            right,
            body,
        }))
    }

    fn create_for_of(
        &mut self,
        span: Span,
        left: ForHeadInfo<Self>,
        right: ast::Expr,
        body: ast::Stmt,
    ) -> ast::Stmt {
        ast::Stmt::ForOf(Box::new(ast::ForOfStmt {
            loc: span,
            left: ast::ForHead {
                decl_kind: left.decl_kind,
                pat: left.pattern,
            },
            right,
            body,
        }))
    }

    fn create_break(&mut self, span: Span, label: Option<IdentId>) -> ast::Stmt {
        ast::Stmt::Break(ast::BreakStmt { loc: span, label })
    }

    fn create_continue(&mut self, span: Span, label: Option<IdentId>) -> ast::Stmt {
        ast::Stmt::Continue(ast::ContinueStmt { loc: span, label })
    }

    fn create_return(&mut self, span: Span, argument: Option<ast::Expr>) -> ast::Stmt {
        ast::Stmt::Return(ast::ReturnStmt {
            loc: span,
            argument: argument.map(Box::new),
        })
    }

    fn create_throw(&mut self, span: Span, argument: ast::Expr) -> ast::Stmt {
        ast::Stmt::Throw(ast::ThrowStmt {
            loc: span,
            argument: Box::new(argument),
        })
    }

    fn create_try(
        &mut self,
        span: Span,
        block: ast::Stmt,
        handler: Option<(Span, ast::Pat, ast::Stmt)>,
        finalizer: Option<ast::Stmt>,
    ) -> ast::Stmt {
        ast::Stmt::Try(Box::new(ast::TryStmt {
            loc: span,
            block,
            handler: handler.map(|(loc, param, body)| ast::CatchClause { loc, param, body }),
            finalizer,
        }))
    }

    fn create_switch_clause(
        &mut self,
        span: Span,
        test: Option<ast::Expr>,
        body: ast::SourceElements,
    ) -> ast::SwitchClause {
        ast::SwitchClause {
            loc: span,
            test,
            body,
        }
    }

    fn create_switch(
        &mut self,
        span: Span,
        discriminant: ast::Expr,
        first_clauses: Vec<ast::SwitchClause>,
        default_clause: Option<ast::SwitchClause>,
        second_clauses: Vec<ast::SwitchClause>,
    ) -> ast::Stmt {
        ast::Stmt::Switch(Box::new(ast::SwitchStmt {
            loc: span,
            discriminant,
            first_clauses,
            default_clause,
            second_clauses,
        }))
    }

    fn create_with(&mut self, span: Span, object: ast::Expr, body: ast::Stmt) -> ast::Stmt {
        ast::Stmt::With(Box::new(ast::WithStmt {
            loc: span,
            object,
            body,
        }))
    }

    fn create_debugger(&mut self, span: Span) -> ast::Stmt {
        ast::Stmt::Debugger(ast::DebuggerStmt { loc: span })
    }

    fn create_labeled(
        &mut self,
        span: Span,
        label_span: Span,
        label: IdentId,
        body: ast::Stmt,
    ) -> ast::Stmt {
        ast::Stmt::Labeled(Box::new(ast::LabeledStmt {
            loc: span,
            label: ast::Ident {
                loc: label_span,
                name: label,
            },
            body,
        }))
    }

    fn create_declaration_statement(
        &mut self,
        span: Span,
        kind: DeclKind,
        declarators: Vec<DeclaratorInfo<Self>>,
    ) -> ast::Stmt {
        ast::Stmt::VarDecl(ast::VarDecl {
            loc: span,
            kind,
            declarators: declarators
                .into_iter()
                .map(|d| ast::VarDeclarator {
                    loc: d.span,
                    id: d.pattern,
                    init: d.init,
                })
                .collect(),
        })
    }

    fn create_function_declaration(&mut self, info: FunctionInfo<Self>) -> ast::Stmt {
        ast::Stmt::FnDecl(Box::new(Self::function(info)))
    }

    fn create_class_declaration(&mut self, info: ClassInfo<Self>) -> ast::Stmt {
        ast::Stmt::ClassDecl(Box::new(Self::class(info)))
    }

    fn create_import_declaration(
        &mut self,
        span: Span,
        default: Option<(Span, IdentId)>,
        namespace: Option<(Span, IdentId)>,
        named: Vec<ImportSpecifierInfo>,
        source: IdentId,
    ) -> ast::Stmt {
        ast::Stmt::Import(Box::new(ast::ImportDecl {
            loc: span,
            default: default.map(|(loc, name)| ast::Ident { loc, name }),
            namespace: namespace.map(|(loc, name)| ast::Ident { loc, name }),
            named: named
                .into_iter()
                .map(|s| ast::ImportSpecifier {
                    loc: s.span,
                    imported: s.imported,
                    local: ast::Ident {
                        loc: s.span,
                        name: s.local,
                    },
                })
                .collect(),
            source,
        }))
    }

    fn create_export_all(&mut self, span: Span, source: IdentId) -> ast::Stmt {
        ast::Stmt::ExportAll(ast::ExportAllDecl { loc: span, source })
    }

    fn create_export_named(
        &mut self,
        span: Span,
        specifiers: Vec<ExportSpecifierInfo>,
        source: Option<IdentId>,
        declaration: Option<ast::Stmt>,
    ) -> ast::Stmt {
        ast::Stmt::ExportNamed(Box::new(ast::ExportNamedDecl {
            loc: span,
            specifiers: specifiers
                .into_iter()
                .map(|s| ast::ExportSpecifier {
                    loc: s.span,
                    local: s.local,
                    exported: s.exported,
                })
                .collect(),
            source,
            declaration: declaration.map(Box::new),
        }))
    }

    fn create_export_default(
        &mut self,
        span: Span,
        binding: IdentId,
        item: ExportDefaultInfo<Self>,
    ) -> ast::Stmt {
        ast::Stmt::ExportDefault(Box::new(ast::ExportDefaultDecl {
            loc: span,
            binding,
            declaration: match item {
                ExportDefaultInfo::Decl(stmt) => ast::ExportDefaultItem::Decl(Box::new(stmt)),
                ExportDefaultInfo::Expr(expr) => ast::ExportDefaultItem::Expr(Box::new(expr)),
            },
        }))
    }

    fn set_end_offset(&mut self, expr: &mut ast::Expr, end: Position) {
        expr.set_end(end);
    }

    fn is_object_or_array_literal(&self, expr: &ast::Expr) -> bool {
        matches!(expr, ast::Expr::Object(_) | ast::Expr::Array(_))
    }

    fn is_location(&self, expr: &ast::Expr) -> bool {
        matches!(expr, ast::Expr::Ident(_) | ast::Expr::Member(_))
    }

    fn is_identifier(&self, expr: &ast::Expr) -> Option<IdentId> {
        match expr {
            ast::Expr::Ident(id) => Some(id.name),
            _ => None,
        }
    }

    fn is_string_literal(&self, expr: &ast::Expr) -> bool {
        matches!(expr, ast::Expr::Str(_))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SyntaxChecker
// ─────────────────────────────────────────────────────────────────────────────

/// Expression classifier used by [`SyntaxChecker`] in place of AST nodes.
///
/// Just enough structure survives for the parser's cover-grammar and
/// assignment-target decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprClass {
    /// A plain identifier reference.
    Ident(IdentId),
    /// A plain object literal.
    ObjectLiteral,
    /// A plain array literal.
    ArrayLiteral,
    /// A member access (`a.b` / `a[b]`).
    Member,
    /// A plain string literal.
    StringLiteral,
    /// Anything else.
    Other,
}

/// The syntax-only builder: validates structure, discards it.
///
/// A checker used inside a speculative region is constructed with
/// [`SyntaxChecker::without_function_cache`] so the probe neither consults
/// nor populates the skip cache.
#[derive(Debug)]
pub struct SyntaxChecker {
    function_cache_enabled: bool,
}

impl SyntaxChecker {
    /// Checker for a top-level syntax-only parse (cache allowed).
    pub fn new() -> Self {
        Self {
            function_cache_enabled: true,
        }
    }

    /// Checker for speculative probes: the function cache stays untouched.
    pub fn without_function_cache() -> Self {
        Self {
            function_cache_enabled: false,
        }
    }
}

impl Default for SyntaxChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder for SyntaxChecker {
    type Expr = ExprClass;
    type Stmt = ();
    type SourceElements = ();
    type Pattern = ();
    type Property = ();
    type Clause = ();
    type ParamList = ();

    fn creates_ast(&self) -> bool {
        false
    }

    fn can_use_function_cache(&self) -> bool {
        self.function_cache_enabled
    }

    fn create_ident(&mut self, _span: Span, name: IdentId) -> ExprClass {
        ExprClass::Ident(name)
    }

    fn create_string(&mut self, _span: Span, _value: IdentId) -> ExprClass {
        ExprClass::StringLiteral
    }

    fn create_number(&mut self, _span: Span, _value: f64) -> ExprClass {
        ExprClass::Other
    }

    fn create_bool(&mut self, _span: Span, _value: bool) -> ExprClass {
        ExprClass::Other
    }

    fn create_null(&mut self, _span: Span) -> ExprClass {
        ExprClass::Other
    }

    fn create_regexp(&mut self, _span: Span, _pattern: IdentId, _flags: IdentId) -> ExprClass {
        ExprClass::Other
    }

    fn create_this(&mut self, _span: Span) -> ExprClass {
        ExprClass::Other
    }

    fn create_super(&mut self, _span: Span) -> ExprClass {
        ExprClass::Other
    }

    fn create_new_target(&mut self, _span: Span) -> ExprClass {
        ExprClass::Other
    }

    fn create_template(
        &mut self,
        _span: Span,
        _quasis: Vec<TemplateQuasi>,
        _expressions: Vec<ExprClass>,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_tagged_template(
        &mut self,
        _span: Span,
        _tag: ExprClass,
        _quasis: Vec<TemplateQuasi>,
        _expressions: Vec<ExprClass>,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_binary(
        &mut self,
        _span: Span,
        _op: BinaryOp,
        _left: ExprClass,
        _right: ExprClass,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_unary(&mut self, _span: Span, _op: UnaryOp, _operand: ExprClass) -> ExprClass {
        ExprClass::Other
    }

    fn create_update(
        &mut self,
        _span: Span,
        _op: UpdateOp,
        _prefix: bool,
        _operand: ExprClass,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_conditional(
        &mut self,
        _span: Span,
        _test: ExprClass,
        _consequent: ExprClass,
        _alternate: ExprClass,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_assignment(
        &mut self,
        _span: Span,
        _op: AssignOp,
        _target: ExprClass,
        _value: ExprClass,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_destructuring_assignment(
        &mut self,
        _span: Span,
        _pattern: (),
        _value: ExprClass,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_sequence(&mut self, _span: Span, _expressions: Vec<ExprClass>) -> ExprClass {
        ExprClass::Other
    }

    fn create_array(&mut self, _span: Span, _elements: Vec<Option<ExprClass>>) -> ExprClass {
        ExprClass::ArrayLiteral
    }

    fn create_object(&mut self, _span: Span, _properties: Vec<()>) -> ExprClass {
        ExprClass::ObjectLiteral
    }

    fn create_spread(&mut self, _span: Span, _operand: ExprClass) -> ExprClass {
        ExprClass::Other
    }

    fn create_yield(
        &mut self,
        _span: Span,
        _argument: Option<ExprClass>,
        _delegate: bool,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_dot_access(
        &mut self,
        _span: Span,
        _base: ExprClass,
        _property_span: Span,
        _property: IdentId,
    ) -> ExprClass {
        ExprClass::Member
    }

    fn create_bracket_access(
        &mut self,
        _span: Span,
        _base: ExprClass,
        _index: ExprClass,
    ) -> ExprClass {
        ExprClass::Member
    }

    fn create_call(
        &mut self,
        _span: Span,
        _callee: ExprClass,
        _arguments: Vec<ExprClass>,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_new(
        &mut self,
        _span: Span,
        _callee: ExprClass,
        _arguments: Option<Vec<ExprClass>>,
    ) -> ExprClass {
        ExprClass::Other
    }

    fn create_function_expr(&mut self, _info: FunctionInfo<Self>) -> ExprClass {
        ExprClass::Other
    }

    fn create_arrow_function_expr(&mut self, _info: FunctionInfo<Self>) -> ExprClass {
        ExprClass::Other
    }

    fn create_class_expr(&mut self, _info: ClassInfo<Self>) -> ExprClass {
        ExprClass::Other
    }

    fn create_property(
        &mut self,
        _span: Span,
        _key: PropertyKey<ExprClass>,
        _value: ExprClass,
        _shorthand: bool,
    ) {
    }

    fn create_getter_property(
        &mut self,
        _span: Span,
        _key: PropertyKey<ExprClass>,
        _function: ExprClass,
    ) {
    }

    fn create_setter_property(
        &mut self,
        _span: Span,
        _key: PropertyKey<ExprClass>,
        _function: ExprClass,
    ) {
    }

    fn create_method_property(
        &mut self,
        _span: Span,
        _key: PropertyKey<ExprClass>,
        _function: ExprClass,
    ) {
    }

    fn create_binding_location(&mut self, _span: Span, _name: IdentId) {}

    fn create_assignment_element(&mut self, _target: ExprClass) {}

    fn create_array_pattern(
        &mut self,
        _span: Span,
        _entries: Vec<Option<ArrayPatternEntry<Self>>>,
        _rest: Option<()>,
    ) {
    }

    fn create_object_pattern(
        &mut self,
        _span: Span,
        _entries: Vec<ObjectPatternEntry<Self>>,
        _rest: Option<()>,
    ) {
    }

    fn create_param_list(&mut self) {}

    fn append_parameter(
        &mut self,
        _list: &mut (),
        _span: Span,
        _pattern: (),
        _default: Option<ExprClass>,
        _is_rest: bool,
    ) {
    }

    fn create_source_elements(&mut self) {}

    fn append_source_element(&mut self, _elements: &mut (), _stmt: ()) {}

    fn create_block(&mut self, _span: Span, _body: ()) {}

    fn create_empty_statement(&mut self, _span: Span) {}

    fn create_expr_statement(&mut self, _span: Span, _expr: ExprClass) {}

    fn create_if(
        &mut self,
        _span: Span,
        _test: ExprClass,
        _consequent: (),
        _alternate: Option<()>,
    ) {
    }

    fn create_while(&mut self, _span: Span, _test: ExprClass, _body: ()) {}

    fn create_do_while(&mut self, _span: Span, _body: (), _test: ExprClass) {}

    fn create_for(
        &mut self,
        _span: Span,
        _init: Option<ForInitInfo<Self>>,
        _test: Option<ExprClass>,
        _update: Option<ExprClass>,
        _body: (),
    ) {
    }

    fn create_for_in(&mut self, _span: Span, _left: ForHeadInfo<Self>, _right: ExprClass, _body: ()) {
    }

    fn create_for_of(&mut self, _span: Span, _left: ForHeadInfo<Self>, _right: ExprClass, _body: ()) {
    }

    fn create_break(&mut self, _span: Span, _label: Option<IdentId>) {}

    fn create_continue(&mut self, _span: Span, _label: Option<IdentId>) {}

    fn create_return(&mut self, _span: Span, _argument: Option<ExprClass>) {}

    fn create_throw(&mut self, _span: Span, _argument: ExprClass) {}

    fn create_try(
        &mut self,
        _span: Span,
        _block: (),
        _handler: Option<(Span, (), ())>,
        _finalizer: Option<()>,
    ) {
    }

    fn create_switch_clause(&mut self, _span: Span, _test: Option<ExprClass>, _body: ()) {}

    fn create_switch(
        &mut self,
        _span: Span,
        _discriminant: ExprClass,
        _first_clauses: Vec<()>,
        _default_clause: Option<()>,
        _second_clauses: Vec<()>,
    ) {
    }

    fn create_with(&mut self, _span: Span, _object: ExprClass, _body: ()) {}

    fn create_debugger(&mut self, _span: Span) {}

    fn create_labeled(&mut self, _span: Span, _label_span: Span, _label: IdentId, _body: ()) {}

    fn create_declaration_statement(
        &mut self,
        _span: Span,
        _kind: DeclKind,
        _declarators: Vec<DeclaratorInfo<Self>>,
    ) {
    }

    fn create_function_declaration(&mut self, _info: FunctionInfo<Self>) {}

    fn create_class_declaration(&mut self, _info: ClassInfo<Self>) {}

    fn create_import_declaration(
        &mut self,
        _span: Span,
        _default: Option<(Span, IdentId)>,
        _namespace: Option<(Span, IdentId)>,
        _named: Vec<ImportSpecifierInfo>,
        _source: IdentId,
    ) {
    }

    fn create_export_all(&mut self, _span: Span, _source: IdentId) {}

    fn create_export_named(
        &mut self,
        _span: Span,
        _specifiers: Vec<ExportSpecifierInfo>,
        _source: Option<IdentId>,
        _declaration: Option<()>,
    ) {
    }

    fn create_export_default(
        &mut self,
        _span: Span,
        _binding: IdentId,
        _item: ExportDefaultInfo<Self>,
    ) {
    }

    fn set_end_offset(&mut self, _expr: &mut ExprClass, _end: Position) {}

    fn is_object_or_array_literal(&self, expr: &ExprClass) -> bool {
        matches!(expr, ExprClass::ObjectLiteral | ExprClass::ArrayLiteral)
    }

    fn is_location(&self, expr: &ExprClass) -> bool {
        matches!(expr, ExprClass::Ident(_) | ExprClass::Member)
    }

    fn is_identifier(&self, expr: &ExprClass) -> Option<IdentId> {
        match expr {
            ExprClass::Ident(name) => Some(*name),
            _ => None,
        }
    }

    fn is_string_literal(&self, expr: &ExprClass) -> bool {
        matches!(expr, ExprClass::StringLiteral)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Arena, Interner};

    fn span() -> Span {
        Span {
            start: Position {
                offset: 0,
                line: 1,
                column: 1,
            },
            end: Position {
                offset: 1,
                line: 1,
                column: 2,
            },
        }
    }

    #[test]
    fn test_capability_flags() {
        assert!(AstBuilder::new().creates_ast());
        assert!(AstBuilder::new().can_use_function_cache());
        assert!(!SyntaxChecker::new().creates_ast());
        assert!(SyntaxChecker::new().can_use_function_cache());
        assert!(!SyntaxChecker::without_function_cache().can_use_function_cache());
    }

    #[test]
    fn test_ast_builder_constructs_nodes() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut b = AstBuilder::new();
        let left = b.create_ident(span(), x);
        let right = b.create_number(span(), 2.0);
        let sum = b.create_binary(span(), BinaryOp::Add, left, right);
        match sum {
            ast::Expr::Binary(bin) => {
                assert_eq!(bin.op, BinaryOp::Add);
                assert!(matches!(bin.left, ast::Expr::Ident(id) if id.name == x));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_syntax_checker_classifies() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut b = SyntaxChecker::new();
        let ident = b.create_ident(span(), x);
        assert_eq!(b.is_identifier(&ident), Some(x));
        assert!(b.is_location(&ident));
        let obj = b.create_object(span(), vec![]);
        assert!(b.is_object_or_array_literal(&obj));
        assert!(!b.is_location(&obj));
        let member = b.create_dot_access(span(), ident, span(), x);
        assert!(b.is_location(&member));
        let s = b.create_string(span(), x);
        assert!(b.is_string_literal(&s));
    }

    #[test]
    fn test_builders_agree_on_classification() {
        let arena = Arena::new();
        let mut interner = Interner::new(&arena);
        let x = interner.intern("x");
        let mut full = AstBuilder::new();
        let mut syn = SyntaxChecker::new();
        let fe = full.create_ident(span(), x);
        let se = syn.create_ident(span(), x);
        assert_eq!(full.is_location(&fe), syn.is_location(&se));
        assert_eq!(full.is_identifier(&fe), syn.is_identifier(&se));
        let fa = full.create_array(span(), vec![]);
        let sa = syn.create_array(span(), vec![]);
        assert_eq!(
            full.is_object_or_array_literal(&fa),
            syn.is_object_or_array_literal(&sa)
        );
    }

    #[test]
    fn test_function_info_assembly() {
        let mut b = AstBuilder::new();
        let params = b.create_param_list();
        let body = b.create_source_elements();
        let expr = b.create_function_expr(FunctionInfo {
            name: None,
            kind: FunctionKind::Normal,
            params,
            param_count: 0,
            body: FunctionBody::Block(body),
            span: span(),
            body_span: span(),
            strict: false,
        });
        match expr {
            ast::Expr::Fn(f) => {
                assert_eq!(f.kind, FunctionKind::Normal);
                assert!(matches!(f.body, ast::FnBody::Block(ref b) if b.is_empty()));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }
}
