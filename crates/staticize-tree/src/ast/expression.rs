//! Expression nodes

#![allow(missing_docs)]

use super::{Block, ClassMember, Switch, TypeRef};
use crate::signature::{FieldSignature, MethodSignature};
use crate::span::Span;

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),

    /// Simple name: local, parameter, field or type name
    Identifier(Identifier),

    /// `this` or `Outer.this`
    This(ThisExpr),

    /// `super` as a receiver (`super.x`, `super.f()`)
    Super,

    /// `target.name`
    FieldAccess(FieldAccess),

    /// `f(args)` / `target.f(args)`
    MethodInvocation(MethodInvocation),

    /// `target::name`, including `this::f`, `super::f` and `T::new`
    MethodReference(MethodReference),

    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),

    /// `condition ? then : otherwise`
    Conditional(ConditionalExpr),

    /// `new T(args)` with an optional anonymous class body
    NewClass(NewClass),

    /// `array[index]`
    ArrayAccess(ArrayAccess),

    /// `new T[n]` / `new T[] { ... }`
    NewArray(NewArray),

    /// `{ a, b }` as a variable initializer
    ArrayInitializer(Vec<Expression>),

    /// `(T) expr`
    Cast(CastExpr),

    /// `expr instanceof T` / `expr instanceof T name`
    InstanceOf(InstanceOfExpr),

    /// `switch (selector) { ... }` in expression position
    Switch(Switch),

    /// `(params) -> body`
    Lambda(Lambda),

    /// `(expr)`
    Parenthesized(Box<Expression>),
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Long(i64),
    Float(f64),
    Double(f64),
    String(String),
    Char(char),
    Boolean(bool),
    Null,
}

/// A name occurrence.
///
/// When the name refers to a field, the resolver attaches that field's
/// signature; otherwise (locals, parameters, type names, unresolved names)
/// `field` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub field: Option<FieldSignature>,
    pub span: Span,
}

impl Identifier {
    /// A name with no field binding.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: None,
            span: Span::default(),
        }
    }

    /// A name resolved to `field`.
    pub fn field(name: impl Into<String>, field: FieldSignature) -> Self {
        Self {
            name: name.into(),
            field: Some(field),
            span: Span::default(),
        }
    }
}

/// `this`, or `Outer.this` when `qualifier` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpr {
    pub qualifier: Option<String>,
    pub span: Span,
}

// ============================================================================
// Member access and calls
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccess {
    pub target: Box<Expression>,
    pub name: Identifier,
    pub span: Span,
}

impl FieldAccess {
    /// Whether the access goes through the current instance
    /// (`this.x`, `Outer.this.x`, `super.x`).
    pub fn is_receiver_access(&self) -> bool {
        matches!(*self.target, Expression::This(_) | Expression::Super)
    }
}

/// Resolved target of a method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRef {
    pub signature: MethodSignature,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodInvocation {
    /// Explicit receiver; `None` for an unqualified call.
    pub select: Option<Box<Expression>>,
    pub name: String,
    pub arguments: Vec<Expression>,
    /// `None` when the resolver could not bind the call.
    pub method: Option<MethodRef>,
    pub span: Span,
}

impl MethodInvocation {
    /// Whether the call is dispatched on the current instance: no receiver,
    /// or `this` / `super` as the receiver.
    pub fn has_implicit_receiver(&self) -> bool {
        match &self.select {
            None => true,
            Some(select) => matches!(**select, Expression::This(_) | Expression::Super),
        }
    }
}

/// `target::name`. The target is an expression (`this`, `super`, a local)
/// or a type name given as an unbound [`Identifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodReference {
    pub target: Box<Expression>,
    pub name: String,
    pub span: Span,
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    /// Source token.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
}

impl AssignmentOperator {
    /// Source token.
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub operator: AssignmentOperator,
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub condition: Box<Expression>,
    pub then_expr: Box<Expression>,
    pub else_expr: Box<Expression>,
}

// ============================================================================
// Object creation, casts, type tests, lambdas
// ============================================================================

/// `new T(args)` / `new T(args) { members }`
#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub class: TypeRef,
    pub arguments: Vec<Expression>,
    pub body: Option<AnonymousClassBody>,
    pub span: Span,
}

/// Body of an anonymous class.
#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousClassBody {
    /// Name the resolver gave the anonymous type (`Outer$1`), if any.
    pub ty: Option<String>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub array: Box<Expression>,
    pub index: Box<Expression>,
}

/// `new T[d0][d1][]` or `new T[][] { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArray {
    /// Base element type, without brackets
    pub element: TypeRef,
    /// Sized dimensions, outermost first
    pub dimensions: Vec<Expression>,
    /// Trailing `[]` pairs after the sized ones
    pub extra_dimensions: usize,
    pub initializer: Option<Vec<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceOfExpr {
    pub expression: Box<Expression>,
    pub ty: TypeRef,
    /// Pattern variable, if any
    pub binding: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub ty: TypeRef,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaParam {
    pub name: String,
    /// `None` for implicitly typed parameters
    pub ty: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<LambdaParam>,
    pub body: LambdaBody,
    pub span: Span,
}
