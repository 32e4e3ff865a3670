//! Statement nodes

#![allow(missing_docs)]

use super::{ClassDecl, Expression, Parameter, TypeRef};
use crate::modifier::Modifier;
use crate::span::Span;

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    /// Create a block from statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            span: Span::default(),
        }
    }
}

/// Statement inside a method, constructor, initializer or lambda body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Nested block
    Block(Block),

    /// Local variable declaration: `int a = 1, b;`
    LocalVariable(LocalVariableDecl),

    /// Expression statement (call, assignment, increment)
    Expression(Expression),

    /// `return;` / `return value;`
    Return(Option<Expression>),

    If(IfStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    ForEach(ForEachStatement),

    /// `throw value;`
    Throw(Expression),

    Try(TryStatement),
    Synchronized(SynchronizedStatement),

    /// `switch (selector) { ... }` as a statement
    Switch(Switch),

    /// `yield value;` inside a switch expression
    Yield(Expression),

    /// `label: body`
    Labeled(LabeledStatement),

    /// `assert condition;` / `assert condition : message;`
    Assert(AssertStatement),

    /// Local class declared inside a body
    LocalClass(ClassDecl),

    /// `break;` / `break label;`
    Break(Option<String>),

    /// `continue;` / `continue label;`
    Continue(Option<String>),

    /// `;`
    Empty,
}

/// `final int a = 1, b;`
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariableDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub variables: Vec<LocalVariable>,
}

/// One variable of a [`LocalVariableDecl`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariable {
    pub name: String,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
}

/// `for (init; condition; update) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Vec<Statement>,
    pub condition: Option<Expression>,
    pub update: Vec<Expression>,
    pub body: Box<Statement>,
}

/// `for (T name : iterable) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub variable: Parameter,
    pub iterable: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    /// `try (...)` resources, closed in reverse order
    pub resources: Vec<TryResource>,
    pub body: Block,
    pub catches: Vec<CatchClause>,
    pub finally: Option<Block>,
}

/// One resource of a try-with-resources statement.
#[derive(Debug, Clone, PartialEq)]
pub enum TryResource {
    /// `T name = init`
    Variable {
        ty: TypeRef,
        name: String,
        initializer: Expression,
    },
    /// An existing effectively final variable or field: `r`, `this.r`
    Expression(Expression),
}

/// `catch (T name) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Parameter,
    pub body: Block,
}

/// `synchronized (lock) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct SynchronizedStatement {
    pub lock: Expression,
    pub body: Block,
}

/// `switch (selector) { cases }`, shared by the statement and expression
/// forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub selector: Box<Expression>,
    pub cases: Vec<SwitchCase>,
}

/// One `case` group of a [`Switch`].
///
/// Colon cases (`case 1:`) hold any number of statements and may fall
/// through. Arrow cases (`case 1 ->`) hold exactly one statement: an
/// expression statement, a block or a `throw`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// Case labels; empty for `default`
    pub labels: Vec<Expression>,
    pub arrow: bool,
    pub body: Vec<Statement>,
}

/// `label: body`
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub label: String,
    pub body: Box<Statement>,
}

/// `assert condition : message;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssertStatement {
    pub condition: Expression,
    pub message: Option<Expression>,
}
