//! Tree builders
//!
//! Helpers for assembling resolved trees without a parser. Class builders
//! fill in the signatures the resolver would have attached: every field
//! variable and method gets a signature whose owner is the enclosing class's
//! fully qualified name, unless the member was explicitly marked unresolved.
//!
//! ```rust
//! use staticize_tree::build::*;
//! use staticize_tree::{FieldSignature, ModifierKind::*};
//!
//! let my_string = FieldSignature::new("Utilities", "myString", "String");
//! let class = ClassBuilder::new("Utilities")
//!     .field(FieldBuilder::new("String", "myString").modifiers(&[Private]))
//!     .method(
//!         MethodBuilder::new("String", "getMyString")
//!             .modifiers(&[Private])
//!             .body(vec![ret(field_ref("myString", my_string))]),
//!     )
//!     .build();
//! assert_eq!(class.members.len(), 2);
//! ```

use crate::ast::*;
use crate::modifier::{layout, ModifierKind};
use crate::signature::{FieldSignature, MethodSignature};
use crate::span::Span;

// ============================================================================
// Declarations
// ============================================================================

/// Builds a [`CompilationUnit`].
#[derive(Debug, Default)]
pub struct UnitBuilder {
    unit: CompilationUnit,
}

impl UnitBuilder {
    /// Empty unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.unit.source_path = Some(path.into());
        self
    }

    /// Set the package declaration.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.unit.package = Some(package.into());
        self
    }

    /// Add an import.
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.unit.imports.push(import.into());
        self
    }

    /// Add a top-level class.
    pub fn class(mut self, class: ClassBuilder) -> Self {
        self.unit.classes.push(class.build());
        self
    }

    /// Finish the unit.
    pub fn build(self) -> CompilationUnit {
        self.unit
    }
}

#[derive(Debug)]
enum PendingMember {
    Field(FieldBuilder),
    Method(MethodBuilder),
    Constructor(ConstructorBuilder),
    Class(ClassBuilder),
    Ready(ClassMember),
}

/// Builds a [`ClassDecl`] and resolves its members' signatures.
#[derive(Debug)]
pub struct ClassBuilder {
    modifiers: Vec<ModifierKind>,
    kind: ClassKind,
    name: String,
    ty: Option<String>,
    extends: Option<TypeRef>,
    implements: Vec<TypeRef>,
    members: Vec<PendingMember>,
}

impl ClassBuilder {
    /// A class whose fully qualified name is its simple name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            kind: ClassKind::Class,
            name: name.into(),
            ty: None,
            extends: None,
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    /// An interface.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name).kind(ClassKind::Interface)
    }

    /// Set the declaration kind.
    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the fully qualified name.
    pub fn qualified(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the modifiers.
    pub fn modifiers(mut self, modifiers: &[ModifierKind]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Set the superclass.
    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(TypeRef::new(ty));
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, ty: impl Into<String>) -> Self {
        self.implements.push(TypeRef::new(ty));
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.members.push(PendingMember::Field(field));
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.members.push(PendingMember::Method(method));
        self
    }

    /// Add a constructor.
    pub fn constructor(mut self, constructor: ConstructorBuilder) -> Self {
        self.members.push(PendingMember::Constructor(constructor));
        self
    }

    /// Add a nested member class. Unless qualified explicitly it is named
    /// `Outer.Inner`.
    pub fn nested(mut self, class: ClassBuilder) -> Self {
        self.members.push(PendingMember::Class(class));
        self
    }

    /// Add an instance or static initializer block.
    pub fn initializer(mut self, is_static: bool, statements: Vec<Statement>) -> Self {
        self.members
            .push(PendingMember::Ready(ClassMember::Initializer(InitializerBlock {
                is_static,
                body: Block::new(statements),
                span: Span::default(),
            })));
        self
    }

    /// Add an already built member as is.
    pub fn member(mut self, member: ClassMember) -> Self {
        self.members.push(PendingMember::Ready(member));
        self
    }

    /// Finish the class.
    pub fn build(self) -> ClassDecl {
        let ty = self.ty.unwrap_or_else(|| self.name.clone());
        let members = self
            .members
            .into_iter()
            .map(|member| match member {
                PendingMember::Field(field) => ClassMember::Field(field.build_in(&ty)),
                PendingMember::Method(method) => ClassMember::Method(method.build_in(&ty)),
                PendingMember::Constructor(ctor) => ClassMember::Constructor(ctor.build_in(&ty)),
                PendingMember::Class(mut class) => {
                    if class.ty.is_none() {
                        class.ty = Some(format!("{}.{}", ty, class.name));
                    }
                    ClassMember::Class(class.build())
                }
                PendingMember::Ready(member) => member,
            })
            .collect();

        ClassDecl {
            modifiers: layout(&self.modifiers),
            kind: self.kind,
            name: self.name,
            ty,
            extends: self.extends,
            implements: self.implements,
            members,
            span: Span::default(),
        }
    }
}

/// Builds a [`FieldDecl`].
#[derive(Debug)]
pub struct FieldBuilder {
    modifiers: Vec<ModifierKind>,
    ty: String,
    variables: Vec<(String, Option<Expression>, bool)>,
}

impl FieldBuilder {
    /// `ty name;`
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty: ty.into(),
            variables: vec![(name.into(), None, true)],
        }
    }

    /// Set the modifiers.
    pub fn modifiers(mut self, modifiers: &[ModifierKind]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Initialize the most recently added variable.
    pub fn init(mut self, value: Expression) -> Self {
        if let Some(last) = self.variables.last_mut() {
            last.1 = Some(value);
        }
        self
    }

    /// Co-declare another variable: `ty a, b;`
    pub fn and(mut self, name: impl Into<String>) -> Self {
        self.variables.push((name.into(), None, true));
        self
    }

    /// Leave the most recently added variable without a resolved signature.
    pub fn unresolved(mut self) -> Self {
        if let Some(last) = self.variables.last_mut() {
            last.2 = false;
        }
        self
    }

    /// Finish the field, resolving variables against `owner`.
    pub fn build_in(self, owner: &str) -> FieldDecl {
        let ty = self.ty;
        let variables = self
            .variables
            .into_iter()
            .map(|(name, initializer, resolved)| NamedVariable {
                signature: resolved.then(|| FieldSignature::new(owner, name.clone(), ty.clone())),
                name,
                initializer,
                span: Span::default(),
            })
            .collect();

        FieldDecl {
            modifiers: layout(&self.modifiers),
            ty: TypeRef::new(ty),
            variables,
            span: Span::default(),
        }
    }
}

/// Builds a [`MethodDecl`].
#[derive(Debug)]
pub struct MethodBuilder {
    modifiers: Vec<ModifierKind>,
    return_type: String,
    name: String,
    params: Vec<Parameter>,
    body: Option<Vec<Statement>>,
    resolved: bool,
}

impl MethodBuilder {
    /// `return_type name() {}`
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
            body: Some(Vec::new()),
            resolved: true,
        }
    }

    /// Set the modifiers, in source order.
    pub fn modifiers(mut self, modifiers: &[ModifierKind]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Add a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(param(ty, name));
        self
    }

    /// Set the body statements.
    pub fn body(mut self, statements: Vec<Statement>) -> Self {
        self.body = Some(statements);
        self
    }

    /// Declare without a body (abstract or interface method).
    pub fn no_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Leave the method without a resolved signature.
    pub fn unresolved(mut self) -> Self {
        self.resolved = false;
        self
    }

    /// Signature this method will receive inside `owner`.
    pub fn signature_in(&self, owner: &str) -> MethodSignature {
        MethodSignature::new(
            owner,
            self.name.clone(),
            self.params.iter().map(|p| p.ty.name.clone()),
            self.return_type.clone(),
        )
    }

    /// Finish the method, resolving it against `owner`.
    pub fn build_in(self, owner: &str) -> MethodDecl {
        let signature = self.resolved.then(|| self.signature_in(owner));
        MethodDecl {
            modifiers: layout(&self.modifiers),
            type_params: Vec::new(),
            return_type: TypeRef::new(self.return_type),
            name: self.name,
            params: self.params,
            throws: Vec::new(),
            body: self.body.map(Block::new),
            signature,
            span: Span::default(),
        }
    }
}

/// Builds a [`ConstructorDecl`].
#[derive(Debug)]
pub struct ConstructorBuilder {
    modifiers: Vec<ModifierKind>,
    params: Vec<Parameter>,
    body: Vec<Statement>,
}

impl ConstructorBuilder {
    /// `Name() {}`
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the modifiers.
    pub fn modifiers(mut self, modifiers: &[ModifierKind]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    /// Add a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(param(ty, name));
        self
    }

    /// Set the body statements.
    pub fn body(mut self, statements: Vec<Statement>) -> Self {
        self.body = statements;
        self
    }

    /// Finish the constructor for the class named by `owner`.
    pub fn build_in(self, owner: &str) -> ConstructorDecl {
        let name = owner.rsplit(['.', '$']).next().unwrap_or(owner).to_string();
        ConstructorDecl {
            modifiers: layout(&self.modifiers),
            name,
            params: self.params,
            throws: Vec::new(),
            body: Block::new(self.body),
            span: Span::default(),
        }
    }
}

impl Default for ConstructorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formal parameter `ty name`.
pub fn param(ty: impl Into<String>, name: impl Into<String>) -> Parameter {
    Parameter {
        modifiers: Vec::new(),
        ty: TypeRef::new(ty),
        name: name.into(),
        varargs: false,
    }
}

// ============================================================================
// Statements
// ============================================================================

/// `return value;`
pub fn ret(value: Expression) -> Statement {
    Statement::Return(Some(value))
}

/// `expr;`
pub fn expr_stmt(expr: Expression) -> Statement {
    Statement::Expression(expr)
}

/// `ty name = init;`
pub fn local(ty: impl Into<String>, name: impl Into<String>, init: Expression) -> Statement {
    Statement::LocalVariable(LocalVariableDecl {
        modifiers: Vec::new(),
        ty: TypeRef::new(ty),
        variables: vec![LocalVariable {
            name: name.into(),
            initializer: Some(init),
        }],
    })
}

/// `{ statements }`
pub fn block(statements: Vec<Statement>) -> Statement {
    Statement::Block(Block::new(statements))
}

/// `if (condition) { then }`
pub fn if_then(condition: Expression, then: Vec<Statement>) -> Statement {
    Statement::If(IfStatement {
        condition,
        then_branch: Box::new(block(then)),
        else_branch: None,
    })
}

/// `while (condition) { body }`
pub fn while_loop(condition: Expression, body: Vec<Statement>) -> Statement {
    Statement::While(WhileStatement {
        condition,
        body: Box::new(block(body)),
    })
}

/// `for (T name : iterable) { body }`
pub fn for_each(
    ty: impl Into<String>,
    name: impl Into<String>,
    iterable: Expression,
    body: Vec<Statement>,
) -> Statement {
    Statement::ForEach(ForEachStatement {
        variable: param(ty, name),
        iterable,
        body: Box::new(block(body)),
    })
}

/// `try (resources) { body } finally { finally }`
pub fn try_with(resources: Vec<TryResource>, body: Vec<Statement>, finally: Option<Vec<Statement>>) -> Statement {
    Statement::Try(TryStatement {
        resources,
        body: Block::new(body),
        catches: Vec::new(),
        finally: finally.map(Block::new),
    })
}

/// `T name = init` as a try resource.
pub fn resource(ty: impl Into<String>, name: impl Into<String>, init: Expression) -> TryResource {
    TryResource::Variable {
        ty: TypeRef::new(ty),
        name: name.into(),
        initializer: init,
    }
}

/// `switch (selector) { cases }` statement.
pub fn switch_stmt(selector: Expression, cases: Vec<SwitchCase>) -> Statement {
    Statement::Switch(Switch {
        selector: Box::new(selector),
        cases,
    })
}

/// `case labels: body`; no labels means `default:`.
pub fn case(labels: Vec<Expression>, body: Vec<Statement>) -> SwitchCase {
    SwitchCase {
        labels,
        arrow: false,
        body,
    }
}

/// `case labels -> body`; no labels means `default ->`.
pub fn arrow_case(labels: Vec<Expression>, body: Statement) -> SwitchCase {
    SwitchCase {
        labels,
        arrow: true,
        body: vec![body],
    }
}

/// `label: body`
pub fn labeled(label: impl Into<String>, body: Statement) -> Statement {
    Statement::Labeled(LabeledStatement {
        label: label.into(),
        body: Box::new(body),
    })
}

/// `assert condition : message;`
pub fn assert_stmt(condition: Expression, message: Option<Expression>) -> Statement {
    Statement::Assert(AssertStatement { condition, message })
}

/// Local class declaration statement.
pub fn local_class(class: ClassBuilder) -> Statement {
    Statement::LocalClass(class.build())
}

// ============================================================================
// Expressions
// ============================================================================

/// Name with no field binding (local, parameter, type name).
pub fn ident(name: impl Into<String>) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

/// Name resolved to a field.
pub fn field_ref(name: impl Into<String>, field: FieldSignature) -> Expression {
    Expression::Identifier(Identifier::field(name, field))
}

/// `this`
pub fn this() -> Expression {
    Expression::This(ThisExpr {
        qualifier: None,
        span: Span::default(),
    })
}

/// `Outer.this`
pub fn qualified_this(qualifier: impl Into<String>) -> Expression {
    Expression::This(ThisExpr {
        qualifier: Some(qualifier.into()),
        span: Span::default(),
    })
}

/// `target.name`, with `name` resolved to `field`.
pub fn field_access(target: Expression, name: impl Into<String>, field: FieldSignature) -> Expression {
    Expression::FieldAccess(FieldAccess {
        target: Box::new(target),
        name: Identifier::field(name, field),
        span: Span::default(),
    })
}

/// `this.name`, with `name` resolved to `field`.
pub fn this_field(field: FieldSignature) -> Expression {
    let name = field.name.clone();
    field_access(this(), name, field)
}

/// Unresolved call `name(args)` or `select.name(args)`.
pub fn call(select: Option<Expression>, name: impl Into<String>, arguments: Vec<Expression>) -> Expression {
    Expression::MethodInvocation(MethodInvocation {
        select: select.map(Box::new),
        name: name.into(),
        arguments,
        method: None,
        span: Span::default(),
    })
}

/// Call resolved to `target`.
pub fn call_resolved(
    select: Option<Expression>,
    target: MethodSignature,
    is_static: bool,
    arguments: Vec<Expression>,
) -> Expression {
    Expression::MethodInvocation(MethodInvocation {
        select: select.map(Box::new),
        name: target.name.clone(),
        arguments,
        method: Some(MethodRef {
            signature: target,
            is_static,
        }),
        span: Span::default(),
    })
}

/// `target::name`
pub fn method_ref(target: Expression, name: impl Into<String>) -> Expression {
    Expression::MethodReference(MethodReference {
        target: Box::new(target),
        name: name.into(),
        span: Span::default(),
    })
}

/// String literal.
pub fn string(value: impl Into<String>) -> Expression {
    Expression::Literal(Literal::String(value.into()))
}

/// Integer literal.
pub fn int(value: i64) -> Expression {
    Expression::Literal(Literal::Int(value))
}

/// `long` literal.
pub fn long(value: i64) -> Expression {
    Expression::Literal(Literal::Long(value))
}

/// `double` literal.
pub fn double(value: f64) -> Expression {
    Expression::Literal(Literal::Double(value))
}

/// `left op right`
pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `target = value`
pub fn assign(target: Expression, value: Expression) -> Expression {
    Expression::Assignment(AssignmentExpr {
        operator: AssignmentOperator::Assign,
        target: Box::new(target),
        value: Box::new(value),
    })
}

/// `target++`
pub fn post_increment(target: Expression) -> Expression {
    Expression::Unary(UnaryExpr {
        operator: UnaryOperator::PostIncrement,
        operand: Box::new(target),
    })
}

/// `(params) -> expr` with implicitly typed parameters.
pub fn lambda(params: &[&str], body: Expression) -> Expression {
    Expression::Lambda(Lambda {
        params: params
            .iter()
            .map(|name| LambdaParam {
                name: name.to_string(),
                ty: None,
            })
            .collect(),
        body: LambdaBody::Expression(Box::new(body)),
        span: Span::default(),
    })
}

/// `(params) -> { statements }` with implicitly typed parameters.
pub fn lambda_block(params: &[&str], statements: Vec<Statement>) -> Expression {
    Expression::Lambda(Lambda {
        params: params
            .iter()
            .map(|name| LambdaParam {
                name: name.to_string(),
                ty: None,
            })
            .collect(),
        body: LambdaBody::Block(Block::new(statements)),
        span: Span::default(),
    })
}

/// `new T(args)`
pub fn new_object(class: impl Into<String>, arguments: Vec<Expression>) -> Expression {
    Expression::NewClass(NewClass {
        class: TypeRef::new(class),
        arguments,
        body: None,
        span: Span::default(),
    })
}

/// `new T() { methods }`; methods are resolved against the anonymous type `ty`.
pub fn new_anonymous(class: impl Into<String>, ty: impl Into<String>, methods: Vec<MethodBuilder>) -> Expression {
    let ty = ty.into();
    let members = methods
        .into_iter()
        .map(|m| ClassMember::Method(m.build_in(&ty)))
        .collect();
    Expression::NewClass(NewClass {
        class: TypeRef::new(class),
        arguments: Vec::new(),
        body: Some(AnonymousClassBody {
            ty: Some(ty),
            members,
        }),
        span: Span::default(),
    })
}

/// `new T[dimensions]`
pub fn new_array(element: impl Into<String>, dimensions: Vec<Expression>) -> Expression {
    Expression::NewArray(NewArray {
        element: TypeRef::new(element),
        dimensions,
        extra_dimensions: 0,
        initializer: None,
    })
}

/// `new T[] {elements}`
pub fn array_of(element: impl Into<String>, elements: Vec<Expression>) -> Expression {
    Expression::NewArray(NewArray {
        element: TypeRef::new(element),
        dimensions: Vec::new(),
        extra_dimensions: 1,
        initializer: Some(elements),
    })
}

/// `expr instanceof T`
pub fn instance_of(expression: Expression, ty: impl Into<String>) -> Expression {
    Expression::InstanceOf(InstanceOfExpr {
        expression: Box::new(expression),
        ty: TypeRef::new(ty),
        binding: None,
    })
}

/// `switch (selector) { cases }` in expression position.
pub fn switch_expr(selector: Expression, cases: Vec<SwitchCase>) -> Expression {
    Expression::Switch(Switch {
        selector: Box::new(selector),
        cases,
    })
}
