//! Read-only tree visitor
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, which
//! visits every child. Override the nodes you care about and call the walk
//! function to keep descending.
//!
//! Type declarations reach the visitor through three different hooks so that
//! analyses can tell them apart:
//! - [`Visitor::visit_class_decl`]: top-level and nested member classes
//! - [`Visitor::visit_local_class`]: classes declared inside a body
//! - [`Visitor::visit_anonymous_body`]: `new T() { ... }` bodies
//!
//! # Example
//!
//! ```rust
//! use staticize_tree::ast::*;
//!
//! struct CountFieldReads {
//!     count: usize,
//! }
//!
//! impl Visitor for CountFieldReads {
//!     fn visit_identifier(&mut self, id: &Identifier) {
//!         if id.field.is_some() {
//!             self.count += 1;
//!         }
//!     }
//! }
//! ```

#![allow(missing_docs)]

use super::*;

/// Tree visitor trait
pub trait Visitor: Sized {
    // Declarations
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_local_class(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_anonymous_body(&mut self, body: &AnonymousClassBody) {
        walk_anonymous_body(self, body);
    }

    fn visit_member(&mut self, member: &ClassMember) {
        walk_member(self, member);
    }

    fn visit_field_decl(&mut self, decl: &FieldDecl) {
        walk_field_decl(self, decl);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        walk_method_decl(self, decl);
    }

    fn visit_constructor_decl(&mut self, decl: &ConstructorDecl) {
        walk_constructor_decl(self, decl);
    }

    fn visit_initializer(&mut self, init: &InitializerBlock) {
        self.visit_block(&init.body);
    }

    // Statements
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    // Expressions
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_identifier(&mut self, _id: &Identifier) {
        // Leaf node - no traversal needed
    }

    fn visit_this(&mut self, _this: &ThisExpr) {}

    fn visit_super(&mut self) {}

    fn visit_field_access(&mut self, access: &FieldAccess) {
        walk_field_access(self, access);
    }

    fn visit_method_invocation(&mut self, call: &MethodInvocation) {
        walk_method_invocation(self, call);
    }

    fn visit_method_reference(&mut self, reference: &MethodReference) {
        walk_method_reference(self, reference);
    }

    fn visit_new_class(&mut self, new_class: &NewClass) {
        walk_new_class(self, new_class);
    }

    fn visit_lambda(&mut self, lambda: &Lambda) {
        walk_lambda(self, lambda);
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_unit<V: Visitor>(visitor: &mut V, unit: &CompilationUnit) {
    for class in &unit.classes {
        visitor.visit_class_decl(class);
    }
}

pub fn walk_class_decl<V: Visitor>(visitor: &mut V, decl: &ClassDecl) {
    for member in &decl.members {
        visitor.visit_member(member);
    }
}

pub fn walk_anonymous_body<V: Visitor>(visitor: &mut V, body: &AnonymousClassBody) {
    for member in &body.members {
        visitor.visit_member(member);
    }
}

pub fn walk_member<V: Visitor>(visitor: &mut V, member: &ClassMember) {
    match member {
        ClassMember::Field(decl) => visitor.visit_field_decl(decl),
        ClassMember::Method(decl) => visitor.visit_method_decl(decl),
        ClassMember::Constructor(decl) => visitor.visit_constructor_decl(decl),
        ClassMember::Initializer(init) => visitor.visit_initializer(init),
        ClassMember::Class(decl) => visitor.visit_class_decl(decl),
    }
}

pub fn walk_field_decl<V: Visitor>(visitor: &mut V, decl: &FieldDecl) {
    for variable in &decl.variables {
        if let Some(init) = &variable.initializer {
            visitor.visit_expression(init);
        }
    }
}

pub fn walk_method_decl<V: Visitor>(visitor: &mut V, decl: &MethodDecl) {
    // Body is None for abstract methods
    if let Some(body) = &decl.body {
        visitor.visit_block(body);
    }
}

pub fn walk_constructor_decl<V: Visitor>(visitor: &mut V, decl: &ConstructorDecl) {
    visitor.visit_block(&decl.body);
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    for stmt in &block.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Block(block) => visitor.visit_block(block),
        Statement::LocalVariable(decl) => {
            for variable in &decl.variables {
                if let Some(init) = &variable.initializer {
                    visitor.visit_expression(init);
                }
            }
        }
        Statement::Expression(expr) | Statement::Throw(expr) => visitor.visit_expression(expr),
        Statement::Return(value) => {
            if let Some(value) = value {
                visitor.visit_expression(value);
            }
        }
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.body);
        }
        Statement::DoWhile(stmt) => {
            visitor.visit_statement(&stmt.body);
            visitor.visit_expression(&stmt.condition);
        }
        Statement::For(stmt) => {
            for init in &stmt.init {
                visitor.visit_statement(init);
            }
            if let Some(condition) = &stmt.condition {
                visitor.visit_expression(condition);
            }
            for update in &stmt.update {
                visitor.visit_expression(update);
            }
            visitor.visit_statement(&stmt.body);
        }
        Statement::ForEach(stmt) => {
            visitor.visit_expression(&stmt.iterable);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Try(stmt) => {
            for resource in &stmt.resources {
                match resource {
                    TryResource::Variable { initializer, .. } => visitor.visit_expression(initializer),
                    TryResource::Expression(expr) => visitor.visit_expression(expr),
                }
            }
            visitor.visit_block(&stmt.body);
            for catch in &stmt.catches {
                visitor.visit_block(&catch.body);
            }
            if let Some(finally) = &stmt.finally {
                visitor.visit_block(finally);
            }
        }
        Statement::Synchronized(stmt) => {
            visitor.visit_expression(&stmt.lock);
            visitor.visit_block(&stmt.body);
        }
        Statement::Switch(switch) => walk_switch(visitor, switch),
        Statement::Yield(value) => visitor.visit_expression(value),
        Statement::Labeled(stmt) => visitor.visit_statement(&stmt.body),
        Statement::Assert(stmt) => {
            visitor.visit_expression(&stmt.condition);
            if let Some(message) = &stmt.message {
                visitor.visit_expression(message);
            }
        }
        Statement::LocalClass(decl) => visitor.visit_local_class(decl),
        Statement::Break(_) | Statement::Continue(_) | Statement::Empty => {}
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Literal(_) => {}
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::This(this) => visitor.visit_this(this),
        Expression::Super => visitor.visit_super(),
        Expression::FieldAccess(access) => visitor.visit_field_access(access),
        Expression::MethodInvocation(call) => visitor.visit_method_invocation(call),
        Expression::MethodReference(reference) => visitor.visit_method_reference(reference),
        Expression::Unary(unary) => visitor.visit_expression(&unary.operand),
        Expression::Binary(binary) => {
            visitor.visit_expression(&binary.left);
            visitor.visit_expression(&binary.right);
        }
        Expression::Assignment(assign) => {
            visitor.visit_expression(&assign.target);
            visitor.visit_expression(&assign.value);
        }
        Expression::Conditional(cond) => {
            visitor.visit_expression(&cond.condition);
            visitor.visit_expression(&cond.then_expr);
            visitor.visit_expression(&cond.else_expr);
        }
        Expression::NewClass(new_class) => visitor.visit_new_class(new_class),
        Expression::ArrayAccess(access) => {
            visitor.visit_expression(&access.array);
            visitor.visit_expression(&access.index);
        }
        Expression::NewArray(array) => {
            for dimension in &array.dimensions {
                visitor.visit_expression(dimension);
            }
            if let Some(elements) = &array.initializer {
                for element in elements {
                    visitor.visit_expression(element);
                }
            }
        }
        Expression::ArrayInitializer(elements) => {
            for element in elements {
                visitor.visit_expression(element);
            }
        }
        Expression::Cast(cast) => visitor.visit_expression(&cast.expression),
        Expression::InstanceOf(test) => visitor.visit_expression(&test.expression),
        Expression::Switch(switch) => walk_switch(visitor, switch),
        Expression::Lambda(lambda) => visitor.visit_lambda(lambda),
        Expression::Parenthesized(inner) => visitor.visit_expression(inner),
    }
}

pub fn walk_field_access<V: Visitor>(visitor: &mut V, access: &FieldAccess) {
    visitor.visit_expression(&access.target);
    visitor.visit_identifier(&access.name);
}

pub fn walk_method_invocation<V: Visitor>(visitor: &mut V, call: &MethodInvocation) {
    if let Some(select) = &call.select {
        visitor.visit_expression(select);
    }
    for arg in &call.arguments {
        visitor.visit_expression(arg);
    }
}

pub fn walk_method_reference<V: Visitor>(visitor: &mut V, reference: &MethodReference) {
    visitor.visit_expression(&reference.target);
}

pub fn walk_switch<V: Visitor>(visitor: &mut V, switch: &Switch) {
    visitor.visit_expression(&switch.selector);
    for case in &switch.cases {
        for label in &case.labels {
            visitor.visit_expression(label);
        }
        for stmt in &case.body {
            visitor.visit_statement(stmt);
        }
    }
}

pub fn walk_new_class<V: Visitor>(visitor: &mut V, new_class: &NewClass) {
    for arg in &new_class.arguments {
        visitor.visit_expression(arg);
    }
    if let Some(body) = &new_class.body {
        visitor.visit_anonymous_body(body);
    }
}

pub fn walk_lambda<V: Visitor>(visitor: &mut V, lambda: &Lambda) {
    match &lambda.body {
        LambdaBody::Expression(expr) => visitor.visit_expression(expr),
        LambdaBody::Block(block) => visitor.visit_block(block),
    }
}
