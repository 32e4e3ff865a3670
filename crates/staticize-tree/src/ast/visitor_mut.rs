//! Visitor over an owned tree, for passes that replace nodes in place.
//!
//! Unlike [`Visitor`](super::Visitor) this trait does not distinguish member,
//! local and anonymous classes: every class body reaches
//! [`VisitorMut::visit_member_mut`], so a pass that swaps out
//! [`MethodDecl`]s sees every method in the unit.

#![allow(missing_docs)]

use super::*;

/// Mutable tree visitor trait
pub trait VisitorMut: Sized {
    fn visit_unit_mut(&mut self, unit: &mut CompilationUnit) {
        walk_unit_mut(self, unit);
    }

    fn visit_class_decl_mut(&mut self, decl: &mut ClassDecl) {
        walk_class_decl_mut(self, decl);
    }

    fn visit_member_mut(&mut self, member: &mut ClassMember) {
        walk_member_mut(self, member);
    }

    fn visit_method_decl_mut(&mut self, decl: &mut MethodDecl) {
        walk_method_decl_mut(self, decl);
    }

    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }

    fn visit_statement_mut(&mut self, stmt: &mut Statement) {
        walk_statement_mut(self, stmt);
    }

    fn visit_expression_mut(&mut self, expr: &mut Expression) {
        walk_expression_mut(self, expr);
    }
}

pub fn walk_unit_mut<V: VisitorMut>(visitor: &mut V, unit: &mut CompilationUnit) {
    for class in &mut unit.classes {
        visitor.visit_class_decl_mut(class);
    }
}

pub fn walk_class_decl_mut<V: VisitorMut>(visitor: &mut V, decl: &mut ClassDecl) {
    for member in &mut decl.members {
        visitor.visit_member_mut(member);
    }
}

pub fn walk_member_mut<V: VisitorMut>(visitor: &mut V, member: &mut ClassMember) {
    match member {
        ClassMember::Field(decl) => {
            for variable in &mut decl.variables {
                if let Some(init) = &mut variable.initializer {
                    visitor.visit_expression_mut(init);
                }
            }
        }
        ClassMember::Method(decl) => visitor.visit_method_decl_mut(decl),
        ClassMember::Constructor(decl) => visitor.visit_block_mut(&mut decl.body),
        ClassMember::Initializer(init) => visitor.visit_block_mut(&mut init.body),
        ClassMember::Class(decl) => visitor.visit_class_decl_mut(decl),
    }
}

pub fn walk_method_decl_mut<V: VisitorMut>(visitor: &mut V, decl: &mut MethodDecl) {
    if let Some(body) = &mut decl.body {
        visitor.visit_block_mut(body);
    }
}

pub fn walk_block_mut<V: VisitorMut>(visitor: &mut V, block: &mut Block) {
    for stmt in &mut block.statements {
        visitor.visit_statement_mut(stmt);
    }
}

pub fn walk_statement_mut<V: VisitorMut>(visitor: &mut V, stmt: &mut Statement) {
    match stmt {
        Statement::Block(block) => visitor.visit_block_mut(block),
        Statement::LocalVariable(decl) => {
            for variable in &mut decl.variables {
                if let Some(init) = &mut variable.initializer {
                    visitor.visit_expression_mut(init);
                }
            }
        }
        Statement::Expression(expr) | Statement::Throw(expr) => visitor.visit_expression_mut(expr),
        Statement::Return(value) => {
            if let Some(value) = value {
                visitor.visit_expression_mut(value);
            }
        }
        Statement::If(stmt) => {
            visitor.visit_expression_mut(&mut stmt.condition);
            visitor.visit_statement_mut(&mut stmt.then_branch);
            if let Some(else_branch) = &mut stmt.else_branch {
                visitor.visit_statement_mut(else_branch);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression_mut(&mut stmt.condition);
            visitor.visit_statement_mut(&mut stmt.body);
        }
        Statement::DoWhile(stmt) => {
            visitor.visit_statement_mut(&mut stmt.body);
            visitor.visit_expression_mut(&mut stmt.condition);
        }
        Statement::For(stmt) => {
            for init in &mut stmt.init {
                visitor.visit_statement_mut(init);
            }
            if let Some(condition) = &mut stmt.condition {
                visitor.visit_expression_mut(condition);
            }
            for update in &mut stmt.update {
                visitor.visit_expression_mut(update);
            }
            visitor.visit_statement_mut(&mut stmt.body);
        }
        Statement::ForEach(stmt) => {
            visitor.visit_expression_mut(&mut stmt.iterable);
            visitor.visit_statement_mut(&mut stmt.body);
        }
        Statement::Try(stmt) => {
            for resource in &mut stmt.resources {
                match resource {
                    TryResource::Variable { initializer, .. } => visitor.visit_expression_mut(initializer),
                    TryResource::Expression(expr) => visitor.visit_expression_mut(expr),
                }
            }
            visitor.visit_block_mut(&mut stmt.body);
            for catch in &mut stmt.catches {
                visitor.visit_block_mut(&mut catch.body);
            }
            if let Some(finally) = &mut stmt.finally {
                visitor.visit_block_mut(finally);
            }
        }
        Statement::Synchronized(stmt) => {
            visitor.visit_expression_mut(&mut stmt.lock);
            visitor.visit_block_mut(&mut stmt.body);
        }
        Statement::Switch(switch) => walk_switch_mut(visitor, switch),
        Statement::Yield(value) => visitor.visit_expression_mut(value),
        Statement::Labeled(stmt) => visitor.visit_statement_mut(&mut stmt.body),
        Statement::Assert(stmt) => {
            visitor.visit_expression_mut(&mut stmt.condition);
            if let Some(message) = &mut stmt.message {
                visitor.visit_expression_mut(message);
            }
        }
        Statement::LocalClass(decl) => visitor.visit_class_decl_mut(decl),
        Statement::Break(_) | Statement::Continue(_) | Statement::Empty => {}
    }
}

pub fn walk_expression_mut<V: VisitorMut>(visitor: &mut V, expr: &mut Expression) {
    match expr {
        Expression::Literal(_) | Expression::Identifier(_) | Expression::This(_) | Expression::Super => {}
        Expression::FieldAccess(access) => visitor.visit_expression_mut(&mut access.target),
        Expression::MethodInvocation(call) => {
            if let Some(select) = &mut call.select {
                visitor.visit_expression_mut(select);
            }
            for arg in &mut call.arguments {
                visitor.visit_expression_mut(arg);
            }
        }
        Expression::Unary(unary) => visitor.visit_expression_mut(&mut unary.operand),
        Expression::Binary(binary) => {
            visitor.visit_expression_mut(&mut binary.left);
            visitor.visit_expression_mut(&mut binary.right);
        }
        Expression::Assignment(assign) => {
            visitor.visit_expression_mut(&mut assign.target);
            visitor.visit_expression_mut(&mut assign.value);
        }
        Expression::Conditional(cond) => {
            visitor.visit_expression_mut(&mut cond.condition);
            visitor.visit_expression_mut(&mut cond.then_expr);
            visitor.visit_expression_mut(&mut cond.else_expr);
        }
        Expression::NewClass(new_class) => {
            for arg in &mut new_class.arguments {
                visitor.visit_expression_mut(arg);
            }
            if let Some(body) = &mut new_class.body {
                for member in &mut body.members {
                    visitor.visit_member_mut(member);
                }
            }
        }
        Expression::ArrayAccess(access) => {
            visitor.visit_expression_mut(&mut access.array);
            visitor.visit_expression_mut(&mut access.index);
        }
        Expression::MethodReference(reference) => visitor.visit_expression_mut(&mut reference.target),
        Expression::NewArray(array) => {
            for dimension in &mut array.dimensions {
                visitor.visit_expression_mut(dimension);
            }
            if let Some(elements) = &mut array.initializer {
                for element in elements {
                    visitor.visit_expression_mut(element);
                }
            }
        }
        Expression::ArrayInitializer(elements) => {
            for element in elements {
                visitor.visit_expression_mut(element);
            }
        }
        Expression::Cast(cast) => visitor.visit_expression_mut(&mut cast.expression),
        Expression::InstanceOf(test) => visitor.visit_expression_mut(&mut test.expression),
        Expression::Switch(switch) => walk_switch_mut(visitor, switch),
        Expression::Lambda(lambda) => match &mut lambda.body {
            LambdaBody::Expression(expr) => visitor.visit_expression_mut(expr),
            LambdaBody::Block(block) => visitor.visit_block_mut(block),
        },
        Expression::Parenthesized(inner) => visitor.visit_expression_mut(inner),
    }
}

pub fn walk_switch_mut<V: VisitorMut>(visitor: &mut V, switch: &mut Switch) {
    visitor.visit_expression_mut(&mut switch.selector);
    for case in &mut switch.cases {
        for label in &mut case.labels {
            visitor.visit_expression_mut(label);
        }
        for stmt in &mut case.body {
            visitor.visit_statement_mut(stmt);
        }
    }
}
