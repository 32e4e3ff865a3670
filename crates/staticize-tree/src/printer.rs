//! Source printer
//!
//! Renders a tree as Java-like source with four-space indentation and a blank
//! line between class members. Modifier lists are the one place where stored
//! whitespace is honored: each modifier is printed after its own
//! [`Space`](crate::Space) prefix, so layout fixes made by a pass show up in
//! the output.

use crate::ast::*;
use crate::modifier::{self, Modifier};

const INDENT: &str = "    ";

/// Render a whole compilation unit.
pub fn print_unit(unit: &CompilationUnit) -> String {
    let mut p = Printer::new();
    p.unit(unit);
    p.out
}

/// Render one class declaration at the top level.
pub fn print_class(decl: &ClassDecl) -> String {
    let mut p = Printer::new();
    p.class_decl(decl);
    p.out
}

/// Render one method declaration at the top level.
pub fn print_method(decl: &MethodDecl) -> String {
    let mut p = Printer::new();
    p.method_decl(decl);
    p.out
}

/// Render an expression.
pub fn print_expression(expr: &Expression) -> String {
    let mut p = Printer::new();
    p.expression(expr);
    p.out
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn modifiers(&mut self, modifiers: &[Modifier]) {
        if !modifiers.is_empty() {
            self.out.push_str(&modifier::render(modifiers));
            self.out.push(' ');
        }
    }

    fn unit(&mut self, unit: &CompilationUnit) {
        if let Some(package) = &unit.package {
            self.out.push_str(&format!("package {};\n\n", package));
        }
        if !unit.imports.is_empty() {
            for import in &unit.imports {
                self.out.push_str(&format!("import {};\n", import));
            }
            self.out.push('\n');
        }
        for (i, class) in unit.classes.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.class_decl(class);
        }
    }

    // ------------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------------

    fn class_decl(&mut self, decl: &ClassDecl) {
        self.write_indent();
        self.modifiers(&decl.modifiers);
        self.out.push_str(decl.kind.keyword());
        self.out.push(' ');
        self.out.push_str(&decl.name);
        if let Some(extends) = &decl.extends {
            self.out.push_str(" extends ");
            self.out.push_str(&extends.name);
        }
        if !decl.implements.is_empty() {
            self.out.push_str(match decl.kind {
                ClassKind::Interface => " extends ",
                _ => " implements ",
            });
            self.out.push_str(&type_list(&decl.implements));
        }
        self.out.push(' ');
        self.class_body(&decl.members);
        self.out.push('\n');
    }

    fn class_body(&mut self, members: &[ClassMember]) {
        self.out.push_str("{\n");
        self.indent += 1;
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.member(member);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Field(decl) => self.field_decl(decl),
            ClassMember::Method(decl) => self.method_decl(decl),
            ClassMember::Constructor(decl) => self.constructor_decl(decl),
            ClassMember::Initializer(init) => {
                self.write_indent();
                if init.is_static {
                    self.out.push_str("static ");
                }
                self.block(&init.body);
                self.out.push('\n');
            }
            ClassMember::Class(decl) => self.class_decl(decl),
        }
    }

    fn field_decl(&mut self, decl: &FieldDecl) {
        self.write_indent();
        self.modifiers(&decl.modifiers);
        self.out.push_str(&decl.ty.name);
        self.out.push(' ');
        for (i, variable) in decl.variables.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(&variable.name);
            if let Some(init) = &variable.initializer {
                self.out.push_str(" = ");
                self.expression(init);
            }
        }
        self.out.push_str(";\n");
    }

    fn method_decl(&mut self, decl: &MethodDecl) {
        self.write_indent();
        self.modifiers(&decl.modifiers);
        if !decl.type_params.is_empty() {
            self.out.push_str(&format!("<{}> ", decl.type_params.join(", ")));
        }
        self.out.push_str(&decl.return_type.name);
        self.out.push(' ');
        self.out.push_str(&decl.name);
        self.params(&decl.params);
        self.throws(&decl.throws);
        match &decl.body {
            Some(body) => {
                self.out.push(' ');
                self.block(body);
                self.out.push('\n');
            }
            None => self.out.push_str(";\n"),
        }
    }

    fn constructor_decl(&mut self, decl: &ConstructorDecl) {
        self.write_indent();
        self.modifiers(&decl.modifiers);
        self.out.push_str(&decl.name);
        self.params(&decl.params);
        self.throws(&decl.throws);
        self.out.push(' ');
        self.block(&decl.body);
        self.out.push('\n');
    }

    fn params(&mut self, params: &[Parameter]) {
        self.out.push('(');
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.parameter(param);
        }
        self.out.push(')');
    }

    fn parameter(&mut self, param: &Parameter) {
        self.modifiers(&param.modifiers);
        self.out.push_str(&param.ty.name);
        if param.varargs {
            self.out.push_str("...");
        }
        self.out.push(' ');
        self.out.push_str(&param.name);
    }

    fn throws(&mut self, throws: &[TypeRef]) {
        if !throws.is_empty() {
            self.out.push_str(" throws ");
            self.out.push_str(&type_list(throws));
        }
    }

    // ------------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------------

    /// `{`, statements, closing `}` at the current indent; no trailing newline.
    fn block(&mut self, block: &Block) {
        self.out.push_str("{\n");
        self.indent += 1;
        for stmt in &block.statements {
            self.statement(stmt);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn statement(&mut self, stmt: &Statement) {
        if let Statement::LocalClass(decl) = stmt {
            self.class_decl(decl);
            return;
        }
        self.write_indent();
        self.statement_inline(stmt);
        self.out.push('\n');
    }

    /// Body of a control statement: blocks stay on the same line, anything
    /// else goes on its own indented line.
    fn body(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Block(block) => self.block(block),
            other => {
                self.out.push('\n');
                self.indent += 1;
                self.write_indent();
                self.statement_inline(other);
                self.indent -= 1;
            }
        }
    }

    fn after_body(&mut self, body: &Statement) {
        if matches!(body, Statement::Block(_)) {
            self.out.push(' ');
        } else {
            self.out.push('\n');
            self.write_indent();
        }
    }

    fn statement_inline(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Block(block) => self.block(block),
            Statement::LocalVariable(decl) => {
                self.local_variable(decl);
                self.out.push(';');
            }
            Statement::Expression(expr) => {
                self.expression(expr);
                self.out.push(';');
            }
            Statement::Return(value) => match value {
                Some(value) => {
                    self.out.push_str("return ");
                    self.expression(value);
                    self.out.push(';');
                }
                None => self.out.push_str("return;"),
            },
            Statement::If(stmt) => {
                self.out.push_str("if (");
                self.expression(&stmt.condition);
                self.out.push_str(") ");
                self.body(&stmt.then_branch);
                if let Some(else_branch) = &stmt.else_branch {
                    self.after_body(&stmt.then_branch);
                    self.out.push_str("else ");
                    match else_branch.as_ref() {
                        Statement::If(_) => self.statement_inline(else_branch),
                        other => self.body(other),
                    }
                }
            }
            Statement::While(stmt) => {
                self.out.push_str("while (");
                self.expression(&stmt.condition);
                self.out.push_str(") ");
                self.body(&stmt.body);
            }
            Statement::DoWhile(stmt) => {
                self.out.push_str("do ");
                self.body(&stmt.body);
                self.after_body(&stmt.body);
                self.out.push_str("while (");
                self.expression(&stmt.condition);
                self.out.push_str(");");
            }
            Statement::For(stmt) => {
                self.out.push_str("for (");
                for (i, init) in stmt.init.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    match init {
                        Statement::LocalVariable(decl) => self.local_variable(decl),
                        Statement::Expression(expr) => self.expression(expr),
                        other => self.statement_inline(other),
                    }
                }
                self.out.push(';');
                if let Some(condition) = &stmt.condition {
                    self.out.push(' ');
                    self.expression(condition);
                }
                self.out.push(';');
                for (i, update) in stmt.update.iter().enumerate() {
                    self.out.push_str(if i == 0 { " " } else { ", " });
                    self.expression(update);
                }
                self.out.push_str(") ");
                self.body(&stmt.body);
            }
            Statement::ForEach(stmt) => {
                self.out.push_str("for (");
                self.parameter(&stmt.variable);
                self.out.push_str(" : ");
                self.expression(&stmt.iterable);
                self.out.push_str(") ");
                self.body(&stmt.body);
            }
            Statement::Throw(expr) => {
                self.out.push_str("throw ");
                self.expression(expr);
                self.out.push(';');
            }
            Statement::Try(stmt) => {
                self.out.push_str("try ");
                if !stmt.resources.is_empty() {
                    self.out.push('(');
                    for (i, resource) in stmt.resources.iter().enumerate() {
                        if i > 0 {
                            self.out.push_str("; ");
                        }
                        match resource {
                            TryResource::Variable { ty, name, initializer } => {
                                self.out.push_str(&format!("{} {} = ", ty.name, name));
                                self.expression(initializer);
                            }
                            TryResource::Expression(expr) => self.expression(expr),
                        }
                    }
                    self.out.push_str(") ");
                }
                self.block(&stmt.body);
                for catch in &stmt.catches {
                    self.out.push_str(" catch (");
                    self.parameter(&catch.param);
                    self.out.push_str(") ");
                    self.block(&catch.body);
                }
                if let Some(finally) = &stmt.finally {
                    self.out.push_str(" finally ");
                    self.block(finally);
                }
            }
            Statement::Synchronized(stmt) => {
                self.out.push_str("synchronized (");
                self.expression(&stmt.lock);
                self.out.push_str(") ");
                self.block(&stmt.body);
            }
            Statement::LocalClass(decl) => {
                // Only reached as the non-block body of a control statement.
                let mut nested = Printer {
                    out: String::new(),
                    indent: self.indent,
                };
                nested.class_decl(decl);
                self.out.push_str(nested.out.trim());
            }
            Statement::Switch(switch) => self.switch(switch),
            Statement::Yield(value) => {
                self.out.push_str("yield ");
                self.expression(value);
                self.out.push(';');
            }
            Statement::Labeled(stmt) => {
                self.out.push_str(&stmt.label);
                self.out.push_str(": ");
                self.statement_inline(&stmt.body);
            }
            Statement::Assert(stmt) => {
                self.out.push_str("assert ");
                self.expression(&stmt.condition);
                if let Some(message) = &stmt.message {
                    self.out.push_str(" : ");
                    self.expression(message);
                }
                self.out.push(';');
            }
            Statement::Break(label) => self.jump("break", label.as_deref()),
            Statement::Continue(label) => self.jump("continue", label.as_deref()),
            Statement::Empty => self.out.push(';'),
        }
    }

    fn jump(&mut self, keyword: &str, label: Option<&str>) {
        self.out.push_str(keyword);
        if let Some(label) = label {
            self.out.push(' ');
            self.out.push_str(label);
        }
        self.out.push(';');
    }

    /// Cases sit one level in; colon case bodies one level further.
    fn switch(&mut self, switch: &Switch) {
        self.out.push_str("switch (");
        self.expression(&switch.selector);
        self.out.push_str(") {\n");
        self.indent += 1;
        for case in &switch.cases {
            self.write_indent();
            if case.labels.is_empty() {
                self.out.push_str("default");
            } else {
                self.out.push_str("case ");
                self.expression_list(&case.labels);
            }
            if case.arrow {
                self.out.push_str(" -> ");
                if let Some(body) = case.body.first() {
                    self.statement_inline(body);
                }
                self.out.push('\n');
            } else {
                self.out.push_str(":\n");
                self.indent += 1;
                for stmt in &case.body {
                    self.statement(stmt);
                }
                self.indent -= 1;
            }
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push('}');
    }

    fn local_variable(&mut self, decl: &LocalVariableDecl) {
        self.modifiers(&decl.modifiers);
        self.out.push_str(&decl.ty.name);
        self.out.push(' ');
        for (i, variable) in decl.variables.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push_str(&variable.name);
            if let Some(init) = &variable.initializer {
                self.out.push_str(" = ");
                self.expression(init);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    fn expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Literal(lit) => self.literal(lit),
            Expression::Identifier(id) => self.out.push_str(&id.name),
            Expression::This(this) => {
                if let Some(qualifier) = &this.qualifier {
                    self.out.push_str(qualifier);
                    self.out.push('.');
                }
                self.out.push_str("this");
            }
            Expression::Super => self.out.push_str("super"),
            Expression::FieldAccess(access) => {
                self.expression(&access.target);
                self.out.push('.');
                self.out.push_str(&access.name.name);
            }
            Expression::MethodInvocation(call) => {
                if let Some(select) = &call.select {
                    self.expression(select);
                    self.out.push('.');
                }
                self.out.push_str(&call.name);
                self.arguments(&call.arguments);
            }
            Expression::MethodReference(reference) => {
                self.expression(&reference.target);
                self.out.push_str("::");
                self.out.push_str(&reference.name);
            }
            Expression::Unary(unary) => {
                let (prefix, postfix) = match unary.operator {
                    UnaryOperator::Negate => ("-", ""),
                    UnaryOperator::Not => ("!", ""),
                    UnaryOperator::BitNot => ("~", ""),
                    UnaryOperator::PreIncrement => ("++", ""),
                    UnaryOperator::PreDecrement => ("--", ""),
                    UnaryOperator::PostIncrement => ("", "++"),
                    UnaryOperator::PostDecrement => ("", "--"),
                };
                self.out.push_str(prefix);
                self.expression(&unary.operand);
                self.out.push_str(postfix);
            }
            Expression::Binary(binary) => {
                self.expression(&binary.left);
                self.out.push(' ');
                self.out.push_str(binary.operator.token());
                self.out.push(' ');
                self.expression(&binary.right);
            }
            Expression::Assignment(assign) => {
                self.expression(&assign.target);
                self.out.push(' ');
                self.out.push_str(assign.operator.token());
                self.out.push(' ');
                self.expression(&assign.value);
            }
            Expression::Conditional(cond) => {
                self.expression(&cond.condition);
                self.out.push_str(" ? ");
                self.expression(&cond.then_expr);
                self.out.push_str(" : ");
                self.expression(&cond.else_expr);
            }
            Expression::NewClass(new_class) => {
                self.out.push_str("new ");
                self.out.push_str(&new_class.class.name);
                self.arguments(&new_class.arguments);
                if let Some(body) = &new_class.body {
                    self.out.push(' ');
                    self.class_body(&body.members);
                }
            }
            Expression::ArrayAccess(access) => {
                self.expression(&access.array);
                self.out.push('[');
                self.expression(&access.index);
                self.out.push(']');
            }
            Expression::NewArray(array) => {
                self.out.push_str("new ");
                self.out.push_str(&array.element.name);
                for dimension in &array.dimensions {
                    self.out.push('[');
                    self.expression(dimension);
                    self.out.push(']');
                }
                for _ in 0..array.extra_dimensions {
                    self.out.push_str("[]");
                }
                if let Some(elements) = &array.initializer {
                    self.out.push(' ');
                    self.array_initializer(elements);
                }
            }
            Expression::ArrayInitializer(elements) => self.array_initializer(elements),
            Expression::InstanceOf(test) => {
                self.expression(&test.expression);
                self.out.push_str(" instanceof ");
                self.out.push_str(&test.ty.name);
                if let Some(binding) = &test.binding {
                    self.out.push(' ');
                    self.out.push_str(binding);
                }
            }
            Expression::Switch(switch) => self.switch(switch),
            Expression::Cast(cast) => {
                self.out.push('(');
                self.out.push_str(&cast.ty.name);
                self.out.push_str(") ");
                self.expression(&cast.expression);
            }
            Expression::Lambda(lambda) => self.lambda(lambda),
            Expression::Parenthesized(inner) => {
                self.out.push('(');
                self.expression(inner);
                self.out.push(')');
            }
        }
    }

    fn arguments(&mut self, args: &[Expression]) {
        self.out.push('(');
        self.expression_list(args);
        self.out.push(')');
    }

    fn array_initializer(&mut self, elements: &[Expression]) {
        self.out.push('{');
        self.expression_list(elements);
        self.out.push('}');
    }

    fn expression_list(&mut self, exprs: &[Expression]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expression(expr);
        }
    }

    fn lambda(&mut self, lambda: &Lambda) {
        match lambda.params.as_slice() {
            [single] if single.ty.is_none() => self.out.push_str(&single.name),
            params => {
                self.out.push('(');
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    if let Some(ty) = &param.ty {
                        self.out.push_str(&ty.name);
                        self.out.push(' ');
                    }
                    self.out.push_str(&param.name);
                }
                self.out.push(')');
            }
        }
        self.out.push_str(" -> ");
        match &lambda.body {
            LambdaBody::Expression(expr) => self.expression(expr),
            LambdaBody::Block(block) => self.block(block),
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Int(value) => self.out.push_str(&value.to_string()),
            Literal::Long(value) => self.out.push_str(&format!("{}L", value)),
            Literal::Float(value) => self.out.push_str(&format!("{:?}f", value)),
            Literal::Double(value) => self.out.push_str(&format!("{:?}", value)),
            Literal::String(value) => {
                self.out.push('"');
                for c in value.chars() {
                    match c {
                        '"' => self.out.push_str("\\\""),
                        '\\' => self.out.push_str("\\\\"),
                        '\n' => self.out.push_str("\\n"),
                        '\t' => self.out.push_str("\\t"),
                        c => self.out.push(c),
                    }
                }
                self.out.push('"');
            }
            Literal::Char(c) => match c {
                '\'' => self.out.push_str("'\\''"),
                '\\' => self.out.push_str("'\\\\'"),
                '\n' => self.out.push_str("'\\n'"),
                c => self.out.push_str(&format!("'{}'", c)),
            },
            Literal::Boolean(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Literal::Null => self.out.push_str("null"),
        }
    }
}

fn type_list(types: &[TypeRef]) -> String {
    types
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
