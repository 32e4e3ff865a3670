//! Instance usage analysis
//!
//! Finds every method whose body needs the current instance. A method needs
//! it when its body, at any depth, does one of:
//!
//! - reads a field from the instance field set (an identifier resolved to one
//!   of those fields, or `this.x` / `Outer.this.x`)
//! - names the receiver explicitly (`this`, `super`, `Outer.this`), also as
//!   a method reference target (`this::f`, `super::f`)
//! - instantiates a non-static inner member class of its own top-level class,
//!   either with `new Inner()` or through `Inner::new`
//! - calls an instance method through an implicit receiver; these calls are
//!   returned as [`CallEdge`]s because whether they need the instance depends
//!   on whether the callee itself stays an instance method
//!
//! # Attribution
//!
//! The analyzer keeps a stack of enclosing declarations (methods, fields,
//! classes). A use is attributed by walking that stack outward:
//!
//! - the innermost method is recorded, unless a field declaration sits
//!   between the use and that method
//! - local classes and anonymous class bodies are transparent: the walk
//!   continues past them, so a read inside a local class also marks the
//!   method that declares the local class
//! - a member class stops the walk, so a nested member class reading an outer
//!   field never marks an outer method
//!
//! Plain `this` and `super` denote the innermost class's instance and are
//! attributed to the innermost method only.

use rustc_hash::{FxHashMap, FxHashSet};
use staticize_tree::ast::visitor::{self, Visitor};
use staticize_tree::ast::*;
use staticize_tree::{FieldSignature, MethodSignature, ModifierKind};
use tracing::{debug, trace};

/// What to analyze: a single class (with everything nested in it) or a unit.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// Every top-level class of a compilation unit
    Unit(&'a CompilationUnit),
    /// One class treated as top-level
    Class(&'a ClassDecl),
}

impl<'a> From<&'a CompilationUnit> for Scope<'a> {
    fn from(unit: &'a CompilationUnit) -> Self {
        Scope::Unit(unit)
    }
}

impl<'a> From<&'a ClassDecl> for Scope<'a> {
    fn from(class: &'a ClassDecl) -> Self {
        Scope::Class(class)
    }
}

/// An unqualified call from `caller` to the instance method `callee`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallEdge {
    /// Method the call is attributed to
    pub caller: MethodSignature,
    /// Resolved target of the call
    pub callee: MethodSignature,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, Default)]
pub struct InstanceUsage {
    /// Methods that directly need the current instance.
    pub methods: FxHashSet<MethodSignature>,
    /// Instance method calls through an implicit receiver, in source order.
    pub calls: Vec<CallEdge>,
}

/// Analyze `scope` against the instance field set `instance`.
pub fn analyze<'a>(instance: &FxHashSet<FieldSignature>, scope: impl Into<Scope<'a>>) -> InstanceUsage {
    let scope = scope.into();
    let mut visitor = UsageVisitor::new(instance, inner_classes(scope));
    match scope {
        Scope::Unit(unit) => visitor.visit_unit(unit),
        Scope::Class(class) => visitor.visit_class_decl(class),
    }
    debug!(
        using = visitor.usage.methods.len(),
        calls = visitor.usage.calls.len(),
        "Instance usage analyzed"
    );
    visitor.usage
}

/// Signatures of the methods in `scope` that read an instance field or
/// otherwise need the current instance directly. Call edges are not followed.
pub fn find_using_methods<'a>(
    instance: &FxHashSet<FieldSignature>,
    scope: impl Into<Scope<'a>>,
) -> FxHashSet<MethodSignature> {
    analyze(instance, scope).methods
}

/// Names (simple and qualified) of the non-static inner member classes of
/// each top-level class in `scope`, keyed by the top-level class's type.
/// Creating one of these from code of that same top-level class uses the
/// current instance as its outer instance.
fn inner_classes(scope: Scope<'_>) -> FxHashMap<String, FxHashSet<String>> {
    let classes: &[ClassDecl] = match scope {
        Scope::Unit(unit) => &unit.classes,
        Scope::Class(class) => std::slice::from_ref(class),
    };

    let mut inner_classes = FxHashMap::default();
    for outer in classes {
        // Types nested in an interface are implicitly static
        if outer.kind == ClassKind::Interface {
            continue;
        }
        let mut names = FxHashSet::default();
        for member in &outer.members {
            if let ClassMember::Class(inner) = member {
                if inner.kind == ClassKind::Class && !inner.has_modifier(ModifierKind::Static) {
                    names.insert(inner.name.clone());
                    names.insert(inner.ty.clone());
                }
            }
        }
        if !names.is_empty() {
            inner_classes.insert(outer.ty.clone(), names);
        }
    }
    inner_classes
}

/// An enclosing declaration on the analyzer's stack.
#[derive(Debug)]
enum Frame {
    Method(Option<MethodSignature>),
    Field,
    Class { ty: String, local: bool },
}

struct UsageVisitor<'a> {
    instance: &'a FxHashSet<FieldSignature>,
    inner_classes: FxHashMap<String, FxHashSet<String>>,
    frames: Vec<Frame>,
    usage: InstanceUsage,
}

impl<'a> UsageVisitor<'a> {
    fn new(instance: &'a FxHashSet<FieldSignature>, inner_classes: FxHashMap<String, FxHashSet<String>>) -> Self {
        Self {
            instance,
            inner_classes,
            frames: Vec::new(),
            usage: InstanceUsage::default(),
        }
    }

    fn with_frame(&mut self, frame: Frame, f: impl FnOnce(&mut Self)) {
        self.frames.push(frame);
        f(self);
        self.frames.pop();
    }

    /// Type of the top-level class being walked: the outermost member class
    /// frame.
    fn top_level(&self) -> Option<&str> {
        self.frames.iter().find_map(|frame| match frame {
            Frame::Class { ty, local: false } => Some(ty.as_str()),
            _ => None,
        })
    }

    /// Whether `name` is a non-static inner class of the current top-level
    /// class.
    fn is_inner_class(&self, name: &str) -> bool {
        self.top_level()
            .and_then(|ty| self.inner_classes.get(ty))
            .is_some_and(|names| names.contains(name))
    }

    /// Record every method that needs the outer instance for a use at the
    /// current position, looking through local and anonymous classes.
    fn mark_enclosing(&mut self) {
        let mut armed = true;
        for frame in self.frames.iter().rev() {
            match frame {
                Frame::Method(signature) => {
                    if armed {
                        if let Some(signature) = signature {
                            trace!(method = %signature, "Instance use");
                            self.usage.methods.insert(signature.clone());
                        }
                    }
                    armed = false;
                }
                Frame::Field => armed = false,
                Frame::Class { local: true, .. } => armed = true,
                Frame::Class { local: false, .. } => break,
            }
        }
    }

    /// Record the innermost method, if the use sits directly in one.
    fn mark_innermost(&mut self) {
        if let Some(Frame::Method(Some(signature))) = self.frames.last() {
            trace!(method = %signature, "Receiver use");
            self.usage.methods.insert(signature.clone());
        }
    }

    /// Record a call edge from every method that would need the callee's
    /// instance, stopping at the callee's own class.
    fn record_call(&mut self, callee: &MethodSignature) {
        let mut armed = true;
        for frame in self.frames.iter().rev() {
            match frame {
                Frame::Method(signature) => {
                    if armed {
                        if let Some(caller) = signature {
                            self.usage.calls.push(CallEdge {
                                caller: caller.clone(),
                                callee: callee.clone(),
                            });
                        }
                    }
                    armed = false;
                }
                Frame::Field => armed = false,
                Frame::Class { ty, local } => {
                    if !*local || *ty == callee.owner {
                        break;
                    }
                    armed = true;
                }
            }
        }
    }
}

impl Visitor for UsageVisitor<'_> {
    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        let frame = Frame::Class {
            ty: decl.ty.clone(),
            local: false,
        };
        self.with_frame(frame, |v| visitor::walk_class_decl(v, decl));
    }

    fn visit_local_class(&mut self, decl: &ClassDecl) {
        let frame = Frame::Class {
            ty: decl.ty.clone(),
            local: true,
        };
        self.with_frame(frame, |v| visitor::walk_class_decl(v, decl));
    }

    fn visit_anonymous_body(&mut self, body: &AnonymousClassBody) {
        let frame = Frame::Class {
            ty: body.ty.clone().unwrap_or_default(),
            local: true,
        };
        self.with_frame(frame, |v| visitor::walk_anonymous_body(v, body));
    }

    fn visit_field_decl(&mut self, decl: &FieldDecl) {
        self.with_frame(Frame::Field, |v| visitor::walk_field_decl(v, decl));
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        let frame = Frame::Method(decl.signature.clone());
        self.with_frame(frame, |v| visitor::walk_method_decl(v, decl));
    }

    fn visit_identifier(&mut self, id: &Identifier) {
        if let Some(field) = &id.field {
            if self.instance.contains(field) {
                self.mark_enclosing();
            }
        }
    }

    fn visit_this(&mut self, this: &ThisExpr) {
        if this.qualifier.is_some() {
            self.mark_enclosing();
        } else {
            self.mark_innermost();
        }
    }

    fn visit_super(&mut self) {
        self.mark_innermost();
    }

    fn visit_field_access(&mut self, access: &FieldAccess) {
        self.visit_expression(&access.target);
        // `other.x` reads a field of another object
        if access.is_receiver_access() {
            self.visit_identifier(&access.name);
        }
    }

    fn visit_method_invocation(&mut self, call: &MethodInvocation) {
        if call.has_implicit_receiver() {
            if let Some(method) = call.method.as_ref().filter(|m| !m.is_static) {
                self.record_call(&method.signature);
            }
        }
        visitor::walk_method_invocation(self, call);
    }

    fn visit_method_reference(&mut self, reference: &MethodReference) {
        // `Inner::new` creates an inner instance just like `new Inner()`
        if reference.name == "new" {
            if let Expression::Identifier(target) = &*reference.target {
                if self.is_inner_class(&target.name) {
                    self.mark_enclosing();
                }
            }
        }
        // `this::f` and `super::f` reach visit_this / visit_super
        visitor::walk_method_reference(self, reference);
    }

    fn visit_new_class(&mut self, new_class: &NewClass) {
        if self.is_inner_class(&new_class.class.name) {
            self.mark_enclosing();
        }
        visitor::walk_new_class(self, new_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{collect, collect_unit};
    use staticize_tree::build::*;
    use staticize_tree::modifier::ModifierKind::*;

    fn x() -> FieldSignature {
        FieldSignature::new("A", "x", "int")
    }

    fn sig(owner: &str, name: &str) -> MethodSignature {
        MethodSignature::new(owner, name, Vec::<String>::new(), "int")
    }

    fn class_with(methods: Vec<MethodBuilder>) -> ClassBuilder {
        let mut class = ClassBuilder::new("A")
            .field(FieldBuilder::new("int", "x").modifiers(&[Private]))
            .field(FieldBuilder::new("int", "S").modifiers(&[Private, Static]));
        for method in methods {
            class = class.method(method);
        }
        class
    }

    fn using(class: ClassBuilder) -> FxHashSet<MethodSignature> {
        let class = class.build();
        find_using_methods(&collect(&class), &class)
    }

    #[test]
    fn test_direct_read() {
        let found = using(class_with(vec![
            MethodBuilder::new("int", "get").body(vec![ret(field_ref("x", x()))]),
            MethodBuilder::new("int", "one").body(vec![ret(int(1))]),
        ]));
        assert_eq!(found.len(), 1);
        assert!(found.contains(&sig("A", "get")));
    }

    #[test]
    fn test_static_field_read_is_not_instance_use() {
        let s = FieldSignature::new("A", "S", "int");
        let found = using(class_with(vec![
            MethodBuilder::new("int", "get").body(vec![ret(field_ref("S", s))]),
        ]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_read_in_nested_loops_and_lambda() {
        let found = using(class_with(vec![
            MethodBuilder::new("int", "loops").body(vec![while_loop(
                ident("go"),
                vec![if_then(
                    ident("ok"),
                    vec![block(vec![expr_stmt(assign(ident("y"), field_ref("x", x())))])],
                )],
            )]),
            MethodBuilder::new("int", "lazy").body(vec![ret(lambda(&[], field_ref("x", x())))]),
        ]));
        assert!(found.contains(&sig("A", "loops")));
        assert!(found.contains(&sig("A", "lazy")));
    }

    #[test]
    fn test_anonymous_class_read_marks_enclosing_method() {
        let found = using(class_with(vec![MethodBuilder::new("int", "get").body(vec![
            expr_stmt(new_anonymous(
                "Runnable",
                "A$1",
                vec![MethodBuilder::new("void", "run").body(vec![expr_stmt(field_ref("x", x()))])],
            )),
        ])]));
        assert!(found.contains(&sig("A", "get")));
        assert!(found.contains(&MethodSignature::new("A$1", "run", Vec::<String>::new(), "void")));
    }

    #[test]
    fn test_local_class_read_marks_enclosing_method() {
        let found = using(class_with(vec![MethodBuilder::new("int", "get").body(vec![
            local_class(
                ClassBuilder::new("Local")
                    .qualified("A$1Local")
                    .method(MethodBuilder::new("int", "peek").body(vec![ret(field_ref("x", x()))])),
            ),
            ret(int(0)),
        ])]));
        assert!(found.contains(&sig("A", "get")));
        assert!(found.contains(&sig("A$1Local", "peek")));
    }

    #[test]
    fn test_local_class_field_initializer_marks_enclosing_method() {
        let found = using(class_with(vec![MethodBuilder::new("int", "get").body(vec![
            local_class(
                ClassBuilder::new("Local")
                    .qualified("A$1Local")
                    .field(FieldBuilder::new("int", "copy").init(field_ref("x", x()))),
            ),
            ret(int(0)),
        ])]));
        assert!(found.contains(&sig("A", "get")));
    }

    #[test]
    fn test_member_class_read_does_not_mark_outer_method() {
        let found = using(
            class_with(vec![MethodBuilder::new("int", "outer").body(vec![ret(int(0))])]).nested(
                ClassBuilder::new("Inner")
                    .modifiers(&[Static])
                    .method(MethodBuilder::new("int", "peek").body(vec![ret(field_ref("x", x()))])),
            ),
        );
        assert!(!found.contains(&sig("A", "outer")));
        assert!(found.contains(&sig("A.Inner", "peek")));
    }

    #[test]
    fn test_field_initializer_and_constructor_reads_mark_nothing() {
        let found = using(
            ClassBuilder::new("A")
                .field(FieldBuilder::new("int", "x"))
                .field(FieldBuilder::new("int", "y").init(field_ref("x", x())))
                .constructor(ConstructorBuilder::new().body(vec![expr_stmt(field_ref("x", x()))]))
                .initializer(false, vec![expr_stmt(field_ref("x", x()))]),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_cross_class_access_is_not_instance_use() {
        let found = using(class_with(vec![MethodBuilder::new("int", "peek")
            .param("A", "other")
            .body(vec![ret(field_access(ident("other"), "x", x()))])]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_this_field_access() {
        let found = using(class_with(vec![
            MethodBuilder::new("int", "get").body(vec![ret(this_field(x()))]),
        ]));
        assert!(found.contains(&sig("A", "get")));
    }

    #[test]
    fn test_bare_this_and_super() {
        let found = using(class_with(vec![
            MethodBuilder::new("A", "me").body(vec![ret(this())]),
            MethodBuilder::new("int", "hash").body(vec![ret(call(
                Some(Expression::Super),
                "hashCode",
                vec![],
            ))]),
        ]));
        assert!(found.contains(&MethodSignature::new("A", "me", Vec::<String>::new(), "A")));
        assert!(found.contains(&sig("A", "hash")));
    }

    #[test]
    fn test_this_inside_anonymous_class_stays_there() {
        let found = using(class_with(vec![MethodBuilder::new("int", "get").body(vec![
            expr_stmt(new_anonymous(
                "Runnable",
                "A$1",
                vec![MethodBuilder::new("void", "run").body(vec![expr_stmt(call(
                    Some(ident("list")),
                    "add",
                    vec![this()],
                ))])],
            )),
            ret(int(0)),
        ])]));
        assert!(!found.contains(&sig("A", "get")));
        assert!(found.contains(&MethodSignature::new("A$1", "run", Vec::<String>::new(), "void")));
    }

    #[test]
    fn test_qualified_this_inside_anonymous_class_marks_enclosing() {
        let found = using(class_with(vec![MethodBuilder::new("int", "get").body(vec![
            expr_stmt(new_anonymous(
                "Runnable",
                "A$1",
                vec![MethodBuilder::new("void", "run").body(vec![expr_stmt(call(
                    Some(ident("list")),
                    "add",
                    vec![qualified_this("A")],
                ))])],
            )),
            ret(int(0)),
        ])]));
        assert!(found.contains(&sig("A", "get")));
    }

    #[test]
    fn test_unresolved_identifier_is_not_instance_use() {
        let found = using(class_with(vec![
            MethodBuilder::new("int", "get").body(vec![ret(ident("x"))]),
        ]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_inner_class_creation_is_instance_use() {
        let found = using(
            class_with(vec![
                MethodBuilder::new("Object", "make").body(vec![ret(new_object("Inner", vec![]))]),
                MethodBuilder::new("Object", "nest").body(vec![ret(new_object("Nested", vec![]))]),
            ])
            .nested(ClassBuilder::new("Inner"))
            .nested(ClassBuilder::new("Nested").modifiers(&[Static])),
        );
        assert!(found.contains(&MethodSignature::new("A", "make", Vec::<String>::new(), "Object")));
        assert!(!found.contains(&MethodSignature::new("A", "nest", Vec::<String>::new(), "Object")));
    }

    #[test]
    fn test_read_inside_each_construct_marks_method() {
        let read = || field_ref("x", x());
        let cases: Vec<(&str, Statement)> = vec![
            (
                "switchCase",
                switch_stmt(ident("k"), vec![case(vec![int(1)], vec![expr_stmt(read())])]),
            ),
            (
                "switchSelector",
                switch_stmt(read(), vec![case(vec![], vec![Statement::Break(None)])]),
            ),
            (
                "switchExpression",
                ret(switch_expr(
                    ident("k"),
                    vec![arrow_case(vec![], block(vec![Statement::Yield(read())]))],
                )),
            ),
            (
                "labeled",
                labeled(
                    "outer",
                    while_loop(ident("go"), vec![expr_stmt(read()), Statement::Break(Some("outer".into()))]),
                ),
            ),
            (
                "assertion",
                assert_stmt(binary(read(), BinaryOperator::GreaterThan, int(0)), None),
            ),
            ("assertMessage", assert_stmt(ident("ok"), Some(read()))),
            (
                "resource",
                try_with(vec![resource("Closeable", "c", call(None, "open", vec![read()]))], vec![], None),
            ),
            (
                "resourceBody",
                try_with(vec![TryResource::Expression(ident("c"))], vec![expr_stmt(read())], None),
            ),
            ("arraySize", ret(new_array("int", vec![read()]))),
            ("arrayElements", ret(array_of("int", vec![read()]))),
            ("arrayInitializer", local("int[]", "a", Expression::ArrayInitializer(vec![read()]))),
            ("typeTest", ret(instance_of(read(), "Integer"))),
            (
                "numericLiterals",
                ret(binary(
                    binary(read(), BinaryOperator::Add, long(1)),
                    BinaryOperator::Multiply,
                    double(0.5),
                )),
            ),
        ];
        let pure = switch_stmt(
            ident("k"),
            vec![arrow_case(vec![int(1)], expr_stmt(instance_of(ident("o"), "String")))],
        );

        let mut methods: Vec<_> = cases
            .iter()
            .map(|(name, stmt)| MethodBuilder::new("int", *name).body(vec![stmt.clone()]))
            .collect();
        methods.push(MethodBuilder::new("int", "pure").body(vec![pure]));
        let found = using(class_with(methods));

        for (name, _) in &cases {
            assert!(found.contains(&sig("A", name)), "{name} reads x");
        }
        assert!(!found.contains(&sig("A", "pure")));
        assert_eq!(found.len(), cases.len());
    }

    #[test]
    fn test_method_references() {
        let m = |name: &str, returns: &str| MethodSignature::new("A", name, Vec::<String>::new(), returns);
        let found = using(
            class_with(vec![
                MethodBuilder::new("Runnable", "bound").body(vec![ret(method_ref(this(), "tick"))]),
                MethodBuilder::new("Runnable", "outerBound").body(vec![ret(method_ref(qualified_this("A"), "tick"))]),
                MethodBuilder::new("Supplier<String>", "parent")
                    .body(vec![ret(method_ref(Expression::Super, "toString"))]),
                MethodBuilder::new("Function<Object, String>", "unbound")
                    .body(vec![ret(method_ref(ident("String"), "valueOf"))]),
                MethodBuilder::new("Supplier<Inner>", "factory").body(vec![ret(method_ref(ident("Inner"), "new"))]),
                MethodBuilder::new("Supplier<Nested>", "nestedFactory")
                    .body(vec![ret(method_ref(ident("Nested"), "new"))]),
            ])
            .nested(ClassBuilder::new("Inner"))
            .nested(ClassBuilder::new("Nested").modifiers(&[Static])),
        );

        assert!(found.contains(&m("bound", "Runnable")));
        assert!(found.contains(&m("outerBound", "Runnable")));
        assert!(found.contains(&m("parent", "Supplier<String>")));
        assert!(found.contains(&m("factory", "Supplier<Inner>")));
        assert!(!found.contains(&m("unbound", "Function<Object, String>")));
        assert!(!found.contains(&m("nestedFactory", "Supplier<Nested>")));
    }

    #[test]
    fn test_inner_class_lookup_is_per_top_level_class() {
        let make = |owner: &str| MethodSignature::new(owner, "make", Vec::<String>::new(), "Object");
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .nested(ClassBuilder::new("Inner"))
                    .method(MethodBuilder::new("Object", "make").body(vec![ret(new_object("Inner", vec![]))])),
            )
            .class(
                ClassBuilder::new("B")
                    .nested(ClassBuilder::new("Inner").modifiers(&[Static]))
                    .method(MethodBuilder::new("Object", "make").body(vec![ret(new_object("Inner", vec![]))])),
            )
            .build();

        let found = find_using_methods(&collect_unit(&unit), &unit);
        assert!(found.contains(&make("A")));
        assert!(!found.contains(&make("B")));
    }

    #[test]
    fn test_call_edges() {
        let helper = sig("A", "helper");
        let util = sig("A", "util");
        let class = class_with(vec![
            MethodBuilder::new("int", "helper").body(vec![ret(int(1))]),
            MethodBuilder::new("int", "util").modifiers(&[Static]).body(vec![ret(int(2))]),
            MethodBuilder::new("int", "caller").body(vec![
                expr_stmt(call_resolved(None, helper.clone(), false, vec![])),
                expr_stmt(call_resolved(None, util, true, vec![])),
                expr_stmt(call(None, "mystery", vec![])),
                ret(call_resolved(Some(ident("other")), helper.clone(), false, vec![])),
            ]),
        ])
        .build();

        let usage = analyze(&collect(&class), &class);
        assert_eq!(
            usage.calls,
            vec![CallEdge {
                caller: sig("A", "caller"),
                callee: helper,
            }]
        );
        assert!(usage.methods.is_empty());
    }

    #[test]
    fn test_call_from_anonymous_class_edges_enclosing_method() {
        let helper = sig("A", "helper");
        let class = class_with(vec![
            MethodBuilder::new("int", "helper").body(vec![ret(int(1))]),
            MethodBuilder::new("int", "get").body(vec![
                expr_stmt(new_anonymous(
                    "Runnable",
                    "A$1",
                    vec![MethodBuilder::new("void", "run")
                        .body(vec![expr_stmt(call_resolved(None, helper.clone(), false, vec![]))])],
                )),
                ret(int(0)),
            ]),
        ])
        .build();

        let usage = analyze(&collect(&class), &class);
        let callers: Vec<_> = usage.calls.iter().map(|e| e.caller.name.as_str()).collect();
        assert_eq!(callers, vec!["run", "get"]);
    }

    #[test]
    fn test_unit_scope_covers_every_class() {
        let unit = UnitBuilder::new()
            .class(class_with(vec![MethodBuilder::new("int", "get").body(vec![ret(field_ref("x", x()))])]))
            .class(ClassBuilder::new("B").method(
                MethodBuilder::new("int", "peek").body(vec![ret(this_field(FieldSignature::new("B", "y", "int")))]),
            ))
            .build();

        let found = find_using_methods(&collect_unit(&unit), &unit);
        assert!(found.contains(&sig("A", "get")));
        // `this` marks the method even though B.y is not declared
        assert!(found.contains(&sig("B", "peek")));
    }
}
