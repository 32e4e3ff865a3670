//! Pass orchestration
//!
//! Runs the two phases over one compilation unit:
//!
//! 1. [`analyze_unit`] collects the instance field set, finds the methods
//!    using it, and closes that set over instance method calls.
//! 2. A mutable walk visits every method in the unit, judges it against the
//!    finished sets, and replaces the eligible ones.
//!
//! Nothing is rewritten until every set is complete, and nothing is carried
//! over from one unit to the next.

use rustc_hash::{FxHashMap, FxHashSet};
use staticize_tree::ast::visitor_mut::{self, VisitorMut};
use staticize_tree::ast::*;
use staticize_tree::modifier::render;
use staticize_tree::{FieldSignature, MethodSignature};
use tracing::{debug, trace};

use crate::classify::{classify, is_eligible};
use crate::collect::collect_unit;
use crate::config::PassConfig;
use crate::report::{PassReport, StaticChange};
use crate::rewrite::{make_static, ModifierOrder};
use crate::usage::{analyze, CallEdge};

/// Result of one run over one unit.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    /// The rewritten unit (the input unchanged in a dry run).
    pub unit: CompilationUnit,
    /// Methods that were (or would be) made static.
    pub report: PassReport,
}

impl PassOutcome {
    /// Whether any method was (or would be) made static.
    pub fn changed(&self) -> bool {
        !self.report.is_empty()
    }
}

/// Everything the rewrite phase judges methods against.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Instance fields of the unit's top-level classes.
    pub instance_fields: FxHashSet<FieldSignature>,
    /// Methods that need the current instance, closed over call edges.
    pub usage: FxHashSet<MethodSignature>,
    /// Qualified names of the unit's top-level classes.
    pub top_level: FxHashSet<String>,
}

/// Run the analysis phase over `unit`.
pub fn analyze_unit(unit: &CompilationUnit) -> Analysis {
    let instance_fields = collect_unit(unit);
    debug!(fields = instance_fields.len(), "Instance fields collected");

    let found = analyze(&instance_fields, unit);
    let top_level = unit.top_level_types();
    let index = MethodIndex::build(unit);
    let usage = close_over_calls(found.methods, &found.calls, &index, &top_level);
    debug!(using = usage.len(), "Usage set closed over calls");

    Analysis {
        instance_fields,
        usage,
        top_level,
    }
}

/// Add to `usage` every caller with a callee that stays an instance method.
///
/// A callee stays an instance method when it is not declared in the unit,
/// or is declared non-static and is not eligible under the usage set so far.
/// Growing the set can only make more callees ineligible, so this iterates
/// until nothing changes.
fn close_over_calls(
    mut usage: FxHashSet<MethodSignature>,
    calls: &[CallEdge],
    index: &MethodIndex<'_>,
    top_level: &FxHashSet<String>,
) -> FxHashSet<MethodSignature> {
    loop {
        let mut changed = false;
        for edge in calls {
            if usage.contains(&edge.caller) {
                continue;
            }
            let callee_static = index
                .get(&edge.callee)
                .is_some_and(|m| m.is_static() || is_eligible(m, &usage, top_level));
            if !callee_static {
                trace!(caller = %edge.caller, callee = %edge.callee, "Instance call");
                usage.insert(edge.caller.clone());
                changed = true;
            }
        }
        if !changed {
            return usage;
        }
    }
}

/// Every resolved method declaration in a unit, by signature.
struct MethodIndex<'a> {
    methods: FxHashMap<MethodSignature, &'a MethodDecl>,
}

impl<'a> MethodIndex<'a> {
    fn build(unit: &'a CompilationUnit) -> Self {
        let mut index = Self {
            methods: FxHashMap::default(),
        };
        for class in &unit.classes {
            index.add_class(class);
        }
        index
    }

    // Only member classes: local and anonymous class methods are never
    // eligible, so an unknown callee is treated the same way.
    fn add_class(&mut self, class: &'a ClassDecl) {
        for member in &class.members {
            match member {
                ClassMember::Method(method) => {
                    if let Some(signature) = &method.signature {
                        self.methods.insert(signature.clone(), method);
                    }
                }
                ClassMember::Class(nested) => self.add_class(nested),
                _ => {}
            }
        }
    }

    fn get(&self, signature: &MethodSignature) -> Option<&'a MethodDecl> {
        self.methods.get(signature).copied()
    }
}

/// Runs the pass with a fixed configuration. Holds no per-unit state.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    config: PassConfig,
}

impl Orchestrator {
    /// Orchestrator running with `config`.
    pub fn new(config: PassConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    /// Analyze `unit`, then rewrite every eligible method.
    pub fn run(&self, mut unit: CompilationUnit) -> PassOutcome {
        debug!(
            path = unit.source_path.as_deref().unwrap_or("<unknown>"),
            classes = unit.classes.len(),
            "Running pass"
        );

        let analysis = analyze_unit(&unit);
        let mut rewriter = Rewriter {
            analysis: &analysis,
            order: self.config.modifier_order(),
            dry_run: self.config.dry_run,
            changes: Vec::new(),
        };
        rewriter.visit_unit_mut(&mut unit);

        let mut report = PassReport::new(unit.source_path.clone(), self.config.dry_run);
        report.changes = rewriter.changes;
        debug!(changes = report.len(), dry_run = report.dry_run, "Pass finished");

        PassOutcome { unit, report }
    }
}

/// Mutable walk that replaces eligible methods.
struct Rewriter<'a> {
    analysis: &'a Analysis,
    order: ModifierOrder,
    dry_run: bool,
    changes: Vec<StaticChange>,
}

impl Rewriter<'_> {
    fn rewrite(&mut self, decl: &mut MethodDecl) {
        let Some(signature) = decl.signature.clone() else {
            return;
        };
        let rewritten = make_static(decl, self.order);
        debug!(method = %signature, "Making method static");
        self.changes.push(StaticChange {
            method: signature,
            span: decl.span,
            before: render(&decl.modifiers),
            after: render(&rewritten.modifiers),
        });
        if !self.dry_run {
            *decl = rewritten;
        }
    }
}

impl VisitorMut for Rewriter<'_> {
    fn visit_method_decl_mut(&mut self, decl: &mut MethodDecl) {
        let verdict = classify(decl, &self.analysis.usage, &self.analysis.top_level);
        trace!(method = %decl.name, %verdict, "Classified");

        if verdict.is_eligible() {
            self.rewrite(decl);
        }

        // Methods of local and anonymous classes in the body are visited too
        visitor_mut::walk_method_decl_mut(self, decl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticize_tree::build::*;
    use staticize_tree::modifier::ModifierKind::*;

    fn sig(name: &str) -> MethodSignature {
        MethodSignature::new("A", name, Vec::<String>::new(), "int")
    }

    fn call_to(name: &str) -> Statement {
        expr_stmt(call_resolved(None, sig(name), false, vec![]))
    }

    fn private(name: &str, body: Vec<Statement>) -> MethodBuilder {
        MethodBuilder::new("int", name).modifiers(&[Private]).body(body)
    }

    #[test]
    fn test_caller_of_instance_user_uses_instance() {
        let x = FieldSignature::new("A", "x", "int");
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .field(FieldBuilder::new("int", "x"))
                    .method(private("reader", vec![ret(field_ref("x", x))]))
                    .method(private("caller", vec![call_to("reader"), ret(int(0))]))
                    .method(private("outer", vec![call_to("caller"), ret(int(0))])),
            )
            .build();

        let analysis = analyze_unit(&unit);
        assert!(analysis.usage.contains(&sig("reader")));
        assert!(analysis.usage.contains(&sig("caller")));
        assert!(analysis.usage.contains(&sig("outer")));
    }

    #[test]
    fn test_caller_of_eligible_callee_stays_eligible() {
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .method(private("pure", vec![ret(int(1))]))
                    .method(private("caller", vec![call_to("pure"), ret(int(0))])),
            )
            .build();

        let analysis = analyze_unit(&unit);
        assert!(analysis.usage.is_empty());
    }

    #[test]
    fn test_caller_of_overridable_callee_uses_instance() {
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .method(MethodBuilder::new("int", "hook").modifiers(&[Protected]).body(vec![ret(int(1))]))
                    .method(private("caller", vec![call_to("hook"), ret(int(0))])),
            )
            .build();

        let analysis = analyze_unit(&unit);
        assert!(analysis.usage.contains(&sig("caller")));
    }

    #[test]
    fn test_caller_of_unknown_callee_uses_instance() {
        let unit = UnitBuilder::new()
            .class(ClassBuilder::new("A").method(private("caller", vec![call_to("inherited"), ret(int(0))])))
            .build();

        let analysis = analyze_unit(&unit);
        assert!(analysis.usage.contains(&sig("caller")));
    }

    #[test]
    fn test_mutual_recursion_without_state_is_eligible() {
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .method(private("ping", vec![call_to("pong"), ret(int(0))]))
                    .method(private("pong", vec![call_to("ping"), ret(int(0))])),
            )
            .build();

        let analysis = analyze_unit(&unit);
        assert!(analysis.usage.is_empty());
    }

    #[test]
    fn test_late_ineligibility_propagates() {
        // a -> b -> c, and c reads state: a is only marked once b is
        let x = FieldSignature::new("A", "x", "int");
        let unit = UnitBuilder::new()
            .class(
                ClassBuilder::new("A")
                    .field(FieldBuilder::new("int", "x"))
                    .method(private("a", vec![call_to("b"), ret(int(0))]))
                    .method(private("b", vec![call_to("c"), ret(int(0))]))
                    .method(private("c", vec![ret(field_ref("x", x))])),
            )
            .build();

        let analysis = analyze_unit(&unit);
        assert_eq!(analysis.usage.len(), 3);
    }

    #[test]
    fn test_top_level_and_fields() {
        let unit = UnitBuilder::new()
            .class(ClassBuilder::new("A").field(FieldBuilder::new("int", "x")))
            .class(ClassBuilder::new("B").nested(ClassBuilder::new("C")))
            .build();

        let analysis = analyze_unit(&unit);
        assert_eq!(analysis.instance_fields.len(), 1);
        assert_eq!(analysis.top_level.len(), 2);
        assert!(!analysis.top_level.contains("B.C"));
    }

    #[test]
    fn test_run_reports_in_source_order() {
        let unit = UnitBuilder::new()
            .path("A.java")
            .class(
                ClassBuilder::new("A")
                    .method(private("first", vec![ret(int(1))]))
                    .method(MethodBuilder::new("int", "second").modifiers(&[Final]).body(vec![ret(int(2))])),
            )
            .build();

        let outcome = Orchestrator::default().run(unit);
        assert!(outcome.changed());
        assert_eq!(outcome.report.source_path.as_deref(), Some("A.java"));
        let names: Vec<_> = outcome.report.changes.iter().map(|c| c.method.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(outcome.report.changes[1].before, "final");
        assert_eq!(outcome.report.changes[1].after, "static final");
    }
}
