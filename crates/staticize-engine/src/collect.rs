//! Instance field collection
//!
//! A field is an instance field exactly when its declaration lacks `static`.
//! Only direct members of a class are inspected: fields of nested classes
//! belong to those classes.

use rustc_hash::FxHashSet;
use staticize_tree::ast::{ClassDecl, ClassMember, CompilationUnit};
use staticize_tree::FieldSignature;

/// Signatures of the instance fields declared directly in `class`.
///
/// Every co-declared variable of a non-static field declaration contributes
/// its signature; variables the resolver could not bind are skipped.
pub fn collect(class: &ClassDecl) -> FxHashSet<FieldSignature> {
    let mut fields = FxHashSet::default();
    for member in &class.members {
        let ClassMember::Field(decl) = member else {
            continue;
        };
        if decl.is_static() {
            continue;
        }
        fields.extend(decl.variables.iter().filter_map(|v| v.signature.clone()));
    }
    fields
}

/// Union of [`collect`] over every top-level class of the unit.
pub fn collect_unit(unit: &CompilationUnit) -> FxHashSet<FieldSignature> {
    let mut fields = FxHashSet::default();
    for class in &unit.classes {
        fields.extend(collect(class));
    }
    fields
}
