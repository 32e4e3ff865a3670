//! The `static` insertion itself
//!
//! [`make_static`] is pure: it returns a copy of the method with one extra
//! modifier and leaves the body, name, parameters and return type alone.

use staticize_tree::ast::MethodDecl;
use staticize_tree::modifier::{Modifier, ModifierKind, Space};

use crate::format::{autoformat_modifiers, sort_canonical};

/// Placement of the inserted `static` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierOrder {
    /// Insert, then sort the whole list canonically.
    Canonical,
    /// Insert at the canonical position; leave the other keywords where they are.
    Preserve,
}

/// Index at which `static` belongs in `modifiers`: before the first keyword
/// that ranks after it, or at the end.
pub fn static_insertion_index(modifiers: &[Modifier]) -> usize {
    let rank = ModifierKind::Static.canonical_rank();
    modifiers
        .iter()
        .position(|m| m.kind.canonical_rank() > rank)
        .unwrap_or(modifiers.len())
}

/// Copy of `method` carrying `static`. A method that is already static is
/// returned unchanged.
pub fn make_static(method: &MethodDecl, order: ModifierOrder) -> MethodDecl {
    let mut result = method.clone();
    if result.is_static() {
        return result;
    }

    let leading = result
        .modifiers
        .first()
        .map(|m| m.prefix.clone())
        .unwrap_or_default();
    let index = static_insertion_index(&result.modifiers);
    result
        .modifiers
        .insert(index, Modifier::new(Space::empty(), ModifierKind::Static));

    if order == ModifierOrder::Canonical {
        sort_canonical(&mut result.modifiers);
    }
    autoformat_modifiers(&mut result.modifiers, leading);
    result
}
