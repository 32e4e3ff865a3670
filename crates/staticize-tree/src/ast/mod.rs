//! Syntax tree nodes
//!
//! The tree mirrors a type-attributed Java compilation unit. Resolution
//! results arrive pre-attached: identifiers that name a field carry its
//! [`FieldSignature`](crate::FieldSignature), declarations carry their own
//! signatures, and invocations carry their resolved target. Any of these may
//! be absent when the resolver could not bind the name.

mod declaration;
mod expression;
mod statement;
pub mod visitor;
pub mod visitor_mut;

pub use declaration::*;
pub use expression::*;
pub use statement::*;
pub use visitor::Visitor;
pub use visitor_mut::VisitorMut;

/// A reference to a type as written in source (`String`, `List<Foo>`, `int[]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// The type as written.
    pub name: String,
}

impl TypeRef {
    /// Create a type reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
