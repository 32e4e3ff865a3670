//! Staticize Syntax Tree
//!
//! Type-resolved syntax tree model for Java-like compilation units.
//!
//! The tree is produced by an external parser and resolver. This crate only
//! describes its shape:
//! - [`ast`]: declarations, statements, expressions and the visitor traits
//! - [`signature`]: value-based identity keys for fields and methods
//! - [`modifier`]: modifier keywords and their canonical order
//! - [`build`]: builders for assembling trees by hand
//! - [`printer`]: renders a tree back to source text

#![warn(missing_docs)]

pub mod ast;
pub mod build;
pub mod modifier;
pub mod printer;
pub mod signature;
pub mod span;

pub use modifier::{Modifier, ModifierKind, Space};
pub use signature::{FieldSignature, MethodSignature};
pub use span::{Position, Span};
