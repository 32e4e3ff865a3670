//! Declaration nodes: compilation units, classes and their members

#![allow(missing_docs)]

use rustc_hash::FxHashSet;

use super::{Block, Expression, TypeRef};
use crate::modifier::{has_modifier, Modifier, ModifierKind};
use crate::signature::{FieldSignature, MethodSignature};
use crate::span::Span;

// ============================================================================
// Compilation Unit
// ============================================================================

/// One source file: an ordered sequence of top-level type declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    /// Path the unit was parsed from, if any.
    pub source_path: Option<String>,
    /// `package` declaration, if any.
    pub package: Option<String>,
    /// Imported names, in source order.
    pub imports: Vec<String>,
    /// Top-level type declarations, in source order.
    pub classes: Vec<ClassDecl>,
}

impl CompilationUnit {
    /// Create a unit with no package, imports or source path.
    pub fn new(classes: Vec<ClassDecl>) -> Self {
        Self {
            source_path: None,
            package: None,
            imports: Vec::new(),
            classes,
        }
    }

    /// Fully qualified names of the unit's direct (top-level) class members.
    pub fn top_level_types(&self) -> FxHashSet<String> {
        self.classes.iter().map(|c| c.ty.clone()).collect()
    }

    /// Whether the unit declares no types.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

// ============================================================================
// Classes
// ============================================================================

/// Flavor of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
    /// `record`
    Record,
}

impl ClassKind {
    /// Source keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Record => "record",
        }
    }
}

/// A named type declaration: top-level, nested member or local.
///
/// Whether a class is top-level is a property of where it sits: it is
/// top-level exactly when it is one of [`CompilationUnit::classes`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Modifier list, in source order.
    pub modifiers: Vec<Modifier>,
    /// class / interface / enum / record
    pub kind: ClassKind,
    /// Simple name.
    pub name: String,
    /// Fully qualified name as reported by the resolver.
    pub ty: String,
    /// `extends` clause.
    pub extends: Option<TypeRef>,
    /// `implements` clause (or `extends` list for interfaces).
    pub implements: Vec<TypeRef>,
    /// Members, in source order.
    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl ClassDecl {
    /// Whether the class carries `kind`.
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        has_modifier(&self.modifiers, kind)
    }

    /// Direct method members.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Direct field members.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            ClassMember::Field(field) => Some(field),
            _ => None,
        })
    }
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Initializer(InitializerBlock),
    /// Nested member type
    Class(ClassDecl),
}

// ============================================================================
// Fields
// ============================================================================

/// Field declaration: one modifier list shared by every co-declared variable.
///
/// ```text
/// private int x = 1, y;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    /// Co-declared variables (at least one).
    pub variables: Vec<NamedVariable>,
    pub span: Span,
}

impl FieldDecl {
    /// Whether the declaration carries `kind`.
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        has_modifier(&self.modifiers, kind)
    }

    /// Whether the declaration is `static`.
    pub fn is_static(&self) -> bool {
        self.has_modifier(ModifierKind::Static)
    }
}

/// One variable of a [`FieldDecl`].
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVariable {
    pub name: String,
    pub initializer: Option<Expression>,
    /// `None` when the resolver could not bind the variable.
    pub signature: Option<FieldSignature>,
    pub span: Span,
}

// ============================================================================
// Methods and constructors
// ============================================================================

/// Formal parameter of a method, constructor or catch clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// `final` and friends.
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: String,
    /// `T... name`
    pub varargs: bool,
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Modifier list, in source order.
    pub modifiers: Vec<Modifier>,
    /// Type parameter names (`<T, U>`).
    pub type_params: Vec<String>,
    pub return_type: TypeRef,
    pub name: String,
    pub params: Vec<Parameter>,
    pub throws: Vec<TypeRef>,
    /// None for abstract and interface methods
    pub body: Option<Block>,
    /// `None` when the resolver could not bind the method.
    pub signature: Option<MethodSignature>,
    pub span: Span,
}

impl MethodDecl {
    /// Whether the method carries `kind`.
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        has_modifier(&self.modifiers, kind)
    }

    /// Whether the method is `static`.
    pub fn is_static(&self) -> bool {
        self.has_modifier(ModifierKind::Static)
    }

    /// Whether the method is abstract, either declared so or lacking a body.
    pub fn is_abstract(&self) -> bool {
        self.has_modifier(ModifierKind::Abstract) || self.body.is_none()
    }

    /// Whether no subclass can override the method (`private` or `final`).
    pub fn is_non_overridable(&self) -> bool {
        self.has_modifier(ModifierKind::Private) || self.has_modifier(ModifierKind::Final)
    }
}

/// Constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub params: Vec<Parameter>,
    pub throws: Vec<TypeRef>,
    pub body: Block,
    pub span: Span,
}

/// Instance (`{ ... }`) or static (`static { ... }`) initializer block.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializerBlock {
    pub is_static: bool,
    pub body: Block,
    pub span: Span,
}
