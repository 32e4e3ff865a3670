//! Eligibility classification
//!
//! A method may be made static when all of these hold:
//!
//! 1. it has a resolved signature that is not in the usage set
//! 2. it is not already `static`
//! 3. it cannot be overridden (`private` or `final`)
//! 4. it has a body and is not `abstract`
//! 5. it is declared directly in a top-level class
//!
//! Package-private, `protected` and `public` methods without `final` may be
//! overridden, so making them static would change dispatch.

use std::fmt;

use rustc_hash::FxHashSet;
use staticize_tree::ast::MethodDecl;
use staticize_tree::MethodSignature;

/// Why a method was or was not judged eligible. Checks run in the order
/// listed, so the verdict names the first failing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Safe to make static.
    Eligible,
    /// The resolver could not bind the method.
    Unresolved,
    /// Needs the current instance, directly or through a call.
    UsesInstanceState,
    /// Already carries `static`.
    AlreadyStatic,
    /// Neither `private` nor `final`.
    Overridable,
    /// `abstract`, or no body.
    Abstract,
    /// Declared in a nested, local or anonymous class.
    NotTopLevel,
}

impl Verdict {
    /// Whether the method may be rewritten.
    pub fn is_eligible(self) -> bool {
        self == Verdict::Eligible
    }

    /// Kebab-case name, as used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Eligible => "eligible",
            Verdict::Unresolved => "unresolved",
            Verdict::UsesInstanceState => "uses-instance-state",
            Verdict::AlreadyStatic => "already-static",
            Verdict::Overridable => "overridable",
            Verdict::Abstract => "abstract",
            Verdict::NotTopLevel => "not-top-level",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Judge `method` against the finished usage set and the unit's top-level
/// class names.
pub fn classify(
    method: &MethodDecl,
    usage: &FxHashSet<MethodSignature>,
    top_level: &FxHashSet<String>,
) -> Verdict {
    let Some(signature) = &method.signature else {
        return Verdict::Unresolved;
    };
    if usage.contains(signature) {
        return Verdict::UsesInstanceState;
    }
    if method.is_static() {
        return Verdict::AlreadyStatic;
    }
    if !method.is_non_overridable() {
        return Verdict::Overridable;
    }
    if method.is_abstract() {
        return Verdict::Abstract;
    }
    if !top_level.contains(&signature.owner) {
        return Verdict::NotTopLevel;
    }
    Verdict::Eligible
}

/// Whether `method` may be made static.
pub fn is_eligible(
    method: &MethodDecl,
    usage: &FxHashSet<MethodSignature>,
    top_level: &FxHashSet<String>,
) -> bool {
    classify(method, usage, top_level).is_eligible()
}
