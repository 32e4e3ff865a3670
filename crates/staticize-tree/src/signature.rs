//! Value-based identity for fields and methods
//!
//! Tree nodes are replaced wholesale whenever a pass rewrites them, so any set
//! that must outlive a rewrite keys on these signatures rather than on node
//! addresses. Two signatures are equal when they name the same member of the
//! same declaring type, whichever tree snapshot they were read from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved identity of a field variable: declaring type, name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldSignature {
    /// Fully qualified name of the declaring type.
    pub owner: String,
    /// Variable name.
    pub name: String,
    /// Fully qualified variable type.
    #[serde(rename = "type")]
    pub ty: String,
}

impl FieldSignature {
    /// Create a field signature.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{name={},type={}}}", self.owner, self.name, self.ty)
    }
}

/// Resolved identity of a method: declaring type, name, parameter types and
/// return type.
///
/// The declaring type doubles as the method's back-reference to its enclosing
/// class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Fully qualified name of the declaring type.
    pub owner: String,
    /// Method name.
    pub name: String,
    /// Fully qualified parameter types, in declaration order.
    pub params: Vec<String>,
    /// Fully qualified return type (`void` for none).
    pub return_type: String,
}

impl MethodSignature {
    /// Create a method signature.
    pub fn new<I, S>(
        owner: impl Into<String>,
        name: impl Into<String>,
        params: I,
        return_type: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owner: owner.into(),
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            return_type: return_type.into(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{name={},return={},parameters=[{}]}}",
            self.owner,
            self.name,
            self.return_type,
            self.params.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_field_signature_display() {
        let sig = FieldSignature::new("com.example.Utilities", "myString", "java.lang.String");
        assert_eq!(
            sig.to_string(),
            "com.example.Utilities{name=myString,type=java.lang.String}"
        );
    }

    #[test]
    fn test_method_signature_display() {
        let sig = MethodSignature::new("A", "add", ["int", "int"], "int");
        assert_eq!(sig.to_string(), "A{name=add,return=int,parameters=[int,int]}");
    }

    #[test]
    fn test_equal_signatures_share_a_set_slot() {
        let mut set = FxHashSet::default();
        set.insert(FieldSignature::new("A", "x", "int"));
        assert!(set.contains(&FieldSignature::new("A", "x", "int")));
        assert!(!set.contains(&FieldSignature::new("B", "x", "int")));
        assert!(!set.contains(&FieldSignature::new("A", "x", "long")));
    }

    #[test]
    fn test_overloads_are_distinct() {
        let a = MethodSignature::new("A", "f", ["int"], "void");
        let b = MethodSignature::new("A", "f", ["long"], "void");
        assert_ne!(a, b);
    }
}
