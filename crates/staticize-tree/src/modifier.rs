//! Declaration modifiers
//!
//! [`ModifierKind`] variants are declared in canonical display order, the order
//! style checkers expect:
//!
//! ```text
//! public protected private abstract default static sealed non-sealed
//! final transient volatile synchronized native strictfp
//! ```
//!
//! The derived `Ord` follows that order, so sorting a modifier list by kind
//! puts it in canonical order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierKind {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `default` (interface methods)
    Default,
    /// `static`
    Static,
    /// `sealed`
    Sealed,
    /// `non-sealed`
    NonSealed,
    /// `final`
    Final,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `strictfp`
    Strictfp,
}

impl ModifierKind {
    /// Source keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            ModifierKind::Public => "public",
            ModifierKind::Protected => "protected",
            ModifierKind::Private => "private",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Default => "default",
            ModifierKind::Static => "static",
            ModifierKind::Sealed => "sealed",
            ModifierKind::NonSealed => "non-sealed",
            ModifierKind::Final => "final",
            ModifierKind::Transient => "transient",
            ModifierKind::Volatile => "volatile",
            ModifierKind::Synchronized => "synchronized",
            ModifierKind::Native => "native",
            ModifierKind::Strictfp => "strictfp",
        }
    }

    /// Position in the canonical order (0 = first).
    pub fn canonical_rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Whitespace preceding a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Space {
    /// The raw whitespace text.
    pub whitespace: String,
}

impl Space {
    /// No whitespace.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single space.
    pub fn single() -> Self {
        Self::new(" ")
    }

    /// Arbitrary whitespace.
    pub fn new(whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
        }
    }

    /// Whether there is no whitespace at all.
    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty()
    }

    /// The whitespace text.
    pub fn as_str(&self) -> &str {
        &self.whitespace
    }
}

/// A modifier occurrence in a declaration's modifier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    /// Whitespace before the keyword.
    pub prefix: Space,
    /// The keyword.
    pub kind: ModifierKind,
}

impl Modifier {
    /// Create a modifier with the given leading whitespace.
    pub fn new(prefix: Space, kind: ModifierKind) -> Self {
        Self { prefix, kind }
    }
}

/// Lay out modifier keywords the way they are usually written: the first one
/// with no leading whitespace, every following one after a single space.
pub fn layout(kinds: &[ModifierKind]) -> Vec<Modifier> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let prefix = if i == 0 { Space::empty() } else { Space::single() };
            Modifier::new(prefix, kind)
        })
        .collect()
}

/// Whether `modifiers` contains `kind`.
pub fn has_modifier(modifiers: &[Modifier], kind: ModifierKind) -> bool {
    modifiers.iter().any(|m| m.kind == kind)
}

/// Render a modifier list exactly as laid out, whitespace included.
pub fn render(modifiers: &[Modifier]) -> String {
    let mut out = String::new();
    for m in modifiers {
        out.push_str(m.prefix.as_str());
        out.push_str(m.kind.keyword());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut kinds = vec![
            ModifierKind::Final,
            ModifierKind::Static,
            ModifierKind::Public,
            ModifierKind::Synchronized,
            ModifierKind::Abstract,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                ModifierKind::Public,
                ModifierKind::Abstract,
                ModifierKind::Static,
                ModifierKind::Final,
                ModifierKind::Synchronized,
            ]
        );
    }

    #[test]
    fn test_visibility_ranks_before_static() {
        for kind in [ModifierKind::Public, ModifierKind::Protected, ModifierKind::Private] {
            assert!(kind.canonical_rank() < ModifierKind::Static.canonical_rank());
        }
        assert!(ModifierKind::Final.canonical_rank() > ModifierKind::Static.canonical_rank());
    }

    #[test]
    fn test_layout_and_render() {
        let mods = layout(&[ModifierKind::Private, ModifierKind::Final]);
        assert_eq!(render(&mods), "private final");
        assert!(has_modifier(&mods, ModifierKind::Final));
        assert!(!has_modifier(&mods, ModifierKind::Static));
    }

    #[test]
    fn test_render_keeps_irregular_spacing() {
        let mods = vec![
            Modifier::new(Space::empty(), ModifierKind::Final),
            Modifier::new(Space::new("  "), ModifierKind::Public),
        ];
        assert_eq!(render(&mods), "final  public");
    }
}
