//! Modifier layout normalization
//!
//! After a modifier is inserted the list's whitespace no longer lines up:
//! the new keyword has no prefix of its own and may have displaced the first
//! keyword. These helpers restore the usual layout.

use staticize_tree::modifier::{Modifier, Space};

/// Stable sort into canonical order (`public static final`, ...).
pub fn sort_canonical(modifiers: &mut [Modifier]) {
    modifiers.sort_by_key(|m| m.kind.canonical_rank());
}

/// Give the first modifier `leading` and every following one a single space.
pub fn autoformat_modifiers(modifiers: &mut [Modifier], leading: Space) {
    let mut iter = modifiers.iter_mut();
    if let Some(first) = iter.next() {
        first.prefix = leading;
    }
    for m in iter {
        m.prefix = Space::single();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staticize_tree::modifier::{render, ModifierKind};

    #[test]
    fn test_sort_canonical() {
        let mut mods = vec![
            Modifier::new(Space::empty(), ModifierKind::Final),
            Modifier::new(Space::single(), ModifierKind::Public),
            Modifier::new(Space::single(), ModifierKind::Static),
        ];
        sort_canonical(&mut mods);
        let kinds: Vec<_> = mods.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![ModifierKind::Public, ModifierKind::Static, ModifierKind::Final]
        );
    }

    #[test]
    fn test_autoformat_keeps_leading_whitespace() {
        let mut mods = vec![
            Modifier::new(Space::single(), ModifierKind::Static),
            Modifier::new(Space::new("\t"), ModifierKind::Private),
            Modifier::new(Space::new("   "), ModifierKind::Final),
        ];
        autoformat_modifiers(&mut mods, Space::new("\n"));
        assert_eq!(render(&mods), "\nstatic private final");
    }

    #[test]
    fn test_autoformat_empty_list() {
        let mut mods: Vec<Modifier> = Vec::new();
        autoformat_modifiers(&mut mods, Space::single());
        assert!(mods.is_empty());
    }
}
