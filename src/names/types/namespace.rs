//! Namespace names.
//!
//! A namespace identifier is the dotted namespace path, e.g. `System.Collections.Generic`.
//! The global namespace is the empty identifier.

use crate::names::NameKind;

name_value! {
    /// A dotted namespace path.
    NamespaceName, NameKind::Namespace, "???", is_namespace_identifier
}

fn is_namespace_identifier(identifier: &str) -> bool {
    if identifier.is_empty() || identifier == "???" {
        return true;
    }
    identifier.split('.').all(|segment| {
        !segment.is_empty()
            && !segment.contains(|c: char| {
                c.is_whitespace() || matches!(c, ',' | '[' | ']' | '(' | ')' | '+' | '`' | ':')
            })
    })
}

impl NamespaceName {
    /// The global namespace.
    #[must_use]
    pub fn global() -> Self {
        Self::new("")
    }

    /// Whether this is the global namespace.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.identifier().is_empty()
    }

    /// The last segment of the path, empty for the global namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        let identifier = self.identifier();
        match identifier.rfind('.') {
            Some(dot) => &identifier[dot + 1..],
            None => identifier,
        }
    }

    /// The enclosing namespace.
    ///
    /// Top-level namespaces have the global namespace as parent. The global and the unknown
    /// namespace have none.
    #[must_use]
    pub fn parent_namespace(&self) -> Option<NamespaceName> {
        if self.is_global() || self.is_unknown() {
            return None;
        }
        let identifier = self.identifier();
        match identifier.rfind('.') {
            Some(dot) => Some(NamespaceName::new(&identifier[..dot])),
            None => Some(NamespaceName::global()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_parts() {
        let ns = NamespaceName::new("System.Collections.Generic");
        assert_eq!(ns.name(), "Generic");
        assert!(!ns.is_global());

        let parent = ns.parent_namespace().unwrap();
        assert_eq!(parent.identifier(), "System.Collections");

        let top = NamespaceName::new("System");
        let global = top.parent_namespace().unwrap();
        assert!(global.is_global());
        assert!(global.parent_namespace().is_none());
    }

    #[test]
    fn test_unknown_namespace() {
        assert!(NamespaceName::new("a..b").is_unknown());
        assert!(NamespaceName::new("a b").is_unknown());
        assert!(NamespaceName::new("A[]").is_unknown());
        assert!(NamespaceName::unknown().parent_namespace().is_none());
        assert!(!NamespaceName::global().is_unknown());
    }
}
