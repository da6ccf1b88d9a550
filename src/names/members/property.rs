//! Property and indexer names.
//!
//! ```text
//! [set " "][get " "][static " "] "[" property-type "] [" declaring-type "]." name ["(" parameters ")"]
//! ```
//!
//! The `get` and `set` modifiers record which accessors the property declares. Indexers carry
//! their parameters in a trailing list, e.g. `get [T, A] [D, A].Item([System.Int32, mscorlib, 4.0.0.0] i)`.

use crate::{
    names::{
        members::shape::{is_plain_member_name, name_section, MemberShape, ParameterList},
        parameter::parse_parameter_list,
        MemberModifiers, NameKind, ParameterName,
    },
    Result,
};

name_value! {
    /// The name of a property or indexer.
    PropertyName, NameKind::Property, "[?] [?].???", is_property_identifier
}

member_accessors!(PropertyName);

pub(crate) fn is_property_identifier(identifier: &str) -> bool {
    let Some(shape) = MemberShape::parse(identifier) else {
        return false;
    };
    match shape.parameter_list(identifier) {
        ParameterList::Absent => is_plain_member_name(shape.name_section(identifier)),
        ParameterList::Present(open, _) => {
            is_plain_member_name(&identifier[shape.name_start..open])
        }
        ParameterList::Misplaced => false,
    }
}

impl PropertyName {
    fn parameter_list(&self) -> Option<(usize, usize)> {
        let s = self.identifier();
        match MemberShape::parse(s)?.parameter_list(s) {
            ParameterList::Present(open, close) => Some((open, close)),
            _ => None,
        }
    }

    /// The property name without indexer parameters, e.g. `Item`.
    #[must_use]
    pub fn name(&self) -> &str {
        let section = name_section(self.identifier());
        match self.parameter_list() {
            Some((open, close)) => &section[..section.len() - (close + 1 - open)],
            None => section,
        }
    }

    /// Same as [`PropertyName::name`].
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.name()
    }

    /// Whether the property declares a getter.
    #[must_use]
    pub fn has_getter(&self) -> bool {
        self.modifier_flags().contains(MemberModifiers::GET)
    }

    /// Whether the property declares a setter.
    #[must_use]
    pub fn has_setter(&self) -> bool {
        self.modifier_flags().contains(MemberModifiers::SET)
    }

    /// Whether the property is an indexer, i.e. carries a parameter list.
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.parameter_list().is_some()
    }

    /// The indexer parameters; empty for plain properties and for lists that cannot be decoded.
    #[must_use]
    pub fn parameters(&self) -> Vec<ParameterName> {
        self.try_parameters().unwrap_or_else(|error| {
            log::debug!("dropping parameters of '{}': {}", self.identifier(), error);
            Vec::new()
        })
    }

    /// The indexer parameters, failing on fragments that are not parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a fragment of the list is not a parameter.
    pub fn try_parameters(&self) -> Result<Vec<ParameterName>> {
        match self.parameter_list() {
            Some((open, close)) => parse_parameter_list(self.identifier(), open, close),
            None => Ok(Vec::new()),
        }
    }

    /// Whether the indexer has at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_accessors() {
        let uut = PropertyName::new(
            "set get static [System.Int32, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0].Count",
        );
        assert!(uut.has_getter());
        assert!(uut.has_setter());
        assert!(uut.is_static());
        assert!(!uut.is_indexer());
        assert_eq!(uut.name(), "Count");
        assert!(uut.parameters().is_empty());

        let read_only = PropertyName::new("get [System.Int32, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0].Count");
        assert!(read_only.has_getter());
        assert!(!read_only.has_setter());
    }

    #[test]
    fn test_modifier_order_is_irrelevant() {
        let a = PropertyName::new("static get set [V, A] [D, A].P");
        let b = PropertyName::new("set get static [V, A] [D, A].P");
        assert_eq!(a.modifier_flags(), b.modifier_flags());
        assert!(a.has_setter() && a.is_static());
    }

    #[test]
    fn test_indexer() {
        let uut = PropertyName::new(
            "get [System.String, mscorlib, 4.0.0.0] [My.Map, A, 1.0.0.0].Item([System.Int32, mscorlib, 4.0.0.0] index, [K, A] key)",
        );
        assert!(uut.is_indexer());
        assert_eq!(uut.name(), "Item");
        assert!(uut.has_parameters());
        let parameters = uut.parameters();
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].name(), "index");
        assert_eq!(parameters[1].value_type().identifier(), "K, A");
    }

    #[test]
    fn test_undecodable_indexer_parameters() {
        let uut = PropertyName::new("get [V, A] [D, A].Item(nonsense)");
        assert!(!uut.is_unknown());
        assert!(uut.is_indexer());
        assert!(uut.parameters().is_empty());
        assert!(uut.try_parameters().is_err());
    }

    #[test]
    fn test_unknown_property() {
        let unknown = PropertyName::unknown();
        assert!(unknown.is_unknown());
        assert!(!unknown.has_getter());
        assert!(!unknown.is_indexer());
        assert_eq!(unknown.name(), "???");

        for invalid in ["[V, A] [D, A].P(", "[V, A] [D, A].P()x", "[V, A] [D, A].(a)", "[V, A] [D, A].P Q"] {
            assert!(PropertyName::new(invalid).is_unknown(), "{}", invalid);
        }
    }
}
