//! Parameter names.
//!
//! ```text
//! [modifiers " "] "[" value-type "] " name
//! ```
//!
//! The modifier section is any combination of `params`, `out`, `this`, `opt` and `ref`
//! (see [`ParameterModifiers`]). Parameters occur standalone and inside the parameter lists of
//! methods, indexers and lambdas; all three share [`parse_parameter_list`].
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::ParameterName;
//!
//! let p = ParameterName::new("opt [System.Boolean, mscore, Version=4.0.0.0] optional");
//! assert_eq!(p.name(), "optional");
//! assert_eq!(p.value_type().identifier(), "System.Boolean, mscore, Version=4.0.0.0");
//! assert!(p.is_optional());
//! assert!(!p.is_output());
//! ```

use crate::{
    names::{
        modifiers::{is_modifier_section, ParameterModifiers},
        scan::{find_corresponding_close_bracket, split_top_level},
        NameKind, TypeName,
    },
    Result,
};

name_value! {
    /// The name of a method, indexer or lambda parameter.
    ParameterName, NameKind::Parameter, "[?] ???", is_parameter_identifier
}

/// Byte positions of the parts of a parameter identifier.
struct ParameterLayout {
    /// the opening bracket of the value type
    open: usize,
    /// the closing bracket of the value type
    close: usize,
}

impl ParameterLayout {
    fn parse(s: &str) -> Option<ParameterLayout> {
        let open = s.find('[')?;
        if !is_modifier_section(&s[..open]) {
            return None;
        }
        let close = find_corresponding_close_bracket(s, open)?;
        if s[open + 1..close].trim().is_empty() || s.as_bytes().get(close + 1) != Some(&b' ') {
            return None;
        }
        is_simple_name(&s[close + 2..]).then_some(ParameterLayout { open, close })
    }
}

/// Whether `name` is a usable variable name: non-empty, free of whitespace, brackets and commas.
pub(crate) fn is_simple_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|c: char| {
            c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | ',')
        })
}

pub(crate) fn is_parameter_identifier(identifier: &str) -> bool {
    ParameterLayout::parse(identifier).is_some()
}

/// Parses the parameter list enclosed by the parentheses at `open` and `close`.
///
/// Fragments are split at top-level commas only, so the commas of assembly names and generic
/// argument lists inside a parameter type never split a parameter. Whitespace around each
/// fragment is ignored.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the parentheses do not match or a fragment is not a
/// parameter identifier.
pub(crate) fn parse_parameter_list(s: &str, open: usize, close: usize) -> Result<Vec<ParameterName>> {
    let Some(fragments) = split_top_level(s, open, close) else {
        return Err(malformed_error!(
            "Unbalanced parameter list in '{}'",
            s
        ));
    };

    fragments
        .into_iter()
        .map(|(from, to)| {
            let fragment = s[from..to].trim();
            if is_parameter_identifier(fragment) {
                Ok(ParameterName::new(fragment))
            } else {
                Err(malformed_error!(
                    "Invalid parameter '{}' in '{}'",
                    fragment,
                    s
                ))
            }
        })
        .collect()
}

impl ParameterName {
    fn layout(&self) -> Option<ParameterLayout> {
        ParameterLayout::parse(self.identifier())
    }

    /// The modifier section without the trailing space, e.g. `params` or `this ref`.
    #[must_use]
    pub fn modifiers(&self) -> &str {
        match self.layout() {
            Some(layout) => self.identifier()[..layout.open].trim_end(),
            None => "",
        }
    }

    /// The decoded modifier tokens.
    #[must_use]
    pub fn modifier_flags(&self) -> ParameterModifiers {
        ParameterModifiers::parse(self.modifiers())
    }

    /// The type of the parameter.
    #[must_use]
    pub fn value_type(&self) -> TypeName {
        match self.layout() {
            Some(layout) => TypeName::new(self.identifier()[layout.open + 1..layout.close].trim()),
            None => TypeName::unknown(),
        }
    }

    /// The parameter name, `???` for the unknown parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.layout() {
            Some(layout) => &self.identifier()[layout.close + 2..],
            None => "???",
        }
    }

    /// `out` parameter.
    #[must_use]
    pub fn is_output(&self) -> bool {
        self.modifier_flags().contains(ParameterModifiers::OUT)
    }

    /// `params` argument array.
    #[must_use]
    pub fn is_parameter_array(&self) -> bool {
        self.modifier_flags().contains(ParameterModifiers::PARAMS)
    }

    /// Optional parameter with a default value.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.modifier_flags().contains(ParameterModifiers::OPT)
    }

    /// Whether the argument is passed by reference: the parameter carries `ref`, or its type is
    /// a reference type.
    #[must_use]
    pub fn is_passed_by_reference(&self) -> bool {
        self.modifier_flags().contains(ParameterModifiers::REF)
            || self.value_type().is_reference_type()
    }

    /// Receiver of an extension method (`this`).
    #[must_use]
    pub fn is_extension_method_parameter(&self) -> bool {
        self.modifier_flags().contains(ParameterModifiers::THIS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_parameter() {
        let uut = ParameterName::new("opt [System.Boolean, mscore, Version=4.0.0.0] optional");
        assert_eq!(uut.name(), "optional");
        assert_eq!(
            uut.value_type().identifier(),
            "System.Boolean, mscore, Version=4.0.0.0"
        );
        assert_eq!(uut.modifiers(), "opt");
        assert!(uut.is_optional());
        assert!(!uut.is_output());
        assert!(!uut.is_parameter_array());
        assert!(!uut.is_passed_by_reference());
    }

    #[test]
    fn test_modifiers() {
        let uut = ParameterName::new("this ref [System.Int32, mscore, 4.0.0.0] p");
        assert!(uut.is_extension_method_parameter());
        assert!(uut.is_passed_by_reference());
        assert_eq!(
            uut.modifier_flags(),
            ParameterModifiers::THIS | ParameterModifiers::REF
        );

        let output = ParameterName::new("out [System.Int32, mscore, 4.0.0.0] result");
        assert!(output.is_output());
        assert!(!output.is_passed_by_reference());

        let array = ParameterName::new("params [System.Int32[], mscore, 4.0.0.0] values");
        assert!(array.is_parameter_array());
        assert!(array.value_type().is_array());
    }

    #[test]
    fn test_reference_type_passed_by_reference() {
        let uut = ParameterName::new("[System.String, mscore, 4.0.0.0] text");
        assert!(uut.modifier_flags().is_empty());
        assert!(uut.is_passed_by_reference());
    }

    #[test]
    fn test_generic_value_type() {
        let uut = ParameterName::new("[G`1[[T -> X, A, 1.0.0.0]], A, 1.0.0.0] g");
        assert_eq!(uut.name(), "g");
        assert_eq!(uut.value_type().type_parameters().len(), 1);
    }

    #[test]
    fn test_unknown_parameter() {
        let unknown = ParameterName::unknown();
        assert_eq!(unknown.identifier(), "[?] ???");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "???");
        assert!(unknown.value_type().is_unknown());
        assert!(!unknown.is_passed_by_reference());

        for invalid in [
            "",
            "p",
            "[A, a] ",
            "[A, a]p",
            "[A, a] p q",
            "[] p",
            "[A, a p",
            "static[A, a] p",
            "Out [A, a] p",
        ] {
            assert!(ParameterName::new(invalid).is_unknown(), "{}", invalid);
        }
    }

    #[test]
    fn test_parse_parameter_list() {
        let s = "(out [ParameterType, AnAssembly, Version=1.2.3.4] param0)";
        let parameters = parse_parameter_list(s, 0, s.len() - 1).unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name(), "param0");
        assert!(parameters[0].is_output());

        let s = "( [A, a] p , [B, b] q )";
        let parameters = parse_parameter_list(s, 0, s.len() - 1).unwrap();
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[1].identifier(), "[B, b] q");

        assert!(parse_parameter_list("()", 0, 1).unwrap().is_empty());
        assert!(parse_parameter_list("([A, a] p, )", 0, 11).is_err());
        assert!(parse_parameter_list("(garbage)", 0, 8).is_err());
    }
}
