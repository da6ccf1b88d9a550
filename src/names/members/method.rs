//! Method and constructor names.
//!
//! ```text
//! [static " "] "[" return-type "] [" declaring-type "]." name ["`" N] ["[[" T "],[" U "]]"] "(" parameters ")"
//! ```
//!
//! Generic methods carry their type parameters in a list between the name and the parameter
//! list. Constructors are named `.ctor`, static constructors `.cctor`, which puts two dots
//! between the declaring type and the name: `[System.Void, mscorlib, 4.0.0.0] [C, A]..ctor()`.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::MethodName;
//!
//! let m = MethodName::new(
//!     "[System.Void, mscorlib, Version=4.0.0.0] [N.C, TestProject].M`1[[T -> System.Object, mscorlib, Version=4.0.0.0]]()",
//! );
//! assert!(m.is_generic_entity());
//! assert_eq!(m.name(), "M");
//! assert_eq!(
//!     m.type_parameters()[0].type_parameter_type().unwrap().identifier(),
//!     "System.Object, mscorlib, Version=4.0.0.0"
//! );
//! ```

use crate::{
    names::{
        members::shape::{is_plain_member_name, MemberShape, ParameterList},
        parameter::parse_parameter_list,
        scan::find_corresponding_close_bracket,
        types::generic_arguments,
        NameKind, ParameterName, TypeName,
    },
    Result,
};

name_value! {
    /// The name of a method or constructor.
    MethodName, NameKind::Method, "[?] [?].???()", is_method_identifier
}

member_accessors!(MethodName);

/// Byte positions of the name section of a method identifier.
struct MethodSections {
    name_start: usize,
    /// end of the plain name, i.e. the generic list or the parameter list
    name_end: usize,
    /// brackets of the type-parameter list
    generic: Option<(usize, usize)>,
    /// parentheses of the parameter list
    parameters: (usize, usize),
}

impl MethodSections {
    fn parse(s: &str) -> Option<MethodSections> {
        let shape = MemberShape::parse(s)?;
        let ParameterList::Present(open, close) = shape.parameter_list(s) else {
            return None;
        };

        let head = &s[shape.name_start..open];
        let (name_end, generic) = match head.find('[') {
            Some(offset) => {
                let list_open = shape.name_start + offset;
                let list_close = find_corresponding_close_bracket(s, list_open)?;
                if list_close + 1 != open {
                    return None;
                }
                generic_arguments(s, list_open, list_close)?;
                (list_open, Some((list_open, list_close)))
            }
            None => (open, None),
        };

        is_plain_member_name(&s[shape.name_start..name_end]).then_some(MethodSections {
            name_start: shape.name_start,
            name_end,
            generic,
            parameters: (open, close),
        })
    }
}

pub(crate) fn is_method_identifier(identifier: &str) -> bool {
    MethodSections::parse(identifier).is_some()
}

impl MethodName {
    fn sections(&self) -> Option<MethodSections> {
        MethodSections::parse(self.identifier())
    }

    /// The method name without type-parameter count and lists, e.g. `M` or `.ctor`.
    #[must_use]
    pub fn name(&self) -> &str {
        let full_name = self.full_name();
        let plain = match self.sections() {
            Some(sections) => &full_name[..sections.name_end - sections.name_start],
            None => full_name,
        };
        match plain.find('`') {
            Some(tick) => &plain[..tick],
            None => plain,
        }
    }

    /// The name including type-parameter count and lists, up to the parameter list, e.g.
    /// ``M`1[[T -> System.Object, mscorlib, 4.0.0.0]]``.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self.sections() {
            Some(sections) => &self.identifier()[sections.name_start..sections.parameters.0],
            None => "???",
        }
    }

    /// The return type; the value type of the method.
    #[must_use]
    pub fn return_type(&self) -> TypeName {
        self.value_type()
    }

    /// The name section from the method name through the closing parenthesis. Equal
    /// signatures identify overrides and implementations across declaring types.
    #[must_use]
    pub fn signature(&self) -> &str {
        match self.sections() {
            Some(sections) => &self.identifier()[sections.name_start..],
            None => "???()",
        }
    }

    /// The parameters; empty if the list cannot be decoded.
    ///
    /// A list with undecodable fragments is reported at debug level and treated as empty. Use
    /// [`MethodName::try_parameters`] to observe the failure.
    #[must_use]
    pub fn parameters(&self) -> Vec<ParameterName> {
        self.try_parameters().unwrap_or_else(|error| {
            log::debug!("dropping parameters of '{}': {}", self.identifier(), error);
            Vec::new()
        })
    }

    /// The parameters, failing on fragments that are not parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a fragment of the list is not a parameter.
    pub fn try_parameters(&self) -> Result<Vec<ParameterName>> {
        let Some(sections) = self.sections() else {
            return Ok(Vec::new());
        };
        let (open, close) = sections.parameters;
        parse_parameter_list(self.identifier(), open, close)
    }

    /// Whether the method has at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// The type parameters of the method itself, bound or free.
    #[must_use]
    pub fn type_parameters(&self) -> Vec<TypeName> {
        let s = self.identifier();
        let Some((open, close)) = self.sections().and_then(|sections| sections.generic) else {
            return Vec::new();
        };
        generic_arguments(s, open, close)
            .unwrap_or_default()
            .into_iter()
            .map(|(from, to)| TypeName::new(&s[from..to]))
            .collect()
    }

    /// Whether the method carries a type-parameter list.
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        self.sections().is_some_and(|sections| sections.generic.is_some())
    }

    /// Whether the method declares type parameters, i.e. has a type-parameter count or list.
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        self.has_type_parameters() || self.full_name().contains('`')
    }

    /// Whether the method is an instance or static constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        matches!(self.name(), ".ctor" | ".cctor")
    }

    /// Whether the method is a static constructor.
    #[must_use]
    pub fn is_static_constructor(&self) -> bool {
        self.name() == ".cctor"
    }

    /// Whether the method is static and its first parameter carries `this`.
    #[must_use]
    pub fn is_extension_method(&self) -> bool {
        self.is_static()
            && self
                .parameters()
                .first()
                .is_some_and(ParameterName::is_extension_method_parameter)
    }

    /// The same method with each bound type parameter of its own list reduced to its short
    /// name: ``M`1[[T -> System.Int32, mscorlib, 4.0.0.0]]()`` becomes ``M`1[[T]]()``.
    #[must_use]
    pub fn without_type_arguments(&self) -> MethodName {
        let s = self.identifier();
        let Some((open, close)) = self.sections().and_then(|sections| sections.generic) else {
            return self.clone();
        };
        let Some(items) = generic_arguments(s, open, close) else {
            return self.clone();
        };

        let mut erased = String::with_capacity(s.len());
        let mut cursor = 0;
        for (from, to) in items {
            erased.push_str(&s[cursor..from]);
            erased.push_str(TypeName::new(&s[from..to]).without_type_arguments().identifier());
            cursor = to;
        }
        erased.push_str(&s[cursor..]);
        MethodName::new(&erased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "[System.Void, mscorlib, Version=4.0.0.0] [N.C, TestProject].M`1[[T -> System.Object, mscorlib, Version=4.0.0.0]]()";

    #[test]
    fn test_generic_method() {
        let uut = MethodName::new(GENERIC);
        assert!(!uut.is_unknown());
        assert!(uut.is_generic_entity());
        assert!(uut.has_type_parameters());
        assert_eq!(uut.name(), "M");
        assert_eq!(
            uut.full_name(),
            "M`1[[T -> System.Object, mscorlib, Version=4.0.0.0]]"
        );
        assert_eq!(uut.declaring_type().identifier(), "N.C, TestProject");

        let parameters = uut.type_parameters();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].type_parameter_short_name(), Some("T"));
        assert_eq!(
            parameters[0].type_parameter_type().unwrap().identifier(),
            "System.Object, mscorlib, Version=4.0.0.0"
        );
        assert!(!uut.has_parameters());
    }

    #[test]
    fn test_plain_method() {
        let uut = MethodName::new(
            "static [System.Int32, mscorlib, 4.0.0.0] [My.Math, A, 1.0.0.0].Add([System.Int32, mscorlib, 4.0.0.0] a, [System.Int32, mscorlib, 4.0.0.0] b)",
        );
        assert!(uut.is_static());
        assert!(!uut.is_generic_entity());
        assert!(uut.return_type().is_simple_type());
        assert_eq!(uut.name(), "Add");
        assert_eq!(
            uut.signature(),
            "Add([System.Int32, mscorlib, 4.0.0.0] a, [System.Int32, mscorlib, 4.0.0.0] b)"
        );

        let parameters = uut.parameters();
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[1].name(), "b");
    }

    #[test]
    fn test_parameter_with_comma_in_type() {
        let uut = MethodName::new(
            "[System.Void, mscorlib, 4.0.0.0] [C, A].M(out [ParameterType, AnAssembly, Version=1.2.3.4] param0)",
        );
        let parameters = uut.parameters();
        assert_eq!(parameters.len(), 1);
        assert!(parameters[0].is_output());
        assert_eq!(
            parameters[0].value_type().identifier(),
            "ParameterType, AnAssembly, Version=1.2.3.4"
        );
    }

    #[test]
    fn test_whitespace_in_parameter_list() {
        let uut = MethodName::new("[V, A] [D, A].M( [P, A] p , [Q, A] q )");
        let names: Vec<String> = uut.parameters().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["p", "q"]);
    }

    #[test]
    fn test_constructors() {
        let ctor = MethodName::new("[System.Void, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0]..ctor()");
        assert!(ctor.is_constructor());
        assert!(!ctor.is_static_constructor());
        assert_eq!(ctor.name(), ".ctor");

        let cctor = MethodName::new("static [System.Void, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0]..cctor()");
        assert!(cctor.is_constructor());
        assert!(cctor.is_static_constructor());

        let method = MethodName::new("[System.Void, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0].ctor()");
        assert!(!method.is_constructor());
    }

    #[test]
    fn test_extension_method() {
        let uut = MethodName::new(
            "static [System.Boolean, mscorlib, 4.0.0.0] [My.Ext, A, 1.0.0.0].IsEmpty(this [System.String, mscorlib, 4.0.0.0] s)",
        );
        assert!(uut.is_extension_method());

        let instance = MethodName::new(
            "[System.Boolean, mscorlib, 4.0.0.0] [My.Ext, A, 1.0.0.0].IsEmpty(this [System.String, mscorlib, 4.0.0.0] s)",
        );
        assert!(!instance.is_extension_method());

        let no_this = MethodName::new(
            "static [System.Boolean, mscorlib, 4.0.0.0] [My.Ext, A, 1.0.0.0].IsEmpty([System.String, mscorlib, 4.0.0.0] s)",
        );
        assert!(!no_this.is_extension_method());
    }

    #[test]
    fn test_generic_method_without_tick() {
        let uut = MethodName::new("[V, A] [D, A].M[[T]]([T] t)");
        assert!(uut.has_type_parameters());
        assert_eq!(uut.name(), "M");
        assert!(uut.type_parameters()[0].is_type_parameter());
        assert_eq!(uut.parameters()[0].value_type().identifier(), "T");
    }

    #[test]
    fn test_generic_count_without_list() {
        let uut = MethodName::new("[V, A] [D, A].M`1()");
        assert!(uut.is_generic_entity());
        assert!(!uut.has_type_parameters());
        assert_eq!(uut.name(), "M");
    }

    #[test]
    fn test_undecodable_parameters_fall_back_to_empty() {
        let uut = MethodName::new("[V, A] [D, A].M(this is not a parameter)");
        assert!(!uut.is_unknown());
        assert!(uut.parameters().is_empty());
        assert!(!uut.has_parameters());
        assert!(uut.try_parameters().is_err());
    }

    #[test]
    fn test_without_type_arguments() {
        let uut = MethodName::new(GENERIC);
        assert_eq!(
            uut.without_type_arguments().identifier(),
            "[System.Void, mscorlib, Version=4.0.0.0] [N.C, TestProject].M`1[[T]]()"
        );
        let plain = MethodName::new("[V, A] [D, A].M()");
        assert_eq!(plain.without_type_arguments(), plain);
    }

    #[test]
    fn test_unknown_method() {
        let unknown = MethodName::unknown();
        assert_eq!(unknown.identifier(), "[?] [?].???()");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "???");
        assert!(unknown.parameters().is_empty());
        assert!(unknown.return_type().is_unknown());
        assert!(!unknown.is_constructor());
        assert!(!unknown.is_extension_method());

        for invalid in [
            "",
            "[V, A] [D, A].M",
            "[V, A] [D, A].M(",
            "[V, A] [D, A].M()x",
            "[V, A] [D, A].()",
            "[V, A] [D, A].M[T]()",
            "[V, A] [D, A].M[[T]]x()",
            "[V, A] [D, A].M N()",
        ] {
            assert!(MethodName::new(invalid).is_unknown(), "{}", invalid);
        }
    }
}
