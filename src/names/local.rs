//! Local variable names: `"[" value-type "] " name`.

use crate::names::{
    parameter::is_simple_name, scan::find_corresponding_close_bracket, NameKind, TypeName,
};

name_value! {
    /// The name of a local variable.
    LocalVariableName, NameKind::LocalVariable, "[?] ???", is_local_variable_identifier
}

/// The closing bracket of the value type, if `s` has the local-variable shape.
fn value_type_close(s: &str) -> Option<usize> {
    if !s.starts_with('[') {
        return None;
    }
    let close = find_corresponding_close_bracket(s, 0)?;
    let well_formed = !s[1..close].trim().is_empty()
        && s.as_bytes().get(close + 1) == Some(&b' ')
        && is_simple_name(&s[close + 2..]);
    well_formed.then_some(close)
}

pub(crate) fn is_local_variable_identifier(identifier: &str) -> bool {
    value_type_close(identifier).is_some()
}

impl LocalVariableName {
    /// Assembles a local variable from its type and name.
    #[must_use]
    pub fn from_parts(value_type: &TypeName, name: &str) -> Self {
        Self::new(&format!("[{}] {}", value_type.identifier(), name))
    }

    /// The declared type of the variable.
    #[must_use]
    pub fn value_type(&self) -> TypeName {
        match value_type_close(self.identifier()) {
            Some(close) => TypeName::new(self.identifier()[1..close].trim()),
            None => TypeName::unknown(),
        }
    }

    /// The variable name, `???` for the unknown variable.
    #[must_use]
    pub fn name(&self) -> &str {
        match value_type_close(self.identifier()) {
            Some(close) => &self.identifier()[close + 2..],
            None => "???",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_variable() {
        let uut = LocalVariableName::new("[System.Int32, mscorlib, 4.0.0.0] counter");
        assert_eq!(uut.name(), "counter");
        assert!(uut.value_type().is_simple_type());
    }

    #[test]
    fn test_from_parts() {
        let ty = TypeName::new("System.String, mscorlib, 4.0.0.0");
        let uut = LocalVariableName::from_parts(&ty, "text");
        assert_eq!(uut.identifier(), "[System.String, mscorlib, 4.0.0.0] text");
        assert_eq!(uut.value_type(), ty);

        assert!(LocalVariableName::from_parts(&ty, "two words").is_unknown());
    }

    #[test]
    fn test_unknown_local_variable() {
        let unknown = LocalVariableName::unknown();
        assert_eq!(unknown.identifier(), "[?] ???");
        assert_eq!(unknown.name(), "???");
        assert!(unknown.value_type().is_unknown());

        for invalid in ["", "x", "ref [T, A] x", "[T, A]x", "[T, A] ", "[] x"] {
            assert!(LocalVariableName::new(invalid).is_unknown(), "{}", invalid);
        }
    }
}
