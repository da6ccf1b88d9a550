//! The string shape shared by fields, properties, events and methods.
//!
//! ```text
//! [modifiers " "] "[" value-type "] [" declaring-type "]." name-section
//! ```
//!
//! The value type and the declaring type are the first two top-level bracket pairs. Their
//! content is decoded on access, so a member with a malformed inner type still decodes; only the
//! accessor of that type yields the unknown type. The name section is kind-specific and checked
//! by the validators of the concrete kinds.

use crate::names::{
    modifiers::{is_modifier_section, MemberModifiers},
    scan::{find_corresponding_close_bracket, find_next},
    TypeName,
};

/// Byte positions of the parts of a member identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MemberShape {
    /// opening bracket of the value type, the end of the modifier section
    pub(crate) value_open: usize,
    /// closing bracket of the value type
    pub(crate) value_close: usize,
    /// opening bracket of the declaring type
    pub(crate) declaring_open: usize,
    /// closing bracket of the declaring type
    pub(crate) declaring_close: usize,
    /// first byte of the name section
    pub(crate) name_start: usize,
}

impl MemberShape {
    pub(crate) fn parse(s: &str) -> Option<MemberShape> {
        let bytes = s.as_bytes();
        let value_open = s.find('[')?;
        if !is_modifier_section(&s[..value_open]) {
            return None;
        }
        let value_close = find_corresponding_close_bracket(s, value_open)?;
        if bytes.get(value_close + 1) != Some(&b' ') {
            return None;
        }

        let declaring_open = value_close + 2;
        let declaring_close = find_corresponding_close_bracket(s, declaring_open)?;
        if bytes.get(declaring_close + 1) != Some(&b'.') {
            return None;
        }

        let shape = MemberShape {
            value_open,
            value_close,
            declaring_open,
            declaring_close,
            name_start: declaring_close + 2,
        };
        let has_types = !shape.value_type(s).trim().is_empty()
            && !shape.declaring_type(s).trim().is_empty();
        (has_types && shape.name_start < s.len()).then_some(shape)
    }

    pub(crate) fn modifiers<'a>(&self, s: &'a str) -> &'a str {
        s[..self.value_open].trim_end()
    }

    pub(crate) fn value_type<'a>(&self, s: &'a str) -> &'a str {
        &s[self.value_open + 1..self.value_close]
    }

    pub(crate) fn declaring_type<'a>(&self, s: &'a str) -> &'a str {
        &s[self.declaring_open + 1..self.declaring_close]
    }

    pub(crate) fn name_section<'a>(&self, s: &'a str) -> &'a str {
        &s[self.name_start..]
    }

    /// Locates the parameter list of the name section.
    pub(crate) fn parameter_list(&self, s: &str) -> ParameterList {
        let Some(open) = find_next(s, self.name_start, b"(") else {
            return ParameterList::Absent;
        };
        match find_corresponding_close_bracket(s, open) {
            Some(close) if close == s.len() - 1 => ParameterList::Present(open, close),
            _ => ParameterList::Misplaced,
        }
    }
}

/// Position of the parameter list in a name section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterList {
    /// No top-level `(`
    Absent,
    /// The parentheses, the close being the last character of the identifier
    Present(usize, usize),
    /// A top-level `(` whose close is missing or not last
    Misplaced,
}

/// Whether `name` is a plain member name: non-empty, free of whitespace, brackets, parentheses
/// and commas. Dots are allowed (`.ctor`, explicit interface implementations).
pub(crate) fn is_plain_member_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|c: char| {
            c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | ',')
        })
}

pub(crate) fn modifiers(s: &str) -> &str {
    MemberShape::parse(s).map_or("", |shape| shape.modifiers(s))
}

pub(crate) fn modifier_flags(s: &str) -> MemberModifiers {
    MemberModifiers::parse(modifiers(s))
}

pub(crate) fn value_type(s: &str) -> TypeName {
    match MemberShape::parse(s) {
        Some(shape) => TypeName::new(shape.value_type(s).trim()),
        None => TypeName::unknown(),
    }
}

pub(crate) fn declaring_type(s: &str) -> TypeName {
    match MemberShape::parse(s) {
        Some(shape) => TypeName::new(shape.declaring_type(s).trim()),
        None => TypeName::unknown(),
    }
}

/// The name section, or `???` when `s` has no member shape.
pub(crate) fn name_section(s: &str) -> &str {
    MemberShape::parse(s).map_or("???", |shape| shape.name_section(s))
}
