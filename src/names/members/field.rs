//! Field names.
//!
//! ```text
//! [static " "] "[" field-type "] [" declaring-type "]." name
//! ```

use crate::names::{
    members::shape::{is_plain_member_name, name_section, MemberShape},
    NameKind,
};

name_value! {
    /// The name of a field.
    FieldName, NameKind::Field, "[?] [?].???", is_field_identifier
}

member_accessors!(FieldName);

pub(crate) fn is_field_identifier(identifier: &str) -> bool {
    MemberShape::parse(identifier)
        .is_some_and(|shape| is_plain_member_name(shape.name_section(identifier)))
}

impl FieldName {
    /// The field name, e.g. `_count`.
    #[must_use]
    pub fn name(&self) -> &str {
        name_section(self.identifier())
    }

    /// Same as [`FieldName::name`]; fields carry no generic or parameter segment.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.name()
    }
}
