//! Member names: fields, properties, events and methods.
//!
//! All four kinds share one string shape:
//!
//! ```text
//! [modifiers " "] "[" value-type "] [" declaring-type "]." name-section
//! ```
//!
//! Each kind is its own value type with the shared accessors (`modifiers`, `is_static`,
//! `value_type`, `declaring_type`) plus kind-specific ones. [`MemberName`] wraps any of them
//! when the kind is only known at runtime, e.g. after deserialization.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::{FieldName, MemberName, NameKind};
//!
//! let field = FieldName::new(
//!     "static [ValueType, VTA, Version=1.2.3.4] [DeclaringType, DTA, Version=0.9.8.7].FieldName",
//! );
//! assert!(field.is_static());
//! assert_eq!(field.declaring_type().identifier(), "DeclaringType, DTA, Version=0.9.8.7");
//!
//! let member = MemberName::from(field);
//! assert_eq!(member.kind(), NameKind::Field);
//! assert!(member.method().is_err());
//! ```

mod event;
mod field;
mod method;
mod property;
pub(crate) mod shape;

use std::fmt;

pub use event::EventName;
pub use field::FieldName;
pub use method::MethodName;
pub use property::PropertyName;

use crate::{
    names::{MemberModifiers, NameKind, TypeName},
    Error, Result,
};

/// A member name of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberName {
    /// A field
    Field(FieldName),
    /// A property or indexer
    Property(PropertyName),
    /// An event
    Event(EventName),
    /// A method or constructor
    Method(MethodName),
}

/// Dispatches `$body` over every variant, binding the inner value to `$member`.
macro_rules! each_member {
    ($value:expr, $member:ident => $body:expr) => {
        match $value {
            MemberName::Field($member) => $body,
            MemberName::Property($member) => $body,
            MemberName::Event($member) => $body,
            MemberName::Method($member) => $body,
        }
    };
}

impl MemberName {
    /// The kind of the wrapped member.
    #[must_use]
    pub fn kind(&self) -> NameKind {
        match self {
            MemberName::Field(_) => NameKind::Field,
            MemberName::Property(_) => NameKind::Property,
            MemberName::Event(_) => NameKind::Event,
            MemberName::Method(_) => NameKind::Method,
        }
    }

    /// The complete encoded form.
    #[must_use]
    pub fn identifier(&self) -> &str {
        each_member!(self, member => member.identifier())
    }

    /// Whether the wrapped member is the unknown value of its kind.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        each_member!(self, member => member.is_unknown())
    }

    /// The modifier section without the trailing space.
    #[must_use]
    pub fn modifiers(&self) -> &str {
        each_member!(self, member => member.modifiers())
    }

    /// The decoded modifier tokens.
    #[must_use]
    pub fn modifier_flags(&self) -> MemberModifiers {
        each_member!(self, member => member.modifier_flags())
    }

    /// Whether the member carries the `static` modifier.
    #[must_use]
    pub fn is_static(&self) -> bool {
        each_member!(self, member => member.is_static())
    }

    /// The value type of the member.
    #[must_use]
    pub fn value_type(&self) -> TypeName {
        each_member!(self, member => member.value_type())
    }

    /// The type declaring the member.
    #[must_use]
    pub fn declaring_type(&self) -> TypeName {
        each_member!(self, member => member.declaring_type())
    }

    /// The member name.
    #[must_use]
    pub fn name(&self) -> &str {
        each_member!(self, member => member.name())
    }

    /// The member name including a method's type-parameter segment.
    #[must_use]
    pub fn full_name(&self) -> &str {
        each_member!(self, member => member.full_name())
    }

    /// The wrapped method, if this is one.
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodName> {
        match self {
            MemberName::Method(method) => Some(method),
            _ => None,
        }
    }

    /// The wrapped method.
    ///
    /// # Errors
    /// Returns [`Error::WrongKind`] if the member is not a method.
    pub fn method(&self) -> Result<&MethodName> {
        self.as_method().ok_or_else(|| Error::WrongKind {
            expected: NameKind::Method,
            actual: self.kind(),
        })
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl From<FieldName> for MemberName {
    fn from(name: FieldName) -> Self {
        MemberName::Field(name)
    }
}

impl From<PropertyName> for MemberName {
    fn from(name: PropertyName) -> Self {
        MemberName::Property(name)
    }
}

impl From<EventName> for MemberName {
    fn from(name: EventName) -> Self {
        MemberName::Event(name)
    }
}

impl From<MethodName> for MemberName {
    fn from(name: MethodName) -> Self {
        MemberName::Method(name)
    }
}
