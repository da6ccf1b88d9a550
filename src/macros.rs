#![allow(unused_macros)]

/// Helper macro declaring an identifier value type
///
/// Expands to a newtype around a shared `Arc<str>`, the [`crate::names::Name`] implementation
/// that ties it to its [`crate::names::NameKind`] and unknown sentinel, and the usual
/// `Display`/`Debug`/`AsRef<str>` plumbing. Equality, ordering and hashing derive from the
/// identifier string alone.
///
/// ```rust, ignore
/// name_value! {
///     /// A local variable
///     LocalVariableName, NameKind::LocalVariable, "[?] ???", is_local_variable_identifier
/// }
/// ```
macro_rules! name_value {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $unknown:expr, $validator:path) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            identifier: std::sync::Arc<str>,
        }

        impl $name {
            /// Decodes `identifier`, degrading to the unknown value when it does not match the
            /// grammar of this kind. Never fails.
            #[must_use]
            pub fn new(identifier: &str) -> Self {
                <Self as crate::names::Name>::create(identifier)
            }

            /// The unknown value of this kind.
            #[must_use]
            pub fn unknown() -> Self {
                <Self as crate::names::Name>::from_shared(std::sync::Arc::from($unknown))
            }

            /// The complete encoded form.
            #[must_use]
            pub fn identifier(&self) -> &str {
                &self.identifier
            }

            /// Whether this is the unknown value of its kind.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                &*self.identifier == $unknown
            }
        }

        impl crate::names::Name for $name {
            const KIND: crate::names::NameKind = $kind;
            const UNKNOWN: &'static str = $unknown;

            fn is_valid(identifier: &str) -> bool {
                $validator(identifier)
            }

            fn from_shared(identifier: std::sync::Arc<str>) -> Self {
                Self { identifier }
            }

            fn shared(&self) -> &std::sync::Arc<str> {
                &self.identifier
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.identifier)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), &*self.identifier)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.identifier
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::unknown()
            }
        }
    };
}

/// Helper macro adding the accessors every member kind shares
///
/// The generated methods delegate to the free functions of `crate::names::members::shape`, so
/// fields, properties, events and methods expose one accessor surface without a common base
/// type.
macro_rules! member_accessors {
    ($name:ident) => {
        impl $name {
            /// The modifier section without the trailing space, e.g. `static` or `get static`.
            #[must_use]
            pub fn modifiers(&self) -> &str {
                crate::names::members::shape::modifiers(self.identifier())
            }

            /// The decoded modifier tokens.
            #[must_use]
            pub fn modifier_flags(&self) -> crate::names::MemberModifiers {
                crate::names::members::shape::modifier_flags(self.identifier())
            }

            /// Whether the member carries the `static` modifier.
            #[must_use]
            pub fn is_static(&self) -> bool {
                self.modifier_flags()
                    .contains(crate::names::MemberModifiers::STATIC)
            }

            /// The value type: field, property or event type, or the return type of a method.
            #[must_use]
            pub fn value_type(&self) -> crate::names::TypeName {
                crate::names::members::shape::value_type(self.identifier())
            }

            /// The type declaring the member.
            #[must_use]
            pub fn declaring_type(&self) -> crate::names::TypeName {
                crate::names::members::shape::declaring_type(self.identifier())
            }
        }
    };
}
