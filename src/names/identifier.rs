//! The identifier value contract shared by every name kind.
//!
//! A name is nothing but its encoded identifier string. Every structured field (namespace,
//! parameters, declaring type, ...) is recomputed from that string on demand, so two names with
//! equal identifiers are interchangeable. The [`Name`] trait ties a concrete value type to its
//! [`NameKind`], its unknown sentinel and the grammar check that decides whether a raw string is
//! accepted or degraded to that sentinel.
//!
//! # Construction Paths
//!
//! - [`Name::create`] (or the inherent `new` of each kind) decodes a raw string without any
//!   deduplication.
//! - [`crate::names::NamePool::get`] decodes and interns, so equal strings of one kind share a
//!   single allocation and can be compared with [`Name::same_instance`].
//!
//! Both paths apply the same normalisation: input that does not match the grammar of the kind
//! becomes the kind's unknown value. Construction never fails.

use std::sync::Arc;

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// The kind of program element a name identifies.
///
/// Used as part of the interning key and as the tag of the serialized form
/// (see [`crate::names::codec`]).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Debug,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum NameKind {
    /// A type (class, struct, enum, interface, delegate, array or type parameter)
    Type,
    /// A namespace
    Namespace,
    /// An assembly reference
    Assembly,
    /// A field
    Field,
    /// A property or indexer
    Property,
    /// An event
    Event,
    /// A method or constructor
    Method,
    /// A method, indexer or lambda parameter
    Parameter,
    /// A local variable
    LocalVariable,
    /// A lambda expression or anonymous method
    Lambda,
}

impl NameKind {
    /// The compact prefix used by the current serialized form (`0T`, `0M`, ...).
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            NameKind::Type => "0T",
            NameKind::Namespace => "0N",
            NameKind::Assembly => "0A",
            NameKind::Field => "0F",
            NameKind::Property => "0P",
            NameKind::Event => "0E",
            NameKind::Method => "0M",
            NameKind::Parameter => "0Param",
            NameKind::LocalVariable => "0LocalVar",
            NameKind::Lambda => "0L",
        }
    }

    /// The prefix written by the legacy serialized form (`CSharp.TypeName`, ...).
    #[must_use]
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            NameKind::Type => "CSharp.TypeName",
            NameKind::Namespace => "CSharp.NamespaceName",
            NameKind::Assembly => "CSharp.AssemblyName",
            NameKind::Field => "CSharp.FieldName",
            NameKind::Property => "CSharp.PropertyName",
            NameKind::Event => "CSharp.EventName",
            NameKind::Method => "CSharp.MethodName",
            NameKind::Parameter => "CSharp.ParameterName",
            NameKind::LocalVariable => "CSharp.LocalVariableName",
            NameKind::Lambda => "CSharp.LambdaName",
        }
    }

    /// Resolves a serialized-form prefix, current or legacy.
    ///
    /// The legacy form distinguished a few type flavours by prefix; those all map to
    /// [`NameKind::Type`] because the flavour is carried by the identifier itself.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<NameKind> {
        let kind = match prefix {
            "0T" | "CSharp.TypeName" => NameKind::Type,
            "CSharp.EnumTypeName"
            | "CSharp.InterfaceTypeName"
            | "CSharp.StructTypeName"
            | "CSharp.DelegateTypeName" => NameKind::Type,
            "0N" | "CSharp.NamespaceName" => NameKind::Namespace,
            "0A" | "CSharp.AssemblyName" => NameKind::Assembly,
            "0F" | "CSharp.FieldName" => NameKind::Field,
            "0P" | "CSharp.PropertyName" => NameKind::Property,
            "0E" | "CSharp.EventName" => NameKind::Event,
            "0M" | "CSharp.MethodName" => NameKind::Method,
            "0Param" | "CSharp.ParameterName" => NameKind::Parameter,
            "0LocalVar" | "CSharp.LocalVariableName" => NameKind::LocalVariable,
            "0L" | "CSharp.LambdaName" => NameKind::Lambda,
            _ => return None,
        };
        Some(kind)
    }
}

/// Contract of an identifier value.
///
/// Implemented by every concrete name type through the crate-internal `name_value!` macro.
/// Equality, ordering and hashing of implementors are defined on the identifier string alone.
pub trait Name: Clone + Send + Sync + Sized + 'static {
    /// The kind tag of this name type.
    const KIND: NameKind;

    /// The sentinel identifier denoting "no information available".
    const UNKNOWN: &'static str;

    /// Whether `identifier` matches the grammar of this kind.
    fn is_valid(identifier: &str) -> bool;

    /// Wraps an already normalised shared identifier.
    #[doc(hidden)]
    fn from_shared(identifier: Arc<str>) -> Self;

    /// The shared allocation holding the identifier.
    fn shared(&self) -> &Arc<str>;

    /// Decodes `identifier` without interning it.
    fn create(identifier: &str) -> Self {
        Self::from_shared(Arc::from(Self::normalize(identifier)))
    }

    /// Returns `identifier` if it is valid for this kind, the unknown sentinel otherwise.
    fn normalize(identifier: &str) -> &str {
        if Self::is_valid(identifier) {
            identifier
        } else {
            log::debug!(
                "degrading malformed {} identifier '{}' to '{}'",
                Self::KIND,
                identifier,
                Self::UNKNOWN
            );
            Self::UNKNOWN
        }
    }

    /// The complete encoded form.
    fn identifier(&self) -> &str {
        self.shared()
    }

    /// Whether this value is the unknown sentinel of its kind.
    fn is_unknown(&self) -> bool {
        &**self.shared() == Self::UNKNOWN
    }

    /// Whether `a` and `b` share one allocation, as values obtained from one
    /// [`crate::names::NamePool`] for equal identifiers do.
    fn same_instance(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(a.shared(), b.shared())
    }
}
