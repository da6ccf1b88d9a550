//! Encoded names of .NET program elements.
//!
//! Every program element (type, member, parameter, local variable, lambda, namespace, assembly)
//! is represented by a single identifier string in a compact, versionable grammar. The string is
//! the complete state of a name: all structured information is decoded from it on access by
//! scanning for delimiters, and two names with equal identifiers are interchangeable.
//!
//! # Architecture
//!
//! - [`scan`] - The delimiter-scanning primitives every accessor is built on
//! - [`Name`] and [`NameKind`] - The identifier value contract and the kind tag
//! - [`types`] - [`TypeName`] with [`NamespaceName`], [`AssemblyName`] and the predefined types
//! - [`members`] - [`FieldName`], [`PropertyName`], [`EventName`], [`MethodName`] and the
//!   tagged [`MemberName`]
//! - [`ParameterName`], [`LocalVariableName`], [`LambdaName`] - The secondary views
//! - [`NamePool`] - Explicit interning arena, configured through [`NamePoolConfig`]
//! - [`builder`] - Builders assembling identifiers from structured parts
//! - [`codec`] - The kind-tagged serialized form
//!
//! # Unknown Values
//!
//! Decoding never fails. Input that does not match the grammar of a kind becomes the unknown
//! value of that kind, whose identifier is a fixed sentinel:
//!
//! | Kind                       | Sentinel          |
//! |----------------------------|-------------------|
//! | type                       | `?`               |
//! | field, property, event     | `[?] [?].???`     |
//! | method                     | `[?] [?].???()`   |
//! | parameter, local variable  | `[?] ???`         |
//! | lambda                     | `[?] ()`          |
//! | namespace, assembly        | `???`             |
//!
//! Every accessor is total on unknown values; callers treat "unknown" as an ordinary, always
//! possible value.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::{MethodName, ParameterName};
//!
//! let method = MethodName::new(
//!     "static [System.Boolean, mscorlib, 4.0.0.0] [My.Text, App].IsBlank(this [System.String, mscorlib, 4.0.0.0] s)",
//! );
//! assert!(method.is_extension_method());
//! assert_eq!(method.declaring_type().name(), "Text");
//!
//! let broken = ParameterName::new("no brackets here");
//! assert!(broken.is_unknown());
//! assert_eq!(broken.identifier(), "[?] ???");
//! ```

pub mod builder;
pub mod codec;
mod config;
mod identifier;
mod lambda;
mod local;
pub mod members;
mod modifiers;
mod parameter;
mod pool;
pub mod scan;
pub mod types;

pub use builder::{MemberNameBuilder, ParameterNameBuilder, TypeFlavor, TypeNameBuilder};
pub use codec::AnyName;
pub use config::NamePoolConfig;
pub use identifier::{Name, NameKind};
pub use lambda::LambdaName;
pub use local::LocalVariableName;
pub use members::{EventName, FieldName, MemberName, MethodName, PropertyName};
pub use modifiers::{MemberModifiers, ParameterModifiers};
pub use parameter::ParameterName;
pub use pool::NamePool;
pub use types::{AssemblyName, AssemblyVersion, NamespaceName, TypeName};

/// Maximum nesting depth of generic arguments accepted by the type decoder.
///
/// Deeper identifiers decode to the unknown type instead of recursing further.
pub const MAX_NESTING_DEPTH: usize = 64;
