//! # dotnames Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotnames library. Import this module to get quick access to every name kind, the
//! builders, the pool and the CoRe translation.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotnames operations
pub use crate::Error;

/// The result type used throughout dotnames
pub use crate::Result;

// ================================================================================================
// Name Contract
// ================================================================================================

/// The identifier value contract shared by all name kinds, and the kind tag
pub use crate::names::{Name, NameKind};

/// Any name, as produced by deserialization
pub use crate::names::AnyName;

// ================================================================================================
// Types
// ================================================================================================

/// Types, namespaces and assemblies
pub use crate::names::{AssemblyName, AssemblyVersion, NamespaceName, TypeName};

// ================================================================================================
// Members
// ================================================================================================

/// Fields, properties, events, methods and the tagged member
pub use crate::names::{EventName, FieldName, MemberName, MethodName, PropertyName};

/// Decoded modifier tokens
pub use crate::names::{MemberModifiers, ParameterModifiers};

// ================================================================================================
// Secondary Views
// ================================================================================================

/// Parameters, local variables and lambdas
pub use crate::names::{LambdaName, LocalVariableName, ParameterName};

// ================================================================================================
// Construction and Interning
// ================================================================================================

/// Builders assembling identifiers from structured parts
pub use crate::names::{MemberNameBuilder, ParameterNameBuilder, TypeFlavor, TypeNameBuilder};

/// Interning arena and its configuration
pub use crate::names::{NamePool, NamePoolConfig};

/// Serialized form
pub use crate::names::codec;

// ================================================================================================
// CoRe Names
// ================================================================================================

/// Validated CoRe names
pub use crate::core::{CoReFieldName, CoReMemberName, CoReMethodName, CoReTypeName};

/// Translation into CoRe names
pub use crate::core::ToCoReName;
