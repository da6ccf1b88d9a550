//! CoRe names and the translation into them.
//!
//! CoRe names are a compact, JVM-descriptor-like notation for types, methods and fields used by
//! usage-pattern tooling. Unlike the rich names in [`crate::names`], CoRe names are validated
//! eagerly: a value only exists if its string matches the pattern of its kind.
//!
//! # Key Components
//!
//! - [`CoReTypeName`], [`CoReMethodName`], [`CoReFieldName`] - Validated names per kind
//! - [`CoReMemberName`] - A method or field name whose kind is known only at runtime
//! - [`ToCoReName`] - Translation from the rich names
//!
//! # Examples
//!
//! ```rust
//! use dotnames::{core::ToCoReName, names::MethodName};
//!
//! let ctor = MethodName::new(
//!     "[System.Void, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0]..ctor([System.Int32, mscorlib, 4.0.0.0] size)",
//! );
//! let core = ctor.to_core_name()?;
//! assert_eq!(core.name(), "LMy/Type.<init>(LSystem/Int32;)LSystem/Void;");
//! # Ok::<(), dotnames::Error>(())
//! ```

mod names;
mod translate;

pub use names::{CoReFieldName, CoReMemberName, CoReMethodName, CoReTypeName};
pub use translate::ToCoReName;
