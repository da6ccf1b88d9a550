//! Type, namespace and assembly names.
//!
//! [`TypeName`] is the central view: member, parameter and local-variable names all embed type
//! identifiers in brackets and hand them to [`TypeName::new`] on access. [`NamespaceName`] and
//! [`AssemblyName`] are derived from a type and can also be decoded on their own.
//!
//! The [`predefined`] table lists the runtime types with C# keyword aliases; producers never mark
//! these with a kind prefix, so value-type detection consults the table.

mod assembly;
mod namespace;
pub mod predefined;
mod typename;

pub use assembly::{AssemblyName, AssemblyVersion};
pub use namespace::NamespaceName;
pub use predefined::{PredefinedType, PREDEFINED_TYPES};
pub use typename::TypeName;

pub(crate) use typename::generic_arguments;
