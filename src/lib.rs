// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # dotnames
//!
//! [![Crates.io](https://img.shields.io/crates/v/dotnames.svg)](https://crates.io/crates/dotnames)
//! [![Documentation](https://docs.rs/dotnames/badge.svg)](https://docs.rs/dotnames)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/dotnames/blob/main/LICENSE-APACHE)
//!
//! A compact, versionable string encoding for the names of .NET program elements (types,
//! fields, properties, events, methods, parameters, local variables, lambdas, namespaces and
//! assemblies), with decoders that never fail and a translation into CoRe names.
//!
//! Names are recorded by IDE tooling, shipped inside interaction events, and analysed long after
//! the fact. The encoding therefore has to survive both ways: new tools must read old data, and
//! malformed or truncated identifiers must not take an analysis down.
//!
//! ## Features
//!
//! - **Identifier is the state** - Every name is a single immutable string; all structure is
//!   decoded on access by scanning for delimiters
//! - **Total decoding** - Malformed input becomes the unknown value of its kind, every accessor
//!   on it is well-defined
//! - **Cheap values** - Names share their identifier through reference counting and are
//!   `Send + Sync`
//! - **Optional interning** - A sharded [`names::NamePool`] deduplicates identifiers across
//!   threads
//! - **Builders** - Assemble identifiers from structured parts instead of string formatting
//! - **Serialized form** - Kind-tagged `prefix:identifier` strings, reading legacy prefixes
//! - **CoRe translation** - Validated JVM-descriptor-like names for usage-pattern mining
//!
//! ## Quick Start
//!
//! ```rust
//! use dotnames::prelude::*;
//!
//! let field = FieldName::new(
//!     "static [System.Int32, mscorlib, 4.0.0.0] [My.Counter, App, 1.0.0.0]._count",
//! );
//! assert!(field.is_static());
//! assert_eq!(field.name(), "_count");
//! assert!(field.value_type().is_simple_type());
//!
//! let serialized = codec::serialize(&AnyName::from(field.clone()));
//! assert_eq!(codec::deserialize(&serialized)?, AnyName::Field(field.clone()));
//!
//! assert_eq!(field.to_core_name()?.name(), "LMy/Counter._count;LSystem/Int32");
//! # Ok::<(), dotnames::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`names`] - The name kinds, their decoders, builders, the pool and the serialized form
//! - [`core`] - Validated CoRe names and the translation into them
//! - [`prelude`] - Glob-importable selection of the commonly used items
//!
//! ## Error Handling
//!
//! Decoding never returns errors. Everything else that can fail returns [`Result`] with the
//! crate-wide [`Error`]:
//!
//! ```rust
//! use dotnames::{names::AssemblyVersion, Error};
//!
//! match AssemblyVersion::parse("1.2.x") {
//!     Ok(version) => println!("version {}", version),
//!     Err(Error::InvalidVersion(input)) => eprintln!("not a version: {}", input),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Lenient accessors that recover from a malformed
//! fragment report it at `debug` level; pool maintenance reports at `trace` level. No logger is
//! installed by the library.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotnames::prelude::*;
///
/// let ty = TypeName::new("System.String, mscorlib, 4.0.0.0");
/// assert!(ty.is_reference_type());
/// ```
pub mod prelude;

/// Encoded names of .NET program elements.
///
/// # Key Components
///
/// - [`names::TypeName`] - Types, type parameters and arrays
/// - [`names::MethodName`], [`names::FieldName`], [`names::PropertyName`],
///   [`names::EventName`] - Members, wrapped by [`names::MemberName`]
/// - [`names::ParameterName`], [`names::LocalVariableName`], [`names::LambdaName`] - Secondary
///   views used inside members and method bodies
/// - [`names::NamePool`] - Interning arena
/// - [`names::codec`] - Serialized form
pub mod names;

/// CoRe names and the translation of [`names`] into them.
pub mod core;

/// `dotnames` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotnames::{names::AssemblyVersion, Result};
///
/// fn major(version: &str) -> Result<u16> {
///     Ok(AssemblyVersion::parse(version)?.major)
/// }
/// assert_eq!(major("4.0.0.0")?, 4);
/// # Ok::<(), dotnames::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotnames` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;
