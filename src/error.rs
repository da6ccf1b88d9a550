use thiserror::Error;

use crate::names::NameKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Decoding an identifier never produces an error: malformed input degrades to the
/// kind-specific unknown value instead (see [`crate::names`]). The variants below cover
/// the second failure tier, incorrect use of the API, which is reported immediately.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::Malformed`] - A strict accessor could not decode a fragment of an identifier
/// - [`Error::InvalidVersion`] - An assembly version string could not be parsed
/// - [`Error::UnknownPrefix`] - A serialized name carries an unknown kind prefix
///
/// ## Caller Misuse
/// - [`Error::WrongKind`] - A kind-specific accessor was requested on another kind
/// - [`Error::InvalidCoReName`] - A CoRe name failed its validation pattern
/// - [`Error::CoReTranslation`] - A name cannot be expressed in the CoRe grammar
///
/// # Examples
///
/// ```rust
/// use dotnames::{core::CoReTypeName, Error};
///
/// match CoReTypeName::new("not a core name") {
///     Ok(name) => println!("valid: {}", name),
///     Err(Error::InvalidCoReName { kind, name }) => {
///         eprintln!("rejected {} '{}'", kind, name);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A fragment of an identifier could not be decoded.
    ///
    /// Only returned by the strict `try_*` accessors. The lenient accessors recover
    /// from the same condition without reporting it.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An assembly version could not be parsed.
    ///
    /// Versions consist of one to four dot-separated 16-bit components, optionally
    /// preceded by `Version=`.
    #[error("Invalid assembly version - {0}")]
    InvalidVersion(String),

    /// A serialized name starts with a prefix that does not denote any name kind.
    #[error("Unknown name prefix - {0}")]
    UnknownPrefix(String),

    /// A kind-specific view was requested from a name of a different kind.
    ///
    /// This indicates incorrect accessor selection by the caller, not bad data.
    #[error("Expected a {expected} name, got a {actual} name")]
    WrongKind {
        /// The kind the caller asked for
        expected: NameKind,
        /// The kind the name actually has
        actual: NameKind,
    },

    /// A CoRe name did not match the validation pattern of its kind.
    #[error("Invalid CoRe {kind} name - '{name}'")]
    InvalidCoReName {
        /// The CoRe kind (`type`, `method` or `field`)
        kind: &'static str,
        /// The rejected string
        name: String,
    },

    /// A name could not be translated into the CoRe grammar.
    ///
    /// Raised for unknown names, which carry no information to translate.
    #[error("Cannot translate to CoRe - {0}")]
    CoReTranslation(String),
}
