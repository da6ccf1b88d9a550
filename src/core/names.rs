//! Validated CoRe names.
//!
//! A CoRe name is a JVM-descriptor-like string. Each kind has a fixed validation pattern and a
//! value is only constructed when its string matches that pattern completely:
//!
//! | Kind   | Shape                                         | Example                                      |
//! |--------|-----------------------------------------------|----------------------------------------------|
//! | type   | `[`* `L` package `/` ... name (`$` nested)*   | `LSystem/Collections/Generic/List`           |
//! | method | type `.` name `(` (type `;`)* `)` type `;`    | `LMy/Type.<init>(LSystem/Int32;)LSystem/Void;` |
//! | field  | type `.` name `;` type                        | `LMy/Type.count;LSystem/Int32`               |

use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result};

const TYPE_PATTERN: &str = r"\[*L(?:[a-zA-Z0-9_]+/)*[a-zA-Z0-9_]+(?:\$[a-zA-Z0-9_]+)*";

static TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{t}$", t = TYPE_PATTERN)).expect("valid type pattern")
});

static METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{t}\.(?:<init>|<clinit>|[a-zA-Z0-9_]+)\((?:{t};)*\){t};$",
        t = TYPE_PATTERN
    ))
    .expect("valid method pattern")
});

static FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{t}\.[a-zA-Z0-9_]+;{t}$", t = TYPE_PATTERN)).expect("valid field pattern")
});

macro_rules! core_name {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $regex:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            name: String,
        }

        impl $name {
            /// Validates `name` against the pattern of this kind.
            ///
            /// # Errors
            /// Returns [`Error::InvalidCoReName`] if `name` does not match the pattern.
            pub fn new(name: &str) -> Result<Self> {
                if $regex.is_match(name) {
                    Ok($name {
                        name: name.to_string(),
                    })
                } else {
                    Err(Error::InvalidCoReName {
                        kind: $kind,
                        name: name.to_string(),
                    })
                }
            }

            /// The validated string.
            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.name
            }
        }
    };
}

core_name! {
    /// A CoRe type name, e.g. `LSystem/String` or `[[LMy/Outer$Inner`.
    CoReTypeName, "type", TYPE_REGEX
}

core_name! {
    /// A CoRe method name, e.g. `LMy/Type.run(LSystem/Int32;)LSystem/Void;`.
    CoReMethodName, "method", METHOD_REGEX
}

core_name! {
    /// A CoRe field name, e.g. `LMy/Type.count;LSystem/Int32`.
    CoReFieldName, "field", FIELD_REGEX
}

/// The CoRe form of a member: methods translate to method names, fields, properties and events
/// to field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoReMemberName {
    /// A translated method
    Method(CoReMethodName),
    /// A translated field, property or event
    Field(CoReFieldName),
}

impl CoReMemberName {
    /// The validated string.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CoReMemberName::Method(method) => method.name(),
            CoReMemberName::Field(field) => field.name(),
        }
    }
}

impl fmt::Display for CoReMemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
