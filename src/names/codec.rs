//! Kind-tagged serialized form.
//!
//! Names travel inside event payloads as `<prefix>:<identifier>`, where the prefix names the
//! kind. The identifier itself is written unchanged, so the form is lossless for every value,
//! including the unknown ones.
//!
//! | Kind           | Prefix      | Legacy prefix              |
//! |----------------|-------------|----------------------------|
//! | type           | `0T`        | `CSharp.TypeName` and the `CSharp.{Enum,Interface,Struct,Delegate}TypeName` flavours |
//! | namespace      | `0N`        | `CSharp.NamespaceName`     |
//! | assembly       | `0A`        | `CSharp.AssemblyName`      |
//! | field          | `0F`        | `CSharp.FieldName`         |
//! | property       | `0P`        | `CSharp.PropertyName`      |
//! | event          | `0E`        | `CSharp.EventName`         |
//! | method         | `0M`        | `CSharp.MethodName`        |
//! | parameter      | `0Param`    | `CSharp.ParameterName`     |
//! | local variable | `0LocalVar` | `CSharp.LocalVariableName` |
//! | lambda         | `0L`        | `CSharp.LambdaName`        |
//!
//! Serialization always writes the current prefix. Both prefixes are read.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::{codec, AnyName, MethodName};
//!
//! let method = MethodName::new("[System.Void, mscorlib, 4.0.0.0] [C, A]..ctor()");
//! let serialized = codec::serialize(&AnyName::from(method.clone()));
//! assert_eq!(serialized, "0M:[System.Void, mscorlib, 4.0.0.0] [C, A]..ctor()");
//!
//! let decoded = codec::deserialize(&serialized)?;
//! assert_eq!(decoded, AnyName::Method(method));
//! assert!(codec::deserialize("0Q:x").is_err());
//! # Ok::<(), dotnames::Error>(())
//! ```

use std::fmt;

use crate::{
    names::{
        AssemblyName, EventName, FieldName, LambdaName, LocalVariableName, MemberName, MethodName,
        Name, NameKind, NamePool, NamespaceName, ParameterName, PropertyName, TypeName,
    },
    Error, Result,
};

macro_rules! any_name {
    ($($variant:ident($ty:ty) => $kind:ident),* $(,)?) => {
        /// A name of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AnyName {
            $(
                #[doc = concat!("A `", stringify!($ty), "`")]
                $variant($ty),
            )*
        }

        impl AnyName {
            /// The kind of the wrapped name.
            #[must_use]
            pub fn kind(&self) -> NameKind {
                match self {
                    $(AnyName::$variant(_) => NameKind::$kind,)*
                }
            }

            /// The complete encoded form of the wrapped name.
            #[must_use]
            pub fn identifier(&self) -> &str {
                match self {
                    $(AnyName::$variant(name) => name.identifier(),)*
                }
            }

            /// Whether the wrapped name is the unknown value of its kind.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                match self {
                    $(AnyName::$variant(name) => name.is_unknown(),)*
                }
            }

            fn decode(kind: NameKind, identifier: &str, pool: Option<&NamePool>) -> AnyName {
                match kind {
                    $(NameKind::$kind => AnyName::$variant(match pool {
                        Some(pool) => pool.get::<$ty>(identifier),
                        None => <$ty as Name>::create(identifier),
                    }),)*
                }
            }
        }

        $(
            impl From<$ty> for AnyName {
                fn from(name: $ty) -> Self {
                    AnyName::$variant(name)
                }
            }
        )*
    };
}

any_name! {
    Type(TypeName) => Type,
    Namespace(NamespaceName) => Namespace,
    Assembly(AssemblyName) => Assembly,
    Field(FieldName) => Field,
    Property(PropertyName) => Property,
    Event(EventName) => Event,
    Method(MethodName) => Method,
    Parameter(ParameterName) => Parameter,
    LocalVariable(LocalVariableName) => LocalVariable,
    Lambda(LambdaName) => Lambda,
}

impl AnyName {
    /// The wrapped name as member, if it is a field, property, event or method.
    #[must_use]
    pub fn into_member(self) -> Option<MemberName> {
        match self {
            AnyName::Field(name) => Some(name.into()),
            AnyName::Property(name) => Some(name.into()),
            AnyName::Event(name) => Some(name.into()),
            AnyName::Method(name) => Some(name.into()),
            _ => None,
        }
    }
}

impl From<MemberName> for AnyName {
    fn from(member: MemberName) -> Self {
        match member {
            MemberName::Field(name) => AnyName::Field(name),
            MemberName::Property(name) => AnyName::Property(name),
            MemberName::Event(name) => AnyName::Event(name),
            MemberName::Method(name) => AnyName::Method(name),
        }
    }
}

impl fmt::Display for AnyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind().prefix(), self.identifier())
    }
}

/// Writes `name` in the serialized form.
#[must_use]
pub fn serialize(name: &AnyName) -> String {
    name.to_string()
}

fn split(serialized: &str) -> Result<(NameKind, &str)> {
    let (prefix, identifier) = serialized
        .split_once(':')
        .ok_or_else(|| Error::UnknownPrefix(serialized.to_string()))?;
    let kind =
        NameKind::from_prefix(prefix).ok_or_else(|| Error::UnknownPrefix(prefix.to_string()))?;
    Ok((kind, identifier))
}

/// Reads a name from its serialized form.
///
/// The identifier part is decoded like any other input, so a malformed identifier yields the
/// unknown value of the kind.
///
/// # Errors
/// Returns [`Error::UnknownPrefix`] if the input carries no separator or its prefix names no
/// kind.
pub fn deserialize(serialized: &str) -> Result<AnyName> {
    let (kind, identifier) = split(serialized)?;
    Ok(AnyName::decode(kind, identifier, None))
}

/// Reads a name from its serialized form and interns it in `pool`.
///
/// # Errors
/// Returns [`Error::UnknownPrefix`] if the input carries no separator or its prefix names no
/// kind.
pub fn deserialize_in(pool: &NamePool, serialized: &str) -> Result<AnyName> {
    let (kind, identifier) = split(serialized)?;
    Ok(AnyName::decode(kind, identifier, Some(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let ty = TypeName::new("System.Int32, mscorlib, 4.0.0.0");
        assert_eq!(
            serialize(&AnyName::from(ty)),
            "0T:System.Int32, mscorlib, 4.0.0.0"
        );
        assert_eq!(
            serialize(&AnyName::from(LocalVariableName::unknown())),
            "0LocalVar:[?] ???"
        );
        assert_eq!(serialize(&AnyName::from(NamespaceName::global())), "0N:");
    }

    #[test]
    fn test_deserialize_keeps_colons_in_identifier() {
        let decoded = deserialize("0T:e:My.Enum, A, 1.0.0.0").unwrap();
        let AnyName::Type(ty) = decoded else {
            panic!("expected a type");
        };
        assert!(ty.is_enum_type());
        assert_eq!(ty.identifier(), "e:My.Enum, A, 1.0.0.0");
    }

    #[test]
    fn test_legacy_prefixes() {
        let decoded = deserialize("CSharp.StructTypeName:s:My.Point, A, 1.0.0.0").unwrap();
        assert_eq!(decoded.kind(), NameKind::Type);

        let decoded = deserialize("CSharp.ParameterName:[T, A] p").unwrap();
        assert_eq!(decoded, AnyName::Parameter(ParameterName::new("[T, A] p")));
        assert_eq!(serialize(&decoded), "0Param:[T, A] p");
    }

    #[test]
    fn test_malformed_identifier_degrades() {
        let decoded = deserialize("0F:not a field").unwrap();
        assert!(decoded.is_unknown());
        assert_eq!(decoded.identifier(), "[?] [?].???");
    }

    #[test]
    fn test_unknown_prefix() {
        for input in ["0X:foo", "no separator", ":x", "CSharp.Foo:x"] {
            match deserialize(input) {
                Err(Error::UnknownPrefix(_)) => {}
                other => panic!("unexpected result for {}: {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_deserialize_in_pool() {
        let pool = NamePool::new();
        let a = deserialize_in(&pool, "0M:[V, A] [D, A].M()").unwrap();
        let b = deserialize_in(&pool, "CSharp.MethodName:[V, A] [D, A].M()").unwrap();
        let (AnyName::Method(a), AnyName::Method(b)) = (a, b) else {
            panic!("expected methods");
        };
        assert!(Name::same_instance(&a, &b));
    }

    #[test]
    fn test_into_member() {
        let member = deserialize("0P:get [V, A] [D, A].P")
            .unwrap()
            .into_member()
            .unwrap();
        assert_eq!(member.kind(), NameKind::Property);
        assert!(deserialize("0T:?").unwrap().into_member().is_none());
        assert_eq!(AnyName::from(member).kind(), NameKind::Property);
    }
}
