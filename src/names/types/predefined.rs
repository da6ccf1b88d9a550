//! The predefined types of the runtime and their C# keyword aliases.
//!
//! Producers never prefix predefined value types with `s:`, so struct and simple-type detection
//! fall back to this table. The CoRe translation uses it to spell keyword aliases with their
//! `System.*` names.

/// One entry of the predefined-type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedType {
    /// Fully qualified runtime name, e.g. `System.Int32`
    pub full_name: &'static str,
    /// C# keyword alias, e.g. `int`
    pub alias: &'static str,
    /// Whether the type is a value type
    pub is_struct: bool,
    /// Whether the type is one of the numeric types or `bool`
    pub is_simple: bool,
}

const fn entry(
    full_name: &'static str,
    alias: &'static str,
    is_struct: bool,
    is_simple: bool,
) -> PredefinedType {
    PredefinedType {
        full_name,
        alias,
        is_struct,
        is_simple,
    }
}

/// All predefined types.
pub const PREDEFINED_TYPES: [PredefinedType; 16] = [
    entry("System.Boolean", "bool", true, true),
    entry("System.Char", "char", true, true),
    entry("System.SByte", "sbyte", true, true),
    entry("System.Byte", "byte", true, true),
    entry("System.Int16", "short", true, true),
    entry("System.UInt16", "ushort", true, true),
    entry("System.Int32", "int", true, true),
    entry("System.UInt32", "uint", true, true),
    entry("System.Int64", "long", true, true),
    entry("System.UInt64", "ulong", true, true),
    entry("System.Single", "float", true, true),
    entry("System.Double", "double", true, true),
    entry("System.Decimal", "decimal", true, true),
    entry("System.Void", "void", true, false),
    entry("System.Object", "object", false, false),
    entry("System.String", "string", false, false),
];

/// Looks up a predefined type by its full name or its keyword alias.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PredefinedType> {
    PREDEFINED_TYPES
        .iter()
        .find(|predefined| predefined.full_name == name || predefined.alias == name)
}

/// Resolves a keyword alias to the runtime name; any other input is returned unchanged.
#[must_use]
pub fn resolve_alias(name: &str) -> &str {
    match PREDEFINED_TYPES.iter().find(|p| p.alias == name) {
        Some(predefined) => predefined.full_name,
        None => name,
    }
}
