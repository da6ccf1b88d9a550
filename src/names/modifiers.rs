//! Modifier tokens of members and parameters.
//!
//! Modifiers are encoded as space-separated lowercase tokens in front of the first bracket of an
//! identifier. Decoding tests token membership, so the order of tokens never matters; tokens that
//! are not listed here are tolerated and ignored. Encoding always writes the tokens in the fixed
//! orders below, which is the order recorded data uses.
//!
//! | Kind      | Order                        |
//! |-----------|------------------------------|
//! | member    | `set get static`             |
//! | parameter | `params out this opt ref`    |

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Modifiers of fields, properties, events and methods
    pub struct MemberModifiers: u8 {
        /// The member belongs to the type rather than to an instance (`static`)
        const STATIC = 0x01;
        /// The property has a getter (`get`)
        const GET = 0x02;
        /// The property has a setter (`set`)
        const SET = 0x04;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Modifiers of parameters
    pub struct ParameterModifiers: u8 {
        /// Variable-length argument array (`params`)
        const PARAMS = 0x01;
        /// Output parameter (`out`)
        const OUT = 0x02;
        /// Receiver of an extension method (`this`)
        const THIS = 0x04;
        /// Optional parameter (`opt`)
        const OPT = 0x08;
        /// Passed by reference (`ref`)
        const REF = 0x10;
    }
}

const MEMBER_TOKENS: [(MemberModifiers, &str); 3] = [
    (MemberModifiers::SET, "set"),
    (MemberModifiers::GET, "get"),
    (MemberModifiers::STATIC, "static"),
];

const PARAMETER_TOKENS: [(ParameterModifiers, &str); 5] = [
    (ParameterModifiers::PARAMS, "params"),
    (ParameterModifiers::OUT, "out"),
    (ParameterModifiers::THIS, "this"),
    (ParameterModifiers::OPT, "opt"),
    (ParameterModifiers::REF, "ref"),
];

fn parse_tokens<F: Copy + std::ops::BitOr<Output = F>>(
    modifiers: &str,
    table: &[(F, &str)],
    empty: F,
) -> F {
    modifiers
        .split_whitespace()
        .filter_map(|token| table.iter().find(|(_, name)| *name == token))
        .fold(empty, |acc, (flag, _)| acc | *flag)
}

/// Writes the tokens of `flags` in table order, each followed by a space.
fn write_tokens<F: Copy>(flags: F, table: &[(F, &str)], contains: impl Fn(F, F) -> bool) -> String {
    let mut prefix = String::new();
    for (flag, token) in table {
        if contains(flags, *flag) {
            prefix.push_str(token);
            prefix.push(' ');
        }
    }
    prefix
}

/// Whether `section` is a well-formed modifier section: empty, or lowercase-alphabetic tokens
/// each followed by a single space.
pub(crate) fn is_modifier_section(section: &str) -> bool {
    section.is_empty()
        || (section.ends_with(' ')
            && section[..section.len() - 1]
                .split(' ')
                .all(|token| !token.is_empty() && token.bytes().all(|c| c.is_ascii_lowercase())))
}

impl MemberModifiers {
    /// Decodes the modifier section of a member identifier.
    #[must_use]
    pub fn parse(modifiers: &str) -> Self {
        parse_tokens(modifiers, &MEMBER_TOKENS, MemberModifiers::empty())
    }

    /// Encodes the modifiers as an identifier prefix (`"set get static "`), empty if none.
    #[must_use]
    pub fn to_prefix(self) -> String {
        write_tokens(self, &MEMBER_TOKENS, |flags, flag| flags.contains(flag))
    }
}

impl ParameterModifiers {
    /// Decodes the modifier section of a parameter identifier.
    #[must_use]
    pub fn parse(modifiers: &str) -> Self {
        parse_tokens(modifiers, &PARAMETER_TOKENS, ParameterModifiers::empty())
    }

    /// Encodes the modifiers as an identifier prefix (`"params out "`), empty if none.
    #[must_use]
    pub fn to_prefix(self) -> String {
        write_tokens(self, &PARAMETER_TOKENS, |flags, flag| flags.contains(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independence() {
        let a = MemberModifiers::parse("static get set");
        let b = MemberModifiers::parse("set get static");
        assert_eq!(a, b);
        assert!(a.contains(MemberModifiers::STATIC));

        let p = ParameterModifiers::parse("ref this");
        let q = ParameterModifiers::parse("this ref");
        assert_eq!(p, q);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        assert_eq!(
            MemberModifiers::parse("virtual static"),
            MemberModifiers::STATIC
        );
        assert!(ParameterModifiers::parse("in").is_empty());
        assert!(MemberModifiers::parse("").is_empty());
    }

    #[test]
    fn test_modifier_section() {
        assert!(is_modifier_section(""));
        assert!(is_modifier_section("static "));
        assert!(is_modifier_section("set get static "));
        assert!(!is_modifier_section("static"));
        assert!(!is_modifier_section(" "));
        assert!(!is_modifier_section("static  "));
        assert!(!is_modifier_section("Static "));
        assert!(!is_modifier_section("a.b "));
    }

    #[test]
    fn test_fixed_emission_order() {
        let all = MemberModifiers::STATIC | MemberModifiers::GET | MemberModifiers::SET;
        assert_eq!(all.to_prefix(), "set get static ");
        assert_eq!(MemberModifiers::empty().to_prefix(), "");

        let params = ParameterModifiers::REF | ParameterModifiers::PARAMS | ParameterModifiers::OPT;
        assert_eq!(params.to_prefix(), "params opt ref ");
        assert_eq!(ParameterModifiers::all().to_prefix(), "params out this opt ref ");
    }
}
