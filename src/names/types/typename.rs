//! Type names.
//!
//! # Layout
//!
//! ```text
//! [prefix] raw-full-name [array-marker...] [generic-list...] [", " assembly]
//! ```
//!
//! - `prefix` is one of `d:` (delegate), `s:` (struct), `e:` (enum) or `i:` (interface).
//! - `raw-full-name` is the dotted name, with `+` separating nested types and `` `N `` giving
//!   the number of type parameters a type declares.
//! - `array-marker` is `[]` for a one-dimensional array and `[,..]` for higher ranks. Jagged
//!   arrays repeat the marker (`System.Object[][]`); the last marker is the outermost array.
//! - each generic list is `[[arg],[arg],...]`; nested generic types may carry several lists,
//!   whose arguments are concatenated in order.
//! - the assembly follows the first top-level comma (see [`AssemblyName`]).
//!
//! A type parameter is encoded as its short name, optionally bound to an actual type:
//! `T` or `T -> System.Int32, mscorlib, 4.0.0.0`. All structural accessors of a type parameter
//! describe its bound; a free parameter has the unknown type `?` as bound.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::TypeName;
//!
//! let list = TypeName::new(
//!     "System.Collections.Generic.List`1[[T -> System.String, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0",
//! );
//! assert_eq!(list.namespace().identifier(), "System.Collections.Generic");
//! assert_eq!(list.name(), "List");
//! assert_eq!(list.assembly().name(), "mscorlib");
//!
//! let parameters = list.type_parameters();
//! assert_eq!(parameters.len(), 1);
//! assert_eq!(parameters[0].type_parameter_short_name(), Some("T"));
//! assert!(parameters[0].type_parameter_type().unwrap().is_reference_type());
//!
//! // malformed input degrades to the unknown type
//! assert!(TypeName::new("List`1[[T -> X, A], B").is_unknown());
//! ```

use crate::{
    names::{
        scan::{find_corresponding_close_bracket, find_corresponding_open_bracket},
        types::{
            assembly::{is_assembly_identifier, AssemblyName},
            namespace::NamespaceName,
            predefined::{self, PredefinedType},
        },
        NameKind, MAX_NESTING_DEPTH,
    },
    Result,
};

name_value! {
    /// The name of a type or type parameter.
    TypeName, NameKind::Type, "?", is_type_identifier
}

const UNKNOWN_TYPE: &str = "?";
const TYPE_PARAMETER_SEPARATOR: &str = " -> ";

/// Positions of the parts of a (non type-parameter) type identifier.
#[derive(Debug, Default)]
struct Layout {
    /// start of the raw full name, after the kind prefix
    start: usize,
    /// end of the type part, i.e. the first top-level comma
    type_end: usize,
    /// end of the raw full name, i.e. the first top-level bracket
    raw_end: usize,
    /// inclusive bracket positions of the consecutive array markers
    markers: Vec<(usize, usize)>,
    /// trimmed spans of all generic arguments, in order
    items: Vec<(usize, usize)>,
    /// trimmed span of the assembly
    assembly: Option<(usize, usize)>,
}

impl Layout {
    fn parse(s: &str) -> Option<Layout> {
        let bytes = s.as_bytes();
        let start = kind_prefix_len(s);
        let mut layout = Layout {
            start,
            type_end: s.len(),
            ..Layout::default()
        };
        let mut raw_end = None;

        let mut index = start;
        while index < bytes.len() {
            match bytes[index] {
                b',' => {
                    layout.type_end = index;
                    break;
                }
                b'[' => {
                    let close = find_corresponding_close_bracket(s, index)?;
                    if bytes[index + 1] == b'[' {
                        parse_generic_list(s, index, close, &mut layout.items)?;
                    } else if layout.continues_markers(index)
                        && is_array_marker(&s[index..=close])
                    {
                        layout.markers.push((index, close));
                    } else {
                        return None;
                    }
                    raw_end.get_or_insert(index);
                    index = close + 1;
                }
                b']' | b'(' | b')' => return None,
                _ if raw_end.is_some() => return None,
                _ => index += 1,
            }
        }

        layout.raw_end = raw_end.unwrap_or(layout.type_end);
        if layout.type_end < s.len() {
            layout.assembly = Some(trim_span(s, layout.type_end + 1, s.len()));
        }
        Some(layout)
    }

    /// Markers must follow each other without a gap.
    fn continues_markers(&self, open: usize) -> bool {
        self.markers.last().map_or(true, |&(_, close)| close + 1 == open)
    }

    fn rank(&self) -> usize {
        self.markers.last().map_or(0, |&(open, close)| close - open)
    }

    fn last_marker(&self) -> Option<(usize, usize)> {
        self.markers.last().copied()
    }
}

/// Collects the trimmed spans of the arguments of the generic list `[[..],[..]]` spanning
/// `open..=close`.
pub(crate) fn generic_arguments(s: &str, open: usize, close: usize) -> Option<Vec<(usize, usize)>> {
    let mut items = Vec::new();
    parse_generic_list(s, open, close, &mut items)?;
    Some(items)
}

fn parse_generic_list(
    s: &str,
    open: usize,
    close: usize,
    items: &mut Vec<(usize, usize)>,
) -> Option<()> {
    let bytes = s.as_bytes();
    let mut index = open + 1;
    loop {
        if bytes[index] != b'[' {
            return None;
        }
        let item_close = find_corresponding_close_bracket(s, index)?;
        if item_close >= close {
            return None;
        }
        let (from, to) = trim_span(s, index + 1, item_close);
        if from == to {
            return None;
        }
        items.push((from, to));

        index = item_close + 1;
        if index == close {
            return Some(());
        }
        if bytes[index] != b',' {
            return None;
        }
        index += 1;
        while bytes[index] == b' ' {
            index += 1;
        }
    }
}

fn trim_span(s: &str, from: usize, to: usize) -> (usize, usize) {
    let slice = &s[from..to];
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    if leading == slice.len() {
        return (from, from);
    }
    (from + leading, to - trailing)
}

fn kind_prefix(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [kind @ (b'd' | b's' | b'e' | b'i'), b':', ..] => Some(*kind),
        _ => None,
    }
}

fn kind_prefix_len(s: &str) -> usize {
    if kind_prefix(s).is_some() {
        2
    } else {
        0
    }
}

fn is_array_marker(marker: &str) -> bool {
    marker.len() >= 2
        && marker.starts_with('[')
        && marker.ends_with(']')
        && marker[1..marker.len() - 1].bytes().all(|c| c == b',')
}

fn array_marker(rank: usize) -> String {
    format!("[{}]", ",".repeat(rank.saturating_sub(1)))
}

/// Whether `markers` is a non-empty sequence of array markers, e.g. `[][,]`.
fn is_marker_sequence(markers: &str) -> bool {
    let mut rest = markers;
    while !rest.is_empty() {
        let Some(close) = rest.find(']') else {
            return false;
        };
        if !is_array_marker(&rest[..=close]) {
            return false;
        }
        rest = &rest[close + 1..];
    }
    !markers.is_empty()
}

/// Inclusive bracket positions of the last array marker of a type-parameter short name.
fn last_short_marker(short_name: &str) -> Option<(usize, usize)> {
    let close = short_name.len().checked_sub(1)?;
    if !short_name.ends_with(']') {
        return None;
    }
    find_corresponding_open_bracket(short_name, close).map(|open| (open, close))
}

/// Rank of the last array marker of a type-parameter short name, `0` without markers.
fn marker_rank(short_name: &str) -> usize {
    last_short_marker(short_name).map_or(0, |(open, close)| close - open)
}

/// Splits a type-parameter identifier into its short name and optional bound.
///
/// Returns `None` if `s` is not a type parameter.
fn split_type_parameter(s: &str) -> Option<(&str, Option<&str>)> {
    let (short, bound) = match s.find(TYPE_PARAMETER_SEPARATOR) {
        Some(separator) => (
            &s[..separator],
            Some(&s[separator + TYPE_PARAMETER_SEPARATOR.len()..]),
        ),
        None => (s, None),
    };
    is_type_parameter_short_name(short).then_some((short, bound))
}

fn is_type_parameter_short_name(short: &str) -> bool {
    let (ident, marker) = short.split_at(short.find('[').unwrap_or(short.len()));
    let mut chars = ident.chars();
    let leading = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    leading
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && (marker.is_empty() || is_marker_sequence(marker))
}

fn is_raw_name(raw: &str) -> bool {
    !raw.is_empty() && !raw.contains(|c: char| c.is_whitespace() || c == ':' || c == '?')
}

fn tick_count(raw: &str) -> usize {
    raw.split('`')
        .skip(1)
        .map(|after| {
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            after[..digits].parse::<usize>().unwrap_or(0)
        })
        .sum()
}

pub(crate) fn is_type_identifier(identifier: &str) -> bool {
    is_type_at_depth(identifier, 0)
}

fn is_type_at_depth(s: &str, depth: usize) -> bool {
    if depth > MAX_NESTING_DEPTH {
        return false;
    }
    if s == UNKNOWN_TYPE {
        return true;
    }
    if let Some((_, bound)) = split_type_parameter(s) {
        return bound.map_or(true, |bound| is_type_at_depth(bound, depth + 1));
    }

    let Some(layout) = Layout::parse(s) else {
        return false;
    };
    if !is_raw_name(&s[layout.start..layout.raw_end]) {
        return false;
    }
    if let Some((from, to)) = layout.assembly {
        if from == to || !is_assembly_identifier(&s[from..to]) {
            return false;
        }
    }
    layout
        .items
        .iter()
        .all(|&(from, to)| is_type_at_depth(&s[from..to], depth + 1))
}

fn erase_type_arguments(s: &str, depth: usize) -> String {
    if depth > MAX_NESTING_DEPTH {
        return s.to_string();
    }
    if let Some((short, _)) = split_type_parameter(s) {
        return short.to_string();
    }
    let Some(layout) = Layout::parse(s) else {
        return s.to_string();
    };

    let mut erased = String::with_capacity(s.len());
    let mut cursor = 0;
    for &(from, to) in &layout.items {
        erased.push_str(&s[cursor..from]);
        erased.push_str(&erase_type_arguments(&s[from..to], depth + 1));
        cursor = to;
    }
    erased.push_str(&s[cursor..]);
    erased
}

impl TypeName {
    /// The identifier the structural accessors operate on: the bound of a type parameter, the
    /// identifier itself otherwise.
    fn effective(&self) -> &str {
        match split_type_parameter(self.identifier()) {
            Some((_, Some(bound))) => bound,
            Some((_, None)) => UNKNOWN_TYPE,
            None => self.identifier(),
        }
    }

    fn layout(&self) -> Option<(&str, Layout)> {
        let s = self.effective();
        Layout::parse(s).map(|layout| (s, layout))
    }

    fn is_unknown_type(&self) -> bool {
        self.effective() == UNKNOWN_TYPE
    }

    /// The full name including generic lists and array marker, without kind prefix and
    /// assembly, e.g. ``System.Nullable`1[[System.Int32, mscorlib, 4.0.0.0]]``.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self.layout() {
            Some((s, layout)) => &s[layout.start..layout.type_end],
            None => UNKNOWN_TYPE,
        }
    }

    /// The full name without generic lists and array marker, e.g. ``System.Nullable`1``.
    #[must_use]
    pub fn raw_full_name(&self) -> &str {
        match self.layout() {
            Some((s, layout)) => &s[layout.start..layout.raw_end],
            None => UNKNOWN_TYPE,
        }
    }

    /// The simple name: innermost nested type, without namespace and type-parameter count, with
    /// the array marker of array types, e.g. `List` or `Int32[]`.
    #[must_use]
    pub fn name(&self) -> String {
        let Some((s, layout)) = self.layout() else {
            return UNKNOWN_TYPE.to_string();
        };
        let mut simple = &s[layout.start..layout.raw_end];
        if let Some(plus) = simple.rfind('+') {
            simple = &simple[plus + 1..];
        }
        if let Some(tick) = simple.find('`') {
            simple = &simple[..tick];
        }
        if let Some(dot) = simple.rfind('.') {
            simple = &simple[dot + 1..];
        }

        let mut name = simple.to_string();
        if let (Some(&(open, _)), Some((_, close))) =
            (layout.markers.first(), layout.last_marker())
        {
            name.push_str(&s[open..=close]);
        }
        name
    }

    /// The namespace of the outermost declaring type. Types without a dot in their name live in
    /// the global namespace.
    #[must_use]
    pub fn namespace(&self) -> NamespaceName {
        if self.is_unknown_type() {
            return NamespaceName::unknown();
        }
        let raw = self.raw_full_name();
        let outer = raw.split('+').next().unwrap_or(raw);
        match outer.rfind('.') {
            Some(dot) => NamespaceName::new(&outer[..dot]),
            None => NamespaceName::global(),
        }
    }

    /// The assembly declaring this type, unknown if the identifier carries none.
    ///
    /// The assembly is normalized: `mscorlib, 4.0.0.0` and `mscorlib, Version=4.0.0.0` both
    /// yield `mscorlib, Version=4.0.0.0`.
    #[must_use]
    pub fn assembly(&self) -> AssemblyName {
        if self.is_unknown_type() {
            return AssemblyName::unknown();
        }
        match self.layout() {
            Some((s, layout)) => match layout.assembly {
                Some((from, to)) => AssemblyName::new(&s[from..to]).normalized(),
                None => AssemblyName::unknown(),
            },
            None => AssemblyName::unknown(),
        }
    }

    /// Whether the type declares type parameters, bound or not (``Outer`1+Inner`` is generic).
    #[must_use]
    pub fn is_generic_entity(&self) -> bool {
        match self.layout() {
            Some((s, layout)) => {
                s[layout.start..layout.raw_end].contains('`') || !layout.items.is_empty()
            }
            None => false,
        }
    }

    /// Whether the identifier carries a generic argument list.
    #[must_use]
    pub fn has_type_parameters(&self) -> bool {
        self.layout().is_some_and(|(_, layout)| !layout.items.is_empty())
    }

    /// The generic arguments of all generic lists, in order.
    #[must_use]
    pub fn type_parameters(&self) -> Vec<TypeName> {
        match self.layout() {
            Some((s, layout)) => layout
                .items
                .iter()
                .map(|&(from, to)| TypeName::new(&s[from..to]))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether this is a nested type (`Outer+Inner`).
    #[must_use]
    pub fn is_nested_type(&self) -> bool {
        self.raw_full_name().contains('+')
    }

    /// The type declaring this nested type, `None` for top-level types.
    ///
    /// Generic arguments belonging to the declaring type are carried over: the first `N`
    /// arguments, where `N` is the sum of the type-parameter counts in the declaring part.
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeName> {
        let (s, layout) = self.layout()?;
        let raw = &s[layout.start..layout.raw_end];
        let plus = raw.rfind('+')?;
        let outer = &raw[..plus];

        let mut identifier = outer.to_string();
        let count = tick_count(outer);
        if count > 0 && !layout.items.is_empty() {
            let arguments: Vec<&str> = layout
                .items
                .iter()
                .take(count)
                .map(|&(from, to)| &s[from..to])
                .collect();
            identifier.push_str("[[");
            identifier.push_str(&arguments.join("],["));
            identifier.push_str("]]");
        }
        if let Some((from, to)) = layout.assembly {
            identifier.push_str(", ");
            identifier.push_str(&s[from..to]);
        }
        Some(TypeName::new(&identifier))
    }

    /// Whether the type carries the delegate prefix `d:`.
    #[must_use]
    pub fn is_delegate_type(&self) -> bool {
        kind_prefix(self.effective()) == Some(b'd') && !self.is_array()
    }

    /// Whether the type carries the enum prefix `e:`.
    #[must_use]
    pub fn is_enum_type(&self) -> bool {
        kind_prefix(self.effective()) == Some(b'e') && !self.is_array()
    }

    /// Whether the type carries the interface prefix `i:`.
    #[must_use]
    pub fn is_interface_type(&self) -> bool {
        kind_prefix(self.effective()) == Some(b'i') && !self.is_array()
    }

    /// Whether the type is a struct: prefixed with `s:`, a predefined value type, or
    /// `System.Nullable`1`.
    #[must_use]
    pub fn is_struct_type(&self) -> bool {
        if self.is_array() {
            return false;
        }
        kind_prefix(self.effective()) == Some(b's')
            || self.predefined().is_some_and(|p| p.is_struct)
            || self.is_nullable_type()
    }

    /// Whether the type is `System.Void`.
    #[must_use]
    pub fn is_void_type(&self) -> bool {
        self.predefined()
            .is_some_and(|p| p.full_name == "System.Void")
    }

    /// Whether the type is a struct or an enum.
    #[must_use]
    pub fn is_value_type(&self) -> bool {
        self.is_struct_type() || self.is_enum_type()
    }

    /// Whether the type is one of the numeric types or `bool`.
    #[must_use]
    pub fn is_simple_type(&self) -> bool {
        self.predefined().is_some_and(|p| p.is_simple)
    }

    /// Whether the type is `System.Nullable`1`.
    #[must_use]
    pub fn is_nullable_type(&self) -> bool {
        !self.is_array() && self.raw_full_name() == "System.Nullable`1"
    }

    /// Whether the type is a class, interface, array or delegate.
    #[must_use]
    pub fn is_reference_type(&self) -> bool {
        self.is_class_type()
            || self.is_interface_type()
            || self.is_array()
            || self.is_delegate_type()
    }

    /// Whether the type is a known type that is none of value type, interface, array and
    /// delegate.
    #[must_use]
    pub fn is_class_type(&self) -> bool {
        !self.is_unknown_type()
            && !self.is_value_type()
            && !self.is_interface_type()
            && !self.is_array()
            && !self.is_delegate_type()
    }

    fn predefined(&self) -> Option<&'static PredefinedType> {
        if self.is_array() {
            return None;
        }
        predefined::lookup(self.raw_full_name())
    }

    /// Whether this is an array type.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array_rank() > 0
    }

    /// The array rank, `0` for non-array types.
    #[must_use]
    pub fn array_rank(&self) -> usize {
        match split_type_parameter(self.identifier()) {
            Some((short, _)) => marker_rank(short),
            None => Layout::parse(self.identifier()).map_or(0, |layout| layout.rank()),
        }
    }

    /// The element type of an array type, `None` for non-array types.
    ///
    /// Only the last marker is removed, so the element type of a jagged array is an array:
    /// `System.Object[][]` has the element type `System.Object[]`.
    #[must_use]
    pub fn array_base_type(&self) -> Option<TypeName> {
        let id = self.identifier();
        let (open, close) = match split_type_parameter(id) {
            Some((short, _)) => last_short_marker(short)?,
            None => Layout::parse(id)?.last_marker()?,
        };
        Some(TypeName::new(&format!("{}{}", &id[..open], &id[close + 1..])))
    }

    /// Derives the array type of the given rank whose elements are of this type.
    ///
    /// The new marker is appended after any existing one, so deriving from an array type yields
    /// a jagged array: `Foo[]` derives to `Foo[][]`. The unknown type derives to itself.
    ///
    /// # Errors
    /// Returns an error if `rank` is zero.
    pub fn derive_array_type_name(&self, rank: usize) -> Result<TypeName> {
        if rank == 0 {
            return Err(malformed_error!("Array rank must be at least 1"));
        }
        if self.is_unknown() {
            return Ok(TypeName::unknown());
        }

        let id = self.identifier();
        let insert = match split_type_parameter(id) {
            Some((short, _)) => short.len(),
            None => match Layout::parse(id) {
                Some(layout) => layout
                    .last_marker()
                    .map_or(layout.raw_end, |(_, close)| close + 1),
                None => return Ok(TypeName::unknown()),
            },
        };
        Ok(TypeName::new(&format!(
            "{}{}{}",
            &id[..insert],
            array_marker(rank),
            &id[insert..]
        )))
    }

    /// Whether this is a type parameter (`T` or `T -> Bound`).
    #[must_use]
    pub fn is_type_parameter(&self) -> bool {
        split_type_parameter(self.identifier()).is_some()
    }

    /// The short name of a type parameter, e.g. `T`.
    #[must_use]
    pub fn type_parameter_short_name(&self) -> Option<&str> {
        split_type_parameter(self.identifier()).map(|(short, _)| short)
    }

    /// The type a type parameter is bound to, the unknown type for free parameters.
    #[must_use]
    pub fn type_parameter_type(&self) -> Option<TypeName> {
        split_type_parameter(self.identifier())
            .map(|(_, bound)| TypeName::new(bound.unwrap_or(UNKNOWN_TYPE)))
    }

    /// The same type with every bound type parameter in its generic lists replaced by its
    /// short name, recursively: ``List`1[[T -> Int32, A]], A`` becomes ``List`1[[T]], A``.
    #[must_use]
    pub fn without_type_arguments(&self) -> TypeName {
        TypeName::new(&erase_type_arguments(self.identifier(), 0))
    }
}
