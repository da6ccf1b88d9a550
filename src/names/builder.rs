//! Builders assembling identifiers from structured parts.
//!
//! Every builder produces the exact string the decoders read back, so a built name answers its
//! accessors with the parts it was built from. `build()` returns an unpooled value, `build_in()`
//! interns it in a [`NamePool`]. Parts that do not fit the grammar (a name with whitespace, an
//! unknown declaring type that the producer would never emit, ...) are not rejected here: the
//! assembled identifier is decoded like any other input and degrades to the unknown value.
//!
//! # Example
//!
//! ```rust
//! use dotnames::names::{
//!     AssemblyName, MemberNameBuilder, ParameterNameBuilder, TypeFlavor, TypeNameBuilder,
//! };
//!
//! let mscorlib = AssemblyName::new("mscorlib, 4.0.0.0");
//! let int = TypeNameBuilder::new("System.Int32")
//!     .flavor(TypeFlavor::Struct)
//!     .assembly(&mscorlib)
//!     .build();
//! let list = TypeNameBuilder::new("My.Collections.IntList").assembly(&AssemblyName::new("App")).build();
//!
//! let method = MemberNameBuilder::method(&list, &int, "IndexOf")
//!     .parameter(&ParameterNameBuilder::new(&int, "value").build())
//!     .build();
//! assert_eq!(
//!     method.identifier(),
//!     "[s:System.Int32, mscorlib, 4.0.0.0] [My.Collections.IntList, App].IndexOf([s:System.Int32, mscorlib, 4.0.0.0] value)"
//! );
//! assert_eq!(method.parameters()[0].name(), "value");
//! ```

use std::marker::PhantomData;

use crate::names::{
    AssemblyName, EventName, FieldName, MemberModifiers, MethodName, Name, NameKind, NamePool,
    ParameterModifiers, ParameterName, PropertyName, TypeName,
};

/// The flavour of a type, encoded as kind prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFlavor {
    /// No prefix
    #[default]
    Class,
    /// `s:`
    Struct,
    /// `e:`
    Enum,
    /// `i:`
    Interface,
    /// `d:`
    Delegate,
}

impl TypeFlavor {
    fn prefix(self) -> &'static str {
        match self {
            TypeFlavor::Class => "",
            TypeFlavor::Struct => "s:",
            TypeFlavor::Enum => "e:",
            TypeFlavor::Interface => "i:",
            TypeFlavor::Delegate => "d:",
        }
    }
}

/// Provides a fluent API for building type names
#[derive(Debug, Clone, Default)]
pub struct TypeNameBuilder {
    /// raw full name, e.g. ``System.Collections.Generic.List`1``
    full_name: String,
    flavor: TypeFlavor,
    assembly: Option<AssemblyName>,
    type_arguments: Vec<TypeName>,
    array_rank: usize,
    /// short name when building a type parameter
    parameter: Option<String>,
}

impl TypeNameBuilder {
    /// Start building the type with the given raw full name
    ///
    /// ## Arguments
    /// * 'full_name' - Dotted name with `+` for nesting and `` `N `` type-parameter counts
    #[must_use]
    pub fn new(full_name: &str) -> Self {
        TypeNameBuilder {
            full_name: full_name.to_string(),
            ..TypeNameBuilder::default()
        }
    }

    /// Start building a type parameter, free or bound to `bound`
    ///
    /// ## Arguments
    /// * 'short_name' - The parameter name, e.g. `T`
    /// * 'bound'      - The type the parameter is bound to
    #[must_use]
    pub fn type_parameter(short_name: &str, bound: Option<&TypeName>) -> Self {
        TypeNameBuilder {
            full_name: bound.map(|bound| bound.identifier().to_string()).unwrap_or_default(),
            parameter: Some(short_name.to_string()),
            ..TypeNameBuilder::default()
        }
    }

    /// Set the kind prefix
    #[must_use]
    pub fn flavor(mut self, flavor: TypeFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Set the declaring assembly
    #[must_use]
    pub fn assembly(mut self, assembly: &AssemblyName) -> Self {
        self.assembly = Some(assembly.clone());
        self
    }

    /// Append a generic argument
    #[must_use]
    pub fn type_argument(mut self, argument: &TypeName) -> Self {
        self.type_arguments.push(argument.clone());
        self
    }

    /// Make the type an array of the given rank; `0` keeps it a plain type
    #[must_use]
    pub fn array(mut self, rank: usize) -> Self {
        self.array_rank = rank;
        self
    }

    fn marker(&self) -> String {
        if self.array_rank == 0 {
            String::new()
        } else {
            format!("[{}]", ",".repeat(self.array_rank - 1))
        }
    }

    /// The identifier this builder produces.
    #[must_use]
    pub fn to_identifier(&self) -> String {
        if let Some(short_name) = &self.parameter {
            return if self.full_name.is_empty() {
                format!("{}{}", short_name, self.marker())
            } else {
                format!("{}{} -> {}", short_name, self.marker(), self.full_name)
            };
        }

        let mut identifier = String::from(self.flavor.prefix());
        identifier.push_str(&self.full_name);
        identifier.push_str(&self.marker());
        if !self.type_arguments.is_empty() {
            let arguments: Vec<&str> = self.type_arguments.iter().map(TypeName::identifier).collect();
            identifier.push_str("[[");
            identifier.push_str(&arguments.join("],["));
            identifier.push_str("]]");
        }
        if let Some(assembly) = &self.assembly {
            identifier.push_str(", ");
            identifier.push_str(assembly.identifier());
        }
        identifier
    }

    /// Build the type name
    #[must_use]
    pub fn build(&self) -> TypeName {
        TypeName::new(&self.to_identifier())
    }

    /// Build the type name and intern it in `pool`
    #[must_use]
    pub fn build_in(&self, pool: &NamePool) -> TypeName {
        pool.get(&self.to_identifier())
    }
}

/// Provides a fluent API for building member names
///
/// The entry point fixes the produced kind: [`MemberNameBuilder::field`],
/// [`MemberNameBuilder::property`], [`MemberNameBuilder::event`] or
/// [`MemberNameBuilder::method`].
#[derive(Debug, Clone)]
pub struct MemberNameBuilder<N> {
    declaring_type: TypeName,
    value_type: TypeName,
    name: String,
    modifiers: MemberModifiers,
    type_arguments: Vec<TypeName>,
    parameters: Vec<ParameterName>,
    kind: PhantomData<N>,
}

impl<N: Name> MemberNameBuilder<N> {
    fn start(declaring_type: &TypeName, value_type: &TypeName, name: &str) -> Self {
        MemberNameBuilder {
            declaring_type: declaring_type.clone(),
            value_type: value_type.clone(),
            name: name.to_string(),
            modifiers: MemberModifiers::empty(),
            type_arguments: Vec::new(),
            parameters: Vec::new(),
            kind: PhantomData,
        }
    }

    /// Mark the member `static`
    #[must_use]
    pub fn static_(mut self) -> Self {
        self.modifiers |= MemberModifiers::STATIC;
        self
    }

    fn parameter_list(&self) -> String {
        let parameters: Vec<&str> = self.parameters.iter().map(ParameterName::identifier).collect();
        format!("({})", parameters.join(", "))
    }

    fn type_argument_list(&self) -> String {
        if self.type_arguments.is_empty() {
            return String::new();
        }
        let arguments: Vec<&str> = self.type_arguments.iter().map(TypeName::identifier).collect();
        let count = if self.name.contains('`') {
            String::new()
        } else {
            format!("`{}", self.type_arguments.len())
        };
        format!("{}[[{}]]", count, arguments.join("],["))
    }

    /// The identifier this builder produces.
    #[must_use]
    pub fn to_identifier(&self) -> String {
        let mut identifier = format!(
            "{}[{}] [{}].{}",
            self.modifiers.to_prefix(),
            self.value_type.identifier(),
            self.declaring_type.identifier(),
            self.name
        );
        match N::KIND {
            NameKind::Method => {
                identifier.push_str(&self.type_argument_list());
                identifier.push_str(&self.parameter_list());
            }
            NameKind::Property if !self.parameters.is_empty() => {
                identifier.push_str(&self.parameter_list());
            }
            _ => {}
        }
        identifier
    }

    /// Build the member name
    #[must_use]
    pub fn build(&self) -> N {
        N::create(&self.to_identifier())
    }

    /// Build the member name and intern it in `pool`
    #[must_use]
    pub fn build_in(&self, pool: &NamePool) -> N {
        pool.get(&self.to_identifier())
    }
}

impl MemberNameBuilder<FieldName> {
    /// Start building a field
    ///
    /// ## Arguments
    /// * 'declaring_type' - The type declaring the field
    /// * 'field_type'     - The type of the field
    /// * 'name'           - The field name
    #[must_use]
    pub fn field(declaring_type: &TypeName, field_type: &TypeName, name: &str) -> Self {
        Self::start(declaring_type, field_type, name)
    }
}

impl MemberNameBuilder<EventName> {
    /// Start building an event
    ///
    /// ## Arguments
    /// * 'declaring_type' - The type declaring the event
    /// * 'handler_type'   - The delegate type of the handler
    /// * 'name'           - The event name
    #[must_use]
    pub fn event(declaring_type: &TypeName, handler_type: &TypeName, name: &str) -> Self {
        Self::start(declaring_type, handler_type, name)
    }
}

impl MemberNameBuilder<PropertyName> {
    /// Start building a property
    ///
    /// ## Arguments
    /// * 'declaring_type' - The type declaring the property
    /// * 'property_type'  - The type of the property
    /// * 'name'           - The property name
    #[must_use]
    pub fn property(declaring_type: &TypeName, property_type: &TypeName, name: &str) -> Self {
        Self::start(declaring_type, property_type, name)
    }

    /// Declare a getter
    #[must_use]
    pub fn getter(mut self) -> Self {
        self.modifiers |= MemberModifiers::GET;
        self
    }

    /// Declare a setter
    #[must_use]
    pub fn setter(mut self) -> Self {
        self.modifiers |= MemberModifiers::SET;
        self
    }

    /// Append an indexer parameter
    #[must_use]
    pub fn parameter(mut self, parameter: &ParameterName) -> Self {
        self.parameters.push(parameter.clone());
        self
    }
}

impl MemberNameBuilder<MethodName> {
    /// Start building a method
    ///
    /// ## Arguments
    /// * 'declaring_type' - The type declaring the method
    /// * 'return_type'    - The return type
    /// * 'name'           - The method name, `.ctor` for constructors
    #[must_use]
    pub fn method(declaring_type: &TypeName, return_type: &TypeName, name: &str) -> Self {
        Self::start(declaring_type, return_type, name)
    }

    /// Append a method type parameter; the type-parameter count is added unless the name
    /// already carries one
    #[must_use]
    pub fn type_argument(mut self, argument: &TypeName) -> Self {
        self.type_arguments.push(argument.clone());
        self
    }

    /// Append a parameter
    #[must_use]
    pub fn parameter(mut self, parameter: &ParameterName) -> Self {
        self.parameters.push(parameter.clone());
        self
    }
}

/// Provides a fluent API for building parameter names
#[derive(Debug, Clone)]
pub struct ParameterNameBuilder {
    value_type: TypeName,
    name: String,
    modifiers: ParameterModifiers,
}

impl ParameterNameBuilder {
    /// Start building a parameter of type `value_type` named `name`
    #[must_use]
    pub fn new(value_type: &TypeName, name: &str) -> Self {
        ParameterNameBuilder {
            value_type: value_type.clone(),
            name: name.to_string(),
            modifiers: ParameterModifiers::empty(),
        }
    }

    /// Add arbitrary modifiers
    #[must_use]
    pub fn modifiers(mut self, modifiers: ParameterModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Mark the parameter `params`
    #[must_use]
    pub fn parameter_array(self) -> Self {
        self.modifiers(ParameterModifiers::PARAMS)
    }

    /// Mark the parameter `out`
    #[must_use]
    pub fn output(self) -> Self {
        self.modifiers(ParameterModifiers::OUT)
    }

    /// Mark the parameter as extension-method receiver (`this`)
    #[must_use]
    pub fn extension(self) -> Self {
        self.modifiers(ParameterModifiers::THIS)
    }

    /// Mark the parameter `opt`
    #[must_use]
    pub fn optional(self) -> Self {
        self.modifiers(ParameterModifiers::OPT)
    }

    /// Mark the parameter `ref`
    #[must_use]
    pub fn by_ref(self) -> Self {
        self.modifiers(ParameterModifiers::REF)
    }

    /// The identifier this builder produces.
    #[must_use]
    pub fn to_identifier(&self) -> String {
        format!(
            "{}[{}] {}",
            self.modifiers.to_prefix(),
            self.value_type.identifier(),
            self.name
        )
    }

    /// Build the parameter name
    #[must_use]
    pub fn build(&self) -> ParameterName {
        ParameterName::new(&self.to_identifier())
    }

    /// Build the parameter name and intern it in `pool`
    #[must_use]
    pub fn build_in(&self, pool: &NamePool) -> ParameterName {
        pool.get(&self.to_identifier())
    }
}
