//! Translation of names into CoRe names.
//!
//! The translation is one-way and lossy:
//!
//! - types become `L` + namespace with `/` + name, nested types joined with `$`; type-parameter
//!   counts, generic arguments and assemblies are dropped
//! - keyword aliases resolve to their runtime names (`int` becomes `LSystem/Int32`)
//! - arrays get one `[` per rank
//! - type parameters, bound or free, become `LSystem/Object`
//! - constructors are named `<init>`, static constructors `<clinit>`, and return `LSystem/Void`
//! - properties and events translate like fields
//!
//! Characters outside `[A-Za-z0-9_]` in a name segment are replaced by `_`. Unknown names carry
//! nothing to translate and are rejected, as is any result that fails validation.

use crate::{
    core::names::{CoReFieldName, CoReMemberName, CoReMethodName, CoReTypeName},
    names::{
        types::predefined, EventName, FieldName, MemberName, MethodName, PropertyName, TypeName,
    },
    Error, Result,
};

const OBJECT: &str = "LSystem/Object";
const VOID: &str = "LSystem/Void";

/// Conversion of a name into its CoRe form.
pub trait ToCoReName {
    /// The CoRe name produced.
    type Output;

    /// Translates the name.
    ///
    /// # Errors
    /// Returns [`Error::CoReTranslation`] for unknown names and parts that cannot be
    /// translated, and [`Error::InvalidCoReName`] if the result fails validation.
    fn to_core_name(&self) -> Result<Self::Output>;
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_`, after dropping a type-parameter
/// count.
fn sanitize(segment: &str) -> String {
    let segment = match segment.find('`') {
        Some(tick) => &segment[..tick],
        None => segment,
    };
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn core_type(ty: &TypeName) -> Result<String> {
    if ty.is_unknown() {
        return Err(Error::CoReTranslation(format!(
            "unknown type '{}'",
            ty.identifier()
        )));
    }

    // jagged arrays peel one marker per step
    let rank = ty.array_rank();
    if rank > 0 {
        let element = ty
            .array_base_type()
            .ok_or_else(|| Error::CoReTranslation(format!("no element type in '{}'", ty)))?;
        return Ok(format!("{}{}", "[".repeat(rank), core_type(&element)?));
    }
    if ty.is_type_parameter() {
        return Ok(OBJECT.to_string());
    }

    let raw = predefined::resolve_alias(ty.raw_full_name());
    let mut nesting = raw.split('+');
    let outer = nesting.next().unwrap_or(raw);

    let mut core = String::from("L");
    for segment in outer.split('.') {
        core.push_str(&sanitize(segment));
        core.push('/');
    }
    core.pop();
    for nested in nesting {
        core.push('$');
        core.push_str(&sanitize(nested));
    }
    Ok(core)
}

fn core_member_name(method: &MethodName) -> String {
    if method.is_static_constructor() {
        "<clinit>".to_string()
    } else if method.is_constructor() {
        "<init>".to_string()
    } else {
        sanitize(method.name())
    }
}

fn core_field(
    identifier: &str,
    is_unknown: bool,
    declaring_type: &TypeName,
    name: &str,
    value_type: &TypeName,
) -> Result<CoReFieldName> {
    if is_unknown {
        return Err(Error::CoReTranslation(format!("unknown member '{}'", identifier)));
    }
    CoReFieldName::new(&format!(
        "{}.{};{}",
        core_type(declaring_type)?,
        sanitize(name),
        core_type(value_type)?
    ))
}

impl ToCoReName for TypeName {
    type Output = CoReTypeName;

    fn to_core_name(&self) -> Result<CoReTypeName> {
        CoReTypeName::new(&core_type(self)?)
    }
}

impl ToCoReName for MethodName {
    type Output = CoReMethodName;

    fn to_core_name(&self) -> Result<CoReMethodName> {
        if self.is_unknown() {
            return Err(Error::CoReTranslation(format!(
                "unknown method '{}'",
                self.identifier()
            )));
        }

        let mut core = core_type(&self.declaring_type())?;
        core.push('.');
        core.push_str(&core_member_name(self));
        core.push('(');
        for parameter in self.try_parameters()? {
            core.push_str(&core_type(&parameter.value_type())?);
            core.push(';');
        }
        core.push(')');
        if self.is_constructor() {
            core.push_str(VOID);
        } else {
            core.push_str(&core_type(&self.return_type())?);
        }
        core.push(';');
        CoReMethodName::new(&core)
    }
}

impl ToCoReName for FieldName {
    type Output = CoReFieldName;

    fn to_core_name(&self) -> Result<CoReFieldName> {
        core_field(
            self.identifier(),
            self.is_unknown(),
            &self.declaring_type(),
            self.name(),
            &self.value_type(),
        )
    }
}

impl ToCoReName for PropertyName {
    type Output = CoReFieldName;

    fn to_core_name(&self) -> Result<CoReFieldName> {
        core_field(
            self.identifier(),
            self.is_unknown(),
            &self.declaring_type(),
            self.name(),
            &self.value_type(),
        )
    }
}

impl ToCoReName for EventName {
    type Output = CoReFieldName;

    fn to_core_name(&self) -> Result<CoReFieldName> {
        core_field(
            self.identifier(),
            self.is_unknown(),
            &self.declaring_type(),
            self.name(),
            &self.value_type(),
        )
    }
}

impl ToCoReName for MemberName {
    type Output = CoReMemberName;

    fn to_core_name(&self) -> Result<CoReMemberName> {
        match self {
            MemberName::Method(method) => method.to_core_name().map(CoReMemberName::Method),
            MemberName::Field(field) => field.to_core_name().map(CoReMemberName::Field),
            MemberName::Property(property) => property.to_core_name().map(CoReMemberName::Field),
            MemberName::Event(event) => event.to_core_name().map(CoReMemberName::Field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(id: &str) -> String {
        TypeName::new(id).to_core_name().unwrap().to_string()
    }

    #[test]
    fn test_types() {
        assert_eq!(core("System.String, mscorlib, 4.0.0.0"), "LSystem/String");
        assert_eq!(core("GlobalType, A"), "LGlobalType");
        assert_eq!(
            core("System.Collections.Generic.List`1[[T -> System.Int32, mscorlib, 4.0.0.0]], mscorlib, 4.0.0.0"),
            "LSystem/Collections/Generic/List"
        );
        assert_eq!(core("p.O`1+M`1+I, A, 1.0.0.0"), "Lp/O$M$I");
        assert_eq!(core("int, mscorlib, 4.0.0.0"), "LSystem/Int32");
        assert_eq!(core("s:My.<Generated>d__1, A"), "LMy/_Generated_d__1");
    }

    #[test]
    fn test_arrays_and_type_parameters() {
        assert_eq!(core("System.Int32[,], mscorlib, 4.0.0.0"), "[[LSystem/Int32");
        assert_eq!(core("T -> System.Int32, mscorlib, 4.0.0.0"), "LSystem/Object");
        assert_eq!(core("T"), "LSystem/Object");
        assert_eq!(core("T[] -> X, A"), "[LSystem/Object");
    }

    #[test]
    fn test_jagged_arrays() {
        assert_eq!(core("System.Object[][], mscorlib, 4.0.0.0"), "[[LSystem/Object");
        assert_eq!(core("System.Int32[,][], mscorlib, 4.0.0.0"), "[[[LSystem/Int32");
        assert_eq!(core("T[][] -> X, A"), "[[LSystem/Object");

        let field = FieldName::new(
            "[System.Object[][][], mscorlib, 4.0.0.0] [C, TestProject].myJaggedArray",
        );
        assert_eq!(
            field.to_core_name().unwrap().name(),
            "LC.myJaggedArray;[[[LSystem/Object"
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        match TypeName::unknown().to_core_name() {
            Err(Error::CoReTranslation(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_constructor() {
        let ctor = MethodName::new(
            "[System.Void, mscorlib, 4.0.0.0] [My.Type, A, 1.0.0.0]..ctor([System.Int32, mscorlib, 4.0.0.0] size)",
        );
        let core = ctor.to_core_name().unwrap();
        assert_eq!(core.name(), "LMy/Type.<init>(LSystem/Int32;)LSystem/Void;");

        let cctor = MethodName::new("static [?] [My.Type, A, 1.0.0.0]..cctor()");
        assert_eq!(
            cctor.to_core_name().unwrap().name(),
            "LMy/Type.<clinit>()LSystem/Void;"
        );
    }

    #[test]
    fn test_method() {
        let method = MethodName::new(
            "[System.Boolean, mscorlib, 4.0.0.0] [My.Set`1[[T -> X, A]], A].Contains`1[[U]]([T] item, [System.String[], mscorlib, 4.0.0.0] keys)",
        );
        assert_eq!(
            method.to_core_name().unwrap().name(),
            "LMy/Set.Contains(LSystem/Object;[LSystem/String;)LSystem/Boolean;"
        );
    }

    #[test]
    fn test_fields_properties_events() {
        let field = FieldName::new("[System.Int32, mscorlib, 4.0.0.0] [My.Type, A]._count");
        assert_eq!(field.to_core_name().unwrap().name(), "LMy/Type._count;LSystem/Int32");

        let property = PropertyName::new("get [System.String, mscorlib, 4.0.0.0] [My.Type, A].Name");
        let member = MemberName::from(property);
        assert_eq!(
            member.to_core_name().unwrap(),
            CoReMemberName::Field(CoReFieldName::new("LMy/Type.Name;LSystem/String").unwrap())
        );

        let event = EventName::new("[d:System.EventHandler, mscorlib, 4.0.0.0] [My.Type, A].Changed");
        assert_eq!(
            event.to_core_name().unwrap().name(),
            "LMy/Type.Changed;LSystem/EventHandler"
        );
    }

    #[test]
    fn test_unknown_members_are_rejected() {
        assert!(MethodName::unknown().to_core_name().is_err());
        assert!(FieldName::unknown().to_core_name().is_err());
        assert!(MemberName::from(EventName::unknown()).to_core_name().is_err());

        let undecodable = MethodName::new("[V, A] [D, A].M(garbage)");
        assert!(undecodable.to_core_name().is_err());
    }
}
