//! Event names.
//!
//! ```text
//! [static " "] "[" handler-type "] [" declaring-type "]." name
//! ```

use crate::names::{
    members::shape::{is_plain_member_name, name_section, MemberShape},
    NameKind,
};

name_value! {
    /// The name of an event.
    EventName, NameKind::Event, "[?] [?].???", is_event_identifier
}

member_accessors!(EventName);

pub(crate) fn is_event_identifier(identifier: &str) -> bool {
    MemberShape::parse(identifier)
        .is_some_and(|shape| is_plain_member_name(shape.name_section(identifier)))
}

impl EventName {
    /// The delegate type of the event handler; the value type of the event.
    #[must_use]
    pub fn handler_type(&self) -> crate::names::TypeName {
        self.value_type()
    }

    /// The event name.
    #[must_use]
    pub fn name(&self) -> &str {
        name_section(self.identifier())
    }

    /// Same as [`EventName::name`].
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event() {
        let uut = EventName::new("[d:System.EventHandler, mscorlib, 4.0.0.0] [My.Button, UI, 1.0.0.0].Clicked");
        assert_eq!(uut.name(), "Clicked");
        assert!(uut.handler_type().is_delegate_type());
        assert_eq!(uut.declaring_type().full_name(), "My.Button");
        assert!(!uut.is_static());
    }

    #[test]
    fn test_unknown_event() {
        let unknown = EventName::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "???");
        assert!(EventName::new("[V, A] [D, A].E()").is_unknown());
    }
}
