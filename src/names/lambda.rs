//! Lambda expression and anonymous method names.
//!
//! ```text
//! ["[" return-type "]"] [" "] ["(" parameters ")"]
//! ```
//!
//! At least one of the return type and the parameter list is present; a lambda recorded without
//! its parameter list is just `[return-type]`. The parameter list uses the same top-level
//! splitting as method parameter lists.

use crate::{
    names::{
        parameter::parse_parameter_list,
        scan::find_corresponding_close_bracket,
        NameKind, ParameterName, TypeName,
    },
    Result,
};

name_value! {
    /// The name of a lambda expression or anonymous method.
    LambdaName, NameKind::Lambda, "[?] ()", is_lambda_identifier
}

/// Byte positions of the parts of a lambda identifier.
struct LambdaLayout {
    /// the closing bracket of the return type
    return_close: Option<usize>,
    /// the parentheses of the parameter list, if recorded
    parameters: Option<(usize, usize)>,
}

impl LambdaLayout {
    fn parse(s: &str) -> Option<LambdaLayout> {
        let (return_close, open) = if s.starts_with('[') {
            let close = find_corresponding_close_bracket(s, 0)?;
            if s[1..close].trim().is_empty() {
                return None;
            }
            if close == s.len() - 1 {
                return Some(LambdaLayout {
                    return_close: Some(close),
                    parameters: None,
                });
            }
            if !s[close + 1..].starts_with(" (") {
                return None;
            }
            (Some(close), close + 2)
        } else {
            (None, 0)
        };
        let close = find_corresponding_close_bracket(s, open)?;
        (close == s.len() - 1).then_some(LambdaLayout {
            return_close,
            parameters: Some((open, close)),
        })
    }
}

pub(crate) fn is_lambda_identifier(identifier: &str) -> bool {
    LambdaLayout::parse(identifier).is_some()
}

impl LambdaName {
    /// Assembles a lambda from its return type and parameters.
    #[must_use]
    pub fn from_parts(return_type: &TypeName, parameters: &[ParameterName]) -> Self {
        let parameters: Vec<&str> = parameters.iter().map(ParameterName::identifier).collect();
        Self::new(&format!(
            "[{}] ({})",
            return_type.identifier(),
            parameters.join(", ")
        ))
    }

    /// The return type, unknown if the identifier does not carry one.
    #[must_use]
    pub fn return_type(&self) -> TypeName {
        let s = self.identifier();
        match LambdaLayout::parse(s).and_then(|layout| layout.return_close) {
            Some(close) => TypeName::new(s[1..close].trim()),
            None => TypeName::unknown(),
        }
    }

    /// The parameters; empty if the list cannot be decoded.
    #[must_use]
    pub fn parameters(&self) -> Vec<ParameterName> {
        self.try_parameters().unwrap_or_else(|error| {
            log::debug!("dropping parameters of '{}': {}", self.identifier(), error);
            Vec::new()
        })
    }

    /// The parameters, failing on fragments that are not parameters.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a fragment of the list is not a parameter.
    pub fn try_parameters(&self) -> Result<Vec<ParameterName>> {
        let s = self.identifier();
        match LambdaLayout::parse(s).and_then(|layout| layout.parameters) {
            Some((open, close)) => parse_parameter_list(s, open, close),
            None => Ok(Vec::new()),
        }
    }

    /// Whether the lambda has at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }
}
