//! Assembly names and versions.
//!
//! The assembly segment of a type identifier follows the type part after the first top-level
//! comma. Three spellings occur in recorded data and are all accepted:
//!
//! - `mscorlib, Version=4.0.0.0`
//! - `mscorlib, 4.0.0.0`
//! - `mscorlib` (no version)
//!
//! [`AssemblyName::new`] keeps the identifier exactly as given, so a bare name and a versioned
//! name of the same assembly are different identifiers. [`AssemblyName::normalized`] rewrites
//! either versioned spelling to `Name, Version=W.X.Y.Z`; this is the form
//! [`TypeName::assembly`](crate::names::TypeName::assembly) hands out.
//!
//! # Examples
//!
//! ```rust
//! use dotnames::names::{AssemblyName, AssemblyVersion};
//!
//! let assembly = AssemblyName::new("mscorlib, Version=4.0.0.0");
//! assert_eq!(assembly.name(), "mscorlib");
//! assert_eq!(assembly.version(), Some(AssemblyVersion::new(4, 0, 0, 0)));
//!
//! let plain = AssemblyName::new("mscorlib, 4.0.0.0");
//! assert_eq!(plain.normalized(), assembly);
//!
//! let bare = AssemblyName::new("TestProject");
//! assert_eq!(bare.version(), None);
//! ```

use std::fmt;

use crate::{names::NameKind, Error, Result};

name_value! {
    /// The name of an assembly, optionally with a version.
    AssemblyName, NameKind::Assembly, "???", is_assembly_identifier
}

pub(crate) fn is_assembly_identifier(identifier: &str) -> bool {
    if identifier == AssemblyName::UNKNOWN_IDENTIFIER {
        return true;
    }
    if identifier.is_empty() || identifier.trim() != identifier {
        return false;
    }
    if identifier.contains(['[', ']', '(', ')']) {
        return false;
    }

    let (name, version) = match identifier.split_once(',') {
        Some((name, version)) => (name, Some(version)),
        None => (identifier, None),
    };
    if name.trim().is_empty() {
        return false;
    }
    version.map_or(true, |version| !version.trim().is_empty())
}

impl AssemblyName {
    pub(crate) const UNKNOWN_IDENTIFIER: &'static str = "???";

    /// Assembles `Name, Version=W.X.Y.Z`, or just `Name` without a version.
    #[must_use]
    pub fn from_parts(name: &str, version: Option<AssemblyVersion>) -> Self {
        match version {
            Some(version) => AssemblyName::new(&format!("{}, Version={}", name, version)),
            None => AssemblyName::new(name),
        }
    }

    /// The same assembly in the canonical `Name, Version=W.X.Y.Z` spelling.
    ///
    /// A version segment that does not parse is dropped. The unknown assembly stays unknown.
    #[must_use]
    pub fn normalized(&self) -> AssemblyName {
        if self.is_unknown() {
            return self.clone();
        }
        AssemblyName::from_parts(self.name(), self.version())
    }

    /// The assembly name without the version.
    ///
    /// Returns `???` for the unknown assembly.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.identifier().split_once(',') {
            Some((name, _)) => name.trim(),
            None => self.identifier(),
        }
    }

    /// The assembly version, if one is present and parseable.
    #[must_use]
    pub fn version(&self) -> Option<AssemblyVersion> {
        let (_, rest) = self.identifier().split_once(',')?;
        rest.split(',')
            .map(str::trim)
            .find_map(|part| AssemblyVersion::parse(part).ok())
    }

    /// Whether the identifier carries a version segment.
    #[must_use]
    pub fn has_version(&self) -> bool {
        self.identifier().contains(',')
    }
}

/// Four-part assembly version (major.minor.build.revision).
///
/// Versions compare component-wise in that order.
///
/// # Examples
///
/// ```rust
/// use dotnames::names::AssemblyVersion;
///
/// let version = AssemblyVersion::parse("Version=1.2.3.4")?;
/// assert_eq!(version.to_string(), "1.2.3.4");
/// assert!(AssemblyVersion::parse("2.0")? > version);
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component.
    pub revision: u16,
}

impl AssemblyVersion {
    /// Create a new assembly version with the specified components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a dotted version string.
    ///
    /// Accepts one to four components, each a 16-bit unsigned integer, optionally preceded by
    /// `Version=`. Missing trailing components are zero.
    ///
    /// # Errors
    /// Returns [`Error::InvalidVersion`] if the string has no or more than four components, or
    /// a component is not a valid `u16`.
    pub fn parse(version_str: &str) -> Result<Self> {
        let trimmed = version_str.trim();
        let digits = trimmed.strip_prefix("Version=").unwrap_or(trimmed);
        let parts: Vec<&str> = digits.split('.').collect();

        if digits.is_empty() || parts.len() > 4 {
            return Err(Error::InvalidVersion(version_str.to_string()));
        }

        let mut components = [0u16; 4];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .parse::<u16>()
                .map_err(|_| Error::InvalidVersion(version_str.to_string()))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_spellings() {
        let with_prefix = AssemblyName::new("mscorlib, Version=4.0.0.0");
        assert_eq!(with_prefix.name(), "mscorlib");
        assert_eq!(with_prefix.version(), Some(AssemblyVersion::new(4, 0, 0, 0)));

        let plain = AssemblyName::new("A, 1.2.3.4");
        assert_eq!(plain.name(), "A");
        assert_eq!(plain.version(), Some(AssemblyVersion::new(1, 2, 3, 4)));
        assert!(plain.has_version());

        let bare = AssemblyName::new("TestProject");
        assert_eq!(bare.name(), "TestProject");
        assert_eq!(bare.version(), None);
        assert!(!bare.has_version());
    }

    #[test]
    fn test_bare_and_versioned_differ() {
        let bare = AssemblyName::new("A");
        let versioned = AssemblyName::new("A, 1.0.0.0");
        assert_eq!(bare.name(), versioned.name());
        assert_ne!(bare, versioned);
    }

    #[test]
    fn test_normalized_spellings_agree() {
        let expected = "mscorlib, Version=4.0.0.0";
        for id in ["mscorlib, 4.0.0.0", "mscorlib, Version=4.0.0.0", "mscorlib,4.0"] {
            assert_eq!(AssemblyName::new(id).normalized().identifier(), expected, "{}", id);
        }
        assert_eq!(AssemblyName::new("TestProject").normalized().identifier(), "TestProject");
        assert_eq!(AssemblyName::new("A, latest").normalized().identifier(), "A");
        assert!(AssemblyName::unknown().normalized().is_unknown());
    }

    #[test]
    fn test_from_parts() {
        let versioned = AssemblyName::from_parts("A", Some(AssemblyVersion::new(1, 2, 3, 4)));
        assert_eq!(versioned.identifier(), "A, Version=1.2.3.4");
        assert_eq!(versioned.version(), Some(AssemblyVersion::new(1, 2, 3, 4)));
        assert_eq!(AssemblyName::from_parts("A", None).identifier(), "A");
        assert!(AssemblyName::from_parts("", None).is_unknown());
    }

    #[test]
    fn test_unknown_assembly() {
        let unknown = AssemblyName::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.name(), "???");
        assert_eq!(unknown.version(), None);

        assert!(AssemblyName::new("").is_unknown());
        assert!(AssemblyName::new(", 1.2.3.4").is_unknown());
        assert!(AssemblyName::new("A[]").is_unknown());
        assert!(AssemblyName::new(" A").is_unknown());
        assert!(AssemblyName::new("A,").is_unknown());
    }

    #[test]
    fn test_unparseable_version() {
        let assembly = AssemblyName::new("A, latest");
        assert!(!assembly.is_unknown());
        assert_eq!(assembly.version(), None);
    }

    #[test]
    fn test_version_parse() {
        assert_eq!(
            AssemblyVersion::parse("1.2.3.4").unwrap(),
            AssemblyVersion::new(1, 2, 3, 4)
        );
        assert_eq!(
            AssemblyVersion::parse("Version=9.10").unwrap(),
            AssemblyVersion::new(9, 10, 0, 0)
        );
        assert!(AssemblyVersion::parse("").is_err());
        assert!(AssemblyVersion::parse("1.2.3.4.5").is_err());
        assert!(AssemblyVersion::parse("1.x").is_err());
        assert!(AssemblyVersion::parse("70000.0.0.0").is_err());
    }

    #[test]
    fn test_version_ordering() {
        let v1 = AssemblyVersion::new(1, 0, 0, 0);
        let v2 = AssemblyVersion::new(1, 0, 0, 1);
        let v3 = AssemblyVersion::new(2, 0, 0, 0);
        assert!(v1 < v2);
        assert!(v2 < v3);
        assert_eq!(v3.to_string(), "2.0.0.0");
    }
}
