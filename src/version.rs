use std::fmt;
use std::str::FromStr;

use crate::error::{FrontkitError, Result};

/// Width of the `D.D.D` suffix the increment arithmetic reads.
pub const TAG_SUFFIX_LEN: usize = 5;

/// Numeric version used when starting a fresh version line.
pub const INITIAL_VERSION: &str = "1.0.0";

/// Which field of the tag suffix to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementClass {
    /// `N.0.0` with `N` incremented
    NewVersion,
    /// `N.M.0` with `M` incremented
    Major,
    /// `N.M.F` with `F` incremented
    Fix,
}

impl IncrementClass {
    pub const ALL: [IncrementClass; 3] = [
        IncrementClass::NewVersion,
        IncrementClass::Major,
        IncrementClass::Fix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IncrementClass::NewVersion => "new-version",
            IncrementClass::Major => "major",
            IncrementClass::Fix => "fix",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IncrementClass::NewVersion => "Big changes {{new-version}}.0.0",
            IncrementClass::Major => "Major changes 1.{{major}}.0",
            IncrementClass::Fix => "Fixes 1.0.{{fix}}",
        }
    }
}

impl fmt::Display for IncrementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IncrementClass {
    type Err = FrontkitError;

    fn from_str(s: &str) -> Result<Self> {
        IncrementClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| FrontkitError::version(format!("Unknown increment class '{}'", s)))
    }
}

/// A version tag split into its free-form prefix and the three suffix digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub prefix: String,
    pub new_version: u32,
    pub major: u32,
    pub fix: u32,
}

impl VersionTag {
    /// Splits a tag on its last five characters, which must read `D.D.D`.
    ///
    /// Anything before the suffix is kept verbatim as the prefix. Tags with a
    /// multi-digit field (`v2.5.10`) do not have a `D.D.D` suffix and are
    /// rejected rather than misread.
    ///
    /// # Example
    /// ```ignore
    /// let tag = VersionTag::parse("v.alpha.1.0.0")?;
    /// assert_eq!(tag.prefix, "v.alpha.");
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        let bytes = tag.as_bytes();
        if bytes.len() < TAG_SUFFIX_LEN {
            return Err(FrontkitError::UnsupportedTag(tag.to_string()));
        }

        let split = bytes.len() - TAG_SUFFIX_LEN;
        let suffix = &bytes[split..];
        let well_formed = suffix[0].is_ascii_digit()
            && suffix[1] == b'.'
            && suffix[2].is_ascii_digit()
            && suffix[3] == b'.'
            && suffix[4].is_ascii_digit();
        if !well_formed {
            return Err(FrontkitError::UnsupportedTag(tag.to_string()));
        }

        // The suffix is all ASCII, so `split` sits on a char boundary.
        Ok(VersionTag {
            prefix: tag[..split].to_string(),
            new_version: u32::from(suffix[0] - b'0'),
            major: u32::from(suffix[2] - b'0'),
            fix: u32::from(suffix[4] - b'0'),
        })
    }

    /// Applies exactly one increment and returns the new tag and numeric version.
    pub fn increment(&self, class: IncrementClass) -> NewVersion {
        let (new_version, major, fix) = match class {
            IncrementClass::NewVersion => (self.new_version + 1, 0, 0),
            IncrementClass::Major => (self.new_version, self.major + 1, 0),
            IncrementClass::Fix => (self.new_version, self.major, self.fix + 1),
        };
        let number = format!("{}.{}.{}", new_version, major, fix);
        NewVersion {
            name: format!("{}{}", self.prefix, number),
            number,
        }
    }
}

/// The outcome of a version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVersion {
    /// Full tag name, prefix included (`v1.1.0`)
    pub name: String,
    /// Bare numeric version for manifests (`1.1.0`)
    pub number: String,
}

impl NewVersion {
    /// True when a field went past 9, which the next parse cannot read back.
    pub fn has_multi_digit_field(&self) -> bool {
        self.number.split('.').any(|field| field.len() > 1)
    }
}

/// Parses `tag` and applies `class` to it.
pub fn bump_tag(tag: &str, class: IncrementClass) -> Result<NewVersion> {
    Ok(VersionTag::parse(tag)?.increment(class))
}

/// Starts a fresh version line labelled with free-form user text.
pub fn init_version(label: &str) -> NewVersion {
    NewVersion {
        name: format!("v.{}.{}", label, INITIAL_VERSION),
        number: INITIAL_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_increment() {
        let v = bump_tag("v1.0.0", IncrementClass::Major).unwrap();
        assert_eq!(v.name, "v1.1.0");
        assert_eq!(v.number, "1.1.0");
    }

    #[test]
    fn test_new_version_resets_lower_fields() {
        let v = bump_tag("v3.4.5", IncrementClass::NewVersion).unwrap();
        assert_eq!(v.name, "v4.0.0");
        assert_eq!(v.number, "4.0.0");
    }

    #[test]
    fn test_fix_increment() {
        let v = bump_tag("v1.2.3", IncrementClass::Fix).unwrap();
        assert_eq!(v.name, "v1.2.4");
    }

    #[test]
    fn test_fix_past_nine_produces_two_digit_field() {
        let v = bump_tag("v2.5.9", IncrementClass::Fix).unwrap();
        assert_eq!(v.name, "v2.5.10");
        assert_eq!(v.number, "2.5.10");
        assert!(v.has_multi_digit_field());
    }

    #[test]
    fn test_two_digit_tag_is_rejected() {
        let err = bump_tag("v2.5.10", IncrementClass::Fix).unwrap_err();
        assert!(matches!(err, FrontkitError::UnsupportedTag(ref t) if t == "v2.5.10"));
    }

    #[test]
    fn test_prefix_kept_verbatim() {
        let v = bump_tag("v.alpha.1.0.0", IncrementClass::Major).unwrap();
        assert_eq!(v.name, "v.alpha.1.1.0");
        assert_eq!(v.number, "1.1.0");
    }

    #[test]
    fn test_bare_manifest_version_has_empty_prefix() {
        let tag = VersionTag::parse("1.0.0").unwrap();
        assert_eq!(tag.prefix, "");
        assert_eq!(tag.increment(IncrementClass::Fix).name, "1.0.1");
    }

    #[test]
    fn test_non_ascii_prefix() {
        let v = bump_tag("版本1.2.3", IncrementClass::Fix).unwrap();
        assert_eq!(v.name, "版本1.2.4");
    }

    #[test]
    fn test_short_or_malformed_tags() {
        assert!(VersionTag::parse("1.0").is_err());
        assert!(VersionTag::parse("").is_err());
        assert!(VersionTag::parse("v1-0-0").is_err());
        assert!(VersionTag::parse("va.b.c").is_err());
    }

    #[test]
    fn test_init_version() {
        let v = init_version("alpha");
        assert_eq!(v.name, "v.alpha.1.0.0");
        assert_eq!(v.number, "1.0.0");
        assert!(!v.has_multi_digit_field());
    }

    #[test]
    fn test_init_version_accepts_empty_label() {
        assert_eq!(init_version("").name, "v..1.0.0");
    }

    #[test]
    fn test_increment_class_from_str() {
        assert_eq!(
            "new-version".parse::<IncrementClass>().unwrap(),
            IncrementClass::NewVersion
        );
        assert_eq!("fix".parse::<IncrementClass>().unwrap(), IncrementClass::Fix);
        assert!("minor".parse::<IncrementClass>().is_err());
    }
}
