use crate::domain::Version;

/// Placeholder substituted with the computed version in `tag` and `title`
pub const COMPUTED_VERSION_PLACEHOLDER: &str = "$COMPUTED_VERSION";

/// A git tag that carries a valid release version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub version: Version,
}

impl ReleaseTag {
    /// Interpret a tag name as a release.
    ///
    /// Returns `None` for tags that are not versions (e.g. "release-7"), so callers
    /// can skip them while scanning candidates.
    pub fn parse(name: &str) -> Option<Self> {
        let version = Version::parse(name).ok()?;
        Some(ReleaseTag {
            name: name.to_string(),
            version,
        })
    }
}

/// Replace every placeholder occurrence in a tag or title template
///
/// # Example
/// ```
/// use drafterino::domain::substitute_version;
/// assert_eq!(substitute_version("v$COMPUTED_VERSION", "1.0.0"), "v1.0.0");
/// ```
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(COMPUTED_VERSION_PLACEHOLDER, version)
}
