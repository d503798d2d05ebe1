use crate::domain::BumpCategory;
use crate::error::{DrafterError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Semantic version with an optional `.postN` suffix.
///
/// Field order drives the derived ordering: `(major, minor, patch, post)` compared
/// lexicographically, where an unset `post` sorts before any `post >= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub post: Option<u64>,
}

impl Version {
    /// Create a new version without a post suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            post: None,
        }
    }

    /// Create a new version with a post suffix
    ///
    /// `post` must be at least 1; `.post0` is not a valid version.
    pub fn with_post(major: u64, minor: u64, patch: u64, post: u64) -> Self {
        debug_assert!(post >= 1, "post suffix must be at least 1");
        Version {
            major,
            minor,
            patch,
            post: Some(post),
        }
    }

    /// Parse a version from tag text (e.g. "v1.2.3", "1.2.3.post4").
    ///
    /// The leading `v` is optional. Everything before the `.postN` suffix must be a
    /// valid SemVer string; pre-release and build metadata are accepted but not kept.
    ///
    /// # Errors
    /// Returns [`DrafterError::InvalidVersion`] if the core is not SemVer or the
    /// post suffix is not a positive integer.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.trim().trim_start_matches('v');
        let (core, post) = split_post_suffix(clean);

        let core = semver::Version::parse(core)
            .map_err(|e| DrafterError::invalid_version(format!("{} ({})", text, e)))?;

        let post = match post {
            None => None,
            Some(digits) => match digits.parse::<u64>() {
                Ok(n) if n >= 1 && digits.bytes().all(|b| b.is_ascii_digit()) => Some(n),
                _ => {
                    return Err(DrafterError::invalid_version(format!(
                        "{} (post suffix must be a positive integer)",
                        text
                    )))
                }
            },
        };

        Ok(Version {
            major: core.major,
            minor: core.minor,
            patch: core.patch,
            post,
        })
    }

    /// Bump version according to the bump category.
    ///
    /// Standard bumps drop the post suffix; a post bump keeps the core and
    /// increments the suffix, starting at 1.
    ///
    /// # Errors
    /// Returns [`DrafterError::InvalidVersion`] if the bumped component is
    /// already `u64::MAX`.
    pub fn bump(&self, category: BumpCategory) -> Result<Self> {
        let overflow = || {
            DrafterError::invalid_version(format!("{} cannot take a {} bump", self, category))
        };
        let next = |n: u64| n.checked_add(1).ok_or_else(overflow);

        Ok(match category {
            BumpCategory::Major => Version::new(next(self.major)?, 0, 0),
            BumpCategory::Minor => Version::new(self.major, next(self.minor)?, 0),
            BumpCategory::Patch => Version::new(self.major, self.minor, next(self.patch)?),
            BumpCategory::Post => Version {
                post: Some(self.post.map_or(Ok(1), next)?),
                ..*self
            },
        })
    }

    /// The SemVer core without the post suffix
    pub fn core(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }
}

/// Split `1.2.3.post4` into (`1.2.3`, `Some("4")`).
///
/// The first `.post` occurrence ends the core; anything after it is the suffix.
fn split_post_suffix(text: &str) -> (&str, Option<&str>) {
    if let Some(captures) = Regex::new(r"^(.*?)\.post(.*)$")
        .ok()
        .and_then(|re| re.captures(text))
    {
        if let (Some(core), Some(post)) = (captures.get(1), captures.get(2)) {
            return (core.as_str(), Some(post.as_str()));
        }
    }
    (text, None)
}

impl FromStr for Version {
    type Err = DrafterError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(post) = self.post {
            write!(f, ".post{}", post)?;
        }
        Ok(())
    }
}

/// Computes the next version from previous version text and a bump category name.
///
/// # Arguments
/// * `previous` - Previous version or tag text (e.g. "v1.2.3.post1")
/// * `category` - One of "major", "minor", "patch" or "post"
///
/// # Returns
/// * `Ok(Version)` - The bumped version
/// * `Err(InvalidVersion)` - If `previous` cannot be parsed
/// * `Err(UnknownBumpCategory)` - If `category` is not a known bump category
///
/// # Example
/// ```
/// use drafterino::domain::bump_version;
/// assert_eq!(bump_version("1.2.3", "minor").unwrap().to_string(), "1.3.0");
/// assert_eq!(bump_version("v1.2.3.post2", "post").unwrap().to_string(), "1.2.3.post3");
/// ```
pub fn bump_version(previous: &str, category: &str) -> Result<Version> {
    let version = Version::parse(previous)?;
    let category = category.parse::<BumpCategory>()?;
    version.bump(category)
}
