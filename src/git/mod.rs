//! Version control abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries drafterino needs, so the tag resolver and history scanner can run
//! against a real repository or a fake history in tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use drafterino::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.tags_by_recency()?;
//! let commits = repo.commits_since(tags.first().map(String::as_str))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::{DrafterError, Result};

/// Read-only repository queries
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync` so the async scanner can hold a reference
/// across await points.
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::DrafterError]. Callers in this crate treat every error from
/// these methods as non-fatal.
pub trait Repository: Send + Sync {
    /// List tags reachable from `HEAD`, most recently created first
    ///
    /// Tags that point at commits outside `HEAD`'s history are excluded.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, newest first
    /// * `Err` - If the repository cannot be read
    fn tags_by_recency(&self) -> Result<Vec<String>>;

    /// List commit ids reachable from `HEAD` but not from `tag`
    ///
    /// With `tag == None` this is the whole history reachable from `HEAD`.
    ///
    /// # Arguments
    /// * `tag` - Tag marking the exclusive lower bound of the range
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Full commit SHAs, newest first
    /// * `Err` - If the tag does not exist or the history cannot be walked
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<String>>;
}

/// Stand-in used when no repository could be opened
///
/// Every query fails with the original reason, which the resolver and scanner
/// turn into their empty results.
#[derive(Debug, Clone)]
pub struct UnavailableRepository {
    reason: String,
}

impl UnavailableRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableRepository {
            reason: reason.into(),
        }
    }

    fn error(&self) -> DrafterError {
        DrafterError::Git(git2::Error::from_str(&self.reason))
    }
}

impl Repository for UnavailableRepository {
    fn tags_by_recency(&self) -> Result<Vec<String>> {
        Err(self.error())
    }

    fn commits_since(&self, _tag: Option<&str>) -> Result<Vec<String>> {
        Err(self.error())
    }
}
