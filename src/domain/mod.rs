//! Domain logic - pure release rules independent of git and the hosting API

pub mod bump;
pub mod pull_request;
pub mod tag;
pub mod version;

pub use bump::BumpCategory;
pub use pull_request::PullRequest;
pub use tag::{substitute_version, ReleaseTag, COMPUTED_VERSION_PLACEHOLDER};
pub use version::{bump_version, Version};
