//! Version-control abstraction for the release pipeline.
//!
//! The [VersionControl] trait covers exactly what a version bump needs: find the
//! latest tag, stage, commit, push the branch, tag, push the tags.
//!
//! - [repository::Git2Repository]: real implementation on top of `git2`
//! - [mock::MockRepository]: records calls and fails on demand, for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Git operations used by the version bump.
///
/// Every method is a single blocking operation; nothing is retried.
pub trait VersionControl {
    /// The most recent tag reachable from HEAD, like `git describe --tags --abbrev=0`.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The nearest tag name
    /// * `Ok(None)` - No tag can describe HEAD (or HEAD is unborn)
    /// * `Err` - Any other repository error
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Stages every change in the working tree, deletions included (`git add .`).
    fn stage_all(&self) -> Result<()>;

    /// Commits the index on HEAD. Fails when the index matches HEAD's tree.
    fn commit(&self, message: &str) -> Result<()>;

    /// Pushes the checked-out branch and records `remote` as its upstream (`git push -u`).
    fn push_current_branch(&self, remote: &str) -> Result<()>;

    /// Creates a lightweight tag on HEAD. An existing tag with the same name is an error.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Pushes every local tag to `remote` (`git push --tags`).
    fn push_tags(&self, remote: &str) -> Result<()>;
}
