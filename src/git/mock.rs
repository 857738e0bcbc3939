use std::cell::RefCell;

use crate::error::{FrontkitError, Result};
use crate::git::VersionControl;

/// Mock repository for testing without actual git operations
///
/// Each call is recorded as a short string (`"commit:msg"`, `"create_tag:v1.0.0"`)
/// so tests can assert on the exact sequence.
#[derive(Default)]
pub struct MockRepository {
    latest_tag: Option<String>,
    failing: Option<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new mock repository with no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `latest_tag` return this tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.latest_tag = Some(tag.into());
        self
    }

    /// Make the operation with this name (`"commit"`, `"push_tags"`, ...) fail
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing = Some(operation);
        self
    }

    /// Every operation called so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, arg: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("{}:{}", operation, arg));
        if self.failing == Some(operation) {
            return Err(FrontkitError::release(format!("mock {} failed", operation)));
        }
        Ok(())
    }
}

impl VersionControl for MockRepository {
    fn latest_tag(&self) -> Result<Option<String>> {
        if self.failing == Some("latest_tag") {
            return Err(FrontkitError::release("mock latest_tag failed"));
        }
        Ok(self.latest_tag.clone())
    }

    fn stage_all(&self) -> Result<()> {
        self.record("stage_all", ".")
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record("commit", message)
    }

    fn push_current_branch(&self, remote: &str) -> Result<()> {
        self.record("push_current_branch", remote)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record("create_tag", name)
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.record("push_tags", remote)
    }
}
