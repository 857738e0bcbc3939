use std::path::Path;

use git2::{
    Cred, CredentialType, DescribeFormatOptions, DescribeOptions, ErrorCode, IndexAddOption,
    PushOptions, RemoteCallbacks, Repository as Git2Repo,
};

use crate::error::{FrontkitError, Result};

/// Wrapper around git2::Repository implementing [super::VersionControl]
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(FrontkitError::release("HEAD is detached; no branch to push"));
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| FrontkitError::release("Branch name is not valid UTF-8"))
    }

    fn push(&self, remote_name: &str, refspecs: &[String]) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|e| {
            FrontkitError::release(format!("No remote named '{}': {}", remote_name, e))
        })?;

        let config = self.repo.config()?;
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(CredentialType::SSH_KEY) {
                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                return Cred::credential_helper(&config, url, username_from_url);
            }

            Cred::default()
        });

        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote
            .push(refspecs, Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    FrontkitError::release(format!("Network error during push: {}", e))
                }
                _ => FrontkitError::release(format!(
                    "Failed to push to '{}': {}",
                    remote_name, e
                )),
            })
    }
}

impl super::VersionControl for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            // No tags at all surfaces as a generic error in the describe class.
            Err(e)
                if e.class() == git2::ErrorClass::Describe
                    || matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) =>
            {
                tracing::debug!(error = %e, "no tag describes HEAD");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        Ok(Some(describe.format(Some(&format))?))
    }

    fn stage_all(&self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"], None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };

        if parent.as_ref().is_some_and(|p| p.tree_id() == tree_id) {
            return Err(FrontkitError::release("Nothing to commit, working tree clean"));
        }

        let signature = self.repo.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(())
    }

    fn push_current_branch(&self, remote: &str) -> Result<()> {
        let branch = self.current_branch()?;
        let refspec = format!("refs/heads/{0}:refs/heads/{0}", branch);
        self.push(remote, &[refspec])?;

        let mut config = self.repo.config()?;
        config.set_str(&format!("branch.{}.remote", branch), remote)?;
        config.set_str(
            &format!("branch.{}.merge", branch),
            &format!("refs/heads/{}", branch),
        )?;
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| FrontkitError::release(format!("Cannot create tag '{}': {}", name, e)))?;
        Ok(())
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        let tags = self.repo.tag_names(None)?;
        let refspecs: Vec<String> = tags
            .iter()
            .flatten()
            .map(|tag| format!("refs/tags/{0}:refs/tags/{0}", tag))
            .collect();

        if refspecs.is_empty() {
            return Ok(());
        }
        self.push(remote, &refspecs)
    }
}
