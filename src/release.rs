//! Version bump plumbing: baseline lookup, manifest updates and the git pipeline.

use std::fmt;
use std::path::Path;

use crate::config::ReleaseConfig;
use crate::error::{FrontkitError, Result};
use crate::git::VersionControl;
use crate::manifest;
use crate::version::NewVersion;

/// Where the current version was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Baseline {
    Tag(String),
    Manifest(String),
}

impl Baseline {
    pub fn as_str(&self) -> &str {
        match self {
            Baseline::Tag(tag) | Baseline::Manifest(tag) => tag,
        }
    }
}

/// Finds the version to bump from: the latest tag, else the manifest's `version`.
///
/// A failing tag lookup or unreadable manifest counts as absent; `Ok(None)` means
/// there is nothing to bump.
pub fn resolve_baseline<V: VersionControl + ?Sized>(
    vcs: &V,
    manifest_path: &Path,
) -> Result<Option<Baseline>> {
    match vcs.latest_tag() {
        Ok(Some(tag)) if !tag.is_empty() => return Ok(Some(Baseline::Tag(tag))),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "cannot read latest git tag"),
    }

    match manifest::read_version(manifest_path) {
        Ok(version) => Ok(version.map(Baseline::Manifest)),
        Err(e) => {
            tracing::debug!(path = %manifest_path.display(), error = %e, "no manifest version");
            Ok(None)
        }
    }
}

/// Writes the new version into the configured manifests.
///
/// The extra manifest, when configured, receives the full tag name; the main
/// manifest receives the bare number.
pub fn apply_version(root: &Path, config: &ReleaseConfig, version: &NewVersion) -> Result<()> {
    if let Some(extra) = &config.extra_manifest {
        manifest::write_version(&root.join(extra), &version.name)?;
    }
    manifest::write_version(&root.join(&config.manifest), &version.number)
}

/// One named operation in the release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    StageAll,
    Commit,
    PushBranch,
    CreateTag,
    PushTags,
}

impl Step {
    /// Fixed execution order.
    pub const ORDER: [Step; 5] = [
        Step::StageAll,
        Step::Commit,
        Step::PushBranch,
        Step::CreateTag,
        Step::PushTags,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::StageAll => "stage all changes",
            Step::Commit => "commit",
            Step::PushBranch => "push branch",
            Step::CreateTag => "create tag",
            Step::PushTags => "push tags",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs to the pipeline.
#[derive(Debug, Clone)]
pub struct ReleasePlan<'a> {
    pub tag: &'a str,
    pub remote: &'a str,
    pub commit_message: &'a str,
}

#[derive(Debug)]
pub enum StepStatus {
    Done,
    Failed(FrontkitError),
    /// Not run because an earlier step failed
    Skipped,
}

#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub status: StepStatus,
}

/// Result of every step, in execution order.
#[derive(Debug)]
pub struct PipelineReport {
    pub outcomes: Vec<StepOutcome>,
}

impl PipelineReport {
    pub fn succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| matches!(outcome.status, StepStatus::Done))
    }

    pub fn first_failure(&self) -> Option<&StepOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| matches!(outcome.status, StepStatus::Failed(_)))
    }
}

fn run_step<V: VersionControl + ?Sized>(vcs: &V, step: Step, plan: &ReleasePlan<'_>) -> Result<()> {
    match step {
        Step::StageAll => vcs.stage_all(),
        Step::Commit => vcs.commit(plan.commit_message),
        Step::PushBranch => vcs.push_current_branch(plan.remote),
        Step::CreateTag => vcs.create_tag(plan.tag),
        Step::PushTags => vcs.push_tags(plan.remote),
    }
}

/// Runs the release steps in [Step::ORDER].
///
/// Stops at the first failure and marks the rest skipped, unless
/// `continue_on_error` is set, in which case every step runs regardless.
pub fn run_pipeline<V: VersionControl + ?Sized>(
    vcs: &V,
    plan: &ReleasePlan<'_>,
    continue_on_error: bool,
) -> PipelineReport {
    let mut outcomes = Vec::with_capacity(Step::ORDER.len());
    let mut failed = false;

    for step in Step::ORDER {
        if failed && !continue_on_error {
            outcomes.push(StepOutcome {
                step,
                status: StepStatus::Skipped,
            });
            continue;
        }

        let status = match run_step(vcs, step, plan) {
            Ok(()) => {
                tracing::debug!(step = step.name(), "release step done");
                StepStatus::Done
            }
            Err(e) => {
                tracing::warn!(step = step.name(), error = %e, "release step failed");
                failed = true;
                StepStatus::Failed(e)
            }
        };
        outcomes.push(StepOutcome { step, status });
    }

    PipelineReport { outcomes }
}
