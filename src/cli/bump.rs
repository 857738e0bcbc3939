use std::path::Path;

use anyhow::Result;

use crate::boundary::BoundaryWarning;
use crate::config::ReleaseConfig;
use crate::git::VersionControl;
use crate::release::{self, Baseline, PipelineReport, ReleasePlan, Step};
use crate::ui::{self, Choice, Prompter};
use crate::version::{self, IncrementClass, NewVersion};

/// First question: start a fresh version line or follow the tags.
pub const START_CHOICES: [Choice<'static>; 2] = [
    Choice::new("init", "Initial version, you will have to give it a name"),
    Choice::new("git-tag", "Follows the git tags"),
];

/// How a bump run ended.
#[derive(Debug)]
pub enum BumpOutcome {
    /// No tag and no manifest version to start from
    NoBaseline,
    /// Version computed, nothing written
    DryRun(NewVersion),
    /// A manifest could not be rewritten; git was left untouched
    ManifestFailed(NewVersion),
    /// Manifests rewritten and the git pipeline ran
    Released {
        version: NewVersion,
        report: PipelineReport,
    },
}

fn ask_increment_class<P: Prompter + ?Sized>(prompter: &mut P) -> Result<IncrementClass> {
    let choices: Vec<Choice<'_>> = IncrementClass::ALL
        .iter()
        .map(|class| Choice::new(class.name(), class.description()))
        .collect();
    let index = prompter.select("What type of version is this?", &choices)?;
    Ok(choices[index].name.parse()?)
}

/// Works out the next version interactively.
///
/// Returns the baseline it started from (None on the init path) and the new version,
/// or `None` when there is nothing to bump.
fn decide_version<P, V>(
    prompter: &mut P,
    vcs: &V,
    root: &Path,
    config: &ReleaseConfig,
) -> Result<Option<(Option<Baseline>, NewVersion)>>
where
    P: Prompter + ?Sized,
    V: VersionControl + ?Sized,
{
    let start = prompter.select("What type of version is this?", &START_CHOICES)?;

    if START_CHOICES[start].name == "init" {
        let label = prompter.input("Type a version name if not the default format 1.0.0")?;
        return Ok(Some((None, version::init_version(&label))));
    }

    let manifest = root.join(&config.manifest);
    let Some(baseline) = release::resolve_baseline(vcs, &manifest)? else {
        ui::display_boundary_warning(&BoundaryWarning::NoBaseline { manifest });
        return Ok(None);
    };

    if let Baseline::Manifest(version) = &baseline {
        ui::display_boundary_warning(&BoundaryWarning::ManifestBaseline {
            version: version.clone(),
        });
    }

    let class = ask_increment_class(prompter)?;
    let new_version = version::bump_tag(baseline.as_str(), class)?;
    Ok(Some((Some(baseline), new_version)))
}

/// Runs the `bump` command.
pub fn run<P, V>(
    prompter: &mut P,
    vcs: &V,
    root: &Path,
    config: &ReleaseConfig,
    dry_run: bool,
) -> Result<BumpOutcome>
where
    P: Prompter + ?Sized,
    V: VersionControl + ?Sized,
{
    let Some((baseline, new_version)) = decide_version(prompter, vcs, root, config)? else {
        return Ok(BumpOutcome::NoBaseline);
    };

    if new_version.has_multi_digit_field() {
        ui::display_boundary_warning(&BoundaryWarning::MultiDigitField {
            tag: new_version.name.clone(),
        });
    }

    ui::display_proposed_version(
        baseline.as_ref().map(Baseline::as_str),
        &new_version.name,
        &new_version.number,
    );

    if dry_run {
        ui::display_status("Dry run, nothing will be written:");
        if let Some(extra) = &config.extra_manifest {
            ui::display_status(&format!(
                "  set {} version to {}",
                extra.display(),
                new_version.name
            ));
        }
        ui::display_status(&format!(
            "  set {} version to {}",
            config.manifest.display(),
            new_version.number
        ));
        for step in Step::ORDER {
            ui::display_status(&format!("  {}", step));
        }
        return Ok(BumpOutcome::DryRun(new_version));
    }

    if let Err(e) = release::apply_version(root, config, &new_version) {
        ui::display_error(&format!("Error updating manifest: {}", e));
        return Ok(BumpOutcome::ManifestFailed(new_version));
    }
    ui::display_success(&format!("Manifest updated with version: {}", new_version.number));

    let plan = ReleasePlan {
        tag: &new_version.name,
        remote: &config.remote,
        commit_message: &config.commit_message,
    };
    let report = release::run_pipeline(vcs, &plan, config.continue_on_error);
    ui::display_pipeline_report(&report);

    if let Some(failed) = report.first_failure() {
        ui::display_error(&format!(
            "Release of {} failed at step '{}'",
            new_version.name, failed.step
        ));
    } else if report.succeeded() {
        ui::display_success(&format!("New version pushed: {}", new_version.name));
    }

    Ok(BumpOutcome::Released {
        version: new_version,
        report,
    })
}
