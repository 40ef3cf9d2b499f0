//! Trigger classification.
//!
//! Derives the facts every job builder consumes: merge-train membership,
//! pull-request provenance, the pull request number, and the commit SHA
//! under test. Resolving the SHA is the one external side effect in the
//! whole compilation and happens exactly once, before any builder runs.

use std::path::Path;

use switchyard_core::{Error, Result};
use tokio::process::Command;
use tracing::debug;

use crate::context::{EventName, TriggerContext};

/// Branch prefix owned by the merge automation.
pub const AUTOMATION_PREFIX: &str = "refs/heads/automation/brawl/";

/// Canonical upstream repository. Pull requests from anywhere else are
/// fork pull requests and never see write-scoped secrets.
pub const UPSTREAM_REPO: &str = "switchyard-dev/switchyard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTrainMode {
    /// Batch-validating changes about to land on the main line.
    Merge,
    /// Speculatively validating a single change.
    Try,
}

/// Facts derived from one trigger. Pure data, passed to every builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventClassification {
    pub is_pull_request: bool,
    pub is_fork_pull_request: bool,
    pub is_merge_train: bool,
    pub merge_train_mode: Option<MergeTrainMode>,
    pub pull_request_number: Option<u64>,
    pub commit_sha: String,
}

impl EventClassification {
    pub fn is_train(&self, mode: MergeTrainMode) -> bool {
        self.merge_train_mode == Some(mode)
    }
}

/// Classify a trigger and resolve the commit SHA under test.
///
/// The SHA comes from `baseline_sha` (the `SHA` environment variable)
/// except on a try push: the try-branch tip is the synthesized merge
/// commit itself, so the test target is read off the checked-out ref with
/// `git log`.
pub async fn classify(
    ctx: &TriggerContext,
    baseline_sha: Option<String>,
) -> Result<EventClassification> {
    let is_pull_request = ctx.event_name == EventName::PullRequest;
    let train_rest = (ctx.event_name == EventName::Push)
        .then(|| ctx.git_ref.strip_prefix(AUTOMATION_PREFIX))
        .flatten();
    let is_merge_train = train_rest.is_some();
    let merge_train_mode = train_rest.and_then(train_mode);

    let pull_request_number = if is_pull_request {
        Some(ctx.event.number.ok_or_else(|| {
            Error::MalformedInput("pull_request event without a number".to_string())
        })?)
    } else if merge_train_mode == Some(MergeTrainMode::Try) {
        Some(try_pr_number(&ctx.git_ref)?)
    } else {
        None
    };

    let is_fork_pull_request = if is_pull_request {
        let head_repo = ctx
            .event
            .pull_request
            .as_ref()
            .map(|pr| pr.head.repo.full_name.as_str())
            .ok_or_else(|| {
                Error::MalformedInput("pull_request event without a head repository".to_string())
            })?;
        !head_repo.eq_ignore_ascii_case(UPSTREAM_REPO)
    } else {
        false
    };

    let commit_sha = if merge_train_mode == Some(MergeTrainMode::Try) {
        head_sha(None).await?
    } else {
        baseline_sha.ok_or_else(|| Error::MissingEnvironment("SHA".to_string()))?
    };

    debug!(
        is_pull_request,
        is_fork_pull_request, is_merge_train, ?pull_request_number, "classified trigger"
    );

    Ok(EventClassification {
        is_pull_request,
        is_fork_pull_request,
        is_merge_train,
        merge_train_mode,
        pull_request_number,
        commit_sha,
    })
}

fn train_mode(rest: &str) -> Option<MergeTrainMode> {
    if rest.starts_with("merge/") {
        Some(MergeTrainMode::Merge)
    } else if rest.starts_with("try/") {
        Some(MergeTrainMode::Try)
    } else {
        None
    }
}

/// The trailing path segment of a try ref is the pull request number the
/// automation is validating. A segment that does not parse means the ref
/// is malformed and the run must abort.
fn try_pr_number(git_ref: &str) -> Result<u64> {
    git_ref
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| Error::UnresolvableRef(git_ref.to_string()))
}

/// SHA of the most recent commit on the checked-out ref.
pub(crate) async fn head_sha(repo_dir: Option<&Path>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(["log", "-n", "1", "--pretty=format:%H"]);
    if let Some(dir) = repo_dir {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .await
        .map_err(|err| Error::SubprocessFailure(format!("failed to spawn git: {err}")))?;
    if !output.status.success() {
        return Err(Error::SubprocessFailure(format!(
            "git log exited with {}",
            output.status
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|err| Error::SubprocessFailure(format!("git log output not UTF-8: {err}")))?;
    let sha = stdout.lines().next().unwrap_or("").trim().to_string();
    if sha.is_empty() {
        return Err(Error::SubprocessFailure(
            "git log produced no output".to_string(),
        ));
    }
    Ok(sha)
}
