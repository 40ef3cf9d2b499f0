//! The raw trigger context handed over by the CI provider.

use serde::Deserialize;
use switchyard_core::{Error, Result};

/// Event category of the trigger. The matrix workflow is only wired up
/// for these two; anything else failing to deserialize is the desired
/// loud failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    PullRequest,
    Push,
}

/// Provider context, read once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerContext {
    pub event_name: EventName,
    #[serde(rename = "ref", default)]
    pub git_ref: String,
    #[serde(default)]
    pub event: EventPayload,
}

/// The `event` object of the provider context. Fields are populated for
/// pull requests and absent for branch pushes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub head: HeadRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    pub repo: RepoRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    pub full_name: String,
}

impl TriggerContext {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| Error::MalformedInput(err.to_string()))
    }
}
