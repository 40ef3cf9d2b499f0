//! Job descriptors emitted into the CI matrix.

use crate::toolchain::ToolchainSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The closed set of job kinds the matrix can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    Docs,
    Clippy,
    Test,
    Grind,
    Fmt,
    WorkspaceDeps,
    SemverChecks,
}

/// Kind-specific job parameters. Exactly one shape per kind; the kind tag
/// on [`JobDescriptor`] is derived from the shape so the two cannot
/// disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum JobParams {
    Docs(DocsParams),
    Clippy(ClippyParams),
    Test(TestParams),
    Grind(GrindParams),
    Fmt(FmtParams),
    WorkspaceDeps(WorkspaceDepsParams),
    SemverChecks(SemverChecksParams),
}

impl JobParams {
    pub fn kind(&self) -> JobKind {
        match self {
            JobParams::Docs(_) => JobKind::Docs,
            JobParams::Clippy(_) => JobKind::Clippy,
            JobParams::Test(_) => JobKind::Test,
            JobParams::Grind(_) => JobKind::Grind,
            JobParams::Fmt(_) => JobKind::Fmt,
            JobParams::WorkspaceDeps(_) => JobKind::WorkspaceDeps,
            JobParams::SemverChecks(_) => JobKind::SemverChecks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocsParams {
    /// Upload name for the built docs; only the primary platform uploads.
    pub artifact_name: Option<String>,
    pub deploy_docs: bool,
    pub pr_number: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClippyParams {
    /// Check the full feature-flag powerset instead of the default set.
    pub powerset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestParams {
    pub pr_number: Option<u64>,
    pub commit_sha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GrindParams {
    /// Environment assignment routing the target's test runner through
    /// Valgrind.
    pub env: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FmtParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceDepsParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SemverChecksParams {}

/// FFmpeg install requested on runners whose job compiles the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FfmpegConfig {
    pub version: String,
}

/// One entry in the emitted matrix. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobDescriptor {
    /// Runner label.
    pub os: String,
    pub job_name: String,
    pub kind: JobKind,
    pub rust: ToolchainSpec,
    pub ffmpeg: Option<FfmpegConfig>,
    pub params: JobParams,
    /// Names of secrets the workflow exposes to this job. Attached only
    /// when the originating context is trusted.
    pub secrets: Option<Vec<String>>,
}

impl JobDescriptor {
    pub fn new(
        os: impl Into<String>,
        job_name: impl Into<String>,
        rust: ToolchainSpec,
        params: JobParams,
    ) -> Self {
        Self {
            os: os.into(),
            job_name: job_name.into(),
            kind: params.kind(),
            rust,
            ffmpeg: None,
            params,
            secrets: None,
        }
    }

    pub fn with_ffmpeg(mut self, version: impl Into<String>) -> Self {
        self.ffmpeg = Some(FfmpegConfig {
            version: version.into(),
        });
        self
    }

    pub fn with_secrets(mut self, names: &[&str]) -> Self {
        self.secrets = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }
}

/// Ordered job list. The consuming workflow displays jobs in insertion
/// order; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobMatrix {
    jobs: Vec<JobDescriptor>,
}

impl JobMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, jobs: Vec<JobDescriptor>) {
        self.jobs.extend(jobs);
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn jobs(&self) -> &[JobDescriptor] {
        &self.jobs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobDescriptor> {
        self.jobs.iter()
    }
}
