//! Job kind builders.
//!
//! Each builder combines the classification with the platform catalogue
//! and returns the jobs for one kind. A primary job always runs on Linux
//! x86_64; the remaining platforms join only on a merge-train push, which
//! gates actual integration and pays for full cross-platform
//! verification. Ordinary pull requests and branch pushes get fast
//! single-platform feedback.

use switchyard_core::Result;
use switchyard_core::job::{
    ClippyParams, DocsParams, FmtParams, GrindParams, JobDescriptor, JobParams, SemverChecksParams,
    TestParams, WorkspaceDepsParams,
};
use switchyard_core::platform::{Platform, PlatformCatalogue, PlatformDescriptor};
use switchyard_core::secrets;
use switchyard_core::toolchain::ToolchainSpec;

use crate::classifier::{EventClassification, MergeTrainMode};

/// FFmpeg version the workspace links against; runners whose job compiles
/// the workspace install the same version.
pub const FFMPEG_VERSION: &str = "7.1";

const VALGRIND: &str =
    "valgrind --error-exitcode=1 --leak-check=full --suppressions=./valgrind.supp";

fn fan_out<'a>(
    class: &EventClassification,
    catalogue: &'a PlatformCatalogue,
) -> Vec<&'a PlatformDescriptor> {
    if class.is_merge_train {
        catalogue.fan_out().collect()
    } else {
        catalogue.fan_out().take(1).collect()
    }
}

fn is_primary(descriptor: &PlatformDescriptor) -> bool {
    descriptor.platform == Platform::LinuxX86_64
}

pub fn docs(
    class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let mut jobs = Vec::new();
    for descriptor in fan_out(class, catalogue) {
        let primary = is_primary(descriptor);
        // Merge-mode trains hold the deploy back; it happens after the
        // merge itself succeeds.
        let deploy_docs =
            primary && !class.is_train(MergeTrainMode::Merge) && !class.is_fork_pull_request;

        let mut job = JobDescriptor::new(
            descriptor.runner,
            format!("Docs ({})", descriptor.display_name),
            ToolchainSpec::nightly(
                format!("docs-{}", descriptor.slug),
                descriptor.cache_backend,
            )
            .with_components("rust-docs"),
            JobParams::Docs(DocsParams {
                artifact_name: primary.then(|| "docs".to_string()),
                deploy_docs,
                pr_number: class.pull_request_number,
            }),
        )
        .with_ffmpeg(FFMPEG_VERSION);

        if deploy_docs {
            job = job.with_secrets(secrets::DOCS_DEPLOY);
        }
        jobs.push(job);
    }
    Ok(jobs)
}

pub fn clippy(
    class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let mut jobs = Vec::new();
    for descriptor in fan_out(class, catalogue) {
        jobs.push(
            JobDescriptor::new(
                descriptor.runner,
                format!("Clippy ({})", descriptor.display_name),
                ToolchainSpec::nightly(
                    format!("clippy-{}", descriptor.slug),
                    descriptor.cache_backend,
                )
                .with_components("rust-clippy")
                .with_tools("cargo-nextest,cargo-llvm-cov"),
                JobParams::Clippy(ClippyParams {
                    powerset: class.is_merge_train || !is_primary(descriptor),
                }),
            )
            .with_ffmpeg(FFMPEG_VERSION),
        );
    }
    Ok(jobs)
}

pub fn test(
    class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let mut jobs = Vec::new();
    for descriptor in fan_out(class, catalogue) {
        let mut job = JobDescriptor::new(
            descriptor.runner,
            format!("Test ({})", descriptor.display_name),
            ToolchainSpec::nightly(
                format!("test-{}", descriptor.slug),
                descriptor.cache_backend,
            )
            .with_components("llvm-tools-preview")
            .with_tools("cargo-nextest,cargo-llvm-cov"),
            JobParams::Test(TestParams {
                pr_number: class.pull_request_number,
                commit_sha: class.commit_sha.clone(),
            }),
        )
        .with_ffmpeg(FFMPEG_VERSION);

        if !class.is_fork_pull_request {
            job = job.with_secrets(secrets::COVERAGE);
        }
        jobs.push(job);
    }
    Ok(jobs)
}

/// Memory checking runs only on the merge train; Valgrind is Linux-only
/// and too slow for per-push feedback.
pub fn grind(
    class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    if !class.is_merge_train {
        return Ok(Vec::new());
    }

    let targets = [
        (Platform::LinuxX86_64, "X86_64_UNKNOWN_LINUX_GNU"),
        (Platform::LinuxArm64, "AARCH64_UNKNOWN_LINUX_GNU"),
    ];

    let mut jobs = Vec::new();
    for (platform, triple) in targets {
        let descriptor = catalogue.lookup(platform)?;
        jobs.push(
            JobDescriptor::new(
                descriptor.runner,
                format!("Grind ({})", descriptor.display_name),
                ToolchainSpec::nightly(
                    format!("grind-{}", descriptor.slug),
                    descriptor.cache_backend,
                )
                .with_components("rust-valgrind"),
                JobParams::Grind(GrindParams {
                    env: format!("CARGO_TARGET_{triple}_RUNNER={VALGRIND}"),
                }),
            )
            .with_ffmpeg(FFMPEG_VERSION),
        );
    }
    Ok(jobs)
}

pub fn fmt(
    _class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let descriptor = catalogue.lookup(Platform::Default)?;
    Ok(vec![JobDescriptor::new(
        descriptor.runner,
        "Fmt",
        ToolchainSpec::nightly("fmt", descriptor.cache_backend).with_components("rustfmt"),
        JobParams::Fmt(FmtParams {}),
    )])
}

pub fn workspace_deps(
    _class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let descriptor = catalogue.lookup(Platform::Default)?;
    Ok(vec![JobDescriptor::new(
        descriptor.runner,
        "Workspace Deps",
        ToolchainSpec::nightly("workspace-deps", descriptor.cache_backend)
            .with_tools("cargo-hakari"),
        JobParams::WorkspaceDeps(WorkspaceDepsParams {}),
    )])
}

/// Runs on stable: the check must see what downstream consumers on stable
/// actually see.
pub fn semver_checks(
    _class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<Vec<JobDescriptor>> {
    let descriptor = catalogue.lookup(Platform::LinuxX86_64)?;
    Ok(vec![
        JobDescriptor::new(
            descriptor.runner,
            format!("Semver Checks ({})", descriptor.display_name),
            ToolchainSpec::stable("semver-checks", descriptor.cache_backend)
                .with_tools("cargo-semver-checks"),
            JobParams::SemverChecks(SemverChecksParams {}),
        )
        .with_ffmpeg(FFMPEG_VERSION),
    ])
}
