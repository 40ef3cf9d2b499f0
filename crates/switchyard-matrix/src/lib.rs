//! Switchyard Matrix
//!
//! Compiles one CI trigger event into the ordered job matrix the workflow
//! runner executes. The compilation is a pure single-shot transformation:
//! classify the trigger, resolve the commit SHA under test (the only
//! external side effect), run every job kind builder, concatenate.

pub mod assembler;
pub mod builders;
pub mod classifier;
pub mod context;

use switchyard_core::Result;
use switchyard_core::job::JobMatrix;
use switchyard_core::platform::PlatformCatalogue;

use context::TriggerContext;

/// Compile a trigger into the full job matrix.
///
/// `baseline_sha` is the commit SHA handed in by the environment; it is
/// ignored on a try push, where the SHA is read off the checked-out ref
/// instead.
pub async fn compile(ctx: &TriggerContext, baseline_sha: Option<String>) -> Result<JobMatrix> {
    let catalogue = PlatformCatalogue::new();
    let classification = classifier::classify(ctx, baseline_sha).await?;
    assembler::assemble(&classification, &catalogue)
}
