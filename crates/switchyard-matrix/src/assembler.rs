//! Matrix assembly and serialization.

use switchyard_core::Result;
use switchyard_core::job::JobMatrix;
use switchyard_core::platform::PlatformCatalogue;
use tracing::info;

use crate::builders;
use crate::classifier::EventClassification;

/// Concatenate every builder's output. The kind order is fixed and
/// observable: the consuming workflow displays jobs in exactly this
/// order.
pub fn assemble(
    class: &EventClassification,
    catalogue: &PlatformCatalogue,
) -> Result<JobMatrix> {
    let mut matrix = JobMatrix::new();
    matrix.extend(builders::docs(class, catalogue)?);
    matrix.extend(builders::clippy(class, catalogue)?);
    matrix.extend(builders::test(class, catalogue)?);
    matrix.extend(builders::grind(class, catalogue)?);
    matrix.extend(builders::fmt(class, catalogue)?);
    matrix.extend(builders::workspace_deps(class, catalogue)?);
    matrix.extend(builders::semver_checks(class, catalogue)?);

    info!(jobs = matrix.len(), "assembled job matrix");
    Ok(matrix)
}

/// The single output line the workflow consumes.
pub fn render(matrix: &JobMatrix) -> Result<String> {
    Ok(format!("matrix={}", serde_json::to_string(matrix)?))
}
