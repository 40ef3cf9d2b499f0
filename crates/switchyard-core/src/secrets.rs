//! Secret exposure policy.
//!
//! Jobs reference secrets by name only; the workflow runner injects the
//! values. A name may be attached to a job only when the originating
//! context is trusted: fork pull requests never see write-scoped tokens.

/// Docs hosting credentials, exposed only to the job that actually
/// deploys.
pub const DOCS_DEPLOY: &[&str] = &["CF_DOCS_API_KEY", "CF_DOCS_ACCOUNT_ID"];

/// Coverage upload token, withheld from fork pull requests.
pub const COVERAGE: &[&str] = &["CODECOV_TOKEN"];
