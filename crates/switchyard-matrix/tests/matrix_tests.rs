//! End-to-end compilation tests over whole trigger contexts.

use switchyard_matrix::assembler;
use switchyard_matrix::context::TriggerContext;

fn upstream_pr_context() -> TriggerContext {
    TriggerContext::from_json(
        r#"{
            "event_name": "pull_request",
            "ref": "refs/pull/123/merge",
            "event": {
                "number": 123,
                "pull_request": {
                    "head": {"repo": {"full_name": "switchyard-dev/switchyard"}}
                }
            }
        }"#,
    )
    .unwrap()
}

fn fork_pr_context() -> TriggerContext {
    TriggerContext::from_json(
        r#"{
            "event_name": "pull_request",
            "ref": "refs/pull/124/merge",
            "event": {
                "number": 124,
                "pull_request": {
                    "head": {"repo": {"full_name": "outsider/switchyard"}}
                }
            }
        }"#,
    )
    .unwrap()
}

fn merge_train_context() -> TriggerContext {
    TriggerContext::from_json(
        r#"{"event_name": "push", "ref": "refs/heads/automation/brawl/merge/batch-1", "event": {}}"#,
    )
    .unwrap()
}

fn sha() -> Option<String> {
    Some("0123456789abcdef0123456789abcdef01234567".to_string())
}

#[tokio::test]
async fn test_pull_request_gets_one_job_per_kind() {
    let matrix = switchyard_matrix::compile(&upstream_pr_context(), sha())
        .await
        .unwrap();
    assert_eq!(matrix.len(), 6);

    let line = assembler::render(&matrix).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(line.strip_prefix("matrix=").unwrap()).unwrap();
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["docs", "clippy", "test", "fmt", "workspace-deps", "semver-checks"]
    );
}

#[tokio::test]
async fn test_merge_train_fans_out() {
    let matrix = switchyard_matrix::compile(&merge_train_context(), sha())
        .await
        .unwrap();
    assert_eq!(matrix.len(), 20);

    let fanned = |kind: &str| {
        matrix
            .iter()
            .filter(|job| serde_json::to_value(job.kind).unwrap() == kind)
            .count()
    };
    assert_eq!(fanned("docs"), 5);
    assert_eq!(fanned("clippy"), 5);
    assert_eq!(fanned("test"), 5);
    assert_eq!(fanned("grind"), 2);
    assert_eq!(fanned("fmt"), 1);
    assert_eq!(fanned("workspace-deps"), 1);
    assert_eq!(fanned("semver-checks"), 1);
}

#[tokio::test]
async fn test_merge_mode_never_deploys_docs() {
    let matrix = switchyard_matrix::compile(&merge_train_context(), sha())
        .await
        .unwrap();
    let line = assembler::render(&matrix).unwrap();
    assert!(!line.contains("\"deploy_docs\":true"));
}

#[tokio::test]
async fn test_fork_pull_request_sees_no_secrets() {
    let matrix = switchyard_matrix::compile(&fork_pr_context(), sha())
        .await
        .unwrap();
    assert!(matrix.iter().all(|job| job.secrets.is_none()));

    let line = assembler::render(&matrix).unwrap();
    assert!(!line.contains("CODECOV_TOKEN"));
    assert!(!line.contains("CF_DOCS_API_KEY"));
}

#[tokio::test]
async fn test_upstream_pull_request_deploys_and_uploads_coverage() {
    let matrix = switchyard_matrix::compile(&upstream_pr_context(), sha())
        .await
        .unwrap();
    let line = assembler::render(&matrix).unwrap();
    assert!(line.contains("\"deploy_docs\":true"));
    assert!(line.contains("CODECOV_TOKEN"));
    assert!(line.contains("CF_DOCS_API_KEY"));
}

#[tokio::test]
async fn test_compilation_is_idempotent() {
    let first = switchyard_matrix::compile(&merge_train_context(), sha())
        .await
        .unwrap();
    let second = switchyard_matrix::compile(&merge_train_context(), sha())
        .await
        .unwrap();
    assert_eq!(
        assembler::render(&first).unwrap(),
        assembler::render(&second).unwrap()
    );
}

#[tokio::test]
async fn test_commit_sha_threads_into_test_jobs() {
    let matrix = switchyard_matrix::compile(&upstream_pr_context(), sha())
        .await
        .unwrap();
    let line = assembler::render(&matrix).unwrap();
    assert!(line.contains("0123456789abcdef0123456789abcdef01234567"));
}
