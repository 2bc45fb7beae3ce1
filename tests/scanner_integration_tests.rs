//! Integration tests for hubscan.
//!
//! These tests drive the scan orchestration end to end against the
//! in-memory host, covering file counting, manifest selection, aggregation
//! atomicity, batch windowing and the global concurrency ceiling.

use std::sync::Arc;
use std::time::Duration;

use hubscan::{
    BatchScanUseCase, Commands, ConcurrencyLimiter, Container, ContainerConfig, EntryKind,
    InMemoryHost, ListRepositoriesUseCase, RepositoryDetailUseCase, RepositoryHost, Router,
    TreeEntry, TreeWalker, WebhookRecord, MAX_TREE_DEPTH,
};

fn summary(name: &str, size: u64, private: bool) -> hubscan::RepositorySummary {
    hubscan::RepositorySummary::new(name.to_string(), size, "octocat".to_string(), private)
}

fn hook(id: u64, active: bool) -> WebhookRecord {
    WebhookRecord::new(
        "Repository".to_string(),
        id,
        active,
        format!("https://example.com/hooks/{id}"),
    )
}

fn file(name: &str, path: &str) -> TreeEntry {
    TreeEntry::new(name, path, EntryKind::File)
}

fn dir(name: &str, path: &str) -> TreeEntry {
    TreeEntry::new(name, path, EntryKind::Dir)
}

/// Three directories, five files, one manifest nested two levels deep.
fn nested_host() -> InMemoryHost {
    InMemoryHost::new()
        .with_repository(summary("nested", 10, false))
        .with_listing(
            "nested",
            "",
            vec![
                dir("src", "src"),
                file("README.md", "README.md"),
                file("Cargo.toml", "Cargo.toml"),
            ],
        )
        .with_listing(
            "nested",
            "src",
            vec![dir("ci", "src/ci"), file("main.rs", "src/main.rs")],
        )
        .with_listing(
            "nested",
            "src/ci",
            vec![
                file("deploy.yaml", "src/ci/deploy.yaml"),
                file("notes.txt", "src/ci/notes.txt"),
            ],
        )
        .with_blob("nested", "src/ci/deploy.yaml", "stage: deploy\n")
}

#[tokio::test]
async fn test_tree_walk_counts_every_leaf() {
    let host = Arc::new(nested_host());
    let walker = TreeWalker::new(host.clone(), ConcurrencyLimiter::new(4));

    let result = walker.walk("nested").await.unwrap();

    assert_eq!(result.file_count(), 5);
    assert_eq!(result.manifest_path(), Some("src/ci/deploy.yaml"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_first_manifest_follows_traversal_order_not_completion_order() {
    // The directory entry precedes root-level top.yml in the listing, so
    // the nested manifest wins even though the nested branch needs two
    // extra fetches and completes later.
    let host = Arc::new(
        InMemoryHost::new()
            .with_listing(
                "repo",
                "",
                vec![dir("a", "a"), file("top.yml", "top.yml")],
            )
            .with_listing("repo", "a", vec![dir("b", "a/b")])
            .with_listing("repo", "a/b", vec![file("deep.yaml", "a/b/deep.yaml")])
            .with_fetch_delay(Duration::from_millis(5)),
    );
    let walker = TreeWalker::new(host.clone(), ConcurrencyLimiter::new(4));

    let result = walker.walk("repo").await.unwrap();

    assert_eq!(result.file_count(), 2);
    assert_eq!(result.manifest_path(), Some("a/b/deep.yaml"));
}

#[tokio::test]
async fn test_first_manifest_prefers_earlier_listing_position() {
    let host = Arc::new(
        InMemoryHost::new()
            .with_listing(
                "repo",
                "",
                vec![file("top.yml", "top.yml"), dir("a", "a")],
            )
            .with_listing("repo", "a", vec![file("deep.yaml", "a/deep.yaml")]),
    );
    let walker = TreeWalker::new(host.clone(), ConcurrencyLimiter::new(4));

    let result = walker.walk("repo").await.unwrap();

    assert_eq!(result.manifest_path(), Some("top.yml"));
}

#[tokio::test]
async fn test_walk_refuses_pathological_depth() {
    let mut host = InMemoryHost::new();
    let mut path = String::new();
    for level in 0..=(MAX_TREE_DEPTH + 1) {
        let child = if path.is_empty() {
            format!("d{level}")
        } else {
            format!("{path}/d{level}")
        };
        host = host.with_listing("deep", &path, vec![dir(&format!("d{level}"), &child)]);
        path = child;
    }
    let walker = TreeWalker::new(Arc::new(host), ConcurrencyLimiter::new(2));

    let err = walker.walk("deep").await.unwrap_err();

    assert!(matches!(err, hubscan::DomainError::DepthExceeded(_)));
}

#[tokio::test]
async fn test_detail_merges_metadata_tree_manifest_and_active_hooks() {
    let host = Arc::new(nested_host().with_webhooks(
        "nested",
        vec![hook(1, true), hook(2, false), hook(3, true)],
    ));
    let use_case = RepositoryDetailUseCase::new(host, ConcurrencyLimiter::new(4));

    let detail = use_case.execute("nested").await.unwrap();

    assert_eq!(detail.name(), "nested");
    assert_eq!(detail.owner(), "octocat");
    assert_eq!(detail.size(), 10);
    assert!(!detail.is_private());
    assert_eq!(detail.file_count(), 5);
    assert_eq!(detail.manifest_content(), "stage: deploy\n");
    // Active entries only, original relative order.
    let ids: Vec<u64> = detail.webhooks().iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_detail_of_empty_repository() {
    let host = Arc::new(
        InMemoryHost::new()
            .with_repository(summary("empty", 0, true))
            .with_listing("empty", "", Vec::new()),
    );
    let use_case = RepositoryDetailUseCase::new(host, ConcurrencyLimiter::new(2));

    let detail = use_case.execute("empty").await.unwrap();

    assert_eq!(detail.file_count(), 0);
    assert_eq!(detail.manifest_content(), "");
    assert!(detail.webhooks().is_empty());
}

#[tokio::test]
async fn test_nested_listing_failure_fails_whole_detail() {
    let host = Arc::new(
        nested_host()
            .with_webhooks("nested", vec![hook(1, true)])
            .fail_listing("nested", "src/ci"),
    );
    let use_case = RepositoryDetailUseCase::new(host, ConcurrencyLimiter::new(4));

    let err = use_case.execute("nested").await.unwrap_err();

    assert!(err.is_remote_fetch());
}

#[tokio::test]
async fn test_webhook_failure_fails_whole_detail() {
    // A failing webhook fetch must fail the call, never silently yield an
    // empty webhook list.
    let host = Arc::new(nested_host().fail_webhooks("nested"));
    let use_case = RepositoryDetailUseCase::new(host, ConcurrencyLimiter::new(4));

    assert!(use_case.execute("nested").await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_preserves_input_order_under_ceiling() {
    let names: Vec<String> = (1..=7).map(|i| format!("r{i}")).collect();
    let mut host = InMemoryHost::new().with_fetch_delay(Duration::from_millis(5));
    for name in &names {
        host = host.with_repository(summary(name, 1, false));
    }
    let host = Arc::new(host);
    let dyn_host: Arc<dyn RepositoryHost> = host.clone();
    let use_case = BatchScanUseCase::new(dyn_host, ConcurrencyLimiter::new(3));

    let summaries = use_case.execute(&names).await.unwrap();

    let order: Vec<&str> = summaries.iter().map(|s| s.name()).collect();
    assert_eq!(order, vec!["r1", "r2", "r3", "r4", "r5", "r6", "r7"]);
    assert!(host.max_in_flight() <= 3);
}

#[tokio::test]
async fn test_batch_fails_whole_on_any_member() {
    let host = Arc::new(InMemoryHost::new().with_repository(summary("known", 1, false)));
    let use_case = BatchScanUseCase::new(host, ConcurrencyLimiter::new(2));

    let repos = vec!["known".to_string(), "missing".to_string()];
    assert!(use_case.execute(&repos).await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ceiling_is_global_across_a_deep_walk() {
    // A wide single-repository walk alone must not exceed the ceiling.
    let mut host = InMemoryHost::new().with_fetch_delay(Duration::from_millis(5));
    let root: Vec<TreeEntry> = (0..10).map(|i| dir(&format!("d{i}"), &format!("d{i}"))).collect();
    host = host.with_listing("wide", "", root);
    for i in 0..10 {
        host = host.with_listing(
            "wide",
            &format!("d{i}"),
            vec![file("f.txt", &format!("d{i}/f.txt"))],
        );
    }
    let host = Arc::new(host);
    let walker = TreeWalker::new(host.clone(), ConcurrencyLimiter::new(2));

    let result = walker.walk("wide").await.unwrap();

    assert_eq!(result.file_count(), 10);
    assert!(host.max_in_flight() <= 2);
}

#[tokio::test]
async fn test_list_repositories_preserves_provider_order() {
    let host = Arc::new(
        InMemoryHost::new()
            .with_repository(summary("one", 1, false))
            .with_repository(summary("two", 2, true)),
    );
    let use_case = ListRepositoriesUseCase::new(host, ConcurrencyLimiter::new(1));

    let repos = use_case.execute().await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name(), "one");
    assert_eq!(repos[1].name(), "two");
}

#[tokio::test]
async fn test_mock_container_serves_all_operations() {
    let config = ContainerConfig {
        token: None,
        concurrency_limit: 3,
        login: None,
        repo_list: vec!["alpha".to_string(), "beta".to_string()],
        mock: true,
    };
    let container = Container::new(config).await.unwrap();
    let router = Router::new(&container);

    let list = router.route(Commands::List).await.unwrap();
    assert!(list.contains("alpha"));
    assert!(list.contains("beta"));

    let detail = router
        .route(Commands::Detail {
            repo_name: "alpha".to_string(),
        })
        .await
        .unwrap();
    assert!(detail.contains("Files: 4"));
    assert!(detail.contains("on: push"));
    assert!(detail.contains("#1"));
    assert!(!detail.contains("#2"));

    let batch = router.route(Commands::Batch).await.unwrap();
    assert!(batch.contains("alpha"));
    assert!(batch.contains("beta"));
}
