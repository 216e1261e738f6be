//! Repository contract: every adapter must pass with identical outcomes

use std::collections::HashSet;
use std::sync::Arc;

use errep_application::ports::registry::{AdapterRegistry, PortKind, RepositoryAdapterConfig};
use errep_domain::ports::ErrorReportRepository;
use errep_domain::{Error, ErrorReport, ReportId, ReportStatus};
use tempfile::TempDir;

/// A repository under test plus whatever keeps its storage alive
struct Fixture {
    key: &'static str,
    repository: Arc<dyn ErrorReportRepository>,
    _dir: TempDir,
}

fn fixtures() -> Vec<Fixture> {
    let registry = AdapterRegistry::discover().expect("registry");
    registry
        .keys(PortKind::Repository)
        .into_iter()
        .map(|key| {
            let dir = tempfile::tempdir().expect("tempdir");
            let config = RepositoryAdapterConfig::new(key).with_data_dir(dir.path());
            let repository = registry
                .resolve_repository(&config)
                .unwrap_or_else(|e| panic!("adapter '{key}' failed to build: {e}"));
            Fixture {
                key,
                repository,
                _dir: dir,
            }
        })
        .collect()
}

fn validated(job_id: &str, original: &str, corrected: &str) -> ErrorReport {
    let mut report = ErrorReport::new(job_id, "s1", original, corrected);
    report.mark_validated().expect("pending report validates");
    report
}

#[test]
fn test_every_builtin_adapter_is_covered() {
    let keys: Vec<_> = fixtures().iter().map(|f| f.key).collect();
    assert!(keys.contains(&"in_memory"), "{keys:?}");
    assert!(keys.contains(&"filesystem"), "{keys:?}");
}

#[tokio::test]
async fn test_save_then_get_round_trips() {
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        let report = validated("j1", "teh cat", "the cat");

        let id = repository.save(&report).await.expect("save");
        let stored = repository
            .get_by_id(&id)
            .await
            .expect("lookup")
            .unwrap_or_else(|| panic!("{key}: saved report not found"));

        assert!(stored.same_content(&report), "{key}: content changed");
        assert_eq!(stored.id(), Some(&id), "{key}");
        assert_eq!(stored.status(), ReportStatus::Persisted, "{key}");
    }
}

#[tokio::test]
async fn test_unknown_id_is_empty_not_error() {
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        for id in [ReportId::generate(), ReportId::new("does-not-exist"), ReportId::new("")] {
            let found = repository
                .get_by_id(&id)
                .await
                .unwrap_or_else(|e| panic!("{key}: lookup of {id:?} failed: {e}"));
            assert!(found.is_none(), "{key}: {id:?} should be unknown");
        }
    }
}

#[tokio::test]
async fn test_unvalidated_report_is_rejected() {
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        let pending = ErrorReport::new("j1", "s1", "a", "b");

        let err = repository.save(&pending).await.expect_err(key);
        assert!(
            matches!(err, Error::InvalidTransition { .. }),
            "{key}: unexpected error {err}"
        );
    }
}

#[tokio::test]
async fn test_persisted_report_cannot_be_saved_again() {
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        let id = repository
            .save(&validated("j1", "a", "b"))
            .await
            .expect("save");
        let stored = repository
            .get_by_id(&id)
            .await
            .expect("lookup")
            .expect("stored");

        let err = repository.save(&stored).await.expect_err(key);
        assert!(
            matches!(err, Error::ImmutableReport { .. }),
            "{key}: unexpected error {err}"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_never_collide() {
    const N: usize = 32;
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        let handles: Vec<_> = (0..N)
            .map(|i| {
                let repository = Arc::clone(repository);
                tokio::spawn(async move {
                    let report = validated("j-concurrent", &format!("original {i}"), "corrected");
                    let id = repository.save(&report).await.expect("save");
                    (id, report)
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let (id, report) = handle.await.expect("join");
            let stored = repository
                .get_by_id(&id)
                .await
                .expect("lookup")
                .unwrap_or_else(|| panic!("{key}: lost write for {id}"));
            assert!(stored.same_content(&report), "{key}: overwritten {id}");
            ids.insert(id);
        }
        assert_eq!(ids.len(), N, "{key}: identifier collision");
    }
}

#[tokio::test]
async fn test_list_by_job_filters_and_orders() {
    for fixture in fixtures() {
        let Fixture { key, repository, .. } = &fixture;
        let mut expected = HashSet::new();
        for text in ["one", "two", "three"] {
            expected.insert(
                repository
                    .save(&validated("j-list", text, text))
                    .await
                    .expect("save"),
            );
        }
        repository
            .save(&validated("j-other", "x", "y"))
            .await
            .expect("save");

        let listed = repository.list_by_job("j-list").await.expect("list");
        let listed_ids: HashSet<_> = listed.iter().filter_map(|r| r.id().cloned()).collect();
        assert_eq!(listed_ids, expected, "{key}");
        assert!(
            listed.windows(2).all(|w| w[0].created_at() <= w[1].created_at()),
            "{key}: not ordered by creation time"
        );

        let none = repository.list_by_job("j-unknown").await.expect("list");
        assert!(none.is_empty(), "{key}");
    }
}
