//! Tests for the install handler — all-or-nothing precache semantics.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use vordr::{
    Fetch, LifecycleState, Request, Response, Result, ServiceWorker, Vordr, VordrError,
};

/// Mock fetcher serving a fixed set of paths; anything else is a
/// transport error.
struct StaticFetcher {
    routes: HashMap<String, Response>,
    calls: AtomicU32,
}

impl StaticFetcher {
    fn new() -> Self {
        Self {
            routes: HashMap::new(),
            calls: AtomicU32::new(0),
        }
    }

    fn route(mut self, path: &str, response: Response) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.routes
            .get(&request.url)
            .cloned()
            .ok_or_else(|| VordrError::Http(format!("connection refused: {}", request.url)))
    }
}

fn asset(body: &str) -> Response {
    Response::with_body(200, body)
}

const APP_SHELL: [&str; 4] = ["/", "/index.html", "/publications.csv", "/assets/logo.png"];

fn shell_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .route("/", asset("home"))
        .route("/index.html", asset("index"))
        .route("/publications.csv", asset("title,year"))
        .route("/assets/logo.png", asset("png-bytes"))
}

#[tokio::test]
async fn install_populates_every_manifest_path() {
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .precache(APP_SHELL)
        .fetcher(Arc::new(shell_fetcher()))
        .build()
        .unwrap();

    worker.install().await.unwrap();
    assert!(worker.is_active());

    let storage = worker.storage();
    let store = storage.get("app-v1").unwrap();
    for path in APP_SHELL {
        let cached = store.matching(&Request::get(path));
        assert!(cached.is_some(), "no snapshot stored for {path}");
        assert!(!cached.unwrap().body.is_empty());
    }
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn failing_manifest_fetch_fails_install() {
    // "/assets/logo.png" is not routed, so its fetch is a transport error.
    let fetcher = StaticFetcher::new()
        .route("/", asset("home"))
        .route("/index.html", asset("index"))
        .route("/publications.csv", asset("csv"));
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .precache(APP_SHELL)
        .fetcher(Arc::new(fetcher))
        .build()
        .unwrap();

    let err = worker.install().await.unwrap_err();
    assert!(matches!(err, VordrError::Install { .. }));
    assert_eq!(worker.state(), LifecycleState::Failed);
    assert!(!worker.is_active());
}

#[tokio::test]
async fn non_success_status_fails_install() {
    let fetcher = shell_fetcher().route("/index.html", Response::new(404));
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .precache(APP_SHELL)
        .fetcher(Arc::new(fetcher))
        .build()
        .unwrap();

    let err = worker.install().await.unwrap_err();
    match err {
        VordrError::PrecacheStatus { path, status } => {
            assert_eq!(path, "/index.html");
            assert_eq!(status, 404);
        }
        other => panic!("expected PrecacheStatus, got {other}"),
    }
    assert!(!worker.is_active());
}

#[tokio::test]
async fn failed_install_writes_nothing() {
    let fetcher = StaticFetcher::new().route("/", asset("home"));
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .precache(["/", "/missing"])
        .fetcher(Arc::new(fetcher))
        .build()
        .unwrap();

    assert!(worker.install().await.is_err());

    // The batch is fetched before anything is written, so the store holds
    // no partial entries from this attempt.
    let storage = worker.storage();
    assert!(storage.match_request(&Request::get("/")).is_none());
}

#[tokio::test]
async fn empty_manifest_install_succeeds_without_fetching() {
    let fetcher = Arc::new(StaticFetcher::new());
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .fetcher(fetcher.clone())
        .build()
        .unwrap();

    worker.install().await.unwrap();
    assert!(worker.is_active());
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn install_is_idempotent() {
    let fetcher = Arc::new(shell_fetcher());
    let worker = Vordr::builder()
        .cache_name("app-v1")
        .precache(APP_SHELL)
        .fetcher(fetcher.clone())
        .build()
        .unwrap();

    worker.install().await.unwrap();
    worker.install().await.unwrap();

    assert!(worker.is_active());
    assert_eq!(fetcher.call_count(), 8);

    let storage = worker.storage();
    assert_eq!(storage.store_names(), ["app-v1"]);
    assert_eq!(storage.get("app-v1").unwrap().len(), 4);
}

#[test]
fn build_without_fetcher_is_an_error() {
    let err = Vordr::builder().cache_name("app-v1").build().unwrap_err();
    assert!(matches!(err, VordrError::NoFetcher));
}

#[test]
fn build_with_empty_cache_name_is_an_error() {
    let err = Vordr::builder()
        .cache_name("")
        .fetcher(Arc::new(StaticFetcher::new()))
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::Configuration(_)));
}

#[test]
fn build_rejects_relative_precache_paths() {
    let err = Vordr::builder()
        .precache(["index.html"])
        .fetcher(Arc::new(StaticFetcher::new()))
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::InvalidManifest(_)));
}
