#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use shortly::api::handlers::health_handler;
use shortly::api::routes::api_routes;
use shortly::application::services::LinkService;
use shortly::domain::entities::{Mapping, NewMapping};
use shortly::domain::repositories::MappingRepository;
use shortly::error::StoreError;
use shortly::infrastructure::cache::{CacheError, CacheResult, CacheService, MemoryCache};
use shortly::infrastructure::persistence::InMemoryMappingRepository;
use shortly::state::AppState;
use shortly::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

pub const BASE_URL: &str = "http://short.ly";

/// In-memory store that counts every call made to it.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryMappingRepository,
    calls: AtomicUsize,
    down: std::sync::atomic::AtomicBool,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Makes every following call fail as if the database were unreachable.
    pub fn take_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    /// Inserts directly, bypassing the call counter.
    pub async fn seed(&self, long_url: &str, short_code: &str) -> Mapping {
        self.inner
            .insert(NewMapping::new(long_url, short_code))
            .await
            .unwrap()
    }

    fn record(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(StoreError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingRepository for CountingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, StoreError> {
        self.record()?;
        self.inner.find_by_long_url(long_url).await
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, StoreError> {
        self.record()?;
        self.inner.find_by_short_code(short_code).await
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        self.record()?;
        self.inner.insert(new_mapping).await
    }

    async fn health_check(&self) -> bool {
        !self.down.load(Ordering::SeqCst)
    }
}

/// Memory cache that counts reads and writes.
pub struct CountingCache {
    inner: MemoryCache,
    gets: AtomicUsize,
    sets: AtomicUsize,
}

impl CountingCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(10_000),
            gets: AtomicUsize::new(0),
            sets: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    /// Reads without touching the counters.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl CacheService for CountingCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Cache whose backend is always unreachable.
pub struct UnreachableCache;

#[async_trait]
impl CacheService for UnreachableCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

/// Generator that replays a fixed list of codes, then falls back to random ones.
pub struct ScriptedGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
    fallback: RandomCodeGenerator,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: AtomicUsize::new(0),
            fallback: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

pub struct TestContext {
    pub service: Arc<LinkService>,
    pub repository: Arc<CountingRepository>,
    pub cache: Arc<CountingCache>,
}

pub fn create_test_context() -> TestContext {
    let repository = Arc::new(CountingRepository::new());
    let cache = Arc::new(CountingCache::new());

    let service = Arc::new(LinkService::new(
        repository.clone(),
        cache.clone(),
        Arc::new(RandomCodeGenerator::default()),
    ));

    TestContext {
        service,
        repository,
        cache,
    }
}

pub fn create_test_state(service: Arc<LinkService>) -> AppState {
    AppState::new(service, BASE_URL)
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state)
}
