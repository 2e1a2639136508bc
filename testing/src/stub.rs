use async_trait::async_trait;
use dashmap::DashMap;
use panel_config::{ConfigDocument, ConfigError, ConfigKind, ConfigProvider};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// What the stub answers for one fetch.
#[derive(Debug, Clone)]
pub enum StubResponse {
    Document(ConfigDocument),
    Fail(String),
}

/// Programmable provider for loader tests.
///
/// One-shot responses queued with [`StubProvider::push`] are served first;
/// after that the standing response set with [`StubProvider::program`]
/// applies. Kinds with neither fail. Every served document is a fresh
/// allocation, like a real provider re-reading its source.
#[derive(Default)]
pub struct StubProvider {
    queued: Mutex<HashMap<ConfigKind, VecDeque<StubResponse>>>,
    standing: Mutex<HashMap<ConfigKind, StubResponse>>,
    calls: DashMap<ConfigKind, usize>,
    delay: Mutex<Option<Duration>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub that serves the shipped sample for every kind.
    pub fn with_samples() -> Self {
        let stub = Self::new();
        for kind in ConfigKind::ALL {
            stub.program(kind, StubResponse::Document(crate::sample_document(kind)));
        }
        stub
    }

    pub fn program(&self, kind: ConfigKind, response: StubResponse) {
        self.standing.lock().insert(kind, response);
    }

    pub fn push(&self, kind: ConfigKind, response: StubResponse) {
        self.queued.lock().entry(kind).or_default().push_back(response);
    }

    /// Makes every fetch sleep first.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn calls(&self, kind: ConfigKind) -> usize {
        self.calls.get(&kind).map(|c| *c).unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }

    fn next_response(&self, kind: ConfigKind) -> Option<StubResponse> {
        if let Some(response) = self.queued.lock().get_mut(&kind).and_then(VecDeque::pop_front) {
            return Some(response);
        }
        self.standing.lock().get(&kind).cloned()
    }
}

#[async_trait]
impl ConfigProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch(&self, kind: ConfigKind) -> panel_config::Result<ConfigDocument> {
        *self.calls.entry(kind).or_insert(0) += 1;
        tracing::debug!(kind = %kind, "stub provider fetch");

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_response(kind) {
            Some(StubResponse::Document(document)) => Ok(fresh_copy(&document)),
            Some(StubResponse::Fail(reason)) => Err(ConfigError::fetch(kind, reason)),
            None => Err(ConfigError::fetch(kind, "stub not programmed")),
        }
    }
}

fn fresh_copy(document: &ConfigDocument) -> ConfigDocument {
    match document {
        ConfigDocument::Windows(c) => ConfigDocument::Windows(Arc::new(c.as_ref().clone())),
        ConfigDocument::Android(c) => ConfigDocument::Android(Arc::new(c.as_ref().clone())),
        ConfigDocument::Device(c) => ConfigDocument::Device(Arc::new(c.as_ref().clone())),
    }
}
