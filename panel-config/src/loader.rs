//! # Configuration Loader
//!
//! Single entry point for obtaining configuration documents.
//!
//! A cache hit returns the stored `Arc` without touching the provider. A miss
//! fetches from the provider, bounded by the fetch timeout and an optional
//! cancellation token, and caches only successful results. Concurrent misses
//! for the same kind share one fetch: later callers wait for the in-flight
//! fetch and then read the cache; if that fetch failed, the next waiter tries
//! again on its own.

use crate::documents::{AndroidConfig, ConfigDocument, ConfigSet, DeviceConfig, WindowsConfig};
use crate::error::{ConfigError, Result};
use crate::kind::ConfigKind;
use crate::provider::ConfigProvider;
use crate::provider::selection::{HostEnvironment, select_provider};
use crate::settings::LoaderSettings;
use crate::store::ConfigStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ConfigLoader {
    store: Arc<ConfigStore>,
    provider: Arc<dyn ConfigProvider>,
    fetch_timeout: Duration,
    in_flight: [Mutex<()>; 3],
}

impl ConfigLoader {
    pub fn new(store: Arc<ConfigStore>, provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            store,
            provider,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            in_flight: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn from_settings(
        store: Arc<ConfigStore>,
        provider: Arc<dyn ConfigProvider>,
        settings: &LoaderSettings,
    ) -> Self {
        Self::new(store, provider).with_fetch_timeout(settings.fetch_timeout())
    }

    /// Builds a loader with a fresh store, selecting the provider from the
    /// process environment.
    pub fn from_env() -> Result<Self> {
        let settings = LoaderSettings::from_env()?;
        let environment = HostEnvironment::detect()?;
        let provider = select_provider(&environment, &settings);
        Ok(Self::from_settings(
            Arc::new(ConfigStore::new()),
            Arc::new(provider),
            &settings,
        ))
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Returns the document for `kind`, fetching it on first use.
    pub async fn load(&self, kind: ConfigKind) -> Result<ConfigDocument> {
        self.load_inner(kind, None).await
    }

    /// Like [`ConfigLoader::load`], abandoning the fetch when `cancel` fires.
    pub async fn load_with_cancel(
        &self,
        kind: ConfigKind,
        cancel: &CancellationToken,
    ) -> Result<ConfigDocument> {
        self.load_inner(kind, Some(cancel)).await
    }

    /// Resolves a key given as text (`android` or `android-config`).
    ///
    /// Unknown keys fail with `InvalidArgument` before any provider call.
    pub async fn load_by_name(&self, key: &str) -> Result<ConfigDocument> {
        let kind = key.parse::<ConfigKind>()?;
        self.load(kind).await
    }

    pub async fn windows(&self) -> Result<Arc<WindowsConfig>> {
        let document = self.load(ConfigKind::Windows).await?;
        document
            .as_windows()
            .cloned()
            .ok_or_else(|| mismatched(ConfigKind::Windows, &document))
    }

    pub async fn android(&self) -> Result<Arc<AndroidConfig>> {
        let document = self.load(ConfigKind::Android).await?;
        document
            .as_android()
            .cloned()
            .ok_or_else(|| mismatched(ConfigKind::Android, &document))
    }

    pub async fn device(&self) -> Result<Arc<DeviceConfig>> {
        let document = self.load(ConfigKind::Device).await?;
        document
            .as_device()
            .cloned()
            .ok_or_else(|| mismatched(ConfigKind::Device, &document))
    }

    /// Drops the cached entry for `kind` and fetches it again.
    ///
    /// Always calls the provider once. On failure the entry stays absent.
    pub async fn reload(&self, kind: ConfigKind) -> Result<ConfigDocument> {
        let _guard = self.in_flight[kind.slot()].lock().await;
        self.store.clear(Some(kind));

        let document = self.fetch_bounded(kind, None).await?;
        self.store.put(kind, document.clone());
        Ok(document)
    }

    /// Loads all three documents concurrently.
    ///
    /// Waits for every load to settle; any failure fails the whole call and
    /// no partial set is returned. Successful loads stay cached.
    pub async fn load_all(&self) -> Result<ConfigSet> {
        let (windows, android, device) = tokio::join!(self.windows(), self.android(), self.device());

        Ok(ConfigSet {
            windows: windows?,
            android: android?,
            device: device?,
        })
    }

    /// Clears every entry, then loads all three documents again.
    pub async fn reload_all(&self) -> Result<ConfigSet> {
        self.store.clear(None);
        self.load_all().await
    }

    /// Removes one cached entry, or all of them when `kind` is `None`.
    pub fn clear(&self, kind: Option<ConfigKind>) {
        debug!(kind = ?kind, "Clearing config cache");
        self.store.clear(kind);
    }

    async fn load_inner(
        &self,
        kind: ConfigKind,
        cancel: Option<&CancellationToken>,
    ) -> Result<ConfigDocument> {
        if let Some(document) = self.store.get(kind) {
            debug!(cache_hit = true, kind = %kind, "config cache hit");
            return Ok(document);
        }

        let _guard = self.acquire(kind, cancel).await?;

        // Another caller may have completed the fetch while we waited.
        if let Some(document) = self.store.get(kind) {
            debug!(cache_hit = true, kind = %kind, "config filled by concurrent load");
            return Ok(document);
        }

        let document = self.fetch_bounded(kind, cancel).await?;
        self.store.put(kind, document.clone());
        Ok(document)
    }

    async fn acquire(
        &self,
        kind: ConfigKind,
        cancel: Option<&CancellationToken>,
    ) -> Result<MutexGuard<'_, ()>> {
        let lock = self.in_flight[kind.slot()].lock();
        match cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(ConfigError::Cancelled { kind }),
                guard = lock => Ok(guard),
            },
            None => Ok(lock.await),
        }
    }

    async fn fetch_bounded(
        &self,
        kind: ConfigKind,
        cancel: Option<&CancellationToken>,
    ) -> Result<ConfigDocument> {
        info!(kind = %kind, provider = self.provider.name(), "Fetching config");

        let timed = tokio::time::timeout(self.fetch_timeout, self.provider.fetch(kind));
        let outcome = match cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    warn!(kind = %kind, "Config fetch cancelled");
                    return Err(ConfigError::Cancelled { kind });
                }
                outcome = timed => outcome,
            },
            None => timed.await,
        };

        match outcome {
            Ok(Ok(document)) if document.kind() == kind => Ok(document),
            Ok(Ok(document)) => Err(mismatched(kind, &document)),
            Ok(Err(e)) => {
                warn!(kind = %kind, error = %e, "Config fetch failed");
                Err(e)
            }
            Err(_) => {
                let after_ms = u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(kind = %kind, after_ms, "Config fetch timed out");
                Err(ConfigError::Timeout { kind, after_ms })
            }
        }
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("provider", &self.provider.name())
            .field("fetch_timeout", &self.fetch_timeout)
            .field("cached", &self.store.cached_kinds())
            .finish()
    }
}

fn mismatched(expected: ConfigKind, document: &ConfigDocument) -> ConfigError {
    ConfigError::fetch(
        expected,
        format!("provider returned a {} document", document.kind()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider handing out device documents with a running serial number.
    struct SerialProvider {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl SerialProvider {
        fn new(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConfigProvider for SerialProvider {
        fn name(&self) -> &'static str {
            "serial"
        }

        async fn fetch(&self, kind: ConfigKind) -> Result<ConfigDocument> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match kind {
                ConfigKind::Device => ConfigDocument::from_json(kind, device_json(&format!("SN-{n}"))),
                other => Err(ConfigError::fetch(other, "serial provider only serves devices")),
            }
        }
    }

    fn device_json(serial: &str) -> serde_json::Value {
        json!({
            "device": {"brand": "Seewo", "model": "MAX", "series": "S", "type": "IFP",
                       "serialNumber": serial, "manufacturingDate": "2024-01-01", "warrantyExpiry": "2027-01-01"},
            "display": {"size": "86 inch", "resolution": "3840x2160", "aspectRatio": "16:9", "brightness": "400 cd/m²",
                        "contrast": "5000:1", "refreshRate": "60Hz", "touchPoints": 40, "touchTechnology": "IR",
                        "responseTime": "8ms", "viewingAngle": "178°", "colorGamut": "72% NTSC", "backlight": "DLED",
                        "antiGlare": true, "blueLight": "low"},
            "videoStation": {"model": "C1", "brand": "Seewo", "resolution": "4K", "zoom": "4x", "focus": "auto",
                             "interface": "USB", "compatibility": [], "features": [], "status": "online"},
            "audio": {
                "speakers": {"model": "SP", "brand": "Seewo", "power": "2x20W", "frequency": "80Hz-20kHz",
                             "impedance": "8Ω", "sensitivity": "85dB", "type": "stereo", "position": "front"},
                "microphone": {"type": "array", "channels": 8, "pickupRange": "8m", "noiseReduction": true, "echoCancellation": true}
            },
            "connectivity": {
                "wifi": {"status": "on", "standard": "802.11ax", "frequency": "5G", "speed": "1200Mbps", "security": "WPA3"},
                "bluetooth": {"status": "on", "version": "5.2", "range": "10m", "profiles": []},
                "ethernet": {"status": "up", "speed": "1000Mbps", "duplex": "full", "cable": "Cat6"},
                "usb": {"ports": 6, "usb3": 4, "usb2": 2, "typeC": 1},
                "hdmi": {"inputs": 3, "outputs": 1, "version": "2.0", "resolution": "4K@60Hz"},
                "vga": {"inputs": 1, "resolution": "1920x1080"}
            },
            "power": {"consumption": "450W", "standby": "0.5W", "voltage": "220V", "frequency": "50Hz",
                      "powerSaving": true, "autoShutdown": "22:00"},
            "environmental": {"operatingTemp": "0-40°C", "storageTemp": "-20-60°C", "humidity": "10-90%",
                              "altitude": "3000m", "certification": ["CCC"]},
            "software": {"os": "Android", "version": "13", "kernel": "5.10", "preInstalled": [],
                         "updateChannel": "stable", "lastUpdate": "2024-05-01"},
            "status": {"overall": "正常", "temperature": "42°C", "uptime": "3天", "lastMaintenance": "2024-01-01",
                       "nextMaintenance": "2024-07-01", "errors": [], "warnings": []}
        })
    }

    fn serial_of(document: &ConfigDocument) -> String {
        document.as_device().unwrap().device.serial_number.clone()
    }

    #[tokio::test]
    async fn test_cache_hit_returns_same_allocation() {
        let provider = Arc::new(SerialProvider::new(Duration::ZERO));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone());

        let first = loader.load(ConfigKind::Device).await.unwrap();
        let second = loader.load(ConfigKind::Device).await.unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_reload_fetches_and_replaces() {
        let provider = Arc::new(SerialProvider::new(Duration::ZERO));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone());

        loader.load(ConfigKind::Device).await.unwrap();
        let reloaded = loader.reload(ConfigKind::Device).await.unwrap();

        assert_eq!(serial_of(&reloaded), "SN-2");
        assert_eq!(
            serial_of(&loader.store().get(ConfigKind::Device).unwrap()),
            "SN-2"
        );
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_reload_failure_leaves_entry_absent() {
        let provider = Arc::new(SerialProvider::new(Duration::ZERO));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone());

        let err = loader.reload(ConfigKind::Android).await.unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(!loader.store().contains(ConfigKind::Android));
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_fetch() {
        let provider = Arc::new(SerialProvider::new(Duration::from_millis(50)));
        let loader = Arc::new(ConfigLoader::new(
            Arc::new(ConfigStore::new()),
            provider.clone(),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let loader = Arc::clone(&loader);
                tokio::spawn(async move { loader.load(ConfigKind::Device).await })
            })
            .collect();

        let mut documents = Vec::new();
        for handle in handles {
            documents.push(handle.await.unwrap().unwrap());
        }

        assert_eq!(provider.calls(), 1);
        assert!(documents.iter().all(|d| d.ptr_eq(&documents[0])));
    }

    #[tokio::test]
    async fn test_timeout_is_not_cached() {
        let provider = Arc::new(SerialProvider::new(Duration::from_millis(200)));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone())
            .with_fetch_timeout(Duration::from_millis(20));

        let err = loader.load(ConfigKind::Device).await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Timeout {
                kind: ConfigKind::Device,
                after_ms: 20
            }
        ));
        assert!(loader.store().is_empty());

        let _ = loader.load(ConfigKind::Device).await;
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_fetch() {
        let provider = Arc::new(SerialProvider::new(Duration::from_secs(5)));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone());
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let err = loader
            .load_with_cancel(ConfigKind::Device, &token)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Cancelled {
                kind: ConfigKind::Device
            }
        ));
        assert!(loader.store().is_empty());
    }

    #[tokio::test]
    async fn test_waiter_cancelled_while_leader_fetches() {
        let provider = Arc::new(SerialProvider::new(Duration::from_millis(200)));
        let loader = Arc::new(ConfigLoader::new(
            Arc::new(ConfigStore::new()),
            provider.clone(),
        ));

        let leader = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load(ConfigKind::Device).await })
        };
        // Let the leader take the per-kind lock.
        tokio::time::sleep(Duration::from_millis(20)).await;

        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let err = loader
            .load_with_cancel(ConfigKind::Device, &token)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Cancelled {
                kind: ConfigKind::Device
            }
        ));
        assert!(!loader.store().contains(ConfigKind::Device));

        let document = leader.await.unwrap().unwrap();
        assert_eq!(serial_of(&document), "SN-1");
        assert!(
            loader
                .store()
                .get(ConfigKind::Device)
                .unwrap()
                .ptr_eq(&document)
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_cancel_does_not_affect_cache_hit() {
        let provider = Arc::new(SerialProvider::new(Duration::ZERO));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider.clone());
        loader.load(ConfigKind::Device).await.unwrap();

        let token = CancellationToken::new();
        token.cancel();

        assert!(loader.load_with_cancel(ConfigKind::Device, &token).await.is_ok());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_typed_accessor() {
        let provider = Arc::new(SerialProvider::new(Duration::ZERO));
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), provider);

        let device = loader.device().await.unwrap();
        assert_eq!(device.device.serial_number, "SN-1");
        assert!(loader.windows().await.is_err());
    }

    #[tokio::test]
    async fn test_mismatched_document_is_rejected() {
        struct WrongKind;

        #[async_trait]
        impl ConfigProvider for WrongKind {
            fn name(&self) -> &'static str {
                "wrong"
            }

            async fn fetch(&self, _kind: ConfigKind) -> Result<ConfigDocument> {
                ConfigDocument::from_json(ConfigKind::Device, device_json("SN-X"))
            }
        }

        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), Arc::new(WrongKind));
        let err = loader.load(ConfigKind::Android).await.unwrap_err();

        assert!(matches!(
            err,
            ConfigError::FetchFailure { kind: ConfigKind::Android, ref reason } if reason.contains("device")
        ));
        assert!(loader.store().is_empty());
    }
}
