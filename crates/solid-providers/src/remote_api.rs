//! Remote API strategies
//!
//! `mock` always reports an invalid response; `static` answers with the
//! configured `payload` after an optional `delay_ms`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use solid_application::registry::{ImplementationConfig, STRATEGIES, StrategyEntry};
use solid_domain::Capability;
use solid_domain::error::{Error, Result};
use solid_domain::ports::{RemoteApi, RemoteApiCapability};

/// Failure modes a remote call can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidUrl,
    InvalidResponse,
    InvalidStatusCode,
}

impl ApiFailure {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid url",
            Self::InvalidResponse => "invalid response",
            Self::InvalidStatusCode => "invalid status code",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "invalid_url" => Some(Self::InvalidUrl),
            "invalid_response" => Some(Self::InvalidResponse),
            "invalid_status_code" => Some(Self::InvalidStatusCode),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockRemoteApi {
    failure: ApiFailure,
}

impl MockRemoteApi {
    pub fn new(failure: ApiFailure) -> Self {
        Self { failure }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn RemoteApi>> {
        let raw = config.setting_or("failure", "invalid_response");
        let failure = ApiFailure::parse(raw).ok_or_else(|| {
            Error::factory(&config.implementation, format!("unknown failure '{raw}'"))
        })?;
        Ok(Arc::new(Self::new(failure)))
    }
}

#[async_trait]
impl RemoteApi for MockRemoteApi {
    async fn fetch(&self) -> Result<String> {
        Err(Error::remote_api(self.failure.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct StaticRemoteApi {
    payload: String,
    delay: Duration,
}

impl StaticRemoteApi {
    pub fn new(payload: impl Into<String>, delay: Duration) -> Self {
        Self {
            payload: payload.into(),
            delay,
        }
    }

    pub fn from_config(config: &ImplementationConfig) -> Result<Arc<dyn RemoteApi>> {
        let delay_ms = config.setting_or("delay_ms", "0");
        let delay_ms: u64 = delay_ms.parse().map_err(|_| {
            Error::factory(&config.implementation, format!("invalid delay_ms '{delay_ms}'"))
        })?;
        Ok(Arc::new(Self::new(
            config.setting_or("payload", "{}"),
            Duration::from_millis(delay_ms),
        )))
    }
}

#[async_trait]
impl RemoteApi for StaticRemoteApi {
    async fn fetch(&self) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.payload.clone())
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STRATEGIES)]
static MOCK_API: StrategyEntry = StrategyEntry {
    capability: RemoteApiCapability::DESCRIPTOR.name,
    name: "mock",
    description: "Remote API that always fails (`failure` setting)",
    install: |registry, options| {
        registry.register_with::<RemoteApiCapability, _>(options, MockRemoteApi::from_config)
    },
};

#[linkme::distributed_slice(STRATEGIES)]
static STATIC_API: StrategyEntry = StrategyEntry {
    capability: RemoteApiCapability::DESCRIPTOR.name,
    name: "static",
    description: "Remote API answering with a fixed `payload`",
    install: |registry, options| {
        registry.register_with::<RemoteApiCapability, _>(options, StaticRemoteApi::from_config)
    },
};
