use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use tracing::error;
use vuur_core_health_contracts::{HealthService, HealthStatus};
use vuur_email_contracts::EmailService;

/// Probes the SMTP relay and caches the result for a configured TTL so a
/// scraped health endpoint does not hammer the relay.
#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
    config: HealthServiceConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email, config: HealthServiceConfig) -> Self {
        Self {
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}
