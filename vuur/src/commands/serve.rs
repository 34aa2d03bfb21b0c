use anyhow::Context;
use tracing::info;
use vuur_api_rest::RestServer;
use vuur_config::Config;
use vuur_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use vuur_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use vuur_email_contracts::EmailService;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp relay");
    let email = email::connect(&config.smtp)?;
    email
        .ping()
        .await
        .context("Failed to connect to smtp relay")?;

    let health = HealthServiceImpl::new(
        email.clone(),
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );
    let contact = ContactServiceImpl::new(
        email,
        ContactServiceConfig {
            recipient: config.contact.recipient,
        },
    );

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    RestServer::new(health, contact)
        .serve(config.http.host, config.http.port)
        .await
}
