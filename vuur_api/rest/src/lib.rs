use std::net::IpAddr;

use axum::Router;
use tokio::net::TcpListener;
use vuur_core_contact_contracts::ContactService;
use vuur_core_health_contracts::HealthService;

mod middleware;
mod models;
mod routes;

/// The public web boundary: one contact endpoint plus a health probe.
#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::health::router(self.health.into()));

        middleware::apply(router)
    }
}
