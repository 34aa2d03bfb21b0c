use anyhow::anyhow;
use lettre::{
    message::header,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use vuur_config::SmtpConfig;
use vuur_email_contracts::{ContentType, Email, EmailService};
use vuur_models::email_address::EmailAddressWithName;

/// [`EmailService`] backed by a pooled lettre SMTP transport. The transport
/// is built once from the relay configuration and shared across requests.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        // Port 465 is the well-known smtps port and implies a TLS-wrapped
        // connection. Everything else starts plain and upgrades via
        // STARTTLS when the relay offers it.
        let builder = if config.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .tls(Tls::Opportunistic(TlsParameters::new(config.host.clone())?))
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.0.clone(),
            ))
            .build();

        Ok(Self {
            from: config.from.clone(),
            transport,
        })
    }

    fn compose(&self, email: Email) -> anyhow::Result<Message> {
        let mut message = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            });

        if let Some(reply_to) = email.reply_to {
            message = message.reply_to(reply_to.0);
        }

        message.body(email.body).map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.compose(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use vuur_models::Sensitive;

    use super::*;

    fn config(port: u16) -> SmtpConfig {
        SmtpConfig {
            host: "relay.example.com".into(),
            port,
            username: "vuur".into(),
            password: Sensitive("changeme".into()),
            from: "VUUR Contact Form <no-reply@vuursocial.com>".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn builds_transport_for_implicit_tls_and_starttls_ports() {
        for port in [465, 587, 2525] {
            EmailServiceImpl::new(&config(port)).unwrap();
        }
    }

    #[tokio::test]
    async fn composes_html_message_with_reply_to() {
        let service = EmailServiceImpl::new(&config(587)).unwrap();

        let message = service
            .compose(Email {
                recipient: "felipe@vuursocial.com".parse().unwrap(),
                subject: "New Contact Inquiry from Jane".into(),
                body: "<h2>New Contact Form Submission</h2>".into(),
                content_type: ContentType::Html,
                reply_to: Some("jane@x.com".parse().unwrap()),
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("no-reply@vuursocial.com"));
        assert!(formatted.contains("felipe@vuursocial.com"));
        assert!(formatted.contains("Reply-To:"));
        assert!(formatted.contains("jane@x.com"));
        assert!(formatted.contains("Subject: New Contact Inquiry from Jane"));
        assert!(formatted.contains("Content-Type: text/html"));
    }

    #[tokio::test]
    async fn composes_plain_text_message_without_reply_to() {
        let service = EmailServiceImpl::new(&config(465)).unwrap();

        let message = service
            .compose(Email {
                recipient: "test@example.com".parse().unwrap(),
                subject: "Email Deliverability Test".into(),
                body: "Email deliverability seems to be working!".into(),
                content_type: ContentType::Text,
                reply_to: None,
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(!formatted.contains("Reply-To"));
    }
}
