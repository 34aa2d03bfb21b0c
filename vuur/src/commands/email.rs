use anyhow::ensure;
use clap::Subcommand;
use vuur_config::Config;
use vuur_email_contracts::{ContentType, Email, EmailService};
use vuur_models::email_address::EmailAddressWithName;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email to verify the relay configuration
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => {
                let service = email::connect(&config.smtp)?;
                service.ping().await?;

                let ok = service
                    .send(Email {
                        recipient,
                        subject: "Email Deliverability Test".into(),
                        body: "Email deliverability seems to be working!".into(),
                        content_type: ContentType::Text,
                        reply_to: None,
                    })
                    .await?;
                ensure!(ok, "Failed to send email");

                println!("Email sent successfully.");
            }
        }

        Ok(())
    }
}
