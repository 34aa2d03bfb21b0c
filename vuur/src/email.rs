use anyhow::Context;
use vuur_config::SmtpConfig;
use vuur_email_impl::EmailServiceImpl;

pub fn connect(config: &SmtpConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(config).context("Failed to set up smtp transport")
}
