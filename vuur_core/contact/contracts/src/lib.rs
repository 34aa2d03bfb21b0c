use std::future::Future;

use thiserror::Error;
use vuur_models::contact::ContactSubmission;

/// Validates a contact form submission and relays it to the agency mailbox
/// as an email notification. Exactly one email is dispatched per valid
/// submission; nothing is persisted and nothing is retried.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmitContactError>> + Send;
}

#[derive(Debug, Error)]
pub enum SubmitContactError {
    /// `first_name` or `email` is empty or absent.
    #[error("Missing required fields: firstName and email.")]
    MissingRequiredFields,
    /// The relay accepted the connection but refused the message.
    #[error("Failed to send email.")]
    Send,
    /// Any transport or protocol fault while talking to the relay.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), SubmitContactError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
