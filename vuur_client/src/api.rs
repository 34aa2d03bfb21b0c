use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use vuur_models::contact::{ContactSubmission, ServiceCategory};

/// Access to the contact endpoint. The outcome is typed so calling UIs can
/// distinguish a rejected submission (fix the input) from a failed dispatch
/// or transport fault (retry as-is).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<Confirmation, SubmitError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server rejected the submission (client error); the input needs
    /// to change before a retry can succeed.
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The server accepted the request but could not dispatch the
    /// notification; retrying with the same input may succeed.
    #[error("submission failed: {0}")]
    Failed(String),
    /// The request itself never completed (connection refused, DNS, ...).
    #[error("transport failure: {0}")]
    Transport(#[from] anyhow::Error),
}

/// [`ContactApi`] talking to the real backend over HTTP.
#[derive(Debug, Clone)]
pub struct RestContactApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl RestContactApi {
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: base_url.join("api/contact")?,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    services: &'a [ServiceCategory],
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ContactApi for RestContactApi {
    async fn submit(&self, submission: ContactSubmission) -> Result<Confirmation, SubmitError> {
        let request = SubmitRequest {
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            email: &submission.email,
            phone: &submission.phone,
            services: &submission.services,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Confirmation>()
                .await
                .map_err(|err| SubmitError::Transport(err.into()));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "Unknown error".into());

        if status.is_client_error() {
            Err(SubmitError::Rejected(message))
        } else {
            Err(SubmitError::Failed(message))
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApi {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<Confirmation, SubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
