use vuur_models::contact::{ContactSubmission, ServiceCategory};

use crate::api::{Confirmation, ContactApi, SubmitError};

const SUCCESS_MESSAGE: &str = "Your message has been sent! We\u{2019}ll be in touch soon.";
const FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please try again in a moment.";

/// Local state of the contact form. Field values live here until a
/// successful submission clears them; a failed submission preserves them so
/// the user can retry without re-entering anything.
#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    services: Vec<ServiceCategory>,
    busy: bool,
    outcome: Option<Result<Confirmation, SubmitError>>,
}

impl<Api> ContactForm<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            services: Vec::new(),
            busy: false,
            outcome: None,
        }
    }

    /// Adds the category to the selection if absent, removes it if present.
    /// Selection order is preserved for the remaining entries.
    pub fn toggle_service(&mut self, service: ServiceCategory) {
        if let Some(position) = self.services.iter().position(|&s| s == service) {
            self.services.remove(position);
        } else {
            self.services.push(service);
        }
    }

    pub fn services(&self) -> &[ServiceCategory] {
        &self.services
    }

    /// `true` while a submission is outstanding; the UI disables the
    /// submit control based on this.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The typed outcome of the last submission, if any.
    pub fn outcome(&self) -> Option<&Result<Confirmation, SubmitError>> {
        self.outcome.as_ref()
    }

    /// The one-of-two user-facing status line: a success acknowledgment or
    /// a generic retry-prompting failure, never internal detail.
    pub fn status_message(&self) -> Option<&'static str> {
        self.outcome.as_ref().map(|outcome| match outcome {
            Ok(_) => SUCCESS_MESSAGE,
            Err(_) => FAILURE_MESSAGE,
        })
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            services: self.services.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.services.clear();
    }
}

impl<Api: ContactApi> ContactForm<Api> {
    /// Submits the current field values. Issues at most one outstanding
    /// request; the busy flag is cleared on every exit path.
    pub async fn submit(&mut self) {
        if self.busy {
            return;
        }

        // Presence check before going to the network; the server enforces
        // the same invariant.
        if self.first_name.is_empty() || self.email.is_empty() {
            self.outcome = Some(Err(SubmitError::Rejected(
                "Missing required fields: firstName and email.".into(),
            )));
            return;
        }

        self.busy = true;
        self.outcome = None;

        let result = self.api.submit(self.submission()).await;
        self.busy = false;

        if result.is_ok() {
            self.clear_fields();
        }
        self.outcome = Some(result);
    }
}
