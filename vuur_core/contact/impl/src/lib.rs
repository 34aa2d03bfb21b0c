use htmlescape::encode_minimal;
use vuur_core_contact_contracts::{ContactService, SubmitContactError};
use vuur_email_contracts::{ContentType, Email, EmailService};
use vuur_models::{contact::ContactSubmission, email_address::EmailAddress};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Mailbox that receives the notification emails.
    pub recipient: EmailAddress,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        if !submission.has_required_fields() {
            return Err(SubmitContactError::MissingRequiredFields);
        }

        let email = Email {
            recipient: self.config.recipient.clone().into(),
            subject: format!("New Contact Inquiry from {}", submission.full_name()),
            body: render_notification(&submission),
            // Replies should go straight to the prospect, but only if their
            // address actually parses as a mailbox.
            reply_to: submission.email.parse().ok(),
            content_type: ContentType::Html,
        };

        if !self.email.send(email).await? {
            return Err(SubmitContactError::Send);
        }

        Ok(())
    }
}

/// Renders the HTML notification body. User-supplied text is escaped; the
/// service list keeps the selection order and renders as an empty `<ul>`
/// when nothing was selected.
fn render_notification(submission: &ContactSubmission) -> String {
    let services = submission
        .services
        .iter()
        .map(|service| format!("<li>{service}</li>"))
        .collect::<String>();

    let phone = if submission.phone.is_empty() {
        "\u{2014}".into()
    } else {
        encode_minimal(&submission.phone)
    };

    format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Interested In:</strong></p>\n\
         <ul>{services}</ul>\n\
         <hr/>\n\
         <p>Sent from: VUUR Website Contact Page</p>",
        name = encode_minimal(&submission.full_name()),
        email = encode_minimal(&submission.email),
    )
}
