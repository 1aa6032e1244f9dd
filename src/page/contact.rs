//! Contact form acknowledgment
//!
//! Submissions are acknowledged on the page and then dropped. Nothing is
//! forwarded or stored.

use serde::Deserialize;
use std::time::Duration;

use super::host::HostPage;
use super::kind::CONTACT_FORM;
use crate::render::escape_html;

/// Fields posted by the contact form
///
/// Other form fields (email, subject) are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Length of the message body, for logs
    pub fn message_chars(&self) -> usize {
        self.message
            .as_deref()
            .map(|m| m.trim().chars().count())
            .unwrap_or(0)
    }
}

/// Whether the page has a form that posts submissions
pub fn has_contact_form(page: &HostPage) -> bool {
    page.contains(CONTACT_FORM)
}

/// Local acknowledgment shown after a submission
#[derive(Debug, Clone)]
pub struct Acknowledgment {
    name: String,
    dismiss_after: Duration,
}

impl Acknowledgment {
    pub fn new(name: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            name: name.into(),
            dismiss_after,
        }
    }

    pub fn for_submission(submission: &ContactSubmission, dismiss_after: Duration) -> Self {
        Self::new(submission.name.trim(), dismiss_after)
    }

    /// Plain-text message
    pub fn message(&self) -> String {
        format!(
            "Thanks {}! Your message has been received. I'll get back to you soon!",
            self.name
        )
    }

    /// Markup for the form message element
    ///
    /// The element hides itself once `dismiss_after` has elapsed. Each
    /// response carries its own expiry, so a quick resubmission starts a
    /// fresh countdown instead of racing an older one.
    pub fn render(&self) -> String {
        let millis = self.dismiss_after.as_millis();
        format!(
            concat!(
                r#"<span class="form-ack" role="status" data-dismiss-after-ms="{ms}" "#,
                r#"style="color: var(--primary-color); animation: form-ack-dismiss 0s linear {ms}ms forwards">"#,
                "{message}</span>\n",
                "<style>@keyframes form-ack-dismiss {{ to {{ visibility: hidden; }} }}</style>"
            ),
            ms = millis,
            message = escape_html(&self.message()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_references_name() {
        let ack = Acknowledgment::new("Sam", Duration::from_secs(5));
        assert_eq!(
            ack.message(),
            "Thanks Sam! Your message has been received. I'll get back to you soon!"
        );
    }

    #[test]
    fn test_render_carries_expiry_and_escapes() {
        let ack = Acknowledgment::new("<b>Sam</b>", Duration::from_secs(5));
        let html = ack.render();

        assert!(html.contains(r#"data-dismiss-after-ms="5000""#));
        assert!(html.contains("animation: form-ack-dismiss 0s linear 5000ms forwards"));
        assert!(html.contains("Thanks &lt;b&gt;Sam&lt;/b&gt;!"));
        assert!(html.contains("@keyframes form-ack-dismiss { to { visibility: hidden; } }"));
    }

    #[test]
    fn test_form_fields_deserialize() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": " Try it "}"#,
        )
        .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.message_chars(), 6);
        assert_eq!(ContactSubmission::default().message_chars(), 0);
    }

    #[test]
    fn test_has_contact_form() {
        assert!(has_contact_form(&HostPage::new(
            r#"<form id="contactForm"></form>"#
        )));
        assert!(!has_contact_form(&HostPage::new(
            r#"<!-- <form id="contactForm"></form> --><form id="search"></form>"#
        )));
    }

    #[test]
    fn test_submission_name_is_trimmed() {
        let submission = ContactSubmission {
            name: "  Ada  ".to_string(),
            ..Default::default()
        };
        let ack = Acknowledgment::for_submission(&submission, Duration::from_secs(5));
        assert!(ack.message().starts_with("Thanks Ada!"));
    }
}
