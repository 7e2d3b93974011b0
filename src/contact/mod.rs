//! Contact form delivery through a hosted transactional email API.
//!
//! The provider does the sending and verifies captcha tokens; this side
//! validates the form, throttles submissions and maps the outcome to the
//! message shown to the visitor.

mod emailjs;
mod throttle;

pub use emailjs::EmailJsMailer;
pub use throttle::Throttle;

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(String),
    #[error("captcha token required")]
    CaptchaRequired,
    #[error("submitted too soon after the previous message")]
    Throttled,
    #[error("delivery failed: {0}")]
    Delivery(#[from] MailError),
}

/// Fields of the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid("Name is required".to_string()));
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(ContactError::Invalid(format!("Invalid email address: {}", email)));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid("Message is required".to_string()));
        }
        Ok(())
    }

    pub fn template_params(&self, time: String, captcha: Option<&str>) -> TemplateParams {
        TemplateParams {
            form_name: self.name.trim().to_string(),
            form_email: self.email.trim().to_string(),
            form_organization: self.organization.trim().to_string(),
            form_message: self.message.clone(),
            form_time: time,
            captcha: captcha.map(str::to_string),
        }
    }
}

/// Variables handed to the provider's email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub form_name: String,
    pub form_email: String,
    pub form_organization: String,
    pub form_message: String,
    pub form_time: String,
    #[serde(rename = "g-recaptcha-response", skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

/// Hosted email API
pub trait Mailer {
    fn send(&self, params: &TemplateParams) -> Result<(), MailError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Message shown to the visitor after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// `None` for throttled submissions, which are dropped silently.
    pub fn for_outcome(outcome: &Result<(), ContactError>) -> Option<Self> {
        let (kind, message) = match outcome {
            Ok(()) => (
                NotificationKind::Success,
                "Your message has been sent successfully!".to_string(),
            ),
            Err(ContactError::Throttled) => return None,
            Err(ContactError::Invalid(reason)) => (NotificationKind::Error, reason.clone()),
            Err(ContactError::CaptchaRequired) => (
                NotificationKind::Error,
                "Please complete the captcha before sending.".to_string(),
            ),
            Err(ContactError::Delivery(_)) => (
                NotificationKind::Error,
                "Failed to send message. Please try again later.".to_string(),
            ),
        };
        Some(Self { kind, message })
    }
}

pub struct ContactService<M> {
    mailer: M,
    throttle: Throttle,
    require_captcha: bool,
}

impl<M: Mailer> ContactService<M> {
    pub fn new(mailer: M, throttle_window: Duration, require_captcha: bool) -> Self {
        Self {
            mailer,
            throttle: Throttle::new(throttle_window),
            require_captcha,
        }
    }

    /// Validate and deliver one submission.
    pub fn submit(
        &mut self,
        form: &ContactForm,
        captcha: Option<&str>,
        now: Instant,
    ) -> Result<(), ContactError> {
        if !self.throttle.try_acquire(now) {
            warn!("contact submission throttled");
            return Err(ContactError::Throttled);
        }
        form.validate()?;

        let captcha = captcha.map(str::trim).filter(|t| !t.is_empty());
        if self.require_captcha && captcha.is_none() {
            return Err(ContactError::CaptchaRequired);
        }

        let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let params = form.template_params(time, captcha);
        self.mailer.send(&params)?;

        info!(email = %params.form_email, "contact message sent");
        Ok(())
    }
}
