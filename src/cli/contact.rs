use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{instrument, warn};

use crate::contact::{ContactForm, ContactService, EmailJsMailer, Notification};
use crate::site::Site;

/// Submit the contact form through the site's configured email account.
///
/// Returns the notification the visitor would see; delivery failures are
/// reported there rather than as an error.
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_contact(
    site_path: &Path,
    form: ContactForm,
    captcha: Option<String>,
) -> Result<Notification> {
    let site = Site::open(site_path)?;
    let config = site
        .config()
        .contact
        .clone()
        .context("Contact form is not configured (add a \"contact\" section to folio.json)")?;

    let throttle = config.throttle();
    let require_captcha = config.require_captcha;
    let mailer = EmailJsMailer::new(config).context("Failed to create HTTP client")?;
    let mut service = ContactService::new(mailer, throttle, require_captcha);

    let outcome = service.submit(&form, captcha.as_deref(), Instant::now());
    if let Err(e) = &outcome {
        warn!(error = %e, "contact submission failed");
    }
    Notification::for_outcome(&outcome).context("Submission was throttled")
}
