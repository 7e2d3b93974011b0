use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument};

use super::{MailError, Mailer, TemplateParams};
use crate::config::ContactConfig;

/// Sends contact messages through the EmailJS REST API
/// (https://www.emailjs.com/docs/rest-api/send/)
pub struct EmailJsMailer {
    config: ContactConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

impl EmailJsMailer {
    pub fn new(config: ContactConfig) -> Result<Self, MailError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { config, client })
    }
}

impl Mailer for EmailJsMailer {
    #[instrument(skip_all, fields(service = %self.config.service_id))]
    fn send(&self, params: &TemplateParams) -> Result<(), MailError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "message accepted");
        Ok(())
    }
}
