//! Mailgun messages API client.
//!
//! Implements [`Notifier`] by posting a multipart form to the Mailgun
//! `messages` endpoint with Basic authentication (`api:<key>`). A non-2xx
//! response is a delivery failure surfaced to the caller; the report itself
//! is not regenerated or retried.

use super::Notifier;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use base64::prelude::*;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    multipart, Client,
};
use serde::{Deserialize, Serialize};

const MAILGUN_API_URL: &str = "https://api.mailgun.net/v3";

#[derive(Debug)]
pub struct Mailgun {
    client: Client,
    config: MailgunConfig,
    base_url: String,
}

impl Mailgun {
    pub fn new(config: &MailgunConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            base_url: MAILGUN_API_URL.to_string(),
        }
    }

    /// Points the client at an explicit base URL instead of the public
    /// Mailgun API. Used by tests against a local mock server.
    pub fn with_base_url(config: &MailgunConfig, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn auth_header(&self) -> Result<HeaderValue> {
        let token = BASE64_STANDARD.encode(format!("api:{}", self.config.api_key));
        Ok(HeaderValue::from_str(&format!("Basic {}", token))?)
    }
}

impl Notifier for Mailgun {
    async fn send(&self, from: &str, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let url = format!("{}/{}/messages", self.base_url, self.config.domain);
        let form = multipart::Form::new()
            .text("from", from.to_string())
            .text("to", to.to_string())
            .text("subject", subject.to_string())
            .text("html", html_body.to_string());

        let res = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header()?)
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(msg_error_anyhow!(Message::ReportSendFailed(res.status().to_string())));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MailgunConfig {
    pub domain: String,
    pub api_key: String,
}

impl MailgunConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "mailgun".to_string(),
            name: "Mailgun".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            domain: "".to_string(),
            api_key: "".to_string(),
        });
        Ok(Self {
            domain: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMailgunDomain.to_string())
                .default(config.domain)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMailgunApiKey.to_string())
                .default(config.api_key)
                .interact_text()?,
        })
    }
}
