//! Configuration management.
//!
//! Settings are stored as JSON in the platform application-data directory
//! (see [`DataStorage`]) and are edited either by hand or through the
//! interactive `wlr init` wizard. Each integration is an optional module:
//! Jira (tracker credentials and the reported account ids), Mailgun
//! (delivery credentials) and email routing (sender plus the daily and
//! range/monthly recipients).
//!
//! Credentials are opaque configuration values; no secret storage or
//! authentication protocol is implemented here.

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::api::mailgun::MailgunConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Email routing configuration.
///
/// Single-day reports go to `daily_to`; range and monthly reports go to
/// `to`. The routing decision is made by the command layer from the rendered
/// report kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmailConfig {
    pub from: String,
    pub to: String,
    pub daily_to: String,
}

impl EmailConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "email".to_string(),
            name: "Email routing".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            from: "".to_string(),
            to: "".to_string(),
            daily_to: "".to_string(),
        });
        Ok(Self {
            from: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEmailFrom.to_string())
                .default(config.from)
                .interact_text()?,
            to: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEmailTo.to_string())
                .default(config.to)
                .interact_text()?,
            daily_to: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptEmailDailyTo.to_string())
                .default(config.daily_to)
                .interact_text()?,
        })
    }
}

/// Main configuration container.
///
/// All modules are optional so a partially configured installation still
/// loads; commands validate the modules they actually need.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailgun: Option<MailgunConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to an empty
    /// default when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of available modules and delegates to each
    /// selected module's own setup, pre-filling existing values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![JiraConfig::module(), MailgunConfig::module(), EmailConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "jira" => {
                    msg_print!(Message::ConfigModuleJira);
                    config.jira = Some(JiraConfig::init(&config.jira)?);
                }
                "mailgun" => {
                    msg_print!(Message::ConfigModuleMailgun);
                    config.mailgun = Some(MailgunConfig::init(&config.mailgun)?);
                }
                "email" => {
                    msg_print!(Message::ConfigModuleEmail);
                    config.email = Some(EmailConfig::init(&config.email)?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
