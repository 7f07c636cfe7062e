//! # Wlr - Worklog Reporter
//!
//! A command-line utility for aggregating Jira worklogs for a configured
//! set of accounts and mailing per-account HTML summary reports.
//!
//! ## Features
//!
//! - **Date Ranges**: Single day, explicit range, previous week, previous month
//! - **Worklog Aggregation**: Per-account grouping with re-validated author and date
//! - **Report Rendering**: HTML report bodies with per-account summary tables
//! - **Email Delivery**: Sends rendered reports through a Mailgun-compatible API
//! - **Console Preview**: Terminal table and JSON export of fetched worklogs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wlr::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
