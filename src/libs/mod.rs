//! Core library modules: configuration, date ranges, worklog aggregation,
//! report rendering and supporting utilities.

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod date_range;
pub mod formatter;
pub mod messages;
pub mod render;
pub mod report;
pub mod view;
pub mod worklog;
