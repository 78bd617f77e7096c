//! # Agentry Cron Tools Extension
//!
//! Tools for working with cron schedules: translating natural language
//! into cron expressions, previewing upcoming run times, and converting
//! delays into one-shot schedules.
//!
//! ## Tools
//!
//! - `cron_parse`: Parse natural language or validate a cron expression
//! - `cron_next_runs`: Get the next N run times for a schedule
//! - `cron_once`: Convert a delay into a one-shot schedule
//!
//! The schedule engine lives in [`schedule`] and is pure computation
//! over immutable inputs - no I/O, no shared mutable state.

pub mod extension;
pub mod schedule;
pub mod tools;

pub use extension::CronToolsExtension;
