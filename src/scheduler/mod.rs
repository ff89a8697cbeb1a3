//! Cron jobs.

pub mod archive_retention;
