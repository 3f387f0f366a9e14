//! Read-only query service over historical station weather observations.
//!
//! Precipitation and temperature series for the most recent year of data,
//! a station directory, and min/avg/max temperature over caller-chosen date
//! ranges.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod query;
pub mod store;
pub mod telemetry;
