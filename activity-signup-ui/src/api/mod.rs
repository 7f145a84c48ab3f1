//! API Module
//!
//! HTTP access to the activities backend.

pub mod client;

pub use client::{catalog_url, fetch_activities, sign_up};
