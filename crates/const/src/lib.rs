//! # Rupkala Constants
//!
//! Shared constants for the Rupkala backend. Values that must stay
//! consistent across crates (cookie names, session durations, origin
//! policy seeds) live here so they have a single source of truth.

#![deny(unsafe_code)]

pub mod auth;
