//! Geoportail Luxembourg geocoding client library
//!
//! A Rust async client for the public geoportail.lu full-text search,
//! postcode lookup and reverse geocoding endpoints.

pub mod api;
pub mod error;
pub mod model;

mod client;

pub use client::*;
