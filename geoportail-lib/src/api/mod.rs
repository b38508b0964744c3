//! Web API operations

mod geocode;
mod request;
mod search;

pub use request::*;
