//! Response payloads and the normalized records built from them

mod address;
mod feature;
mod geocode;

pub use address::*;
pub use feature::*;
pub use geocode::*;
