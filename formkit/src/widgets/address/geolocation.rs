//! Device position lookup for the address field.

use std::fmt;

use async_trait::async_trait;
use geoportail_lib::model::Coordinates;
use thiserror::Error;

/// Why a position could not be obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Platform geolocation capability.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Whether the platform can locate the device at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Current device position.
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Status of the geolocation action, shown on its button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GeolocationState {
    #[default]
    Off,
    Pending,
    On,
    Disabled,
    PermissionDenied,
    Unavailable,
    ApiError,
}

impl GeolocationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeolocationState::Off => "off",
            GeolocationState::Pending => "pending",
            GeolocationState::On => "on",
            GeolocationState::Disabled => "disabled",
            GeolocationState::PermissionDenied => "permission-denied",
            GeolocationState::Unavailable => "unavailable",
            GeolocationState::ApiError => "api-error",
        }
    }
}

impl fmt::Display for GeolocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
