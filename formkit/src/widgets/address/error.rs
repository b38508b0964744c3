//! Error tags reported by the address field.

use std::fmt;

use super::geolocation::GeolocationState;

/// Failure reported through the address field's error callback.
///
/// Errors never propagate out of the widget; the owner gets one of these
/// and decides what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTag {
    /// An address search failed.
    ApiError,
    /// No geolocation capability.
    GeolocationDisabled,
    /// The platform could not produce a position, or nothing is there.
    GeolocationUnavailable,
    /// The user refused location access.
    GeolocationPermissionDenied,
    /// Reverse geocoding the position failed.
    GeolocationApiError,
}

impl ErrorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorTag::ApiError => "api-error",
            ErrorTag::GeolocationDisabled => "geolocation-disabled",
            ErrorTag::GeolocationUnavailable => "geolocation-unavailable",
            ErrorTag::GeolocationPermissionDenied => "geolocation-permission-denied",
            ErrorTag::GeolocationApiError => "geolocation-api-error",
        }
    }

    /// Tag for a failed geolocation outcome; `None` for non-failure states.
    pub fn for_geolocation(state: GeolocationState) -> Option<Self> {
        match state {
            GeolocationState::Disabled => Some(ErrorTag::GeolocationDisabled),
            GeolocationState::Unavailable => Some(ErrorTag::GeolocationUnavailable),
            GeolocationState::PermissionDenied => Some(ErrorTag::GeolocationPermissionDenied),
            GeolocationState::ApiError => Some(ErrorTag::GeolocationApiError),
            GeolocationState::Off | GeolocationState::Pending | GeolocationState::On => None,
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
