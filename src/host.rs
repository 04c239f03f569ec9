//! Host Interface
//!
//! Everything the engine needs from the outside world goes through the
//! [`Host`] trait: time, the two best-effort network lookups, opening a URL
//! in a new tab, and reloading the page. A browser host backs these with the
//! real APIs; tests back them with a mock.

use alloc::string::String;

// ============================================================================
// Host Error
// ============================================================================

/// Failure reported by an external collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The user (or the platform) refused access
    PermissionDenied,
    /// The service could not be reached
    Unavailable,
    /// The service answered with something unusable
    BadResponse(String),
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HostError::PermissionDenied => write!(f, "Permission denied"),
            HostError::Unavailable => write!(f, "Service unavailable"),
            HostError::BadResponse(msg) => write!(f, "Bad response: {}", msg),
        }
    }
}

// ============================================================================
// Geolocation
// ============================================================================

/// Coordinates returned by the geolocation collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Host Trait
// ============================================================================

/// External collaborators consumed by the session
pub trait Host {
    /// Monotonic milliseconds since an arbitrary origin
    fn now_ms(&self) -> u64;

    /// Current local date and time, formatted for display
    ///
    /// `None` when the host has no wall clock.
    fn local_time(&self) -> Option<String>;

    /// Public IP address of the visitor (loading screen only)
    fn public_ip(&mut self) -> Result<String, HostError>;

    /// Visitor position (weather only)
    fn geolocate(&mut self) -> Result<GeoPosition, HostError>;

    /// Open a URL in a new tab
    fn open_url(&mut self, url: &str);

    /// Reload the whole page, discarding all session state
    fn reload(&mut self);

    /// Platform string for the connection-info block
    fn platform(&self) -> Option<String> {
        None
    }

    /// User agent for the connection-info block
    fn user_agent(&self) -> Option<String> {
        None
    }
}
