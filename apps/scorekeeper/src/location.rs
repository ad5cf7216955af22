//! Where a game was played. The value is opaque: never parsed or validated.

pub const UNKNOWN_LOCATION: &str = "unknown";

pub trait LocationProvider {
    fn current_location(&self) -> String;
}

/// Always reports the same location, e.g. a value passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocation(pub String);

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> String {
        if self.0.trim().is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            self.0.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_location(&self) -> String {
        UNKNOWN_LOCATION.to_string()
    }
}
