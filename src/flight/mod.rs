//! EU261 flight delay and cancellation compensation.
//!
//! Flat amounts by distance (250, 400 or 600 EUR), halved for a 3 to 4 hour
//! delay on short-haul flights. Claims lapse after the configured
//! prescription period (3 years in Romania).

mod compensation;
mod routes;

pub use compensation::{
    CompensationResult, FlightClaim, GroupCompensation, GroupEntry, Prescription,
    calculate_compensation, calculate_group,
};
pub use routes::{COMMON_ROUTES, route_distance};
