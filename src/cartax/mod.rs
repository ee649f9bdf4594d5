//! Impozit auto: local tax on vehicles.
//!
//! The annual amount is the engine-capacity band, scaled by the vehicle
//! type, reduced for vehicles older than 15 years and multiplied by the
//! locality coefficient. Electric vehicles are exempt unless the rates
//! table says otherwise.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use impozit::cartax::{CarTaxCalculator, CarTaxInput};
//! use impozit::core::FiscalRules;
//! use rust_decimal_macros::dec;
//!
//! let rules = FiscalRules::default();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let input = CarTaxInput::new(1998).location("Craiova").registration_year(2008);
//! let result = CarTaxCalculator::new(&rules).calculate(&input, today).unwrap();
//! assert_eq!(result.final_tax, dec!(117));
//! ```

mod calculator;
mod tco;
mod vehicle;

pub use calculator::{
    COMPARED_LOCATIONS, CarTaxCalculator, CarTaxInput, CarTaxResult, FleetEntry, FleetResult,
    LocationComparison, LocationTax, MIN_REGISTRATION_YEAR,
};
pub use tco::{TcoInput, TcoResult};
pub use vehicle::{LOCATION_COEFFICIENTS, VehicleType, location_coefficient};
