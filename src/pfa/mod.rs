//! PFA (persoană fizică autorizată) taxation.
//!
//! Two regimes are supported:
//! - **Sistem real**: tax on actual net income (revenue minus expenses)
//! - **Normă de venit**: tax on a flat presumed income set per activity and county
//!
//! Contributions are capped in multiples of the gross minimum salary:
//! - CASS base: clamped to 6–60 minimum salaries
//! - CAS: optional below 12 salaries, due on 12 salaries below 24, on 24 above
//!
//! # Example
//!
//! ```
//! use impozit::core::FiscalRules;
//! use impozit::pfa::*;
//! use rust_decimal_macros::dec;
//!
//! let rules = FiscalRules::default();
//! let cmp = compare(dec!(100_000), dec!(20_000), dec!(30_000), &rules).unwrap();
//! assert_eq!(cmp.recommended, TaxSystem::Norm);
//! ```

mod compare;
mod system;

pub use compare::{PfaComparison, compare};
pub use system::{CasStatus, PfaResult, PfaThresholds, TaxSystem, calculate_norm, calculate_real};
