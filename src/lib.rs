//! # impozit
//!
//! Romanian fiscal calculators: payroll brut/net, PFA taxation (real
//! system vs. norma de venit), medical-leave indemnity, car tax,
//! e-Factura deadlines and penalties, and EU261 flight compensation,
//! plus a working-day / legal-holiday calendar.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every calculator is a pure function of its inputs, a [`FiscalRules`]
//! rates table and, where dates matter, an explicit `today`.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "salary")] {
//! use impozit::core::FiscalRules;
//! use impozit::salary::{SalaryDirection, calculate_salary};
//! use rust_decimal_macros::dec;
//!
//! let rules = FiscalRules::for_year(2026);
//! let pay = calculate_salary(SalaryDirection::GrossToNet, dec!(5000), &rules).unwrap();
//! assert_eq!(pay.net, dec!(2976.00));
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rates table, errors, holiday calendar, working days |
//! | `salary` | Gross ↔ net payroll |
//! | `pfa` | PFA real system, norma de venit, comparison |
//! | `medical` | Medical-leave indemnity |
//! | `cartax` | Car tax, location comparison, fleet, cost of ownership |
//! | `efactura` | e-Factura deadlines and penalties |
//! | `flight` | EU261 flight compensation |
//! | `cli` | The `impozit` command-line binary |
//! | `all` | Every calculator |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "salary")]
pub mod salary;

#[cfg(feature = "pfa")]
pub mod pfa;

#[cfg(feature = "medical")]
pub mod medical;

#[cfg(feature = "cartax")]
pub mod cartax;

#[cfg(feature = "efactura")]
pub mod efactura;

#[cfg(feature = "flight")]
pub mod flight;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
