//! Payroll: gross ↔ net salary conversion.
//!
//! Employee contributions (CAS, CASS) are withheld from the gross salary;
//! income tax is applied to what remains after the personal deduction.
//! The employer additionally owes CAM on top of the gross.
//!
//! # Example
//!
//! ```
//! use impozit::core::FiscalRules;
//! use impozit::salary::*;
//! use rust_decimal_macros::dec;
//!
//! let rules = FiscalRules::default();
//! let pay = calculate_salary(SalaryDirection::NetToGross, dec!(2976), &rules).unwrap();
//! assert_eq!(pay.gross, dec!(5000));
//! ```

mod payroll;

pub use payroll::{SalaryBreakdown, SalaryDirection, calculate_salary, gross_to_net, net_to_gross};
