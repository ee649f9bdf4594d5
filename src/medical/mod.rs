//! Medical leave (concediu medical) indemnity.
//!
//! The indemnity is a percentage of the average gross salary of the last
//! six months, capped at 12 minimum salaries. The first days are paid by
//! the employer, the rest by the health insurance fund (FNUASS).

mod codes;
mod indemnity;

pub use codes::MedicalCode;
pub use indemnity::{MedicalLeaveResult, MonthlySalary, calculate_indemnity};
