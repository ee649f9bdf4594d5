//! e-Factura transmission deadlines and fines.
//!
//! Invoices must reach the national e-invoicing system within a number of
//! working days (5 by default) after issue. Weekends and the legal holidays
//! of the [`HolidayCalendar`](crate::core::HolidayCalendar) do not count.
//!
//! ```
//! use chrono::NaiveDate;
//! use impozit::core::{FiscalRules, HolidayCalendar};
//! use impozit::efactura::{DeadlineStatus, calculate_deadline};
//!
//! let rules = FiscalRules::default();
//! let calendar = HolidayCalendar::romania();
//! let issued = NaiveDate::from_ymd_opt(2026, 4, 9).unwrap();
//! let r = calculate_deadline(issued, issued, &rules, &calendar);
//! assert_eq!(r.deadline, NaiveDate::from_ymd_opt(2026, 4, 20).unwrap());
//! assert_eq!(r.status, DeadlineStatus::Ok);
//! ```

mod company;
mod deadline;
mod penalty;

pub use company::CompanySize;
pub use deadline::{
    DeadlineResult, DeadlineStatus, DeadlineSummary, InvoiceCheck, InvoiceDeadline, InvoiceRef,
    calculate_deadline, check_invoices,
};
pub use penalty::{FineRange, PenaltyResult, calculate_penalty};
