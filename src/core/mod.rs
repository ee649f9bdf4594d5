//! Rates table, errors, money helpers and the working-day calendar.
//!
//! Everything the individual calculators share lives here: the
//! [`FiscalRules`] rates object, the [`FiscalError`] type and the
//! Romanian legal-holiday [`HolidayCalendar`].

mod calendar;
mod error;
mod holidays;
mod money;
mod rules;
mod text;
mod validation;

pub use calendar::*;
pub use error::*;
pub use money::*;
pub use rules::*;
pub use text::fold_key;
pub use validation::*;
