use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{FiscalRules, HolidayCalendar, add_business_days};

/// Where an invoice stands relative to its transmission deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    /// Deadline passed.
    Overdue,
    /// Due today or tomorrow.
    Urgent,
    Ok,
}

impl DeadlineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "ÎNTÂRZIAT",
            Self::Urgent => "URGENT",
            Self::Ok => "OK",
        }
    }
}

/// Transmission deadline of one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    pub invoice_date: NaiveDate,
    pub deadline: NaiveDate,
    pub business_days: u32,
    pub is_overdue: bool,
    /// Negative once the deadline has passed.
    pub days_until_deadline: i64,
    pub days_overdue: i64,
    pub status: DeadlineStatus,
}

/// Deadline for transmitting an invoice issued on `invoice_date`.
///
/// Counts `business_days` working days after the invoice date, skipping
/// weekends and every holiday in `calendar`.
pub fn calculate_deadline(
    invoice_date: NaiveDate,
    today: NaiveDate,
    rules: &FiscalRules,
    calendar: &HolidayCalendar,
) -> DeadlineResult {
    let business_days = rules.efactura.business_days;
    let deadline = add_business_days(invoice_date, business_days, calendar);
    let days_until_deadline = (deadline - today).num_days();
    let is_overdue = today > deadline;
    let status = if is_overdue {
        DeadlineStatus::Overdue
    } else if days_until_deadline <= 1 {
        DeadlineStatus::Urgent
    } else {
        DeadlineStatus::Ok
    };

    tracing::debug!(%invoice_date, %deadline, days_until_deadline, "e-Factura deadline");

    DeadlineResult {
        invoice_date,
        deadline,
        business_days,
        is_overdue,
        days_until_deadline,
        days_overdue: if is_overdue { -days_until_deadline } else { 0 },
        status,
    }
}

/// An invoice to check, optionally numbered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRef {
    #[serde(default)]
    pub number: Option<String>,
    pub date: NaiveDate,
}

impl InvoiceRef {
    pub fn new(date: NaiveDate) -> Self {
        Self { number: None, date }
    }

    pub fn numbered(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: Some(number.into()),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDeadline {
    /// 1-based position in the batch.
    pub index: usize,
    pub number: String,
    #[serde(flatten)]
    pub deadline: DeadlineResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineSummary {
    pub total: usize,
    pub overdue: usize,
    pub urgent: usize,
    pub ok: usize,
}

/// Deadlines for a batch of invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCheck {
    pub invoices: Vec<InvoiceDeadline>,
    pub summary: DeadlineSummary,
    pub message: String,
}

/// Check every invoice of a batch against its deadline.
pub fn check_invoices(
    invoices: &[InvoiceRef],
    today: NaiveDate,
    rules: &FiscalRules,
    calendar: &HolidayCalendar,
) -> InvoiceCheck {
    let invoices: Vec<InvoiceDeadline> = invoices
        .iter()
        .enumerate()
        .map(|(i, inv)| InvoiceDeadline {
            index: i + 1,
            number: inv
                .number
                .clone()
                .unwrap_or_else(|| format!("Factura #{}", i + 1)),
            deadline: calculate_deadline(inv.date, today, rules, calendar),
        })
        .collect();

    let mut summary = DeadlineSummary {
        total: invoices.len(),
        ..Default::default()
    };
    for inv in &invoices {
        match inv.deadline.status {
            DeadlineStatus::Overdue => summary.overdue += 1,
            DeadlineStatus::Urgent => summary.urgent += 1,
            DeadlineStatus::Ok => summary.ok += 1,
        }
    }

    let message = if summary.overdue > 0 {
        format!("{} invoice(s) are past the transmission deadline", summary.overdue)
    } else if summary.urgent > 0 {
        format!("{} invoice(s) are due by tomorrow", summary.urgent)
    } else {
        "All invoices are within the deadline".to_string()
    };

    InvoiceCheck {
        invoices,
        summary,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn plain_week() {
        let rules = FiscalRules::default();
        let cal = HolidayCalendar::romania();
        // Monday 2026-03-02 -> Monday 2026-03-09
        let r = calculate_deadline(d(2026, 3, 2), d(2026, 3, 3), &rules, &cal);
        assert_eq!(r.deadline, d(2026, 3, 9));
        assert_eq!(r.days_until_deadline, 6);
        assert_eq!(r.status, DeadlineStatus::Ok);
    }

    #[test]
    fn easter_holidays_are_skipped() {
        let rules = FiscalRules::default();
        let cal = HolidayCalendar::romania();
        let r = calculate_deadline(d(2026, 4, 9), d(2026, 4, 9), &rules, &cal);
        assert_eq!(r.deadline, d(2026, 4, 20));
    }

    #[test]
    fn overdue_and_urgent() {
        let rules = FiscalRules::default();
        let cal = HolidayCalendar::romania();
        let r = calculate_deadline(d(2026, 3, 2), d(2026, 3, 12), &rules, &cal);
        assert!(r.is_overdue);
        assert_eq!(r.days_overdue, 3);
        assert_eq!(r.status, DeadlineStatus::Overdue);

        let r = calculate_deadline(d(2026, 3, 2), d(2026, 3, 9), &rules, &cal);
        assert!(!r.is_overdue);
        assert_eq!(r.days_until_deadline, 0);
        assert_eq!(r.status, DeadlineStatus::Urgent);
    }

    #[test]
    fn batch_labels_and_summary() {
        let rules = FiscalRules::default();
        let cal = HolidayCalendar::romania();
        let batch = [
            InvoiceRef::new(d(2026, 3, 2)),
            InvoiceRef::numbered("F-17", d(2026, 3, 10)),
        ];
        let check = check_invoices(&batch, d(2026, 3, 12), &rules, &cal);
        assert_eq!(check.invoices[0].number, "Factura #1");
        assert_eq!(check.invoices[1].number, "F-17");
        assert_eq!(check.summary.overdue, 1);
        assert_eq!(check.summary.ok, 1);
        assert!(check.message.starts_with("1 invoice(s)"));
    }
}
