//! Plain-text rendering of calculator results.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::cartax::{CarTaxResult, LocationComparison, TcoResult};
use crate::core::{MonthSummary, YearSummary};
use crate::efactura::{DeadlineResult, InvoiceCheck, PenaltyResult};
use crate::flight::CompensationResult;
use crate::medical::MedicalLeaveResult;
use crate::pfa::{PfaComparison, PfaResult};
use crate::salary::SalaryBreakdown;

/// A result that can be printed as a human-readable report.
pub trait Report {
    fn render(&self) -> String;
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{label:<28} {value}");
}

fn ron(amount: Decimal) -> String {
    format!("{amount:.2} RON")
}

impl Report for SalaryBreakdown {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Gross salary", ron(self.gross));
        line(&mut out, &format!("CAS ({}%)", self.cas_rate), ron(self.cas));
        line(&mut out, &format!("CASS ({}%)", self.cass_rate), ron(self.cass));
        line(&mut out, "Personal deduction", ron(self.personal_deduction));
        line(&mut out, "Taxable income", ron(self.taxable_income));
        line(
            &mut out,
            &format!("Income tax ({}%)", self.income_tax_rate),
            ron(self.income_tax),
        );
        line(&mut out, "Net salary", ron(self.net));
        line(&mut out, "CAM (employer)", ron(self.cam));
        line(&mut out, "Employer cost", ron(self.employer_cost));
        out
    }
}

impl Report for PfaResult {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.system.display_name());
        line(&mut out, "Revenue", ron(self.revenue));
        if let Some(expenses) = self.expenses {
            line(&mut out, "Expenses", ron(expenses));
        }
        if let Some(net_income) = self.net_income {
            line(&mut out, "Net income", ron(net_income));
        }
        if let Some(norm) = self.norm_value {
            line(&mut out, "Income norm", ron(norm));
        }
        line(&mut out, "Income tax", ron(self.income_tax));
        line(&mut out, "CASS", ron(self.cass));
        line(&mut out, "CAS", format!("{} ({})", ron(self.cas), self.cas_status.description()));
        line(&mut out, "Total taxes", ron(self.total_taxes));
        line(&mut out, "Net remaining", ron(self.net_remaining));
        line(&mut out, "Effective rate", format!("{}%", self.effective_rate));
        if self.over_limit {
            if let Some(limit) = self.norm_limit_ron {
                line(&mut out, "Norm revenue ceiling", format!("{} (exceeded)", ron(limit)));
            }
        }
        out
    }
}

impl Report for PfaComparison {
    fn render(&self) -> String {
        let mut out = self.real.render();
        out.push('\n');
        out.push_str(&self.norm.render());
        out.push('\n');
        line(&mut out, "Recommended", self.recommended.display_name());
        line(&mut out, "Savings", ron(self.savings));
        if let Some(note) = &self.note {
            let _ = writeln!(out, "Note: {note}");
        }
        out
    }
}

impl Report for MedicalLeaveResult {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Certificate code", self.code);
        line(&mut out, "Indemnity rate", format!("{}%", self.rate));
        line(&mut out, "Average gross", ron(self.average_gross));
        line(
            &mut out,
            "Calculation base",
            if self.capped {
                format!("{} (capped)", ron(self.calculation_base))
            } else {
                ron(self.calculation_base)
            },
        );
        line(&mut out, "Daily benefit", ron(self.daily_benefit));
        line(
            &mut out,
            &format!("Employer ({} days)", self.employer_days),
            ron(self.employer_amount),
        );
        line(
            &mut out,
            &format!("FNUASS ({} days)", self.state_days),
            ron(self.state_amount),
        );
        line(&mut out, "Total gross", ron(self.total_gross));
        line(&mut out, "CAS", ron(self.cas));
        line(&mut out, "CASS", ron(self.cass));
        line(&mut out, "Income tax", ron(self.income_tax));
        line(&mut out, "Net indemnity", ron(self.net_amount));
        out
    }
}

impl Report for CarTaxResult {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} cc, {} ({})",
            self.vehicle_type_name, self.engine_cc, self.location, self.registration_year
        );
        for step in &self.breakdown {
            let _ = writeln!(out, "  {step}");
        }
        if !self.tax_exempt {
            line(&mut out, "Quarterly", format!("{} RON", self.quarterly));
            line(&mut out, "Monthly", format!("{} RON", self.monthly));
        }
        out
    }
}

impl Report for LocationComparison {
    fn render(&self) -> String {
        let mut out = String::new();
        for r in &self.results {
            line(&mut out, &r.location, format!("{} RON (×{})", r.tax, r.coefficient));
        }
        line(&mut out, "Savings", format!("{} RON", self.savings));
        out
    }
}

impl Report for TcoResult {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Car tax", ron(self.car_tax));
        line(&mut out, "Fuel", ron(self.fuel));
        line(&mut out, "RCA", ron(self.rca));
        line(&mut out, "ITP", ron(self.itp));
        line(&mut out, "Maintenance", ron(self.maintenance));
        line(&mut out, "Tyres", ron(self.tyres));
        line(&mut out, "Parking", ron(self.parking));
        line(&mut out, "Total (without CASCO)", ron(self.total_without_casco));
        line(&mut out, "CASCO", ron(self.casco));
        line(&mut out, "Total (with CASCO)", ron(self.total_with_casco));
        line(&mut out, "Per month", ron(self.monthly_without_casco));
        line(&mut out, "Per km", ron(self.cost_per_km));
        out
    }
}

impl Report for DeadlineResult {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Invoice date", self.invoice_date);
        line(
            &mut out,
            &format!("Deadline (+{} working days)", self.business_days),
            self.deadline,
        );
        if self.is_overdue {
            line(&mut out, "Days overdue", self.days_overdue);
        } else {
            line(&mut out, "Days left", self.days_until_deadline);
        }
        line(&mut out, "Status", self.status.label());
        out
    }
}

impl Report for InvoiceCheck {
    fn render(&self) -> String {
        let mut out = String::new();
        for inv in &self.invoices {
            let _ = writeln!(
                out,
                "{:>3}. {:<16} {}  {}",
                inv.index,
                inv.number,
                inv.deadline.deadline,
                inv.deadline.status.label()
            );
        }
        let _ = writeln!(out, "{}", self.message);
        out
    }
}

impl Report for PenaltyResult {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Company", self.company_size);
        line(
            &mut out,
            "Fine per invoice",
            format!("{} - {} RON", self.fine_range.min, self.fine_range.max),
        );
        line(
            &mut out,
            &format!("Estimated total ({} invoices)", self.invoice_count),
            format!(
                "{} - {} RON",
                self.total_estimated_fine.min, self.total_estimated_fine.max
            ),
        );
        if let Some(warning) = &self.warning {
            let _ = writeln!(out, "Warning: {warning}");
        }
        out
    }
}

impl Report for CompensationResult {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Eligible", if self.eligible { "yes" } else { "no" });
        line(&mut out, "Compensation", format!("{} EUR", self.compensation));
        if self.reduction_applied {
            line(&mut out, "Reduction", "50% (delay under 4 h)");
        }
        if let Some(p) = &self.prescription {
            line(&mut out, "Claim deadline", p.prescription_date);
        }
        let _ = writeln!(out, "{}", self.reason);
        for (i, step) in self.next_steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", i + 1);
        }
        out
    }
}

impl Report for MonthSummary {
    fn render(&self) -> String {
        let mut out = String::new();
        line(&mut out, "Month", &self.name);
        line(&mut out, "Working days", self.working_days);
        line(&mut out, "Weekend days", self.weekend_days);
        line(&mut out, "Holidays on weekdays", self.holiday_days);
        for h in &self.holidays {
            let _ = writeln!(out, "  {} {}", h.date, h.name);
        }
        out
    }
}

impl Report for YearSummary {
    fn render(&self) -> String {
        let mut out = String::new();
        for m in &self.months {
            let _ = writeln!(out, "{:<12} {:>3}", m.name, m.working_days);
        }
        line(&mut out, "Working days", self.total_working_days);
        line(&mut out, "Holidays on weekdays", self.total_holidays);
        line(&mut out, "Weekend days", self.total_weekends);
        out
    }
}
