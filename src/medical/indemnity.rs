use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::codes::MedicalCode;
use crate::core::{FiscalError, FiscalRules, ensure_positive, percent, round_money};

/// Most days a month of the reference period can contribute.
const MAX_WORKED_DAYS: u32 = 31;

/// Gross salary of one month of the reference period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalary {
    pub gross: Decimal,
    /// Days worked that month; `None` or zero uses the configured default.
    #[serde(default)]
    pub worked_days: Option<u32>,
}

impl MonthlySalary {
    pub fn new(gross: Decimal) -> Self {
        Self {
            gross,
            worked_days: None,
        }
    }

    pub fn with_days(gross: Decimal, worked_days: u32) -> Self {
        Self {
            gross,
            worked_days: Some(worked_days),
        }
    }
}

/// Medical leave indemnity breakdown. Amounts in RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalLeaveResult {
    pub code: MedicalCode,
    /// Indemnity percent applied.
    pub rate: Decimal,
    /// Months of the reference period that had income.
    pub contribution_months: u32,
    pub average_gross: Decimal,
    /// Ceiling of the calculation base (12 minimum salaries by default).
    pub max_base: Decimal,
    pub calculation_base: Decimal,
    /// The average gross salary exceeded the ceiling.
    pub capped: bool,
    pub daily_average: Decimal,
    pub daily_benefit: Decimal,
    pub leave_days: u32,
    pub employer_days: u32,
    pub state_days: u32,
    pub employer_amount: Decimal,
    pub state_amount: Decimal,
    pub total_gross: Decimal,
    pub cas: Decimal,
    pub cass: Decimal,
    pub income_tax: Decimal,
    pub net_amount: Decimal,
}

/// Compute the indemnity for `leave_days` days of leave.
///
/// `salaries` is the reference period; months with no positive gross are
/// ignored but at least `minimum_months` must remain.
pub fn calculate_indemnity(
    code: MedicalCode,
    leave_days: u32,
    salaries: &[MonthlySalary],
    rules: &FiscalRules,
) -> Result<MedicalLeaveResult, FiscalError> {
    let m = &rules.medical_leave;

    if leave_days == 0 {
        return Err(FiscalError::InvalidInput(
            "leave days must be positive".into(),
        ));
    }

    let valid: Vec<&MonthlySalary> = salaries.iter().filter(|s| s.gross > Decimal::ZERO).collect();
    for s in &valid {
        ensure_positive("monthly gross salary", s.gross)?;
        if let Some(days) = s.worked_days.filter(|&d| d > MAX_WORKED_DAYS) {
            return Err(FiscalError::InvalidInput(format!(
                "worked days must be at most {MAX_WORKED_DAYS}, got {days}"
            )));
        }
    }
    let months = valid.len() as u32;
    if months < m.minimum_months {
        return Err(FiscalError::InsufficientContributions {
            required: m.minimum_months,
            found: months,
        });
    }

    let n = Decimal::from(months);
    let total_gross: Decimal = valid.iter().map(|s| s.gross).sum();
    let total_days: u32 = valid
        .iter()
        .map(|s| match s.worked_days {
            Some(d) if d > 0 => d,
            _ => m.default_days_per_month,
        })
        .sum();
    let average_gross = total_gross / n;

    let max_base = rules.salary.minimum_salary * m.max_base_salaries;
    let capped = average_gross > max_base;
    let calculation_base = average_gross.min(max_base);

    let days_per_month = Decimal::from(total_days) / n;
    let daily_average = calculation_base / days_per_month;
    let rate = code.rate(m);
    let daily_benefit = daily_average * rate / dec!(100);

    let employer_days = leave_days.min(m.employer_days);
    let state_days = leave_days - employer_days;
    let employer_amount = round_money(daily_benefit * Decimal::from(employer_days));
    let state_amount = round_money(daily_benefit * Decimal::from(state_days));
    let total = employer_amount + state_amount;

    let cas = round_money(percent(total, m.cas_rate));
    let cass = if m.apply_cass {
        round_money(percent(total, m.cass_rate))
    } else {
        Decimal::ZERO
    };
    let tax_base = (total - cas - cass - m.personal_deduction).max(Decimal::ZERO);
    let income_tax = round_money(percent(tax_base, m.income_tax_rate));
    let net_amount = total - cas - cass - income_tax;

    tracing::debug!(
        code = code.code(),
        leave_days,
        months,
        %total,
        %net_amount,
        "medical leave indemnity"
    );

    Ok(MedicalLeaveResult {
        code,
        rate,
        contribution_months: months,
        average_gross: round_money(average_gross),
        max_base,
        calculation_base: round_money(calculation_base),
        capped,
        daily_average: round_money(daily_average),
        daily_benefit: round_money(daily_benefit),
        leave_days,
        employer_days,
        state_days,
        employer_amount,
        state_amount,
        total_gross: total,
        cas,
        cass,
        income_tax,
        net_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_months(gross: Decimal) -> Vec<MonthlySalary> {
        (0..6).map(|_| MonthlySalary::new(gross)).collect()
    }

    #[test]
    fn ordinary_illness_ten_days() {
        let r = calculate_indemnity(
            MedicalCode::Ordinary,
            10,
            &six_months(dec!(6000)),
            &FiscalRules::default(),
        )
        .unwrap();
        assert_eq!(r.average_gross, dec!(6000));
        assert!(!r.capped);
        assert_eq!(r.daily_average, dec!(272.73));
        assert_eq!(r.daily_benefit, dec!(204.55));
        assert_eq!(r.employer_days, 5);
        assert_eq!(r.state_days, 5);
        assert_eq!(r.employer_amount, dec!(1022.73));
        assert_eq!(r.total_gross, dec!(2045.46));
        assert_eq!(r.cas, dec!(511.37));
        assert_eq!(r.cass, dec!(0));
        assert_eq!(r.income_tax, dec!(102.41));
        assert_eq!(r.net_amount, dec!(1431.68));
    }

    #[test]
    fn short_leave_paid_by_employer_only() {
        let r = calculate_indemnity(
            MedicalCode::Ordinary,
            3,
            &six_months(dec!(6000)),
            &FiscalRules::default(),
        )
        .unwrap();
        assert_eq!(r.employer_days, 3);
        assert_eq!(r.state_days, 0);
        assert_eq!(r.state_amount, dec!(0));
    }

    #[test]
    fn high_salary_capped() {
        let r = calculate_indemnity(
            MedicalCode::Emergency,
            5,
            &six_months(dec!(60000)),
            &FiscalRules::default(),
        )
        .unwrap();
        assert!(r.capped);
        assert_eq!(r.max_base, dec!(48600));
        assert_eq!(r.calculation_base, dec!(48600));
        assert_eq!(r.rate, dec!(100));
    }

    #[test]
    fn months_without_income_are_ignored() {
        let mut salaries = six_months(dec!(5000));
        salaries[2].gross = dec!(0);
        let err = calculate_indemnity(
            MedicalCode::Ordinary,
            5,
            &salaries,
            &FiscalRules::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FiscalError::InsufficientContributions {
                required: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn zero_days_rejected() {
        let err = calculate_indemnity(
            MedicalCode::Ordinary,
            0,
            &six_months(dec!(5000)),
            &FiscalRules::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));
    }

    #[test]
    fn cass_withheld_when_configured() {
        let mut rules = FiscalRules::default();
        rules.medical_leave.apply_cass = true;
        let r = calculate_indemnity(MedicalCode::Ordinary, 10, &six_months(dec!(6000)), &rules)
            .unwrap();
        assert_eq!(r.cass, dec!(204.55));
    }

    #[test]
    fn worked_days_beyond_a_month_rejected() {
        let salaries: Vec<_> = (0..6)
            .map(|_| MonthlySalary::with_days(dec!(5000), u32::MAX))
            .collect();
        let err = calculate_indemnity(MedicalCode::Ordinary, 10, &salaries, &FiscalRules::default())
            .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));

        let salaries: Vec<_> = (0..6)
            .map(|_| MonthlySalary::with_days(dec!(5000), 31))
            .collect();
        assert!(calculate_indemnity(MedicalCode::Ordinary, 10, &salaries, &FiscalRules::default()).is_ok());
    }

    #[test]
    fn huge_salary_rejected() {
        let err = calculate_indemnity(
            MedicalCode::Ordinary,
            10,
            &six_months(Decimal::MAX),
            &FiscalRules::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FiscalError::InvalidInput(_)));
    }
}
