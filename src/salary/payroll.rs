use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{FiscalError, FiscalRules, SalaryRules, ensure_positive, percent, round_money};

/// Upper bound on the 0.01 RON corrections applied after inverting net → gross.
const MAX_NUDGE_STEPS: u32 = 100;

/// Which amount the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SalaryDirection {
    /// Input is the gross (brut) salary.
    GrossToNet,
    /// Input is the desired net salary.
    NetToGross,
}

/// Full monthly payroll breakdown. All amounts in RON, rounded to bani.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub direction: SalaryDirection,
    /// Salariu brut.
    pub gross: Decimal,
    /// Salariu net (take-home).
    pub net: Decimal,
    /// Pension contribution withheld from the employee.
    pub cas: Decimal,
    /// Health contribution withheld from the employee.
    pub cass: Decimal,
    pub personal_deduction: Decimal,
    /// Income tax base after contributions and the personal deduction (never negative).
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    /// Employer work-insurance contribution.
    pub cam: Decimal,
    /// Gross salary plus CAM.
    pub employer_cost: Decimal,
    pub cas_rate: Decimal,
    pub cass_rate: Decimal,
    pub income_tax_rate: Decimal,
}

/// Convert a salary in the given direction.
pub fn calculate_salary(
    direction: SalaryDirection,
    amount: Decimal,
    rules: &FiscalRules,
) -> Result<SalaryBreakdown, FiscalError> {
    match direction {
        SalaryDirection::GrossToNet => gross_to_net(amount, &rules.salary),
        SalaryDirection::NetToGross => net_to_gross(amount, &rules.salary),
    }
}

/// Gross → net.
pub fn gross_to_net(gross: Decimal, rules: &SalaryRules) -> Result<SalaryBreakdown, FiscalError> {
    let gross = ensure_positive("gross salary", round_money(gross))?;
    let pay = breakdown(gross, rules, SalaryDirection::GrossToNet);
    tracing::debug!(%gross, net = %pay.net, "gross to net");
    Ok(pay)
}

/// Net → gross.
///
/// Inverts the gross → net formula, then raises the gross by single bani
/// until the recomputed net reaches the requested one, so the reported
/// components always reconcile with the reported net.
pub fn net_to_gross(net: Decimal, rules: &SalaryRules) -> Result<SalaryBreakdown, FiscalError> {
    let target = ensure_positive("net salary", round_money(net))?;

    let kept = Decimal::ONE - (rules.cas_rate + rules.cass_rate) / dec!(100);
    if kept <= Decimal::ZERO {
        return Err(FiscalError::Rules(
            "cas_rate + cass_rate leave no income to pay".into(),
        ));
    }
    let tax = rules.income_tax_rate / dec!(100);
    let deduction = rules.personal_deduction;

    // Assume income tax is due; fall back when the deduction swallows the base.
    let mut gross = if tax < Decimal::ONE {
        (target - deduction * tax) / (kept * (Decimal::ONE - tax))
    } else {
        target / kept
    };
    if gross * kept <= deduction {
        gross = target / kept;
    }
    let mut gross = round_money(gross);

    let mut pay = breakdown(gross, rules, SalaryDirection::NetToGross);
    let mut steps = 0;
    while pay.net < target && steps < MAX_NUDGE_STEPS {
        gross += dec!(0.01);
        pay = breakdown(gross, rules, SalaryDirection::NetToGross);
        steps += 1;
    }
    if pay.net < target {
        return Err(FiscalError::Rules(format!(
            "no gross salary yields a net of {target} with the configured rates"
        )));
    }
    tracing::debug!(%target, %gross, net = %pay.net, steps, "net to gross");
    Ok(pay)
}

fn breakdown(gross: Decimal, rules: &SalaryRules, direction: SalaryDirection) -> SalaryBreakdown {
    let cas = round_money(percent(gross, rules.cas_rate));
    let cass = round_money(percent(gross, rules.cass_rate));
    let taxable_income = (gross - cas - cass - rules.personal_deduction).max(Decimal::ZERO);
    let income_tax = round_money(percent(taxable_income, rules.income_tax_rate));
    let net = gross - cas - cass - income_tax;
    let cam = round_money(percent(gross, rules.cam_rate));

    SalaryBreakdown {
        direction,
        gross,
        net,
        cas,
        cass,
        personal_deduction: rules.personal_deduction,
        taxable_income,
        income_tax,
        cam,
        employer_cost: gross + cam,
        cas_rate: rules.cas_rate,
        cass_rate: rules.cass_rate,
        income_tax_rate: rules.income_tax_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SalaryRules {
        SalaryRules::default()
    }

    #[test]
    fn gross_5000() {
        let p = gross_to_net(dec!(5000), &rules()).unwrap();
        assert_eq!(p.cas, dec!(1250));
        assert_eq!(p.cass, dec!(500));
        assert_eq!(p.taxable_income, dec!(2740));
        assert_eq!(p.income_tax, dec!(274));
        assert_eq!(p.net, dec!(2976));
        assert_eq!(p.cam, dec!(112.50));
        assert_eq!(p.employer_cost, dec!(5112.50));
    }

    #[test]
    fn minimum_wage() {
        let p = gross_to_net(dec!(4050), &rules()).unwrap();
        assert_eq!(p.cas, dec!(1012.50));
        assert_eq!(p.cass, dec!(405));
        assert_eq!(p.income_tax, dec!(212.25));
        assert_eq!(p.net, dec!(2420.25));
    }

    #[test]
    fn deduction_larger_than_base_means_no_tax() {
        let p = gross_to_net(dec!(700), &rules()).unwrap();
        assert_eq!(p.taxable_income, dec!(0));
        assert_eq!(p.income_tax, dec!(0));
        assert_eq!(p.net, dec!(455));
    }

    #[test]
    fn net_to_gross_exact() {
        let p = net_to_gross(dec!(2976), &rules()).unwrap();
        assert_eq!(p.gross, dec!(5000));
        assert_eq!(p.net, dec!(2976));
        assert_eq!(p.direction, SalaryDirection::NetToGross);
    }

    #[test]
    fn net_to_gross_with_rounding() {
        let p = net_to_gross(dec!(3000), &rules()).unwrap();
        assert_eq!(p.gross, dec!(5041.03));
        assert_eq!(p.net, dec!(3000.00));
    }

    #[test]
    fn net_to_gross_below_deduction() {
        let p = net_to_gross(dec!(455), &rules()).unwrap();
        assert_eq!(p.gross, dec!(700));
        assert_eq!(p.income_tax, dec!(0));
    }

    #[test]
    fn non_positive_rejected() {
        assert!(gross_to_net(dec!(0), &rules()).is_err());
        assert!(net_to_gross(dec!(-100), &rules()).is_err());
    }

    #[test]
    fn sub_ban_amount_rejected() {
        assert!(gross_to_net(dec!(0.001), &rules()).is_err());
        assert!(net_to_gross(dec!(0.004), &rules()).is_err());
        assert_eq!(gross_to_net(dec!(0.005), &rules()).unwrap().gross, dec!(0.01));
    }

    #[test]
    fn unreachable_net_is_an_error() {
        let mut r = rules();
        r.income_tax_rate = dec!(100);
        let err = net_to_gross(dec!(2976), &r).unwrap_err();
        assert!(matches!(err, FiscalError::Rules(_)));
    }

    #[test]
    fn huge_amounts_rejected() {
        let huge = dec!(10_000_000_000_000_000_000_000_000_000);
        assert!(gross_to_net(huge, &rules()).is_err());
        assert!(net_to_gross(huge, &rules()).is_err());
    }
}
